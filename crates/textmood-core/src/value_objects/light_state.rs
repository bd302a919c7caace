//! Light state payload for a Philips Hue bridge

use serde::{Deserialize, Serialize};

use super::DisplayColor;

/// Maximum Hue `hue` value (a full turn of the color wheel)
pub const HUE_MAX: f64 = 65535.0;
/// Maximum Hue `sat` / `bri` value
pub const HUE_LEVEL_MAX: f64 = 254.0;

/// Body of a Hue group action / light state request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HueLightState {
    pub on: bool,
    pub hue: u16,
    pub sat: u8,
    pub bri: u8,
}

impl HueLightState {
    /// Convert a display color into Hue's HSB coordinates
    pub fn from_color(color: DisplayColor) -> Self {
        let (hue, saturation, value) = color.to_hsv();

        Self {
            on: true,
            hue: (hue * HUE_MAX / 360.0).round().clamp(0.0, HUE_MAX) as u16,
            // sat 0 is white
            sat: (saturation * HUE_LEVEL_MAX).round().clamp(0.0, HUE_LEVEL_MAX) as u8,
            // bri 0 is not "off" on the bridge, but it is the dimmest setting; keep it visible
            bri: (value * HUE_LEVEL_MAX).round().clamp(1.0, HUE_LEVEL_MAX) as u8,
        }
    }
}

impl From<DisplayColor> for HueLightState {
    fn from(color: DisplayColor) -> Self {
        Self::from_color(color)
    }
}
