//! Display color derived from an aggregate mood
//!
//! Components are kept as `f64` in `0.0..=1.0`; conversion to 8-bit RGB and
//! to HSV (for the light bridge) happens at the edges.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SentimentScore;

/// RGB color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl DisplayColor {
    /// Color shown while the mood is unknown
    pub const NEUTRAL: Self = Self::new(0.5, 0.5, 0.5);

    /// Create a color; components are clamped to `0.0..=1.0` on conversion
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Map a sentiment score onto a red (negative) to green (positive) ramp
    ///
    /// `red = 1 - s`, `green = s`, `blue = 0`. The unknown sentinel maps to
    /// [`Self::NEUTRAL`].
    pub fn from_score(score: SentimentScore) -> Self {
        match score.known() {
            Some(s) => Self::new(1.0 - s, s, 0.0),
            None => Self::NEUTRAL,
        }
    }

    /// Convert to 8-bit RGB (rounding half away from zero)
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8 {
            red: to_channel(self.red),
            green: to_channel(self.green),
            blue: to_channel(self.blue),
        }
    }

    /// Hex notation, e.g. `#808000`
    pub fn to_hex(self) -> String {
        let Rgb8 { red, green, blue } = self.to_rgb8();
        format!("#{red:02X}{green:02X}{blue:02X}")
    }

    /// CSS `rgba()` notation with the given alpha
    pub fn to_css_rgba(self, alpha: f64) -> String {
        let Rgb8 { red, green, blue } = self.to_rgb8();
        format!("rgba({red}, {green}, {blue}, {})", alpha.clamp(0.0, 1.0))
    }

    /// Convert to HSV: hue in degrees `0.0..360.0`, saturation and value in `0.0..=1.0`
    pub fn to_hsv(self) -> (f64, f64, f64) {
        let r = self.red.clamp(0.0, 1.0);
        let g = self.green.clamp(0.0, 1.0);
        let b = self.blue.clamp(0.0, 1.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta <= f64::EPSILON {
            0.0
        } else if (max - r).abs() <= f64::EPSILON {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if (max - g).abs() <= f64::EPSILON {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        let saturation = if max <= f64::EPSILON { 0.0 } else { delta / max };

        (hue, saturation, max)
    }
}

impl Default for DisplayColor {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<SentimentScore> for DisplayColor {
    fn from(score: SentimentScore) -> Self {
        Self::from_score(score)
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn to_channel(component: f64) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_midpoint_color() {
        let color = DisplayColor::from_score(SentimentScore::new(0.5));
        assert_eq!(color, DisplayColor::new(0.5, 0.5, 0.0));
        assert_eq!(
            color.to_rgb8(),
            Rgb8 {
                red: 128,
                green: 128,
                blue: 0
            }
        );
        assert_eq!(color.to_hex(), "#808000");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(DisplayColor::from_score(SentimentScore::new(0.0)).to_hex(), "#FF0000");
        assert_eq!(DisplayColor::from_score(SentimentScore::new(1.0)).to_hex(), "#00FF00");
    }

    #[test]
    fn test_unknown_is_neutral() {
        let color = DisplayColor::from_score(SentimentScore::UNKNOWN);
        assert_eq!(color, DisplayColor::NEUTRAL);
        assert_eq!(color.to_hex(), "#808080");
    }

    #[test]
    fn test_mapping_is_deterministic() {
        for raw in [0.0, 0.13, 0.5, 0.77, 1.0] {
            let score = SentimentScore::new(raw);
            assert_eq!(DisplayColor::from_score(score), DisplayColor::from_score(score));
        }
    }

    #[test]
    fn test_to_hsv() {
        let (h, s, v) = DisplayColor::new(1.0, 0.0, 0.0).to_hsv();
        assert!(approx(h, 0.0) && approx(s, 1.0) && approx(v, 1.0));

        let (h, _, _) = DisplayColor::new(0.0, 1.0, 0.0).to_hsv();
        assert!(approx(h, 120.0));

        let (h, s, v) = DisplayColor::new(0.5, 0.5, 0.0).to_hsv();
        assert!(approx(h, 60.0) && approx(s, 1.0) && approx(v, 0.5));

        let (h, s, v) = DisplayColor::NEUTRAL.to_hsv();
        assert!(approx(h, 0.0) && approx(s, 0.0) && approx(v, 0.5));
    }

    #[test]
    fn test_css_rgba() {
        let color = DisplayColor::new(0.5, 0.5, 0.0);
        assert_eq!(color.to_css_rgba(0.5), "rgba(128, 128, 0, 0.5)");
    }
}
