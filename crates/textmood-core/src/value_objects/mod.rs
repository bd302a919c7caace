//! Value objects - immutable types that represent domain concepts

mod display_color;
mod light_state;
mod sentiment_score;

pub use display_color::{DisplayColor, Rgb8};
pub use light_state::HueLightState;
pub use sentiment_score::SentimentScore;
