//! Content rendering on top of cosmic profiles.
//!
//! Tables, essays and short messages are all pure functions of their
//! inputs. Display names are optional everywhere and fall back to a
//! neutral greeting.

pub mod essay;
pub mod sms;
pub mod tables;
mod weather;

pub use essay::{
    first_quarter_emphasis, render_life_essay, render_reading_list, render_year_essay,
    DEFAULT_DISPLAY_NAME,
};
pub use sms::{compose_daily_message, DEFAULT_SMS_NAME};
pub use weather::CosmicWeather;
