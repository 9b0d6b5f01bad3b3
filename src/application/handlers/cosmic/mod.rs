//! Cosmic query handlers: profiles, weather and paid readings.

mod generate_reading;
mod get_cosmic_profile;
mod get_cosmic_weather;

pub use generate_reading::{GenerateReadingHandler, GenerateReadingQuery, Reading, ReadingError};
pub use get_cosmic_profile::{GetCosmicProfileHandler, GetCosmicProfileQuery};
pub use get_cosmic_weather::GetCosmicWeatherHandler;
