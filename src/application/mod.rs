//! Application layer - Queries, commands and their handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    GenerateReadingHandler, GenerateReadingQuery, GetCosmicProfileHandler, GetCosmicProfileQuery,
    GetCosmicWeatherHandler, Reading, ReadingError, SendSmsDigestHandler, SendTestSmsCommand,
    SendTestSmsHandler, SmsDigestReport, TestSmsError, TestSmsReceipt,
};
