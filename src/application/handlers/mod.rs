//! Application handlers.
//!
//! Query handlers for cosmic content and the SMS digest command.

pub mod cosmic;
pub mod sms;

pub use cosmic::{
    GenerateReadingHandler, GenerateReadingQuery, GetCosmicProfileHandler, GetCosmicProfileQuery,
    GetCosmicWeatherHandler, Reading, ReadingError,
};
pub use sms::{
    SendSmsDigestHandler, SendTestSmsCommand, SendTestSmsHandler, SmsDigestReport, TestSmsError,
    TestSmsReceipt,
};
