//! SMS handlers: the scheduled digest and one-off test messages.

mod send_sms_digest;
mod send_test_sms;

pub use send_sms_digest::{SendSmsDigestHandler, SmsDigestReport};
pub use send_test_sms::{SendTestSmsCommand, SendTestSmsHandler, TestSmsError, TestSmsReceipt};
