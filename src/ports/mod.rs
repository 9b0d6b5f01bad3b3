//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Clock` - Current instant
//! - `SmsSender` - Outbound text messages
//! - `SubscriberReader` - SMS digest roster
//! - `SmsLogWriter` - Record of delivered messages

mod clock;
mod sms_log;
mod sms_sender;
mod subscriber_reader;

pub use clock::Clock;
pub use sms_log::{SmsLogEntry, SmsLogWriter};
pub use sms_sender::{SmsError, SmsSender};
pub use subscriber_reader::{SubscriberError, SubscriberReader};
