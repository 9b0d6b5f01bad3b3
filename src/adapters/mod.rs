//! Adapters - Implementations of port interfaces.
//!
//! - `clock` - System and fixed clocks
//! - `sms` - Log-only and in-memory senders, in-memory delivery log
//! - `subscribers` - In-memory and YAML-file digest rosters
//! - `scheduler` - Background SMS digest loop

pub mod clock;
pub mod scheduler;
pub mod sms;
pub mod subscribers;

pub use clock::{FixedClock, SystemClock};
pub use scheduler::DigestScheduler;
pub use sms::{InMemorySmsLog, InMemorySmsSender, SentSms, TracingSmsSender};
pub use subscribers::{InMemorySubscriberReader, YamlSubscriberReader};
