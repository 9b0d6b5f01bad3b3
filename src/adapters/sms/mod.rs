//! SMS adapters: senders and the delivery log.

mod in_memory_log;
mod in_memory_sender;
mod tracing_sender;

pub use in_memory_log::InMemorySmsLog;
pub use in_memory_sender::{InMemorySmsSender, SentSms};
pub use tracing_sender::TracingSmsSender;
