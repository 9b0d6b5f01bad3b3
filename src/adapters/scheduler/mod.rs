//! Background scheduling.

mod digest_scheduler;

pub use digest_scheduler::DigestScheduler;
