//! SMS digest vocabulary: who gets a message, where, and when.

mod phone;
mod schedule;
mod subscriber;

pub use phone::PhoneNumber;
pub use schedule::DigestSchedule;
pub use subscriber::SmsSubscriber;
