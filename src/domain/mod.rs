//! Domain layer containing the calculators and everything derived from them.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (timestamps, IDs, errors)
//! - `cosmic` - Pure date-driven calculators and the aggregate profile
//! - `content` - Essays, reading lists, SMS text and cosmic weather
//! - `notification` - SMS digest subscribers, phone numbers and schedule
//! - `access` - Reading entitlements

pub mod access;
pub mod content;
pub mod cosmic;
pub mod foundation;
pub mod notification;
