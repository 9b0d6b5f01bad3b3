//! Cosmic Self - Numerology and astrology profiles from a birth date.
//!
//! Pure calculators turn a calendar date into a life path number, sun sign,
//! Chinese zodiac animal and element, moon phase and personal year. On top
//! of them sit paid readings, a public "cosmic weather" view and a
//! scheduled SMS digest.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
