//! Adapters implementing the domain ports.

pub mod scripted;
pub mod sms;
