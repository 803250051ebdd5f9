//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `PaymentProcessor` which acts as the primary entry
//! point for taking payment on an order. It is written against the domain
//! ports only, so authorizer variants can be swapped without touching it.

pub mod processor;
