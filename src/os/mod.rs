//! Portable half of the port layer
//!
//! Critical section nesting, interrupt context tracking and the yield
//! protocol, written against the traits in [`crate::port`].

pub mod config;
pub mod critical;
pub mod cs_cell;
pub mod error;
pub mod isr;
pub mod kernel;
pub mod switch;
pub mod types;
