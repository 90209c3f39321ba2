//! Port layer - CPU-specific implementations
//!
//! This module provides the hardware abstraction layer for interrupt
//! masking and context-switch triggering. The portable half of the port
//! ([`InterruptController`](crate::critical::InterruptController)) is
//! written against the two traits below.

#[cfg(target_arch = "arm")]
pub mod cortex_m4;

#[cfg(target_arch = "arm")]
pub use cortex_m4::*;

pub mod host;

#[cfg(not(target_arch = "arm"))]
pub use host::*;

/// Raw processor-level interrupt masking.
///
/// Both operations are unconditional and idempotent. Nothing but the
/// critical section nesting counter should call them.
pub trait InterruptMask {
    /// Mask all maskable interrupts
    fn disable(&self);

    /// Unmask interrupts
    fn enable(&self);

    /// Current state of the hardware flag
    fn is_enabled(&self) -> bool;
}

/// The software trap that performs context switches.
///
/// Task-level and ISR-level yields both go through [`pend_switch`], so
/// there is a single context-restore path.
///
/// [`pend_switch`]: SwitchTrigger::pend_switch
pub trait SwitchTrigger {
    /// Raise the low-priority switch trap
    fn pend_switch(&self);

    /// Withdraw a raised trap; called by the trap handler itself
    fn clear_pending(&self);

    /// Whether the trap is raised and not yet serviced
    fn is_pending(&self) -> bool;
}

/// Scheduler-side operations invoked by the switch trap handler.
///
/// `save_context` and `restore_context` are always called as a pair around
/// `switch_context`.
pub trait KernelHooks {
    /// Save the running task's execution context
    fn save_context(&self);

    /// Select the next ready task
    fn switch_context(&self);

    /// Restore the selected task's execution context
    fn restore_context(&self);
}
