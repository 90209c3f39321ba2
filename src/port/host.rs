//! Host port
//!
//! Stands in for the hardware when running on a development machine. The
//! gate and trigger keep an exact record of every call, which makes them
//! usable as instrumented doubles in tests.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use super::{InterruptMask, SwitchTrigger};

/// Gate used by the global port on this target
pub type TargetGate = HostGate;

/// Trigger used by the global port on this target
pub type TargetTrigger = HostTrigger;

/// Simulated interrupt enable flag
pub struct HostGate {
    enabled: AtomicBool,
    disable_calls: AtomicU32,
    enable_calls: AtomicU32,
}

impl HostGate {
    /// Create a gate with interrupts enabled
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            disable_calls: AtomicU32::new(0),
            enable_calls: AtomicU32::new(0),
        }
    }

    /// Number of `disable` calls so far
    pub fn disable_calls(&self) -> u32 {
        self.disable_calls.load(Ordering::SeqCst)
    }

    /// Number of `enable` calls so far
    pub fn enable_calls(&self) -> u32 {
        self.enable_calls.load(Ordering::SeqCst)
    }
}

impl Default for HostGate {
    fn default() -> Self {
        Self::new()
    }
}

impl InterruptMask for HostGate {
    fn disable(&self) {
        self.disable_calls.fetch_add(1, Ordering::SeqCst);
        self.enabled.store(false, Ordering::SeqCst);
    }

    fn enable(&self) {
        self.enable_calls.fetch_add(1, Ordering::SeqCst);
        self.enabled.store(true, Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

/// Simulated switch trap
pub struct HostTrigger {
    pending: AtomicBool,
    raised: AtomicU32,
}

impl HostTrigger {
    /// Create a trigger with nothing pending
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            raised: AtomicU32::new(0),
        }
    }

    /// Number of times the trap was raised
    pub fn raised(&self) -> u32 {
        self.raised.load(Ordering::SeqCst)
    }
}

impl Default for HostTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl SwitchTrigger for HostTrigger {
    fn pend_switch(&self) {
        self.raised.fetch_add(1, Ordering::SeqCst);
        self.pending.store(true, Ordering::SeqCst);
    }

    fn clear_pending(&self) {
        self.pending.store(false, Ordering::SeqCst);
    }

    fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }
}

/// No hardware exception state to consult on the host
#[inline]
pub fn hardware_isr_active() -> bool {
    false
}

/// No instruction to issue on the host
#[inline(always)]
pub fn port_nop() {}

/// Nothing to configure on the host
pub fn port_hw_init() {}
