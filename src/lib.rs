//! RTOS port layer in Rust
//!
//! The hardware boundary a preemptive kernel's scheduler builds on:
//! - Re-entrant critical sections on top of raw interrupt masking
//! - Task-level and ISR-level context switch requests
//! - Tick and stack types for the target processor
//! - Cortex-M port (PRIMASK / PendSV) and an instrumented host port

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

// ============ Critical Section ============

// Third-party code using the `critical-section` crate shares the kernel's
// nesting counter instead of toggling PRIMASK behind its back.
#[cfg(target_arch = "arm")]
mod cs_impl {
    use critical_section::{set_impl, Impl, RawRestoreState};

    struct PortCriticalSection;
    set_impl!(PortCriticalSection);

    unsafe impl Impl for PortCriticalSection {
        unsafe fn acquire() -> RawRestoreState {
            crate::kernel::port_enter_critical()
        }

        unsafe fn release(counted: RawRestoreState) {
            if counted {
                crate::kernel::port_exit_critical();
            }
        }
    }
}

// ============ Modules ============

pub mod log;
mod lang_items;

pub mod os;
pub mod port;

// ============ Re-exports ============

pub use os::config;
pub use os::config::*;
pub use os::critical;
pub use os::critical::{CriticalSection, InterruptController};
pub use os::cs_cell;
pub use os::error;
pub use os::error::{AssertMode, PortFault};
pub use os::isr;
pub use os::isr::IsrScope;
pub use os::kernel;
pub use os::kernel::{
    critical_section, port_end_switching_isr, port_enter_critical, port_exit_critical, port_init,
    port_isr_enter, port_register_hooks, port_yield, port_yield_from_isr, PORT,
};
pub use os::switch;
pub use os::types;
pub use os::types::*;
pub use port::{InterruptMask, KernelHooks, SwitchTrigger};
