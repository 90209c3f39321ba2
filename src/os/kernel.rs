//! Global port instance and initialization
//!
//! The kernel sees one processor, so the port keeps one process-wide
//! [`InterruptController`]. It is reset by [`port_init`] at boot and is
//! otherwise only touched through the functions below.

use crate::config::CFG_ASSERT_MODE;
use crate::critical::{CriticalSection, InterruptController};
use crate::cs_cell::CsCell;
use crate::isr::IsrScope;
use crate::port::{port_hw_init, KernelHooks, SwitchTrigger, TargetGate, TargetTrigger};

/// Controller type for the target processor
pub type Port = InterruptController<TargetGate, TargetTrigger>;

/// Critical section guard of the global port
pub type PortCriticalSection<'a> = CriticalSection<'a, TargetGate, TargetTrigger>;

// ============ Global Instances ============

/// Global port instance
pub static PORT: Port = InterruptController::new(
    TargetGate::new(),
    TargetTrigger::new(),
    CFG_ASSERT_MODE,
);

/// Switch hooks installed by the kernel
static KERNEL_HOOKS: CsCell<Option<&'static (dyn KernelHooks + Sync)>> = CsCell::new(None);

// ============ Initialization ============

/// Initialize the port layer
///
/// Must run once at boot, before the first critical section. Clears the
/// nesting counters and installed hooks, restores the configured assertion
/// mode and sets up the switch trap.
pub fn port_init() {
    PORT.reset();
    PORT.set_assert_mode(CFG_ASSERT_MODE);

    critical_section(|cs| {
        KERNEL_HOOKS.replace(cs, None);
    });

    port_hw_init();

    crate::info!("port initialized");
}

/// Install the scheduler's context switch hooks
pub fn port_register_hooks(hooks: &'static (dyn KernelHooks + Sync)) {
    critical_section(|cs| {
        KERNEL_HOOKS.replace(cs, Some(hooks));
    });

    crate::debug!("kernel hooks registered");
}

/// Service a raised switch trap
///
/// Called from the trap handler. Without installed hooks the trap is
/// cleared and the running task simply continues.
pub fn port_service_switch_trap() {
    let hooks = critical_section(|cs| KERNEL_HOOKS.read(cs));

    match hooks {
        Some(hooks) => PORT.service_switch_trap(hooks),
        None => {
            crate::warn!("switch trap without kernel hooks");
            PORT.trigger().clear_pending();
        }
    }
}

// ============ Public API ============

/// Enter a critical section on the global port
///
/// Returns `false` if the nesting counter was saturated; skip the matching
/// [`port_exit_critical`] in that case.
#[inline]
pub fn port_enter_critical() -> bool {
    PORT.enter_critical()
}

/// Leave a critical section on the global port
#[inline]
pub fn port_exit_critical() {
    PORT.exit_critical();
}

/// Execute a closure with interrupts disabled
#[inline]
pub fn critical_section<F, R>(f: F) -> R
where
    F: FnOnce(&PortCriticalSection<'_>) -> R,
{
    PORT.with_critical(f)
}

/// Yield from task context
#[inline]
pub fn port_yield() {
    PORT.yield_task();
}

/// Yield from interrupt context if `switch_needed`
#[inline]
pub fn port_yield_from_isr(switch_needed: bool) {
    PORT.yield_from_isr(switch_needed);
}

/// Same as [`port_yield_from_isr`]
#[inline]
pub fn port_end_switching_isr(switch_needed: bool) {
    PORT.end_switching_isr(switch_needed);
}

/// Enter an interrupt handler
#[inline]
pub fn port_isr_enter() -> IsrScope<'static, TargetGate, TargetTrigger> {
    PORT.isr_enter()
}
