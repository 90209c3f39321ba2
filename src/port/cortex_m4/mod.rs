//! Cortex-M4 port implementation
//!
//! Masks interrupts through PRIMASK and performs context switches via the
//! PendSV exception.

use cortex_m::peripheral::scb::SystemHandler;
use cortex_m::peripheral::SCB;
use cortex_m::register::primask;

use super::{InterruptMask, SwitchTrigger};

/// Gate used by the global port on this target
pub type TargetGate = PrimaskGate;

/// Trigger used by the global port on this target
pub type TargetTrigger = PendSvTrigger;

/// Lowest configurable exception priority
const PENDSV_PRIO: u8 = 0xF0;

/// PRIMASK-based interrupt gate
pub struct PrimaskGate;

impl PrimaskGate {
    pub const fn new() -> Self {
        PrimaskGate
    }
}

impl InterruptMask for PrimaskGate {
    #[inline(always)]
    fn disable(&self) {
        cortex_m::interrupt::disable();
    }

    #[inline(always)]
    fn enable(&self) {
        unsafe { cortex_m::interrupt::enable() };
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        primask::read().is_inactive()
    }
}

/// PendSV-based switch trap
///
/// Pending PendSV from inside another handler is safe: it stays pending and
/// tail-chains on that handler's exception return, before thread mode
/// resumes.
pub struct PendSvTrigger;

impl PendSvTrigger {
    pub const fn new() -> Self {
        PendSvTrigger
    }
}

impl SwitchTrigger for PendSvTrigger {
    #[inline(always)]
    fn pend_switch(&self) {
        SCB::set_pendsv();
    }

    #[inline(always)]
    fn clear_pending(&self) {
        SCB::clear_pendsv();
    }

    #[inline(always)]
    fn is_pending(&self) -> bool {
        SCB::is_pendsv_pending()
    }
}

/// Check if currently executing in an exception handler
#[inline]
pub fn hardware_isr_active() -> bool {
    let ipsr: u32;
    unsafe {
        core::arch::asm!(
            "mrs {}, IPSR",
            out(reg) ipsr,
            options(nomem, nostack, preserves_flags)
        );
    }
    ipsr != 0
}

/// Single no-op instruction
#[inline(always)]
pub fn port_nop() {
    cortex_m::asm::nop();
}

/// Drop PendSV to the lowest priority so it never preempts another handler
pub fn port_hw_init() {
    unsafe {
        let mut scb = cortex_m::Peripherals::steal().SCB;
        scb.set_priority(SystemHandler::PendSV, PENDSV_PRIO);
    }
}

/// PendSV exception handler - services a requested context switch
#[cortex_m_rt::exception]
fn PendSV() {
    crate::kernel::port_service_switch_trap();
}
