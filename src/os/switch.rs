//! Context switch requests
//!
//! Task code and interrupt handlers never switch directly. They raise the
//! switch trap, and the trap handler runs the kernel's switch hooks. On
//! Cortex-M the trap is PendSV, which runs once no other handler is active
//! and interrupts are unmasked.

use crate::critical::InterruptController;
use crate::error::PortFault;
use crate::port::{InterruptMask, KernelHooks, SwitchTrigger};

impl<M: InterruptMask, T: SwitchTrigger> InterruptController<M, T> {
    /// Yield from task context
    ///
    /// Always raises the switch trap, exactly once per call. Yielding with a
    /// critical section open is a fault; the trap is still raised and
    /// stays pending until interrupts are unmasked.
    #[inline]
    pub fn yield_task(&self) {
        if self.in_critical() {
            self.fault(PortFault::YieldInCritical);
        }

        crate::trace!("yield");
        self.trigger.pend_switch();
    }

    /// Yield from interrupt context
    ///
    /// Raises the switch trap only if `switch_needed`. Must be called before
    /// the handler returns and after any critical section it opened has
    /// been closed.
    #[inline]
    pub fn yield_from_isr(&self, switch_needed: bool) {
        if !self.is_isr_context() {
            self.fault(PortFault::IsrYieldOutsideIsr);
        }

        if self.in_critical() {
            self.fault(PortFault::IsrYieldInCritical);
        }

        if switch_needed {
            crate::trace!("yield from isr");
            self.trigger.pend_switch();
        }
    }

    /// Same as [`yield_from_isr`](Self::yield_from_isr)
    #[inline]
    pub fn end_switching_isr(&self, switch_needed: bool) {
        self.yield_from_isr(switch_needed);
    }

    /// Body of the switch trap handler
    ///
    /// Saves the running task, lets the kernel pick the next one with
    /// interrupts masked, and restores it.
    pub fn service_switch_trap<K: KernelHooks + ?Sized>(&self, kernel: &K) {
        let _isr = self.isr_enter();

        self.trigger.clear_pending();

        kernel.save_context();
        {
            let _cs = self.critical();
            kernel.switch_context();
        }
        kernel.restore_context();
    }
}
