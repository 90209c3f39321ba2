//! Interrupt context tracking
//!
//! An interrupt handler opens an [`IsrScope`] on entry. Dropping the scope
//! is the point where the handler returns to whatever it interrupted, so
//! ISR-level yields must happen while the scope is alive.

use portable_atomic::Ordering;

use crate::config::CFG_ISR_NESTING_MAX;
use crate::critical::InterruptController;
use crate::error::PortFault;
use crate::port::{InterruptMask, SwitchTrigger};

impl<M: InterruptMask, T: SwitchTrigger> InterruptController<M, T> {
    /// Record entry into an interrupt handler
    ///
    /// At the nesting ceiling the entry is reported and left uncounted, and
    /// the returned scope does not decrement on drop.
    #[inline]
    pub fn isr_enter(&self) -> IsrScope<'_, M, T> {
        let nesting = self.isr_nesting.load(Ordering::Relaxed);
        let counted = nesting < CFG_ISR_NESTING_MAX;
        if counted {
            self.isr_nesting.store(nesting + 1, Ordering::Relaxed);
        } else {
            self.fault(PortFault::IsrNestingOverflow);
        }
        IsrScope { port: self, counted }
    }

    /// Record the interrupt return
    #[inline]
    pub(crate) fn isr_exit(&self) {
        let nesting = self.isr_nesting.load(Ordering::Relaxed);
        if nesting == 0 {
            self.fault(PortFault::IsrNestingUnderflow);
            return;
        }
        self.isr_nesting.store(nesting - 1, Ordering::Relaxed);
    }

    /// Check if currently executing in an ISR context
    #[inline]
    pub fn is_isr_context(&self) -> bool {
        self.isr_nesting() > 0 || crate::port::hardware_isr_active()
    }
}

/// Lifetime of one interrupt handler invocation
#[must_use = "the handler returns when the scope is dropped"]
pub struct IsrScope<'a, M: InterruptMask, T: SwitchTrigger> {
    port: &'a InterruptController<M, T>,
    counted: bool,
}

impl<M: InterruptMask, T: SwitchTrigger> IsrScope<'_, M, T> {
    /// Request a switch on this handler's return path
    #[inline]
    pub fn yield_from_isr(&self, switch_needed: bool) {
        self.port.yield_from_isr(switch_needed);
    }
}

impl<M: InterruptMask, T: SwitchTrigger> Drop for IsrScope<'_, M, T> {
    #[inline]
    fn drop(&mut self) {
        if self.counted {
            self.port.isr_exit();
        }
    }
}
