//! Critical section handling for the port layer
//!
//! Provides re-entrant critical sections on top of a raw
//! [`InterruptMask`]. Interrupts are enabled if and only if the nesting
//! depth is zero.

use core::marker::PhantomData;

use portable_atomic::{AtomicU16, AtomicU8, Ordering};

use crate::error::{port_fault, AssertMode, PortFault};
use crate::port::{InterruptMask, SwitchTrigger};
use crate::types::{IsrNestingCtr, NestingCtr, NO_CRITICAL_NESTING};

/// Interrupt controller state for one processor
///
/// Owns the interrupt gate, the switch trigger and the two nesting
/// counters. The counters are only written while interrupts are masked,
/// so plain loads and stores suffice.
pub struct InterruptController<M: InterruptMask, T: SwitchTrigger> {
    pub(crate) gate: M,
    pub(crate) trigger: T,
    pub(crate) nesting: AtomicU16,
    pub(crate) isr_nesting: AtomicU8,
    assert_mode: AtomicU8,
}

impl<M: InterruptMask, T: SwitchTrigger> InterruptController<M, T> {
    /// Create a controller with no critical section open
    pub const fn new(gate: M, trigger: T, assert_mode: AssertMode) -> Self {
        Self {
            gate,
            trigger,
            nesting: AtomicU16::new(NO_CRITICAL_NESTING),
            isr_nesting: AtomicU8::new(0),
            assert_mode: AtomicU8::new(assert_mode as u8),
        }
    }

    /// Reset both nesting counters. Boot-time only.
    pub fn reset(&self) {
        self.nesting.store(NO_CRITICAL_NESTING, Ordering::SeqCst);
        self.isr_nesting.store(0, Ordering::SeqCst);
    }

    /// The interrupt gate
    #[inline(always)]
    pub fn gate(&self) -> &M {
        &self.gate
    }

    /// The switch trigger
    #[inline(always)]
    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    /// Current critical section depth
    #[inline(always)]
    pub fn depth(&self) -> NestingCtr {
        self.nesting.load(Ordering::Relaxed)
    }

    /// Whether a critical section is open
    #[inline(always)]
    pub fn in_critical(&self) -> bool {
        self.depth() > NO_CRITICAL_NESTING
    }

    /// Hardware interrupt enable state
    #[inline(always)]
    pub fn interrupts_enabled(&self) -> bool {
        self.gate.is_enabled()
    }

    pub fn assert_mode(&self) -> AssertMode {
        AssertMode::from_bits(self.assert_mode.load(Ordering::Relaxed))
    }

    pub fn set_assert_mode(&self, mode: AssertMode) {
        self.assert_mode.store(mode as u8, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn fault(&self, fault: PortFault) {
        port_fault(fault, self.assert_mode());
    }

    /// Enter a critical section.
    ///
    /// Masks interrupts first, then bumps the depth. Returns `false` if the
    /// counter was already saturated and the level was not counted; such an
    /// entry must not be paired with an exit.
    #[inline]
    pub fn enter_critical(&self) -> bool {
        self.gate.disable();

        let depth = self.nesting.load(Ordering::Relaxed);
        if depth == NestingCtr::MAX {
            self.fault(PortFault::CriticalOverflow);
            return false;
        }
        self.nesting.store(depth + 1, Ordering::Relaxed);
        true
    }

    /// Leave a critical section.
    ///
    /// Interrupts are unmasked only when the outermost section closes. An
    /// exit at depth zero is a fault and leaves everything untouched.
    #[inline]
    pub fn exit_critical(&self) {
        let depth = self.nesting.load(Ordering::Relaxed);
        if depth == NO_CRITICAL_NESTING {
            self.fault(PortFault::CriticalUnderflow);
            return;
        }

        let depth = depth - 1;
        self.nesting.store(depth, Ordering::Relaxed);

        if depth == NO_CRITICAL_NESTING {
            self.gate.enable();
        }
    }

    /// Enter a critical section, returning a guard that leaves it on drop
    #[inline]
    pub fn critical(&self) -> CriticalSection<'_, M, T> {
        let counted = self.enter_critical();
        CriticalSection {
            port: self,
            counted,
            _not_send: PhantomData,
        }
    }

    /// Execute a closure inside a critical section
    ///
    /// The closure receives the guard, which can be used to access
    /// [`CsCell`](crate::cs_cell::CsCell) protected data.
    #[inline]
    pub fn with_critical<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CriticalSection<'_, M, T>) -> R,
    {
        let cs = self.critical();
        f(&cs)
    }

    /// Current interrupt nesting level
    #[inline(always)]
    pub fn isr_nesting(&self) -> IsrNestingCtr {
        self.isr_nesting.load(Ordering::Relaxed)
    }
}

/// RAII guard for critical sections
///
/// While this guard lives, interrupts are masked. Dropping it (normal
/// return, early return or unwinding) leaves exactly the nesting level it
/// entered, and nothing if its entry hit the counter ceiling.
#[must_use = "the critical section ends when the guard is dropped"]
pub struct CriticalSection<'a, M: InterruptMask, T: SwitchTrigger> {
    port: &'a InterruptController<M, T>,
    counted: bool,
    _not_send: PhantomData<*const ()>,
}

impl<M: InterruptMask, T: SwitchTrigger> CriticalSection<'_, M, T> {
    /// Depth including this section
    #[inline(always)]
    pub fn depth(&self) -> NestingCtr {
        self.port.depth()
    }
}

impl<M: InterruptMask, T: SwitchTrigger> Drop for CriticalSection<'_, M, T> {
    #[inline(always)]
    fn drop(&mut self) {
        if self.counted {
            self.port.exit_critical();
        }
    }
}
