//! Critical section protected cell
//!
//! Zero-overhead wrapper for data that must be accessed within critical sections.
//! Values only move in and out by copy or swap, so no reference to the
//! contents ever escapes and nested accesses under one guard cannot alias.

use core::cell::UnsafeCell;

use crate::critical::CriticalSection;
use crate::port::{InterruptMask, SwitchTrigger};

/// A cell that can only be accessed within a critical section.
pub struct CsCell<V>(UnsafeCell<V>);

unsafe impl<V: Send> Sync for CsCell<V> {}

impl<V> CsCell<V> {
    /// Create a new CsCell
    #[inline(always)]
    pub const fn new(value: V) -> Self {
        Self(UnsafeCell::new(value))
    }

    /// Store `value`, returning the previous contents
    #[inline(always)]
    pub fn replace<M: InterruptMask, T: SwitchTrigger>(
        &self,
        _cs: &CriticalSection<'_, M, T>,
        value: V,
    ) -> V {
        // Interrupts are masked and no borrow of the contents exists
        // outside this call.
        unsafe { core::ptr::replace(self.0.get(), value) }
    }

    /// Copy the value out
    #[inline(always)]
    pub fn read<M: InterruptMask, T: SwitchTrigger>(&self, _cs: &CriticalSection<'_, M, T>) -> V
    where
        V: Copy,
    {
        unsafe { *self.0.get() }
    }
}
