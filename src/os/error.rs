//! Usage defects of the port layer
//!
//! Nothing here is recoverable. A fault is either trapped (assertion) or
//! swallowed without touching the counters, depending on [`AssertMode`].

/// Port-level programming error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum PortFault {
    // ============ Critical section faults ============
    /// Exit without a matching enter
    CriticalUnderflow = 1001,
    /// Nesting counter would wrap
    CriticalOverflow = 1002,

    // ============ Yield faults ============
    /// Task-level yield while a critical section is open
    YieldInCritical = 2001,
    /// ISR-level yield outside of an interrupt handler
    IsrYieldOutsideIsr = 2002,
    /// ISR-level yield before the handler closed its critical section
    IsrYieldInCritical = 2003,

    // ============ ISR faults ============
    /// Interrupt return without a matching entry
    IsrNestingUnderflow = 3001,
    /// Interrupt nesting counter would pass its ceiling
    IsrNestingOverflow = 3002,
}

impl PortFault {
    /// Numeric fault code
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }
}

/// Reaction to a [`PortFault`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AssertMode {
    /// Log and panic
    Trap = 0,
    /// Log and carry on; counters are left untouched
    Ignore = 1,
}

impl AssertMode {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => AssertMode::Trap,
            _ => AssertMode::Ignore,
        }
    }
}

/// Report a usage defect
#[cold]
#[inline(never)]
pub(crate) fn port_fault(fault: PortFault, mode: AssertMode) {
    crate::error!("port fault {=u16}", fault.code());

    if mode == AssertMode::Trap {
        panic!("port fault: {:?}", fault);
    }
}
