//! Compile-time configuration for the port layer
//!
//! These constants control assertion behavior and resource limits.

use crate::error::AssertMode;

/// System tick rate in Hz
pub const CFG_TICK_RATE_HZ: u32 = 1000;

/// Interrupt nesting saturates here
pub const CFG_ISR_NESTING_MAX: u8 = 254;

/// What a usage defect does by default
#[cfg(feature = "assert")]
pub const CFG_ASSERT_MODE: AssertMode = AssertMode::Trap;

/// What a usage defect does by default
#[cfg(not(feature = "assert"))]
pub const CFG_ASSERT_MODE: AssertMode = AssertMode::Ignore;
