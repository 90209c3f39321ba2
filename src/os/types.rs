//! Core type definitions for the port layer
//!
//! Width choices the portable kernel builds on, plus the hardware
//! constants of the target.

use crate::config::CFG_TICK_RATE_HZ;

/// Tick counter type
#[cfg(feature = "tick-16bit")]
pub type TickType = u16;

/// Tick counter type
#[cfg(not(feature = "tick-16bit"))]
pub type TickType = u32;

/// Block forever
pub const MAX_DELAY: TickType = TickType::MAX;

/// Stack element type
pub type StackType = u32;

/// Natural signed word
pub type BaseType = i32;

/// Natural unsigned word
pub type UBaseType = u32;

/// Critical section nesting counter
pub type NestingCtr = u16;

/// Interrupt nesting counter
pub type IsrNestingCtr = u8;

/// Depth outside of any critical section
pub const NO_CRITICAL_NESTING: NestingCtr = 0;

// ============ Hardware specifics ============

/// Stack and heap alignment in bytes
pub const BYTE_ALIGNMENT: usize = 4;

/// Stacks grow downwards
pub const STACK_GROWTH: BaseType = -1;

/// Milliseconds per tick
pub const TICK_PERIOD_MS: TickType = (1000 / CFG_TICK_RATE_HZ) as TickType;
