//! Radio Control Logic
//!
//! Device state, the hardware collaborator seam and the command processor
//! that applies protocol commands to them.

pub mod control;
pub mod processor;
pub mod state;
