//! Utility modules.
//!
//! Provides:
//! - [`timer::sleep`] - Platform timer for paced output

pub mod timer;
