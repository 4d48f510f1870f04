//! FormGuard Validation Core
//!
//! Pure helper functions behind the field checks: character-class counting
//! for password composition, length and blank tests, and lenient numeric
//! parsing. Compatible with both std and no_std environments.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod numeric;
pub mod password;
pub mod string;

// Re-export all helpers
pub use numeric::*;
pub use password::*;
pub use string::*;
