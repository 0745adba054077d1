//! credidesk_core - Pure domain logic for the credidesk project.
//!
//! Wire-format types for the credit API plus the numeric normalization
//! helpers shared by every consumer. No I/O happens in this crate.

pub mod credit;
pub mod numeric;
pub mod serde;
