//! Search response types
//!
//! The normalized shapes handed back to the UI layer after a store round trip.

mod types;

pub use types::*;
