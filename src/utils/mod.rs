//! Utility functions
//!
//! Pure utility functions for amount formatting, validation, and string
//! manipulation. These modules contain helpers used by every component.

pub mod formatting;
pub mod validation;
