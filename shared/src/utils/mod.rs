//! Utility functions module

pub mod validation;

pub use validation::{is_blank, is_valid_email, mask_email};
