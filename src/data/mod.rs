//! Registry data loading and preprocessing

pub mod json;
pub mod preprocessing;
