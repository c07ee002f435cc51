//! Utility modules

pub mod expand;
