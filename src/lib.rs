// src/lib.rs

pub mod core;
pub mod loader;
pub mod report;

pub use crate::core::index::AnagramIndex;
