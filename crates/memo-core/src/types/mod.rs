//! Core types for memo.

mod memo;

pub use memo::*;
