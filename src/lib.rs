//! Medicine identification from packaging text.
//!
//! The [`matching`] module holds the engine; [`catalog`] and [`ocr`] describe
//! the data it consumes, and [`api`] / [`cli`] expose it.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod matching;
pub mod ocr;
