//! Shared utilities and common types for the Property Hub backend.
//!
//! This crate provides functionality used across all other crates:
//! - Display formatting (currency, dates, relative time)
//! - Common validation logic

pub mod format;
pub mod validation;

pub use format::{format_currency, format_date, format_percent, format_relative_time};
