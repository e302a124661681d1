//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Financial week policy

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::{FinancialWeekConfig, Settings, WeekMode, MAX_HISTORY_MONTHS};
