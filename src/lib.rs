//! fintrack - personal finance tracker with financial-week reports
//!
//! This library provides the core functionality for the fintrack command
//! line application. Transactions live in a spreadsheet-style CSV sheet;
//! months are split into financial weeks and aggregated into dashboards.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money, periods)
//! - `storage`: CSV sheet storage layer
//! - `audit`: Audit logging system
//! - `services`: Business logic layer (period partitioning, transactions)
//! - `reports`: Aggregations and the dashboard
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{paths::FinancePaths, settings::Settings};
//! use fintrack::services::PeriodService;
//!
//! let paths = FinancePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let weeks = PeriodService::new(settings.week).current_week(today);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
