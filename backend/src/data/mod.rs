//! Dataset loading and application configuration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, CLI)                      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - calendar computations      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  CalendarDataset - read-only terms, holidays, key dates │
//! │  loaded once from JSON files in `AppConfig::data_dir`   │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dataset;

pub use config::{AppConfig, DEFAULT_TIMEZONE};
pub use dataset::{CalendarDataset, TermsByYear};
