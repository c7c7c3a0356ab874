//! # School Calendar Backend
//!
//! School-term statistics for a configurable academic year.
//!
//! This crate computes school days, full weeks, weekends and in-term holidays
//! from three static datasets (term date ranges, public holidays and other key
//! dates) and serves the results as JSON over a small REST API.
//!
//! ## Features
//!
//! - **Date Handling**: Day/month strings resolved to local midnight in a fixed home timezone
//! - **Term Statistics**: Boundary-week arithmetic and holiday subtraction per term
//! - **Year Summary**: Current term, remaining school days and yearly totals
//! - **Timeline**: Holidays, key dates and term boundaries merged into one upcoming list
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! - [`models`]: Input records and calendar instant parsing
//! - [`routes`]: Computed payload types and their route paths
//! - [`data`]: Dataset loading and configuration
//! - [`services`]: The calendar computations
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`api`]: Consolidated public surface
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use school_calendar::api::{CalendarDataset, KeyDate, Term};
//! use school_calendar::services::calculate_term;
//!
//! let mut terms = BTreeMap::new();
//! terms.insert("2024".to_string(), vec![Term::new("3 February", "12 April")]);
//! let dataset = CalendarDataset::new(
//!     terms,
//!     vec![KeyDate::new("Waitangi Day", "6 February")],
//!     vec![],
//!     chrono_tz::Pacific::Auckland,
//! );
//!
//! let summary = calculate_term(&dataset, &dataset.terms_for("2024")[0], "2024").unwrap();
//! assert_eq!(summary.school_days, 49);
//! ```

pub mod api;

pub mod data;
pub mod error;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
