#![forbid(unsafe_code)]

//! Core domain model and planning logic for hyplan.
//!
//! This crate provides:
//! - Domain types (athlete profile, cardio and exercise templates, plans)
//! - Catalog management
//! - Sport profile resolution
//! - Weekly hybrid schedule builder with recovery constraints
//! - Strength program generation
//! - Plain-text plan summaries

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod sport;
pub mod volume;
pub mod strength;
pub mod cardio;
pub mod constraints;
pub mod engine;
pub mod summary;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::{load_profile, Config, OutputFormat};
pub use sport::{resolve_sport_profile, SportProfile};
pub use strength::generate_plan;
pub use engine::generate_hybrid_week;
pub use summary::{cardio_for_weekday, todays_cardio, weekly_summary};
