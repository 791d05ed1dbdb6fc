//! Nutrition and energy-balance calculation engine
//!
//! Pure computation layer for fitness tracking: unit conversion between
//! measurement systems, aggregation of food and exercise diary records into
//! daily totals, BMR estimation, and net-energy reconciliation. All entry
//! points are synchronous, side-effect-free functions over data fetched by
//! the surrounding application; nothing here performs I/O or owns state.

pub mod aggregate;
pub mod balance;
pub mod bmr;
pub mod error;
pub mod models;
pub mod preferences;
pub mod units;

pub use error::{Result, ValidationError};
pub use preferences::Preferences;
