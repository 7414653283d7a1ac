//! Hydration domain module.
//!
//! # Module Structure
//!
//! - `model`: Hydration entry domain model (`HydrationEntry`)
//! - `repository`: Repository trait for water intake persistence

mod model;
mod repository;

// Re-export public API
pub use model::HydrationEntry;
pub use repository::HydrationLogRepository;
