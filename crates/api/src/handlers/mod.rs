//! Request handlers.
//!
//! Handlers stay thin: extract, delegate to the matching service in
//! [`crate::services`], and map errors via [`AppError`](crate::error::AppError).

pub mod audit;
pub mod campaign;
pub mod metrics;
