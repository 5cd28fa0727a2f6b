//! Domain types and pure logic for the campaign hub.
//!
//! Nothing in here touches storage or HTTP, so the store, the API layer and
//! the tests can all share the same validation and audit wording.

pub mod audit;
pub mod campaign;
pub mod error;
pub mod metrics;
pub mod types;
