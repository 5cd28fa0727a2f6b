//! Entity models and DTOs.
//!
//! Each submodule defines the stored row type plus the request DTOs that
//! produce it. Wire names are camelCase.

pub mod audit;
pub mod campaign;
