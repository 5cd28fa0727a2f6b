//! Request extractors shared by handlers.
//!
//! - [`client_ip::ClientIp`] -- Best-effort caller address for audit entries.

pub mod client_ip;
