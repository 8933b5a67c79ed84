//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: OS specific implementations (settings file, log dir, writers).

pub mod adapters;
pub mod ports;
