//! # granule-config
//!
//! The top-level scene configuration: grouped option blocks with their
//! clamping rules, the `SceneConfig` aggregate, and the validation
//! pipeline that turns an untrusted configuration into a
//! simulation-ready one — or rejects it with a precise diagnostic.
//!
//! The pass is pure and synchronous: it owns its input, produces a new
//! output, and touches no shared state, so independent configurations
//! can be validated concurrently without coordination.

pub mod config;
pub mod options;
pub mod validator;

pub use config::SceneConfig;
pub use options::{CaptureOptions, MpmOptions, SimOptions, ViewerOptions, VisOptions};
pub use validator::{validate, validate_json_str, ValidateOptions};
