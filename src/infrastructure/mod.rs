//! Infrastructure utilities independent of the application domain.
//!
//! Currently limited to filesystem path resolution for configuration and data
//! locations.

pub mod paths;

pub use paths::{expand_tilde, get_config_dir, get_config_path, get_data_dir};
