pub mod constants;
pub mod errors;
pub mod models;
pub mod modules;
pub mod version;

#[cfg(feature = "python-bindings")]
pub mod python;
