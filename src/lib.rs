pub mod cli;
pub mod error;
pub mod k8s;
pub mod render;
pub mod resolve;

pub use error::{KubehostsError, Result};

/// Release version, overridable at build time through `KUBEHOSTS_VERSION`.
pub const VERSION: &str = match option_env!("KUBEHOSTS_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};
