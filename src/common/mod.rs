pub mod config;
pub mod error;

pub use config::{Config, GeneratorConfig};
pub use error::{GenError, Result};
