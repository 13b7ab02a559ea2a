pub mod builder;
pub mod bundle;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod logger;
pub mod normalize;
pub mod types;
pub mod utils;

pub use builder::{build_bundle, DatasetBuilder};
pub use config::{AppConfig, BundleFormat, NormalizeConfig, NormalizeMode};
pub use error::{GestureError, Result};
pub use normalize::Normalizer;
pub use types::{Dataset, DatasetSummary, Point};
