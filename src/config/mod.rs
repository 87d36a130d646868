#[cfg(feature = "cli")]
pub mod cli;
pub mod defaults;
pub mod toml_config;

pub use toml_config::ProvidersConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
