use crate::config::ProvidersConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "rentwatch")]
#[command(about = "Collects apartment availability from property-management APIs into SQLite")]
pub struct CliConfig {
    #[arg(long, default_value = "./rentwatch.db", help = "SQLite database file")]
    pub database: String,

    #[arg(long, help = "TOML file listing providers (built-in list when omitted)")]
    pub providers: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Validate and list providers without fetching or writing")]
    pub dry_run: bool,
}

impl CliConfig {
    pub fn load_providers(&self) -> Result<ProvidersConfig> {
        match &self.providers {
            Some(path) => ProvidersConfig::from_file(path),
            None => Ok(ProvidersConfig::builtin()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("database", &self.database)?;
        if let Some(path) = &self.providers {
            validate_path("providers", path)?;
        }
        Ok(())
    }
}
