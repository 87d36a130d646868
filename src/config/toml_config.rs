use crate::config::defaults::default_providers;
use crate::domain::ports::Provider;
use crate::providers::ProviderSpec;
use crate::utils::error::{CrawlError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML 格式的 provider 清單
///
/// ```toml
/// [[providers]]
/// kind = "holland"
/// name = "Kiara"
/// saas_id = "v2MCbAhp2qPsB2GZg"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub providers: Vec<ProviderSpec>,
}

impl ProvidersConfig {
    pub fn new(providers: Vec<ProviderSpec>) -> Self {
        Self { providers }
    }

    /// 內建清單
    pub fn builtin() -> Self {
        Self::new(default_providers())
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CrawlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CrawlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SIGHTMAP_TOKEN})，找不到的變數保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CrawlError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// 依設定順序建立 provider
    pub fn build(&self, client: &Client) -> Vec<Box<dyn Provider>> {
        self.providers.iter().map(|spec| spec.build(client)).collect()
    }
}

impl Validate for ProvidersConfig {
    fn validate(&self) -> Result<()> {
        if self.providers.is_empty() {
            return Err(CrawlError::ConfigValidationError {
                field: "providers".to_string(),
                message: "at least one provider must be configured".to_string(),
            });
        }

        for (index, spec) in self.providers.iter().enumerate() {
            spec.validate().map_err(|e| CrawlError::ConfigValidationError {
                field: format!("providers[{}] ({})", index, spec.name()),
                message: e.to_string(),
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[providers]]
kind = "amli"
name = "AMLI Mark24"
property_id = "XHSPIxIAACIAbhlr"
amli_property_id = "88786"

[[providers]]
kind = "holland"
name = "One Lakefront"
saas_id = "aJRHh8cQ6cbHnq5JH"

[[providers]]
kind = "sightmap"
name = "Broadstone Sky"
url = "https://sightmap.com/app/api/v1/9zw467jlp87/sightmaps/23139"
"#;

    #[test]
    fn test_providers_config_parsing() {
        let config = ProvidersConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.len(), 3);
        assert_eq!(
            config.providers,
            vec![
                ProviderSpec::amli("AMLI Mark24", "XHSPIxIAACIAbhlr", "88786"),
                ProviderSpec::holland("One Lakefront", "aJRHh8cQ6cbHnq5JH"),
                ProviderSpec::sightmap(
                    "Broadstone Sky",
                    "https://sightmap.com/app/api/v1/9zw467jlp87/sightmaps/23139"
                ),
            ]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_override_is_parsed() {
        let config = ProvidersConfig::from_toml_str(
            r#"
[[providers]]
kind = "holland"
name = "Local"
saas_id = "abc"
endpoint = "http://127.0.0.1:9000/api/v1/content"
"#,
        )
        .unwrap();

        match &config.providers[0] {
            ProviderSpec::Holland { endpoint, .. } => {
                assert_eq!(endpoint.as_deref(), Some("http://127.0.0.1:9000/api/v1/content"));
            }
            other => panic!("unexpected provider: {other:?}"),
        }
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("RENTWATCH_TEST_SAAS_ID", "Gi8N4BuzsdrPYjmWL");
        let config = ProvidersConfig::from_toml_str(
            r#"
[[providers]]
kind = "holland"
name = "Dimension"
saas_id = "${RENTWATCH_TEST_SAAS_ID}"
"#,
        )
        .unwrap();

        assert_eq!(config.providers[0], ProviderSpec::holland("Dimension", "Gi8N4BuzsdrPYjmWL"));
    }

    #[test]
    fn test_unknown_env_var_is_left_untouched() {
        let processed =
            ProvidersConfig::substitute_env_vars("saas_id = \"${RENTWATCH_TEST_UNSET_VARIABLE}\"").unwrap();
        assert_eq!(processed, "saas_id = \"${RENTWATCH_TEST_UNSET_VARIABLE}\"");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = ProvidersConfig::from_toml_str(
            r#"
[[providers]]
kind = "zillow"
name = "Nope"
"#,
        );
        assert!(matches!(result, Err(CrawlError::ConfigValidationError { .. })));
    }

    #[test]
    fn test_empty_list_fails_validation() {
        let config = ProvidersConfig::from_toml_str("").unwrap();
        assert!(config.is_empty());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_error_names_offending_provider() {
        let config = ProvidersConfig::new(vec![
            ProviderSpec::holland("Kiara", "v2MCbAhp2qPsB2GZg"),
            ProviderSpec::sightmap("REN", "not-a-url"),
        ]);

        match config.validate() {
            Err(CrawlError::ConfigValidationError { field, .. }) => assert_eq!(field, "providers[1] (REN)"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let spec = ProviderSpec::amli("AMLI Arc", "XK-A2xAAAB8A_JrR", "89240");
        let config = ProvidersConfig::new(vec![spec.clone(), spec]);

        assert!(config.validate().is_ok());
        assert_eq!(config.build(&Client::new()).len(), 2);
    }
}
