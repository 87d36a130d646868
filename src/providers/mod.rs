pub mod amli;
pub mod holland;
pub mod sightmap;

pub use amli::Amli;
pub use holland::Holland;
pub use sightmap::Sightmap;

use crate::domain::ports::Provider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};

/// 上游欄位缺少或為 `null` 時取預設值（0、空字串、空清單）
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 一個 provider 的完整設定；建構後不會再變動
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProviderSpec {
    Amli {
        name: String,
        property_id: String,
        amli_property_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        endpoint: Option<String>,
    },
    Holland {
        name: String,
        saas_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        endpoint: Option<String>,
    },
    Sightmap {
        name: String,
        url: String,
    },
}

impl ProviderSpec {
    pub fn amli(name: &str, property_id: &str, amli_property_id: &str) -> Self {
        ProviderSpec::Amli {
            name: name.to_string(),
            property_id: property_id.to_string(),
            amli_property_id: amli_property_id.to_string(),
            endpoint: None,
        }
    }

    pub fn holland(name: &str, saas_id: &str) -> Self {
        ProviderSpec::Holland {
            name: name.to_string(),
            saas_id: saas_id.to_string(),
            endpoint: None,
        }
    }

    pub fn sightmap(name: &str, url: &str) -> Self {
        ProviderSpec::Sightmap {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ProviderSpec::Amli { name, .. }
            | ProviderSpec::Holland { name, .. }
            | ProviderSpec::Sightmap { name, .. } => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ProviderSpec::Amli { .. } => "amli",
            ProviderSpec::Holland { .. } => "holland",
            ProviderSpec::Sightmap { .. } => "sightmap",
        }
    }

    /// 建立實際抓資料的 provider，共用同一個 HTTP client
    pub fn build(&self, client: &Client) -> Box<dyn Provider> {
        match self {
            ProviderSpec::Amli {
                name,
                property_id,
                amli_property_id,
                endpoint,
            } => {
                let provider = Amli::new(client.clone(), name, property_id, amli_property_id);
                match endpoint {
                    Some(endpoint) => Box::new(provider.with_endpoint(endpoint)),
                    None => Box::new(provider),
                }
            }
            ProviderSpec::Holland {
                name,
                saas_id,
                endpoint,
            } => {
                let provider = Holland::new(client.clone(), name, saas_id);
                match endpoint {
                    Some(endpoint) => Box::new(provider.with_endpoint(endpoint)),
                    None => Box::new(provider),
                }
            }
            ProviderSpec::Sightmap { name, url } => Box::new(Sightmap::new(client.clone(), name, url)),
        }
    }
}

impl Validate for ProviderSpec {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", self.name())?;

        match self {
            ProviderSpec::Amli {
                property_id,
                amli_property_id,
                endpoint,
                ..
            } => {
                validate_non_empty_string("property_id", property_id)?;
                validate_non_empty_string("amli_property_id", amli_property_id)?;
                if let Some(endpoint) = endpoint {
                    validate_url("endpoint", endpoint)?;
                }
            }
            ProviderSpec::Holland { saas_id, endpoint, .. } => {
                validate_non_empty_string("saas_id", saas_id)?;
                if let Some(endpoint) = endpoint {
                    validate_url("endpoint", endpoint)?;
                }
            }
            ProviderSpec::Sightmap { url, .. } => validate_url("url", url)?,
        }

        Ok(())
    }
}
