use crate::adapters::http::fetch_json;
use crate::domain::model::Unit;
use crate::domain::ports::Provider;
use crate::providers::null_as_default;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

/// SightMap 地圖，戶型與單位分成兩份清單，以 floor_plan_id 對應
#[derive(Debug, Clone)]
pub struct Sightmap {
    name: String,
    url: String,
    client: Client,
}

impl Sightmap {
    pub fn new(client: Client, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            client,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SightmapResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    data: SightmapData,
}

#[derive(Debug, Default, Deserialize)]
struct SightmapData {
    #[serde(default, deserialize_with = "null_as_default")]
    floor_plans: Vec<FloorPlan>,
    #[serde(default, deserialize_with = "null_as_default")]
    units: Vec<SightmapUnit>,
}

#[derive(Debug, Default, Deserialize)]
struct FloorPlan {
    #[serde(default, deserialize_with = "null_as_default")]
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    bedroom_count: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    bathroom_count: f64,
}

#[derive(Debug, Default, Deserialize)]
struct SightmapUnit {
    #[serde(default, deserialize_with = "null_as_default")]
    floor_plan_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    area: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    price: f64,
}

impl SightmapData {
    fn into_units(self) -> Vec<Unit> {
        let floor_plans: HashMap<&str, &FloorPlan> = self
            .floor_plans
            .iter()
            .map(|plan| (plan.id.as_str(), plan))
            .collect();

        self.units
            .iter()
            .map(|unit| {
                // 找不到對應戶型時房數／衛浴數視為 0，不讓整批失敗
                let (bedrooms, bathrooms) = match floor_plans.get(unit.floor_plan_id.as_str()) {
                    Some(plan) => (plan.bedroom_count, plan.bathroom_count),
                    None => {
                        tracing::debug!("Unit references unknown floor plan '{}'", unit.floor_plan_id);
                        (0.0, 0.0)
                    }
                };
                Unit::fixed(bedrooms, bathrooms, unit.area, unit.price)
            })
            .collect()
    }
}

#[async_trait]
impl Provider for Sightmap {
    fn name(&self) -> &str {
        &self.name
    }

    async fn units(&self) -> Result<Vec<Unit>> {
        tracing::debug!("Fetching SightMap {} from {}", self.name, self.url);
        let response: SightmapResponse = fetch_json(self.client.get(&self.url)).await?;

        let data = response.data;
        tracing::debug!(
            "SightMap {} returned {} floor plans and {} units",
            self.name,
            data.floor_plans.len(),
            data.units.len()
        );
        Ok(data.into_units())
    }
}
