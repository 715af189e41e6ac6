//! Car model types.

use crate::ids::{BrandId, ModelId};
use serde::{Deserialize, Serialize};

/// A car model belonging to a brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarModel {
    pub id: ModelId,
    pub brand_id: BrandId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CarModel {
    pub fn new(
        id: impl Into<ModelId>,
        brand_id: impl Into<BrandId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            brand_id: brand_id.into(),
            name: name.into(),
            description: None,
            image_url: None,
        }
    }
}

/// The model fields embedded in a product search view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelRef {
    pub id: ModelId,
    pub name: String,
}

impl From<&CarModel> for ModelRef {
    fn from(model: &CarModel) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
        }
    }
}
