//! Car brand types.

use crate::ids::BrandId;
use serde::{Deserialize, Serialize};

/// A car manufacturer whose parts are sold in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    /// Unique brand identifier.
    pub id: BrandId,
    /// Display name (e.g., "Toyota").
    pub name: String,
    /// Marketing description.
    #[serde(default)]
    pub description: Option<String>,
    /// Public URL of the uploaded logo.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Accent color used by storefront cards.
    #[serde(default)]
    pub color: Option<String>,
}

impl Brand {
    /// Create a brand with only an id and a name.
    pub fn new(id: impl Into<BrandId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            logo_url: None,
            color: None,
        }
    }

    /// Set the logo URL.
    pub fn with_logo(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }
}

/// The brand fields embedded in a product search view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandRef {
    pub id: BrandId,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl From<&Brand> for BrandRef {
    fn from(brand: &Brand) -> Self {
        Self {
            id: brand.id,
            name: brand.name.clone(),
            logo_url: brand.logo_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_from_minimal_json() {
        let brand: Brand = serde_json::from_str(r#"{"id": 1, "name": "Brembo"}"#).unwrap();
        assert_eq!(brand, Brand::new(1, "Brembo"));
    }

    #[test]
    fn test_brand_ref_keeps_logo() {
        let brand = Brand::new(2, "Bosch").with_logo("https://cdn/bosch.png");
        let r = BrandRef::from(&brand);
        assert_eq!(r.name, "Bosch");
        assert_eq!(r.logo_url.as_deref(), Some("https://cdn/bosch.png"));
    }
}
