//! Marketplace Configuration
//!
//! Every knob has a default; `from_json` accepts partial overrides.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ClosetError, Result};

/// Platform fee rates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub rent_rate: f64,
    pub buy_rate: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            rent_rate: 0.02,
            buy_rate: 0.04,
        }
    }
}

/// Seller identity stamped onto listings created in this browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerIdentity {
    pub name: String,
    pub batch: String,
    pub rating: f64,
}

impl Default for SellerIdentity {
    fn default() -> Self {
        Self {
            name: "You (Student)".to_string(),
            batch: "Batch 2025".to_string(),
            rating: 5.0,
        }
    }
}

/// Curated collection tile; picking it applies `id` as the category filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub label: String,
    pub sub: String,
    pub image: String,
}

impl Collection {
    fn new(id: &str, label: &str, sub: &str, image: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            sub: sub.to_string(),
            image: image.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosetConfig {
    /// Local storage key holding the serialized catalog
    pub storage_key: String,
    /// Domain a student email must end with
    pub email_domain: String,
    pub fees: FeeSchedule,
    /// Delay between checkout and the locker dashboard opening
    pub locker_delay_ms: u64,
    /// Image used when a listing has none
    pub placeholder_image: String,
    pub seller: SellerIdentity,
    /// Pool the simulated upload picks from
    pub stock_images: Vec<String>,
    /// Quick filters offered above the grid, after "all"
    pub quick_filters: Vec<String>,
    pub collections: Vec<Collection>,
}

impl Default for ClosetConfig {
    fn default() -> Self {
        Self {
            storage_key: "cc_items".to_string(),
            email_domain: "edu.escp.eu".to_string(),
            fees: FeeSchedule::default(),
            locker_delay_ms: 300,
            placeholder_image: "https://images.unsplash.com/photo-1556905055-8f358a7a47b2?auto=format&fit=crop&q=80&w=800".to_string(),
            seller: SellerIdentity::default(),
            stock_images: vec![
                "https://images.unsplash.com/photo-1595777457583-95e059d581b8?auto=format&fit=crop&q=80&w=800".to_string(),
                "https://images.unsplash.com/photo-1539008835657-9e8e9680c956?auto=format&fit=crop&q=80&w=800".to_string(),
                "https://images.unsplash.com/photo-1572804013309-59a88b7e92f1?auto=format&fit=crop&q=80&w=800".to_string(),
                "https://images.unsplash.com/photo-1550928431-ee0ec6db30d3?auto=format&fit=crop&q=80&w=800".to_string(),
            ],
            quick_filters: vec![
                "gala".to_string(),
                "interview".to_string(),
                "essentials".to_string(),
            ],
            collections: vec![
                Collection::new(
                    "gala",
                    "Winter Gala",
                    "Gowns, suits and the finishing touches",
                    "https://images.unsplash.com/photo-1566174053879-31528523f8ae?auto=format&fit=crop&q=80&w=800",
                ),
                Collection::new(
                    "interview",
                    "Interview Ready",
                    "Blazers and shirts for recruiting season",
                    "https://images.unsplash.com/photo-1507679799987-c73779587ccf?auto=format&fit=crop&q=80&w=800",
                ),
                Collection::new(
                    "essentials",
                    "Campus Essentials",
                    "Coats and basics for everyday classes",
                    "https://images.unsplash.com/photo-1539533018447-63fcce2678e3?auto=format&fit=crop&q=80&w=800",
                ),
            ],
        }
    }
}

impl ClosetConfig {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ClosetConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.is_empty() {
            return Err(ClosetError::Config("storage_key must not be empty".into()));
        }
        if self.email_domain.is_empty() {
            return Err(ClosetError::Config("email_domain must not be empty".into()));
        }
        if self.fees.rent_rate < 0.0 || self.fees.buy_rate < 0.0 {
            return Err(ClosetError::Config("fee rates must not be negative".into()));
        }
        if let Some(c) = self.collections.iter().find(|c| c.id.is_empty() || c.id == "all") {
            return Err(ClosetError::Config(format!("collection '{}' needs a filter id other than 'all'", c.label)));
        }
        Ok(())
    }

    pub fn locker_delay(&self) -> Duration {
        Duration::from_millis(self.locker_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClosetConfig::default();
        assert_eq!(config.storage_key, "cc_items");
        assert_eq!(config.fees.rent_rate, 0.02);
        assert_eq!(config.fees.buy_rate, 0.04);
        assert_eq!(config.locker_delay(), Duration::from_millis(300));
        assert_eq!(config.seller.name, "You (Student)");
    }

    #[test]
    fn test_partial_override() {
        let config = ClosetConfig::from_json(r#"{"storage_key": "test_items", "fees": {"buy_rate": 0.05}}"#).unwrap();
        assert_eq!(config.storage_key, "test_items");
        assert_eq!(config.fees.buy_rate, 0.05);
        assert_eq!(config.fees.rent_rate, 0.02);
        assert_eq!(config.email_domain, "edu.escp.eu");
    }

    #[test]
    fn test_default_collections() {
        let ids: Vec<_> = ClosetConfig::default().collections.into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["gala", "interview", "essentials"]);
    }

    #[test]
    fn test_rejects_collection_without_id() {
        let json = r#"{"collections": [{"id": "", "label": "Blank", "sub": "", "image": ""}]}"#;
        let err = ClosetConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ClosetError::Config(_)));
    }

    #[test]
    fn test_rejects_empty_domain() {
        let err = ClosetConfig::from_json(r#"{"email_domain": ""}"#).unwrap_err();
        assert!(matches!(err, ClosetError::Config(_)));
    }
}
