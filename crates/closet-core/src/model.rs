//! Catalog Model
//!
//! Item records and the fixed category/condition scales.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Item identifier: small integers for seed data, Unix milliseconds for new listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Clothing category; determines the deposit tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Casual,
    #[serde(alias = "Gala")]
    Formal,
    #[serde(alias = "Coat")]
    Outerwear,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Casual,
        Category::Formal,
        Category::Outerwear,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Casual => "Casual",
            Category::Formal => "Formal",
            Category::Outerwear => "Outerwear",
            Category::Accessories => "Accessories",
        }
    }

    /// Label shown in the listing form's category picker
    pub fn display_label(&self) -> &'static str {
        match self {
            Category::Casual => "Casual / Essentials",
            Category::Formal => "Formal / Gala",
            Category::Outerwear => "Coats / Outerwear",
            Category::Accessories => "Accessories",
        }
    }

    /// Parse a category label. "Gala" and "Coat" map onto their tiers.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Casual" => Some(Category::Casual),
            "Formal" | "Gala" => Some(Category::Formal),
            "Outerwear" | "Coat" => Some(Category::Outerwear),
            "Accessories" => Some(Category::Accessories),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condition grade, ordered `Fair < Good < LikeNew < New`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Condition {
    Fair,
    #[default]
    Good,
    #[serde(rename = "Like New")]
    LikeNew,
    New,
}

impl Condition {
    /// Best grade first, the order the form lists them in
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            Condition::New => "Brand New (A)",
            Condition::LikeNew => "Like New (A-)",
            Condition::Good => "Good (B)",
            Condition::Fair => "Fair (C)",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "New" => Some(Condition::New),
            "Like New" => Some(Condition::LikeNew),
            "Good" => Some(Condition::Good),
            "Fair" => Some(Condition::Fair),
            _ => None,
        }
    }
}

/// A catalog record. Read-only once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub condition: Condition,
    /// Rent price per day
    pub price_rent: f64,
    pub price_buy: f64,
    /// Fixed when the item is created, never recomputed
    pub deposit: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub seller: String,
    /// Seller's academic batch label
    #[serde(default)]
    pub seller_year: String,
    /// 0-5
    #[serde(default)]
    pub seller_rating: f64,
}

impl Item {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
