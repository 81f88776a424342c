//! Listing Intake Form
//!
//! Raw form fields in, validated catalog record out.

use crate::config::ClosetConfig;
use crate::error::{ClosetError, Result};
use crate::model::{Category, Condition, Item, ItemId};

/// Tag every freshly listed item carries
pub const NEW_ARRIVAL_TAG: &str = "new-arrival";

/// Deposit tier for a category
pub fn deposit_for(category: Category) -> f64 {
    match category {
        Category::Formal => 75.0,
        Category::Outerwear => 30.0,
        Category::Casual | Category::Accessories => 10.0,
    }
}

/// Source of listing photos. Stands in for an image storage service.
pub trait ImageUploader {
    fn upload(&mut self) -> Result<String>;
}

/// Cycles through a fixed list of stock photos
#[derive(Debug, Clone)]
pub struct StockImageUploader {
    images: Vec<String>,
    next: usize,
}

impl StockImageUploader {
    pub fn new(images: Vec<String>) -> Self {
        Self { images, next: 0 }
    }
}

impl ImageUploader for StockImageUploader {
    fn upload(&mut self) -> Result<String> {
        if self.images.is_empty() {
            return Err(ClosetError::Upload("no stock images configured".into()));
        }
        let url = self.images[self.next % self.images.len()].clone();
        self.next += 1;
        Ok(url)
    }
}

/// Form state exactly as typed
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub category: Category,
    pub size: String,
    pub condition: Condition,
    pub price_rent: String,
    pub price_buy: String,
    pub description: String,
    /// Empty means "use the placeholder"
    pub image: String,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: Category::Casual,
            size: "M".to_string(),
            condition: Condition::Good,
            price_rent: String::new(),
            price_buy: String::new(),
            description: String::new(),
            image: String::new(),
        }
    }
}

/// A draft that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidListing {
    pub title: String,
    pub category: Category,
    pub size: String,
    pub condition: Condition,
    pub price_rent: f64,
    pub price_buy: f64,
    pub description: String,
    pub image: Option<String>,
}

fn parse_price(field: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ClosetError::InvalidListing(format!("{} must be a number", field)))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ClosetError::InvalidListing(format!("{} must be greater than 0", field)));
    }
    Ok(value)
}

impl ListingDraft {
    /// Deposit the form previews for the selected category
    pub fn suggested_deposit(&self) -> f64 {
        deposit_for(self.category)
    }

    /// Fill the image field from an uploader
    pub fn attach_upload(&mut self, uploader: &mut dyn ImageUploader) -> Result<()> {
        self.image = uploader.upload()?;
        Ok(())
    }

    /// Presence and positivity checks only
    pub fn validate(&self) -> Result<ValidListing> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ClosetError::InvalidListing("title is required".into()));
        }
        let price_rent = parse_price("Rent price", &self.price_rent)?;
        let price_buy = parse_price("Buy price", &self.price_buy)?;
        let image = self.image.trim();

        Ok(ValidListing {
            title: title.to_string(),
            category: self.category,
            size: self.size.clone(),
            condition: self.condition,
            price_rent,
            price_buy,
            description: self.description.clone(),
            image: (!image.is_empty()).then(|| image.to_string()),
        })
    }
}

impl ValidListing {
    /// Build the catalog record: deposit tier, seller stamp, tags
    pub fn into_item(self, id: ItemId, config: &ClosetConfig) -> Item {
        let seller = &config.seller;
        Item {
            id,
            deposit: deposit_for(self.category),
            tags: vec![self.category.as_str().to_lowercase(), NEW_ARRIVAL_TAG.to_string()],
            title: self.title,
            category: self.category,
            size: self.size,
            condition: self.condition,
            price_rent: self.price_rent,
            price_buy: self.price_buy,
            image: self.image.unwrap_or_else(|| config.placeholder_image.clone()),
            description: self.description,
            seller: seller.name.clone(),
            seller_year: seller.batch.clone(),
            seller_rating: seller.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blazer() -> ListingDraft {
        ListingDraft {
            title: "Navy Blazer".to_string(),
            category: Category::Formal,
            price_rent: "10".to_string(),
            price_buy: "50".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_deposit_tiers() {
        assert_eq!(deposit_for(Category::Formal), 75.0);
        assert_eq!(deposit_for(Category::Outerwear), 30.0);
        assert_eq!(deposit_for(Category::Casual), 10.0);
        assert_eq!(deposit_for(Category::Accessories), 10.0);
        for c in Category::ALL {
            assert!([75.0, 30.0, 10.0].contains(&deposit_for(c)));
        }
    }

    #[test]
    fn test_defaults() {
        let draft = ListingDraft::default();
        assert_eq!(draft.category, Category::Casual);
        assert_eq!(draft.size, "M");
        assert_eq!(draft.condition, Condition::Good);
        assert_eq!(draft.suggested_deposit(), 10.0);
    }

    #[test]
    fn test_into_item() {
        let config = ClosetConfig::default();
        let item = blazer()
            .validate()
            .unwrap()
            .into_item(ItemId(42), &config);

        assert_eq!(item.deposit, 75.0);
        assert_eq!(item.tags, vec!["formal".to_string(), "new-arrival".to_string()]);
        assert_eq!(item.price_rent, 10.0);
        assert_eq!(item.price_buy, 50.0);
        assert_eq!(item.seller, "You (Student)");
        assert_eq!(item.seller_rating, 5.0);
        assert_eq!(item.seller_year, "Batch 2025");
        assert_eq!(item.image, config.placeholder_image);
    }

    #[test]
    fn test_rejects_missing_title() {
        let mut draft = blazer();
        draft.title = "   ".to_string();
        assert!(matches!(draft.validate(), Err(ClosetError::InvalidListing(_))));
    }

    #[test]
    fn test_rejects_bad_prices() {
        for bad in ["", "abc", "0", "-5", "NaN", "inf"] {
            let mut draft = blazer();
            draft.price_buy = bad.to_string();
            assert!(draft.validate().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_upload_rotates() {
        let mut uploader = StockImageUploader::new(vec!["a".into(), "b".into()]);
        let mut draft = blazer();
        draft.attach_upload(&mut uploader).unwrap();
        assert_eq!(draft.image, "a");
        draft.attach_upload(&mut uploader).unwrap();
        assert_eq!(draft.image, "b");
        draft.attach_upload(&mut uploader).unwrap();
        assert_eq!(draft.image, "a");

        let item = draft.validate().unwrap().into_item(ItemId(1), &ClosetConfig::default());
        assert_eq!(item.image, "a");
    }

    #[test]
    fn test_upload_without_images_fails() {
        let mut uploader = StockImageUploader::new(Vec::new());
        assert!(matches!(uploader.upload(), Err(ClosetError::Upload(_))));
    }
}
