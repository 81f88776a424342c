//! Seed Catalog
//!
//! Mock listings shown when nothing has been persisted yet.

use crate::model::{Category, Condition, Item, ItemId};

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u64,
    title: &str,
    category: Category,
    tags: &[&str],
    size: &str,
    condition: Condition,
    price_rent: f64,
    price_buy: f64,
    deposit: f64,
    image: &str,
    description: &str,
    seller: (&str, &str, f64),
) -> Item {
    Item {
        id: ItemId(id),
        title: title.to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        size: size.to_string(),
        condition,
        price_rent,
        price_buy,
        deposit,
        image: format!("https://images.unsplash.com/{}?auto=format&fit=crop&q=80&w=800", image),
        description: description.to_string(),
        seller: seller.0.to_string(),
        seller_year: seller.1.to_string(),
        seller_rating: seller.2,
    }
}

pub fn seed_items() -> Vec<Item> {
    vec![
        seed(
            1, "Midnight Velvet Gown", Category::Formal, &["gala", "evening"], "S",
            Condition::LikeNew, 15.0, 120.0, 75.0, "photo-1595777457583-95e059d581b8",
            "Worn once to the winter gala. Dry cleaned and ready.",
            ("Chloé D.", "Batch 2024", 4.9),
        ),
        seed(
            2, "Charcoal Two-Piece Suit", Category::Formal, &["interview", "gala"], "M",
            Condition::New, 12.0, 180.0, 75.0, "photo-1594938298603-c8148c4dae35",
            "Tailored fit, perfect for assessment centres and networking nights.",
            ("Thomas B.", "Batch 2025", 4.8),
        ),
        seed(
            3, "Navy Interview Blazer", Category::Formal, &["interview"], "L",
            Condition::Good, 8.0, 60.0, 75.0, "photo-1507679799987-c73779587ccf",
            "Classic single-breasted blazer.",
            ("Marie L.", "Batch 2025", 5.0),
        ),
        seed(
            4, "Camel Wool Coat", Category::Outerwear, &["essentials", "winter"], "M",
            Condition::LikeNew, 6.0, 90.0, 30.0, "photo-1539533018447-63fcce2678e3",
            "Warm enough for the walk to Champerret in January.",
            ("Inès R.", "Batch 2026", 4.7),
        ),
        seed(
            5, "Oversized Denim Jacket", Category::Outerwear, &["essentials"], "L",
            Condition::Good, 4.0, 35.0, 30.0, "photo-1576995853123-5a10305d93c0",
            "Vintage wash, slightly oversized.",
            ("Lucas M.", "Batch 2024", 4.5),
        ),
        seed(
            6, "White Oxford Shirt", Category::Casual, &["essentials", "interview"], "M",
            Condition::New, 3.0, 25.0, 10.0, "photo-1596755094514-f87e34085b2c",
            "Crisp cotton, never worn.",
            ("Marie L.", "Batch 2025", 5.0),
        ),
        seed(
            7, "Silk Pocket Square Set", Category::Accessories, &["gala"], "One Size",
            Condition::LikeNew, 2.0, 18.0, 10.0, "photo-1589756823695-278bc923f962",
            "Three colours to match any suit.",
            ("Thomas B.", "Batch 2025", 4.8),
        ),
        seed(
            8, "Leather Tote Bag", Category::Accessories, &["essentials"], "One Size",
            Condition::Fair, 3.0, 40.0, 10.0, "photo-1548036328-c9fa89d128fa",
            "Fits a 15\" laptop. Some wear on the handles.",
            ("Chloé D.", "Batch 2024", 4.9),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::deposit_for;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let items = seed_items();
        let ids: HashSet<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_seed_deposits_follow_tiers() {
        for item in seed_items() {
            assert_eq!(item.deposit, deposit_for(item.category), "{}", item.title);
        }
    }
}
