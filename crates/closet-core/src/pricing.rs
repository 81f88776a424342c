//! Pricing Calculator

use serde::Serialize;

use crate::config::FeeSchedule;
use crate::filter::ViewMode;
use crate::model::Item;

/// Checkout breakdown for one item in one mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub mode: ViewMode,
    pub base: f64,
    pub fee: f64,
    pub fee_rate: f64,
    pub deposit_due: f64,
    pub total: f64,
}

impl Quote {
    /// e.g. "2% Platform Fee"
    pub fn fee_label(&self) -> String {
        format!("{}% Platform Fee", round2(self.fee_rate * 100.0))
    }

    pub fn price_label(&self) -> &'static str {
        match self.mode {
            ViewMode::Rent => "Daily Rental Rate",
            ViewMode::Buy => "Purchase Price",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self.mode {
            ViewMode::Rent => "Book Dates & Pay",
            ViewMode::Buy => "Buy Now",
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn quote(item: &Item, mode: ViewMode, fees: &FeeSchedule) -> Quote {
    let (base, fee_rate, deposit_due) = match mode {
        ViewMode::Rent => (item.price_rent, fees.rent_rate, item.deposit),
        ViewMode::Buy => (item.price_buy, fees.buy_rate, 0.0),
    };
    let fee = round2(base * fee_rate);
    Quote {
        mode,
        base,
        fee,
        fee_rate,
        deposit_due,
        total: round2(base + deposit_due + fee),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_items;

    #[test]
    fn test_rent_quote() {
        let gown = &seed_items()[0];
        let q = quote(gown, ViewMode::Rent, &FeeSchedule::default());
        assert_eq!(q.base, 15.0);
        assert_eq!(q.fee, 0.3);
        assert_eq!(q.deposit_due, 75.0);
        assert_eq!(q.total, 90.3);
        assert_eq!(q.fee_label(), "2% Platform Fee");
        assert_eq!(q.action_label(), "Book Dates & Pay");
    }

    #[test]
    fn test_buy_quote() {
        let gown = &seed_items()[0];
        let q = quote(gown, ViewMode::Buy, &FeeSchedule::default());
        assert_eq!(q.base, 120.0);
        assert_eq!(q.fee, 4.8);
        assert_eq!(q.deposit_due, 0.0);
        assert_eq!(q.total, 124.8);
        assert_eq!(q.fee_label(), "4% Platform Fee");
        assert_eq!(q.price_label(), "Purchase Price");
    }

    #[test]
    fn test_fee_rounds_to_cents() {
        let mut item = seed_items()[0].clone();
        item.price_buy = 19.99;
        let q = quote(&item, ViewMode::Buy, &FeeSchedule::default());
        assert_eq!(q.fee, 0.8);
        assert_eq!(q.total, 20.79);
    }

    #[test]
    fn test_total_never_below_base() {
        let fees = FeeSchedule::default();
        for item in seed_items() {
            for mode in [ViewMode::Rent, ViewMode::Buy] {
                let q = quote(&item, mode, &fees);
                assert!(q.total >= q.base, "{} {:?}", item.title, mode);
                let rate = if mode == ViewMode::Rent { 0.02 } else { 0.04 };
                assert_eq!(q.fee, round2(q.base * rate));
            }
        }
    }
}
