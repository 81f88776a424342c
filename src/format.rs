//! Display Formatting
//!
//! Helpers for prices and pickup-code countdowns.

use chrono::{DateTime, Utc};

/// Whole amounts without decimals ("€15"), otherwise cents ("€4.50")
pub fn euro(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("€{}", amount as i64)
    } else {
        format!("€{:.2}", amount)
    }
}

/// Always two decimals ("€90.30")
pub fn euro_cents(amount: f64) -> String {
    format!("€{:.2}", amount)
}

/// "Code expires in 24h" style countdown, rounded up to the hour
pub fn expires_in(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (expires_at - now).num_minutes();
    if minutes <= 0 {
        return "Code expired".to_string();
    }
    if minutes < 60 {
        return format!("Code expires in {}m", minutes);
    }
    let hours = (minutes + 59) / 60;
    format!("Code expires in {}h", hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_euro() {
        assert_eq!(euro(15.0), "€15");
        assert_eq!(euro(4.5), "€4.50");
        assert_eq!(euro_cents(90.3), "€90.30");
        assert_eq!(euro_cents(0.0), "€0.00");
    }

    #[test]
    fn test_expires_in() {
        let now = Utc::now();
        assert_eq!(expires_in(now + Duration::hours(24), now), "Code expires in 24h");
        assert_eq!(expires_in(now + Duration::minutes(90), now), "Code expires in 2h");
        assert_eq!(expires_in(now + Duration::minutes(5), now), "Code expires in 5m");
        assert_eq!(expires_in(now - Duration::minutes(1), now), "Code expired");
    }
}
