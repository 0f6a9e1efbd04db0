//! Registration categories and their fees
//!
//! Each category has an early-bird and a regular fee. The early-bird fee
//! applies up to and including the closing day (UTC calendar date).

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::builtin;

/// Currency a fee is quoted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
        }
    }
}

/// A whole-unit amount in one currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub amount: u32,
    pub currency: Currency,
}

impl Fee {
    pub fn inr(amount: u32) -> Self {
        Self {
            amount,
            currency: Currency::Inr,
        }
    }

    pub fn usd(amount: u32) -> Self {
        Self {
            amount,
            currency: Currency::Usd,
        }
    }
}

impl fmt::Display for Fee {
    /// Symbol plus comma-grouped amount, e.g. "₹2,500"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.amount.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        write!(f, "{}{}", self.currency.symbol(), grouped)
    }
}

/// One registration category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationTier {
    pub name: String,
    pub early_bird: Fee,
    pub regular: Fee,
    #[serde(default)]
    pub features: Vec<String>,
    /// Highlighted as the most popular choice
    #[serde(default)]
    pub popular: bool,
}

impl RegistrationTier {
    /// Fee payable at `now`
    pub fn fee_at(&self, now: DateTime<Utc>, early_bird_until: NaiveDate) -> Fee {
        if is_early_bird(now, early_bird_until) {
            self.early_bird
        } else {
            self.regular
        }
    }

    /// How much registering early saves
    pub fn early_bird_saving(&self) -> u32 {
        self.regular.amount.saturating_sub(self.early_bird.amount)
    }
}

/// True while `now` falls on or before the early-bird closing day
pub fn is_early_bird(now: DateTime<Utc>, early_bird_until: NaiveDate) -> bool {
    now.date_naive() <= early_bird_until
}

/// Registration section of the site config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Last day (inclusive) of early-bird pricing
    pub early_bird_until: NaiveDate,
    pub tiers: Vec<RegistrationTier>,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            early_bird_until: builtin::early_bird_until(),
            tiers: builtin::registration_tiers(),
        }
    }
}

impl RegistrationConfig {
    /// Look up a category by name, ignoring case
    pub fn tier(&self, name: &str) -> Option<&RegistrationTier> {
        let name = name.trim();
        self.tiers
            .iter()
            .find(|tier| tier.name.eq_ignore_ascii_case(name))
    }

    pub fn is_early_bird(&self, now: DateTime<Utc>) -> bool {
        is_early_bird(now, self.early_bird_until)
    }

    /// Every category with the fee that applies at `now`
    pub fn fees_at(&self, now: DateTime<Utc>) -> Vec<(&str, Fee)> {
        self.tiers
            .iter()
            .map(|tier| (tier.name.as_str(), tier.fee_at(now, self.early_bird_until)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fee_display() {
        assert_eq!(Fee::inr(2500).to_string(), "₹2,500");
        assert_eq!(Fee::usd(150).to_string(), "$150");
        assert_eq!(Fee::inr(1_234_567).to_string(), "₹1,234,567");
    }

    #[test]
    fn test_early_bird_closing_day_is_inclusive() {
        let registration = RegistrationConfig::default();
        let student = registration.tier("student").unwrap();

        let last_day = Utc.with_ymd_and_hms(2025, 2, 28, 23, 59, 59).unwrap();
        assert_eq!(student.fee_at(last_day, registration.early_bird_until), Fee::inr(2500));

        let next_day = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(student.fee_at(next_day, registration.early_bird_until), Fee::inr(3000));
        assert!(!registration.is_early_bird(next_day));
    }

    #[test]
    fn test_builtin_tiers() {
        let registration = RegistrationConfig::default();
        assert_eq!(registration.tiers.len(), 4);
        assert_eq!(
            registration.tiers.iter().filter(|t| t.popular).map(|t| t.name.as_str()).collect::<Vec<_>>(),
            vec!["Academic"]
        );
        let international = registration.tier("International").unwrap();
        assert_eq!(international.early_bird_saving(), 50);
        assert_eq!(international.regular.currency, Currency::Usd);
    }

    #[test]
    fn test_fees_at_lists_every_tier() {
        let registration = RegistrationConfig::default();
        let now = Utc.with_ymd_and_hms(2025, 1, 20, 12, 0, 0).unwrap();
        let fees = registration.fees_at(now);
        assert_eq!(fees.len(), 4);
        assert_eq!(fees[1], ("Academic", Fee::inr(4500)));
    }

    #[test]
    fn test_unknown_tier() {
        assert!(RegistrationConfig::default().tier("Sponsor").is_none());
    }
}
