//! Basic package price calculation
//!
//! Prices one catalog item over one requested duration, optionally discounted.
//! Accommodation is billed as a fixed number of nights per month (30 by
//! default) rather than by calendar days.

use crate::pricing::{requested_months, DurationSpec, PriceableItem};
use crate::types::{billing, Money, PortalConfig, ServiceType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Input of a single-item price calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    /// Item being priced
    #[serde(default)]
    pub item: Option<PriceableItem>,
    /// Requested duration
    #[serde(default)]
    pub duration: Option<DurationSpec>,
    /// Fraction taken off the base price, in `[0, 1]`
    #[serde(default, alias = "discount_rate")]
    pub discount_rate: Option<f64>,
}

impl PricingRequest {
    /// Request for an item over a duration
    pub fn new(item: PriceableItem, duration: DurationSpec) -> Self {
        Self { item: Some(item), duration: Some(duration), discount_rate: None }
    }

    /// Apply a discount rate
    pub fn with_discount(mut self, rate: f64) -> Self {
        self.discount_rate = Some(rate);
        self
    }
}

/// Breakdown of a computed price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Service type of the priced item, when an item was given
    pub service_type: Option<ServiceType>,
    /// Requested duration in months
    pub months: u32,
    /// Price before discount
    pub base: Money,
    /// Amount taken off by the discount
    pub discount: Money,
    /// Final amount
    pub total: Money,
    /// Discount rate actually applied, after clamping
    pub discount_rate: Option<f64>,
    /// Item, unit price and duration were all present
    #[serde(default)]
    pub complete: bool,
}

impl PriceQuote {
    /// Whether the inputs were complete enough to produce a price. A zero
    /// total from a free item still counts.
    pub fn is_computable(&self) -> bool {
        self.complete
    }
}

/// Price calculator for basic and combo packages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceCalculator {
    nights_per_month: u32,
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self { nights_per_month: billing::NIGHTS_PER_MONTH }
    }
}

impl PriceCalculator {
    /// Create a calculator billing `nights_per_month` nights per month
    pub fn new(nights_per_month: u32) -> Self {
        Self { nights_per_month }
    }

    /// Create a calculator from the portal configuration
    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.nights_per_month)
    }

    /// Nights billed per month of accommodation
    pub fn nights_per_month(&self) -> u32 {
        self.nights_per_month
    }

    /// Undiscounted price of an item over a duration.
    ///
    /// Accommodation: `pricePerNight * nights_per_month * months`.
    /// Lifestyle: `price * months`. A missing price yields zero.
    pub fn base_price(&self, item: &PriceableItem, duration: &DurationSpec) -> Money {
        let months = requested_months(duration);
        let base = match item {
            PriceableItem::Accommodation { price_per_night: Some(rate) } => {
                rate.times(self.nights_per_month).times(months)
            }
            PriceableItem::Lifestyle { price: Some(price) } => price.times(months),
            PriceableItem::Accommodation { price_per_night: None }
            | PriceableItem::Lifestyle { price: None } => Money::ZERO,
        };
        base.non_negative()
    }

    /// Final price of a request; zero when the item, its price or the
    /// duration is missing
    pub fn price(&self, request: &PricingRequest) -> Money {
        self.quote(request).total
    }

    /// Final price of a request with its breakdown
    pub fn quote(&self, request: &PricingRequest) -> PriceQuote {
        let service_type = request.item.as_ref().map(PriceableItem::service_type);
        let months = request.duration.as_ref().map(requested_months).unwrap_or(0);

        let complete = request.duration.is_some()
            && request.item.as_ref().is_some_and(PriceableItem::has_price);

        let base = match (&request.item, &request.duration) {
            (Some(item), Some(duration)) => self.base_price(item, duration),
            _ => Money::ZERO,
        };
        if !complete {
            debug!("Pricing inputs incomplete; price is zero");
        }

        let discount_rate = normalize_discount(request.discount_rate);
        let total = apply_discount(base, discount_rate);

        PriceQuote {
            service_type,
            months,
            base,
            discount: Money::from_minor(base.minor() - total.minor()),
            total,
            discount_rate,
            complete,
        }
    }
}

/// Clamp a discount rate into `[0, 1]`; non-finite rates are dropped
pub fn normalize_discount(rate: Option<f64>) -> Option<f64> {
    rate.filter(|r| r.is_finite()).map(|r| r.clamp(0.0, 1.0))
}

/// `base * (1 - rate)`, rounded to the nearest minor unit
pub fn apply_discount(base: Money, rate: Option<f64>) -> Money {
    match normalize_discount(rate) {
        Some(rate) => base.scaled(1.0 - rate).non_negative(),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(major: f64) -> Money {
        Money::from_major(major)
    }

    #[test]
    fn test_accommodation_month() {
        let calculator = PriceCalculator::default();
        let request =
            PricingRequest::new(PriceableItem::accommodation(money(100.0)), DurationSpec::months(1));
        assert_eq!(calculator.price(&request), money(3000.0));
    }

    #[test]
    fn test_accommodation_year() {
        let calculator = PriceCalculator::default();
        let request =
            PricingRequest::new(PriceableItem::accommodation(money(100.0)), DurationSpec::years(1));
        assert_eq!(calculator.price(&request), money(36000.0));
    }

    #[test]
    fn test_lifestyle_with_discount() {
        let calculator = PriceCalculator::default();
        let request =
            PricingRequest::new(PriceableItem::lifestyle(money(500.0)), DurationSpec::months(6))
                .with_discount(0.15);

        let quote = calculator.quote(&request);
        assert_eq!(quote.months, 6);
        assert_eq!(quote.base, money(3000.0));
        assert_eq!(quote.total, money(2550.0));
        assert_eq!(quote.discount, money(450.0));
        assert_eq!(quote.service_type, Some(ServiceType::Lifestyle));
    }

    #[test]
    fn test_missing_inputs_price_to_zero() {
        let calculator = PriceCalculator::default();

        let no_price = PricingRequest::new(
            PriceableItem::Accommodation { price_per_night: None },
            DurationSpec::months(1),
        );
        assert_eq!(calculator.price(&no_price), Money::ZERO);
        assert!(!calculator.quote(&no_price).is_computable());

        let no_duration = PricingRequest {
            item: Some(PriceableItem::lifestyle(money(10.0))),
            ..Default::default()
        };
        assert_eq!(calculator.price(&no_duration), Money::ZERO);
        assert!(!calculator.quote(&no_duration).is_computable());

        assert_eq!(calculator.price(&PricingRequest::default()), Money::ZERO);
        assert!(!calculator.quote(&PricingRequest::default()).is_computable());
    }

    #[test]
    fn test_free_item_is_computable() {
        let calculator = PriceCalculator::default();

        let free = PricingRequest::new(PriceableItem::lifestyle(Money::ZERO), DurationSpec::months(3));
        let quote = calculator.quote(&free);
        assert_eq!(quote.total, Money::ZERO);
        assert!(quote.is_computable());

        let fully_discounted =
            PricingRequest::new(PriceableItem::accommodation(money(80.0)), DurationSpec::months(1))
                .with_discount(1.0);
        assert!(calculator.quote(&fully_discounted).is_computable());
    }

    #[test]
    fn test_discount_rate_is_clamped() {
        assert_eq!(normalize_discount(Some(1.5)), Some(1.0));
        assert_eq!(normalize_discount(Some(-0.2)), Some(0.0));
        assert_eq!(normalize_discount(Some(f64::NAN)), None);
        assert_eq!(apply_discount(money(100.0), Some(2.0)), Money::ZERO);
        assert_eq!(apply_discount(money(100.0), None), money(100.0));
    }

    #[test]
    fn test_custom_nights_per_month() {
        let calculator = PriceCalculator::new(31);
        let base = calculator
            .base_price(&PriceableItem::accommodation(money(10.0)), &DurationSpec::months(2));
        assert_eq!(base, money(620.0));
    }

    #[test]
    fn test_pricing_is_repeatable() {
        let calculator = PriceCalculator::default();
        let request =
            PricingRequest::new(PriceableItem::lifestyle(money(333.33)), DurationSpec::years(1))
                .with_discount(0.1);
        assert_eq!(calculator.quote(&request), calculator.quote(&request));
    }

    #[test]
    fn test_request_from_json() {
        let request: PricingRequest = serde_json::from_str(
            r#"{"item": {"serviceType": 1, "price": 500}, "duration": {"value": 6, "unit": "Month"}, "discountRate": 0.15}"#,
        )
        .unwrap();
        assert_eq!(PriceCalculator::default().price(&request), money(2550.0));

        let empty_item: PricingRequest =
            serde_json::from_str(r#"{"item": {}, "duration": {"value": 1, "unit": "Month"}}"#)
                .unwrap();
        assert_eq!(PriceCalculator::default().price(&empty_item), Money::ZERO);
    }
}
