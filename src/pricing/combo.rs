//! Combo package aggregation
//!
//! A combo bundles basic packages under one combo duration. Each basic package
//! contributes its own price times the number of its native durations that fit
//! in the combo duration, rounded to the nearest whole number. This is an
//! accepted approximation: a 4-month item in a 6-month combo counts twice, not
//! one and a half times.

use crate::pricing::{apply_discount, normalize_discount, requested_months, DurationSpec};
use crate::pricing::{PriceCalculator, PriceableItem};
use crate::types::{Money, PackageId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A basic package as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicPackage {
    /// Backend package identifier
    #[serde(default, alias = "_id")]
    pub id: Option<PackageId>,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Room or entitlement being sold
    pub item: PriceableItem,
    /// Duration the package is sold for
    #[serde(default)]
    pub duration: Option<DurationSpec>,
}

/// One basic package inside a combo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboComponent {
    /// Backend identifier of the basic package
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<PackageId>,
    /// Price of the basic package over its native duration
    #[serde(default)]
    pub price: Option<Money>,
    /// Duration the basic package is sold for
    #[serde(default, alias = "duration")]
    pub native_duration: Option<DurationSpec>,
}

impl ComboComponent {
    /// Component with a known price and native duration
    pub fn new(price: Money, native_duration: DurationSpec) -> Self {
        Self { package_id: None, price: Some(price), native_duration: Some(native_duration) }
    }

    /// Build a component from a catalog package, pricing it over its own duration
    pub fn from_basic(package: &BasicPackage, calculator: &PriceCalculator) -> Self {
        let price = match (&package.item, &package.duration) {
            (item, Some(duration)) if item.has_price() => {
                Some(calculator.base_price(item, duration))
            }
            _ => None,
        };

        Self {
            package_id: package.id.clone(),
            price,
            native_duration: package.duration.clone(),
        }
    }

    /// Native duration in months; zero when absent
    pub fn native_months(&self) -> u32 {
        self.native_duration.as_ref().map(requested_months).unwrap_or(0)
    }

    /// How many native durations the combo covers, rounded half away from zero
    pub fn multiplier(&self, combo_months: u32) -> u32 {
        match self.native_months() {
            0 => 0,
            native => (f64::from(combo_months) / f64::from(native)).round() as u32,
        }
    }

    /// Contribution of this component to a combo of `combo_months`
    pub fn contribution(&self, combo_months: u32) -> Money {
        match self.price {
            Some(price) => price.times(self.multiplier(combo_months)).non_negative(),
            None => Money::ZERO,
        }
    }
}

/// Sum of every component's contribution under the combo duration
pub fn aggregate_combo(components: &[ComboComponent], combo_duration: &DurationSpec) -> Money {
    let combo_months = requested_months(combo_duration);
    components.iter().map(|component| component.contribution(combo_months)).sum()
}

/// Input of a combo price calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboRequest {
    /// Basic packages in the combo
    #[serde(default)]
    pub components: Vec<ComboComponent>,
    /// Combo duration
    #[serde(default)]
    pub duration: Option<DurationSpec>,
    /// Fraction taken off the summed price, in `[0, 1]`
    #[serde(default, alias = "discount_rate")]
    pub discount_rate: Option<f64>,
}

/// Breakdown of a combo price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboQuote {
    /// Combo duration in months
    pub months: u32,
    /// Contribution of each component, in request order
    pub contributions: Vec<Money>,
    /// Sum of contributions
    pub subtotal: Money,
    /// Amount taken off by the discount
    pub discount: Money,
    /// Final amount
    pub total: Money,
}

impl PriceCalculator {
    /// Combo breakdown; every contribution is zero when the combo has no duration
    pub fn quote_combo(&self, request: &ComboRequest) -> ComboQuote {
        let months = request.duration.as_ref().map(requested_months).unwrap_or(0);
        if request.duration.is_none() {
            debug!("Combo has no duration; price is zero");
        }

        let contributions: Vec<Money> = request
            .components
            .iter()
            .map(|component| component.contribution(months))
            .collect();
        let subtotal: Money = contributions.iter().copied().sum();
        let total = apply_discount(subtotal, normalize_discount(request.discount_rate));

        ComboQuote {
            months,
            contributions,
            subtotal,
            discount: Money::from_minor(subtotal.minor() - total.minor()),
            total,
        }
    }

    /// Final combo price
    pub fn price_combo(&self, request: &ComboRequest) -> Money {
        self.quote_combo(request).total
    }

    /// Build combo components from catalog packages
    pub fn components_from(&self, packages: &[BasicPackage]) -> Vec<ComboComponent> {
        packages.iter().map(|package| ComboComponent::from_basic(package, self)).collect()
    }
}

impl BasicPackage {
    /// Package selling `item` for `duration`
    pub fn new(name: impl Into<String>, item: PriceableItem, duration: DurationSpec) -> Self {
        Self { id: None, name: name.into(), item, duration: Some(duration) }
    }
}
