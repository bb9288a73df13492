//! Priceable catalog items
//!
//! The backend tags catalog records with a numeric `serviceType`. Here the tag
//! becomes the variant of [`PriceableItem`], and each variant carries only the
//! price field that applies to it.

use crate::types::{Money, ServiceType};
use serde::{Deserialize, Serialize};

/// A catalog item that can be priced over a duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CatalogRecord", into = "CatalogRecord")]
pub enum PriceableItem {
    /// Room inventory, billed per night
    Accommodation {
        /// Nightly room rate
        price_per_night: Option<Money>,
    },
    /// Lifestyle entitlement, billed per month
    Lifestyle {
        /// Charge for one month of the entitlement
        price: Option<Money>,
    },
}

impl PriceableItem {
    /// Accommodation item with a nightly rate
    pub fn accommodation(price_per_night: Money) -> Self {
        PriceableItem::Accommodation { price_per_night: Some(price_per_night) }
    }

    /// Lifestyle entitlement with a monthly price
    pub fn lifestyle(price: Money) -> Self {
        PriceableItem::Lifestyle { price: Some(price) }
    }

    /// Service type discriminant
    pub fn service_type(&self) -> ServiceType {
        match self {
            PriceableItem::Accommodation { .. } => ServiceType::Accommodation,
            PriceableItem::Lifestyle { .. } => ServiceType::Lifestyle,
        }
    }

    /// The item's own price field, if the catalog supplied one
    pub fn unit_price(&self) -> Option<Money> {
        match self {
            PriceableItem::Accommodation { price_per_night } => *price_per_night,
            PriceableItem::Lifestyle { price } => *price,
        }
    }

    /// Whether the item can be priced
    pub fn has_price(&self) -> bool {
        self.unit_price().is_some()
    }
}

/// Catalog record as sent by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRecord {
    #[serde(default, alias = "service_type", skip_serializing_if = "Option::is_none")]
    service_type: Option<ServiceType>,
    #[serde(default, alias = "price_per_night", skip_serializing_if = "Option::is_none")]
    price_per_night: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<Money>,
}

impl From<CatalogRecord> for PriceableItem {
    fn from(record: CatalogRecord) -> Self {
        // Untagged records are classified by the price field they carry
        let service_type = record.service_type.unwrap_or(match (record.price_per_night, record.price) {
            (None, Some(_)) => ServiceType::Lifestyle,
            _ => ServiceType::Accommodation,
        });

        match service_type {
            ServiceType::Accommodation => {
                PriceableItem::Accommodation { price_per_night: record.price_per_night }
            }
            ServiceType::Lifestyle => PriceableItem::Lifestyle { price: record.price },
        }
    }
}

impl From<PriceableItem> for CatalogRecord {
    fn from(item: PriceableItem) -> Self {
        let service_type = Some(item.service_type());
        match item {
            PriceableItem::Accommodation { price_per_night } => {
                CatalogRecord { service_type, price_per_night, price: None }
            }
            PriceableItem::Lifestyle { price } => {
                CatalogRecord { service_type, price_per_night: None, price }
            }
        }
    }
}
