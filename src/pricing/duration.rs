//! Catalog durations
//!
//! Durations are chosen from catalog records expressed in months or years and
//! are always normalized to a month count before any price math.

use crate::types::{DurationId, DurationUnit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog duration option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSpec {
    /// Backend identifier of the duration option
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<DurationId>,
    /// Number of units
    pub value: u32,
    /// Unit of `value`
    pub unit: DurationUnit,
}

impl DurationSpec {
    /// Create a duration
    pub fn new(value: u32, unit: DurationUnit) -> Self {
        Self { id: None, value, unit }
    }

    /// Duration of `value` months
    pub fn months(value: u32) -> Self {
        Self::new(value, DurationUnit::Month)
    }

    /// Duration of `value` years
    pub fn years(value: u32) -> Self {
        Self::new(value, DurationUnit::Year)
    }

    /// Attach the backend identifier
    pub fn with_id(mut self, id: impl Into<DurationId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Month count of this duration
    pub fn to_months(&self) -> u32 {
        requested_months(self)
    }
}

impl fmt::Display for DurationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.value == 1 { "" } else { "s" };
        write!(f, "{} {}{}", self.value, self.unit, plural)
    }
}

/// Normalize a duration to months: years count as twelve months
pub fn requested_months(duration: &DurationSpec) -> u32 {
    duration.value.saturating_mul(duration.unit.months())
}
