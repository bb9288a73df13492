//! Package pricing
//!
//! This module prices basic packages (one room or entitlement over one
//! duration) and combo packages (several basic packages under one duration).
//!
//! # Overview
//!
//! - **DurationSpec**: catalog duration, normalized to months
//! - **PriceableItem**: accommodation or lifestyle item, tagged by service type
//! - **PriceCalculator**: basic and combo price computation
//! - **ComboComponent**: one basic package's share of a combo
//!
//! Missing inputs never raise errors: they price to zero so views can show a
//! "not yet computable" state.
//!
//! # Usage Example
//!
//! ```rust
//! use nextu_portal_core::pricing::*;
//! use nextu_portal_core::types::Money;
//!
//! let calculator = PriceCalculator::default();
//!
//! let room = PriceableItem::accommodation(Money::from_major(100.0));
//! let request = PricingRequest::new(room, DurationSpec::years(1));
//! assert_eq!(calculator.price(&request), Money::from_major(36000.0));
//!
//! let combo = ComboRequest {
//!     components: vec![ComboComponent::new(Money::from_major(50.0), DurationSpec::months(1))],
//!     duration: Some(DurationSpec::months(6)),
//!     discount_rate: None,
//! };
//! assert_eq!(calculator.price_combo(&combo), Money::from_major(300.0));
//! ```

pub mod calculator;
pub mod catalog;
pub mod combo;
pub mod duration;

// Re-export all public types for convenience
pub use calculator::*;
pub use catalog::*;
pub use combo::*;
pub use duration::*;
