//! Next U Portal Core
//!
//! The reusable logic behind the Next U back-office portal: deciding which
//! dashboard a signed-in user may open, and pricing the room and lifestyle
//! packages sold to members.
//!
//! # Overview
//!
//! The portal's pages, forms and REST calls live elsewhere. This library holds
//! the two pieces of logic those pages share:
//!
//! - **Access routing**: each role owns one dashboard prefix. Anonymous or
//!   unreadable sessions go to the login page; users outside their area are
//!   sent back to their own dashboard.
//! - **Pricing**: accommodation is billed per night at 30 nights per month,
//!   lifestyle entitlements per month, with an optional discount. Combo
//!   packages sum their basic packages over the combo duration.
//!
//! Both are pure functions over values supplied by the caller. Neither reads
//! storage nor talks to the backend.
//!
//! ## Quick Start
//!
//! ```rust
//! use nextu_portal_core::*;
//!
//! let router = AccessRouter::default();
//! let decision = router.decide_session(Some(r#"{"role":"staff_services"}"#), "/admin");
//! assert_eq!(decision, AccessDecision::Redirect("/staff/services".to_string()));
//!
//! let calculator = PriceCalculator::default();
//! let request = PricingRequest::new(
//!     PriceableItem::lifestyle(Money::from_major(500.0)),
//!     DurationSpec::months(6),
//! )
//! .with_discount(0.15);
//! assert_eq!(calculator.price(&request), Money::from_major(2550.0));
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums, money and configuration
//! - [`access`]: Route table, session decoding and the access router
//! - [`pricing`]: Durations, catalog items, basic and combo pricing
//! - [`workflow`]: Review of content, events and packages
//! - [`portal`]: Errors, logging and request-document loading
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │   Access    │    │  Workflow   │
//! │             │    │             │    │             │
//! │ Role        │◄───┤ RouteTable  │◄───┤ Approval    │
//! │ Money       │    │ Principal   │    │ Requests    │
//! │ Config      │    │ Router      │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲
//!        │
//! ┌─────────────┐    ┌─────────────┐
//! │  Pricing    │    │   Portal    │
//! │             │    │             │
//! │ Calculator  │◄───┤ Errors      │
//! │ Combo       │    │ Logging     │
//! │ Catalog     │    │ Requests    │
//! └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod access;
pub mod portal;
pub mod pricing;
pub mod types;
pub mod workflow;

// Core types and identifiers
pub use types::{
    ApprovalId,
    ApprovalStatus,
    ApprovalSubject,
    ConfigValidationError,
    DurationId,
    DurationUnit,
    LocationId,
    Money,
    PackageId,
    // Configuration
    PortalConfig,
    // Identifiers
    PrincipalId,
    // Enums
    Role,
    ServiceType,
};

// Access routing
pub use access::{AccessDecision, AccessRouter, Principal, RouteTable};

// Pricing
pub use pricing::{
    aggregate_combo, requested_months, BasicPackage, ComboComponent, ComboQuote, ComboRequest,
    DurationSpec, PriceCalculator, PriceQuote, PriceableItem, PricingRequest,
};

// Workflow
pub use workflow::{ApprovalAction, ApprovalRequest, WorkflowError};

// Runtime support
pub use portal::{LoggingConfig, PortalError, PortalResult};
