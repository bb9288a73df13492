//! Core types and identifiers for the portal core
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the portal logic.
//!
//! # Overview
//!
//! - **Identifiers**: backend-issued opaque IDs and prefixed UUIDs for approvals
//! - **Enums**: roles, duration units, catalog service types, approval states
//! - **Money**: fixed-point amounts in minor units
//! - **Configuration**: portal configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use nextu_portal_core::types::*;
//!
//! let role: Role = "staff_membership".parse().unwrap();
//! assert_eq!(role, Role::StaffMembership);
//!
//! let price = Money::from_major(100.0).times(30);
//! assert_eq!(price.to_string(), "3000.00");
//!
//! let config = PortalConfig::default();
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;
pub mod money;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
pub use money::*;
