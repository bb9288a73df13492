//! Role-based dashboard access
//!
//! This module decides which dashboard area a session may open.
//!
//! # Overview
//!
//! - **RouteTable**: the one mapping from role to dashboard prefix
//! - **Principal**: the typed session user, decoded from storage
//! - **AccessRouter**: turns `(principal, path)` into `Allow` or `Redirect`
//!
//! # Usage Example
//!
//! ```rust
//! use nextu_portal_core::access::*;
//! use nextu_portal_core::types::Role;
//!
//! let router = AccessRouter::default();
//!
//! let manager = Principal::with_role(Role::Manager);
//! assert_eq!(router.decide(Some(&manager), "/manager/rooms"), AccessDecision::Allow);
//! assert_eq!(
//!     router.decide(Some(&manager), "/admin"),
//!     AccessDecision::Redirect("/manager".to_string())
//! );
//!
//! // Unreadable sessions are anonymous
//! assert_eq!(
//!     router.decide_session(Some("not json"), "/manager"),
//!     AccessDecision::Redirect("/login".to_string())
//! );
//! ```

pub mod route_table;
pub mod router;
pub mod session;

// Re-export all public types for convenience
pub use route_table::*;
pub use router::*;
pub use session::*;
