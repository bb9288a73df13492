//! Back-office review workflow
//!
//! Content, events and packages are published only after review. This module
//! holds the request record, its state transitions and the reviewer rules.
//!
//! # Usage Example
//!
//! ```rust
//! use nextu_portal_core::access::Principal;
//! use nextu_portal_core::types::{ApprovalStatus, ApprovalSubject, Role};
//! use nextu_portal_core::workflow::*;
//!
//! let author = Principal::with_role(Role::StaffContent).with_id("u-1");
//! let admin = Principal::with_role(Role::Admin).with_id("u-2");
//!
//! let mut request = ApprovalRequest::submit(ApprovalSubject::Content, "Welcome post", &author)?;
//! request.approve(&admin, None)?;
//! assert_eq!(request.status, ApprovalStatus::Approved);
//! # Ok::<(), WorkflowError>(())
//! ```

pub mod approval;

// Re-export all public types for convenience
pub use approval::*;
