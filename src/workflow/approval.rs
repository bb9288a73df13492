//! Approval requests for content, events and packages
//!
//! Staff submit records for review; reviewers with a suitable role approve or
//! reject them. Rejected requests can be resubmitted by their submitter.
//!
//! ```text
//!            approve
//!  Pending ───────────► Approved
//!     │  ▲
//! reject │  │ resubmit
//!     ▼  │
//!  Rejected
//! ```

use crate::access::Principal;
use crate::types::{ApprovalId, ApprovalStatus, ApprovalSubject, LocationId, PrincipalId, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by invalid workflow actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// The acting principal has no backend identifier
    #[error("Principal has no identifier; cannot act on approvals")]
    MissingIdentity,

    /// The role may not review this kind of record
    #[error("{role} may not review {subject} requests")]
    NotAReviewer {
        /// Role of the acting principal
        role: Role,
        /// Subject of the request
        subject: ApprovalSubject,
    },

    /// Submitters cannot review their own requests
    #[error("Submitters cannot review their own requests")]
    SelfReview,

    /// Location-scoped reviewers only review their own location
    #[error("Reviewer location does not match the request location")]
    LocationMismatch,

    /// The action is not valid in the current state
    #[error("Cannot {action} a request that is {from}")]
    InvalidTransition {
        /// Current status
        from: ApprovalStatus,
        /// Attempted action
        action: ApprovalAction,
    },

    /// Rejections must explain themselves
    #[error("A rejection note is required")]
    NoteRequired,

    /// Only the submitter may resubmit
    #[error("Only the submitter may resubmit a request")]
    NotSubmitter,
}

/// Actions that move a request between states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalAction {
    /// Pending to Approved
    Approve,
    /// Pending to Rejected
    Reject,
    /// Rejected to Pending
    Resubmit,
}

impl fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalAction::Approve => write!(f, "approve"),
            ApprovalAction::Reject => write!(f, "reject"),
            ApprovalAction::Resubmit => write!(f, "resubmit"),
        }
    }
}

/// Roles allowed to review a subject
pub fn reviewer_roles(subject: ApprovalSubject) -> &'static [Role] {
    match subject {
        ApprovalSubject::Package => &[Role::SuperAdmin, Role::Admin],
        ApprovalSubject::Event | ApprovalSubject::Content => {
            &[Role::SuperAdmin, Role::Admin, Role::Manager]
        }
    }
}

/// Whether `role` may review `subject`
pub fn can_review(role: Role, subject: ApprovalSubject) -> bool {
    reviewer_roles(subject).contains(&role)
}

/// A record waiting for, or having passed, review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    /// Request identifier
    pub id: ApprovalId,
    /// Kind of record under review
    pub subject: ApprovalSubject,
    /// Title shown in review queues
    pub title: String,
    /// Submitting user
    pub submitted_by: PrincipalId,
    /// Location of the submitter, if any
    pub location: Option<LocationId>,
    /// Submission time
    pub submitted_at: DateTime<Utc>,
    /// Current status
    pub status: ApprovalStatus,
    /// Last reviewer
    pub reviewed_by: Option<PrincipalId>,
    /// Last review time
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Reviewer note
    pub note: Option<String>,
}

impl ApprovalRequest {
    /// Submit a record for review
    pub fn submit(
        subject: ApprovalSubject,
        title: impl Into<String>,
        submitter: &Principal,
    ) -> Result<Self, WorkflowError> {
        let submitted_by = submitter.id.clone().ok_or(WorkflowError::MissingIdentity)?;
        let request = Self {
            id: ApprovalId::new(),
            subject,
            title: title.into(),
            submitted_by,
            location: submitter.location.clone(),
            submitted_at: Utc::now(),
            status: ApprovalStatus::Pending,
            reviewed_by: None,
            reviewed_at: None,
            note: None,
        };

        info!(id = %request.id, subject = %subject, "Approval request submitted");
        Ok(request)
    }

    /// Whether the request is waiting for review
    pub fn is_pending(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }

    /// Approve a pending request
    pub fn approve(
        &mut self,
        reviewer: &Principal,
        note: Option<String>,
    ) -> Result<(), WorkflowError> {
        let reviewer_id = self.check_reviewer(reviewer, ApprovalAction::Approve)?;
        self.record_review(ApprovalStatus::Approved, reviewer_id, note);
        Ok(())
    }

    /// Reject a pending request with an explanation
    pub fn reject(
        &mut self,
        reviewer: &Principal,
        note: impl Into<String>,
    ) -> Result<(), WorkflowError> {
        let note = note.into();
        if note.trim().is_empty() {
            return Err(WorkflowError::NoteRequired);
        }

        let reviewer_id = self.check_reviewer(reviewer, ApprovalAction::Reject)?;
        self.record_review(ApprovalStatus::Rejected, reviewer_id, Some(note));
        Ok(())
    }

    /// Put a rejected request back in the queue
    pub fn resubmit(&mut self, submitter: &Principal) -> Result<(), WorkflowError> {
        let submitter_id = submitter.id.as_ref().ok_or(WorkflowError::MissingIdentity)?;
        if *submitter_id != self.submitted_by {
            return Err(WorkflowError::NotSubmitter);
        }
        if self.status != ApprovalStatus::Rejected {
            return Err(WorkflowError::InvalidTransition {
                from: self.status,
                action: ApprovalAction::Resubmit,
            });
        }

        self.status = ApprovalStatus::Pending;
        self.submitted_at = Utc::now();
        debug!(id = %self.id, "Approval request resubmitted");
        Ok(())
    }

    fn check_reviewer(
        &self,
        reviewer: &Principal,
        action: ApprovalAction,
    ) -> Result<PrincipalId, WorkflowError> {
        let reviewer_id = reviewer.id.clone().ok_or(WorkflowError::MissingIdentity)?;

        if self.status != ApprovalStatus::Pending {
            return Err(WorkflowError::InvalidTransition { from: self.status, action });
        }
        if !can_review(reviewer.role, self.subject) {
            return Err(WorkflowError::NotAReviewer { role: reviewer.role, subject: self.subject });
        }
        if reviewer_id == self.submitted_by {
            return Err(WorkflowError::SelfReview);
        }
        // Managers review only their own location. A missing location never matches.
        if reviewer.role == Role::Manager
            && (reviewer.location.is_none() || reviewer.location != self.location)
        {
            return Err(WorkflowError::LocationMismatch);
        }

        Ok(reviewer_id)
    }

    fn record_review(&mut self, status: ApprovalStatus, reviewer: PrincipalId, note: Option<String>) {
        info!(id = %self.id, reviewer = %reviewer, status = %status, "Approval request reviewed");
        self.status = status;
        self.reviewed_by = Some(reviewer);
        self.reviewed_at = Some(Utc::now());
        self.note = note;
    }
}
