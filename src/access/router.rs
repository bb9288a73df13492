//! Dashboard access routing
//!
//! This module contains the access router: the single place that decides
//! whether a session may open a portal path and, if not, where to send it.

use crate::access::{Principal, RouteTable};
use crate::types::{PortalConfig, DEFAULT_LOGIN_PATH};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Path a routeless role lands on after login
const ROOT_PATH: &str = "/";

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "decision", content = "target", rename_all = "snake_case")]
pub enum AccessDecision {
    /// The path may be rendered
    Allow,
    /// Navigate to the given path instead
    Redirect(String),
}

impl AccessDecision {
    /// Whether the path may be rendered
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }

    /// Redirect target, if any
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            AccessDecision::Allow => None,
            AccessDecision::Redirect(target) => Some(target),
        }
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessDecision::Allow => write!(f, "Allow"),
            AccessDecision::Redirect(target) => write!(f, "Redirect({})", target),
        }
    }
}

/// Maps `(principal, path)` to an [`AccessDecision`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRouter {
    routes: RouteTable,
    login_path: String,
}

impl Default for AccessRouter {
    fn default() -> Self {
        Self::new(RouteTable::default(), DEFAULT_LOGIN_PATH)
    }
}

impl AccessRouter {
    /// Create a router over a route table
    pub fn new(routes: RouteTable, login_path: impl Into<String>) -> Self {
        Self { routes, login_path: login_path.into() }
    }

    /// Create a router from the portal configuration
    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.route_table(), config.login_path.clone())
    }

    /// Route table in use
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Path anonymous visitors are sent to
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Decide whether `principal` may open `path`.
    ///
    /// Anonymous visitors go to the login path. A principal whose role owns a
    /// prefix may open any path under it and is sent to the prefix otherwise.
    /// A role with no configured prefix is allowed everywhere.
    pub fn decide(&self, principal: Option<&Principal>, path: &str) -> AccessDecision {
        let Some(principal) = principal else {
            debug!(path, "Anonymous visitor redirected to login");
            return AccessDecision::Redirect(self.login_path.clone());
        };

        let decision = match self.routes.prefix_for(principal.role) {
            Some(expected) if !path.starts_with(expected) => {
                AccessDecision::Redirect(expected.to_string())
            }
            Some(_) => AccessDecision::Allow,
            None => {
                debug!(role = %principal.role, "Role has no dashboard prefix; allowing");
                AccessDecision::Allow
            }
        };

        debug!(role = %principal.role, path, decision = %decision, "Access decided");
        decision
    }

    /// Decide from a raw stored session blob
    pub fn decide_session(&self, session: Option<&str>, path: &str) -> AccessDecision {
        let principal = session.and_then(Principal::from_session_json);
        self.decide(principal.as_ref(), path)
    }

    /// Decide from a raw percent-encoded session cookie
    pub fn decide_cookie(&self, cookie: Option<&str>, path: &str) -> AccessDecision {
        let principal = cookie.and_then(Principal::from_cookie_value);
        self.decide(principal.as_ref(), path)
    }

    /// Dashboard a principal lands on after login
    pub fn landing_path(&self, principal: Option<&Principal>) -> &str {
        match principal {
            None => &self.login_path,
            Some(principal) => self.routes.prefix_for(principal.role).unwrap_or(ROOT_PATH),
        }
    }
}
