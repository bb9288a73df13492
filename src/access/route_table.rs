//! Role to dashboard prefix mapping
//!
//! This module contains the single table that decides which dashboard area each
//! portal role owns.

use crate::types::{ConfigValidationError, Role};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dashboard path prefix owned by each role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: BTreeMap<Role, String>,
}

impl Default for RouteTable {
    /// Every role mapped once, with pairwise disjoint prefixes
    fn default() -> Self {
        let routes = Role::ALL
            .into_iter()
            .map(|role| (role, Self::default_prefix(role).to_string()))
            .collect();
        Self { routes }
    }
}

impl RouteTable {
    /// Create an empty table; every role is routeless
    pub fn empty() -> Self {
        Self { routes: BTreeMap::new() }
    }

    /// Create a table from an explicit mapping
    pub fn from_map(routes: BTreeMap<Role, String>) -> Self {
        Self { routes }
    }

    /// Consume the table into its mapping
    pub fn into_map(self) -> BTreeMap<Role, String> {
        self.routes
    }

    /// Built-in dashboard prefix for a role
    pub fn default_prefix(role: Role) -> &'static str {
        match role {
            Role::SuperAdmin => "/superadmin",
            Role::Admin => "/admin",
            Role::Manager => "/manager",
            Role::StaffMembership => "/staff/membership",
            Role::StaffServices => "/staff/services",
            Role::StaffContent => "/staff/content",
        }
    }

    /// Set or replace the prefix for a role
    pub fn set_route(&mut self, role: Role, prefix: impl Into<String>) {
        self.routes.insert(role, prefix.into());
    }

    /// Remove the prefix for a role, making it routeless
    pub fn remove_route(&mut self, role: Role) -> Option<String> {
        self.routes.remove(&role)
    }

    /// Prefix owned by a role, if one is configured
    pub fn prefix_for(&self, role: Role) -> Option<&str> {
        self.routes.get(&role).map(String::as_str)
    }

    /// Role whose prefix the path falls under
    pub fn role_for_path(&self, path: &str) -> Option<Role> {
        self.routes
            .iter()
            .find(|(_, prefix)| path.starts_with(prefix.as_str()))
            .map(|(role, _)| *role)
    }

    /// Roles without a configured prefix
    pub fn routeless_roles(&self) -> Vec<Role> {
        Role::ALL.into_iter().filter(|role| !self.routes.contains_key(role)).collect()
    }

    /// Iterate over `(role, prefix)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> {
        self.routes.iter().map(|(role, prefix)| (*role, prefix.as_str()))
    }

    /// Number of routed roles
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no role is routed
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Check that every prefix is an absolute path and that no prefix is a
    /// prefix of another, so a path never matches two dashboards.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (role, prefix) in self.iter() {
            if prefix.is_empty() || !prefix.starts_with('/') {
                return Err(ConfigValidationError::InvalidRoutePrefix {
                    role,
                    prefix: prefix.to_string(),
                });
            }
        }

        for (inner_role, inner) in self.iter() {
            for (outer_role, outer) in self.iter() {
                if inner_role != outer_role && outer.starts_with(inner) {
                    return Err(ConfigValidationError::OverlappingRoutes {
                        inner_role,
                        inner: inner.to_string(),
                        outer_role,
                        outer: outer.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
