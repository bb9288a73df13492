//! Session principal decoding
//!
//! The portal keeps the signed-in user as a JSON blob in a cookie or in local
//! storage. This module turns that blob into a typed [`Principal`]. Decoding is
//! total: anything that cannot be read as a principal with a recognized role
//! comes back as `None`, which callers treat as "not logged in".

use crate::types::{LocationId, PrincipalId, Role};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Authenticated actor for the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Backend user identifier
    pub id: Option<PrincipalId>,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Portal role
    pub role: Role,
    /// Location the user is attached to, for location-scoped roles
    pub location: Option<LocationId>,
}

impl Principal {
    /// Create a principal with only a role
    pub fn with_role(role: Role) -> Self {
        Self { id: None, name: String::new(), email: String::new(), role, location: None }
    }

    /// Attach a backend identifier
    pub fn with_id(mut self, id: impl Into<PrincipalId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attach display name and email
    pub fn with_identity(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.name = name.into();
        self.email = email.into();
        self
    }

    /// Attach a location
    pub fn with_location(mut self, location: impl Into<LocationId>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Decode a stored session blob.
    ///
    /// Accepts the principal object itself or an envelope with a `user` field.
    /// Returns `None` for malformed JSON, a non-object value, a missing role or
    /// an unknown role.
    pub fn from_session_json(raw: &str) -> Option<Self> {
        let value: Value = match serde_json::from_str(raw.trim()) {
            Ok(value) => value,
            Err(e) => {
                debug!("Discarding unreadable session blob: {}", e);
                return None;
            }
        };

        Self::from_session_value(value)
    }

    /// Decode a percent-encoded session cookie value
    pub fn from_cookie_value(raw: &str) -> Option<Self> {
        let decoded = match urlencoding::decode(raw.trim()) {
            Ok(decoded) => decoded,
            Err(e) => {
                debug!("Discarding session cookie with invalid encoding: {}", e);
                return None;
            }
        };

        // Express-style JSON cookies carry a `j:` marker
        let json = decoded.strip_prefix("j:").unwrap_or(&decoded);
        Self::from_session_json(json)
    }

    /// Decode an already-parsed session value
    pub fn from_session_value(value: Value) -> Option<Self> {
        let value = match value {
            Value::Object(mut map) if !map.contains_key("role") && map.contains_key("user") => {
                map.remove("user")?
            }
            other => other,
        };

        // Derived struct decoding also accepts sequences; sessions are objects only
        if !value.is_object() {
            debug!("Session blob is not a JSON object");
            return None;
        }

        let stored: StoredPrincipal = match serde_json::from_value(value) {
            Ok(stored) => stored,
            Err(e) => {
                debug!("Session blob is not a principal: {}", e);
                return None;
            }
        };

        Self::try_from(stored).ok()
    }

    /// Encode the principal the way the portal stores it
    pub fn to_session_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Principal as found in storage, before the role is checked
#[derive(Debug, Default, Deserialize)]
struct StoredPrincipal {
    #[serde(default, alias = "_id", deserialize_with = "lenient_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    role: Option<String>,
    #[serde(default, deserialize_with = "lenient_location")]
    location: Option<String>,
}

impl TryFrom<StoredPrincipal> for Principal {
    type Error = String;

    fn try_from(stored: StoredPrincipal) -> Result<Self, Self::Error> {
        let raw_role = stored.role.ok_or_else(|| "session has no role".to_string())?;
        let role = raw_role.parse::<Role>().map_err(|e| {
            warn!(role = %raw_role, "Session carries an unrecognized role");
            e
        })?;

        Ok(Self {
            id: stored.id.map(PrincipalId::from),
            name: stored.name.unwrap_or_default(),
            email: stored.email.unwrap_or_default(),
            role,
            location: stored.location.map(LocationId::from),
        })
    }
}

/// Read strings and numbers as text; anything else counts as absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Locations are stored either as an id or as an embedded record
fn lenient_location<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Object(map)) => map
            .get("id")
            .or_else(|| map.get("_id"))
            .and_then(|id| match id {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
        _ => None,
    })
}
