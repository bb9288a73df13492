//! Enumeration types for the portal core
//!
//! This module contains the closed vocabularies shared by the access router,
//! the price calculator and the approval workflow: portal roles, duration
//! units, catalog service types and approval states.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Portal roles, each owning one dashboard area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Full control over every location and catalog
    SuperAdmin,
    /// Back-office administrator
    Admin,
    /// Location manager
    Manager,
    /// Staff handling memberships and subscriptions
    StaffMembership,
    /// Staff handling rooms and lifestyle services
    StaffServices,
    /// Staff handling published content and events
    StaffContent,
}

impl Role {
    /// Every role, in declaration order
    pub const ALL: [Role; 6] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Manager,
        Role::StaffMembership,
        Role::StaffServices,
        Role::StaffContent,
    ];

    /// Canonical PascalCase name, as written to session storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SuperAdmin",
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::StaffMembership => "StaffMembership",
            Role::StaffServices => "StaffServices",
            Role::StaffContent => "StaffContent",
        }
    }

    /// Whether this role belongs to one of the staff groups
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::StaffMembership | Role::StaffServices | Role::StaffContent)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Accepts PascalCase (`StaffMembership`), snake_case (`staff_membership`),
    /// kebab-case and spaced spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "superadmin" => Ok(Role::SuperAdmin),
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "staffmembership" => Ok(Role::StaffMembership),
            "staffservices" => Ok(Role::StaffServices),
            "staffcontent" => Ok(Role::StaffContent),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Unit of a catalog duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    /// Calendar month
    Month,
    /// Twelve months
    Year,
}

impl DurationUnit {
    /// Number of months in one unit
    pub fn months(&self) -> u32 {
        match self {
            DurationUnit::Month => 1,
            DurationUnit::Year => 12,
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationUnit::Month => write!(f, "Month"),
            DurationUnit::Year => write!(f, "Year"),
        }
    }
}

impl FromStr for DurationUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" | "months" | "monthly" => Ok(DurationUnit::Month),
            "year" | "years" | "yearly" | "annual" => Ok(DurationUnit::Year),
            _ => Err(format!("Unknown duration unit: {}", s)),
        }
    }
}

impl Serialize for DurationUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DurationUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Catalog service type; the backend sends it as a numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    /// Room booking, priced per night
    Accommodation,
    /// Lifestyle entitlement, priced per duration unit
    Lifestyle,
}

impl ServiceType {
    /// Decode the backend's numeric discriminant
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ServiceType::Accommodation),
            1 => Some(ServiceType::Lifestyle),
            _ => None,
        }
    }

    /// Numeric discriminant used on the wire
    pub fn code(&self) -> u8 {
        match self {
            ServiceType::Accommodation => 0,
            ServiceType::Lifestyle => 1,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceType::Accommodation => write!(f, "Accommodation"),
            ServiceType::Lifestyle => write!(f, "Lifestyle"),
        }
    }
}

impl Serialize for ServiceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for ServiceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u8::deserialize(deserializer)?;
        ServiceType::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("Unknown service type code: {}", code)))
    }
}

/// Kinds of records that go through back-office review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalSubject {
    /// Published articles and pages
    Content,
    /// Location events
    Event,
    /// Basic or combo catalog packages
    Package,
}

impl fmt::Display for ApprovalSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalSubject::Content => write!(f, "Content"),
            ApprovalSubject::Event => write!(f, "Event"),
            ApprovalSubject::Package => write!(f, "Package"),
        }
    }
}

/// Review state of an approval request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalStatus {
    /// Waiting for a reviewer
    Pending,
    /// Accepted by a reviewer
    Approved,
    /// Sent back to the submitter
    Rejected,
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalStatus::Pending => write!(f, "Pending"),
            ApprovalStatus::Approved => write!(f, "Approved"),
            ApprovalStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing_accepts_both_guard_spellings() {
        assert_eq!("StaffMembership".parse::<Role>(), Ok(Role::StaffMembership));
        assert_eq!("staff_membership".parse::<Role>(), Ok(Role::StaffMembership));
        assert_eq!("SUPER_ADMIN".parse::<Role>(), Ok(Role::SuperAdmin));
        assert_eq!("staff-content".parse::<Role>(), Ok(Role::StaffContent));
        assert_eq!(" Manager ".parse::<Role>(), Ok(Role::Manager));
        assert!("unknown".parse::<Role>().is_err());
        assert!("staff_service".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_round_trips_through_display() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_role_serde_uses_pascal_case() {
        assert_eq!(serde_json::to_string(&Role::StaffServices).unwrap(), "\"StaffServices\"");
        let role: Role = serde_json::from_str("\"staff_services\"").unwrap();
        assert_eq!(role, Role::StaffServices);
    }

    #[test]
    fn test_is_staff() {
        assert!(Role::StaffContent.is_staff());
        assert!(!Role::Manager.is_staff());
    }

    #[test]
    fn test_duration_unit() {
        assert_eq!(DurationUnit::Month.months(), 1);
        assert_eq!(DurationUnit::Year.months(), 12);
        assert_eq!("Year".parse::<DurationUnit>(), Ok(DurationUnit::Year));
        assert_eq!("months".parse::<DurationUnit>(), Ok(DurationUnit::Month));
        assert!("week".parse::<DurationUnit>().is_err());
    }

    #[test]
    fn test_service_type_codes() {
        assert_eq!(ServiceType::from_code(0), Some(ServiceType::Accommodation));
        assert_eq!(ServiceType::from_code(1), Some(ServiceType::Lifestyle));
        assert_eq!(ServiceType::from_code(2), None);
        assert_eq!(serde_json::to_string(&ServiceType::Lifestyle).unwrap(), "1");
        assert!(serde_json::from_str::<ServiceType>("5").is_err());
    }
}
