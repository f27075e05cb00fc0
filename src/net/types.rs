//! Wire DTOs for the remote portfolio service.
//!
//! DESIGN
//! ======
//! These types mirror the service's JSON payloads field-for-field (including
//! the Mongo-style `_id` key) so serde round-trips stay lossless and page code
//! can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role assigned to an account by the remote service.
///
/// Drives capability gating in the UI only; the service enforces the real
/// authorization on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Wire value understood by `PUT /api/users/{id}/role`.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// Resolved profile of the signed-in user, as returned by `/auth/signin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique account identifier.
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Assigned role.
    pub role: Role,
}

/// Successful response body from `POST /auth/signin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResponse {
    /// Opaque bearer token for subsequent API calls.
    pub token: String,
    /// Profile of the authenticated account.
    pub user: Identity,
}

/// A contact message left by a site visitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Service-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// Payload for `POST /api/contacts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A qualification entry in the portfolio.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// Service-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// Payload for `POST /api/educations`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEducation {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// A portfolio project entry.
///
/// The service keeps projects under its historical `/api/portfolio` paths.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Service-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// External link to the project, if any.
    #[serde(default)]
    pub link: String,
}

/// Payload for `POST /api/portfolio`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// An account row in the admin user-management list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Service-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}
