use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;

use crate::account::models::LoginRequest;
use crate::account::models::RegisterRequest;

/// Field-keyed validation messages, in discovery order.
///
/// Keys match the external field names (camelCase). The first entry is
/// promoted as the primary failure message; the whole map is attached to
/// the error payload for clients that want field-level detail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(&'static str, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for a field. Insertion order is preserved.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.entries.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// First-discovered message, the one surfaced as the failure reason.
    pub fn primary(&self) -> Option<&str> {
        self.entries.first().map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.primary().unwrap_or("Invalid input."))
    }
}

// Serializes as a JSON object in insertion order, so the first key the
// client sees is the promoted message's field.
impl Serialize for ValidationErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

/// Check every registration field, collecting all violations rather than
/// stopping at the first. Pure function: no I/O, deterministic.
pub fn validate_registration(request: &RegisterRequest) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    require(
        &mut errors,
        "firstName",
        &request.first_name,
        "First name must be provided.",
    );
    require(
        &mut errors,
        "lastName",
        &request.last_name,
        "Last name must be provided.",
    );
    require(
        &mut errors,
        "username",
        &request.username,
        "Username must be provided.",
    );

    if request.email.trim().is_empty() {
        errors.push("email", "Email must be provided.");
    } else if email_address::EmailAddress::from_str(&request.email).is_err() {
        errors.push("email", "Email must be a valid email address.");
    }

    require(
        &mut errors,
        "country",
        &request.country,
        "Country must be provided.",
    );
    require(
        &mut errors,
        "contactNumber",
        &request.contact_number,
        "Contact number must be provided.",
    );
    require(
        &mut errors,
        "gender",
        &request.gender,
        "Gender must be provided.",
    );
    require(
        &mut errors,
        "institutionType",
        &request.institution_type,
        "Institution type must be provided.",
    );
    require(
        &mut errors,
        "institutionName",
        &request.institution_name,
        "Institution name must be provided.",
    );
    require(
        &mut errors,
        "department",
        &request.department,
        "Department must be provided.",
    );
    require(
        &mut errors,
        "password",
        &request.password,
        "Password must be provided.",
    );

    errors
}

/// Check presence of the two login fields. Pure function.
pub fn validate_login(request: &LoginRequest) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    require(
        &mut errors,
        "username",
        &request.username,
        "Username must be provided.",
    );
    require(
        &mut errors,
        "password",
        &request.password,
        "Password must be provided.",
    );

    errors
}

fn require(errors: &mut ValidationErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(field, message);
    }
}
