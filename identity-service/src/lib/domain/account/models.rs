use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// Account aggregate entity.
///
/// Represents one registered user of the platform. The credential hash
/// lives here for verification but never crosses the system boundary;
/// outbound views are built from [`Account`] by the inbound layer and
/// omit it.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub country: String,
    pub contact_number: String,
    pub gender: String,
    pub institution_type: String,
    pub institution_name: String,
    pub department: String,
    pub role: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Role assigned to every new account. Never taken from caller input.
    pub const DEFAULT_ROLE: &'static str = "member";

    /// Normalized form of a username used for case-insensitive matching.
    ///
    /// Stored alongside the original and indexed; lookups compare against
    /// this copy instead of compiling a pattern from caller input.
    pub fn normalize_username(username: &str) -> String {
        username.to_lowercase()
    }
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    ///
    /// # Returns
    /// AccountId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Registration input, one typed field per registration form field.
///
/// Fields are persisted verbatim after validation; no trimming or other
/// normalization is applied to them.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub country: String,
    pub contact_number: String,
    pub gender: String,
    pub institution_type: String,
    pub institution_name: String,
    pub department: String,
    pub password: String,
}

/// Login input.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Outcome of a successful registration or login: the account plus a
/// freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account: Account,
    pub token: String,
}

/// Projection of a question to the fields profile views display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCard {
    pub id: Uuid,
    pub title: String,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

/// Full profile view: the account joined with its authored content.
///
/// `questions` and `answers` are reference lists in creation order;
/// the two `recent_*` sequences hold at most five cards each, newest
/// first.
#[derive(Debug, Clone)]
pub struct Profile {
    pub account: Account,
    pub questions: Vec<Uuid>,
    pub answers: Vec<Uuid>,
    pub recent_questions: Vec<QuestionCard>,
    pub recent_answers: Vec<QuestionCard>,
}

/// Three-field projection used by the account listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub username: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
}
