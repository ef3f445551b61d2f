use async_trait::async_trait;
use uuid::Uuid;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::AccountSummary;
use crate::account::models::AuthenticatedAccount;
use crate::account::models::LoginRequest;
use crate::account::models::Profile;
use crate::account::models::QuestionCard;
use crate::account::models::RegisterRequest;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account and issue a bearer token for it.
    ///
    /// # Arguments
    /// * `request` - Raw registration fields
    ///
    /// # Returns
    /// The created account plus a signed token
    ///
    /// # Errors
    /// * `Validation` - One or more fields are missing or malformed
    /// * `UsernameTaken` - Username already registered (case-insensitive)
    /// * `Storage` - Storage operation failed
    async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<AuthenticatedAccount, AccountError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Arguments
    /// * `request` - Username and plaintext password
    ///
    /// # Returns
    /// The matched account plus a signed token
    ///
    /// # Errors
    /// * `Validation` - Username or password missing
    /// * `NotFound` - No account with this username
    /// * `InvalidCredentials` - Password does not match
    /// * `Storage` - Storage operation failed
    async fn login(&self, request: LoginRequest) -> Result<AuthenticatedAccount, AccountError>;

    /// Build the full profile view for a username.
    ///
    /// # Arguments
    /// * `username` - Username to look up, matched case-insensitively
    ///
    /// # Returns
    /// Account fields joined with authored-content references and the two
    /// recent-content sequences (at most five entries each)
    ///
    /// # Errors
    /// * `Validation` - Username is blank
    /// * `NotFound` - No account with this username
    /// * `Storage` - Storage operation failed
    async fn profile(&self, username: &str) -> Result<Profile, AccountError>;

    /// List every account as a three-field summary.
    ///
    /// # Errors
    /// * `Storage` - Storage operation failed
    async fn list_accounts(&self) -> Result<Vec<AccountSummary>, AccountError>;
}

/// Persistence operations for the account aggregate.
///
/// Username matching is case-insensitive and exact (whole value, not a
/// substring). The storage layer owns the uniqueness guarantee; `exists`
/// is only an advisory pre-check.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Arguments
    /// * `account` - Account entity to create
    ///
    /// # Returns
    /// The persisted account
    ///
    /// # Errors
    /// * `UsernameTaken` - Storage-level uniqueness constraint rejected it
    /// * `Storage` - Storage operation failed
    async fn insert(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve an account by username, case-insensitively.
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `Storage` - Storage operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError>;

    /// Whether an account with this username exists, case-insensitively.
    ///
    /// # Errors
    /// * `Storage` - Storage operation failed
    async fn exists(&self, username: &str) -> Result<bool, AccountError>;

    /// Every account projected to username, department, and creation time,
    /// in storage-native order.
    ///
    /// # Errors
    /// * `Storage` - Storage operation failed
    async fn list_summaries(&self) -> Result<Vec<AccountSummary>, AccountError>;
}

/// Read-only aggregation over authored content.
///
/// All operations tolerate zero results; an account with no content
/// yields empty vectors, never an error.
#[async_trait]
pub trait QuestionRepository: Send + Sync + 'static {
    /// Most recent questions authored by the account, newest first,
    /// truncated to `limit`.
    ///
    /// # Errors
    /// * `Storage` - Storage operation failed
    async fn recent_authored(
        &self,
        author: &AccountId,
        limit: i64,
    ) -> Result<Vec<QuestionCard>, AccountError>;

    /// Most recent questions carrying at least one answer authored by the
    /// account, newest first, truncated to `limit`. The projection is of
    /// the parent question; a question with several matching answers
    /// appears once.
    ///
    /// # Errors
    /// * `Storage` - Storage operation failed
    async fn recent_answered(
        &self,
        author: &AccountId,
        limit: i64,
    ) -> Result<Vec<QuestionCard>, AccountError>;

    /// References to every question the account authored, in creation
    /// order.
    ///
    /// # Errors
    /// * `Storage` - Storage operation failed
    async fn authored_question_ids(&self, author: &AccountId) -> Result<Vec<Uuid>, AccountError>;

    /// References to every answer the account authored, in creation order.
    ///
    /// # Errors
    /// * `Storage` - Storage operation failed
    async fn authored_answer_ids(&self, author: &AccountId) -> Result<Vec<Uuid>, AccountError>;
}
