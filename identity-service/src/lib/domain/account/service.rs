use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use chrono::Utc;
use uuid::Uuid;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::AccountSummary;
use crate::account::models::AuthenticatedAccount;
use crate::account::models::LoginRequest;
use crate::account::models::Profile;
use crate::account::models::RegisterRequest;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;
use crate::account::ports::QuestionRepository;
use crate::account::validation::validate_login;
use crate::account::validation::validate_registration;

/// How many recent questions/answers a profile view carries.
const RECENT_LIMIT: i64 = 5;

/// Domain service implementation for account operations.
///
/// Composes the account and question repositories with the credential
/// primitives. The token issuer is injected so the signing key stays an
/// explicit, swappable dependency rather than ambient state.
pub struct AccountService<AR, QR>
where
    AR: AccountRepository,
    QR: QuestionRepository,
{
    accounts: Arc<AR>,
    questions: Arc<QR>,
    password_hasher: PasswordHasher,
    token_issuer: Arc<TokenIssuer>,
}

impl<AR, QR> AccountService<AR, QR>
where
    AR: AccountRepository,
    QR: QuestionRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `accounts` - Account persistence implementation
    /// * `questions` - Authored-content read implementation
    /// * `token_issuer` - Issuer holding the process-wide signing key
    ///
    /// # Returns
    /// Configured account service instance
    pub fn new(accounts: Arc<AR>, questions: Arc<QR>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            accounts,
            questions,
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }
}

#[async_trait]
impl<AR, QR> AccountServicePort for AccountService<AR, QR>
where
    AR: AccountRepository,
    QR: QuestionRepository,
{
    async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<AuthenticatedAccount, AccountError> {
        let errors = validate_registration(&request);
        if !errors.is_empty() {
            return Err(AccountError::Validation(errors));
        }

        // Advisory pre-check for the friendly error path; the unique
        // index behind `insert` is the final arbiter under races.
        if self.accounts.exists(&request.username).await? {
            return Err(AccountError::UsernameTaken(request.username));
        }

        let password_hash = self.password_hasher.hash(&request.password)?;

        let account = Account {
            id: AccountId::new(),
            first_name: request.first_name,
            last_name: request.last_name,
            username: request.username,
            email: request.email,
            country: request.country,
            contact_number: request.contact_number,
            gender: request.gender,
            institution_type: request.institution_type,
            institution_name: request.institution_name,
            department: request.department,
            role: Account::DEFAULT_ROLE.to_string(),
            password_hash,
            created_at: Utc::now(),
        };

        let account = self.accounts.insert(account).await?;

        let token = self.token_issuer.issue(account.id)?;

        Ok(AuthenticatedAccount { account, token })
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthenticatedAccount, AccountError> {
        let errors = validate_login(&request);
        if !errors.is_empty() {
            return Err(AccountError::Validation(errors));
        }

        let account = self
            .accounts
            .find_by_username(&request.username)
            .await?
            .ok_or(AccountError::NotFound(request.username))?;

        // A malformed stored hash also reads as a mismatch
        if !self
            .password_hasher
            .verify(&request.password, &account.password_hash)
        {
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(account.id)?;

        Ok(AuthenticatedAccount { account, token })
    }

    async fn profile(&self, username: &str) -> Result<Profile, AccountError> {
        if username.trim().is_empty() {
            return Err(AccountError::validation(
                "username",
                "Username must be provided.",
            ));
        }

        let account = self
            .accounts
            .find_by_username(username)
            .await?
            .ok_or_else(|| AccountError::NotFound(username.to_string()))?;

        // Independent reads; no ordering dependency between them
        let (recent_questions, recent_answers, questions, answers) = tokio::try_join!(
            self.questions.recent_authored(&account.id, RECENT_LIMIT),
            self.questions.recent_answered(&account.id, RECENT_LIMIT),
            self.questions.authored_question_ids(&account.id),
            self.questions.authored_answer_ids(&account.id),
        )?;

        Ok(Profile {
            account,
            questions,
            answers,
            recent_questions,
            recent_answers,
        })
    }

    async fn list_accounts(&self) -> Result<Vec<AccountSummary>, AccountError> {
        self.accounts.list_summaries().await
    }
}
