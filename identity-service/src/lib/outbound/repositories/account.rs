use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AccountSummary;
use crate::domain::account::ports::AccountRepository;

const USERNAME_UNIQUE_CONSTRAINT: &str = "accounts_username_lower_key";

const ACCOUNT_COLUMNS: &str = "id, first_name, last_name, username, email, country, \
     contact_number, gender, institution_type, institution_name, department, role, \
     password_hash, created_at";

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    username: String,
    email: String,
    country: String,
    contact_number: String,
    gender: String,
    institution_type: String,
    institution_name: String,
    department: String,
    role: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: AccountId(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            username: row.username,
            email: row.email,
            country: row.country,
            contact_number: row.contact_number,
            gender: row.gender,
            institution_type: row.institution_type,
            institution_name: row.institution_name,
            department: row.department,
            role: row.role,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    username: String,
    department: String,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn insert(&self, account: Account) -> Result<Account, AccountError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, first_name, last_name, username, username_lower,
                email, country, contact_number, gender, institution_type,
                institution_name, department, role, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(account.id.0)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.username)
        .bind(Account::normalize_username(&account.username))
        .bind(&account.email)
        .bind(&account.country)
        .bind(&account.contact_number)
        .bind(&account.gender)
        .bind(&account.institution_type)
        .bind(&account.institution_name)
        .bind(&account.department)
        .bind(&account.role)
        .bind(&account.password_hash)
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(USERNAME_UNIQUE_CONSTRAINT)
                {
                    return AccountError::UsernameTaken(account.username.clone());
                }
            }
            AccountError::Storage(e.to_string())
        })?;

        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {} FROM accounts WHERE username_lower = $1",
            ACCOUNT_COLUMNS
        ))
        .bind(Account::normalize_username(username))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::Storage(e.to_string()))?;

        Ok(row.map(Account::from))
    }

    async fn exists(&self, username: &str) -> Result<bool, AccountError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM accounts WHERE username_lower = $1)",
        )
        .bind(Account::normalize_username(username))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AccountError::Storage(e.to_string()))
    }

    async fn list_summaries(&self) -> Result<Vec<AccountSummary>, AccountError> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            "SELECT username, department, created_at FROM accounts",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccountError::Storage(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| AccountSummary {
                username: row.username,
                department: row.department,
                created_at: row.created_at,
            })
            .collect())
    }
}
