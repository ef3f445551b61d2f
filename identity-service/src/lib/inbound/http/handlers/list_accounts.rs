use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::models::AccountSummary;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AccountSummaryData>>, ApiError> {
    state
        .account_service
        .list_accounts()
        .await
        .map_err(ApiError::from)
        .map(|summaries| {
            ApiSuccess::new(
                StatusCode::OK,
                summaries.iter().map(AccountSummaryData::from).collect(),
            )
        })
}

/// Three fields only; nothing else about an account is listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummaryData {
    pub username: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
}

impl From<&AccountSummary> for AccountSummaryData {
    fn from(summary: &AccountSummary) -> Self {
        Self {
            username: summary.username.clone(),
            department: summary.department.clone(),
            created_at: summary.created_at,
        }
    }
}
