use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::models::AuthenticatedAccount;
use crate::account::models::RegisterRequest;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    state
        .account_service
        .register(body.into_request())
        .await
        .map_err(ApiError::from)
        .map(|ref authenticated| ApiSuccess::new(StatusCode::CREATED, authenticated.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestBody {
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
    password: String,
}

impl RegisterRequestBody {
    fn into_request(self) -> RegisterRequest {
        RegisterRequest {
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            email: self.email,
            country: self.country,
            contact_number: self.contact_number,
            gender: self.gender,
            institution_type: self.institution_type,
            institution_name: self.institution_name,
            department: self.department,
            password: self.password,
        }
    }
}

/// Account public fields plus the issued token. The credential hash has
/// no representation here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseData {
    pub id: String,
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
    pub token: String,
}

impl From<&AuthenticatedAccount> for AuthResponseData {
    fn from(authenticated: &AuthenticatedAccount) -> Self {
        let account = &authenticated.account;
        Self {
            id: account.id.to_string(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            username: account.username.clone(),
            email: account.email.clone(),
            country: account.country.clone(),
            contact_number: account.contact_number.clone(),
            gender: account.gender.clone(),
            institution_type: account.institution_type.clone(),
            institution_name: account.institution_name.clone(),
            department: account.department.clone(),
            role: account.role.clone(),
            token: authenticated.token.clone(),
        }
    }
}
