use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use super::ApiError;
use super::ApiSuccess;
use crate::account::models::Profile;
use crate::account::models::QuestionCard;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    state
        .account_service
        .profile(&username)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponseData {
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
    pub questions: Vec<Uuid>,
    pub answers: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub recent_questions: Vec<QuestionCardData>,
    pub recent_answers: Vec<QuestionCardData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCardData {
    pub id: Uuid,
    pub title: String,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&QuestionCard> for QuestionCardData {
    fn from(card: &QuestionCard) -> Self {
        Self {
            id: card.id,
            title: card.title.clone(),
            points: card.points,
            created_at: card.created_at,
        }
    }
}

impl From<&Profile> for ProfileResponseData {
    fn from(profile: &Profile) -> Self {
        let account = &profile.account;
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
            questions: profile.questions.clone(),
            answers: profile.answers.clone(),
            created_at: account.created_at,
            recent_questions: profile
                .recent_questions
                .iter()
                .map(QuestionCardData::from)
                .collect(),
            recent_answers: profile
                .recent_answers
                .iter()
                .map(QuestionCardData::from)
                .collect(),
        }
    }
}
