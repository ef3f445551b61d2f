mod common;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

fn registration_body(username: &str) -> serde_json::Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "username": username,
        "email": format!("{}@example.com", username.to_lowercase()),
        "country": "UK",
        "contactNumber": "+44 1234 567890",
        "gender": "female",
        "institutionType": "university",
        "institutionName": "Cambridge",
        "department": "Mathematics",
        "password": "pass_word!"
    })
}

async fn register(app: &TestApp, username: &str) -> serde_json::Value {
    let response = app
        .post("/api/auth/register")
        .json(&registration_body(username))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

async fn insert_question(
    pool: &PgPool,
    author_id: Uuid,
    title: &str,
    points: i32,
    created_at: DateTime<Utc>,
) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO questions (id, author_id, title, points, created_at) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(author_id)
    .bind(title)
    .bind(points)
    .bind(created_at)
    .execute(pool)
    .await
    .expect("Failed to insert question");
    id
}

async fn insert_answer(
    pool: &PgPool,
    question_id: Uuid,
    author_id: Uuid,
    created_at: DateTime<Utc>,
) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO answers (id, question_id, author_id, created_at) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(id)
    .bind(question_id)
    .bind(author_id)
    .bind(created_at)
    .execute(pool)
    .await
    .expect("Failed to insert answer");
    id
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&registration_body("nicola"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let raw = response.text().await.expect("Failed to read response");
    // The credential hash must not be observable in any payload
    assert!(!raw.contains("argon2"));
    assert!(!raw.contains("passwordHash"));

    let body: serde_json::Value = serde_json::from_str(&raw).expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "nicola");
    assert_eq!(body["data"]["email"], "nicola@example.com");
    assert_eq!(body["data"]["role"], "member");
    assert_eq!(body["data"]["department"], "Mathematics");

    // Token asserts the new account's identifier
    let token = body["data"]["token"].as_str().expect("Missing token");
    let claims = app.token_issuer.decode(token).expect("Failed to decode token");
    assert_eq!(claims.sub, body["data"]["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "firstName": "",
            "lastName": "Lovelace",
            "username": "",
            "email": "ada@example.com",
            "country": "UK",
            "contactNumber": "+44 1234 567890",
            "gender": "female",
            "institutionType": "university",
            "institutionName": "Cambridge",
            "department": "Mathematics",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    // First-discovered message is promoted; the full map rides along
    assert_eq!(body["data"]["message"], "First name must be provided.");
    assert_eq!(
        body["data"]["errors"]["firstName"],
        "First name must be provided."
    );
    assert_eq!(
        body["data"]["errors"]["username"],
        "Username must be provided."
    );
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let mut registration = registration_body("nicola");
    registration["email"] = json!("not-an-email");

    let response = app
        .post("/api/auth/register")
        .json(&registration)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_register_duplicate_username_case_insensitive() {
    let app = TestApp::spawn().await;

    register(&app, "Alice").await;

    // Same username in different case must be rejected
    let response = app
        .post("/api/auth/register")
        .json(&registration_body("alice"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already taken"));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    let registered = register(&app, "nicola").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "nicola",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let raw = response.text().await.expect("Failed to read response");
    assert!(!raw.contains("argon2"));

    let body: serde_json::Value = serde_json::from_str(&raw).expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "nicola");
    assert_eq!(body["data"]["id"], registered["data"]["id"]);

    let token = body["data"]["token"].as_str().expect("Missing token");
    let claims = app.token_issuer.decode(token).expect("Failed to decode token");
    assert_eq!(claims.sub, registered["data"]["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_login_is_case_insensitive_on_username() {
    let app = TestApp::spawn().await;

    register(&app, "Nicola").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "NICOLA",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    // The stored casing is returned, not the caller's
    assert_eq!(body["data"]["username"], "Nicola");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    register(&app, "nicola").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "nicola",
            "password": "Wrong_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid credentials.");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "nonexistent",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("nonexistent"));
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "nicola",
            "password": ""
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Password must be provided.");
    assert_eq!(
        body["data"]["errors"]["password"],
        "Password must be provided."
    );
}

#[tokio::test]
async fn test_get_user_profile_with_recent_content() {
    let app = TestApp::spawn().await;

    let author = register(&app, "author").await;
    let author_id = Uuid::parse_str(author["data"]["id"].as_str().unwrap()).unwrap();

    let responder = register(&app, "responder").await;
    let responder_id = Uuid::parse_str(responder["data"]["id"].as_str().unwrap()).unwrap();

    // Seven authored questions; only the five newest may appear
    let base = Utc::now() - Duration::days(30);
    let mut question_ids = Vec::new();
    for i in 0..7 {
        let id = insert_question(
            &app.db.pool,
            author_id,
            &format!("Question {}", i),
            i,
            base + Duration::hours(i64::from(i)),
        )
        .await;
        question_ids.push(id);
    }

    // The responder answers two of them (twice on the first; the parent
    // question must still appear once)
    insert_answer(&app.db.pool, question_ids[0], responder_id, base).await;
    insert_answer(
        &app.db.pool,
        question_ids[0],
        responder_id,
        base + Duration::minutes(5),
    )
    .await;
    insert_answer(&app.db.pool, question_ids[3], responder_id, base).await;

    let response = app
        .get("/api/users/author")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "author");
    assert_eq!(body["data"]["role"], "member");
    assert!(body["data"]["createdAt"].is_string());

    // All seven references, creation order
    let questions = body["data"]["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 7);
    assert_eq!(questions[0], question_ids[0].to_string());

    // Exactly five recent questions, newest first
    let recent = body["data"]["recentQuestions"].as_array().unwrap();
    assert_eq!(recent.len(), 5);
    let titles: Vec<&str> = recent
        .iter()
        .map(|card| card["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Question 6",
            "Question 5",
            "Question 4",
            "Question 3",
            "Question 2"
        ]
    );

    // The author answered nothing
    assert!(body["data"]["recentAnswers"].as_array().unwrap().is_empty());

    // Responder view: two parent questions, each once, newest first
    let response = app
        .get("/api/users/responder")
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");

    let answered = body["data"]["recentAnswers"].as_array().unwrap();
    assert_eq!(answered.len(), 2);
    assert_eq!(answered[0]["title"], "Question 3");
    assert_eq!(answered[1]["title"], "Question 0");

    let answer_refs = body["data"]["answers"].as_array().unwrap();
    assert_eq!(answer_refs.len(), 3);
}

#[tokio::test]
async fn test_get_user_lookup_is_case_insensitive() {
    let app = TestApp::spawn().await;

    register(&app, "Ada").await;

    let response = app
        .get("/api/users/ADA")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "Ada");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/nonexistent")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("nonexistent"));
}

#[tokio::test]
async fn test_get_user_blank_username() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/%20")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Username must be provided.");
}

#[tokio::test]
async fn test_get_all_users_projects_three_fields_only() {
    let app = TestApp::spawn().await;

    register(&app, "Ada").await;
    register(&app, "Grace").await;

    let response = app
        .get("/api/users")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);

    for user in users {
        let object = user.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["createdAt", "department", "username"]);
    }
}
