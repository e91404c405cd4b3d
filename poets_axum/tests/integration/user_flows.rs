/// Registration, login and logout over HTTP
///
/// These flows are open to anonymous callers. Every response is checked for
/// the `{message, payload}` envelope and for the absence of password data.
use crate::common::{MockBrowser, PASSWORD, TestServer, cleanup_users, create_user_fixture, unique_email};
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn body_of(response: reqwest::Response) -> Value {
    response.json().await.expect("Response body should be JSON")
}

fn assert_envelope(body: &Value) {
    let object = body.as_object().expect("Envelope should be an object");
    assert!(object.contains_key("message"), "Envelope missing message");
    assert!(object.contains_key("payload"), "Envelope missing payload");
}

#[tokio::test]
#[serial_test::serial]
async fn test_register_creates_user() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = MockBrowser::new(&server.base_url);
    let email = unique_email("register");

    // Given: a complete registration request
    let request = json!({
        "email": email,
        "password": PASSWORD,
        "confirmPassword": PASSWORD,
    });

    // When: it is posted to /users
    let response = browser
        .post_json("/users", &request)
        .await
        .expect("Request failed");

    // Then: the user is created and returned without its password
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_of(response).await;
    assert_envelope(&body);
    assert_eq!(body["message"], "User created");

    let user = &body["payload"]["user"];
    assert_eq!(user["email"], email.as_str());
    assert_eq!(user["isAdmin"], false);
    assert!(user["id"].is_i64());
    assert!(user["createdAt"].is_string());
    assert!(user["editedAt"].is_null());
    assert!(user.get("password").is_none());
    assert!(user.get("passwordHash").is_none());

    cleanup_users().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial_test::serial]
async fn test_register_rejects_missing_email() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = MockBrowser::new(&server.base_url);

    let response = browser
        .post_json("/users", &json!({ "password": PASSWORD }))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_of(response).await;
    assert_envelope(&body);
    assert_eq!(body["message"], "Missing email.");

    server.shutdown().await;
}

#[tokio::test]
#[serial_test::serial]
async fn test_register_rejects_missing_password() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = MockBrowser::new(&server.base_url);

    let response = browser
        .post_json("/users", &json!({ "email": unique_email("nopass") }))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_of(response).await["message"], "Missing password.");

    server.shutdown().await;
}

#[tokio::test]
#[serial_test::serial]
async fn test_register_rejects_mismatched_passwords() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = MockBrowser::new(&server.base_url);

    let response = browser
        .post_json(
            "/users",
            &json!({
                "email": unique_email("mismatch"),
                "password": PASSWORD,
                "confirmPassword": "password123",
            }),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_of(response).await["message"], "Passwords do not match");

    server.shutdown().await;
}

#[tokio::test]
#[serial_test::serial]
async fn test_register_rejects_duplicate_email() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = MockBrowser::new(&server.base_url);

    // Given: an existing account
    let email = unique_email("duplicate");
    create_user_fixture(&email, false).await;

    // When: the same email registers again
    let response = browser
        .post_json(
            "/users",
            &json!({
                "email": email,
                "password": PASSWORD,
                "confirmPassword": PASSWORD,
            }),
        )
        .await
        .expect("Request failed");

    // Then: the request is refused and only one account exists
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_of(response).await["message"],
        "User with this email already exists."
    );
    let matching = poets::get_all_users()
        .await
        .expect("Failed to list users")
        .into_iter()
        .filter(|u| u.email == email)
        .count();
    assert_eq!(matching, 1);

    cleanup_users().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial_test::serial]
async fn test_duplicate_email_wins_over_password_errors() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = MockBrowser::new(&server.base_url);

    // Given: an existing account
    let email = unique_email("taken");
    create_user_fixture(&email, false).await;

    // When: the email is registered again with broken password fields
    let bodies = [
        json!({ "email": email, "password": PASSWORD, "confirmPassword": "different" }),
        json!({ "email": email, "password": PASSWORD }),
        json!({ "email": email }),
    ];

    // Then: every attempt reports the duplicate email
    for body in &bodies {
        let response = browser
            .post_json("/users", body)
            .await
            .expect("Request failed");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(
            body_of(response).await["message"],
            "User with this email already exists.",
            "body: {body}"
        );
    }

    cleanup_users().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial_test::serial]
async fn test_register_rejects_malformed_body() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = MockBrowser::new(&server.base_url);

    let response = browser
        .post_raw_json("/users", "{not json")
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_of(response).await;
    assert_envelope(&body);
    assert_eq!(body["message"], "Invalid request body.");

    server.shutdown().await;
}

#[tokio::test]
#[serial_test::serial]
async fn test_login_sets_session_cookie() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = MockBrowser::new(&server.base_url);

    // Given: a registered user
    let email = unique_email("login");
    create_user_fixture(&email, false).await;

    // When: they log in with the right password
    let response = browser
        .post_json("/login", &json!({ "email": email, "password": PASSWORD }))
        .await
        .expect("Request failed");

    // Then: a session cookie is issued and the user is returned
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("Login should set a cookie")
        .to_str()
        .expect("Set-Cookie should be valid UTF-8")
        .to_string();
    assert!(set_cookie.starts_with(&format!("{}=", poets_axum::SESSION_COOKIE_NAME.as_str())));
    assert!(set_cookie.contains("HttpOnly"));

    let body = body_of(response).await;
    assert_envelope(&body);
    assert_eq!(body["message"], "Logged in successfully!");
    let user = &body["payload"]["user"];
    assert_eq!(user["email"], email.as_str());
    assert!(user["createdAt"].is_string());
    assert!(user["editedAt"].is_null());
    assert!(user.get("password").is_none());

    cleanup_users().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial_test::serial]
async fn test_login_rejects_unknown_email() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = MockBrowser::new(&server.base_url);

    let response = browser
        .post_json(
            "/login",
            &json!({ "email": "nonexistentemail", "password": PASSWORD }),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(reqwest::header::SET_COOKIE).is_none());
    assert_eq!(body_of(response).await["message"], "Invalid credentials.");

    server.shutdown().await;
}

#[tokio::test]
#[serial_test::serial]
async fn test_login_rejects_wrong_password() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = MockBrowser::new(&server.base_url);

    let email = unique_email("wrongpass");
    create_user_fixture(&email, false).await;

    let response = browser
        .post_json(
            "/login",
            &json!({ "email": email, "password": "invalidpassword" }),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_of(response).await["message"], "Invalid credentials.");

    cleanup_users().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial_test::serial]
async fn test_logout_ends_admin_session() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = MockBrowser::new(&server.base_url);

    // Given: a logged-in admin who can list users
    let email = unique_email("logout");
    create_user_fixture(&email, true).await;
    browser.login(&email, PASSWORD).await;
    let before = browser.get("/users").await.expect("Request failed");
    assert_eq!(before.status(), StatusCode::OK);

    // When: they log out
    let response = browser.get("/logout").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("Logout should expire the cookie")
        .to_str()
        .expect("Set-Cookie should be valid UTF-8")
        .to_string();
    assert!(set_cookie.contains("Max-Age=-"));
    assert_eq!(body_of(response).await["message"], "Logged out!");

    // Then: admin routes refuse the browser again
    let after = browser.get("/users").await.expect("Request failed");
    assert_eq!(after.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_of(after).await["message"], "Unauthorized");

    cleanup_users().await;
    server.shutdown().await;
}

#[tokio::test]
#[serial_test::serial]
async fn test_logout_without_session_succeeds() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = MockBrowser::new(&server.base_url);

    let response = browser.get("/logout").await.expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_of(response).await["message"], "Logged out!");

    server.shutdown().await;
}
