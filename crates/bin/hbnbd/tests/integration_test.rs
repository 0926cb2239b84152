//! End-to-end tests for the full hbnbd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! store, real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`; no TCP port is bound.

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use hbnb_adapter_http_axum::router;
use hbnb_adapter_http_axum::state::AppState;
use hbnb_adapter_storage_sqlite_sqlx::{Config, SqliteStore};
use hbnb_app::services::resource_service::ResourceService;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let store = SqliteStore::new(db.pool().clone());
    router::build(AppState::new(ResourceService::new(store)))
}

struct Reply {
    status: StatusCode,
    headers: HeaderMap,
    raw: Vec<u8>,
}

impl Reply {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.raw).expect("response body should be JSON")
    }

    fn id(&self) -> String {
        self.json()["id"]
            .as_str()
            .expect("response should carry an id")
            .to_string()
    }
}

async fn call(app: &axum::Router, method: Method, uri: &str, body: Option<&str>) -> Reply {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header("origin", "http://localhost:3000");
    let body = match body {
        Some(raw) => {
            request = request.header("content-type", "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let raw = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();
    Reply {
        status,
        headers,
        raw,
    }
}

async fn get(app: &axum::Router, uri: &str) -> Reply {
    call(app, Method::GET, uri, None).await
}

async fn post(app: &axum::Router, uri: &str, body: &Value) -> Reply {
    call(app, Method::POST, uri, Some(&body.to_string())).await
}

async fn put(app: &axum::Router, uri: &str, body: &Value) -> Reply {
    call(app, Method::PUT, uri, Some(&body.to_string())).await
}

async fn delete(app: &axum::Router, uri: &str) -> Reply {
    call(app, Method::DELETE, uri, None).await
}

/// Ids of a State → City → Place → Review chain plus the owning User.
struct Tree {
    state: String,
    city: String,
    user: String,
    place: String,
    review: String,
}

async fn seed(app: &axum::Router) -> Tree {
    let state = post(app, "/api/v1/states", &json!({"name": "California"}))
        .await
        .id();
    let city = post(
        app,
        &format!("/api/v1/states/{state}/cities"),
        &json!({"name": "San Francisco"}),
    )
    .await
    .id();
    let user = post(
        app,
        "/api/v1/users",
        &json!({"email": "betty@holberton.io", "password": "pwd"}),
    )
    .await
    .id();
    let place = post(
        app,
        &format!("/api/v1/cities/{city}/places"),
        &json!({"user_id": user, "name": "Loft", "max_guest": 4, "latitude": 37.77}),
    )
    .await
    .id();
    let review = post(
        app,
        &format!("/api/v1/places/{place}/reviews"),
        &json!({"user_id": user, "text": "Great stay"}),
    )
    .await
    .id();
    Tree {
        state,
        city,
        user,
        place,
        review,
    }
}

// ---------------------------------------------------------------------------
// Service endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_status_called() {
    let app = app().await;

    let reply = get(&app, "/api/v1/status").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), json!({"status": "OK"}));
}

#[tokio::test]
async fn should_track_counts_across_creates_and_deletes() {
    let app = app().await;
    let tree = seed(&app).await;
    post(&app, "/api/v1/amenities", &json!({"name": "Wifi"})).await;

    let reply = get(&app, "/api/v1/stats").await;
    assert_eq!(
        reply.json(),
        json!({"amenities": 1, "cities": 1, "places": 1, "reviews": 1, "states": 1, "users": 1})
    );

    delete(&app, &format!("/api/v1/reviews/{}", tree.review)).await;

    let reply = get(&app, "/api/v1/stats").await;
    assert_eq!(reply.json()["reviews"], 0);
    assert_eq!(reply.json()["places"], 1);
}

#[tokio::test]
async fn should_answer_unknown_route_with_json_not_found() {
    let app = app().await;

    let reply = get(&app, "/api/v1/unknown").await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.json(), json!({"error": "Not found"}));
}

// ---------------------------------------------------------------------------
// States
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_and_list_california() {
    let app = app().await;

    let created = post(&app, "/api/v1/states", &json!({"name": "California"})).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let body = created.json();
    assert_eq!(body["name"], "California");
    assert_eq!(body["__class__"], "State");
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());

    let listed = get(&app, "/api/v1/states").await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.json(), json!([body]));
}

#[tokio::test]
async fn should_return_same_bytes_from_post_and_get() {
    let app = app().await;
    let tree = seed(&app).await;
    let amenity = post(&app, "/api/v1/amenities", &json!({"name": "Pool"})).await;

    let created_user = post(
        &app,
        "/api/v1/users",
        &json!({"email": "bob@holberton.io", "password": "pwd", "first_name": "Bob"}),
    )
    .await;
    let fetched_user = get(&app, &format!("/api/v1/users/{}", created_user.id())).await;
    assert_eq!(created_user.raw, fetched_user.raw);

    let fetched_amenity = get(&app, &format!("/api/v1/amenities/{}", amenity.id())).await;
    assert_eq!(amenity.raw, fetched_amenity.raw);

    for uri in [
        format!("/api/v1/states/{}", tree.state),
        format!("/api/v1/cities/{}", tree.city),
        format!("/api/v1/places/{}", tree.place),
        format!("/api/v1/reviews/{}", tree.review),
    ] {
        let first = get(&app, &uri).await;
        let second = get(&app, &uri).await;
        assert_eq!(first.status, StatusCode::OK);
        assert_eq!(first.raw, second.raw);
    }
}

#[tokio::test]
async fn should_return_not_found_after_delete() {
    let app = app().await;
    let id = post(&app, "/api/v1/states", &json!({"name": "Nevada"}))
        .await
        .id();

    let deleted = delete(&app, &format!("/api/v1/states/{id}")).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.json(), json!({}));

    let fetched = get(&app, &format!("/api/v1/states/{id}")).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);

    let again = delete(&app, &format!("/api/v1/states/{id}")).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_keep_identity_when_update_supplies_it() {
    let app = app().await;
    let created = post(&app, "/api/v1/states", &json!({"name": "Nevada"}))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let updated = put(
        &app,
        &format!("/api/v1/states/{id}"),
        &json!({
            "id": "forged",
            "created_at": "2000-01-01T00:00:00.000000Z",
            "updated_at": "2000-01-01T00:00:00.000000Z",
            "name": "Oregon",
            "capital": "Salem",
        }),
    )
    .await;

    assert_eq!(updated.status, StatusCode::OK);
    let body = updated.json();
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["created_at"], created["created_at"]);
    assert_ne!(body["updated_at"], "2000-01-01T00:00:00.000000Z");
    assert!(body["updated_at"].as_str() >= created["updated_at"].as_str());
    assert_eq!(body["name"], "Oregon");
    assert!(body.get("capital").is_none());

    let fetched = get(&app, &format!("/api/v1/states/{id}")).await;
    assert_eq!(fetched.raw, updated.raw);
}

#[tokio::test]
async fn should_return_not_found_when_updating_bad_id() {
    let app = app().await;

    let reply = put(&app, "/api/v1/states/bad-id", &json!({"name": "Texas"})).await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_when_updating_without_id() {
    let app = app().await;
    post(&app, "/api/v1/states", &json!({"name": "Nevada"})).await;

    let reply = put(&app, "/api/v1/states/", &json!({"name": "Texas"})).await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.json(), json!({"error": "Not found"}));
}

#[tokio::test]
async fn should_reject_non_object_update_body() {
    let app = app().await;
    let id = post(&app, "/api/v1/states", &json!({"name": "Nevada"}))
        .await
        .id();

    let reply = call(
        &app,
        Method::PUT,
        &format!("/api/v1/states/{id}"),
        Some("[1, 2]"),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.json(), json!({"error": "Not a JSON"}));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_absent_body_for_every_kind() {
    let app = app().await;
    let tree = seed(&app).await;

    for uri in [
        "/api/v1/states".to_string(),
        format!("/api/v1/states/{}/cities", tree.state),
        "/api/v1/amenities".to_string(),
        "/api/v1/users".to_string(),
        format!("/api/v1/cities/{}/places", tree.city),
        format!("/api/v1/places/{}/reviews", tree.place),
    ] {
        let reply = call(&app, Method::POST, &uri, None).await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(reply.json(), json!({"error": "Not a JSON"}), "{uri}");

        let reply = call(&app, Method::POST, &uri, Some("not json")).await;
        assert_eq!(reply.json(), json!({"error": "Not a JSON"}), "{uri}");
    }
}

#[tokio::test]
async fn should_name_first_missing_field_for_every_kind() {
    let app = app().await;
    let tree = seed(&app).await;

    let cases = [
        ("/api/v1/states".to_string(), json!({}), "Missing name"),
        (
            format!("/api/v1/states/{}/cities", tree.state),
            json!({"name": ""}),
            "Missing name",
        ),
        ("/api/v1/amenities".to_string(), json!({"name": null}), "Missing name"),
        ("/api/v1/users".to_string(), json!({}), "Missing email"),
        (
            "/api/v1/users".to_string(),
            json!({"email": "a@b.c"}),
            "Missing password",
        ),
        (
            format!("/api/v1/cities/{}/places", tree.city),
            json!({"name": "Loft"}),
            "Missing user_id",
        ),
        (
            format!("/api/v1/cities/{}/places", tree.city),
            json!({"user_id": tree.user}),
            "Missing name",
        ),
        (
            format!("/api/v1/places/{}/reviews", tree.place),
            json!({"text": "Nice"}),
            "Missing user_id",
        ),
        (
            format!("/api/v1/places/{}/reviews", tree.place),
            json!({"user_id": tree.user}),
            "Missing text",
        ),
    ];

    for (uri, body, expected) in cases {
        let reply = post(&app, &uri, &body).await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST, "{uri} {body}");
        assert_eq!(reply.json(), json!({"error": expected}), "{uri} {body}");
    }
}

#[tokio::test]
async fn should_reject_mistyped_field() {
    let app = app().await;

    let reply = post(&app, "/api/v1/states", &json!({"name": 42})).await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.json(), json!({"error": "Invalid name"}));
}

#[tokio::test]
async fn should_check_parent_city_before_body() {
    let app = app().await;
    let tree = seed(&app).await;

    let reply = post(
        &app,
        "/api/v1/cities/00000000-0000-4000-8000-000000000000/places",
        &json!({"user_id": tree.user, "name": "Loft"}),
    )
    .await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);

    let reply = call(
        &app,
        Method::POST,
        "/api/v1/states/missing/cities",
        None,
    )
    .await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_when_user_does_not_exist() {
    let app = app().await;
    let tree = seed(&app).await;

    let reply = post(
        &app,
        &format!("/api/v1/cities/{}/places", tree.city),
        &json!({"user_id": "00000000-0000-4000-8000-000000000000", "name": "Loft"}),
    )
    .await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);

    let reply = post(
        &app,
        &format!("/api/v1/places/{}/reviews", tree.place),
        &json!({"user_id": "nobody"}),
    )
    .await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_when_user_id_is_not_an_id() {
    let app = app().await;
    let tree = seed(&app).await;
    let places = format!("/api/v1/cities/{}/places", tree.city);
    let reviews = format!("/api/v1/places/{}/reviews", tree.place);

    for user_id in [json!(""), json!(null), json!(42)] {
        let reply = post(&app, &places, &json!({"user_id": user_id, "name": "Loft"})).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.json(), json!({"error": "Not found"}));

        let reply = post(&app, &reviews, &json!({"user_id": user_id, "text": "Nice"})).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.json(), json!({"error": "Not found"}));
    }
}

// ---------------------------------------------------------------------------
// Relations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_children_of_parent_only() {
    let app = app().await;
    let tree = seed(&app).await;
    let other = post(&app, "/api/v1/states", &json!({"name": "Nevada"}))
        .await
        .id();
    post(
        &app,
        &format!("/api/v1/states/{other}/cities"),
        &json!({"name": "Reno"}),
    )
    .await;

    let cities = get(&app, &format!("/api/v1/states/{}/cities", tree.state)).await;
    assert_eq!(cities.status, StatusCode::OK);
    let cities = cities.json();
    assert_eq!(cities.as_array().unwrap().len(), 1);
    assert_eq!(cities[0]["id"], tree.city);
    assert_eq!(cities[0]["state_id"], tree.state);

    let places = get(&app, &format!("/api/v1/cities/{}/places", tree.city)).await;
    assert_eq!(places.json()[0]["id"], tree.place);

    let reviews = get(&app, &format!("/api/v1/places/{}/reviews", tree.place)).await;
    assert_eq!(reviews.json()[0]["id"], tree.review);

    let missing = get(&app, "/api/v1/states/missing/cities").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_keep_foreign_keys_on_update() {
    let app = app().await;
    let tree = seed(&app).await;
    let other_user = post(
        &app,
        "/api/v1/users",
        &json!({"email": "bob@holberton.io", "password": "pwd"}),
    )
    .await
    .id();

    let place = put(
        &app,
        &format!("/api/v1/places/{}", tree.place),
        &json!({"city_id": "x", "user_id": other_user, "price_by_night": 120}),
    )
    .await;
    assert_eq!(place.status, StatusCode::OK);
    let place = place.json();
    assert_eq!(place["city_id"], tree.city);
    assert_eq!(place["user_id"], tree.user);
    assert_eq!(place["price_by_night"], 120);
    assert_eq!(place["max_guest"], 4);

    let review = put(
        &app,
        &format!("/api/v1/reviews/{}", tree.review),
        &json!({"place_id": "x", "text": "Even better"}),
    )
    .await
    .json();
    assert_eq!(review["place_id"], tree.place);
    assert_eq!(review["text"], "Even better");

    let city = put(
        &app,
        &format!("/api/v1/cities/{}", tree.city),
        &json!({"state_id": "x", "name": "Oakland"}),
    )
    .await
    .json();
    assert_eq!(city["state_id"], tree.state);
    assert_eq!(city["name"], "Oakland");
}

#[tokio::test]
async fn should_cascade_state_delete_to_descendants() {
    let app = app().await;
    let tree = seed(&app).await;

    delete(&app, &format!("/api/v1/states/{}", tree.state)).await;

    for uri in [
        format!("/api/v1/cities/{}", tree.city),
        format!("/api/v1/places/{}", tree.place),
        format!("/api/v1/reviews/{}", tree.review),
    ] {
        assert_eq!(get(&app, &uri).await.status, StatusCode::NOT_FOUND, "{uri}");
    }
    let user = get(&app, &format!("/api/v1/users/{}", tree.user)).await;
    assert_eq!(user.status, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_never_return_password() {
    let app = app().await;
    let created = post(
        &app,
        "/api/v1/users",
        &json!({"email": "betty@holberton.io", "password": "s3cret"}),
    )
    .await;
    let id = created.id();
    assert!(created.json().get("password").is_none());

    let updated = put(
        &app,
        &format!("/api/v1/users/{id}"),
        &json!({"password": "n3w", "last_name": "Holberton"}),
    )
    .await;
    assert!(updated.json().get("password").is_none());
    assert_eq!(updated.json()["last_name"], "Holberton");

    let listed = get(&app, "/api/v1/users").await;
    assert!(!String::from_utf8(listed.raw).unwrap().contains("s3cret"));
}

#[tokio::test]
async fn should_keep_email_on_user_update() {
    let app = app().await;
    let id = post(
        &app,
        "/api/v1/users",
        &json!({"email": "betty@holberton.io", "password": "pwd"}),
    )
    .await
    .id();

    let updated = put(
        &app,
        &format!("/api/v1/users/{id}"),
        &json!({"email": "other@holberton.io"}),
    )
    .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.json()["email"], "betty@holberton.io");
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_send_cors_headers_on_errors() {
    let app = app().await;

    let reply = get(&app, "/api/v1/states/missing").await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(
        reply.headers.get("access-control-allow-origin").unwrap(),
        "*"
    );
    assert!(reply.headers.contains_key("access-control-allow-methods"));
}

#[tokio::test]
async fn should_answer_preflight_requests() {
    let app = app().await;
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/states")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
