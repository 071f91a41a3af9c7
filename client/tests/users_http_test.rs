//! HTTP Integration Tests for User Moderation
//!
//! Listing, filtering and optimistic status changes against a stub backend.
//!
//! Run with: `cargo test --test users_http_test`

mod helpers;

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use dash_client::commands::users::{list_users, set_user_status};
use dash_client::commands::ListQuery;
use dash_client::view::{flow, FieldState, Notification, UsersPage};
use dash_common::UserStatus;
use helpers::{app_state, spawn_test_server, Recorder};
use serde_json::{json, Value};

fn user_json(id: &str, name: &str, email: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "full_name": name,
        "email": email,
        "status": status,
        "plan": "free",
        "isVerified": false,
        "createdAt": "2024-01-15T10:00:00.000Z"
    })
}

fn users_route() -> Router {
    Router::new().route(
        "/admin/get-all-users",
        get(|| async {
            Json(json!({
                "message": "Users fetched",
                "data": [
                    user_json("u1", "Sarah Johnson", "sarah@email.com", "active"),
                    user_json("u2", "Michael Chen", "michael@email.com", "active"),
                ]
            }))
        }),
    )
}

#[tokio::test]
async fn test_search_narrows_list() {
    let server = spawn_test_server(users_route()).await;
    let state = app_state(&server);

    let rendered = list_users(
        &state,
        ListQuery {
            search: Some("sarah".into()),
            show: None,
        },
    )
    .await;

    assert!(!rendered.failed());
    assert!(rendered.output.contains("Sarah Johnson"));
    assert!(!rendered.output.contains("Michael Chen"));
    assert!(rendered.output.contains("Jan 15, 2024"));
}

#[tokio::test]
async fn test_show_opens_detail_panel() {
    let server = spawn_test_server(users_route()).await;
    let state = app_state(&server);

    let rendered = list_users(
        &state,
        ListQuery {
            search: None,
            show: Some("u2".into()),
        },
    )
    .await;
    assert!(rendered.output.contains("Michael Chen\n════"));

    let missing = list_users(
        &state,
        ListQuery {
            search: None,
            show: Some("nobody".into()),
        },
    )
    .await;
    assert!(missing.failed());
}

#[tokio::test]
async fn test_load_failure_notifies_with_fallback() {
    let router = Router::new().route(
        "/admin/get-all-users",
        get(|| async { StatusCode::BAD_GATEWAY }),
    );
    let server = spawn_test_server(router).await;
    let state = app_state(&server);

    let rendered = list_users(&state, ListQuery::default()).await;
    assert_eq!(
        rendered.notifications,
        vec![Notification::error("Failed to fetch users")]
    );
    assert!(rendered.output.contains("No users found"));
}

#[tokio::test]
async fn test_forbidden_change_rolls_back() {
    let router = users_route().route(
        "/admin/update-user-status",
        patch(|| async {
            (StatusCode::FORBIDDEN, Json(json!({"message": "forbidden"})))
        }),
    );
    let server = spawn_test_server(router).await;
    let state = app_state(&server);

    let rendered = set_user_status(&state, "u1", UserStatus::Banned).await;

    assert_eq!(rendered.notifications, vec![Notification::error("forbidden")]);
    assert!(!rendered.output.contains("banned"));
    assert!(rendered.output.contains("Sarah Johnson\n════"));
}

#[tokio::test]
async fn test_success_reconciles_with_server_value() {
    let bodies: Recorder<Value> = Recorder::default();
    let seen = bodies.clone();

    let router = users_route().route(
        "/admin/update-user-status",
        patch(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.push(body);
                // The backend settles on a different status than requested.
                Json(json!({
                    "message": "User status updated",
                    "data": user_json("u1", "Sarah Johnson", "sarah@email.com", "inactive")
                }))
            }
        }),
    );
    let server = spawn_test_server(router).await;
    let state = app_state(&server);

    let page = UsersPage::mount();
    flow::load(&page.handle(), state.api.list_users()).await;
    page.update(|s| s.select("u1"));

    let notice = flow::mutate(&page.handle(), "u1", UserStatus::Banned, || {
        state.api.update_user_status("u1", UserStatus::Banned)
    })
    .await
    .unwrap();

    assert_eq!(notice, Notification::success("User status updated"));
    assert_eq!(bodies.take(), vec![json!({"id": "u1", "status": "banned"})]);

    let s = page.state();
    assert_eq!(s.records()[0].status, UserStatus::Inactive);
    assert_eq!(s.selected().unwrap().status, UserStatus::Inactive);
    assert_eq!(
        s.field_state("u1"),
        Some(FieldState::Committed(UserStatus::Inactive))
    );
}

#[tokio::test]
async fn test_last_response_wins() {
    let router = users_route().route(
        "/admin/update-user-status",
        patch(|Json(body): Json<Value>| async move {
            let status = body["status"].as_str().unwrap_or_default().to_string();
            // The first request is answered last.
            if status == "banned" {
                tokio::time::sleep(Duration::from_millis(150)).await;
            }
            Json(json!({
                "message": format!("Status set to {status}"),
                "data": user_json("u1", "Sarah Johnson", "sarah@email.com", &status)
            }))
        }),
    );
    let server = spawn_test_server(router).await;
    let state = app_state(&server);

    let page = UsersPage::mount();
    let handle = page.handle();
    flow::load(&handle, state.api.list_users()).await;

    let (first, second) = tokio::join!(
        flow::mutate(&handle, "u1", UserStatus::Banned, || {
            state.api.update_user_status("u1", UserStatus::Banned)
        }),
        flow::mutate(&handle, "u1", UserStatus::Blocked, || {
            state.api.update_user_status("u1", UserStatus::Blocked)
        }),
    );

    assert_eq!(first.unwrap().message, "Status set to banned");
    assert_eq!(second.unwrap().message, "Status set to blocked");

    let s = page.state();
    assert_eq!(s.records()[0].status, UserStatus::Banned);
    assert!(!s.snapshot().is_pending("u1"));
}

#[tokio::test]
async fn test_navigating_away_discards_response() {
    let router = users_route().route(
        "/admin/update-user-status",
        patch(|| async { Json(json!({"message": "User status updated"})) }),
    );
    let server = spawn_test_server(router).await;
    let state = app_state(&server);

    let page = UsersPage::mount();
    let handle = page.handle();
    flow::load(&handle, state.api.list_users()).await;

    let mut page = Some(page);
    let notice = flow::mutate(&handle, "u1", UserStatus::Deleted, || {
        page.take();
        state.api.update_user_status("u1", UserStatus::Deleted)
    })
    .await;

    assert!(notice.is_none());
    assert!(!handle.is_mounted());
}
