//! Integration tests for the user endpoints.

mod common;

use common::{client, user_json, StubTransport};
use gt_api::{Method, RawResponse};
use gt_core::error::GtError;
use gt_models::{User, UserProfileDto};

#[tokio::test]
async fn get_actual_user_decodes_body() {
    let body = user_json(1, "admin").to_string();
    let stub = StubTransport::replying(200, &body);

    let user = client(&stub).get_actual_user().await.unwrap();

    let expected: User = serde_json::from_str(&body).unwrap();
    assert_eq!(user, expected);
    assert_eq!(user.login, "admin");

    let request = stub.single_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/user");
    assert!(request.query.is_empty());
    assert!(request.body.is_none());
}

#[tokio::test]
async fn get_user_builds_id_path() {
    let stub = StubTransport::replying(200, &user_json(42, "jane").to_string());

    let user = client(&stub).get_user(42).await.unwrap();

    assert_eq!(user.id, 42);
    assert_eq!(stub.single_request().path, "/api/users/42");
}

#[tokio::test]
async fn get_user_not_found_keeps_status_and_body() {
    let stub = StubTransport::replying(404, r#"{"message":"user not found"}"#);

    let err = client(&stub).get_user(7).await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        GtError::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, r#"{"message":"user not found"}"#);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn get_all_users_sends_large_page_and_keeps_order() {
    let fixture = serde_json::json!([
        user_json(3, "carol"),
        user_json(1, "alice"),
        user_json(2, "bob"),
    ])
    .to_string();
    let stub = StubTransport::with_handler(move |request| {
        if request.query.get("perpage") == Some("99999") {
            Ok(RawResponse::new(200, fixture.clone()))
        } else {
            Ok(RawResponse::new(400, "missing perpage"))
        }
    });

    let users = client(&stub).get_all_users().await.unwrap();

    let logins: Vec<_> = users.iter().map(|u| u.login.as_str()).collect();
    assert_eq!(logins, vec!["carol", "alice", "bob"]);
    let request = stub.single_request();
    assert_eq!(request.path, "/api/users");
    assert_eq!(request.query.len(), 1);
}

#[tokio::test]
async fn search_users_without_filters_sends_no_query() {
    let stub = StubTransport::replying(
        200,
        r#"{"totalCount":0,"users":[],"page":1,"perPage":1000}"#,
    );

    let page = client(&stub)
        .search_users_with_paging(None, None, None)
        .await
        .unwrap();

    assert_eq!(page.total_count, 0);
    assert_eq!(page.per_page, 1000);
    let request = stub.single_request();
    assert_eq!(request.path, "/api/users/search");
    assert!(request.query.is_empty());
}

#[tokio::test]
async fn search_users_with_filters_sends_exact_query() {
    let body = serde_json::json!({
        "totalCount": 11,
        "users": [user_json(5, "jane")],
        "page": 2,
        "perPage": 10
    })
    .to_string();
    let stub = StubTransport::replying(200, &body);

    let page = client(&stub)
        .search_users_with_paging(Some("jane"), Some(10), Some(2))
        .await
        .unwrap();

    assert_eq!(page.total_count, 11);
    assert_eq!(page.users.len(), 1);
    let request = stub.single_request();
    let mut pairs: Vec<_> = request.query.iter().collect();
    pairs.sort();
    assert_eq!(pairs, vec![("page", "2"), ("perpage", "10"), ("query", "jane")]);
}

#[tokio::test]
async fn switch_actual_user_context_posts_without_body() {
    let stub = StubTransport::replying(200, r#"{"message":"Active organization changed"}"#);

    let msg = client(&stub).switch_actual_user_context(3).await.unwrap();

    assert_eq!(msg.message_or_default(), "Active organization changed");
    let request = stub.single_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/api/user/using/3");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn get_user_orgs_and_teams() {
    let stub = StubTransport::replying(
        200,
        r#"[{"orgId":1,"name":"Main Org.","role":"Admin"},{"orgId":4,"name":"Ops","role":"Viewer"}]"#,
    );
    let orgs = client(&stub).get_user_orgs(9).await.unwrap();
    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[1].role, "Viewer");
    assert_eq!(stub.single_request().path, "/api/users/9/orgs");

    let stub = StubTransport::replying(
        200,
        r#"[{"id":1,"orgId":1,"name":"SRE","email":"sre@example.com","avatarUrl":"/avatar/x","memberCount":4,"permission":0}]"#,
    );
    let teams = client(&stub).get_user_teams(9).await.unwrap();
    assert_eq!(teams[0].member_count, 4);
    assert_eq!(stub.single_request().path, "/api/users/9/teams");
}

#[tokio::test]
async fn update_user_sends_profile_fields() {
    let stub = StubTransport::replying(200, r#"{"message":"User updated"}"#);
    let profile = UserProfileDto {
        email: Some("jane.doe@example.com".into()),
        name: Some("Jane Doe".into()),
        login: Some("jane".into()),
        theme: Some("light".into()),
        ..UserProfileDto::default()
    };

    let msg = client(&stub).update_user(&profile, 5).await.unwrap();

    assert_eq!(msg.message.as_deref(), Some("User updated"));
    let request = stub.single_request();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.path, "/api/users/5");
    assert_eq!(
        stub.single_json_body(),
        serde_json::to_value(&profile).unwrap()
    );
}
