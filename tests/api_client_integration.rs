//! End-to-end tests: controllers over the reqwest transport against a mock
//! backend.
//!
//! These tests verify the full call path:
//! 1. Paths, query strings and JSON bodies reach the backend as expected
//! 2. Statuses are classified into `ApiResult` with the right messages
//! 3. The session cookie from login is sent on later calls
//! 4. An expired session navigates to the login page exactly once

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use barhop_client::adapters::{RecordingNavigator, ReqwestTransport, TransportConfig};
use barhop_client::application::{ApiClient, Controllers, SessionGuard};
use barhop_client::domain::auth::LoginRequest;
use barhop_client::domain::foundation::{BarId, ListParams, PlanId};
use barhop_client::domain::memo::UpsertMemoRequest;
use barhop_client::domain::plan::{CreatePlanRequest, PlanSpot, VoteRequest};
use barhop_client::domain::recommend::RecommendBarsRequest;
use barhop_client::domain::{ApiError, ApiResult, ErrorMessagePolicy};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestContext {
    server: MockServer,
    api: Controllers,
    navigator: Arc<RecordingNavigator>,
}

impl TestContext {
    async fn new() -> Self {
        Self::with_policy(ErrorMessagePolicy::StatusTable).await
    }

    async fn with_policy(policy: ErrorMessagePolicy) -> Self {
        let server = MockServer::start().await;
        let config = TransportConfig::new(format!("{}/api", server.uri()))
            .with_timeout(Duration::from_millis(500));
        let (api, navigator) = wire(config, policy);
        Self {
            server,
            api,
            navigator,
        }
    }
}

fn wire(config: TransportConfig, policy: ErrorMessagePolicy) -> (Controllers, Arc<RecordingNavigator>) {
    let transport = ReqwestTransport::new(config).expect("transport");
    let client = Arc::new(ApiClient::new(Arc::new(transport)).with_policy(policy));
    let navigator = Arc::new(RecordingNavigator::at("/home"));
    let guard = SessionGuard::new(navigator.clone());
    (Controllers::new(client, guard), navigator)
}

fn bar_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Bar X",
        "address": "서울 마포구 와우산로 1",
        "latitude": 37.55,
        "longitude": 126.92,
        "baseCategoryName": "호프",
        "menus": ["생맥주", "감자튀김"],
        "categories": [],
        "openInformation": "18:00-02:00",
        "createdAt": "2025-01-01T00:00:00",
        "updatedAt": "2025-01-01T00:00:00",
        "deletedAt": null
    })
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn bar_lookup_succeeds_with_exact_status_and_body() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/bars/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bar_json(42)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let result = ctx.api.bars.find_bar_by_id(BarId::new(42)).await;

    let (status, data) = match result {
        ApiResult::Success { status, data } => (status, data),
        ApiResult::Failure(error) => panic!("expected success, got {error}"),
    };
    assert_eq!(status, 200);
    assert_eq!(data.id, BarId::new(42));
    assert_eq!(data.menus, vec!["생맥주", "감자튀김"]);
    assert_eq!(ctx.navigator.navigation_count(), 0);
}

#[tokio::test]
async fn failed_login_reports_credentials_and_guard_redirects() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "loginId": "neo", "password": "wrong" })))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })))
        .mount(&ctx.server)
        .await;

    let result = ctx.api.auth.login(&LoginRequest::new("neo", "wrong")).await;

    assert_eq!(
        result,
        ApiResult::fail(ApiError::new(401, "로그인 정보가 올바르지 않습니다."))
    );
    assert_eq!(ctx.navigator.navigation_count(), 0);

    let guard = SessionGuard::new(ctx.navigator.clone());
    let guarded = guard.guard(result.clone());
    assert_eq!(guarded, result);
    assert_eq!(ctx.navigator.navigations(), vec!["/login?redirect=%2Fhome"]);
}

#[tokio::test]
async fn session_cookie_from_login_is_sent_on_later_calls() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "JSESSIONID=abc123; Path=/; HttpOnly"),
        )
        .mount(&ctx.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/bars/7/memo"))
        .and(header("cookie", "JSESSIONID=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "content": "창가 자리",
            "createdAt": "2025-02-01T20:00:00",
            "updatedAt": "2025-02-01T20:00:00"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let login = ctx.api.auth.login(&LoginRequest::new("neo", "matrix")).await;
    let memo = ctx
        .api
        .memos
        .upsert_memo(BarId::new(7), &UpsertMemoRequest::new("창가 자리"))
        .await;

    assert_eq!(login, ApiResult::ok((), 200));
    assert_eq!(memo.data().map(|m| m.content.as_str()), Some("창가 자리"));
}

#[tokio::test]
async fn session_cookie_is_dropped_without_credentials() {
    let server = MockServer::start().await;
    let config = TransportConfig::new(format!("{}/api", server.uri()))
        .with_timeout(Duration::from_millis(500))
        .with_credentials(false);
    let (api, _) = wire(config, ErrorMessagePolicy::StatusTable);
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "JSESSIONID=abc123; Path=/; HttpOnly"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/bars/7/memo"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let login = api.auth.login(&LoginRequest::new("neo", "matrix")).await;
    let memo = api.memos.get_memo(BarId::new(7)).await;

    assert_eq!(login, ApiResult::ok((), 200));
    assert_eq!(memo.status(), 401);
    let requests = server.received_requests().await.expect("request recording");
    let memo_request = requests
        .iter()
        .find(|r| r.url.path() == "/api/bars/7/memo")
        .expect("memo request");
    assert!(memo_request.headers.get("cookie").is_none());
}

#[tokio::test]
async fn expired_session_on_guarded_call_redirects_once() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/plans"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&ctx.server)
        .await;
    ctx.navigator.set_location("/plans?tab=mine");

    let result = ctx.api.plans.list_plans(&ListParams::default()).await;

    assert_eq!(result.status(), 401);
    assert_eq!(
        ctx.navigator.navigations(),
        vec!["/login?redirect=%2Fplans%3Ftab%3Dmine"]
    );
}

#[tokio::test]
async fn plan_flow_sends_queries_and_bodies() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/api/plans"))
        .and(body_json(json!({
            "title": "금요일 2차",
            "spots": [{ "placeId": 42, "name": "Bar X", "order": 1 }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "planId": 8,
            "title": "금요일 2차",
            "spots": [{ "placeId": 42, "name": "Bar X", "order": 1 }]
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/plans"))
        .and(query_param("sort", "latest"))
        .and(query_param("page", "0"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{ "planId": 8, "title": "금요일 2차" }],
            "page": 0,
            "size": 10,
            "totalElements": 1,
            "totalPages": 1
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/plans/8/votes"))
        .and(body_json(json!({ "vote": true })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let created = ctx
        .api
        .plans
        .create_plan(&CreatePlanRequest {
            title: "금요일 2차".to_string(),
            description: None,
            theme: None,
            budget: None,
            spots: vec![PlanSpot::new("Bar X", 1).at_place(42)],
        })
        .await;
    let plan_id = created.data().map(|p| p.plan_id).expect("created plan");
    let listed = ctx
        .api
        .plans
        .list_plans(&ListParams::sorted("latest").with_page(0, 10))
        .await;
    let voted = ctx.api.plans.vote_plan(plan_id, VoteRequest { vote: true }).await;

    assert_eq!(plan_id, PlanId::new(8));
    assert_eq!(created.status(), 201);
    assert_eq!(listed.data().map(|page| page.content.len()), Some(1));
    assert_eq!(voted, ApiResult::ok((), 204));
}

#[tokio::test]
async fn unknown_status_gets_generic_message_and_keeps_code() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/bars/1"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "message": "maintenance", "code": "MAINTENANCE" })),
        )
        .mount(&ctx.server)
        .await;

    let result = ctx.api.bars.find_bar_by_id(BarId::new(1)).await;

    let error = result.error().expect("failure");
    assert_eq!(error.status, 503);
    assert_eq!(error.message, "요청 처리 중 오류가 발생했습니다.");
    assert_eq!(error.code.as_deref(), Some("MAINTENANCE"));
}

#[tokio::test]
async fn backend_message_policy_surfaces_server_text() {
    let ctx = TestContext::with_policy(ErrorMessagePolicy::PreferBackendMessage).await;
    Mock::given(method("GET"))
        .and(path("/api/bars/1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "폐업한 술집입니다." })))
        .mount(&ctx.server)
        .await;

    let result = ctx.api.bars.find_bar_by_id(BarId::new(1)).await;

    assert_eq!(result.error().map(|e| e.message.as_str()), Some("폐업한 술집입니다."));
}

#[tokio::test]
async fn slow_backend_times_out_as_network_failure() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/bars/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(bar_json(1))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&ctx.server)
        .await;

    let result = ctx.api.bars.find_bar_by_id(BarId::new(1)).await;

    assert_eq!(
        result,
        ApiResult::fail(ApiError::new(0, "서버에 연결할 수 없습니다."))
    );
}

#[tokio::test]
async fn unreachable_backend_is_network_failure() {
    let config = TransportConfig::new("http://127.0.0.1:9/api").with_timeout(Duration::from_millis(500));
    let (api, navigator) = wire(config, ErrorMessagePolicy::StatusTable);

    let result = api
        .recommend
        .recommend_bars(&RecommendBarsRequest {
            lat: 37.5,
            lon: 127.0,
            max_distance: 1000,
            user_prompt: "아무 곳".to_string(),
        })
        .await;

    assert_eq!(result.status(), 0);
    assert_eq!(result.error().map(|e| e.message.as_str()), Some("서버에 연결할 수 없습니다."));
    assert_eq!(navigator.navigation_count(), 0);
}
