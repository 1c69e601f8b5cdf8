//! API and command tests against a wiremock server.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::api::{self, ApiError, ListQuery};
use crate::forms::CategoryForm;
use crate::models::{Category, ModerationStatus, Order, OrderStatus, Product, PromoCode, UserContent};
use crate::resources::{self, DashboardState, FetchStatus, MutationOutcome, ResourceList};
use crate::test_utils::TestContext;

fn settled<T: 'static>(ctx: &vowly_states::StateCtx) -> bool {
    ctx.cached::<ResourceList<T>>()
        .is_some_and(|list| !list.status.is_loading() && list.status != FetchStatus::Idle)
}

fn idle_mutations<T: api::AdminResource>(ctx: &vowly_states::StateCtx) -> bool {
    ctx.cached::<ResourceList<T>>()
        .is_some_and(|list| !list.is_mutating())
}

#[tokio::test]
async fn list_accepts_bare_array() {
    let test_ctx = TestContext::new().await;
    test_ctx
        .mock_get(
            "/api/admin/categories",
            json!([{"id": 1, "name": "Undangan Cetak"}, {"id": 2, "name": "Souvenir"}]),
        )
        .await;

    let listing = api::list::<Category>(&test_ctx.api_url(), &ListQuery::default())
        .await
        .unwrap();

    assert_eq!(listing.items.len(), 2);
    assert!(listing.meta.is_none());
}

#[tokio::test]
async fn list_sends_page_query() {
    let test_ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/products"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "15"))
        .and(query_param("search", "rustic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 16, "name": "Undangan Rustic"}],
            "meta": {"current_page": 2, "last_page": 3, "per_page": 15, "total": 31}
        })))
        .mount(&test_ctx.mock_server)
        .await;

    let query = ListQuery {
        search: Some(" rustic ".to_string()),
        ..ListQuery::page(2, 15)
    };
    let listing = api::list::<Product>(&test_ctx.api_url(), &query).await.unwrap();

    assert_eq!(listing.items[0].id, 16);
    assert_eq!(listing.meta.map(|m| m.total), Some(31));
}

#[tokio::test]
async fn rejected_create_returns_field_errors() {
    let test_ctx = TestContext::new().await;
    test_ctx
        .mock_json(
            "POST",
            "/api/admin/categories",
            422,
            json!({"message": "The given data was invalid.", "errors": {"slug": ["Slug sudah dipakai."]}}),
        )
        .await;

    let payload = json!({"name": "Souvenir", "slug": "souvenir"});
    let err = api::create::<Category, _>(&test_ctx.api_url(), &payload)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(err.field_errors().first("slug"), Some("Slug sudah dipakai."));
}

#[tokio::test]
async fn delete_tolerates_empty_body() {
    let test_ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/categories/9"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&test_ctx.mock_server)
        .await;

    let message = api::delete::<Category>(&test_ctx.api_url(), 9).await.unwrap();
    assert!(message.is_empty());
}

#[tokio::test]
async fn order_status_patch_sends_lowercase_status() {
    let test_ctx = TestContext::new().await;
    Mock::given(method("PATCH"))
        .and(path("/api/admin/orders/7/status"))
        .and(body_json(json!({"status": "shipped"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Status diperbarui"})))
        .expect(1)
        .mount(&test_ctx.mock_server)
        .await;

    let mutation = api::update_order_status(&test_ctx.api_url(), 7, OrderStatus::Shipped)
        .await
        .unwrap();
    assert_eq!(mutation.message, "Status diperbarui");
    assert!(mutation.data.is_none());
}

#[tokio::test]
async fn partial_mutation_record_keeps_message() {
    let test_ctx = TestContext::new().await;
    Mock::given(method("PATCH"))
        .and(path("/api/admin/orders/5/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Status pesanan diperbarui",
            "data": {"id": 5, "status": "paid"}
        })))
        .expect(1)
        .mount(&test_ctx.mock_server)
        .await;

    let mutation = api::update_order_status(&test_ctx.api_url(), 5, OrderStatus::Paid)
        .await
        .unwrap();
    assert_eq!(mutation.message, "Status pesanan diperbarui");
    assert!(mutation.data.is_none());
}

#[tokio::test]
async fn malformed_list_is_a_decode_error() {
    let test_ctx = TestContext::new().await;
    test_ctx
        .mock_get("/api/admin/orders", json!({"data": "nope"}))
        .await;

    let err = api::list::<Order>(&test_ctx.api_url(), &ListQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode { what: "pesanan", .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let err = api::fetch_dashboard("http://127.0.0.1:9/api").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn refresh_fills_resource_list() {
    let mut test_ctx = TestContext::new().await;
    test_ctx
        .mock_get(
            "/api/admin/categories",
            json!({"data": [{"id": 1, "name": "Undangan Cetak", "slug": "undangan-cetak"}]}),
        )
        .await;

    resources::ensure_fresh::<Category>(&mut test_ctx.ctx);
    assert!(
        test_ctx
            .ctx
            .cached::<ResourceList<Category>>()
            .is_some_and(|l| l.status.is_loading())
    );

    test_ctx.wait_until(settled::<Category>).await;

    let list = test_ctx.ctx.cached::<ResourceList<Category>>().unwrap();
    assert_eq!(list.status, FetchStatus::Loaded);
    assert_eq!(list.items[0].slug, "undangan-cetak");
    assert!(list.last_fetch.is_some());
}

#[tokio::test]
async fn failed_refresh_sets_error() {
    let mut test_ctx = TestContext::new().await;
    test_ctx
        .mock_json("GET", "/api/admin/promo-codes", 500, json!({"message": "Server error"}))
        .await;

    resources::refresh::<PromoCode>(&mut test_ctx.ctx);
    test_ctx.wait_until(settled::<PromoCode>).await;

    let list = test_ctx.ctx.cached::<ResourceList<PromoCode>>().unwrap();
    assert_eq!(list.status.error(), Some("Server error"));
}

#[tokio::test]
async fn create_invalidates_and_refetches() {
    let mut test_ctx = TestContext::new().await;
    test_ctx.mock_get("/api/admin/categories", json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/admin/categories"))
        .and(body_json(json!({
            "name": "Souvenir",
            "slug": "souvenir",
            "description": null,
            "parent_id": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Kategori berhasil dibuat.",
            "data": {"id": 3, "name": "Souvenir"}
        })))
        .expect(1)
        .mount(&test_ctx.mock_server)
        .await;

    resources::refresh::<Category>(&mut test_ctx.ctx);
    test_ctx.wait_until(settled::<Category>).await;

    let form = CategoryForm {
        name: "Souvenir".to_string(),
        ..CategoryForm::default()
    };
    resources::create::<Category, _>(&mut test_ctx.ctx, form.validate().unwrap());
    test_ctx.wait_until(idle_mutations::<Category>).await;

    let list = test_ctx.ctx.state_mut::<ResourceList<Category>>();
    assert!(list.needs_fetch());
    assert_eq!(
        list.take_outcome(),
        Some(MutationOutcome::Succeeded {
            message: "Kategori berhasil dibuat.".to_string()
        })
    );

    resources::ensure_fresh::<Category>(&mut test_ctx.ctx);
    test_ctx.wait_until(settled::<Category>).await;
    assert!(!test_ctx.ctx.state_mut::<ResourceList<Category>>().needs_fetch());
}

#[tokio::test]
async fn order_status_with_partial_record_invalidates_list() {
    let mut test_ctx = TestContext::new().await;
    test_ctx
        .mock_json(
            "PATCH",
            "/api/admin/orders/5/status",
            200,
            json!({"message": "Status pesanan diperbarui", "data": {"id": 5, "status": "paid"}}),
        )
        .await;

    resources::update_order_status(&mut test_ctx.ctx, 5, OrderStatus::Paid);
    test_ctx.wait_until(idle_mutations::<Order>).await;

    let list = test_ctx.ctx.state_mut::<ResourceList<Order>>();
    assert!(list.is_stale());
    assert_eq!(
        list.take_outcome(),
        Some(MutationOutcome::Succeeded {
            message: "Status pesanan diperbarui".to_string()
        })
    );
}

#[tokio::test]
async fn moderation_failure_reports_notice() {
    let mut test_ctx = TestContext::new().await;
    test_ctx
        .mock_json(
            "PATCH",
            "/api/admin/user-contents/4",
            403,
            json!({"message": "Tidak diizinkan."}),
        )
        .await;

    resources::moderate_user_content(&mut test_ctx.ctx, 4, ModerationStatus::Rejected);
    test_ctx.wait_until(idle_mutations::<UserContent>).await;

    let list = test_ctx.ctx.state_mut::<ResourceList<UserContent>>();
    assert!(!list.is_stale());
    assert_eq!(
        list.notice.as_ref().map(|n| n.message.as_str()),
        Some("Tidak diizinkan.")
    );
}

#[tokio::test]
async fn next_page_requests_following_page() {
    let mut test_ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/orders"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "meta": {"current_page": 1, "last_page": 2, "per_page": 15, "total": 20}
        })))
        .mount(&test_ctx.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/orders"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 20, "order_number": "INV-020", "customer_name": "Sari", "status": "paid", "total_amount": 500000}],
            "meta": {"current_page": 2, "last_page": 2, "per_page": 15, "total": 20}
        })))
        .mount(&test_ctx.mock_server)
        .await;

    resources::refresh::<Order>(&mut test_ctx.ctx);
    test_ctx.wait_until(settled::<Order>).await;

    resources::next_page::<Order>(&mut test_ctx.ctx);
    test_ctx.wait_until(settled::<Order>).await;

    let list = test_ctx.ctx.cached::<ResourceList<Order>>().unwrap();
    assert_eq!(list.page, 2);
    assert_eq!(list.items[0].order_number, "INV-020");
    assert!(!list.meta.is_some_and(|m| m.has_next()));
}

#[tokio::test]
async fn dashboard_refresh() {
    let mut test_ctx = TestContext::new().await;
    test_ctx
        .mock_get(
            "/api/admin/dashboard",
            json!({"data": {"total_revenue": 12500000, "total_orders": 42, "pending_reviews": 3}}),
        )
        .await;

    resources::refresh_dashboard(&mut test_ctx.ctx);
    test_ctx
        .wait_until(|ctx| {
            ctx.cached::<DashboardState>()
                .is_some_and(|s| s.status == FetchStatus::Loaded)
        })
        .await;

    let summary = test_ctx
        .ctx
        .cached::<DashboardState>()
        .and_then(|s| s.summary.clone())
        .unwrap();
    assert_eq!(summary.total_orders, 42);
    assert_eq!(summary.pending_reviews, 3);
}
