//! Page-level tests: the app fetches each list from the mocked admin API and
//! renders it through the page's data table.

mod common;

use common::{TestCtx, start_mock_server};
use kittest::Queryable;
use vowly_business::table::ViewMode;
use vowly_ui::pages::Page;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn categories_page_lists_fetched_categories() {
    let server = start_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "id": 1, "name": "Undangan Cetak", "slug": "undangan-cetak", "products_count": 4 },
                { "id": 2, "name": "Souvenir", "slug": "souvenir", "products_count": 0 }
            ]
        })))
        .expect(1..)
        .mount(&server)
        .await;

    let mut ctx = TestCtx::new_app(server, Page::Categories);

    assert!(
        ctx.wait_for_label("Undangan Cetak").await,
        "fetched category should be rendered"
    );
    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Souvenir").is_some(), "second row");
    assert!(harness.query_by_label("undangan-cetak").is_some(), "slug column");
    assert_eq!(
        harness.state().pages.categories.view_mode(),
        ViewMode::Table
    );
}

#[tokio::test]
async fn empty_list_shows_empty_state() {
    let server = start_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/invitation-templates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let mut ctx = TestCtx::new_app(server, Page::InvitationTemplates);

    assert!(
        ctx.wait_for_label("Tidak ada data").await,
        "empty message should be rendered"
    );
}

#[tokio::test]
async fn failed_fetch_offers_retry() {
    let server = start_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/attributes"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "message": "Server Error"
        })))
        .mount(&server)
        .await;

    let mut ctx = TestCtx::new_app(server, Page::Attributes);

    assert!(
        ctx.wait_for_label("Gagal memuat data").await,
        "fetch error should be rendered"
    );
    assert!(
        ctx.harness_mut().query_by_label("Coba lagi").is_some(),
        "retry button"
    );
}

#[tokio::test]
async fn narrow_window_renders_cards() {
    let server = start_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "name": "Undangan Cetak", "slug": "undangan-cetak" }
        ])))
        .mount(&server)
        .await;

    let mut ctx = TestCtx::new_app(server, Page::Categories);
    ctx.harness_mut().set_size(egui::vec2(500.0, 900.0));

    assert!(ctx.wait_for_label("Undangan Cetak").await, "row rendered");
    let harness = ctx.harness_mut();
    assert_eq!(
        harness.state().pages.categories.view_mode(),
        ViewMode::Cards
    );
    assert!(harness.query_by_label("Jumlah Produk").is_some(), "card label");
}

#[tokio::test]
async fn attributes_page_lists_values() {
    let server = start_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/attributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "name": "Ukuran Kertas", "values": ["A5", "A6"] }
        ])))
        .mount(&server)
        .await;

    let mut ctx = TestCtx::new_app(server, Page::Attributes);

    assert!(ctx.wait_for_label("Ukuran Kertas").await, "attribute row");
    assert!(
        ctx.harness_mut().query_by_label_contains("A5, A6").is_some(),
        "values column"
    );
}

#[tokio::test]
async fn reviews_page_uses_its_own_empty_text() {
    let server = start_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .mount(&server)
        .await;

    let mut ctx = TestCtx::new_app(server, Page::Reviews);

    assert!(
        ctx.wait_for_label("Belum ada ulasan").await,
        "review empty message"
    );
}
