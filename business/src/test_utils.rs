//! Mock-server helpers for business tests.
//!
//! ```ignore
//! let mut test_ctx = TestContext::new().await;
//! test_ctx.mock_get("/api/admin/categories", json!([...])).await;
//!
//! refresh::<Category>(&mut test_ctx.ctx);
//! test_ctx
//!     .wait_until(|ctx| ctx.cached::<ResourceList<Category>>().is_some_and(|l| !l.status.is_loading()))
//!     .await;
//! ```

#![cfg(all(test, not(target_arch = "wasm32")))]

use std::time::Duration;

use vowly_states::StateCtx;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use crate::BusinessConfig;

/// A mock server plus a `StateCtx` whose config points at it.
pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock_server = MockServer::start().await;
        let mut ctx = StateCtx::new();
        ctx.add_state(BusinessConfig::new(mock_server.uri()));

        Self { mock_server, ctx }
    }

    pub fn api_url(&self) -> String {
        format!("{}/api", self.mock_server.uri())
    }

    /// Syncs the context until `done` holds, panicking after five seconds.
    pub async fn wait_until(&mut self, done: impl Fn(&StateCtx) -> bool) {
        let start = std::time::Instant::now();
        loop {
            self.ctx.sync();
            if done(&self.ctx) {
                return;
            }
            assert!(
                start.elapsed() < Duration::from_secs(5),
                "timed out waiting for state to settle"
            );
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    pub async fn mock_json(&self, verb: &str, route: &str, status: u16, body: serde_json::Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_get(&self, route: &str, body: serde_json::Value) {
        self.mock_json("GET", route, 200, body).await;
    }
}
