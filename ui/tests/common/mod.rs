use egui_kittest::Harness;
use kittest::Queryable as _;
use vowly_ui::VowlyAdminApp;
use vowly_ui::pages::Page;
use vowly_ui::state::State;
use wiremock::MockServer;

/// Frames and sleeps to wait for mocked API responses.
pub const MAX_POLLS: usize = 50;

pub async fn start_mock_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, VowlyAdminApp>,
}

impl<'a> TestCtx<'a> {
    /// App opened on `page`, pointed at `mock_server`. Mount the mocks
    /// first: the page fetches on its first frame.
    pub fn new_app(mock_server: MockServer, page: Page) -> Self {
        let mut app = VowlyAdminApp::new(State::test(mock_server.uri()));
        app.open(page);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, VowlyAdminApp> {
        &mut self.harness
    }

    /// Steps the harness until a node labelled with `text` shows up.
    pub async fn wait_for_label(&mut self, text: &str) -> bool {
        for _ in 0..MAX_POLLS {
            self.harness.step();
            if self.harness.query_by_label_contains(text).is_some() {
                return true;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }
        false
    }
}
