use vowly_business::BusinessConfig;
use vowly_states::{StateCtx, Time};

/// The main application state.
pub struct State {
    /// The state context shared by every page.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}

impl State {
    pub fn with_config(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);

        Self { ctx }
    }

    /// State pointed at a mock API server.
    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }
}
