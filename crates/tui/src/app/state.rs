use super::*;
use std::time::Instant;

pub struct App {
    pub config: Config,
    pub form: RecommendationForm,
    pub api: Option<RecommendApi>,
    pub layout: LayoutState,
    pub keybinds: Keybinds,
    pub flavor_cursor: usize,
    pub show_help: bool,
    pub app_async_tx: Option<mpsc::UnboundedSender<AppAsyncEvent>>,
    pub app_async_rx: Option<mpsc::UnboundedReceiver<AppAsyncEvent>>,
    pub loading_start_time: Option<Instant>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        let (app_async_tx, app_async_rx) = mpsc::unbounded_channel();

        let api = match RecommendApi::new(&config.service.endpoint, config.timeout()) {
            Ok(api) => Some(api),
            Err(e) => {
                tracing::warn!("Recommendation service unavailable: {}", e);
                None
            }
        };

        Self {
            config,
            form: RecommendationForm::new(),
            api,
            layout: LayoutState::default(),
            keybinds: Keybinds,
            flavor_cursor: 0,
            show_help: false,
            app_async_tx: Some(app_async_tx),
            app_async_rx: Some(app_async_rx),
            loading_start_time: None,
        }
    }
}
