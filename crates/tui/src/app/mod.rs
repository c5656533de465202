use crate::keybinds::Keybinds;
use crate::ui::layout::LayoutState;
use crate::ui::panel::PanelType;
use crate::Config;
use anyhow::Result;
use coffee_rec_api::{ApiError, BrewMethod, Flavor, RecommendApi};
use coffee_rec_form::{FormError, RecommendationForm};
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::future::Future;
use tokio::sync::mpsc;

mod actions;
mod effects;
mod input;
mod render;
mod state;
mod types;

pub use state::App;
pub use types::{brew_rows, AppAsyncEvent, BrewRow};

impl App {
    /// Returns false when there is no event channel to report back on.
    pub(super) fn spawn_app_task<F>(&self, future: F) -> bool
    where
        F: Future<Output = AppAsyncEvent> + Send + 'static,
    {
        let Some(tx) = self.app_async_tx.clone() else {
            return false;
        };
        tokio::spawn(async move {
            let event = future.await;
            let _ = tx.send(event);
        });
        true
    }
}
