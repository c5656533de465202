use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::panel::{Panel, PanelType};

const TOPBAR_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 3;
const FLAVORS_WIDTH: u16 = 26;
const MIN_BREW_WIDTH: u16 = 24;

/// Flavor rows plus the two border lines.
pub const FORM_HEIGHT: u16 = 12;

#[derive(Default)]
pub struct LayoutState {
    cached_panels: Vec<Panel>,
}

impl LayoutState {
    pub fn calculate_layout(&mut self, area: Rect) -> &[Panel] {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOPBAR_HEIGHT),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
                Constraint::Min(3),
            ])
            .split(area);

        let form_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(FLAVORS_WIDTH),
                Constraint::Min(MIN_BREW_WIDTH),
            ])
            .split(main_layout[1]);

        self.cached_panels = vec![
            Panel {
                panel_type: PanelType::Topbar,
                rect: main_layout[0],
            },
            Panel {
                panel_type: PanelType::Flavors,
                rect: form_layout[0],
            },
            Panel {
                panel_type: PanelType::BrewMethods,
                rect: form_layout[1],
            },
            Panel {
                panel_type: PanelType::StatusBar,
                rect: main_layout[2],
            },
            Panel {
                panel_type: PanelType::Results,
                rect: main_layout[3],
            },
        ];

        &self.cached_panels
    }

    pub fn get_panels(&self) -> &[Panel] {
        &self.cached_panels
    }

    pub fn panel_rect(&self, panel_type: PanelType) -> Option<Rect> {
        self.cached_panels
            .iter()
            .find(|p| p.panel_type == panel_type)
            .map(|p| p.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flavors_panel_fits_every_descriptor() {
        let mut layout = LayoutState::default();
        layout.calculate_layout(Rect::new(0, 0, 80, 30));

        let flavors = layout.panel_rect(PanelType::Flavors).expect("flavors panel");
        assert_eq!(flavors.height, FORM_HEIGHT);
        assert!(flavors.height - 2 >= coffee_rec_api::Flavor::ALL.len() as u16);

        let topbar = layout.panel_rect(PanelType::Topbar).expect("topbar");
        assert_eq!(topbar.y, 0);
        assert_eq!(layout.get_panels().len(), 5);
    }
}
