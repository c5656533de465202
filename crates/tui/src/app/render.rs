use super::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        self.layout.calculate_layout(area);

        let panels = self.layout.get_panels().to_vec();

        for panel in panels {
            match panel.panel_type {
                PanelType::Topbar => self.render_topbar(frame, panel.rect),
                PanelType::Flavors => self.render_flavors(frame, panel.rect),
                PanelType::BrewMethods => self.render_brew_methods(frame, panel.rect),
                PanelType::StatusBar => self.render_status_bar(frame, panel.rect),
                PanelType::Results => self.render_results(frame, panel.rect),
            }
        }

        if self.show_help {
            self.render_help(frame, area);
        }
    }

    fn render_topbar(&self, frame: &mut Frame, area: Rect) {
        let target = self
            .api
            .as_ref()
            .and_then(|api| api.endpoint().host_str().map(str::to_string))
            .unwrap_or_else(|| "no endpoint".to_string());

        let text = format!(" ☕ Coffee Recommender   → {}   [?] help", target);

        frame.render_widget(
            Paragraph::new(text).style(Style::default().add_modifier(Modifier::BOLD)),
            area,
        );
    }

    fn render_flavors(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = Flavor::ALL
            .iter()
            .enumerate()
            .map(|(i, flavor)| {
                let cursor = if i == self.flavor_cursor { "> " } else { "  " };
                let check = if self.form.is_selected(*flavor) { "[x]" } else { "[ ]" };
                ListItem::new(format!("{}{} {}", cursor, check, flavor))
            })
            .collect();

        frame.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Flavor Descriptors "),
            ),
            area,
        );
    }

    fn render_brew_methods(&self, frame: &mut Frame, area: Rect) {
        let current = self.form.brew_method();

        let items: Vec<ListItem> = brew_rows()
            .into_iter()
            .map(|row| match row {
                BrewRow::GroupLabel(label) => ListItem::new(label)
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                BrewRow::Method(method) => {
                    let marker = if method == current { "(●)" } else { "( )" };
                    ListItem::new(format!("  {} {}", marker, method))
                }
            })
            .collect();

        frame.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(" Brew Method ")),
            area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let (text, style) = if let Some(started) = self.loading_start_time {
            (
                format!(
                    "⏳ Fetching recommendations... {:.1}s",
                    started.elapsed().as_secs_f32()
                ),
                Style::default().fg(Color::Yellow),
            )
        } else if let Some(error) = self.form.error() {
            (format!("✗ {}", error), Style::default().fg(Color::Red))
        } else {
            let count = self.form.selected_flavors().count();
            (
                format!(
                    "[Enter] Get Recommendations   {} flavor(s), {}",
                    count,
                    self.form.brew_method()
                ),
                Style::default(),
            )
        };

        frame.render_widget(
            Paragraph::new(text)
                .style(style)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let recommendations = self.form.recommendations();

        let items: Vec<ListItem> = if recommendations.is_empty() {
            vec![ListItem::new(
                "No recommendations yet. Pick flavors and press Enter.",
            )
            .style(Style::default().fg(Color::DarkGray))]
        } else {
            recommendations
                .iter()
                .map(|rec| ListItem::new(format!("• {}", rec.display_line())))
                .collect()
        };

        let title = match self.form.last_updated() {
            Some(at) => format!(
                " Recommendations (updated {}) ",
                at.with_timezone(&chrono::Local).format("%H:%M")
            ),
            None => " Recommendations ".to_string(),
        };

        frame.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help_text = self.keybinds.help_text();
        let popup_area = self.centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(help_text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help - Press ? to close "),
            ),
            popup_area,
        );
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = ratatui::layout::Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .constraints([
                ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
                ratatui::layout::Constraint::Percentage(percent_y),
                ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        ratatui::layout::Layout::default()
            .direction(ratatui::layout::Direction::Horizontal)
            .constraints([
                ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
                ratatui::layout::Constraint::Percentage(percent_x),
                ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
