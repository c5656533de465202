use super::*;

impl App {
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => Ok(false),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind == KeyEventKind::Release {
            return Ok(false);
        }

        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        if key.code == KeyCode::Char('?') {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        if self.show_help {
            if key.code == KeyCode::Esc {
                self.show_help = false;
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Esc => return Ok(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_flavor_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_flavor_cursor(true),
            KeyCode::Char(' ') => self.toggle_flavor_at_cursor(),
            KeyCode::Char('c') => self.clear_flavors(),
            KeyCode::Right | KeyCode::Tab => self.cycle_brew_method(true),
            KeyCode::Left | KeyCode::BackTab => self.cycle_brew_method(false),
            KeyCode::Enter => self.submit_request(),
            _ => {}
        }

        Ok(false)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<bool> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            match self.hit_test(mouse.column, mouse.row) {
                Some(HitTarget::Flavor(idx)) => self.toggle_flavor_at(idx),
                Some(HitTarget::BrewMethod(method)) => self.select_brew_method(method),
                None => {}
            }
        }
        Ok(false)
    }

    fn hit_test(&self, col: u16, row: u16) -> Option<HitTarget> {
        for panel in self.layout.get_panels() {
            if !Self::rect_contains(panel.rect, col, row) {
                continue;
            }
            let line = Self::inner_line(panel.rect, row)?;
            return match panel.panel_type {
                PanelType::Flavors => (line < Flavor::ALL.len()).then_some(HitTarget::Flavor(line)),
                PanelType::BrewMethods => match brew_rows().get(line) {
                    Some(BrewRow::Method(method)) => Some(HitTarget::BrewMethod(*method)),
                    _ => None,
                },
                _ => None,
            };
        }

        None
    }

    /// Row index inside a bordered panel, `None` on the borders.
    fn inner_line(rect: Rect, row: u16) -> Option<usize> {
        if row <= rect.y || row + 1 >= rect.y + rect.height {
            return None;
        }
        Some((row - rect.y - 1) as usize)
    }

    fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
        col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
    }
}

#[derive(Debug, Clone, Copy)]
enum HitTarget {
    Flavor(usize),
    BrewMethod(BrewMethod),
}
