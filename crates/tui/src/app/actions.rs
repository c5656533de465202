use super::*;

impl App {
    pub(super) fn move_flavor_cursor(&mut self, down: bool) {
        let last = Flavor::ALL.len() - 1;
        self.flavor_cursor = if down {
            (self.flavor_cursor + 1).min(last)
        } else {
            self.flavor_cursor.saturating_sub(1)
        };
    }

    pub(super) fn toggle_flavor_at(&mut self, idx: usize) {
        if let Some(&flavor) = Flavor::ALL.get(idx) {
            self.flavor_cursor = idx;
            let selected = self.form.toggle_flavor(flavor);
            tracing::debug!(%flavor, selected, "flavor toggled");
        }
    }

    pub(super) fn toggle_flavor_at_cursor(&mut self) {
        self.toggle_flavor_at(self.flavor_cursor);
    }

    pub(super) fn clear_flavors(&mut self) {
        self.form.clear_flavors();
    }

    pub(super) fn select_brew_method(&mut self, method: BrewMethod) {
        self.form.set_brew_method(method);
        tracing::debug!(%method, "brew method selected");
    }

    pub(super) fn cycle_brew_method(&mut self, forward: bool) {
        let method = self.form.cycle_brew_method(forward);
        tracing::debug!(%method, "brew method selected");
    }
}
