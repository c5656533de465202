pub struct Keybinds;

impl Default for Keybinds {
    fn default() -> Self {
        Self
    }
}

impl Keybinds {
    pub fn help_text(&self) -> String {
        r#"Keyboard Shortcuts:

Flavors:
  ↑ / ↓, k / j      Move cursor
  Space             Toggle flavor under cursor
  c                 Clear all flavors

Brew method:
  ← / →, Tab        Next / previous method
  Shift + Tab       Previous method

Recommendations:
  Enter             Get recommendations

General:
  ?                 Toggle this help
  Esc, Ctrl + Q     Quit

Mouse:
  Click flavor      Toggle it
  Click method      Select it
"#
        .to_string()
    }
}
