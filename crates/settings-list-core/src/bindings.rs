use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::keymap;
use crate::keymap::Binding;

/// Commands the screen view understands while the list (not the search field) has focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListCommand {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    Activate,
    Toggle,
    Search,
}

#[derive(Clone, Debug)]
pub struct ListBindings {
    pub up: Binding,
    pub down: Binding,
    pub page_up: Binding,
    pub page_down: Binding,
    pub top: Binding,
    pub bottom: Binding,
    pub activate: Binding,
    pub toggle: Binding,
    pub search: Binding,
}

impl Default for ListBindings {
    fn default() -> Self {
        Self {
            up: Binding::new(
                "↑/k",
                "up",
                vec![keymap::key(KeyCode::Up), keymap::key_char('k')],
            ),
            down: Binding::new(
                "↓/j",
                "down",
                vec![keymap::key(KeyCode::Down), keymap::key_char('j')],
            ),
            page_up: Binding::new(
                "PgUp",
                "page up",
                vec![keymap::key(KeyCode::PageUp), keymap::key_ctrl('u')],
            ),
            page_down: Binding::new(
                "PgDn",
                "page down",
                vec![keymap::key(KeyCode::PageDown), keymap::key_ctrl('d')],
            ),
            top: Binding::new(
                "g",
                "top",
                vec![keymap::key(KeyCode::Home), keymap::key_char('g')],
            ),
            bottom: Binding::new(
                "G",
                "bottom",
                vec![keymap::key(KeyCode::End), keymap::key_char('G')],
            ),
            activate: Binding::new("enter", "open", vec![keymap::key(KeyCode::Enter)]),
            toggle: Binding::new("space", "toggle", vec![keymap::key_char(' ')]),
            search: Binding::new("/", "search", vec![keymap::key_char('/')]),
        }
    }
}

impl ListBindings {
    pub fn command_for(&self, key: &KeyEvent) -> Option<ListCommand> {
        [
            (&self.up, ListCommand::Up),
            (&self.down, ListCommand::Down),
            (&self.page_up, ListCommand::PageUp),
            (&self.page_down, ListCommand::PageDown),
            (&self.top, ListCommand::Top),
            (&self.bottom, ListCommand::Bottom),
            (&self.activate, ListCommand::Activate),
            (&self.toggle, ListCommand::Toggle),
            (&self.search, ListCommand::Search),
        ]
        .into_iter()
        .find_map(|(binding, cmd)| binding.matches(key).then_some(cmd))
    }

    /// Bindings worth listing in a help bar, most useful first.
    pub fn help(&self) -> Vec<Binding> {
        vec![
            self.down.clone(),
            self.up.clone(),
            self.activate.clone(),
            self.toggle.clone(),
            self.search.clone(),
        ]
    }
}
