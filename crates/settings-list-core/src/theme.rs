use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub accent: Style,
    pub title: Style,
    pub group: Style,
    pub cursor: Style,
    pub badge: Style,
    pub switch_on: Style,
    pub switch_off: Style,
    pub disclosure: Style,
    pub search_field: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            accent: Style::default().blue(),
            title: Style::default().add_modifier(Modifier::BOLD),
            group: Style::default(),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            badge: Style::default().fg(Color::White).bg(Color::Red),
            switch_on: Style::default().green(),
            switch_off: Style::default().dark_gray(),
            disclosure: Style::default().dark_gray(),
            search_field: Style::default().dark_gray(),
        }
    }
}
