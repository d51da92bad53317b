use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use unicode_width::UnicodeWidthChar;

#[derive(Clone, Debug)]
pub struct SearchBarOptions {
    pub placeholder: String,
    pub cancel_label: String,
    pub glyph: String,
}

impl Default for SearchBarOptions {
    fn default() -> Self {
        Self {
            placeholder: "Search".to_string(),
            cancel_label: "Cancel".to_string(),
            glyph: "⌕".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchAction {
    None,
    Changed,
    /// Enter: keep the query, hand focus back to the list.
    Submitted,
    /// Esc: query cleared, focus handed back to the list.
    Cancelled,
}

/// Single-line search field with a cancel affordance.
#[derive(Clone, Debug, Default)]
pub struct SearchBar {
    query: String,
    cursor: usize, // char index
    focused: bool,
    options: SearchBarOptions,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SearchBarOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &SearchBarOptions {
        &self.options
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = single_line(&query.into());
        self.cursor = self.query.chars().count();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.cursor = self.query.chars().count();
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn handle_event(&mut self, event: InputEvent) -> SearchAction {
        if !self.focused {
            return SearchAction::None;
        }
        match event {
            InputEvent::Paste(s) => {
                let s = single_line(&s);
                if s.is_empty() {
                    return SearchAction::None;
                }
                for ch in s.chars() {
                    self.insert_char(ch);
                }
                SearchAction::Changed
            }
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(_) => SearchAction::None,
        }
    }

    /// Terminal cursor position for the field when it is focused.
    pub fn cursor_pos(&self, area: Rect) -> Option<(u16, u16)> {
        if !self.focused || area.width == 0 || area.height == 0 {
            return None;
        }
        let field = self.field_area(area);
        let text_x = field.x + self.text_offset();
        let before: String = self.query.chars().take(self.cursor).collect();
        let x = text_x as usize + render::display_width(&before);
        (x < field.right() as usize).then_some((x as u16, field.y))
    }

    pub fn render_ref(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let field = self.field_area(area);
        buf.set_style(field, theme.search_field.add_modifier(Modifier::REVERSED));

        let glyph_x = field.x + 1;
        let written = render::render_str_clipped(
            glyph_x,
            field.y,
            field.width.saturating_sub(1),
            buf,
            &self.options.glyph,
            theme.search_field,
        );
        let text_x = glyph_x + written + 1;
        let text_w = field.right().saturating_sub(text_x);
        if self.query.is_empty() {
            render::render_str_clipped(
                text_x,
                field.y,
                text_w,
                buf,
                &self.options.placeholder,
                theme.search_field,
            );
        } else {
            render::render_str_clipped(
                text_x,
                field.y,
                text_w,
                buf,
                &self.query,
                theme.text_primary,
            );
        }

        if self.focused {
            let cancel = Rect::new(field.right(), area.y, area.right() - field.right(), 1);
            render::render_str_right(cancel, buf, &self.options.cancel_label, theme.accent);
        }
    }

    fn field_area(&self, area: Rect) -> Rect {
        let cancel_w = if self.focused {
            render::display_width(&self.options.cancel_label) as u16 + 1
        } else {
            0
        };
        Rect::new(area.x, area.y, area.width.saturating_sub(cancel_w), 1)
    }

    fn text_offset(&self) -> u16 {
        1 + render::display_width(&self.options.glyph) as u16 + 1
    }

    fn handle_key(&mut self, key: KeyEvent) -> SearchAction {
        if let Some(c) = key.typed_char() {
            self.insert_char(c);
            return SearchAction::Changed;
        }
        match key.code {
            KeyCode::Enter => {
                self.blur();
                SearchAction::Submitted
            }
            KeyCode::Esc => {
                self.query.clear();
                self.cursor = 0;
                self.blur();
                SearchAction::Cancelled
            }
            KeyCode::Backspace => {
                if self.backspace() {
                    SearchAction::Changed
                } else {
                    SearchAction::None
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                SearchAction::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.query.chars().count());
                SearchAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                SearchAction::None
            }
            KeyCode::End => {
                self.cursor = self.query.chars().count();
                SearchAction::None
            }
            _ => SearchAction::None,
        }
    }

    fn insert_char(&mut self, ch: char) {
        if UnicodeWidthChar::width(ch).unwrap_or(0) == 0 {
            return;
        }
        let byte_idx = byte_index_from_char_index(&self.query, self.cursor);
        self.query.insert(byte_idx, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = byte_index_from_char_index(&self.query, self.cursor - 1);
        let end = byte_index_from_char_index(&self.query, self.cursor);
        self.query.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }
}

fn byte_index_from_char_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn single_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code))
    }

    fn line(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn ignores_input_until_focused() {
        let mut s = SearchBar::new();
        assert_eq!(s.handle_event(key(KeyCode::Char('w'))), SearchAction::None);
        s.focus();
        assert_eq!(s.handle_event(key(KeyCode::Char('w'))), SearchAction::Changed);
        assert_eq!(s.query(), "w");
    }

    #[test]
    fn edits_at_the_cursor() {
        let mut s = SearchBar::new();
        s.focus();
        for c in "wif".chars() {
            s.handle_event(key(KeyCode::Char(c)));
        }
        s.handle_event(key(KeyCode::Left));
        s.handle_event(key(KeyCode::Backspace));
        assert_eq!(s.query(), "wf");
        s.handle_event(InputEvent::Paste("i-\nF".to_string()));
        assert_eq!(s.query(), "wi- Ff");
    }

    #[test]
    fn enter_keeps_query_and_esc_clears_it() {
        let mut s = SearchBar::new();
        s.focus();
        s.handle_event(key(KeyCode::Char('v')));
        assert_eq!(s.handle_event(key(KeyCode::Enter)), SearchAction::Submitted);
        assert!(!s.is_focused());
        assert_eq!(s.query(), "v");

        s.focus();
        assert_eq!(s.handle_event(key(KeyCode::Esc)), SearchAction::Cancelled);
        assert!(!s.is_focused());
        assert_eq!(s.query(), "");
    }

    #[test]
    fn shows_placeholder_then_cancel_label_when_focused() {
        let mut s = SearchBar::new();
        let area = Rect::new(0, 0, 30, 1);

        let mut buf = Buffer::empty(area);
        s.render_ref(area, &mut buf, &Theme::default());
        assert!(line(&buf, 0).contains("Search"));
        assert!(!line(&buf, 0).contains("Cancel"));

        s.focus();
        let mut buf = Buffer::empty(area);
        s.render_ref(area, &mut buf, &Theme::default());
        assert!(line(&buf, 0).ends_with("Cancel"));
        assert_eq!(s.cursor_pos(area), Some((3, 0)));
    }
}
