use crate::keymap::Binding;
use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct HelpBarOptions {
    pub separator: String,
    pub space: String,
}

impl Default for HelpBarOptions {
    fn default() -> Self {
        Self {
            separator: " • ".to_string(),
            space: " ".to_string(),
        }
    }
}

/// One-line key hint footer, e.g. `↓/j down • enter open`.
#[derive(Clone, Debug, Default)]
pub struct HelpBar {
    bindings: Vec<Binding>,
    options: HelpBarOptions,
}

impl HelpBar {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self {
            bindings,
            options: HelpBarOptions::default(),
        }
    }

    pub fn with_options(bindings: Vec<Binding>, options: HelpBarOptions) -> Self {
        Self { bindings, options }
    }

    pub fn set_bindings(&mut self, bindings: Vec<Binding>) {
        self.bindings = bindings;
    }

    pub fn render_ref(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let muted = theme.text_muted;
        buf.set_style(area, muted);

        let mut x = area.x;
        for (text, style) in self.segments(theme.accent, muted) {
            let remaining = area.right().saturating_sub(x);
            if remaining == 0 {
                break;
            }
            x += render::render_str_clipped(x, area.y, remaining, buf, &text, style);
        }
    }

    fn segments(&self, key_style: Style, style: Style) -> Vec<(String, Style)> {
        let mut out = Vec::with_capacity(self.bindings.len() * 4);
        for (i, b) in self.bindings.iter().enumerate() {
            if i > 0 {
                out.push((self.options.separator.clone(), style));
            }
            out.push((b.help_key.clone(), key_style));
            out.push((self.options.space.clone(), style));
            out.push((b.help_desc.clone(), style));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::ListBindings;

    fn line(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn lists_bindings_with_separators() {
        let bar = HelpBar::new(ListBindings::default().help());
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        bar.render_ref(area, &mut buf, &Theme::default());
        let text = line(&buf, 0);
        assert!(text.contains(" • "));
        assert!(text.contains("search"));
    }

    #[test]
    fn clips_to_the_area() {
        let bar = HelpBar::new(ListBindings::default().help());
        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);
        bar.render_ref(area, &mut buf, &Theme::default());
        assert_eq!(line(&buf, 0).chars().count(), 6);
    }
}
