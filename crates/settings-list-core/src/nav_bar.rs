use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;

/// Navigation bar with a large title that compacts once the content below scrolls.
///
/// Both modes take [`NavBar::HEIGHT`] lines, so the content below keeps its size when the title
/// switches.
#[derive(Clone, Debug)]
pub struct NavBar {
    title: String,
    inset: u16,
}

impl NavBar {
    pub const HEIGHT: u16 = 2;

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            inset: 2,
        }
    }

    pub fn with_inset(mut self, inset: u16) -> Self {
        self.inset = inset;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn render_ref(&self, area: Rect, buf: &mut Buffer, theme: &Theme, large: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if large {
            // Spacer line on top, big left-aligned title below it.
            let y = area.y + area.height.min(Self::HEIGHT) - 1;
            let x = area.x.saturating_add(self.inset).min(area.right());
            render::render_str_clipped(
                x,
                y,
                area.right() - x,
                buf,
                &self.title,
                theme.title.add_modifier(Modifier::BOLD),
            );
        } else {
            let line = Rect::new(area.x, area.y, area.width, 1);
            render::render_str_centered(line, buf, &self.title, theme.title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn large_title_is_left_aligned_on_second_line() {
        let bar = NavBar::new("Settings");
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        bar.render_ref(area, &mut buf, &Theme::default(), true);
        assert_eq!(line(&buf, 0).trim(), "");
        assert!(line(&buf, 1).starts_with("  Settings"));
        assert!(buf[(2, 1)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn compact_title_is_centered() {
        let bar = NavBar::new("Settings");
        let area = Rect::new(0, 0, 20, NavBar::HEIGHT);
        let mut buf = Buffer::empty(area);
        bar.render_ref(area, &mut buf, &Theme::default(), false);
        assert_eq!(line(&buf, 0), "      Settings      ");
        assert_eq!(line(&buf, 1).trim(), "");
    }
}
