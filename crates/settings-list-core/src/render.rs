use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::viewport::ViewportState;

pub fn render_scrollbar(area: Rect, buf: &mut Buffer, state: &ViewportState, style: Style) {
    buf.set_style(area, style);
    if area.height == 0 {
        return;
    }
    if state.content_h <= state.viewport_h as u32 || state.content_h == 0 {
        for dy in 0..area.height {
            buf.set_stringn(area.x, area.y + dy, " ", 1, style);
        }
        return;
    }

    let track_h = area.height as f64;
    let thumb_h = ((state.viewport_h as f64 / state.content_h as f64) * track_h)
        .round()
        .clamp(1.0, track_h) as u16;

    let max_y = state
        .content_h
        .saturating_sub(state.viewport_h as u32)
        .max(1) as f64;
    let thumb_top = ((state.y as f64 / max_y) * (track_h - thumb_h as f64))
        .round()
        .clamp(0.0, (track_h - thumb_h as f64).max(0.0)) as u16;

    for dy in 0..area.height {
        let ch = if dy >= thumb_top && dy < thumb_top + thumb_h {
            "█"
        } else {
            " "
        };
        buf.set_stringn(area.x, area.y + dy, ch, 1, style);
    }
}

/// Writes `input` at `(x, y)`, stopping before the glyph that would cross `max_cols`.
///
/// Wide glyphs are never split. Returns the number of columns written.
pub fn render_str_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) -> u16 {
    let mut dx = 0u16;
    let mut tmp = [0u8; 4];

    for ch in input.chars() {
        let ch = if ch == '\t' { ' ' } else { ch };
        let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
        if w == 0 {
            continue;
        }
        if dx + w > max_cols {
            break;
        }

        if let Some(cell) = buf.cell_mut((x + dx, y)) {
            cell.set_style(style);
            cell.set_symbol(ch.encode_utf8(&mut tmp));
        }
        if w == 2 {
            if let Some(cell) = buf.cell_mut((x + dx + 1, y)) {
                cell.set_style(style);
                cell.set_symbol("");
            }
        }
        dx += w;
    }

    dx
}

/// Writes `input` so that it ends at the right edge of `area`'s first line.
///
/// Text wider than the area is clipped from the end, keeping its start visible.
pub fn render_str_right(area: Rect, buf: &mut Buffer, input: &str, style: Style) -> Rect {
    if area.width == 0 || area.height == 0 {
        return Rect::new(area.right(), area.y, 0, 0);
    }
    let w = display_width(input).min(area.width as usize) as u16;
    let x = area.right() - w;
    let written = render_str_clipped(x, area.y, w, buf, input, style);
    Rect::new(x, area.y, written, 1)
}

/// Writes `input` centered on `area`'s first line.
pub fn render_str_centered(area: Rect, buf: &mut Buffer, input: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let w = display_width(input).min(area.width as usize) as u16;
    let x = area.x + (area.width - w) / 2;
    render_str_clipped(x, area.y, area.right() - x, buf, input, style);
}

pub fn display_width(input: &str) -> usize {
    UnicodeWidthStr::width(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn line(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn clipped_text_does_not_split_wide_glyphs() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 1));
        let written = render_str_clipped(0, 0, 3, &mut buf, "你好", Style::default());
        assert_eq!(written, 2);
        assert_eq!(line(&buf, 0), "你   ");
    }

    #[test]
    fn right_aligned_text_ends_at_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        let placed = render_str_right(buf.area, &mut buf, "Off", Style::default());
        assert_eq!(placed, Rect::new(7, 0, 3, 1));
        assert_eq!(line(&buf, 0), "       Off");
    }

    #[test]
    fn centered_text_is_centered() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 9, 1));
        render_str_centered(buf.area, &mut buf, "abc", Style::default());
        assert_eq!(line(&buf, 0), "   abc   ");
    }

    #[test]
    fn scrollbar_thumb_follows_scroll_offset() {
        let mut state = ViewportState::default();
        state.set_viewport(5);
        state.set_content(50);
        let area = Rect::new(0, 0, 1, 5);

        let mut buf = Buffer::empty(area);
        render_scrollbar(area, &mut buf, &state, Style::default());
        let column: Vec<&str> = (0..5).map(|y| buf[(0, y)].symbol()).collect();
        assert_eq!(column, ["█", " ", " ", " ", " "]);

        state.scroll_y_by(45);
        let mut buf = Buffer::empty(area);
        render_scrollbar(area, &mut buf, &state, Style::default());
        let column: Vec<&str> = (0..5).map(|y| buf[(0, y)].symbol()).collect();
        assert_eq!(column, [" ", " ", " ", " ", "█"]);
    }

    #[test]
    fn scrollbar_is_blank_when_content_fits() {
        let mut state = ViewportState::default();
        state.set_viewport(5);
        state.set_content(3);
        let area = Rect::new(0, 0, 1, 5);
        let mut buf = Buffer::empty(area);
        render_scrollbar(area, &mut buf, &state, Style::default());
        assert!((0..5).all(|y| buf[(0, y)].symbol() == " "));
    }
}
