//! The settings screen: navigation bar, search bar and the grouped, virtualized list body.
//!
//! [`SettingsView`] owns presentation state only (scroll offset, cursor, search query and the
//! switch positions the user has flipped). The rows themselves come from a [`ListController`]
//! passed into every call, the same way a list widget is handed its item count.

use crate::bindings::ListBindings;
use crate::bindings::ListCommand;
use crate::controller::ListController;
use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::model::RowIndex;
use crate::model::RowTag;
use crate::model::RowVariant;
use crate::nav_bar::NavBar;
use crate::render;
use crate::search::SearchAction;
use crate::search::SearchBar;
use crate::search::SearchBarOptions;
use crate::theme::Theme;
use crate::viewport::ViewportState;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Style;
use std::collections::BTreeMap;
use virtualizer::Align;
use virtualizer::Virtualizer;
use virtualizer::VirtualizerOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    Redraw,
    /// The row should be activated; pass the index to [`ListController::activate_row`].
    Activated(RowIndex),
    /// The user flipped a switch. The view already shows the new position.
    Toggled { index: RowIndex, on: bool },
}

#[derive(Clone, Debug)]
pub struct SettingsViewOptions {
    pub show_scrollbar: bool,
    pub overscan: usize,
    /// Columns between the screen edge and the grouped sections.
    pub group_inset: u16,
    /// Blank lines above each section.
    pub section_gap: u32,
    /// Lines scrolled per mouse wheel notch.
    pub wheel_step: i32,
    /// Show the large title while the list is scrolled to the top.
    pub large_title: bool,
    pub scrollbar_style: Style,
    pub bindings: ListBindings,
}

impl Default for SettingsViewOptions {
    fn default() -> Self {
        Self {
            show_scrollbar: true,
            overscan: 2,
            group_inset: 2,
            section_gap: 1,
            wheel_step: 3,
            large_title: true,
            scrollbar_style: Style::default(),
            bindings: ListBindings::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Entry {
    Gap,
    Row(RowIndex),
}

pub struct SettingsView {
    pub viewport: ViewportState,
    options: SettingsViewOptions,
    nav_bar: NavBar,
    search: SearchBar,
    virtualizer: Virtualizer,

    entries: Vec<Entry>,
    built_for: Option<String>,
    cursor: Option<usize>,
    switches: BTreeMap<RowIndex, bool>,

    search_area: Rect,
    hits: Vec<(Rect, usize)>,
}

impl SettingsView {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_options(
            title,
            SettingsViewOptions::default(),
            SearchBarOptions::default(),
        )
    }

    pub fn with_options(
        title: impl Into<String>,
        options: SettingsViewOptions,
        search: SearchBarOptions,
    ) -> Self {
        let virtualizer = make_virtualizer(Vec::new(), options.overscan);
        Self {
            viewport: ViewportState::default(),
            nav_bar: NavBar::new(title).with_inset(options.group_inset),
            options,
            search: SearchBar::with_options(search),
            virtualizer,
            entries: Vec::new(),
            built_for: None,
            cursor: None,
            switches: BTreeMap::new(),
            search_area: Rect::default(),
            hits: Vec::new(),
        }
    }

    pub fn options(&self) -> &SettingsViewOptions {
        &self.options
    }

    pub fn search(&self) -> &SearchBar {
        &self.search
    }

    /// Row under the cursor.
    pub fn cursor(&self) -> Option<RowIndex> {
        self.cursor.and_then(|i| self.row_at(i))
    }

    /// Moves the cursor to `index` if that row is currently listed.
    pub fn set_cursor(&mut self, index: RowIndex, controller: &ListController) {
        self.sync(controller);
        if let Some(pos) = self.entries.iter().position(|e| *e == Entry::Row(index)) {
            self.cursor = Some(pos);
            self.ensure_cursor_visible();
        }
    }

    /// Rows currently listed (all of them, or the search matches), in display order.
    pub fn listed_rows(&mut self, controller: &ListController) -> Vec<RowIndex> {
        self.sync(controller);
        self.entries
            .iter()
            .filter_map(|e| match e {
                Entry::Row(ix) => Some(*ix),
                Entry::Gap => None,
            })
            .collect()
    }

    /// Current switch position for a toggle row: the user's last flip, else the model value.
    pub fn switch_state(&self, index: RowIndex, controller: &ListController) -> Option<bool> {
        let row = controller.row(index.section, index.row).ok()?;
        match row.variant() {
            RowVariant::Toggle { on } => Some(self.switches.get(&index).copied().unwrap_or(*on)),
            _ => None,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>, controller: &ListController) {
        self.search.set_query(query);
        self.sync(controller);
    }

    /// Terminal cursor position while the search field is being edited.
    pub fn cursor_pos(&self) -> Option<(u16, u16)> {
        self.search.cursor_pos(self.search_area)
    }

    pub fn handle_event(
        &mut self,
        event: InputEvent,
        controller: &ListController,
    ) -> SettingsAction {
        self.sync(controller);

        if self.search.is_focused() {
            if let InputEvent::Mouse(m) = &event {
                return self.handle_mouse(*m, controller);
            }
            return match self.search.handle_event(event) {
                SearchAction::None => SettingsAction::None,
                SearchAction::Changed | SearchAction::Submitted | SearchAction::Cancelled => {
                    self.sync(controller);
                    SettingsAction::Redraw
                }
            };
        }

        match event {
            InputEvent::Paste(_) => SettingsAction::None,
            InputEvent::Key(key) => self.handle_key(key, controller),
            InputEvent::Mouse(m) => self.handle_mouse(m, controller),
        }
    }

    pub fn render(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        controller: &ListController,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.sync(controller);

        let large = self.options.large_title && self.viewport.at_top();
        let nav_h = NavBar::HEIGHT.min(area.height);
        let nav_area = Rect::new(area.x, area.y, area.width, nav_h);
        self.nav_bar.render_ref(nav_area, buf, theme, large);

        let inset = self.options.group_inset.min(area.width / 2);
        let search_y = nav_area.bottom();
        self.search_area = if search_y < area.bottom() {
            Rect::new(area.x + inset, search_y, area.width - 2 * inset, 1)
        } else {
            Rect::default()
        };
        self.search.render_ref(self.search_area, buf, theme);

        let body_y = (search_y + 1).min(area.bottom());
        let body = Rect::new(area.x, body_y, area.width, area.bottom() - body_y);
        self.render_body(body, buf, theme, controller);
    }

    fn render_body(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        controller: &ListController,
    ) {
        self.hits.clear();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (content_area, scrollbar_x) = if self.options.show_scrollbar && area.width >= 2 {
            (
                Rect::new(area.x, area.y, area.width - 1, area.height),
                Some(area.x + area.width - 1),
            )
        } else {
            (area, None)
        };

        self.viewport.set_viewport(content_area.height);
        self.sync_virtualizer();

        let inset = self.options.group_inset.min(content_area.width / 2);
        let row_x = content_area.x + inset;
        let row_w = content_area.width - 2 * inset;
        let template = *controller.template();

        let items = self.virtualizer.get_virtual_items();
        let scroll = self.virtualizer.scroll_offset();

        for item in items {
            let Some(Entry::Row(ix)) = self.entries.get(item.index).copied() else {
                continue;
            };

            let rel_start = item.start as i64 - scroll as i64;
            let clip_top = (-rel_start).max(0) as u32;
            let visible_start = rel_start.max(0) as u16;
            let remaining_h = content_area.height.saturating_sub(visible_start);
            let visible_h = item
                .size
                .saturating_sub(clip_top)
                .min(remaining_h as u32) as u16;
            if visible_h == 0 || row_w == 0 {
                continue;
            }

            let mut rendered = match controller.render_row(ix.section, ix.row) {
                Ok(rendered) => rendered,
                Err(err) => {
                    tracing::warn!(%ix, error = %err, "skipping row that failed to render");
                    continue;
                }
            };
            if let Some(on) = self.switches.get(&ix) {
                rendered.set_switch(*on);
            }

            let style = if self.cursor == Some(item.index) {
                theme.group.patch(theme.cursor)
            } else {
                theme.group
            };

            // Paint the whole row off-screen, then copy the lines that are visible.
            let full = Rect::new(0, 0, row_w, rendered.height.max(1));
            let mut scratch = Buffer::empty(full);
            scratch.set_style(full, style);
            rendered.paint(full, &mut scratch, theme, &template);

            let row_area = Rect::new(row_x, content_area.y + visible_start, row_w, visible_h);
            for dy in 0..visible_h {
                let src_y = clip_top as u16 + dy;
                for dx in 0..row_w {
                    if let (Some(src), Some(dst)) = (
                        scratch.cell((dx, src_y)).cloned(),
                        buf.cell_mut((row_area.x + dx, row_area.y + dy)),
                    ) {
                        *dst = src;
                    }
                }
            }
            self.hits.push((row_area, item.index));
        }

        if let Some(sb_x) = scrollbar_x {
            render::render_scrollbar(
                Rect::new(sb_x, area.y, 1, area.height),
                buf,
                &self.viewport,
                self.options.scrollbar_style,
            );
        }
    }

    fn handle_key(&mut self, key: KeyEvent, controller: &ListController) -> SettingsAction {
        if key.code == KeyCode::Esc && !self.search.query().is_empty() {
            self.search.set_query("");
            self.sync(controller);
            return SettingsAction::Redraw;
        }

        let Some(command) = self.options.bindings.command_for(&key) else {
            return SettingsAction::None;
        };

        match command {
            ListCommand::Up => self.step_cursor(-1),
            ListCommand::Down => self.step_cursor(1),
            ListCommand::PageUp => {
                self.viewport.page_up();
                self.cursor_from_scroll()
            }
            ListCommand::PageDown => {
                self.viewport.page_down();
                self.cursor_from_scroll()
            }
            ListCommand::Top => {
                let first = self.row_positions().next();
                self.jump_to(first)
            }
            ListCommand::Bottom => {
                let last = self.row_positions().last();
                self.jump_to(last)
            }
            ListCommand::Activate => self
                .cursor()
                .map(SettingsAction::Activated)
                .unwrap_or(SettingsAction::None),
            ListCommand::Toggle => match self.cursor() {
                Some(ix) => self.flip_or_activate(ix, controller),
                None => SettingsAction::None,
            },
            ListCommand::Search => {
                self.search.focus();
                SettingsAction::Redraw
            }
        }
    }

    fn handle_mouse(&mut self, m: MouseEvent, controller: &ListController) -> SettingsAction {
        let at = Position::new(m.x, m.y);
        match m.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let step = if m.kind == MouseEventKind::ScrollUp {
                    -self.options.wheel_step
                } else {
                    self.options.wheel_step
                };
                let before = self.viewport.y;
                self.viewport.scroll_y_by(step);
                self.virtualizer.set_scroll_offset(self.viewport.y as u64);
                if self.viewport.y == before {
                    SettingsAction::None
                } else {
                    SettingsAction::Redraw
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.search_area.contains(at) {
                    self.search.focus();
                    return SettingsAction::Redraw;
                }
                if self.search.is_focused() {
                    self.search.blur();
                }
                let hit = self
                    .hits
                    .iter()
                    .find(|(rect, _)| rect.contains(at))
                    .map(|(_, pos)| *pos);
                match hit.and_then(|pos| self.row_at(pos).map(|ix| (pos, ix))) {
                    Some((pos, ix)) => {
                        self.cursor = Some(pos);
                        match controller.row(ix.section, ix.row).map(|r| r.tag()) {
                            Ok(RowTag::Toggle) => self.flip_or_activate(ix, controller),
                            _ => SettingsAction::Activated(ix),
                        }
                    }
                    None => SettingsAction::None,
                }
            }
            _ => SettingsAction::None,
        }
    }

    fn flip_or_activate(&mut self, ix: RowIndex, controller: &ListController) -> SettingsAction {
        match self.switch_state(ix, controller) {
            Some(on) => {
                self.switches.insert(ix, !on);
                SettingsAction::Toggled { index: ix, on: !on }
            }
            None => SettingsAction::Activated(ix),
        }
    }

    fn step_cursor(&mut self, delta: i32) -> SettingsAction {
        let rows: Vec<usize> = self.row_positions().collect();
        if rows.is_empty() {
            return SettingsAction::None;
        }
        let current = self
            .cursor
            .and_then(|c| rows.iter().position(|&p| p == c))
            .unwrap_or(0);
        let next = (current as i64 + delta as i64).clamp(0, rows.len() as i64 - 1) as usize;
        if Some(rows[next]) == self.cursor {
            return SettingsAction::None;
        }
        self.jump_to(Some(rows[next]))
    }

    fn jump_to(&mut self, pos: Option<usize>) -> SettingsAction {
        let Some(pos) = pos else {
            return SettingsAction::None;
        };
        self.cursor = Some(pos);
        if self.row_positions().next() == Some(pos) {
            // Keep the section gap above the first row in view.
            self.viewport.to_top();
            self.virtualizer.set_scroll_offset(0);
        }
        self.ensure_cursor_visible();
        SettingsAction::Redraw
    }

    fn cursor_from_scroll(&mut self) -> SettingsAction {
        self.virtualizer.set_scroll_offset(self.viewport.y as u64);
        self.viewport.y = self.virtualizer.scroll_offset().min(u32::MAX as u64) as u32;
        let offset = self.virtualizer.scroll_offset();
        let landed = self
            .virtualizer
            .index_at_offset(offset)
            .and_then(|i| self.row_positions().find(|&p| p >= i));
        if let Some(pos) = landed {
            self.cursor = Some(pos);
        }
        SettingsAction::Redraw
    }

    fn ensure_cursor_visible(&mut self) {
        self.sync_virtualizer();
        if let Some(cursor) = self.cursor {
            self.virtualizer.scroll_to_index(cursor, Align::Auto);
            self.viewport.y = self.virtualizer.scroll_offset().min(u32::MAX as u64) as u32;
        }
        self.viewport.clamp();
    }

    fn row_positions(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e, Entry::Row(_)))
            .map(|(i, _)| i)
    }

    fn row_at(&self, pos: usize) -> Option<RowIndex> {
        match self.entries.get(pos) {
            Some(Entry::Row(ix)) => Some(*ix),
            _ => None,
        }
    }

    /// Rebuilds the entry list when the search query changed since the last build.
    fn sync(&mut self, controller: &ListController) {
        if self.built_for.as_deref() == Some(self.search.query()) {
            return;
        }
        let previous = self.cursor();

        let matches = controller.matching_rows(self.search.query());
        let mut entries = Vec::with_capacity(matches.len() + controller.section_count());
        let mut last_section = None;
        for ix in matches {
            if last_section != Some(ix.section) {
                if self.options.section_gap > 0 {
                    entries.push(Entry::Gap);
                }
                last_section = Some(ix.section);
            }
            entries.push(Entry::Row(ix));
        }

        let template = controller.template();
        let gap = self.options.section_gap;
        let heights: Vec<u32> = entries
            .iter()
            .map(|e| match e {
                Entry::Gap => gap,
                Entry::Row(ix) => controller
                    .row(ix.section, ix.row)
                    .map(|r| template.height_for(r.tag() == RowTag::Profile) as u32)
                    .unwrap_or(template.row_height as u32),
            })
            .collect();

        tracing::debug!(
            query = self.search.query(),
            rows = heights.len(),
            "rebuilding listed rows"
        );

        self.entries = entries;
        self.virtualizer = make_virtualizer(heights, self.options.overscan);
        self.built_for = Some(self.search.query().to_string());
        self.viewport.to_top();

        self.cursor = previous
            .and_then(|ix| self.entries.iter().position(|e| *e == Entry::Row(ix)))
            .or_else(|| self.row_positions().next());
        self.ensure_cursor_visible();
    }

    fn sync_virtualizer(&mut self) {
        self.virtualizer.set_count(self.entries.len());
        self.virtualizer
            .set_viewport_size(self.viewport.viewport_h as u32);
        self.virtualizer.set_overscan(self.options.overscan);
        self.virtualizer.set_scroll_offset(self.viewport.y as u64);
        self.viewport.y = self.virtualizer.scroll_offset().min(u32::MAX as u64) as u32;
        self.viewport
            .set_content(self.virtualizer.get_total_size().min(u32::MAX as u64) as u32);
    }
}

fn make_virtualizer(heights: Vec<u32>, overscan: usize) -> Virtualizer {
    let count = heights.len();
    let mut opts = VirtualizerOptions::new(count, move |i| heights.get(i).copied().unwrap_or(1));
    opts.overscan = overscan;
    Virtualizer::new(opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyModifiers;
    use crate::model::ListModel;
    use crate::model::Row;
    use crate::model::Section;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code))
    }

    fn line(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    fn screen(buf: &Buffer) -> Vec<String> {
        (buf.area.y..buf.area.bottom()).map(|y| line(buf, y)).collect()
    }

    fn controller() -> ListController {
        let model = ListModel::new(vec![
            Section::new(vec![Row::profile("Jane Appleseed", "Apple ID, iCloud")]),
            Section::new(vec![
                Row::toggle("Airplane Mode", false),
                Row::informer("Wi-Fi", "Not Connected"),
                Row::informer("Bluetooth", "Off"),
            ]),
            Section::new(vec![Row::navigator("Wallpaper"), Row::navigator("Wallet")]),
        ])
        .unwrap();
        ListController::new(model)
    }

    #[test]
    fn renders_title_search_and_sections() {
        let c = controller();
        let mut view = SettingsView::new("Settings");
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default(), &c);
        let lines = screen(&buf);

        assert!(lines[1].starts_with("  Settings"));
        assert!(lines[2].contains("Search"));
        // Gap above the first section, then the 3-line profile row.
        assert!(lines[4].contains("Jane Appleseed"));
        assert!(lines[5].contains("Apple ID"));
        assert!(lines[8].contains("Airplane Mode"));
        assert!(lines[9].contains("Not Connected"));
        assert!(lines[12].contains("Wallpaper"));
    }

    #[test]
    fn cursor_skips_section_gaps() {
        let c = controller();
        let mut view = SettingsView::new("Settings");
        assert_eq!(view.listed_rows(&c).len(), 6);
        assert_eq!(view.cursor(), Some(RowIndex::new(0, 0)));

        view.handle_event(key(KeyCode::Down), &c);
        assert_eq!(view.cursor(), Some(RowIndex::new(1, 0)));
        view.handle_event(key(KeyCode::End), &c);
        assert_eq!(view.cursor(), Some(RowIndex::new(2, 1)));
        assert_eq!(view.handle_event(key(KeyCode::Down), &c), SettingsAction::None);
        view.handle_event(key(KeyCode::Char('k')), &c);
        assert_eq!(view.cursor(), Some(RowIndex::new(2, 0)));
    }

    #[test]
    fn enter_reports_the_row_under_the_cursor() {
        let c = controller();
        let mut view = SettingsView::new("Settings");
        view.set_cursor(RowIndex::new(1, 2), &c);
        assert_eq!(
            view.handle_event(key(KeyCode::Enter), &c),
            SettingsAction::Activated(RowIndex::new(1, 2))
        );
    }

    #[test]
    fn space_flips_switches_and_activates_other_rows() {
        let c = controller();
        let mut view = SettingsView::new("Settings");
        let airplane = RowIndex::new(1, 0);
        view.set_cursor(airplane, &c);

        assert_eq!(
            view.handle_event(key(KeyCode::Char(' ')), &c),
            SettingsAction::Toggled {
                index: airplane,
                on: true
            }
        );
        assert_eq!(view.switch_state(airplane, &c), Some(true));
        // The model itself is untouched.
        assert_eq!(c.render_row(1, 0).unwrap().switch_state(), Some(false));

        view.set_cursor(RowIndex::new(2, 0), &c);
        assert_eq!(
            view.handle_event(key(KeyCode::Char(' ')), &c),
            SettingsAction::Activated(RowIndex::new(2, 0))
        );
    }

    #[test]
    fn flipped_switch_is_painted() {
        let c = controller();
        let mut view = SettingsView::new("Settings");
        let template = *c.template();
        view.set_cursor(RowIndex::new(1, 0), &c);
        view.handle_event(key(KeyCode::Char(' ')), &c);

        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default(), &c);
        let lines = screen(&buf);
        let airplane = lines.iter().find(|l| l.contains("Airplane Mode")).unwrap();
        assert!(airplane.contains(template.switch_on));
    }

    #[test]
    fn search_narrows_rows_and_keeps_coordinates() {
        let c = controller();
        let mut view = SettingsView::new("Settings");

        view.handle_event(key(KeyCode::Char('/')), &c);
        assert!(view.search().is_focused());
        for ch in "wal".chars() {
            view.handle_event(key(KeyCode::Char(ch)), &c);
        }
        assert_eq!(
            view.listed_rows(&c),
            [RowIndex::new(2, 0), RowIndex::new(2, 1)]
        );
        assert_eq!(view.cursor(), Some(RowIndex::new(2, 0)));

        view.handle_event(key(KeyCode::Enter), &c);
        assert!(!view.search().is_focused());
        view.handle_event(key(KeyCode::Down), &c);
        assert_eq!(
            view.handle_event(key(KeyCode::Enter), &c),
            SettingsAction::Activated(RowIndex::new(2, 1))
        );

        // Esc on the list clears a leftover query.
        view.handle_event(key(KeyCode::Esc), &c);
        assert_eq!(view.search().query(), "");
        assert_eq!(view.listed_rows(&c).len(), 6);
        assert_eq!(view.cursor(), Some(RowIndex::new(2, 1)));
    }

    #[test]
    fn search_without_matches_lists_nothing() {
        let c = controller();
        let mut view = SettingsView::new("Settings");
        view.set_query("zzz", &c);
        assert!(view.listed_rows(&c).is_empty());
        assert_eq!(view.cursor(), None);
        assert_eq!(view.handle_event(key(KeyCode::Enter), &c), SettingsAction::None);

        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default(), &c);
    }

    #[test]
    fn click_activates_the_row_under_the_pointer() {
        let c = controller();
        let mut view = SettingsView::new("Settings");
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default(), &c);

        let wallpaper_y = screen(&buf)
            .iter()
            .position(|l| l.contains("Wallpaper"))
            .unwrap() as u16;
        let click = InputEvent::Mouse(MouseEvent {
            x: 10,
            y: wallpaper_y,
            kind: MouseEventKind::Down(MouseButton::Left),
        });
        assert_eq!(
            view.handle_event(click, &c),
            SettingsAction::Activated(RowIndex::new(2, 0))
        );
        assert_eq!(view.cursor(), Some(RowIndex::new(2, 0)));
    }

    #[test]
    fn compact_title_keeps_the_last_row_on_screen_across_redraws() {
        let c = controller();
        let mut view = SettingsView::new("Settings");
        // 11 content lines against a 10-line body.
        let area = Rect::new(0, 0, 40, 13);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default(), &c);

        view.handle_event(key(KeyCode::End), &c);
        assert_eq!(view.cursor(), Some(RowIndex::new(2, 1)));

        for _ in 0..2 {
            let mut buf = Buffer::empty(area);
            view.render(area, &mut buf, &Theme::default(), &c);
            let lines = screen(&buf);
            assert!(lines.iter().any(|l| l.contains("Wallet")));
            assert_eq!(lines[0].trim(), "Settings");
            assert_eq!(view.viewport.y, 1);
        }
    }

    #[test]
    fn scrolling_compacts_the_title_and_keeps_cursor_visible() {
        let c = controller();
        let mut view = SettingsView::new("Settings");
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default(), &c);

        view.handle_event(
            InputEvent::Key(KeyEvent::new(KeyCode::End).with_modifiers(KeyModifiers::none())),
            &c,
        );
        assert!(view.viewport.y > 0);

        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default(), &c);
        let lines = screen(&buf);
        assert_eq!(lines[0].trim(), "Settings");
        assert!(!lines[0].starts_with("  Settings"));
        assert!(lines.iter().any(|l| l.contains("Wallet")));
    }
}
