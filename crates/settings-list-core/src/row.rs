//! Row renderers.
//!
//! There is one renderer per [`RowTag`], but a single implementation: renderers differ only in
//! which trailing element they bind ([`TrailingKind`]) and whether they show a disclosure
//! indicator. A renderer turns a [`Row`] into a [`RenderedRow`], which is plain data that can be
//! inspected or painted into a [`Buffer`] with a [`LayoutTemplate`].

use crate::error::ListError;
use crate::error::Result;
use crate::icon::IconHandle;
use crate::layout::LayoutTemplate;
use crate::model::Accessory;
use crate::model::Row;
use crate::model::RowTag;
use crate::model::RowVariant;
use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// What a renderer places at the trailing edge of its rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailingKind {
    Nothing,
    Switch,
    Status,
    StatusOrBadge,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconShape {
    #[default]
    Tile,
    Round,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Trailing {
    #[default]
    None,
    Switch {
        on: bool,
    },
    Status(String),
    Badge(String),
}

/// A row bound to its template, ready to paint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedRow {
    pub tag: RowTag,
    pub name: String,
    pub detail: Option<String>,
    /// Blank when the row has no icon; the slot is still reserved.
    pub icon: IconHandle,
    pub icon_shape: IconShape,
    pub trailing: Trailing,
    pub disclosure: bool,
    pub height: u16,
}

impl RenderedRow {
    pub fn switch_state(&self) -> Option<bool> {
        match self.trailing {
            Trailing::Switch { on } => Some(on),
            _ => None,
        }
    }

    /// Rebinds the switch to `on`. No-op for rows without a switch.
    pub fn set_switch(&mut self, on: bool) {
        if let Trailing::Switch { on: current } = &mut self.trailing {
            *current = on;
        }
    }

    pub fn status(&self) -> Option<&str> {
        match &self.trailing {
            Trailing::Status(s) => Some(s),
            _ => None,
        }
    }

    pub fn badge(&self) -> Option<&str> {
        match &self.trailing {
            Trailing::Badge(s) => Some(s),
            _ => None,
        }
    }

    /// Paints the row into `area`. Only cells covered by row elements are touched, so callers
    /// can set a row background (e.g. a cursor highlight) beforehand.
    pub fn paint(&self, area: Rect, buf: &mut Buffer, theme: &Theme, template: &LayoutTemplate) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let leading_w = match self.icon_shape {
            IconShape::Tile => template.icon_width(area.width),
            IconShape::Round => template.profile_image_width(area.width),
        };
        let trailing_w = match &self.trailing {
            Trailing::None => 0,
            Trailing::Switch { on } => {
                let glyph = if *on {
                    template.switch_on
                } else {
                    template.switch_off
                };
                render::display_width(glyph) as u16
            }
            Trailing::Status(s) => columns(s).min(template.status_width(area.width)),
            Trailing::Badge(s) => columns(s)
                .saturating_add(2)
                .min(template.status_width(area.width)),
        };

        let layout = template.place(
            area,
            leading_w,
            trailing_w,
            self.disclosure,
            self.detail.is_some(),
        );

        if let Some(rect) = layout.icon {
            paint_icon(rect, buf, &self.icon, self.icon_shape);
        }

        let name_style = if self.icon_shape == IconShape::Round {
            theme.title
        } else {
            theme.text_primary
        };
        render::render_str_clipped(
            layout.name.x,
            layout.name.y,
            layout.name.width,
            buf,
            &self.name,
            name_style,
        );

        if let (Some(rect), Some(detail)) = (layout.detail, &self.detail) {
            render::render_str_clipped(rect.x, rect.y, rect.width, buf, detail, theme.text_muted);
        }

        if let Some(rect) = layout.trailing {
            match &self.trailing {
                Trailing::None => {}
                Trailing::Switch { on } => {
                    let (glyph, style) = if *on {
                        (template.switch_on, theme.switch_on)
                    } else {
                        (template.switch_off, theme.switch_off)
                    };
                    render::render_str_right(rect, buf, glyph, style);
                }
                Trailing::Status(s) => {
                    render::render_str_right(rect, buf, s, theme.text_muted);
                }
                Trailing::Badge(s) => paint_badge(rect, buf, s, theme.badge),
            }
        }

        if let Some(rect) = layout.disclosure {
            render::render_str_right(rect, buf, template.disclosure, theme.disclosure);
        }
    }
}

fn paint_icon(rect: Rect, buf: &mut Buffer, icon: &IconHandle, shape: IconShape) {
    let style = icon.style(Style::default());
    let mid = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1);

    if shape == IconShape::Round && rect.height >= 3 && rect.width >= 4 {
        let inner = rect.width - 2;
        let top = format!("╭{}╮", "─".repeat(inner as usize));
        let bottom = format!("╰{}╯", "─".repeat(inner as usize));
        let frame = Style::default().patch(style).bg(ratatui::style::Color::Reset);
        render::render_str_clipped(rect.x, rect.y, rect.width, buf, &top, frame);
        render::render_str_clipped(rect.x, rect.bottom() - 1, rect.width, buf, &bottom, frame);
        for y in rect.y + 1..rect.bottom() - 1 {
            render::render_str_clipped(rect.x, y, 1, buf, "│", frame);
            render::render_str_clipped(rect.right() - 1, y, 1, buf, "│", frame);
        }
        let face = Rect::new(rect.x + 1, mid.y, inner, 1);
        buf.set_style(face, style);
        render::render_str_centered(face, buf, &icon.glyph, style);
        return;
    }

    buf.set_style(rect, style);
    render::render_str_centered(mid, buf, &icon.glyph, style);
}

// The pill's caps are derived from the area it is painted into, never from a width cached
// before layout.
fn paint_badge(rect: Rect, buf: &mut Buffer, text: &str, style: Style) {
    let label = if rect.width >= columns(text).saturating_add(2) {
        format!(" {text} ")
    } else {
        text.to_string()
    };
    let placed = render::render_str_right(rect, buf, &label, style);
    buf.set_style(placed, style);
}

fn columns(s: &str) -> u16 {
    u16::try_from(render::display_width(s)).unwrap_or(u16::MAX)
}

/// Renderer for one row kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowRenderer {
    tag: RowTag,
    trailing: TrailingKind,
    disclosure: bool,
    height: u16,
}

impl RowRenderer {
    pub fn for_tag(tag: RowTag, template: &LayoutTemplate) -> Self {
        let (trailing, disclosure) = match tag {
            RowTag::Profile => (TrailingKind::Nothing, true),
            RowTag::Toggle => (TrailingKind::Switch, false),
            RowTag::Informer => (TrailingKind::Status, true),
            RowTag::Navigator => (TrailingKind::Nothing, true),
            RowTag::Badged => (TrailingKind::StatusOrBadge, true),
        };
        Self {
            tag,
            trailing,
            disclosure,
            height: template.height_for(tag == RowTag::Profile),
        }
    }

    pub fn tag(&self) -> RowTag {
        self.tag
    }

    /// Binds `row` into this renderer's template.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::ConfigurationMismatch`] when `row` is not of this renderer's kind.
    pub fn render(&self, row: &Row) -> Result<RenderedRow> {
        let mismatch = || {
            tracing::error!(
                expected = ?self.tag,
                found = ?row.tag(),
                name = row.name(),
                "row handed to the wrong renderer"
            );
            ListError::ConfigurationMismatch {
                expected: self.tag,
                found: row.tag(),
            }
        };
        if row.tag() != self.tag {
            return Err(mismatch());
        }

        let trailing = match (self.trailing, row.variant()) {
            (TrailingKind::Nothing, _) => Trailing::None,
            (TrailingKind::Switch, RowVariant::Toggle { on }) => Trailing::Switch { on: *on },
            (TrailingKind::Status, RowVariant::Informer { status }) => non_empty(status)
                .map(Trailing::Status)
                .unwrap_or_default(),
            (TrailingKind::StatusOrBadge, RowVariant::Badged(accessory)) => match accessory {
                Accessory::None => Trailing::None,
                Accessory::Status(s) => non_empty(s).map(Trailing::Status).unwrap_or_default(),
                Accessory::Count(s) => non_empty(s).map(Trailing::Badge).unwrap_or_default(),
            },
            _ => return Err(mismatch()),
        };

        let detail = match row.variant() {
            RowVariant::Profile { detail } => non_empty(detail),
            _ => None,
        };

        Ok(RenderedRow {
            tag: self.tag,
            name: row.name().to_string(),
            detail,
            icon: row.icon().cloned().unwrap_or_else(IconHandle::blank),
            icon_shape: if self.tag == RowTag::Profile {
                IconShape::Round
            } else {
                IconShape::Tile
            },
            trailing,
            disclosure: self.disclosure,
            height: self.height,
        })
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// One renderer per row kind, looked up by tag.
#[derive(Clone, Debug)]
pub struct Renderers {
    template: LayoutTemplate,
    by_tag: [RowRenderer; 5],
}

impl Renderers {
    pub fn new(template: LayoutTemplate) -> Self {
        let by_tag = RowTag::ALL.map(|tag| RowRenderer::for_tag(tag, &template));
        Self { template, by_tag }
    }

    pub fn template(&self) -> &LayoutTemplate {
        &self.template
    }

    pub fn get(&self, tag: RowTag) -> &RowRenderer {
        &self.by_tag[slot(tag)]
    }

    pub fn render(&self, row: &Row) -> Result<RenderedRow> {
        self.get(row.tag()).render(row)
    }
}

impl Default for Renderers {
    fn default() -> Self {
        Self::new(LayoutTemplate::default())
    }
}

fn slot(tag: RowTag) -> usize {
    match tag {
        RowTag::Profile => 0,
        RowTag::Toggle => 1,
        RowTag::Informer => 2,
        RowTag::Navigator => 3,
        RowTag::Badged => 4,
    }
}
