//! Row layout template.
//!
//! Every row kind is placed with the same constants: proportions are fractions of the row width,
//! insets are fixed column counts. Nothing is computed per row beyond applying the template to
//! the row's area and the widths of its trailing elements.

use ratatui::layout::Rect;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutTemplate {
    /// Icon tile width as a fraction of the row width.
    pub icon_width_ratio: f32,
    pub min_icon_width: u16,
    pub max_icon_width: u16,
    /// Profile picture width as a fraction of the row width.
    pub profile_image_ratio: f32,
    pub min_profile_image_width: u16,
    pub max_profile_image_width: u16,
    /// Columns before the icon.
    pub leading_inset: u16,
    /// Columns between the icon and the name.
    pub name_inset: u16,
    /// Columns after the last trailing element.
    pub trailing_inset: u16,
    /// Columns between trailing elements, and between the name and the first of them.
    pub trailing_gap: u16,
    /// Widest a trailing status text may get, as a fraction of the row width.
    pub status_width_ratio: f32,
    pub row_height: u16,
    pub profile_height: u16,
    pub disclosure: &'static str,
    pub switch_on: &'static str,
    pub switch_off: &'static str,
}

impl Default for LayoutTemplate {
    fn default() -> Self {
        Self {
            icon_width_ratio: 0.09,
            min_icon_width: 2,
            max_icon_width: 5,
            profile_image_ratio: 0.12,
            min_profile_image_width: 4,
            max_profile_image_width: 8,
            leading_inset: 1,
            name_inset: 1,
            trailing_inset: 1,
            trailing_gap: 1,
            status_width_ratio: 0.6,
            row_height: 1,
            profile_height: 3,
            disclosure: "›",
            switch_on: "(  ●)",
            switch_off: "(●  )",
        }
    }
}

/// Placement of a row's elements inside its area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowLayout {
    pub icon: Option<Rect>,
    pub name: Rect,
    pub detail: Option<Rect>,
    pub trailing: Option<Rect>,
    pub disclosure: Option<Rect>,
}

impl LayoutTemplate {
    pub fn icon_width(&self, row_width: u16) -> u16 {
        scaled(
            row_width,
            self.icon_width_ratio,
            self.min_icon_width,
            self.max_icon_width,
        )
    }

    pub fn profile_image_width(&self, row_width: u16) -> u16 {
        scaled(
            row_width,
            self.profile_image_ratio,
            self.min_profile_image_width,
            self.max_profile_image_width,
        )
    }

    pub fn status_width(&self, row_width: u16) -> u16 {
        (row_width as f32 * self.status_width_ratio).floor() as u16
    }

    pub fn height_for(&self, profile: bool) -> u16 {
        if profile {
            self.profile_height
        } else {
            self.row_height
        }
    }

    /// Places a row's elements.
    ///
    /// `leading_w` is the icon or picture width (0 for none); `trailing_w` is the width of the
    /// trailing element (0 for none). Trailing elements are right-anchored; the name takes the
    /// columns left between the leading and trailing parts and may be empty on narrow rows.
    /// On rows taller than one line the name sits on the first line and trailing elements on
    /// the middle one.
    pub fn place(
        &self,
        area: Rect,
        leading_w: u16,
        trailing_w: u16,
        disclosure: bool,
        detail: bool,
    ) -> RowLayout {
        let top = area.y;
        let mid = area.y + area.height.saturating_sub(1) / 2;
        let left = area.x.saturating_add(self.leading_inset).min(area.right());

        let icon = (leading_w > 0).then(|| {
            let w = leading_w.min(area.right() - left);
            Rect::new(left, top, w, area.height)
        });
        let name_x = match icon {
            Some(icon) => icon.right().saturating_add(self.name_inset).min(area.right()),
            None => left,
        };

        let mut right = area.right().saturating_sub(self.trailing_inset).max(name_x);

        let disclosure = if disclosure {
            let w = crate::render::display_width(self.disclosure) as u16;
            let x = right.saturating_sub(w).max(name_x);
            let rect = Rect::new(x, mid, right - x, 1);
            right = x.saturating_sub(self.trailing_gap).max(name_x);
            Some(rect)
        } else {
            None
        };

        let trailing = (trailing_w > 0).then(|| {
            let x = right.saturating_sub(trailing_w).max(name_x);
            let rect = Rect::new(x, mid, right - x, 1);
            right = x.saturating_sub(self.trailing_gap).max(name_x);
            rect
        });

        let name = Rect::new(name_x, top, right - name_x, area.height.min(1));
        let detail = (detail && area.height > 1).then(|| Rect::new(name_x, top + 1, name.width, 1));

        RowLayout {
            icon,
            name,
            detail,
            trailing,
            disclosure,
        }
    }
}

fn scaled(total: u16, ratio: f32, min: u16, max: u16) -> u16 {
    let w = (total as f32 * ratio).round() as u16;
    w.clamp(min, max.max(min))
}
