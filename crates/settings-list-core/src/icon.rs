//! Icon handles and the provider seam used to resolve icon identifiers.
//!
//! A terminal has no images, so an icon is a short glyph painted on a colored tile. Rows hold
//! resolved [`IconHandle`]s; configuration code resolves identifiers through an
//! [`IconProvider`] once, when the model is built.

use ratatui::style::Color;
use ratatui::style::Style;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconHandle {
    pub glyph: String,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl IconHandle {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            fg: None,
            bg: None,
        }
    }

    /// Placeholder for an identifier that did not resolve.
    pub fn blank() -> Self {
        Self::new(" ")
    }

    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    pub fn is_blank(&self) -> bool {
        self.glyph.trim().is_empty() && self.bg.is_none()
    }

    /// Style of the icon tile, layered over `base`.
    pub fn style(&self, base: Style) -> Style {
        let mut style = base;
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        style
    }
}

/// Resolves icon identifiers. Resolution never fails: unknown ids map to
/// [`IconHandle::blank`].
pub trait IconProvider {
    fn resolve(&self, id: &str) -> IconHandle;
}

/// Provider that knows no icons at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIcons;

impl IconProvider for NoIcons {
    fn resolve(&self, _id: &str) -> IconHandle {
        IconHandle::blank()
    }
}

#[derive(Clone, Debug, Default)]
pub struct IconTable {
    icons: BTreeMap<String, IconHandle>,
}

impl IconTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, icon: IconHandle) {
        self.icons.insert(id.into(), icon);
    }

    pub fn with(mut self, id: impl Into<String>, icon: IconHandle) -> Self {
        self.insert(id, icon);
        self
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl IconProvider for IconTable {
    fn resolve(&self, id: &str) -> IconHandle {
        self.icons.get(id).cloned().unwrap_or_else(IconHandle::blank)
    }
}

impl<P: IconProvider + ?Sized> IconProvider for &P {
    fn resolve(&self, id: &str) -> IconHandle {
        (**self).resolve(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_resolve_to_blank() {
        let table = IconTable::new().with("wifi", IconHandle::new("W").with_bg(Color::Blue));
        assert_eq!(table.resolve("wifi").glyph, "W");
        assert!(table.resolve("bluetooth").is_blank());
        assert!(NoIcons.resolve("wifi").is_blank());
    }

    #[test]
    fn style_layers_colors_over_base() {
        let icon = IconHandle::new("A").with_fg(Color::White).with_bg(Color::Red);
        let style = icon.style(Style::default());
        assert_eq!(style.fg, Some(Color::White));
        assert_eq!(style.bg, Some(Color::Red));
    }
}
