//! Row, section and list model.
//!
//! The model is built once and never mutated afterwards. Row order inside a section and section
//! order inside the list are kept exactly as constructed.

use crate::error::ListError;
use crate::error::Result;
use crate::icon::IconHandle;
use std::fmt;
use std::sync::Arc;

/// Callback bound to a row, invoked when the row is activated.
pub type Activation = Arc<dyn Fn() + Send + Sync>;

/// Discriminant of [`RowVariant`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowTag {
    Profile,
    Toggle,
    Informer,
    Navigator,
    Badged,
}

impl RowTag {
    pub const ALL: [RowTag; 5] = [
        RowTag::Profile,
        RowTag::Toggle,
        RowTag::Informer,
        RowTag::Navigator,
        RowTag::Badged,
    ];
}

/// Trailing accessory of a [`RowVariant::Badged`] row. At most one of status text or badge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Accessory {
    #[default]
    None,
    /// Right-aligned, muted status text.
    Status(String),
    /// Filled pill with a short count or label.
    Count(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowVariant {
    /// Account summary: large name, detail line, round picture.
    Profile { detail: String },
    /// Row with a trailing on/off switch.
    Toggle { on: bool },
    /// Row with a trailing status string (e.g. connectivity state).
    Informer { status: String },
    /// Plain row with a disclosure indicator.
    Navigator,
    Badged(Accessory),
}

impl RowVariant {
    pub fn tag(&self) -> RowTag {
        match self {
            RowVariant::Profile { .. } => RowTag::Profile,
            RowVariant::Toggle { .. } => RowTag::Toggle,
            RowVariant::Informer { .. } => RowTag::Informer,
            RowVariant::Navigator => RowTag::Navigator,
            RowVariant::Badged(_) => RowTag::Badged,
        }
    }
}

#[derive(Clone)]
pub struct Row {
    name: String,
    icon: Option<IconHandle>,
    variant: RowVariant,
    on_activate: Activation,
}

impl Row {
    pub fn new(name: impl Into<String>, variant: RowVariant) -> Self {
        Self {
            name: name.into(),
            icon: None,
            variant,
            on_activate: Arc::new(|| {}),
        }
    }

    pub fn profile(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(
            name,
            RowVariant::Profile {
                detail: detail.into(),
            },
        )
    }

    pub fn toggle(name: impl Into<String>, on: bool) -> Self {
        Self::new(name, RowVariant::Toggle { on })
    }

    pub fn informer(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self::new(
            name,
            RowVariant::Informer {
                status: status.into(),
            },
        )
    }

    pub fn navigator(name: impl Into<String>) -> Self {
        Self::new(name, RowVariant::Navigator)
    }

    pub fn badged(name: impl Into<String>, accessory: Accessory) -> Self {
        Self::new(name, RowVariant::Badged(accessory))
    }

    pub fn with_icon(mut self, icon: IconHandle) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_optional_icon(mut self, icon: Option<IconHandle>) -> Self {
        self.icon = icon;
        self
    }

    pub fn on_activate(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_activate = Arc::new(f);
        self
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.on_activate = activation;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> Option<&IconHandle> {
        self.icon.as_ref()
    }

    pub fn variant(&self) -> &RowVariant {
        &self.variant
    }

    pub fn tag(&self) -> RowTag {
        self.variant.tag()
    }

    /// Runs the bound callback on the calling thread. Panics inside the callback are not caught.
    pub fn activate(&self) {
        (self.on_activate)();
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("name", &self.name)
            .field("icon", &self.icon)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Section {
    rows: Vec<Row>,
}

impl Section {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }
}

impl FromIterator<Row> for Section {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// `(section, row)` coordinate into a [`ListModel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowIndex {
    pub section: usize,
    pub row: usize,
}

impl RowIndex {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.section, self.row)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ListModel {
    sections: Vec<Section>,
}

impl ListModel {
    /// Builds the model, rejecting rows with an empty name.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyName`] for the first row whose name is empty.
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        for (s, section) in sections.iter().enumerate() {
            if let Some(r) = section.rows.iter().position(|row| row.name.is_empty()) {
                return Err(ListError::EmptyName { section: s, row: r });
            }
        }
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] when `section` does not exist.
    pub fn section(&self, section: usize) -> Result<&Section> {
        self.sections
            .get(section)
            .ok_or(ListError::IndexOutOfRange { section, row: None })
    }

    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] when either coordinate is outside the model.
    pub fn row(&self, section: usize, row: usize) -> Result<&Row> {
        self.section(section)?
            .get(row)
            .ok_or(ListError::IndexOutOfRange {
                section,
                row: Some(row),
            })
    }

    /// Every coordinate in model order.
    pub fn indices(&self) -> impl Iterator<Item = RowIndex> + '_ {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(s, section)| (0..section.len()).map(move |r| RowIndex::new(s, r)))
    }

    pub fn row_total(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected_with_its_coordinate() {
        let err = ListModel::new(vec![
            Section::new(vec![Row::navigator("General")]),
            Section::new(vec![Row::navigator("Privacy"), Row::navigator("")]),
        ])
        .unwrap_err();
        assert_eq!(err, ListError::EmptyName { section: 1, row: 1 });
    }

    #[test]
    fn indices_follow_construction_order() {
        let model = ListModel::new(vec![
            Section::new(vec![Row::navigator("a"), Row::navigator("b")]),
            Section::default(),
            Section::new(vec![Row::navigator("c")]),
        ])
        .unwrap();
        let names: Vec<&str> = model
            .indices()
            .map(|ix| model.row(ix.section, ix.row).unwrap().name())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(model.row_total(), 3);
    }

    #[test]
    fn tag_matches_variant() {
        assert_eq!(Row::toggle("Airplane Mode", false).tag(), RowTag::Toggle);
        assert_eq!(
            Row::badged("Screen Time", Accessory::Count("2".into())).tag(),
            RowTag::Badged
        );
    }
}
