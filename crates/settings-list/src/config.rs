//! Screen configuration: the static row data of a settings screen as a JSON document.
//!
//! ```json
//! {
//!   "title": "Settings",
//!   "icons": { "wifi": { "glyph": "≋", "fg": "white", "bg": "#007aff" } },
//!   "sections": [
//!     { "rows": [
//!       { "kind": "toggle", "name": "Airplane Mode", "on": false },
//!       { "kind": "informer", "name": "Wi-Fi", "icon": "wifi", "status": "Not Connected" }
//!     ] }
//!   ]
//! }
//! ```

use ratatui::style::Color;
use serde::Deserialize;
use serde::Serialize;
use settings_list_core::error::ListError;
use settings_list_core::icon::IconHandle;
use settings_list_core::icon::IconProvider;
use settings_list_core::icon::IconTable;
use settings_list_core::model::Accessory;
use settings_list_core::model::Activation;
use settings_list_core::model::ListModel;
use settings_list_core::model::Row;
use settings_list_core::model::RowVariant;
use settings_list_core::model::Section;
use settings_list_core::search::SearchBarOptions;
use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

const BUILTIN: &str = include_str!("../assets/settings.json");

/// Errors produced while loading a screen configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read screen configuration {path}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON or does not match the schema.
    #[error("invalid screen configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// A badged row names both a status text and a badge.
    #[error("row {row} ({name}) in section {section} has both a status and a badge")]
    AmbiguousAccessory {
        /// Section index of the offending row.
        section: usize,
        /// Row index inside the section.
        row: usize,
        /// Row name as written in the document.
        name: String,
    },
    /// An icon color is not a color name or `#rrggbb` value.
    #[error("icon {icon} has invalid color {value:?}")]
    InvalidColor {
        /// Icon id.
        icon: String,
        /// Rejected color string.
        value: String,
    },
    /// The rows do not form a valid model.
    #[error(transparent)]
    Model(#[from] ListError),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub title: String,
    #[serde(default = "default_placeholder")]
    pub search_placeholder: String,
    #[serde(default = "default_cancel_label")]
    pub cancel_label: String,
    #[serde(default)]
    pub icons: BTreeMap<String, IconSpec>,
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSpec {
    pub glyph: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    #[serde(default)]
    pub rows: Vec<RowSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Label handed to the activation callback factory; defaults to the row name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(flatten)]
    pub kind: RowKindSpec,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowKindSpec {
    Profile {
        #[serde(default)]
        detail: String,
    },
    Toggle {
        #[serde(default)]
        on: bool,
    },
    Informer {
        #[serde(default)]
        status: String,
    },
    Navigator,
    Badged {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        badge: Option<String>,
    },
}

impl RowSpec {
    pub fn action(&self) -> &str {
        self.action.as_deref().unwrap_or(&self.name)
    }
}

impl ScreenConfig {
    /// The bundled settings screen.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        tracing::debug!(
            title = %config.title,
            sections = config.sections.len(),
            icons = config.icons.len(),
            "parsed screen configuration"
        );
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading screen configuration");
        Self::from_json(&input)
    }

    pub fn search_options(&self) -> SearchBarOptions {
        SearchBarOptions {
            placeholder: self.search_placeholder.clone(),
            cancel_label: self.cancel_label.clone(),
            ..SearchBarOptions::default()
        }
    }

    /// Resolves icon colors into a lookup table.
    pub fn icon_table(&self) -> Result<IconTable, ConfigError> {
        let mut table = IconTable::new();
        for (id, spec) in &self.icons {
            let mut handle = IconHandle::new(spec.glyph.clone());
            if let Some(fg) = &spec.fg {
                handle = handle.with_fg(parse_color(id, fg)?);
            }
            if let Some(bg) = &spec.bg {
                handle = handle.with_bg(parse_color(id, bg)?);
            }
            table.insert(id.clone(), handle);
        }
        Ok(table)
    }

    /// Builds the list model, asking `on_activate` for each row's callback by action label.
    ///
    /// Rows naming an icon id missing from `icons` get a blank icon.
    pub fn into_model<F>(self, on_activate: F) -> Result<ListModel, ConfigError>
    where
        F: Fn(&str) -> Activation,
    {
        let icons = self.icon_table()?;
        let mut sections = Vec::with_capacity(self.sections.len());
        for (s, section) in self.sections.iter().enumerate() {
            let mut rows = Vec::with_capacity(section.rows.len());
            for (r, spec) in section.rows.iter().enumerate() {
                let variant = variant_for(s, r, spec)?;
                let icon = spec.icon.as_deref().map(|id| icons.resolve(id));
                rows.push(
                    Row::new(spec.name.clone(), variant)
                        .with_optional_icon(icon)
                        .with_activation(on_activate(spec.action())),
                );
            }
            sections.push(Section::new(rows));
        }
        Ok(ListModel::new(sections)?)
    }
}

fn variant_for(section: usize, row: usize, spec: &RowSpec) -> Result<RowVariant, ConfigError> {
    Ok(match &spec.kind {
        RowKindSpec::Profile { detail } => RowVariant::Profile {
            detail: detail.clone(),
        },
        RowKindSpec::Toggle { on } => RowVariant::Toggle { on: *on },
        RowKindSpec::Informer { status } => RowVariant::Informer {
            status: status.clone(),
        },
        RowKindSpec::Navigator => RowVariant::Navigator,
        RowKindSpec::Badged { status, badge } => RowVariant::Badged(match (status, badge) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::AmbiguousAccessory {
                    section,
                    row,
                    name: spec.name.clone(),
                });
            }
            (Some(status), None) => Accessory::Status(status.clone()),
            (None, Some(badge)) => Accessory::Count(badge.clone()),
            (None, None) => Accessory::None,
        }),
    })
}

fn parse_color(icon: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value).map_err(|_| ConfigError::InvalidColor {
        icon: icon.to_string(),
        value: value.to_string(),
    })
}

fn default_placeholder() -> String {
    SearchBarOptions::default().placeholder
}

fn default_cancel_label() -> String {
    SearchBarOptions::default().cancel_label
}

#[cfg(test)]
mod tests {
    use super::*;
    use settings_list_core::model::RowTag;
    use std::sync::Arc;
    use std::sync::Mutex;

    fn no_op(_: &str) -> Activation {
        Arc::new(|| {})
    }

    #[test]
    fn builtin_screen_has_seven_sections_with_profile_first() {
        let config = ScreenConfig::builtin().unwrap();
        assert_eq!(config.title, "Settings");
        let model = config.into_model(no_op).unwrap();
        assert_eq!(model.sections().len(), 7);
        assert_eq!(model.row(0, 0).unwrap().tag(), RowTag::Profile);
        assert_eq!(model.row(1, 0).unwrap().name(), "Airplane Mode");
        assert_eq!(
            model.row(1, 1).unwrap().variant(),
            &RowVariant::Informer {
                status: "Not Connected".to_string()
            }
        );
        assert_eq!(model.section(6).unwrap().len(), 7);
    }

    #[test]
    fn builtin_icons_resolve_with_colors() {
        let config = ScreenConfig::builtin().unwrap();
        let model = config.into_model(no_op).unwrap();
        let airplane = model.row(1, 0).unwrap().icon().unwrap();
        assert_eq!(airplane.glyph, "✈");
        assert!(airplane.bg.is_some());
    }

    #[test]
    fn rejects_badged_row_with_status_and_badge() {
        let json = r#"{
            "title": "T",
            "sections": [
                { "rows": [ { "kind": "navigator", "name": "ok" } ] },
                { "rows": [ { "kind": "badged", "name": "General", "status": "x", "badge": "1" } ] }
            ]
        }"#;
        let err = ScreenConfig::from_json(json)
            .unwrap()
            .into_model(no_op)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::AmbiguousAccessory {
                section: 1,
                row: 0,
                ..
            }
        ));
    }

    #[test]
    fn badged_accessories_map_to_sub_variants() {
        let json = r#"{
            "title": "T",
            "sections": [ { "rows": [
                { "kind": "badged", "name": "a", "status": "On" },
                { "kind": "badged", "name": "b", "badge": "3" },
                { "kind": "badged", "name": "c" }
            ] } ]
        }"#;
        let model = ScreenConfig::from_json(json)
            .unwrap()
            .into_model(no_op)
            .unwrap();
        let accessories: Vec<_> = model.sections()[0]
            .rows()
            .iter()
            .map(|r| r.variant().clone())
            .collect();
        assert_eq!(
            accessories,
            [
                RowVariant::Badged(Accessory::Status("On".to_string())),
                RowVariant::Badged(Accessory::Count("3".to_string())),
                RowVariant::Badged(Accessory::None),
            ]
        );
    }

    #[test]
    fn defaults_fill_search_labels() {
        let config = ScreenConfig::from_json(r#"{ "title": "T" }"#).unwrap();
        assert_eq!(config.search_placeholder, "Search");
        assert_eq!(config.cancel_label, "Cancel");
        assert!(config.sections.is_empty());
    }

    #[test]
    fn rejects_unknown_row_kind_and_bad_colors() {
        let json = r#"{ "title": "T", "sections": [ { "rows": [ { "kind": "slider", "name": "x" } ] } ] }"#;
        assert!(matches!(
            ScreenConfig::from_json(json),
            Err(ConfigError::Parse(_))
        ));

        let json = r#"{ "title": "T", "icons": { "x": { "glyph": "x", "bg": "not-a-color" } } }"#;
        let err = ScreenConfig::from_json(json)
            .unwrap()
            .into_model(no_op)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { .. }));
    }

    #[test]
    fn empty_names_surface_as_model_errors() {
        let json = r#"{ "title": "T", "sections": [ { "rows": [ { "kind": "navigator", "name": "" } ] } ] }"#;
        let err = ScreenConfig::from_json(json)
            .unwrap()
            .into_model(no_op)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Model(ListError::EmptyName { section: 0, row: 0 })
        ));
    }

    #[test]
    fn callbacks_are_built_from_action_labels() {
        let json = r#"{ "title": "T", "sections": [ { "rows": [
            { "kind": "navigator", "name": "Wallpaper" },
            { "kind": "navigator", "name": "General", "action": "open-general" }
        ] } ] }"#;
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = fired.clone();
        let model = ScreenConfig::from_json(json)
            .unwrap()
            .into_model(move |label: &str| -> Activation {
                let sink = sink.clone();
                let label = label.to_string();
                Arc::new(move || sink.lock().unwrap().push(label.clone()))
            })
            .unwrap();

        model.row(0, 1).unwrap().activate();
        model.row(0, 0).unwrap().activate();
        assert_eq!(*fired.lock().unwrap(), ["open-general", "Wallpaper"]);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = ScreenConfig::load("/nonexistent/settings.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/settings.json"));
    }
}
