use crate::error::Result;
use crate::layout::LayoutTemplate;
use crate::model::ListModel;
use crate::model::Row;
use crate::model::RowIndex;
use crate::row::RenderedRow;
use crate::row::Renderers;

/// Read-only projection over a [`ListModel`]: counts, per-row rendering and activation.
///
/// The controller holds no per-call state; every answer is derived from the model it was built
/// with, so repeated calls return the same results.
#[derive(Clone, Debug)]
pub struct ListController {
    model: ListModel,
    renderers: Renderers,
}

impl ListController {
    pub fn new(model: ListModel) -> Self {
        Self::with_template(model, LayoutTemplate::default())
    }

    pub fn with_template(model: ListModel, template: LayoutTemplate) -> Self {
        Self {
            model,
            renderers: Renderers::new(template),
        }
    }

    pub fn model(&self) -> &ListModel {
        &self.model
    }

    pub fn template(&self) -> &LayoutTemplate {
        self.renderers.template()
    }

    pub fn section_count(&self) -> usize {
        self.model.sections().len()
    }

    /// # Errors
    ///
    /// Returns [`crate::error::ListError::IndexOutOfRange`] when `section` does not exist.
    pub fn row_count(&self, section: usize) -> Result<usize> {
        Ok(self.model.section(section)?.len())
    }

    /// # Errors
    ///
    /// Returns [`crate::error::ListError::IndexOutOfRange`] on invalid coordinates.
    pub fn row(&self, section: usize, row: usize) -> Result<&Row> {
        self.model.row(section, row)
    }

    /// Renders the row at `(section, row)` with the renderer registered for its kind.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ListError::IndexOutOfRange`] on invalid coordinates.
    pub fn render_row(&self, section: usize, row: usize) -> Result<RenderedRow> {
        let target = self.model.row(section, row)?;
        self.renderers.render(target)
    }

    /// Invokes the callback bound to `(section, row)` once, on the calling thread.
    ///
    /// A panic raised by the callback unwinds through this call.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ListError::IndexOutOfRange`] on invalid coordinates.
    pub fn activate_row(&self, section: usize, row: usize) -> Result<()> {
        let target = self.model.row(section, row)?;
        tracing::debug!(section, row, name = target.name(), "activating row");
        target.activate();
        Ok(())
    }

    /// Coordinates of rows whose name contains `query`, ignoring case, in model order.
    /// An empty or blank query matches every row.
    pub fn matching_rows(&self, query: &str) -> Vec<RowIndex> {
        let needle = query.trim().to_lowercase();
        self.model
            .indices()
            .filter(|ix| {
                needle.is_empty()
                    || self
                        .model
                        .row(ix.section, ix.row)
                        .is_ok_and(|row| row.name().to_lowercase().contains(&needle))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListError;
    use crate::model::Section;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    fn wallpaper_and_airplane() -> ListController {
        let model = ListModel::new(vec![Section::new(vec![
            Row::navigator("Wallpaper"),
            Row::toggle("Airplane Mode", false),
        ])])
        .unwrap();
        ListController::new(model)
    }

    #[test]
    fn counts_follow_the_model() {
        let c = wallpaper_and_airplane();
        assert_eq!(c.section_count(), 1);
        assert_eq!(c.row_count(0), Ok(2));
        assert_eq!(c.row_count(0), Ok(2));
        assert_eq!(
            c.row_count(1),
            Err(ListError::IndexOutOfRange {
                section: 1,
                row: None
            })
        );
    }

    #[test]
    fn render_dispatches_by_kind() {
        let c = wallpaper_and_airplane();

        let wallpaper = c.render_row(0, 0).unwrap();
        assert_eq!(wallpaper.name, "Wallpaper");
        assert!(wallpaper.disclosure);
        assert_eq!(wallpaper.switch_state(), None);

        let airplane = c.render_row(0, 1).unwrap();
        assert_eq!(airplane.name, "Airplane Mode");
        assert_eq!(airplane.switch_state(), Some(false));
    }

    #[test]
    fn render_out_of_range_row_fails() {
        let c = wallpaper_and_airplane();
        assert_eq!(
            c.render_row(0, 5),
            Err(ListError::IndexOutOfRange {
                section: 0,
                row: Some(5)
            })
        );
    }

    #[test]
    fn activation_runs_only_the_addressed_callback() {
        let hits: Vec<Arc<AtomicUsize>> = (0..3).map(|_| Arc::new(AtomicUsize::new(0))).collect();
        let rows = hits
            .iter()
            .enumerate()
            .map(|(i, hit)| {
                let hit = hit.clone();
                Row::navigator(format!("row {i}")).on_activate(move || {
                    hit.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect();
        let c = ListController::new(ListModel::new(vec![Section::new(rows)]).unwrap());

        c.activate_row(0, 1).unwrap();
        let counts: Vec<usize> = hits.iter().map(|h| h.load(Ordering::SeqCst)).collect();
        assert_eq!(counts, [0, 1, 0]);

        assert!(c.activate_row(0, 3).is_err());
        let counts: Vec<usize> = hits.iter().map(|h| h.load(Ordering::SeqCst)).collect();
        assert_eq!(counts, [0, 1, 0]);
    }

    #[test]
    #[should_panic(expected = "callback failed")]
    fn activation_does_not_swallow_panics() {
        let model = ListModel::new(vec![Section::new(vec![
            Row::navigator("Broken").on_activate(|| panic!("callback failed")),
        ])])
        .unwrap();
        let _ = ListController::new(model).activate_row(0, 0);
    }

    #[test]
    fn search_matches_case_insensitively_in_order() {
        let model = ListModel::new(vec![
            Section::new(vec![Row::informer("Wi-Fi", "Off"), Row::navigator("VPN")]),
            Section::new(vec![Row::navigator("Wallpaper"), Row::navigator("Wallet")]),
        ])
        .unwrap();
        let c = ListController::new(model);

        assert_eq!(
            c.matching_rows("WAL"),
            [RowIndex::new(1, 0), RowIndex::new(1, 1)]
        );
        assert_eq!(c.matching_rows("  ").len(), 4);
        assert!(c.matching_rows("bluetooth").is_empty());
    }
}
