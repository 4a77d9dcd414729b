use crate::color::TypePalette;
use crate::data::filter::{filtered_indices, FilterSpec};
use crate::data::model::{CompoundDataset, Property};
use crate::data::page::{total_pages, PAGE_SIZE};
use crate::data::predict::Design;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which central tab is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Scatter,
    Distribution,
    Comparison,
    Table,
}

/// The full UI state, independent of rendering. Owns the dataset, the filter
/// specification, and every piece of per-session state; the `data` functions
/// themselves stay pure.
pub struct AppState {
    /// Loaded database (None until user opens a file, and after a failed load).
    pub dataset: Option<CompoundDataset>,

    /// Current inclusion predicates. Replaced wholesale via [`Self::apply_filter`].
    pub spec: FilterSpec,

    /// Indices of compounds passing the current spec (cached filtered view).
    pub visible: Vec<usize>,

    /// 1-based table page, clamped whenever the view shrinks.
    pub page: usize,

    /// Index (into the dataset) of the compound open in the detail window.
    pub selected: Option<usize>,

    /// Scatter-plot axis choices.
    pub x_axis: Property,
    pub y_axis: Property,

    /// Active central tab.
    pub tab: Tab,

    /// Per-class chart colours.
    pub palette: TypePalette,

    /// Playground design inputs and whether its window is open.
    pub design: Design,
    pub playground_open: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            spec: FilterSpec::default(),
            visible: Vec::new(),
            page: 1,
            selected: None,
            x_axis: Property::Voltage,
            y_axis: Property::EnergyGravimetric,
            tab: Tab::Scatter,
            palette: TypePalette::default(),
            design: Design::default(),
            playground_open: false,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded database: reset the filter spec to defaults and
    /// make the whole store visible.
    pub fn set_dataset(&mut self, dataset: CompoundDataset) {
        self.spec = FilterSpec::default();
        self.visible = (0..dataset.len()).collect();
        self.page = 1;
        self.selected = None;
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Record a failed load: explicit empty-with-error state, never a
    /// partially populated store.
    pub fn set_load_error(&mut self, message: String) {
        self.dataset = None;
        self.visible.clear();
        self.page = 1;
        self.selected = None;
        self.status_message = Some(message);
        self.loading = false;
    }

    /// Replace the filter specification and recompute every derived view.
    /// The page index is clamped so the table never points past the end of
    /// the shrunken view (page 1 when the view is empty).
    pub fn apply_filter(&mut self, spec: FilterSpec) {
        self.spec = spec;
        if let Some(ds) = &self.dataset {
            self.visible = filtered_indices(ds, &self.spec);
        }
        let pages = total_pages(self.visible.len(), PAGE_SIZE);
        self.page = self.page.min(pages).max(1);
    }

    /// Restore the default spec and return to the first page.
    pub fn reset_filters(&mut self) {
        self.apply_filter(FilterSpec::default());
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{test_compound, CompoundType};

    fn dataset() -> CompoundDataset {
        let compounds = (0..30)
            .map(|i| {
                test_compound(
                    &format!("TiS{i}"),
                    CompoundType::Sulfide,
                    3.0 + (i as f64) * 0.05,
                    2800.0,
                )
            })
            .collect();
        CompoundDataset::from_compounds(compounds)
    }

    #[test]
    fn set_dataset_makes_everything_visible() {
        let mut state = AppState::default();
        state.spec.search = "stale".to_string();
        state.set_dataset(dataset());
        assert_eq!(state.spec, FilterSpec::default());
        assert_eq!(state.visible.len(), 30);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn shrinking_the_view_clamps_the_page() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.page = 3; // 30 rows / 12 per page = 3 pages

        state.apply_filter(FilterSpec {
            voltage_range: (3.0, 3.1),
            ..FilterSpec::default()
        });
        assert!(state.visible.len() <= 3);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn empty_view_keeps_page_at_one() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.apply_filter(FilterSpec {
            search: "nothing matches this".to_string(),
            ..FilterSpec::default()
        });
        assert!(state.visible.is_empty());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn load_error_leaves_an_empty_store_with_a_message() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.set_load_error("Error: boom".to_string());
        assert!(state.dataset.is_none());
        assert!(state.visible.is_empty());
        assert!(state.status_message.is_some());
    }
}
