use super::model::{Compound, CompoundDataset, CompoundType};

// ---------------------------------------------------------------------------
// Filter specification – the user's current inclusion predicates
// ---------------------------------------------------------------------------

/// Full voltage domain of the dataset, volts.
pub const VOLTAGE_DOMAIN: (f64, f64) = (0.0, 5.0);
/// Full gravimetric-energy domain of the dataset, Wh/kg.
pub const ENERGY_DOMAIN: (f64, f64) = (0.0, 5000.0);

/// The current set of inclusion predicates. A plain value: the owning state
/// replaces it wholesale on every interaction and never leaks `&mut` access,
/// so every derived view observes a consistent snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against `formula` or `base_formula`.
    /// Empty matches everything.
    pub search: String,
    /// `None` means "all types".
    pub kind: Option<CompoundType>,
    /// Inclusive voltage bounds, V.
    pub voltage_range: (f64, f64),
    /// Inclusive gravimetric-energy bounds, Wh/kg.
    pub energy_range: (f64, f64),
}

impl Default for FilterSpec {
    fn default() -> Self {
        FilterSpec {
            search: String::new(),
            kind: None,
            voltage_range: VOLTAGE_DOMAIN,
            energy_range: ENERGY_DOMAIN,
        }
    }
}

impl FilterSpec {
    /// Decide whether a compound passes all four predicates.
    ///
    /// A compound with a non-finite value in a range-checked field fails that
    /// check (excluded, never an error).
    pub fn matches(&self, c: &Compound) -> bool {
        self.matches_search(c)
            && self.kind.map_or(true, |k| c.kind == k)
            && in_range(c.voltage, self.voltage_range)
            && in_range(c.energy_gravimetric, self.energy_range)
    }

    fn matches_search(&self, c: &Compound) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        c.formula.to_lowercase().contains(&needle)
            || c.base_formula.to_lowercase().contains(&needle)
    }
}

fn in_range(v: f64, (min, max): (f64, f64)) -> bool {
    // NaN fails both comparisons, so missing fields fall out here.
    v >= min && v <= max
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// Recompute the filtered view: indices of compounds passing `spec`, in store
/// order. This is the single source of truth for every derived computation;
/// nothing downstream scans the dataset directly.
///
/// Always a full pass — at a few thousand records, recomputation is cheaper
/// to reason about than incremental patching.
pub fn filtered_indices(dataset: &CompoundDataset, spec: &FilterSpec) -> Vec<usize> {
    dataset
        .compounds
        .iter()
        .enumerate()
        .filter(|(_, c)| spec.matches(c))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::test_compound;

    fn dataset() -> CompoundDataset {
        CompoundDataset::from_compounds(vec![
            test_compound("Li0.5TiS2", CompoundType::Sulfide, 3.9, 3074.0),
            test_compound("TiO2", CompoundType::Oxide, 3.4, 2970.0),
            test_compound("TiPO4", CompoundType::Phosphate, 3.2, 2650.0),
            test_compound("TiSe2", CompoundType::Selenide, 3.8, 2900.0),
        ])
    }

    #[test]
    fn default_spec_matches_everything() {
        let ds = dataset();
        assert_eq!(filtered_indices(&ds, &FilterSpec::default()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_and_checks_both_formulas() {
        let ds = dataset();
        let spec = FilterSpec {
            search: "tis2".to_string(),
            ..FilterSpec::default()
        };
        // Li0.5TiS2 matches on formula (and base_formula).
        assert_eq!(filtered_indices(&ds, &spec), vec![0]);

        let mut c = test_compound("Li0.2TiO2", CompoundType::Oxide, 3.4, 2900.0);
        c.base_formula = "TiS2".to_string();
        assert!(spec.matches(&c));
    }

    #[test]
    fn type_filter_is_exact_or_all() {
        let ds = dataset();
        let spec = FilterSpec {
            kind: Some(CompoundType::Oxide),
            ..FilterSpec::default()
        };
        assert_eq!(filtered_indices(&ds, &spec), vec![1]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let spec = FilterSpec {
            voltage_range: (3.4, 3.9),
            ..FilterSpec::default()
        };
        assert!(spec.matches(&test_compound("a", CompoundType::Oxide, 3.4, 2900.0)));
        assert!(spec.matches(&test_compound("b", CompoundType::Oxide, 3.9, 2900.0)));
        assert!(!spec.matches(&test_compound("c", CompoundType::Oxide, 3.39, 2900.0)));
    }

    #[test]
    fn missing_numeric_field_fails_closed() {
        let mut c = test_compound("TiS2", CompoundType::Sulfide, f64::NAN, 3074.0);
        assert!(!FilterSpec::default().matches(&c));
        c.voltage = 3.9;
        c.energy_gravimetric = f64::NAN;
        assert!(!FilterSpec::default().matches(&c));
    }

    #[test]
    fn view_is_an_ordered_subset_and_idempotent() {
        let ds = dataset();
        let spec = FilterSpec {
            voltage_range: (3.3, 4.0),
            ..FilterSpec::default()
        };
        let view = filtered_indices(&ds, &spec);
        assert_eq!(view, vec![0, 1, 3]);
        for &i in &view {
            assert!(spec.matches(&ds.compounds[i]));
        }
        // Every matching record appears exactly once, in store order.
        for (i, c) in ds.compounds.iter().enumerate() {
            assert_eq!(spec.matches(c), view.contains(&i));
        }
        assert_eq!(filtered_indices(&ds, &spec), view);
    }

    #[test]
    fn disjoint_range_yields_empty_view() {
        let ds = dataset();
        let spec = FilterSpec {
            voltage_range: (4.0, 5.0),
            ..FilterSpec::default()
        };
        assert!(filtered_indices(&ds, &spec).is_empty());
    }
}
