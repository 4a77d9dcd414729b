/// Data layer: core types, loading, filtering, and derived views.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → CompoundDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ CompoundDataset │  Vec<Compound>, per-type counts (immutable)
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterSpec predicate → filtered indices
///   └──────────┘
///        │
///        ├──▶ stats    summary scalars, histograms, per-type averages
///        ├──▶ page     fixed-size pages of the view
///        └──▶ export   comma-delimited flat file
/// ```
///
/// Everything below the dataset is a pure function of
/// `(CompoundDataset, FilterSpec)` and is recomputed in full whenever the
/// spec is replaced; nothing in this module holds state.
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod page;
pub mod predict;
pub mod stats;
