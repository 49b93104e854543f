/// Data layer: the tabular query engine plus file loading.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode file → raw cell grid
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  normalize grid → Dataset (headers + rows)
///   └──────────┘
///        │
///        ▼
///   ┌─────────┐  ┌─────────┐  ┌─────────┐
///   │  facet   │  │  filter  │  │  sort    │
///   └─────────┘  └─────────┘  └─────────┘
///    option sets   row subset    row order
/// ```
///
/// Everything below `loader` is pure: each function depends only on its
/// explicit arguments and never touches UI state. `datetime` decodes
/// spreadsheet date serials at render time.

pub mod datetime;
pub mod facet;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;
