/// Data layer: loading and normalizing distribution files.
///
/// Architecture:
/// ```text
///   dist.txt (line 1: observed counts, line 2: actual)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse two comma-separated lines
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  observed counts → percent of total
///   └───────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ Distribution  │  observed %, actual, index axis 1..=N
///   └──────────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod normalize;
