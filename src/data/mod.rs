/// Data layer: core types, built-in samples, snapshot loading and validation.
///
/// Architecture:
/// ```text
///   built-in samples         .json / .csv snapshot
///        │                          │
///        │                          ▼
///        │                    ┌──────────┐
///        │                    │  loader   │  parse file → raw records
///        │                    └──────────┘
///        │                          │
///        │                          ▼
///        │                    ┌──────────┐
///        │                    │ validate  │  reject / clamp / flag
///        │                    └──────────┘
///        ▼                          ▼
///   ┌────────────────────────────────────┐
///   │            DashboardData           │  immutable input of the view
///   └────────────────────────────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod sample;
pub mod validate;
