//! Two small search problems over agendas and running times.
//!
//! # Modules
//!
//! - **`rotation`**: Finds where a wrapped alphabetical agenda restarts
//!   (`find_rotation_point`), comparing names shallowly or deeply
//! - **`fit`**: Decides whether exactly N durations sum to a target
//!   (`exists_exact_fit`), and returns one such selection (`find_exact_fit`)
//! - **`models`**: Query types — `ComparisonMode`, `SearchStrategy`, `FitRequest`
//! - **`validation`**: Optional input checks (empty names, negative values)
//!
//! The two searches are independent pure functions. Neither allocates
//! shared state, and both report through `tracing` at debug level.
//!
//! # Example
//!
//! ```
//! use agenda_fit::{exists_exact_fit, find_rotation_point, ComparisonMode};
//!
//! let guests = ["Pamela", "Sandra", "Salima", "Adam"];
//! assert_eq!(find_rotation_point(&guests, ComparisonMode::Deep), 2);
//!
//! assert!(exists_exact_fit(&[30, 77, 120, 95, 45], 195, 3));
//! ```

pub mod fit;
pub mod models;
pub mod rotation;
pub mod validation;

pub use fit::{exists_exact_fit, exists_exact_fit_with, find_exact_fit};
pub use models::{ComparisonMode, FitRequest, SearchStrategy};
pub use rotation::{find_rotation_point, is_lower};
