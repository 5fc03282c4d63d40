//! Query models.
//!
//! Plain value types shared by the searches. All of them serialize with
//! serde, so queries can be loaded from configuration.
//!
//! | Type | Used by | Meaning |
//! |------|---------|---------|
//! | ComparisonMode | rotation | How much of a name takes part in ordering |
//! | SearchStrategy | fit | Recursion or reachability table |
//! | FitRequest | fit | Durations, target, and count in one value |

mod comparison;
mod request;
mod strategy;

pub use comparison::ComparisonMode;
pub use request::FitRequest;
pub use strategy::SearchStrategy;
