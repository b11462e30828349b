//! Trait definitions for the Mucha social post studio.
//!
//! This crate defines the seam between the caption domain and the model
//! providers: the [`MuchaDriver`] generation trait plus capability traits
//! for querying what a provider supports.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{Metadata, MuchaDriver, Vision};
pub use types::ModelMetadata;
