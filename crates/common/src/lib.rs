//! Petcheck Common Library
//!
//! Pet-store data model, fixture builders and the assertion pipe shared by
//! the Petcheck harness. Nothing in this crate performs I/O.

pub mod builder;
pub mod check;
pub mod error;
pub mod factory;
pub mod model;
pub mod pipe;

// Re-export commonly used types
pub use builder::{PetBuilder, TagBuilder};
pub use error::{AssertionFailure, PipeFailure, Result};
pub use factory::PetFactory;
pub use model::{ApiError, Categories, Pet, PetId, PetIdParam, SchemaRevision, Tag};
pub use pipe::AssertPipe;

/// Petcheck version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
