//! Semantic variable and coordinate names mapped to model-specific identifiers.
//!
//! ```
//! use model_names::{models, NameTable};
//!
//! let um = models::um();
//! assert_eq!(um.lookup("u").unwrap(), "STASH_m01s00i002");
//! assert!(!um.contains("not_a_real_key"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;
pub mod table;

pub use error::{NamesError, Result};
pub use registry::ModelRegistry;
pub use table::{Entry, EntryKind, Model, ModelBuilder, NameTable};
