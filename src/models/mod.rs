//! Built-in model tables
//!
//! Each model gets its own constructor; nothing here is a global. Build the
//! tables once (usually through [`crate::registry::ModelRegistry::builtin`])
//! and hand them to whoever needs them.

mod era5;
mod um;

pub use era5::era5;
pub use um::um;

use crate::table::Model;

/// Every model shipped with the crate, in a fixed order.
pub fn builtin() -> Vec<Model> {
    vec![um(), era5()]
}
