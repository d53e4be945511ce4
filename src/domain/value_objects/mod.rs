//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod path;
mod path_category;
mod stage;

pub use path::{PathError, SafePath};
pub use path_category::{ClassifiedPath, PathCategory};
pub use stage::Stage;
