//! Domain Services
//!
//! Stateless pipeline logic. Services that need file contents go through
//! the `FileSystem` port.

pub mod bundler;
pub mod change_detector;
pub mod comment_stripper;
pub mod escaping;
pub mod path_classifier;

pub use bundler::{render_element, Bundler, CLEARED_NOTE};
pub use change_detector::needs_write;
pub use comment_stripper::{remove_comments, CommentStripper};
pub use escaping::{escape_attr, unwrap_cdata, wrap_cdata};
pub use path_classifier::{classify, normalize_lexically, PathClassifier};
