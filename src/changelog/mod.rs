//! Changelog rendering and persistence
//!
//! - `renderer` - Markdown for one release entry
//! - `writer` - Prepending an entry to the changelog file

pub mod renderer;
pub mod writer;

pub use renderer::ChangelogRenderer;
pub use writer::prepend_to_file;
