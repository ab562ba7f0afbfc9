//! Front-matter parsing, updating, and rebuilding for note files
//!
//! Locates the first `---`-delimited YAML block in a note, parses it into
//! an order-preserving mapping, and splices an updated mapping back into
//! the surrounding text without touching the body.

pub mod block;
pub mod error;
pub mod frontmatter;

pub use block::{DELIMITER, LineSpan, locate};
pub use error::{Error, Result};
pub use frontmatter::{FrontMatter, parse, rebuild, update_with};
