//! Output artifacts: the rendered HTML page and the files on disk.

pub mod html;
pub mod writer;

pub use html::{HtmlRenderer, PageSettings};
pub use writer::{read_document, write_html, write_outputs, OutputPaths, WrittenFiles};
