mod tree;
mod writer;

pub use tree::{guide_prefix, print_tree, render_report, FOLDER_ICON};
pub use writer::Writer;
