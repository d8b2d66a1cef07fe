mod file_helper;

pub use file_helper::{is_directory, normalize_newlines, sorted_children, walk_files, Children};
