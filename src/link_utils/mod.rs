mod file_ops;
mod url_ops;
mod validation;

pub use file_ops::{ensure_dir_exists, export_filename, write_export};
pub use url_ops::ParsedUrl;
pub use validation::{check_raw_url, extract_tags, validate_content_chars};
