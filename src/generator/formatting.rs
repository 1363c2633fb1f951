use crate::common::types::FormatKind;

/// `botao_7`, `img_2`, ...
pub fn numbered_identifier(kind: FormatKind, index: u32) -> String {
    format!("{}_{}", kind.marker(), index)
}

/// Joins an identifier and the cleaned content suffix with a single hyphen,
/// never producing `--` or a dangling separator.
pub fn join_content(identifier: &str, suffix: &str) -> String {
    if suffix.is_empty() || suffix.starts_with('-') {
        format!("{}{}", identifier, suffix)
    } else {
        format!("{}-{}", identifier, suffix)
    }
}
