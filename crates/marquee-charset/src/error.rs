/// Errors raised while encoding text for the sign.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CharsetError {
    /// One or more characters have no byte in the sign's table.
    #[error("unsupported character(s): {}", format_chars(.0))]
    UnsupportedCharacter(Vec<char>),
}

pub type Result<T> = std::result::Result<T, CharsetError>;

/// Renders characters as a comma-separated, debug-quoted list (`'^', '{'`).
pub fn format_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| format!("{c:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}
