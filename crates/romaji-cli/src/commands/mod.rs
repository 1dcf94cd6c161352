pub mod pattern_ops;
pub mod replay_ops;

use unicode_width::UnicodeWidthStr;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Patterns(#[from] romaji_core::romaji::PatternConfigError),
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Right-pad `s` to `width` terminal columns (kana are two columns wide).
pub(crate) fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w < width {
        format!("{}{}", s, " ".repeat(width - w))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_counts_wide_chars() {
        assert_eq!(pad("か", 4), "か  ");
        assert_eq!(pad("ka", 4), "ka  ");
        assert_eq!(pad("かきく", 4), "かきく");
    }
}
