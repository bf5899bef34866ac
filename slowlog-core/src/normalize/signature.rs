use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Stand-in for every literal value in a signature.
pub const DEFAULT_PLACEHOLDER: &str = "XXX";

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit regex"));

// Opening quote, at least one character, nearest closing quote of either kind.
static QUOTED_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['"].+?['"]"#).expect("valid quoted span regex"));

/// Derives grouping signatures from SQL text.
#[derive(Debug, Clone)]
pub struct Normalizer {
    placeholder: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

impl Normalizer {
    /// `placeholder` must not contain digits or quote characters; see
    /// [`is_valid_placeholder`].
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    /// Replaces numeric runs, then quoted literals, with the placeholder.
    ///
    /// Numbers go first, so `'abc123'` becomes `'abcXXX'` before the whole
    /// literal collapses to `XXX`.
    pub fn signature(&self, sql: &str) -> String {
        let numbers_replaced = DIGIT_RUN.replace_all(sql, NoExpand(&self.placeholder));
        QUOTED_SPAN
            .replace_all(&numbers_replaced, NoExpand(&self.placeholder))
            .into_owned()
    }
}

/// Signature with the default placeholder.
pub fn normalize(sql: &str) -> String {
    Normalizer::default().signature(sql)
}

/// A placeholder keeps normalization idempotent only if a second pass can
/// never match inside it.
pub fn is_valid_placeholder(placeholder: &str) -> bool {
    !placeholder.is_empty()
        && !placeholder
            .chars()
            .any(|c| c.is_ascii_digit() || c == '\'' || c == '"' || c == '\n')
}
