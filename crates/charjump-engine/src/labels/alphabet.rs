use charjump_config::DEFAULT_CHARSET;
use tracing::warn;

/// Ordered, duplicate-free set of label symbols. Always holds at least two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelAlphabet {
    symbols: Vec<char>,
}

impl LabelAlphabet {
    /// Build an alphabet from a configured charset.
    ///
    /// The charset is trimmed and repeated symbols are dropped, keeping the
    /// first occurrence. Fewer than two symbols falls back to the default.
    pub fn from_charset(charset: &str) -> Self {
        let mut symbols = Vec::new();
        for ch in charset.trim().chars() {
            if !symbols.contains(&ch) {
                symbols.push(ch);
            }
        }
        if symbols.len() < 2 {
            warn!(charset, "label charset has fewer than 2 symbols, using default");
            return Self::default();
        }
        Self { symbols }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for LabelAlphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_CHARSET.chars().collect(),
        }
    }
}
