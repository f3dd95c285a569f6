use regex::Regex;
use std::sync::LazyLock;

const MANA_SYMBOL_RE: &str = r"\{([^}]+)}";
const WHITESPACE_RE: &str = r"\s+";

pub static REGEX_COLLECTION: LazyLock<RegexCollection> = LazyLock::new(|| {
    let mana_symbols = Regex::new(MANA_SYMBOL_RE).expect("Invalid regex");
    let whitespace = Regex::new(WHITESPACE_RE).expect("Invalid regex");
    RegexCollection {
        mana_symbols,
        whitespace,
    }
});

pub struct RegexCollection {
    pub mana_symbols: Regex,
    pub whitespace: Regex,
}

/// Trims the value and treats a blank result as absent.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mana_symbols_capture_inner_text() {
        let symbols: Vec<&str> = REGEX_COLLECTION
            .mana_symbols
            .captures_iter("{2}{W/U}")
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str())
            .collect();
        assert_eq!(symbols, vec!["2", "W/U"]);
    }

    #[test]
    fn test_mana_symbols_skip_empty_braces() {
        assert!(REGEX_COLLECTION.mana_symbols.captures("{}").is_none());
    }

    #[test]
    fn test_whitespace_matches_tabs_and_newlines() {
        assert_eq!(REGEX_COLLECTION.whitespace.replace_all(" w /\tu\n", ""), "w/u");
    }

    #[test]
    fn test_non_blank_trims() {
        assert_eq!(non_blank(Some("  Instant ")), Some(String::from("Instant")));
    }

    #[test]
    fn test_non_blank_whitespace_is_none() {
        assert_eq!(non_blank(Some("   ")), None);
    }

    #[test]
    fn test_non_blank_none() {
        assert_eq!(non_blank(None), None);
    }
}
