use crate::domain::utils::REGEX_COLLECTION;
use serde::Serialize;
use std::fmt;

pub const COLOURS: [&str; 5] = ["W", "U", "B", "R", "G"];

/// Canonical key naming one mana symbol icon, e.g. `2`, `WU`, `G_P`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ManaToken(String);

impl ManaToken {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ManaToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolKind {
    Generic,
    Variable,
    Colourless,
    Snow,
    Phyrexian,
    HybridPhyrexian,
    Hybrid,
    TwoGenericHybrid,
    Colour,
    Unknown,
}

struct Rule {
    kind: SymbolKind,
    applies: fn(&str, &[&str]) -> bool,
    canonical: fn(&str) -> String,
}

// Checked top to bottom, first match wins. Anything left over is `Unknown`.
const RULES: [Rule; 9] = [
    Rule {
        kind: SymbolKind::Generic,
        applies: |symbol, _| !symbol.is_empty() && symbol.bytes().all(|b| b.is_ascii_digit()),
        canonical: literal,
    },
    Rule {
        kind: SymbolKind::Variable,
        applies: |symbol, _| symbol == "X",
        canonical: literal,
    },
    Rule {
        kind: SymbolKind::Colourless,
        applies: |symbol, _| symbol == "C",
        canonical: literal,
    },
    Rule {
        kind: SymbolKind::Snow,
        applies: |symbol, _| symbol == "S",
        canonical: literal,
    },
    Rule {
        kind: SymbolKind::Phyrexian,
        applies: |_, parts| matches!(parts, [colour, "P"] if is_colour(colour)),
        canonical: underscored,
    },
    Rule {
        kind: SymbolKind::HybridPhyrexian,
        applies: |_, parts| matches!(parts, [first, second, "P"] if is_colour_pair(first, second)),
        canonical: underscored,
    },
    Rule {
        kind: SymbolKind::Hybrid,
        applies: |_, parts| matches!(parts, [first, second] if is_colour_pair(first, second)),
        canonical: joined,
    },
    Rule {
        kind: SymbolKind::TwoGenericHybrid,
        applies: |_, parts| matches!(parts, ["2", colour] if is_colour(colour)),
        canonical: underscored,
    },
    Rule {
        kind: SymbolKind::Colour,
        applies: |symbol, _| is_colour(symbol),
        canonical: literal,
    },
];

fn is_colour(part: &str) -> bool {
    COLOURS.iter().any(|colour| *colour == part)
}

fn is_colour_pair(first: &str, second: &str) -> bool {
    is_colour(first) && is_colour(second) && first != second
}

fn literal(symbol: &str) -> String {
    symbol.to_string()
}

fn underscored(symbol: &str) -> String {
    symbol.replace('/', "_")
}

fn joined(symbol: &str) -> String {
    symbol.replace('/', "")
}

fn clean(raw_symbol: &str) -> String {
    REGEX_COLLECTION
        .whitespace
        .replace_all(raw_symbol, "")
        .to_uppercase()
}

/// Splits a cost like `{2}{R}{U}` into its brace contents, left to right.
#[must_use]
pub fn tokenize(cost: Option<&str>) -> Vec<&str> {
    let Some(cost) = cost else {
        return Vec::new();
    };

    REGEX_COLLECTION
        .mana_symbols
        .captures_iter(cost)
        .filter_map(|cap| cap.get(1))
        .map(|symbol| symbol.as_str())
        .collect()
}

#[must_use]
pub fn classify(raw_symbol: &str) -> (SymbolKind, ManaToken) {
    let symbol = clean(raw_symbol);
    let parts: Vec<&str> = symbol.split('/').collect();

    RULES
        .iter()
        .find(|rule| (rule.applies)(&symbol, &parts))
        .map_or_else(
            || (SymbolKind::Unknown, ManaToken(underscored(&symbol))),
            |rule| (rule.kind, ManaToken((rule.canonical)(&symbol))),
        )
}

#[must_use]
pub fn normalise(raw_symbol: &str) -> ManaToken {
    classify(raw_symbol).1
}

#[must_use]
pub fn parse_mana_cost(cost: Option<&str>) -> Vec<ManaToken> {
    tokenize(cost).into_iter().map(normalise).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(cost: &str) -> Vec<String> {
        parse_mana_cost(Some(cost))
            .into_iter()
            .map(|token| token.to_string())
            .collect()
    }

    #[test]
    fn test_tokenize_none() {
        assert!(tokenize(None).is_empty());
    }

    #[test]
    fn test_tokenize_without_braces() {
        assert!(tokenize(Some("2RU")).is_empty());
    }

    #[test]
    fn test_tokenize_empty_string() {
        assert!(tokenize(Some("")).is_empty());
    }

    #[test]
    fn test_tokenize_keeps_source_order() {
        assert_eq!(tokenize(Some("{2}{R}{U}")), vec!["2", "R", "U"]);
    }

    #[test]
    fn test_tokenize_ignores_text_between_groups() {
        assert_eq!(tokenize(Some("{1}{G} // {3}{U}")), vec!["1", "G", "3", "U"]);
    }

    #[test]
    fn test_one_token_per_brace_group() {
        let cost = "{10}{W/U}{B/P}{2/R}{G/U/P}{X}{C}{S}{Q}{ }";
        assert_eq!(parse_mana_cost(Some(cost)).len(), tokenize(Some(cost)).len());
        assert_eq!(tokenize(Some(cost)).len(), 10);
    }

    #[test]
    fn test_generic_and_colours() {
        assert_eq!(keys("{2}{R}{U}"), vec!["2", "R", "U"]);
    }

    #[test]
    fn test_variable_and_phyrexian() {
        assert_eq!(keys("{X}{G/P}"), vec!["X", "G_P"]);
    }

    #[test]
    fn test_hybrid() {
        assert_eq!(keys("{W/U}"), vec!["WU"]);
    }

    #[test]
    fn test_two_generic_hybrid() {
        assert_eq!(keys("{2/B}"), vec!["2_B"]);
    }

    #[test]
    fn test_snow() {
        assert_eq!(keys("{S}"), vec!["S"]);
    }

    #[test]
    fn test_hybrid_phyrexian() {
        assert_eq!(keys("{W/U/P}"), vec!["W_U_P"]);
    }

    #[test]
    fn test_colourless() {
        assert_eq!(keys("{C}"), vec!["C"]);
    }

    #[test]
    fn test_large_generic() {
        assert_eq!(keys("{15}"), vec!["15"]);
    }

    #[test]
    fn test_lowercase_and_whitespace_are_cleaned() {
        assert_eq!(normalise(" w / u "), normalise("W/U"));
        assert_eq!(normalise("g/p").as_str(), "G_P");
    }

    #[test]
    fn test_repeated_colour_is_not_hybrid() {
        assert_eq!(classify("W/W"), (SymbolKind::Unknown, ManaToken(String::from("W_W"))));
    }

    #[test]
    fn test_two_generic_beats_fallback() {
        assert_eq!(classify("2/W").0, SymbolKind::TwoGenericHybrid);
    }

    #[test]
    fn test_colourless_hybrid_falls_back() {
        assert_eq!(classify("C/W"), (SymbolKind::Unknown, ManaToken(String::from("C_W"))));
    }

    #[test]
    fn test_unknown_symbol_falls_back() {
        assert_eq!(normalise("T").as_str(), "T");
        assert_eq!(normalise("H/R/P").as_str(), "H_R_P");
    }

    #[test]
    fn test_blank_symbol_yields_empty_token() {
        let (kind, token) = classify("   ");
        assert_eq!(kind, SymbolKind::Unknown);
        assert!(token.is_empty());
    }

    #[test]
    fn test_empty_symbol_yields_empty_token() {
        assert!(normalise("").is_empty());
    }

    #[test]
    fn test_normalise_is_deterministic() {
        for symbol in ["2", "x", "W/U/P", "2/g", "", "half", "B/G"] {
            assert_eq!(normalise(symbol), normalise(symbol));
        }
    }

    #[test]
    fn test_classify_kinds() {
        assert_eq!(classify("7").0, SymbolKind::Generic);
        assert_eq!(classify("X").0, SymbolKind::Variable);
        assert_eq!(classify("C").0, SymbolKind::Colourless);
        assert_eq!(classify("S").0, SymbolKind::Snow);
        assert_eq!(classify("U/P").0, SymbolKind::Phyrexian);
        assert_eq!(classify("B/R/P").0, SymbolKind::HybridPhyrexian);
        assert_eq!(classify("R/G").0, SymbolKind::Hybrid);
        assert_eq!(classify("G").0, SymbolKind::Colour);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(format!("{}", normalise("u/b")), "UB");
    }

    #[test]
    fn test_token_serializes_as_string() {
        let json = serde_json::to_string(&normalise("2/W")).unwrap();
        assert_eq!(json, "\"2_W\"");
    }
}
