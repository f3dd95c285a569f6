use crate::domain::preview::Overrides;
use crate::domain::utils::non_blank;
use std::env;

const DEFAULT_SCRYFALL_URL: &str = "https://api.scryfall.com";
const DEFAULT_LOCALIZED_LANG: &str = "ja";
const DEFAULT_MANA_ASSET_DIR: &str = "assets/mana";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManaOptions {
    /// Leave out tokens that came from blank symbols such as `{ }`.
    pub drop_empty: bool,
    pub right_to_left: bool,
}

impl Default for ManaOptions {
    fn default() -> Self {
        Self {
            drop_empty: false,
            right_to_left: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub scryfall_url: String,
    pub localized_lang: String,
    pub mana_asset_dir: String,
    pub mana: ManaOptions,
    pub overrides: Overrides,
}

impl Config {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ManaOptions::default();
        let text = |key: &str, default: &str| {
            non_blank(lookup(key).as_deref()).unwrap_or_else(|| default.to_string())
        };
        let flag = |key: &str, default: bool| match lookup(key) {
            None => default,
            Some(value) => parse_flag(&value).unwrap_or_else(|| {
                log::warn!("Ignoring {key}={value:?}, expected true or false");
                default
            }),
        };

        Self {
            scryfall_url: text("SCRYFALL_URL", DEFAULT_SCRYFALL_URL),
            localized_lang: text("LOCALIZED_LANG", DEFAULT_LOCALIZED_LANG),
            mana_asset_dir: text("MANA_ASSET_DIR", DEFAULT_MANA_ASSET_DIR),
            mana: ManaOptions {
                drop_empty: flag("DROP_EMPTY_MANA_TOKENS", defaults.drop_empty),
                right_to_left: flag("RIGHT_TO_LEFT_MANA", defaults.right_to_left),
            },
            overrides: Overrides::new(
                lookup("TITLE_OVERRIDE"),
                lookup("TYPE_LINE_OVERRIDE"),
                lookup("ORACLE_TEXT_OVERRIDE"),
            ),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
