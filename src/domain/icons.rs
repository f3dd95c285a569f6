use crate::domain::mana::{parse_mana_cost, ManaToken, COLOURS};
use serde::Serialize;
use std::collections::HashMap;

const ICON_EXTENSION: &str = "svg";
const HIGHEST_GENERIC: u32 = 20;

/// Opaque reference to an icon asset. Existence is never checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    #[must_use]
    pub fn new(locator: String) -> Self {
        Self(locator)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManaIcon {
    pub token: ManaToken,
    pub asset: AssetRef,
}

/// Token to asset mapping, built once at startup.
pub struct IconRegistry {
    asset_dir: String,
    assets: HashMap<String, AssetRef>,
}

impl IconRegistry {
    #[must_use]
    pub fn new(asset_dir: &str) -> Self {
        let mut registry = Self {
            asset_dir: asset_dir.trim_end_matches('/').to_string(),
            assets: HashMap::new(),
        };

        for key in canonical_keys() {
            let asset = registry.locator(&key);
            registry.assets.insert(key, asset);
        }

        log::info!(
            "Registered {} mana icons from {}",
            registry.assets.len(),
            registry.asset_dir
        );

        registry
    }

    pub fn register(&mut self, key: &str, asset: AssetRef) {
        self.assets.insert(key.to_string(), asset);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    #[must_use]
    pub fn is_registered(&self, token: &ManaToken) -> bool {
        self.assets.contains_key(token.as_str())
    }

    /// Looks the token up by its exact key. Tokens with no entry get a locator
    /// following the same naming scheme, so every token resolves.
    #[must_use]
    pub fn resolve(&self, token: &ManaToken) -> AssetRef {
        self.assets.get(token.as_str()).cloned().unwrap_or_else(|| {
            log::debug!("No registered icon for {token:?}");
            self.locator(token.as_str())
        })
    }

    /// Icons for a whole cost, in the order they are written.
    #[must_use]
    pub fn icons_for(&self, mana_cost: Option<&str>, drop_empty: bool) -> Vec<ManaIcon> {
        parse_mana_cost(mana_cost)
            .into_iter()
            .filter(|token| !(drop_empty && token.is_empty()))
            .map(|token| {
                let asset = self.resolve(&token);
                ManaIcon { token, asset }
            })
            .collect()
    }

    fn locator(&self, key: &str) -> AssetRef {
        AssetRef(format!("{}/{key}.{ICON_EXTENSION}", self.asset_dir))
    }
}

fn canonical_keys() -> Vec<String> {
    let mut keys: Vec<String> = (0..=HIGHEST_GENERIC).map(|n| n.to_string()).collect();
    keys.extend(["X", "C", "S"].map(String::from));

    for first in COLOURS {
        keys.push(first.to_string());
        keys.push(format!("{first}_P"));
        keys.push(format!("2_{first}"));

        for second in COLOURS.iter().filter(|second| **second != first) {
            keys.push(format!("{first}{second}"));
            keys.push(format!("{first}_{second}_P"));
        }
    }

    keys
}
