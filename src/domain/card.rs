use serde::{Deserialize, Serialize};

/// The per-face fields a provider record carries, either at the top level or
/// once per entry in `card_faces`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CardFace {
    pub name: Option<String>,
    pub printed_name: Option<String>,
    pub mana_cost: Option<String>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub flavor_text: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loyalty: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCard {
    #[serde(flatten)]
    pub top: CardFace,
    pub color_identity: Option<Vec<String>>,
    pub card_faces: Option<Vec<CardFace>>,
}

impl RawCard {
    #[must_use]
    pub fn front_face(&self) -> Option<&CardFace> {
        self.card_faces.as_deref().and_then(<[CardFace]>::first)
    }

    /// The printed name of a localized printing, preferring the front face.
    #[must_use]
    pub fn printed_name(&self) -> Option<String> {
        match self.front_face() {
            Some(face) => face
                .printed_name
                .clone()
                .or_else(|| self.top.printed_name.clone()),
            None => self.top.printed_name.clone(),
        }
    }
}

#[cfg_attr(test, derive(Default))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub name: String,
    pub localized_name: Option<String>,
    pub mana_cost: Option<String>,
    pub type_line: String,
    pub oracle_text: Option<String>,
    pub flavor_text: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loyalty: Option<String>,
    pub colour_identity: Vec<String>,
}

impl Card {
    /// `power/toughness` for creatures, loyalty for planeswalkers, otherwise nothing.
    #[must_use]
    pub fn stats(&self) -> Option<String> {
        match (&self.power, &self.toughness, &self.loyalty) {
            (Some(power), Some(toughness), _) => Some(format!("{power}/{toughness}")),
            (_, _, Some(loyalty)) => Some(loyalty.clone()),
            _ => None,
        }
    }
}

fn front_or_top(
    front: Option<&CardFace>,
    top: &CardFace,
    field: fn(&CardFace) -> &Option<String>,
) -> Option<String> {
    front
        .and_then(|face| field(face).clone())
        .or_else(|| field(top).clone())
}

#[must_use]
pub fn normalise(raw: &RawCard, localized_name: Option<String>) -> Card {
    let front = raw.front_face();
    let top = &raw.top;

    Card {
        name: front_or_top(front, top, |face| &face.name).unwrap_or_default(),
        localized_name,
        mana_cost: front_or_top(front, top, |face| &face.mana_cost),
        type_line: front_or_top(front, top, |face| &face.type_line).unwrap_or_default(),
        oracle_text: front_or_top(front, top, |face| &face.oracle_text),
        flavor_text: front_or_top(front, top, |face| &face.flavor_text),
        power: front_or_top(front, top, |face| &face.power),
        toughness: front_or_top(front, top, |face| &face.toughness),
        loyalty: front_or_top(front, top, |face| &face.loyalty),
        colour_identity: raw.color_identity.clone().unwrap_or_default(),
    }
}
