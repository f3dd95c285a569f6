mod scryfall;

use crate::adapters::outbound::card_provider::scryfall::Scryfall;
use crate::domain::config::Config;
use crate::ports::outbound::card_provider::CardProvider;

#[must_use]
pub fn init_card_provider(config: &Config) -> impl CardProvider {
    Scryfall::new(&config.scryfall_url)
}
