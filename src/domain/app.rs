use crate::domain::config::Config;
use crate::domain::icons::IconRegistry;
use crate::ports::outbound::card_provider::CardProvider;

pub struct App<CP> {
    pub card_provider: CP,
    pub icons: IconRegistry,
    pub config: Config,
}

impl<CP> App<CP>
where
    CP: CardProvider + Send + Sync,
{
    pub fn new(card_provider: CP, config: Config) -> Self {
        let icons = IconRegistry::new(&config.mana_asset_dir);
        Self {
            card_provider,
            icons,
            config,
        }
    }
}
