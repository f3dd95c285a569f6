use crate::domain::app::App;
use crate::domain::card::{self, Card};
use crate::domain::preview::Preview;
use crate::ports::outbound::card_provider::{CardFetchError, CardProvider};
use tokio::time::Instant;

impl<CP> App<CP>
where
    CP: CardProvider + Send + Sync,
{
    /// Fetches the card, then the name of its localized printing. The lookups
    /// run one after the other since the second needs the canonical name.
    pub async fn fetch_card(&self, name: &str) -> Result<Card, CardFetchError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CardFetchError::new(String::from("Card name is empty")));
        }

        let start = Instant::now();
        let raw = self
            .card_provider
            .fetch_by_exact_name(name.to_string())
            .await?;

        let exact_name = raw.top.name.clone().unwrap_or_else(|| name.to_string());
        let localized_name = self
            .card_provider
            .localized_name(exact_name, self.config.localized_lang.clone())
            .await;

        if localized_name.is_none() {
            log::info!(
                "No {} printing found for {name}",
                self.config.localized_lang
            );
        }
        log::info!("Card fetch: {} ms", start.elapsed().as_millis());

        Ok(card::normalise(&raw, localized_name))
    }

    pub async fn preview(&self, name: &str) -> Result<Preview, CardFetchError> {
        let card = self.fetch_card(name).await?;
        Ok(Preview::build(
            &card,
            &self.config.overrides,
            &self.icons,
            self.config.mana,
        ))
    }
}
