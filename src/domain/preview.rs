use crate::domain::card::Card;
use crate::domain::config::ManaOptions;
use crate::domain::icons::{IconRegistry, ManaIcon};
use crate::domain::utils::non_blank;
use crate::ports::inbound::renderer::Renderer;
use crate::ports::outbound::card_provider::CardFetchError;
use serde::Serialize;
use tokio::time::Instant;

/// Hand-entered replacements for the fetched text. Blank values are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub title: Option<String>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
}

impl Overrides {
    #[must_use]
    pub fn new(
        title: Option<String>,
        type_line: Option<String>,
        oracle_text: Option<String>,
    ) -> Self {
        Self {
            title: non_blank(title.as_deref()),
            type_line: non_blank(type_line.as_deref()),
            oracle_text: non_blank(oracle_text.as_deref()),
        }
    }
}

/// Everything the renderer needs to lay out one card frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub name: String,
    pub title: String,
    pub title_glyphs: Vec<String>,
    pub mana: Vec<ManaIcon>,
    pub type_line: String,
    pub oracle_text: Option<String>,
    pub flavor_text: Option<String>,
    pub stats: Option<String>,
}

impl Preview {
    #[must_use]
    pub fn build(
        card: &Card,
        overrides: &Overrides,
        icons: &IconRegistry,
        options: ManaOptions,
    ) -> Self {
        let start = Instant::now();

        let title = overrides
            .title
            .clone()
            .or_else(|| card.localized_name.clone())
            .unwrap_or_else(|| card.name.clone());
        let title_glyphs = title.chars().map(String::from).collect();

        let mut mana = icons.icons_for(card.mana_cost.as_deref(), options.drop_empty);
        if options.right_to_left {
            mana.reverse();
        }

        let preview = Self {
            name: card.name.clone(),
            title,
            title_glyphs,
            mana,
            type_line: overrides
                .type_line
                .clone()
                .unwrap_or_else(|| card.type_line.clone()),
            oracle_text: overrides
                .oracle_text
                .clone()
                .or_else(|| non_blank(card.oracle_text.as_deref())),
            flavor_text: non_blank(card.flavor_text.as_deref()),
            stats: card.stats(),
        };

        log::info!("Preview build: {} us", start.elapsed().as_micros());

        preview
    }

    #[must_use]
    pub fn export_file_name(&self) -> String {
        format!("{}.png", self.name.replace(' ', "_"))
    }
}

pub async fn show_card<R: Renderer>(preview: Result<Preview, CardFetchError>, renderer: &R) {
    match preview {
        Err(why) => {
            if let Err(why) = renderer.report(why.to_string()).await {
                log::error!("Error reporting failed fetch :( {why:?}");
            }
        }
        Ok(preview) => {
            if let Err(why) = renderer.render(preview).await {
                log::error!("Error rendering card preview :( {why:?}");
            }
        }
    }
}
