use crate::domain::card::RawCard;
use crate::ports::outbound::card_provider::{CardFetchError, CardProvider};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

const AGENT: &str = concat!("kamifuda/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ScryfallError {
    details: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    data: Vec<RawCard>,
}

pub struct Scryfall {
    http: Client,
    base_url: String,
}

impl Scryfall {
    pub fn new(base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|why| {
                log::warn!("Falling back to default http client {why:?}");
                Client::new()
            });

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CardProvider for Scryfall {
    async fn fetch_by_exact_name(&self, name: String) -> Result<RawCard, CardFetchError> {
        let response = self
            .http
            .get(format!("{}/cards/named", self.base_url))
            .query(&[("exact", name.as_str())])
            .send()
            .await
            .map_err(|why| {
                log::warn!("Error reaching Scryfall {why:?}");
                CardFetchError::new(String::from("Could not reach Scryfall"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let details = response
                .json::<ScryfallError>()
                .await
                .ok()
                .and_then(|body| body.details);
            return Err(CardFetchError::new(error_message(status, details)));
        }

        response.json::<RawCard>().await.map_err(|why| {
            log::warn!("Error parsing card {name} {why:?}");
            CardFetchError::new(format!("Unreadable card data for {name}"))
        })
    }

    async fn localized_name(&self, exact_name: String, lang: String) -> Option<String> {
        let query = localized_query(&exact_name, &lang);
        let response = match self
            .http
            .get(format!("{}/cards/search", self.base_url))
            .query(&[
                ("q", query.as_str()),
                ("unique", "prints"),
                ("order", "released"),
                ("dir", "desc"),
            ])
            .send()
            .await
        {
            Err(why) => {
                log::warn!("Error searching {lang} printings {why:?}");
                return None;
            }
            Ok(response) => response,
        };

        if !response.status().is_success() {
            log::debug!("No {lang} printing of {exact_name} ({})", response.status());
            return None;
        }

        match response.json::<SearchPage>().await {
            Err(why) => {
                log::warn!("Error parsing {lang} search results {why:?}");
                None
            }
            Ok(page) => first_printed_name(page),
        }
    }
}

fn error_message(status: StatusCode, details: Option<String>) -> String {
    details.unwrap_or_else(|| format!("Scryfall error ({})", status.as_u16()))
}

fn localized_query(exact_name: &str, lang: &str) -> String {
    format!("!\"{exact_name}\" lang:{lang}")
}

fn first_printed_name(page: SearchPage) -> Option<String> {
    page.data.first()?.printed_name()
}
