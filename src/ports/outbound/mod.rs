pub mod card_provider;
