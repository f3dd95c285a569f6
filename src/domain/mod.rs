pub mod app;
pub mod card;
pub mod config;
pub mod fetch;
pub mod icons;
pub mod mana;
pub mod preview;
pub mod utils;
