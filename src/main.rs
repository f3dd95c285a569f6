use dotenv::dotenv;
use kamifuda::adapters::inbound::terminal::Terminal;
use kamifuda::adapters::outbound::card_provider::init_card_provider;
use kamifuda::domain::app::App;
use kamifuda::domain::config::Config;
use kamifuda::domain::preview::show_card;
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    let name = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if name.trim().is_empty() {
        eprintln!("Usage: kamifuda <exact card name>");
        return ExitCode::FAILURE;
    }

    let config = Config::from_env();
    let app = App::new(init_card_provider(&config), config);

    let preview = app.preview(&name).await;
    let failed = preview.is_err();
    show_card(preview, &Terminal::stdout()).await;

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
