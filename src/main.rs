use clap::Parser;
use log::info;
use rps_client::rps_game::{Config, ConsoleUI, GameClient, GameController, HttpGameApi, Locale};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.log_level.as_str()));
    info!("Using game server at {}", config.server_url);

    let locale = Locale::new(config.lang);
    let api = HttpGameApi::new(&config.server_url, config.timeout());
    let client = GameClient::new(api, locale, config.reveal_delay());
    let ui = ConsoleUI::new(locale);

    let mut controller = GameController::new(client, ui);
    controller.run(config.game)?;
    Ok(())
}
