use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    let config = cruscotto::config::ClientConfig::from_env();
    cruscotto::gui::app::Dashboard::run(iced::Settings::with_flags(config))
}
