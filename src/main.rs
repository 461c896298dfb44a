use iced::Application;
use layman_learn::client::config::ClientConfig;
use layman_learn::client::gui::app::{ExplainerApp, ExplainerFlags};
use layman_learn::client::services::explain_service::ExplainService;

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    layman_learn::utils::logger::init("info");

    let config = ClientConfig::from_env()?;
    let flags = ExplainerFlags {
        service: ExplainService::new(&config)?,
        theme: config.initial_theme,
    };

    let mut settings = iced::Settings::with_flags(flags);
    settings.window.size = iced::Size::new(520.0, 860.0);
    ExplainerApp::run(settings)?;
    Ok(())
}
