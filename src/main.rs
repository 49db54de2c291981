use dgc::{bot, config::Config, error::AppError};
use dioxus_logger::tracing::{self, Level};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if dioxus_logger::init(Level::INFO).is_err() {
        eprintln!("Failed to initialize logger");
    }

    let config = Config::from_env()?;

    tracing::info!("Starting with command prefix {:?}", config.command_prefix);

    let client = bot::start::init_bot(&config).await?;

    bot::start::start_bot(client).await
}
