use std::process::ExitCode;

use dotenvy::dotenv;

use events_db_setup::config::{init_tracing, Config};
use events_db_setup::setup;
use events_db_setup::utils::report;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            e.log("config");
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(host = %config.host, port = config.port, user = %config.user, "Configuration loaded");

    report::intro();
    let outcome = setup::run(&config).await;
    report::summary(&outcome);

    if outcome.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
