use clap::Parser;
use log::info;
use miette::{IntoDiagnostic, Result};
use std::time::Duration;
use tokio_graceful_shutdown::{SubsystemBuilder, Toplevel};

use lpa_player::{run, Cli, PlayerConfig, VERSION};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    info!("lpa-player {}", VERSION);

    let config = PlayerConfig::load(args.config.as_deref())
        .into_diagnostic()?
        .with_cli(&args);

    Toplevel::new(|s| async move {
        s.start(SubsystemBuilder::new("Player", move |subsys| {
            run(subsys, args, config)
        }));
    })
    .catch_signals()
    .handle_shutdown_requests(Duration::from_millis(1000))
    .await
    .map_err(Into::into)
}
