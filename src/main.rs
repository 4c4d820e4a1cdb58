use clap::Parser;
use corpusbot::cli::{self, Config, Runner};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();

    if let Err(err) = Runner::new(config).run().await {
        cli::die(1, &format!("corpusbot: {err}"));
    }
}
