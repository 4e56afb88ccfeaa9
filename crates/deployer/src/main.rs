use clap::Parser;

#[tokio::main]
async fn main() {
    let args = deployer::arguments::Arguments::parse();
    shared::tracing::initialize(
        "warn,deployer=debug,shared=debug",
        tracing::Level::ERROR.into(),
    );
    tracing::info!("running deployer with validated arguments:\n{}", args);
    if let Err(err) = deployer::run(args).await {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}
