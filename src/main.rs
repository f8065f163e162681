use anyhow::Context;
use catalog::configuration::get_configuration;
use catalog::startup::run;
use catalog::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("catalog".into(), "info".into());
    init_subscriber(subscriber)?;

    let settings = get_configuration().context("Failed to read configuration.")?;

    tracing::info!(
        catalog = %settings.storage.catalog_path.display(),
        public_dir = %settings.storage.public_dir.display(),
        "Using catalog storage"
    );

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)
        .with_context(|| format!("failed to bind to {}", address))?;

    run(listener, settings).await?.await?;

    Ok(())
}
