use printdock_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    printdock_api::telemetry::init_telemetry();

    let config = Config::from_env()?;

    // Initialize the application (database, storage, gateway, routes)
    let (_state, router) = printdock_api::setup::initialize_app(config.clone()).await?;

    printdock_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
