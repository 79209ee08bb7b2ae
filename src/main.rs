use vastraflow::config::get_configuration;
use vastraflow::startup::AppServer;
use vastraflow::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber(get_subscriber("vastraflow", "info", std::io::stdout))?;

    let configuration = get_configuration()?;
    let server = AppServer::build(configuration).await?;

    server.run_until_stopped().await?;

    Ok(())
}
