use survey_portal::configuration::get_configuration;
use survey_portal::startup::Application;
use survey_portal::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("survey_portal".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    // Bail out if we can't read configuration
    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Serving the survey portal");
    application.run_until_stopped().await?;

    Ok(())
}
