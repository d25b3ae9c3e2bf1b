use crate::configuration::Settings;
use crate::idempotency::InFlightSubmissions;
use crate::routes;
use crate::survey_api_client::SurveyApiClient;
use actix_web::cookie::Key;
use actix_web::{dev::Server, web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use secrecy::{ExposeSecret, Secret};
use std::net::TcpListener;
use tera::Tera;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let api_client = SurveyApiClient::new(
            configuration.survey_api.base_url.clone(),
            configuration.survey_api.timeout(),
        )?;
        let templates = Tera::new("templates/**/*.html")?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)?;
        //Retrieve the port assigned to us by the OS
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            api_client,
            templates,
            configuration.application.hmac_secret,
        )?;

        // We "save" the bound port in one of `Application`'s fields.
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A more expressive name that makes it clear that this function only returns when the application
    /// is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// actix-web uses a *type-map* to represent its application state: `web::Data<T>` is looked up by
/// the `TypeId` of `T` when a handler asks for it. The survey API client, the templates and the
/// set of in-flight submissions are shared that way by every worker.
pub fn run(
    listener: TcpListener,
    api_client: SurveyApiClient,
    templates: Tera,
    hmac_secret: Secret<String>,
) -> Result<Server, anyhow::Error> {
    // Wrap the shared state in a smart pointer
    let api_client = web::Data::new(api_client);
    let templates = web::Data::new(templates);
    let in_flight = web::Data::new(InFlightSubmissions::default());

    let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes()).map_err(|e| {
        anyhow::anyhow!("`application.hmac_secret` cannot sign cookies: {:?}", e)
    })?;
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let server = HttpServer::new(move || {
        App::new()
            // Middlewares are added using the `wrap` method on `App`
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .route("/", web::get().to(routes::survey_form))
            .route("/surveys", web::post().to(routes::submit_survey))
            .route("/results", web::get().to(routes::survey_results))
            .route("/health_check", web::get().to(routes::health_check))
            .app_data(api_client.clone())
            .app_data(templates.clone())
            .app_data(in_flight.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
