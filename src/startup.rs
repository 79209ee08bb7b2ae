use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;

use crate::config::Configuration;
use crate::domain::ExposeDiagnostics;
use crate::mail::{Mailer, SmtpMailer};
use crate::run::run;

pub struct AppServer {
    port: u16,
    address: String,
    server: Server,
}

impl AppServer {
    /// Builds the server with an SMTP mailer configured from `configuration.email`.
    pub async fn build(configuration: Configuration) -> Result<Self, anyhow::Error> {
        let mailer = SmtpMailer::from_settings(&configuration.email)?;
        Ok(Self::build_with_mailer(configuration, Arc::new(mailer)).await?)
    }

    pub async fn build_with_mailer(
        configuration: Configuration,
        mailer: Arc<dyn Mailer>,
    ) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        ))?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            "Starting service on address: {}:{}",
            configuration.application.host,
            port
        );
        if configuration.application.expose_diagnostics {
            tracing::warn!("Transport diagnostics will be included in error responses");
        }

        let address = configuration.application.host.clone();
        let server = run(
            listener,
            mailer,
            configuration.application.landing_page,
            ExposeDiagnostics(configuration.application.expose_diagnostics),
            configuration.application.form_limit_bytes,
        )?;

        Ok(Self {
            port,
            address,
            server,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn address(&self) -> String {
        self.address.clone()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
