#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use once_cell::sync::Lazy;

use vastraflow::config::{get_configuration, Configuration};
use vastraflow::mail::{Email, MailError, Mailer};
use vastraflow::startup::AppServer;
use vastraflow::telemetry::{get_subscriber, init_subscriber};

static TRACING: Lazy<()> = Lazy::new(|| {
    let installed = if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber("test", "debug", std::io::stdout))
    } else {
        init_subscriber(get_subscriber("test", "debug", std::io::sink))
    };
    installed.expect("Failed to install the test subscriber");
});

/// Keeps every email it is asked to send.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<Email>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

pub struct TestApp {
    pub config: Configuration,
    pub addr: String,
    pub port: u16,
    pub mailer: Arc<RecordingMailer>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub fn contact_url(&self) -> String {
        format!("{}/send-email", &self.addr)
    }

    pub async fn post_contact(&self, body: String) -> reqwest::Response {
        self.api_client
            .post(&self.contact_url())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_contact_multipart(
        &self,
        form: reqwest::multipart::Form,
    ) -> reqwest::Response {
        self.api_client
            .post(&self.contact_url())
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub fn sent_emails(&self) -> Vec<Email> {
        self.mailer.sent()
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}

fn test_configuration() -> Configuration {
    let mut c = get_configuration().expect("should load configuration");
    c.application.port = 0;
    c
}

/// Spawns the app with an in-memory mailer on a random port.
pub async fn spawn_app() -> TestApp {
    let mailer = Arc::new(RecordingMailer::default());
    spawn_app_with(test_configuration(), mailer.clone(), mailer).await
}

/// Spawns the app around a mailer that fails the way `mailer` does.
pub async fn spawn_app_with_mailer(mailer: Arc<dyn Mailer>) -> TestApp {
    spawn_app_with(test_configuration(), mailer, Arc::new(RecordingMailer::default())).await
}

/// Spawns the app with real SMTP delivery, configured by `configure`.
pub async fn spawn_app_with_smtp(configure: impl FnOnce(&mut Configuration)) -> TestApp {
    Lazy::force(&TRACING);

    let mut configuration = test_configuration();
    configure(&mut configuration);

    let server = AppServer::build(configuration.clone())
        .await
        .expect("should have created server");
    finish_spawn(configuration, server, Arc::new(RecordingMailer::default()))
}

async fn spawn_app_with(
    configuration: Configuration,
    mailer: Arc<dyn Mailer>,
    recorder: Arc<RecordingMailer>,
) -> TestApp {
    Lazy::force(&TRACING);

    let server = AppServer::build_with_mailer(configuration.clone(), mailer)
        .await
        .expect("should have created server");
    finish_spawn(configuration, server, recorder)
}

fn finish_spawn(
    configuration: Configuration,
    server: AppServer,
    recorder: Arc<RecordingMailer>,
) -> TestApp {
    let port = server.port();
    let addr = format!("http://{}", server.to_server_address());
    let _ = tokio::spawn(server.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        config: configuration,
        addr,
        port,
        mailer: recorder,
        api_client,
    }
}
