use secrecy::Secret;
use serde_aux::prelude::deserialize_number_from_string;

#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other,
            )),
        }
    }
}

/// How the connection to the SMTP relay is secured.
#[derive(serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportSecurity {
    /// TLS from the first byte, usually on port 465.
    #[serde(rename = "smtps", alias = "ssl")]
    Smtps,
    /// Plaintext connection upgraded with STARTTLS, usually on port 587.
    #[serde(rename = "starttls", alias = "tls")]
    StartTls,
    /// No encryption at all. Only meant for local relays.
    #[serde(rename = "none")]
    None,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailSettings {
    pub smtp_host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub smtp_port: u16,
    pub username: String,
    pub password: Secret<String>,
    pub security: TransportSecurity,
    pub from_email: String,
    pub from_name: String,
    pub to_email: String,
    pub to_name: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_ms: u64,
}

impl EmailSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct AppConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// Where non-POST requests to the contact endpoint are sent back to.
    pub landing_page: String,
    /// Adds the raw transport diagnostic to failed send responses.
    /// Never enable this outside of development.
    #[serde(default)]
    pub expose_diagnostics: bool,
    /// Largest contact form body accepted, urlencoded or multipart.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub form_limit_bytes: usize,
}

#[derive(serde::Deserialize, Clone)]
pub struct Configuration {
    pub application: AppConfig,
    pub email: EmailSettings,
}

pub fn get_configuration() -> Result<Configuration, config::ConfigError> {
    let mut settings = config::Config::default();

    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let configuration_directory = base_path.join("configuration");

    // Read in default configuration
    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    // Read in layer environment specific file.
    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    // e.g. `APP_EMAIL__PASSWORD=...` sets `email.password`.
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    settings.try_into()
}
