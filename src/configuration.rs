use actix_web::http::{header::HeaderName, Method, Uri};
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::cors::CorsError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app_name: String,
    pub app_description: String,
    pub app_host: String,
    pub app_port: u16,
    pub database: DatabaseSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    // mongodb://<username>:<password>@<host>:<port>
    pub url: String,
    pub database_name: String,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_secs: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Intelligent Exam Paper Generator".to_string(),
            app_description: "Intelligent Exam Paper Generator with Multi-Agent AI".to_string(),
            app_host: "0.0.0.0".to_string(),
            app_port: 8000,
            database: DatabaseSettings::default(),
            cors: CorsSettings::default(),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database_name: "exam_paper_generator".to_string(),
            connect_timeout_secs: 10,
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: strings(&[
                "http://localhost:5173",
                "http://localhost:3000",
                "http://127.0.0.1:5173",
                "http://127.0.0.1:3000",
                "https://exam-paper.onrender.com",
            ]),
            allowed_methods: strings(&["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"]),
            allowed_headers: strings(&[
                "Content-Type",
                "Authorization",
                "Accept",
                "Origin",
                "X-Requested-With",
            ]),
            expose_headers: strings(&["Content-Type", "Authorization"]),
            allow_credentials: true,
            max_age_secs: 3600,
        }
    }
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

impl CorsSettings {
    /// Rejects policies that actix-cors would only refuse at request time,
    /// or that browsers ignore.
    pub fn validate(&self) -> Result<(), CorsError> {
        if self.allow_credentials && self.allowed_origins.iter().any(|origin| origin == "*") {
            return Err(CorsError::WildcardWithCredentials);
        }

        if let Some(origin) = self
            .allowed_origins
            .iter()
            .find(|origin| origin.as_str() != "*" && !is_origin(origin))
        {
            return Err(CorsError::InvalidOrigin(origin.clone()));
        }

        if let Some(method) = self
            .allowed_methods
            .iter()
            .find(|method| Method::from_bytes(method.as_bytes()).is_err())
        {
            return Err(CorsError::InvalidMethod(method.clone()));
        }

        if let Some(header) = self
            .allowed_headers
            .iter()
            .chain(self.expose_headers.iter())
            .find(|header| HeaderName::from_bytes(header.as_bytes()).is_err())
        {
            return Err(CorsError::InvalidHeader(header.clone()));
        }

        Ok(())
    }
}

fn is_origin(origin: &str) -> bool {
    origin
        .parse::<Uri>()
        .map(|uri| uri.scheme().is_some() && uri.authority().is_some())
        .unwrap_or(false)
}

/// Well-known unprefixed variables the deployment platform sets.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub port: Option<String>,
    pub mongodb_url: Option<String>,
    pub database_name: Option<String>,
    pub app_name: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT").ok(),
            mongodb_url: std::env::var("MONGODB_URL").ok(),
            database_name: std::env::var("DATABASE_NAME").ok(),
            app_name: std::env::var("APP_NAME").ok(),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.{yaml,toml,json} is optional, every field has a default
    let builder = config::Config::builder()
        .add_source(File::with_name("configuration").required(false))
        .add_source(
            Environment::with_prefix("EXAM")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins"),
        );

    build_configuration(builder, EnvOverrides::from_env())
}

pub fn build_configuration(
    builder: ConfigBuilder<DefaultState>,
    overrides: EnvOverrides,
) -> Result<Settings, ConfigError> {
    builder
        .set_override_option("app_port", overrides.port)?
        .set_override_option("database.url", overrides.mongodb_url)?
        .set_override_option("database.database_name", overrides.database_name)?
        .set_override_option("app_name", overrides.app_name)?
        .build()?
        .try_deserialize()
}
