use std::{env::var, str::FromStr};

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} env param is missing")]
    Missing(&'static str),
    #[error("an error occurred while parsing {name} env param: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub web_url: String,
    pub auth_service_url: String,
    pub devtools_state_path: String,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();

        Ok(Config {
            port: parse_or("API_PORT", 3005)?,
            scheme: var_or("API_SCHEME", "http"),
            host: var_or("API_HOST", "0.0.0.0"),
            database_url: var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?,
            database_max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 10)?,
            web_url: var_or("NEXT_PUBLIC_WEB_URL", "http://localhost:3000"),
            auth_service_url: var_or("AUTH_SERVICE_URL", "http://localhost:3006"),
            devtools_state_path: var_or("DEVTOOLS_STATE_PATH", ".devtools/state.json"),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var_or(name: &str, default: &str) -> String {
    var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match var(name) {
        Ok(value) => parse_value(name, &value),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}
