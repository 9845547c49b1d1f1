use std::collections::HashMap;
use std::fs;
use std::io::{Error, ErrorKind};
use std::net::SocketAddr;
use tracing::warn;

pub const DEFAULT_REGION: &str = "us-central1";
pub const DEFAULT_UID_HEADER: &str = "x-caller-uid";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub region: String,
    pub require_auth: bool,
    pub uid_header: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            region: DEFAULT_REGION.to_string(),
            require_auth: false,
            uid_header: DEFAULT_UID_HEADER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env_file(path: &str) -> Result<Self, Error> {
        let vars = load_dotenv(path)?;
        let defaults = Config::default();

        let host = vars.get("HOST").cloned().unwrap_or(defaults.host);

        let port = match vars.get("PORT") {
            Some(raw) => raw.parse().map_err(|_| {
                Error::new(ErrorKind::InvalidInput, format!("PORT is not a port: {raw}"))
            })?,
            None => defaults.port,
        };

        let region = vars.get("REGION").cloned().unwrap_or(defaults.region);

        let require_auth = match vars.get("REQUIRE_AUTH") {
            Some(raw) => parse_bool(raw).ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidInput,
                    format!("REQUIRE_AUTH is not a boolean: {raw}"),
                )
            })?,
            None => defaults.require_auth,
        };

        let uid_header = vars
            .get("UID_HEADER")
            .filter(|s| !s.is_empty())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or(defaults.uid_header);

        Ok(Config {
            host,
            port,
            region,
            require_auth,
            uid_header,
        })
    }

    /// Like `from_env_file`, but a missing file means "run with defaults"
    pub fn load(path: &str) -> Result<Self, Error> {
        match Config::from_env_file(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("{} not found, using default configuration", path);
                Ok(Config::default())
            }
            other => other,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, Error> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| Error::new(ErrorKind::InvalidInput, "HOST is not an IP address"))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn load_dotenv(path: &str) -> Result<HashMap<String, String>, Error> {
    let mut vars: HashMap<String, String> = HashMap::new();
    let content = fs::read_to_string(path)?;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            vars.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    Ok(vars)
}
