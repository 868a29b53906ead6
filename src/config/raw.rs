use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("liveloc.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub backend: Option<Backend>,
    pub acquisition: Option<Acquisition>,
    pub reverse_geocoding: Option<ReverseGeocoding>,
    pub position: Option<Position>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Backend {
    pub api_base_url: String,
    pub access_token: Option<String>,
}

impl Default for Backend {
    fn default() -> Self {
        Config::default().backend.expect("Backend configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Acquisition {
    pub high_accuracy: bool,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub max_age: Duration,
}

impl Default for Acquisition {
    fn default() -> Self {
        Config::default()
            .acquisition
            .expect("Acquisition configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReverseGeocoding {
    pub enabled: bool,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    pub gateway: Option<ReverseGeocodingGateway>,
}

impl Default for ReverseGeocoding {
    fn default() -> Self {
        Config::default()
            .reverse_geocoding
            .expect("Reverse geocoding configuration")
    }
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReverseGeocodingGateway {
    Nominatim,
}

impl ReverseGeocodingGateway {
    pub const fn toml_name(self) -> &'static str {
        match self {
            Self::Nominatim => "nominatim",
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Position {
    pub gpsd_address: String,
}

impl Default for Position {
    fn default() -> Self {
        Config::default().position.expect("Position configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
}
