use anyhow::{anyhow, Result};
use liveloc_core::{gateways::position::PositionOptions, usecases::CycleOptions};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};
use url::Url;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "liveloc.toml";

const ENV_NAME_API_BASE_URL: &str = "LIVELOC_API_BASE_URL";
const ENV_NAME_ACCESS_TOKEN: &str = "LIVELOC_ACCESS_TOKEN";

const DEFAULT_USER_AGENT: &str = concat!("liveloc/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct Config {
    pub backend: Backend,
    pub acquisition: PositionOptions,
    pub reverse_geocoding: ReverseGeocoding,
    pub position: Position,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides(
            env::var(ENV_NAME_API_BASE_URL).ok(),
            env::var(ENV_NAME_ACCESS_TOKEN).ok(),
        )?;
        Ok(cfg)
    }

    fn apply_env_overrides(
        &mut self,
        api_base_url: Option<String>,
        access_token: Option<String>,
    ) -> Result<()> {
        if let Some(url) = api_base_url {
            self.backend.api_base_url = parse_base_url(&url)?;
        }
        if let Some(token) = access_token.filter(|t| !t.trim().is_empty()) {
            self.backend.access_token = Some(token);
        }
        Ok(())
    }

    pub fn cycle_options(&self) -> CycleOptions {
        CycleOptions {
            position: self.acquisition,
            reverse_geocoding: self.reverse_geocoding.enabled,
            reverse_geocoding_timeout: self.reverse_geocoding.timeout,
        }
    }
}

pub struct Backend {
    pub api_base_url: Url,
    pub access_token: Option<String>,
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("api_base_url", &self.api_base_url.as_str())
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .finish()
    }
}

#[derive(Debug)]
pub struct ReverseGeocoding {
    pub enabled: bool,
    pub timeout: Duration,
    pub gateway: Option<ReverseGeocodingGateway>,
}

#[derive(Debug, Clone)]
pub enum ReverseGeocodingGateway {
    Nominatim { base_url: Url, user_agent: String },
}

#[derive(Debug)]
pub struct Position {
    pub gpsd_address: String,
}

fn parse_base_url(url: &str) -> Result<Url> {
    let url = Url::parse(url).map_err(|err| anyhow!("Invalid base URL '{url}': {err}"))?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("'{url}' cannot be used as a base URL"));
    }
    Ok(url)
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            backend,
            acquisition,
            reverse_geocoding,
            position,
            gateway,
        } = from;

        let raw::Backend {
            api_base_url,
            access_token,
        } = backend.unwrap_or_default();
        let backend = Backend {
            api_base_url: parse_base_url(&api_base_url)?,
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        };

        let raw::Acquisition {
            high_accuracy,
            timeout,
            max_age,
        } = acquisition.unwrap_or_default();
        if timeout.is_zero() {
            return Err(anyhow!("The acquisition timeout must not be zero"));
        }
        let acquisition = PositionOptions {
            high_accuracy,
            timeout,
            max_age,
        };

        let raw::ReverseGeocoding {
            enabled,
            timeout,
            gateway: gw_name,
        } = reverse_geocoding.unwrap_or_default();

        let gateway = match gw_name {
            Some(gw_name) => {
                let toml_name = gw_name.toml_name();
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::ReverseGeocodingGateway::Nominatim => {
                        let raw::Nominatim {
                            base_url,
                            user_agent,
                        } = gateway.nominatim.ok_or_else(|| {
                            anyhow!("Missing '{toml_name}' gateway configuration")
                        })?;
                        let base_url = base_url
                            .as_deref()
                            .unwrap_or(liveloc_gateways::nominatim::DEFAULT_BASE_URL);
                        ReverseGeocodingGateway::Nominatim {
                            base_url: parse_base_url(base_url)?,
                            user_agent: user_agent
                                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let reverse_geocoding = ReverseGeocoding {
            enabled,
            timeout,
            gateway,
        };

        let raw::Position { gpsd_address } = position.unwrap_or_default();
        let position = Position { gpsd_address };

        Ok(Self {
            backend,
            acquisition,
            reverse_geocoding,
            position,
        })
    }
}
