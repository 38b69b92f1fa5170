use crate::Result;
use crate::analysis::YearBasis;
use crate::catalog::CATALOG_BASE_URL;
use camino::{Utf8Path, Utf8PathBuf};
use core::ops::RangeInclusive;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File name looked up in the current directory when no configuration path is given
pub const DEFAULT_CONFIG_FILE: &str = "quakeplot.toml";

const CHART_DIMENSION_RANGE: RangeInclusive<u32> = 100..=10_000;

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Event search endpoint of the catalog service
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Overall timeout for the catalog request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Time zone used to assign events to calendar years
    #[serde(default)]
    pub year_basis: YearBasis,

    /// Width of each rendered chart in pixels
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    /// Height of each rendered chart in pixels
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
}

fn default_service_url() -> String {
    CATALOG_BASE_URL.to_string()
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(60)
}

const fn default_chart_width() -> u32 {
    1000
}

const fn default_chart_height() -> u32 {
    500
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `quakeplot.toml` in `base_dir` is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds invalid values
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        Self::load_with_source(base_dir, config_path).map(|(config, _)| config)
    }

    /// Like [`Config::load`], also returning the path of the file that was read
    ///
    /// The path is `None` when no file was found and the built-in defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds invalid values
    pub fn load_with_source(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<(Self, Option<Utf8PathBuf>)> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading quakeplot configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    // No config file found, use defaults
                    return Ok((Self::default(), None));
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading quakeplot configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok((config, Some(final_path)))
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the service URL is not an HTTP(S) URL, the timeout is zero,
    /// or a chart dimension is out of range
    pub(crate) fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.service_url).into_app_err_with(|| format!("service_url '{}' is not a valid URL", self.service_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(app_err!("service_url must use http or https, got '{}'", url.scheme()));
        }

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        if !CHART_DIMENSION_RANGE.contains(&self.chart_width) {
            return Err(app_err!(
                "chart_width must be between {} and {}, got {}",
                CHART_DIMENSION_RANGE.start(),
                CHART_DIMENSION_RANGE.end(),
                self.chart_width
            ));
        }

        if !CHART_DIMENSION_RANGE.contains(&self.chart_height) {
            return Err(app_err!(
                "chart_height must be between {} and {}, got {}",
                CHART_DIMENSION_RANGE.start(),
                CHART_DIMENSION_RANGE.end(),
                self.chart_height
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
