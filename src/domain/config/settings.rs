use std::{str::FromStr, time::Duration};

use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_S3_REGION: &str = "ap-northeast-2";
const DEFAULT_DOWNLOAD_URL_TTL_SECS: u64 = 600;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;
const DEFAULT_YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const DEFAULT_YOUTUBE_REGION_CODE: &str = "KR";
const DEFAULT_YOUTUBE_MAX_RESULTS: u8 = 10;
const DEFAULT_SHORTS_CACHE_TTL_SECS: u64 = 3600;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct S3Settings {
    pub endpoint: Option<String>,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket_name: String,
    pub download_url_ttl: Duration,
}

#[derive(Debug, Clone)]
pub struct YoutubeSettings {
    pub api_key: String,
    pub base_url: String,
    pub region_code: String,
    pub max_results: u8,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub database_url: String,
    pub redis_url: Option<String>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub max_upload_bytes: usize,
    pub shorts_cache_ttl: Duration,
    pub s3: S3Settings,
    pub youtube: YoutubeSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let max_results: u8 = parse_or(&get, "YOUTUBE_MAX_RESULTS", DEFAULT_YOUTUBE_MAX_RESULTS)?;
        if !(1..=50).contains(&max_results) {
            return Err(ConfigError::Invalid {
                name: "YOUTUBE_MAX_RESULTS",
                value: max_results.to_string(),
            });
        }

        Ok(Settings {
            port: parse_or(&get, "PORT", DEFAULT_PORT)?,
            database_url: require("DATABASE_URL")?,
            redis_url: get("REDIS_URL"),
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS").map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
            max_upload_bytes: parse_or(&get, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            shorts_cache_ttl: Duration::from_secs(parse_or(
                &get,
                "SHORTS_CACHE_TTL_SECS",
                DEFAULT_SHORTS_CACHE_TTL_SECS,
            )?),
            s3: S3Settings {
                endpoint: get("S3_ENDPOINT"),
                region: get("S3_REGION").unwrap_or_else(|| DEFAULT_S3_REGION.to_string()),
                access_key_id: require("S3_ACCESS_KEY_ID")?,
                secret_access_key: require("S3_SECRET_ACCESS_KEY")?,
                bucket_name: require("S3_BUCKET")?,
                download_url_ttl: Duration::from_secs(parse_or(
                    &get,
                    "DOWNLOAD_URL_TTL_SECS",
                    DEFAULT_DOWNLOAD_URL_TTL_SECS,
                )?),
            },
            youtube: YoutubeSettings {
                api_key: require("YOUTUBE_API_KEY")?,
                base_url: get("YOUTUBE_API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_YOUTUBE_API_BASE_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                region_code: get("YOUTUBE_REGION_CODE")
                    .unwrap_or_else(|| DEFAULT_YOUTUBE_REGION_CODE.to_string()),
                max_results,
            },
        })
    }
}

fn parse_or<T, G>(get: &G, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn required() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DATABASE_URL", "postgres://localhost/talkak"),
            ("S3_ACCESS_KEY_ID", "key"),
            ("S3_SECRET_ACCESS_KEY", "secret"),
            ("S3_BUCKET", "videos"),
            ("YOUTUBE_API_KEY", "yt-key"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<Settings, ConfigError> {
        Settings::from_lookup(|name| vars.get(name).map(|v| v.to_string()))
    }

    #[test]
    fn applies_defaults_for_optional_values() {
        let settings = load(&required()).unwrap();

        assert_eq!(settings.port, 8080);
        assert!(settings.redis_url.is_none());
        assert!(settings.cors_allowed_origins.is_none());
        assert_eq!(settings.shorts_cache_ttl, Duration::from_secs(3600));
        assert_eq!(settings.s3.region, "ap-northeast-2");
        assert_eq!(settings.s3.download_url_ttl, Duration::from_secs(600));
        assert_eq!(settings.youtube.region_code, "KR");
        assert_eq!(settings.youtube.max_results, 10);
    }

    #[test]
    fn missing_required_value_is_reported_by_name() {
        let mut vars = required();
        vars.remove("YOUTUBE_API_KEY");
        assert_eq!(load(&vars).unwrap_err(), ConfigError::Missing("YOUTUBE_API_KEY"));

        vars = required();
        vars.insert("S3_BUCKET", "   ");
        assert_eq!(load(&vars).unwrap_err(), ConfigError::Missing("S3_BUCKET"));
    }

    #[test]
    fn rejects_unparsable_and_out_of_range_numbers() {
        let mut vars = required();
        vars.insert("PORT", "eighty");
        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid { name: "PORT", .. })
        ));

        let mut vars = required();
        vars.insert("YOUTUBE_MAX_RESULTS", "51");
        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid {
                name: "YOUTUBE_MAX_RESULTS",
                ..
            })
        ));
    }

    #[test]
    fn parses_origins_and_trims_base_url() {
        let mut vars = required();
        vars.insert("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example,");
        vars.insert("YOUTUBE_API_BASE_URL", "http://localhost:9000/yt/");
        let settings = load(&vars).unwrap();

        assert_eq!(
            settings.cors_allowed_origins,
            Some(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
        assert_eq!(settings.youtube.base_url, "http://localhost:9000/yt");
    }
}
