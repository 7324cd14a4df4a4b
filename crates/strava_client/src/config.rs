use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub credentials_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let base_url =
            get("STRAVA_BASE_URL").unwrap_or_else(|| "https://www.strava.com".into());
        let credentials_path = get("STRAVA_ENV_FILE").unwrap_or_else(|| ".env".into());
        let output_dir = get("STRAVA_OUTPUT_DIR").unwrap_or_else(|| "summary".into());
        Self {
            base_url,
            credentials_path: PathBuf::from(credentials_path),
            output_dir: PathBuf::from(output_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_defaults() {
        let cfg = Config::from_env_with(|_| None);
        assert_eq!(cfg.base_url, "https://www.strava.com");
        assert_eq!(cfg.credentials_path, PathBuf::from(".env"));
        assert_eq!(cfg.output_dir, PathBuf::from("summary"));
    }

    #[test]
    fn from_env_reads_values() {
        let get = |k: &str| match k {
            "STRAVA_BASE_URL" => Some("http://localhost".into()),
            "STRAVA_ENV_FILE" => Some("/tmp/creds.env".into()),
            "STRAVA_OUTPUT_DIR" => Some("out".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get);
        assert_eq!(cfg.base_url, "http://localhost");
        assert_eq!(cfg.credentials_path, PathBuf::from("/tmp/creds.env"));
        assert_eq!(cfg.output_dir, PathBuf::from("out"));
    }
}
