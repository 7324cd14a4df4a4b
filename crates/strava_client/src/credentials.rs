//! Credential record and the key=value file store behind it.
//!
//! The store file is the sole owner of long-term token state. `save` is a
//! read-modify-write over the whole file: token keys are rewritten in place,
//! comments and unrecognized lines are preserved verbatim, and keys that are
//! not present yet are appended. A partial-line edit never happens.

use crate::StravaError;
use secrecy::SecretString;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const CLIENT_ID_KEY: &str = "CLIENT_ID";
const CLIENT_SECRET_KEY: &str = "CLIENT_SECRET";
const ACCESS_TOKEN_KEY: &str = "ACCESS_TOKEN";
const REFRESH_TOKEN_KEY: &str = "REFRESH_TOKEN";
const EXPIRES_AT_KEY: &str = "EXPIRES_AT";

/// In-memory copy of the stored credentials. Only the token triple
/// (`access_token`, `refresh_token`, `expires_at`) ever mutates, and only as
/// a unit after a successful refresh.
#[derive(Clone, Debug)]
pub struct CredentialRecord {
    pub client_id: String,
    pub client_secret: SecretString,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
}

pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Result<CredentialRecord, StravaError>;

    /// Persist the record's token triple. Client id and secret never change
    /// and are left untouched in the underlying store.
    fn save(&self, record: &CredentialRecord) -> Result<(), StravaError>;
}

/// `CredentialStore` over a dotenv-style `KEY=value` text file.
#[derive(Clone, Debug)]
pub struct EnvFileStore {
    path: PathBuf,
}

impl EnvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_lines(&self) -> Result<Vec<String>, StravaError> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| StravaError::Config(format!("{}: {}", self.path.display(), e)))?;
        Ok(text.lines().map(str::to_string).collect())
    }
}

fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    trimmed.split_once('=').map(|(k, v)| (k.trim(), v.trim()))
}

fn require<'a>(map: &'a HashMap<&str, &str>, key: &str) -> Result<&'a str, StravaError> {
    match map.get(key) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(StravaError::Config(format!("{key} missing"))),
    }
}

impl CredentialStore for EnvFileStore {
    fn load(&self) -> Result<CredentialRecord, StravaError> {
        let lines = self.read_lines()?;
        let map: HashMap<&str, &str> = lines.iter().filter_map(|l| parse_entry(l)).collect();

        let client_id = require(&map, CLIENT_ID_KEY)?.to_string();
        let client_secret = SecretString::new(require(&map, CLIENT_SECRET_KEY)?.into());
        let access_token = require(&map, ACCESS_TOKEN_KEY)?.to_string();
        let refresh_token = require(&map, REFRESH_TOKEN_KEY)?.to_string();
        let expires_at = require(&map, EXPIRES_AT_KEY)?.parse::<i64>().map_err(|_| {
            StravaError::Config(format!("{EXPIRES_AT_KEY} must be an integer timestamp"))
        })?;

        Ok(CredentialRecord {
            client_id,
            client_secret,
            access_token,
            refresh_token,
            expires_at,
        })
    }

    fn save(&self, record: &CredentialRecord) -> Result<(), StravaError> {
        let updates = [
            (ACCESS_TOKEN_KEY, record.access_token.clone()),
            (REFRESH_TOKEN_KEY, record.refresh_token.clone()),
            (EXPIRES_AT_KEY, record.expires_at.to_string()),
        ];

        let existing = self.read_lines().unwrap_or_default();
        let mut written: Vec<&str> = Vec::new();
        let mut out: Vec<String> = Vec::with_capacity(existing.len() + updates.len());

        for line in &existing {
            let update = parse_entry(line)
                .and_then(|(key, _)| updates.iter().find(|(k, _)| *k == key));
            match update {
                Some((k, v)) => {
                    out.push(format!("{k}={v}"));
                    written.push(*k);
                }
                None => out.push(line.clone()),
            }
        }
        for (key, value) in &updates {
            if !written.contains(key) {
                out.push(format!("{key}={value}"));
            }
        }

        let mut text = out.join("\n");
        text.push('\n');
        std::fs::write(&self.path, text)
            .map_err(|e| StravaError::Persistence(format!("{}: {}", self.path.display(), e)))
    }
}
