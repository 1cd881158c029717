//! Run configuration and generation requests
//!
//! A run is described by four `key=value` assignments:
//!
//! | key            | value                                      |
//! |----------------|--------------------------------------------|
//! | `file_path`    | output path                                |
//! | `seed_u8`      | comma-separated hex bytes, e.g. `00,1F,a0` |
//! | `length_u8`    | state size N in bytes (decimal)            |
//! | `types_of_arr` | comma-separated `kind:count`, e.g. `u64:5,f64:3` |
//!
//! The same configuration can be read from JSON.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conditioning::validate_state_size;
use crate::core::PrngError;

pub const KEY_FILE_PATH: &str = "file_path";
pub const KEY_SEED: &str = "seed_u8";
pub const KEY_LENGTH: &str = "length_u8";
pub const KEY_TYPES: &str = "types_of_arr";

const KNOWN_KEYS: [&str; 4] = [KEY_FILE_PATH, KEY_SEED, KEY_LENGTH, KEY_TYPES];

/// Kind of value a request draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    U64,
    F64,
}

impl FromStr for ValueKind {
    type Err = PrngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "u64" => Ok(ValueKind::U64),
            "f64" => Ok(ValueKind::F64),
            other => Err(PrngError::UnknownValueKind(other.to_string())),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::U64 => write!(f, "u64"),
            ValueKind::F64 => write!(f, "f64"),
        }
    }
}

/// Draw `count` values of `kind`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub kind: ValueKind,
    pub count: usize,
}

impl GenerationRequest {
    pub fn new(kind: ValueKind, count: usize) -> Self {
        Self { kind, count }
    }
}

impl FromStr for GenerationRequest {
    type Err = PrngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, count) = s
            .split_once(':')
            .ok_or_else(|| PrngError::parse(KEY_TYPES, s))?;
        if count.contains(':') {
            return Err(PrngError::parse(KEY_TYPES, s));
        }
        let kind = kind.parse()?;
        let count = count
            .parse::<usize>()
            .map_err(|_| PrngError::parse(KEY_TYPES, s))?;
        Ok(Self { kind, count })
    }
}

/// Parse `u64:5,f64:3` into requests, keeping their order
///
/// # Example
/// ```
/// use prng_core_rs::request::{parse_requests, GenerationRequest, ValueKind};
///
/// let requests = parse_requests("u64:5,f64:0").unwrap();
/// assert_eq!(requests, vec![
///     GenerationRequest::new(ValueKind::U64, 5),
///     GenerationRequest::new(ValueKind::F64, 0),
/// ]);
/// ```
pub fn parse_requests(s: &str) -> Result<Vec<GenerationRequest>, PrngError> {
    s.split(',').map(str::parse).collect()
}

/// Parse comma-separated hex bytes (`00,ff,7`) into a seed
pub fn parse_seed_hex(s: &str) -> Result<Vec<u8>, PrngError> {
    s.split(',')
        .map(|part| {
            if part.is_empty() || part.len() > 2 {
                return Err(PrngError::parse(KEY_SEED, part));
            }
            u8::from_str_radix(part, 16).map_err(|_| PrngError::parse(KEY_SEED, part))
        })
        .collect()
}

/// Everything one run needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub file_path: String,
    pub seed_u8: Vec<u8>,
    pub length_u8: usize,
    pub requests: Vec<GenerationRequest>,
}

#[derive(Deserialize)]
struct RawRequest {
    kind: String,
    count: usize,
}

#[derive(Deserialize)]
struct RawRunConfig {
    file_path: String,
    seed_u8: Vec<u8>,
    length_u8: usize,
    requests: Vec<RawRequest>,
}

impl RunConfig {
    /// Build from `key=value` assignments
    ///
    /// # Errors
    /// - argument-format errors for tokens without exactly one `=`, duplicate
    ///   keys, unknown keys and missing keys
    /// - parse errors for unparsable values
    /// - config errors for unknown value kinds or an invalid state size
    ///
    /// # Example
    /// ```
    /// use prng_core_rs::request::RunConfig;
    ///
    /// let config = RunConfig::from_assignments([
    ///     "file_path=out.txt",
    ///     "seed_u8=00",
    ///     "length_u8=64",
    ///     "types_of_arr=u64:1",
    /// ]).unwrap();
    /// assert_eq!(config.seed_u8, vec![0x00]);
    /// assert_eq!(config.length_u8, 64);
    /// ```
    pub fn from_assignments<I, S>(assignments: I) -> Result<Self, PrngError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values: HashMap<String, String> = HashMap::new();
        for token in assignments {
            let token = token.as_ref();
            let mut parts = token.split('=');
            let (key, value) = match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) if !key.is_empty() => (key, value),
                _ => return Err(PrngError::MalformedArgument(token.to_string())),
            };
            if !KNOWN_KEYS.contains(&key) {
                return Err(PrngError::UnknownKey(key.to_string()));
            }
            if values.insert(key.to_string(), value.to_string()).is_some() {
                return Err(PrngError::DuplicateKey(key.to_string()));
            }
        }

        let take = |key: &'static str| values.get(key).ok_or(PrngError::MissingKey(key));

        let file_path = take(KEY_FILE_PATH)?.clone();
        let seed_u8 = parse_seed_hex(take(KEY_SEED)?)?;
        let length_raw = take(KEY_LENGTH)?;
        let length_u8 = length_raw
            .parse::<usize>()
            .map_err(|_| PrngError::parse(KEY_LENGTH, length_raw))?;
        let requests = parse_requests(take(KEY_TYPES)?)?;

        let config = Self {
            file_path,
            seed_u8,
            length_u8,
            requests,
        };
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration
    ///
    /// Request kinds are read as plain strings and parsed afterwards, so an
    /// unknown kind is a config error rather than a JSON error.
    pub fn from_json(json: &str) -> Result<Self, PrngError> {
        let raw: RawRunConfig = serde_json::from_str(json)?;
        let requests = raw
            .requests
            .into_iter()
            .map(|request| Ok(GenerationRequest::new(request.kind.parse()?, request.count)))
            .collect::<Result<Vec<_>, PrngError>>()?;

        let config = Self {
            file_path: raw.file_path,
            seed_u8: raw.seed_u8,
            length_u8: raw.length_u8,
            requests,
        };
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn from_json_file(path: &Path) -> Result<Self, PrngError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check the engine preconditions before anything is written
    pub fn validate(&self) -> Result<(), PrngError> {
        validate_state_size(self.length_u8)?;
        if self.seed_u8.is_empty() {
            return Err(PrngError::EmptySeed);
        }
        Ok(())
    }
}
