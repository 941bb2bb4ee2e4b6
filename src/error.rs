// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Zstd(ZstdError),
}

/// Specific error types for Zstandard decoding issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZstdError {
    /// The input does not start with a Zstandard frame header.
    NotZstandard,

    /// The frame references a dictionary the store cannot supply.
    MissingDictionary,

    /// The stream is truncated or fails its checksum.
    CorruptedFrame,

    /// I/O error while reading the source or writing the output.
    IoError(String),

    /// Generic decoder error with raw message.
    Other(String),
}

impl ZstdError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ZstdError::NotZstandard => "error-zstd-not-zstandard",
            ZstdError::MissingDictionary => "error-zstd-missing-dictionary",
            ZstdError::CorruptedFrame => "error-zstd-corrupted",
            ZstdError::IoError(_) => "error-zstd-io",
            ZstdError::Other(_) => "error-zstd-general",
        }
    }

    /// Categorizes a raw decoder message into a specific `ZstdError`.
    ///
    /// The `zstd` crate surfaces libzstd failures as plain strings, so the
    /// mapping is by substring.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("dictionary") {
            return ZstdError::MissingDictionary;
        }

        if msg_lower.contains("unknown frame descriptor") || msg_lower.contains("magic") {
            return ZstdError::NotZstandard;
        }

        if msg_lower.contains("no such file")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("i/o error")
        {
            return ZstdError::IoError(msg.to_string());
        }

        if msg_lower.contains("corrupt")
            || msg_lower.contains("checksum")
            || msg_lower.contains("truncated")
            || msg_lower.contains("src size incorrect")
        {
            return ZstdError::CorruptedFrame;
        }

        ZstdError::Other(msg.to_string())
    }
}

impl fmt::Display for ZstdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZstdError::NotZstandard => write!(f, "Not a Zstandard stream"),
            ZstdError::MissingDictionary => write!(f, "Required decoder dictionary not found"),
            ZstdError::CorruptedFrame => write!(f, "Zstandard frame is corrupted"),
            ZstdError::IoError(msg) => write!(f, "I/O error: {}", msg),
            ZstdError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Zstd(e) => write!(f, "Zstd Error: {}", e),
        }
    }
}

impl From<ZstdError> for Error {
    fn from(err: ZstdError) -> Self {
        Error::Zstd(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
