// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  /// Сервер ответил статусом вне диапазона 2xx.
  #[error("{0}")]
  HttpStatus(StatusCode),
  #[error("Timeout expired")]
  Timeout,
  #[error("HTTP error: {0}")]
  HttpError(reqwest::Error),
  #[error("Failed to parse response: {0}")]
  ParseError(String),
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("Invalid URL: {0}")]
  UrlError(#[from] url::ParseError),
  #[error("Invalid TOML: {0}")]
  TomlError(#[from] toml::de::Error),
  #[error("File not found: {}", .0.display())]
  PathNotFound(PathBuf),
  #[error("Invalid API key")]
  InvalidApiKey,
}

impl From<reqwest::Error> for Error {
  fn from(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      Error::Timeout
    } else if err.is_decode() {
      Error::ParseError(err.to_string())
    } else if let Some(status) = err.status() {
      Error::HttpStatus(status)
    } else {
      Error::HttpError(err)
    }
  }
}

impl Error {
  pub fn is_timeout(&self) -> bool {
    matches!(self, Error::Timeout)
  }
}
