// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::Error;
use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::debug;

pub(in crate::dotenv) static INIT: Once = Once::new();
pub(in crate::dotenv) static DEFAULT_FILENAME: &str = ".env";

#[derive(Debug, Default)]
pub struct Dotenv {
  vars: HashMap<String, String>,
}

impl Dotenv {
  pub fn new() -> Self {
    Self {
      vars: HashMap::new(),
    }
  }

  /// Загружает переменные окружения из файла .env
  ///
  /// # Аргументы
  /// * `filename` - Необязательный путь к файлу .env. Если передано None, используется ".env" по умолчанию.
  ///
  /// # Возвращает
  /// * `Result<(), Error>` - Ok(()) в случае успеха, Error в противном случае.
  pub fn load_from_file<P: AsRef<Path>>(&mut self, filename: Option<P>) -> Result<(), Error> {
    let path = filename.map_or_else(
      || PathBuf::from(DEFAULT_FILENAME),
      |p| p.as_ref().to_path_buf(),
    );

    if !path.exists() {
      return Err(Error::PathNotFound(path));
    }

    let file = File::open(&path)?;
    let reader = BufReader::new(file);

    for (line_num, line) in reader.lines().enumerate() {
      let line = line?;
      let trimmed = line.trim();

      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }

      let (key, value) = parse_line(trimmed)
        .map_err(|err| Error::ConfigError(format!("Error on line {}: {}", line_num + 1, err)))?;
      self.vars.insert(key, value);
    }

    Ok(())
  }

  /// Переносит прочитанные значения в окружение процесса.
  /// Уже заданные переменные не перезаписываются.
  pub fn set_env_vars(&self) {
    for (key, value) in &self.vars {
      if env::var_os(key).is_none() {
        env::set_var(key, value);
      }
    }
  }

  pub fn get(&self, key: &str) -> Option<&String> {
    self.vars.get(key)
  }
}

fn parse_line(line: &str) -> Result<(String, String), String> {
  let line = line.strip_prefix("export ").unwrap_or(line);
  let (key, value) = line
    .split_once('=')
    .ok_or_else(|| "Invalid format: missing '='".to_string())?;

  let key = key.trim();
  if key.is_empty() {
    return Err("Empty key".to_string());
  }

  let value = value.trim().trim_matches('"').trim_matches('\'').to_string();

  Ok((key.to_string(), value))
}

/// Загружает `.env` из рабочего каталога один раз за процесс.
/// Отсутствие файла ошибкой не считается.
pub fn load() -> Result<(), Error> {
  let mut result = Ok(());
  INIT.call_once(|| result = load_optional(DEFAULT_FILENAME));
  result
}

fn load_optional<P: AsRef<Path>>(path: P) -> Result<(), Error> {
  let mut config = Dotenv::new();
  match config.load_from_file(Some(path)) {
    Ok(()) => config.set_env_vars(),
    Err(Error::PathNotFound(path)) => {
      debug!("No {} file, using process environment", path.display())
    }
    Err(err) => return Err(err),
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;
  use std::sync::{Arc, Mutex};

  #[test]
  fn parses_quoted_and_exported_values() {
    assert_eq!(
      parse_line("SJ_API_TOKEN=\"v3.r.123\"").unwrap(),
      ("SJ_API_TOKEN".to_string(), "v3.r.123".to_string())
    );
    assert_eq!(
      parse_line("export NAME = 'value'").unwrap(),
      ("NAME".to_string(), "value".to_string())
    );
    assert_eq!(
      parse_line("URL=https://x?a=b").unwrap(),
      ("URL".to_string(), "https://x?a=b".to_string())
    );
  }

  #[test]
  fn rejects_lines_without_key_or_separator() {
    assert!(parse_line("JUSTTEXT").is_err());
    assert!(parse_line("=value").is_err());
  }

  #[test]
  fn loads_file_skipping_comments() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# comment").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "SJ_API_TOKEN=secret").unwrap();

    let mut dotenv = Dotenv::new();
    dotenv.load_from_file(Some(file.path())).unwrap();
    assert_eq!(dotenv.get("SJ_API_TOKEN").map(String::as_str), Some("secret"));
  }

  #[test]
  fn reports_line_number_of_bad_entry() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "A=1").unwrap();
    writeln!(file, "broken").unwrap();

    let err = Dotenv::new()
      .load_from_file(Some(file.path()))
      .unwrap_err();
    assert!(err.to_string().contains("line 2"));
  }

  #[derive(Clone, Default)]
  struct Captured(Arc<Mutex<Vec<u8>>>);

  impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
      self.0.lock().unwrap().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn missing_optional_file_is_logged_not_failed() {
    let dir = tempfile::tempdir().unwrap();
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
      .with_max_level(tracing::Level::DEBUG)
      .with_ansi(false)
      .with_writer(move || writer.clone())
      .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
      load_optional(dir.path().join(".env"))
    });

    assert!(result.is_ok());
    let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("using process environment"), "logs: {}", logs);
  }

  #[test]
  fn malformed_optional_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "broken").unwrap();
    assert!(matches!(load_optional(file.path()), Err(Error::ConfigError(_))));
  }

  #[test]
  fn missing_file_is_path_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dotenv::new()
      .load_from_file(Some(dir.path().join(".env")))
      .unwrap_err();
    assert!(matches!(err, Error::PathNotFound(_)));
  }
}
