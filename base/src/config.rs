// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

pub const DEFAULT_CONFIG_PATH: &str = "salaries.toml";
const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
  pub languages: Vec<String>,
  pub search_prefix: String,
  pub timeout_secs: u64,
  pub headhunter: HeadHunterConfig,
  pub superjob: SuperJobConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
  pub title: String,
  pub base_url: String,
  pub area: u32,
  pub per_page: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
  pub title: String,
  pub base_url: String,
  pub town: String,
  pub count: u32,
  pub currency: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      languages: [
        "Python",
        "JavaScript",
        "Java",
        "Ruby",
        "PHP",
        "C++",
        "C#",
        "Go",
        "Scala",
        "Swift",
        "1С",
      ]
      .into_iter()
      .map(String::from)
      .collect(),
      search_prefix: "программист".into(),
      timeout_secs: 10,
      headhunter: HeadHunterConfig::default(),
      superjob: SuperJobConfig::default(),
    }
  }
}

impl Default for HeadHunterConfig {
  fn default() -> Self {
    Self {
      title: "HeadHunter Moscow".into(),
      base_url: "https://api.hh.ru".into(),
      area: 1,
      per_page: MAX_PAGE_SIZE,
    }
  }
}

impl Default for SuperJobConfig {
  fn default() -> Self {
    Self {
      title: "SuperJob Moscow".into(),
      base_url: "https://api.superjob.ru/2.0".into(),
      town: "Москва".into(),
      count: MAX_PAGE_SIZE,
      currency: "rub".into(),
    }
  }
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
    let content = fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    config.validate()?;
    debug!("Loaded configuration successfully");
    Ok(config)
  }

  /// Читает конфигурацию, если файл существует, иначе возвращает значения по умолчанию.
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
    let path = path.as_ref();
    if path.exists() {
      Self::from_file(path)
    } else {
      debug!("{} not found, using default configuration", path.display());
      Ok(Self::default())
    }
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }

  /// Поисковая фраза для языка, например "программист Python".
  pub fn search_text(&self, language: &str) -> String {
    if self.search_prefix.is_empty() {
      language.to_string()
    } else {
      format!("{} {}", self.search_prefix, language)
    }
  }

  fn validate(&self) -> Result<(), Error> {
    if self.languages.is_empty() {
      return Err(Error::ConfigError("languages must not be empty".into()));
    }
    if self.timeout_secs == 0 {
      return Err(Error::ConfigError("timeout_secs must be positive".into()));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&self.headhunter.per_page) {
      return Err(Error::ConfigError(format!(
        "headhunter.per_page must be within 1..={}",
        MAX_PAGE_SIZE
      )));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&self.superjob.count) {
      return Err(Error::ConfigError(format!(
        "superjob.count must be within 1..={}",
        MAX_PAGE_SIZE
      )));
    }
    Ok(())
  }
}
