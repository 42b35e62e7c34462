// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{models::VacanciesPage, API_KEY_HEADER};
use async_trait::async_trait;
use base::{Error, SuperJobConfig};
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, instrument};
use url::Url;

#[async_trait]
pub trait SuperJobApi: Send + Sync {
  async fn fetch_page(&self, keyword: &str, page: u32) -> Result<VacanciesPage, Error>;
}

#[derive(Debug, Clone)]
pub struct SuperJobClient {
  client: reqwest::Client,
  config: SuperJobConfig,
  timeout: Duration,
}

impl SuperJobClient {
  pub fn new(
    config: SuperJobConfig,
    api_token: impl Into<String>,
    timeout: Duration,
  ) -> Result<Self, Error> {
    let api_token = api_token.into();
    if api_token.trim().is_empty() {
      return Err(Error::InvalidApiKey);
    }

    let mut headers = HeaderMap::new();
    headers.insert(
      API_KEY_HEADER,
      HeaderValue::from_str(api_token.trim()).map_err(|_| Error::InvalidApiKey)?,
    );

    let client = reqwest::Client::builder()
      .default_headers(headers)
      .timeout(timeout)
      .build()?;

    Ok(Self {
      client,
      config,
      timeout,
    })
  }

  pub(crate) fn vacancies_url(&self, keyword: &str, page: u32) -> Result<Url, Error> {
    Ok(Url::parse_with_params(
      &format!("{}/vacancies/", self.config.base_url.trim_end_matches('/')),
      &[
        ("town", self.config.town.clone()),
        ("keyword", keyword.to_string()),
        ("count", self.config.count.to_string()),
        ("page", page.to_string()),
      ],
    )?)
  }
}

#[async_trait]
impl SuperJobApi for SuperJobClient {
  #[instrument(skip(self))]
  async fn fetch_page(&self, keyword: &str, page: u32) -> Result<VacanciesPage, Error> {
    let url = self.vacancies_url(keyword, page)?;
    debug!("GET {}", url);

    let response = timeout(self.timeout, self.client.get(url).send())
      .await
      .map_err(|_| Error::Timeout)??;

    let status = response.status();
    if !status.is_success() {
      error!("SuperJob request failed with status: {}", status);
      return Err(Error::HttpStatus(status));
    }

    Ok(response.json().await?)
  }
}
