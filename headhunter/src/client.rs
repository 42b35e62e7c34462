// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  models::{Dictionaries, VacanciesPage},
  USER_AGENT,
};
use async_trait::async_trait;
use base::{Error, HeadHunterConfig};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, instrument};
use url::Url;

#[async_trait]
pub trait HeadHunterApi: Send + Sync {
  async fn fetch_page(&self, text: &str, page: u32) -> Result<VacanciesPage, Error>;
  async fn fetch_dictionaries(&self) -> Result<Dictionaries, Error>;
}

#[derive(Debug, Clone)]
pub struct HeadHunterClient {
  client: reqwest::Client,
  config: HeadHunterConfig,
  timeout: Duration,
}

impl HeadHunterClient {
  pub fn new(config: HeadHunterConfig, timeout: Duration) -> Result<Self, Error> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .user_agent(USER_AGENT)
      .build()?;

    Ok(Self {
      client,
      config,
      timeout,
    })
  }

  pub(crate) fn vacancies_url(&self, text: &str, page: u32) -> Result<Url, Error> {
    Ok(Url::parse_with_params(
      &format!("{}/vacancies", self.config.base_url.trim_end_matches('/')),
      &[
        ("text", text.to_string()),
        ("area", self.config.area.to_string()),
        ("per_page", self.config.per_page.to_string()),
        ("page", page.to_string()),
      ],
    )?)
  }

  pub(crate) fn dictionaries_url(&self) -> Result<Url, Error> {
    Ok(Url::parse(&format!(
      "{}/dictionaries",
      self.config.base_url.trim_end_matches('/')
    ))?)
  }

  async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
    debug!("GET {}", url);
    let response = timeout(self.timeout, self.client.get(url).send())
      .await
      .map_err(|_| Error::Timeout)??;

    let status = response.status();
    if !status.is_success() {
      error!("hh.ru request failed with status: {}", status);
      return Err(Error::HttpStatus(status));
    }

    Ok(response.json().await?)
  }
}

#[async_trait]
impl HeadHunterApi for HeadHunterClient {
  #[instrument(skip(self))]
  async fn fetch_page(&self, text: &str, page: u32) -> Result<VacanciesPage, Error> {
    let url = self.vacancies_url(text, page)?;
    self.get(url).await
  }

  #[instrument(skip(self))]
  async fn fetch_dictionaries(&self) -> Result<Dictionaries, Error> {
    let url = self.dictionaries_url()?;
    self.get(url).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tokio::io::{AsyncReadExt, AsyncWriteExt};
  use tokio::net::TcpListener;
  use tokio::task::JoinHandle;

  fn client() -> HeadHunterClient {
    HeadHunterClient::new(HeadHunterConfig::default(), Duration::from_secs(5)).unwrap()
  }

  #[test]
  fn builds_search_url() {
    let url = client().vacancies_url("программист C++", 2).unwrap();
    let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    assert_eq!(url.path(), "/vacancies");
    assert_eq!(
      query,
      vec![
        ("text".to_string(), "программист C++".to_string()),
        ("area".to_string(), "1".to_string()),
        ("per_page".to_string(), "100".to_string()),
        ("page".to_string(), "2".to_string()),
      ]
    );
  }

  #[test]
  fn builds_dictionaries_url_without_double_slash() {
    let config = HeadHunterConfig {
      base_url: "https://api.hh.ru/".into(),
      ..HeadHunterConfig::default()
    };
    let client = HeadHunterClient::new(config, Duration::from_secs(5)).unwrap();
    assert_eq!(
      client.dictionaries_url().unwrap().as_str(),
      "https://api.hh.ru/dictionaries"
    );
  }

  /// Принимает одно соединение и отвечает заготовленным ответом;
  /// без ответа держит соединение открытым. Возвращает адрес и текст запроса.
  async fn serve_once(response: Option<&'static str>) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
      let (mut socket, _) = listener.accept().await.unwrap();
      let mut buf = vec![0u8; 8192];
      let n = socket.read(&mut buf).await.unwrap();
      let request = String::from_utf8_lossy(&buf[..n]).into_owned();

      match response {
        Some(response) => {
          socket.write_all(response.as_bytes()).await.unwrap();
          let _ = socket.shutdown().await;
        }
        None => tokio::time::sleep(Duration::from_secs(5)).await,
      }
      request
    });

    (format!("http://{}", addr), handle)
  }

  const UNAVAILABLE: &str =
    "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
  const NOT_JSON: &str = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 8\r\nConnection: close\r\n\r\nnot json";

  fn local_client(base_url: String, timeout: Duration) -> HeadHunterClient {
    let config = HeadHunterConfig {
      base_url,
      ..HeadHunterConfig::default()
    };
    HeadHunterClient::new(config, timeout).unwrap()
  }

  #[tokio::test]
  async fn error_status_becomes_http_status() {
    let (base_url, server) = serve_once(Some(UNAVAILABLE)).await;
    let client = local_client(base_url, Duration::from_secs(5));

    let err = client.fetch_page("программист Go", 0).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus(status) if status.as_u16() == 503));
    assert_eq!(err.to_string(), "503 Service Unavailable");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /vacancies?"));
    assert!(request.to_lowercase().contains("user-agent: salaries/"));
  }

  #[tokio::test]
  async fn stalled_server_becomes_timeout() {
    let (base_url, _server) = serve_once(None).await;
    let client = local_client(base_url, Duration::from_millis(300));

    let err = client.fetch_dictionaries().await.unwrap_err();
    assert!(err.is_timeout(), "unexpected error: {:?}", err);
  }

  #[tokio::test]
  async fn undecodable_body_becomes_parse_error() {
    let (base_url, _server) = serve_once(Some(NOT_JSON)).await;
    let client = local_client(base_url, Duration::from_secs(5));

    let err = client.fetch_dictionaries().await.unwrap_err();
    assert!(matches!(err, Error::ParseError(_)), "unexpected error: {:?}", err);
  }
}
