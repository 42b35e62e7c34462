// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use base::{Config, Error};
use headhunter::{HeadHunterClient, HeadHunterSource};
use stats::{collect_statistics, render_table};
use superjob::{SuperJobClient, SuperJobSource};
use tracing::{info, instrument, warn};

const HEADHUNTER_SITE: &str = "hh.ru";
const SUPERJOB_SITE: &str = "SuperJob.ru";

pub struct ServiceRunner {
  config: Config,
  sj_api_token: Option<String>,
}

impl ServiceRunner {
  pub fn new(config: Config, sj_api_token: Option<String>) -> Self {
    Self {
      config,
      sj_api_token,
    }
  }

  /// Опрашивает сервисы по очереди; ошибка одного не мешает другому.
  #[instrument(skip(self))]
  pub async fn run(&self) {
    let result = self.headhunter_table().await;
    println!("{}", report(HEADHUNTER_SITE, result));

    let result = self.superjob_table().await;
    println!("{}", report(SUPERJOB_SITE, result));
  }

  async fn headhunter_table(&self) -> Result<String, Error> {
    info!("Collecting hh.ru statistics");
    let client = HeadHunterClient::new(self.config.headhunter.clone(), self.config.timeout())?;
    let source = HeadHunterSource::new(self.config.clone(), client);

    let rates = source.currency_rates().await?;
    let statistics =
      collect_statistics(&self.config.languages, &source, |range| rates.estimate(range)).await?;

    Ok(render_table(&statistics, &self.config.headhunter.title))
  }

  async fn superjob_table(&self) -> Result<String, Error> {
    let Some(token) = self.sj_api_token.as_deref() else {
      warn!("SJ_API_TOKEN is not set");
      return Err(Error::InvalidApiKey);
    };

    info!("Collecting SuperJob statistics");
    let client = SuperJobClient::new(self.config.superjob.clone(), token, self.config.timeout())?;
    let source = SuperJobSource::new(self.config.clone(), client);

    let statistics = collect_statistics(&self.config.languages, &source, |range| {
      source.estimate_salary(range)
    })
    .await?;

    Ok(render_table(&statistics, &self.config.superjob.title))
  }
}

/// Таблица либо диагностика для сервиса, который не удалось опросить.
fn report(site: &str, result: Result<String, Error>) -> String {
  match result {
    Ok(table) => table,
    Err(Error::Timeout) => format!("Get vacancies from {}\nError: Timeout expired", site),
    Err(err) => {
      warn!("{} failed: {:?}", site, err);
      format!("Get vacancies from {}\nSomething went wrong: {}", site, err)
    }
  }
}
