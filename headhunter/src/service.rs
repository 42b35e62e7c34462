// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{client::HeadHunterApi, models::Vacancy};
use async_trait::async_trait;
use base::{Config, Error};
use stats::{CurrencyRates, VacancyBatch, VacancySource};
use tracing::{debug, info, instrument};

pub struct HeadHunterSource<T: HeadHunterApi> {
  config: Config,
  client: T,
}

impl<T: HeadHunterApi> HeadHunterSource<T> {
  pub fn new(config: Config, client: T) -> Self {
    Self { config, client }
  }

  /// Курсы валют из справочника hh.ru; запрашиваются один раз за запуск.
  #[instrument(skip(self))]
  pub async fn currency_rates(&self) -> Result<CurrencyRates, Error> {
    let dictionaries = self.client.fetch_dictionaries().await?;
    let rates = CurrencyRates::new(
      dictionaries
        .currency
        .into_iter()
        .map(|currency| (currency.code, currency.rate)),
    );
    debug!("Loaded {} currency rates", rates.len());
    Ok(rates)
  }
}

#[async_trait]
impl<T: HeadHunterApi> VacancySource for HeadHunterSource<T> {
  #[instrument(skip(self))]
  async fn fetch_vacancies(&self, language: &str) -> Result<VacancyBatch, Error> {
    let text = self.config.search_text(language);
    let mut salaries = Vec::new();
    let mut page = 0;

    loop {
      let content = self.client.fetch_page(&text, page).await?;
      salaries.extend(content.items.iter().map(Vacancy::salary_range));
      page += 1;

      if page >= content.pages {
        info!("hh.ru: {} pages, {} vacancies found for {}", page, content.found, language);
        return Ok(VacancyBatch {
          found: content.found,
          salaries,
        });
      }
    }
  }
}
