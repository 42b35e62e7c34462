// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{client::SuperJobApi, models::Vacancy};
use async_trait::async_trait;
use base::{Config, Error};
use stats::{SalaryRange, VacancyBatch, VacancySource};
use tracing::{info, instrument};

pub struct SuperJobSource<T: SuperJobApi> {
  config: Config,
  client: T,
}

impl<T: SuperJobApi> SuperJobSource<T> {
  pub fn new(config: Config, client: T) -> Self {
    Self { config, client }
  }

  /// Вакансии в других валютах в статистику не попадают.
  pub fn estimate_salary(&self, range: &SalaryRange) -> Option<f64> {
    range.estimate_in(&self.config.superjob.currency)
  }
}

#[async_trait]
impl<T: SuperJobApi> VacancySource for SuperJobSource<T> {
  #[instrument(skip(self))]
  async fn fetch_vacancies(&self, language: &str) -> Result<VacancyBatch, Error> {
    let keyword = self.config.search_text(language);
    let mut salaries = Vec::new();
    let mut page = 0;

    loop {
      let content = self.client.fetch_page(&keyword, page).await?;
      salaries.extend(content.objects.iter().map(Vacancy::salary_range));
      page += 1;

      if !content.more {
        info!("SuperJob: {} pages, {} vacancies found for {}", page, content.total, language);
        return Ok(VacancyBatch {
          found: content.total,
          salaries,
        });
      }
    }
  }
}
