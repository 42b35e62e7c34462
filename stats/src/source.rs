// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::salary::SalaryRange;
use async_trait::async_trait;
use error::Error;

/// Все вакансии одного поискового запроса, собранные со всех страниц.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancyBatch {
  pub found: u64,
  pub salaries: Vec<SalaryRange>,
}

#[async_trait]
pub trait VacancySource: Send + Sync {
  async fn fetch_vacancies(&self, language: &str) -> Result<VacancyBatch, Error>;
}
