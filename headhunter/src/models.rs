// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;
use stats::SalaryRange;

#[derive(Debug, Deserialize, Clone)]
pub struct VacanciesPage {
  pub items: Vec<Vacancy>,
  pub found: u64,
  pub pages: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Vacancy {
  #[serde(default)]
  pub salary: Option<Salary>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Salary {
  pub from: Option<f64>,
  pub to: Option<f64>,
  pub currency: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Dictionaries {
  pub currency: Vec<Currency>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Currency {
  pub code: String,
  pub rate: f64,
}

impl Vacancy {
  pub fn salary_range(&self) -> SalaryRange {
    self
      .salary
      .as_ref()
      .map(|s| SalaryRange::new(s.from, s.to, s.currency.clone()))
      .unwrap_or_default()
  }
}
