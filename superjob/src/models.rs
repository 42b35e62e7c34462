// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;
use stats::SalaryRange;

#[derive(Debug, Deserialize, Clone)]
pub struct VacanciesPage {
  pub objects: Vec<Vacancy>,
  pub total: u64,
  pub more: bool,
}

/// Отсутствующая граница вилки приходит как 0 или null.
#[derive(Debug, Deserialize, Clone)]
pub struct Vacancy {
  #[serde(default)]
  pub payment_from: Option<f64>,
  #[serde(default)]
  pub payment_to: Option<f64>,
  #[serde(default)]
  pub currency: Option<String>,
}

impl Vacancy {
  pub fn salary_range(&self) -> SalaryRange {
    SalaryRange::new(self.payment_from, self.payment_to, self.currency.clone())
  }
}
