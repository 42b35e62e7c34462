// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::collections::HashMap;
use tracing::debug;

const ONLY_FROM_FACTOR: f64 = 1.2;
const ONLY_TO_FACTOR: f64 = 0.8;

/// Вилка зарплаты из вакансии в том виде, в каком её отдал сервис.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryRange {
  pub from: Option<f64>,
  pub to: Option<f64>,
  pub currency: Option<String>,
}

impl SalaryRange {
  pub fn new(from: Option<f64>, to: Option<f64>, currency: Option<impl Into<String>>) -> Self {
    Self {
      from,
      to,
      currency: currency.map(Into::into),
    }
  }

  /// Оценка зарплаты только для вакансий в указанной валюте.
  pub fn estimate_in(&self, currency: &str) -> Option<f64> {
    match self.currency.as_deref() {
      Some(code) if code.eq_ignore_ascii_case(currency) => predict_salary(self.from, self.to),
      _ => None,
    }
  }
}

/// Ожидаемая зарплата по вилке. Нулевая граница считается отсутствующей.
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
  let from = from.filter(|v| *v > 0.0);
  let to = to.filter(|v| *v > 0.0);

  match (from, to) {
    (Some(from), Some(to)) => Some((from + to) / 2.0),
    (Some(from), None) => Some(from * ONLY_FROM_FACTOR),
    (None, Some(to)) => Some(to * ONLY_TO_FACTOR),
    (None, None) => None,
  }
}

/// Курсы валют относительно рубля в формате справочника hh.ru:
/// сумма в рублях = сумма / курс.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRates {
  rates: HashMap<String, f64>,
}

impl CurrencyRates {
  pub fn new<K: Into<String>>(rates: impl IntoIterator<Item = (K, f64)>) -> Self {
    Self {
      rates: rates
        .into_iter()
        .map(|(code, rate)| (code.into(), rate))
        .collect(),
    }
  }

  pub fn rate(&self, currency: &str) -> Option<f64> {
    self.rates.get(currency).copied()
  }

  pub fn len(&self) -> usize {
    self.rates.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rates.is_empty()
  }

  pub fn convert(&self, amount: Option<f64>, currency: &str) -> Option<f64> {
    let amount = amount?;
    match self.rate(currency) {
      Some(rate) if rate > 0.0 => Some(amount / rate),
      _ => {
        debug!("No usable rate for currency {}, skipping vacancy", currency);
        None
      }
    }
  }

  pub fn estimate(&self, range: &SalaryRange) -> Option<f64> {
    let currency = range.currency.as_deref()?;
    self.convert(predict_salary(range.from, range.to), currency)
  }
}
