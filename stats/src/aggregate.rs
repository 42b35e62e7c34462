// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{salary::SalaryRange, source::VacancySource};
use error::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageStatistics {
  pub vacancies_found: u64,
  pub vacancies_processed: u64,
  pub average_salary: u64,
}

impl LanguageStatistics {
  /// Считает среднюю по оценкам зарплат; при нуле обработанных средняя равна 0.
  pub fn from_estimates(found: u64, estimates: impl IntoIterator<Item = f64>) -> Self {
    let (sum, count) = estimates
      .into_iter()
      .fold((0.0_f64, 0_u64), |(sum, count), salary| (sum + salary, count + 1));

    let average_salary = if count > 0 {
      (sum / count as f64).floor() as u64
    } else {
      0
    };

    Self {
      vacancies_found: found,
      vacancies_processed: count,
      average_salary,
    }
  }
}

/// Статистика по языкам в порядке, в котором языки были запрошены.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
  rows: Vec<(String, LanguageStatistics)>,
}

impl Statistics {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, language: impl Into<String>, stats: LanguageStatistics) {
    let language = language.into();
    match self.rows.iter_mut().find(|(name, _)| *name == language) {
      Some((_, existing)) => *existing = stats,
      None => self.rows.push((language, stats)),
    }
  }

  pub fn get(&self, language: &str) -> Option<&LanguageStatistics> {
    self
      .rows
      .iter()
      .find(|(name, _)| name == language)
      .map(|(_, stats)| stats)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStatistics)> {
    self.rows.iter().map(|(name, stats)| (name.as_str(), stats))
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }
}

#[instrument(skip(languages, source, estimate))]
pub async fn collect_statistics<S, F>(
  languages: &[String],
  source: &S,
  estimate: F,
) -> Result<Statistics, Error>
where
  S: VacancySource + ?Sized,
  F: Fn(&SalaryRange) -> Option<f64>,
{
  let mut statistics = Statistics::new();

  for language in languages {
    let batch = source.fetch_vacancies(language).await?;
    let stats =
      LanguageStatistics::from_estimates(batch.found, batch.salaries.iter().filter_map(&estimate));

    debug!(
      "{}: found {}, processed {}, average {}",
      language, stats.vacancies_found, stats.vacancies_processed, stats.average_salary
    );
    statistics.insert(language.as_str(), stats);
  }

  info!("Collected statistics for {} languages", statistics.len());
  Ok(statistics)
}
