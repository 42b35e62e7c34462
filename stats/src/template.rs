// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::aggregate::Statistics;
use tracing::{debug, instrument};

const HEADER: [&str; 4] = [
  "Язык программирования",
  "Вакансий найдено",
  "Вакансий обработано",
  "Средняя зарплата",
];

#[instrument(skip(statistics))]
pub fn render_table(statistics: &Statistics, title: &str) -> String {
  let mut rows: Vec<[String; 4]> = vec![HEADER.map(String::from)];
  rows.extend(statistics.iter().map(|(language, stats)| {
    [
      language.to_string(),
      stats.vacancies_found.to_string(),
      stats.vacancies_processed.to_string(),
      stats.average_salary.to_string(),
    ]
  }));

  let widths: Vec<usize> = (0..HEADER.len())
    .map(|col| {
      rows
        .iter()
        .map(|row| row[col].chars().count())
        .max()
        .unwrap_or(0)
    })
    .collect();

  let border = widths
    .iter()
    .map(|w| "-".repeat(w + 2))
    .collect::<Vec<_>>()
    .join("+");
  let border = format!("+{}+", border);

  let mut table = String::new();
  table.push_str(&title_border(&border, title));
  table.push('\n');

  for (idx, row) in rows.iter().enumerate() {
    let cells: Vec<String> = row
      .iter()
      .zip(&widths)
      .map(|(cell, width)| format!(" {}{} ", cell, " ".repeat(width - cell.chars().count())))
      .collect();
    table.push_str(&format!("|{}|\n", cells.join("|")));

    if idx == 0 {
      table.push_str(&border);
      table.push('\n');
    }
  }

  table.push_str(&border);
  debug!("Rendered table with {} rows", rows.len() - 1);
  table
}

/// Вписывает заголовок в верхнюю рамку, если он помещается между углами.
fn title_border(border: &str, title: &str) -> String {
  let border: Vec<char> = border.chars().collect();
  let title: Vec<char> = title.chars().collect();

  if title.is_empty() || title.len() > border.len() - 2 {
    return border.into_iter().collect();
  }

  border[..1]
    .iter()
    .chain(title.iter())
    .chain(border[1 + title.len()..].iter())
    .collect()
}
