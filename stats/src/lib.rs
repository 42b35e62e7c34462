// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod aggregate;
pub mod salary;
pub mod source;
pub mod template;

pub use aggregate::{collect_statistics, LanguageStatistics, Statistics};
pub use salary::{predict_salary, CurrencyRates, SalaryRange};
pub use source::{VacancyBatch, VacancySource};
pub use template::render_table;
