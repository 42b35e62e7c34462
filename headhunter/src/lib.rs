// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod client;
pub mod models;
pub mod service;

pub use client::{HeadHunterApi, HeadHunterClient};
pub use service::HeadHunterSource;

/// hh.ru отклоняет запросы без User-Agent.
pub(crate) const USER_AGENT: &str = "salaries/0.1 (ya@urdekcah.ru)";
