// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod client;
pub mod models;
pub mod service;

pub use client::{SuperJobApi, SuperJobClient};
pub use service::SuperJobSource;

pub(crate) const API_KEY_HEADER: &str = "X-Api-App-Id";
