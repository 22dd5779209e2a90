pub mod database;
pub mod repositories;
pub mod templates;
pub mod time;
