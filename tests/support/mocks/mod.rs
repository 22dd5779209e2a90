// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod capture;
pub mod time;

pub use article_repos::InMemoryArticleRepo;
pub use capture::{CapturedEvent, EventCapture};
pub use time::{SequenceClock, SteppingClock, fixed_now};
