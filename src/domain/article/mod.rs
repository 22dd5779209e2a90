pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleChanges, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleDescription, ArticleField, ArticleId, ArticleOrder, ArticleTitle, TITLE_MAX_CHARS,
};
