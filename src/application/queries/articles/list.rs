use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, OffsetPage},
    error::ApplicationResult,
};

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

pub struct ListArticlesQuery {
    pub limit: u32,
    pub offset: u32,
}

impl ArticleQueryService {
    /// Articles in the default `-order, -created_date` ordering.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<OffsetPage<ArticleDto>> {
        let limit = normalize_limit(query.limit);

        let mut records = self
            .read_repo
            .list(limit.saturating_add(1), query.offset)
            .await?;

        let has_more = records.len() > limit as usize;
        records.truncate(limit as usize);

        let items = records.into_iter().map(Into::into).collect();
        Ok(OffsetPage::new(items, limit, query.offset, has_more))
    }
}

fn normalize_limit(limit: u32) -> u32 {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}
