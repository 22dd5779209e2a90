use crate::domain::errors::DomainError;

const CNT_ARTICLE_TITLE_BLANK: &str = "articles_title_not_blank_chk";
const CNT_ARTICLE_DATES: &str = "articles_updated_after_created_chk";

#[must_use]
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_TITLE_BLANK => DomainError::validation("title cannot be empty"),
                    CNT_ARTICLE_DATES => {
                        DomainError::validation("updated_date cannot precede created_date")
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    // string_data_right_truncation
                    "22001" => return DomainError::validation("value too long for column"),
                    "23502" => return DomainError::validation("required column is missing"),
                    "23514" => return DomainError::validation("check constraint violated"),
                    "23505" => return DomainError::conflict("duplicate value"),
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::not_found("row not found"),
        _ => DomainError::Persistence(err.to_string()),
    }
}
