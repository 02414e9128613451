//! Error codes reported inside the `*Error` members of the result unions.
//!
//! Each operation has its own code set. Strings outside the set are kept
//! verbatim in `Other` so they can be surfaced as `SaveArticleError::Unknown`.

use serde::Deserialize;

use crate::SaveArticleError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ArticleSavingRequestErrorCode {
    Unauthorized,
    NotFound,
    Other(String),
}

impl From<String> for ArticleSavingRequestErrorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "UNAUTHORIZED" => Self::Unauthorized,
            "NOT_FOUND" => Self::NotFound,
            _ => Self::Other(code),
        }
    }
}

impl From<ArticleSavingRequestErrorCode> for SaveArticleError {
    fn from(code: ArticleSavingRequestErrorCode) -> Self {
        match code {
            ArticleSavingRequestErrorCode::Unauthorized => SaveArticleError::Unauthorized,
            ArticleSavingRequestErrorCode::NotFound => SaveArticleError::BadData,
            ArticleSavingRequestErrorCode::Other(code) => SaveArticleError::unknown(code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CreateArticleErrorCode {
    UnableToFetch,
    UnableToParse,
    Unauthorized,
    NotAllowedToParse,
    PayloadTooLarge,
    UploadFileMissing,
    ElasticError,
    Other(String),
}

impl CreateArticleErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::UnableToFetch => "UNABLE_TO_FETCH",
            Self::UnableToParse => "UNABLE_TO_PARSE",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotAllowedToParse => "NOT_ALLOWED_TO_PARSE",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::UploadFileMissing => "UPLOAD_FILE_MISSING",
            Self::ElasticError => "ELASTIC_ERROR",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for CreateArticleErrorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "UNABLE_TO_FETCH" => Self::UnableToFetch,
            "UNABLE_TO_PARSE" => Self::UnableToParse,
            "UNAUTHORIZED" => Self::Unauthorized,
            "NOT_ALLOWED_TO_PARSE" => Self::NotAllowedToParse,
            "PAYLOAD_TOO_LARGE" => Self::PayloadTooLarge,
            "UPLOAD_FILE_MISSING" => Self::UploadFileMissing,
            "ELASTIC_ERROR" => Self::ElasticError,
            _ => Self::Other(code),
        }
    }
}

impl From<CreateArticleErrorCode> for SaveArticleError {
    fn from(code: CreateArticleErrorCode) -> Self {
        match code {
            CreateArticleErrorCode::Unauthorized => SaveArticleError::Unauthorized,
            other => SaveArticleError::unknown(other.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CreateArticleSavingRequestErrorCode {
    Unauthorized,
    BadData,
    Other(String),
}

impl From<String> for CreateArticleSavingRequestErrorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "UNAUTHORIZED" => Self::Unauthorized,
            "BAD_DATA" => Self::BadData,
            _ => Self::Other(code),
        }
    }
}

impl From<CreateArticleSavingRequestErrorCode> for SaveArticleError {
    fn from(code: CreateArticleSavingRequestErrorCode) -> Self {
        match code {
            CreateArticleSavingRequestErrorCode::Unauthorized => SaveArticleError::Unauthorized,
            CreateArticleSavingRequestErrorCode::BadData => SaveArticleError::BadData,
            CreateArticleSavingRequestErrorCode::Other(code) => SaveArticleError::unknown(code),
        }
    }
}
