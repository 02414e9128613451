//! Reduces raw GraphQL responses to a client-facing value or `SaveArticleError`.

use graphql_client::{GraphQLQuery, Response};
use serde_json::Value;

use crate::codes::{
    ArticleSavingRequestErrorCode, CreateArticleErrorCode, CreateArticleSavingRequestErrorCode,
};
use crate::operations::{
    ArticleSavingRequestData, ArticleSavingRequestResult, CreateArticleData, CreateArticleResult,
    CreateArticleSavingRequestData, CreateArticleSavingRequestResult, SavingRequest,
};
use crate::{SaveArticleError, SaveArticleStatus};

/// Decodes the response envelope of operation `Q`.
///
/// Top-level errors are checked before the data payload is looked at, so a
/// response carrying both always fails with the first reported error.
pub fn decode_response<Q: GraphQLQuery>(raw: Value) -> Result<Q::ResponseData, SaveArticleError> {
    let envelope: Response<Value> = serde_json::from_value(raw)
        .map_err(|err| SaveArticleError::unknown(format!("malformed response: {err}")))?;

    if let Some(first) = envelope.errors.as_deref().and_then(|errors| errors.first()) {
        return Err(SaveArticleError::unknown(first.message.clone()));
    }

    let data = match envelope.data {
        Some(Value::Null) | None => {
            return Err(SaveArticleError::unknown("response contained no data"));
        }
        Some(data) => data,
    };

    serde_json::from_value(data)
        .map_err(|err| SaveArticleError::unknown(format!("malformed payload: {err}")))
}

pub fn reduce_article_saving_request(
    data: ArticleSavingRequestData,
) -> Result<SaveArticleStatus, SaveArticleError> {
    match data.article_saving_request {
        ArticleSavingRequestResult::ArticleSavingRequestSuccess(success) => {
            Ok(status_of(success.article_saving_request))
        }
        ArticleSavingRequestResult::ArticleSavingRequestError(error) => Err(error
            .error_codes
            .into_iter()
            .next()
            .unwrap_or(ArticleSavingRequestErrorCode::NotFound)
            .into()),
    }
}

/// Returns the informational `created` flag; an already existing article is
/// still a success.
pub fn reduce_create_article(data: CreateArticleData) -> Result<bool, SaveArticleError> {
    match data.create_article {
        CreateArticleResult::CreateArticleSuccess(success) => Ok(success.created),
        CreateArticleResult::CreateArticleError(error) => Err(error
            .error_codes
            .into_iter()
            .next()
            .unwrap_or(CreateArticleErrorCode::UnableToParse)
            .into()),
    }
}

pub fn reduce_create_article_saving_request(
    data: CreateArticleSavingRequestData,
) -> Result<SaveArticleStatus, SaveArticleError> {
    match data.create_article_saving_request {
        CreateArticleSavingRequestResult::CreateArticleSavingRequestSuccess(success) => {
            Ok(status_of(success.article_saving_request))
        }
        CreateArticleSavingRequestResult::CreateArticleSavingRequestError(error) => Err(error
            .error_codes
            .into_iter()
            .next()
            .unwrap_or(CreateArticleSavingRequestErrorCode::BadData)
            .into()),
    }
}

fn status_of(request: SavingRequest) -> SaveArticleStatus {
    SaveArticleStatus::make(request.id, request.status)
}
