//! The GraphQL operations issued by the save flows and their typed responses.
//!
//! Result unions are decoded by `__typename`; a tag outside the listed
//! members fails decoding.

use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use crate::codes::{
    ArticleSavingRequestErrorCode, CreateArticleErrorCode, CreateArticleSavingRequestErrorCode,
};
use crate::input::{CreateArticleInput, CreateArticleSavingRequestInput};
use crate::status::SavingRequestStatus;

/// Look up the state of a saving request by job id.
pub struct ArticleSavingRequestQuery;

/// Create an article from client-side content or an uploaded file.
pub struct CreateArticleMutation;

/// Ask the server to fetch and save a URL asynchronously.
pub struct CreateArticleSavingRequestMutation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSavingRequestVariables {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputVariables<I> {
    pub input: I,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingRequest {
    pub id: String,
    pub status: SavingRequestStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCodes<C> {
    // A path default keeps serde from requiring `C: Default`.
    #[serde(default = "Vec::new")]
    pub error_codes: Vec<C>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingRequestSuccess {
    pub article_saving_request: SavingRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum ArticleSavingRequestResult {
    ArticleSavingRequestSuccess(SavingRequestSuccess),
    ArticleSavingRequestError(ErrorCodes<ArticleSavingRequestErrorCode>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSavingRequestData {
    pub article_saving_request: ArticleSavingRequestResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateArticleSuccess {
    pub created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum CreateArticleResult {
    CreateArticleSuccess(CreateArticleSuccess),
    CreateArticleError(ErrorCodes<CreateArticleErrorCode>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleData {
    pub create_article: CreateArticleResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum CreateArticleSavingRequestResult {
    CreateArticleSavingRequestSuccess(SavingRequestSuccess),
    CreateArticleSavingRequestError(ErrorCodes<CreateArticleSavingRequestErrorCode>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleSavingRequestData {
    pub create_article_saving_request: CreateArticleSavingRequestResult,
}

impl GraphQLQuery for ArticleSavingRequestQuery {
    type Variables = ArticleSavingRequestVariables;
    type ResponseData = ArticleSavingRequestData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: include_str!("../queries/article_saving_request.graphql"),
            operation_name: "ArticleSavingRequest",
        }
    }
}

impl GraphQLQuery for CreateArticleMutation {
    type Variables = InputVariables<CreateArticleInput>;
    type ResponseData = CreateArticleData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: include_str!("../queries/create_article.graphql"),
            operation_name: "CreateArticle",
        }
    }
}

impl GraphQLQuery for CreateArticleSavingRequestMutation {
    type Variables = InputVariables<CreateArticleSavingRequestInput>;
    type ResponseData = CreateArticleSavingRequestData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: include_str!("../queries/create_article_saving_request.graphql"),
            operation_name: "CreateArticleSavingRequest",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unrecognized_typename_fails_to_decode() {
        let raw = json!({
            "articleSavingRequest": { "__typename": "SomethingElse", "id": "x" }
        });
        assert!(serde_json::from_value::<ArticleSavingRequestData>(raw).is_err());
    }

    #[test]
    fn query_body_carries_operation_name_and_variables() {
        let body = ArticleSavingRequestQuery::build_query(ArticleSavingRequestVariables {
            id: "job-1".to_string(),
        });
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["operationName"], json!("ArticleSavingRequest"));
        assert_eq!(value["variables"], json!({ "id": "job-1" }));
        assert!(value["query"]
            .as_str()
            .unwrap()
            .contains("articleSavingRequest(id: $id)"));
    }
}
