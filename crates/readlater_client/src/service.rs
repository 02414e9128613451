use graphql_client::GraphQLQuery;
use readlater_logging::{rl_debug, rl_warn};
use url::Url;

use crate::input::{CreateArticleInput, CreateArticleSavingRequestInput, PageScrapePayload};
use crate::operations::{
    ArticleSavingRequestQuery, ArticleSavingRequestVariables, CreateArticleMutation,
    CreateArticleSavingRequestMutation, InputVariables,
};
use crate::reducer::{
    decode_response, reduce_article_saving_request, reduce_create_article,
    reduce_create_article_saving_request,
};
use crate::transport::{GraphqlRequest, GraphqlTransport};
use crate::{ClientSettings, SaveArticleError, SaveArticleStatus};

/// Save-article operations over a GraphQL transport.
///
/// Every entry point performs exactly one round trip and resolves to exactly
/// one value or one `SaveArticleError`. Nothing is retried.
pub struct SaveService<T> {
    transport: T,
    graphql_path: String,
    headers: Vec<(String, String)>,
}

impl<T: GraphqlTransport> SaveService<T> {
    pub fn new(transport: T, settings: &ClientSettings) -> Self {
        Self {
            transport,
            graphql_path: settings.graphql_path.clone(),
            headers: settings.default_headers(),
        }
    }

    /// Asks the server to fetch `url` and save it in the background.
    pub async fn save_url(&self, url: &str) -> Result<SaveArticleStatus, SaveArticleError> {
        let variables = InputVariables {
            input: CreateArticleSavingRequestInput::new(url),
        };
        let result = self
            .submit::<CreateArticleSavingRequestMutation>(variables)
            .await
            .and_then(reduce_create_article_saving_request);
        log_failure("createArticleSavingRequest", &result);
        result
    }

    pub async fn save_article_url(&self, url: &Url) -> Result<SaveArticleStatus, SaveArticleError> {
        self.save_url(url.as_str()).await
    }

    /// Saves client-captured content, or a previously uploaded file.
    pub async fn save_page(
        &self,
        payload: &PageScrapePayload,
        upload_file_id: Option<&str>,
    ) -> Result<(), SaveArticleError> {
        let variables = InputVariables {
            input: CreateArticleInput::from_scrape(payload, upload_file_id),
        };
        let result = self
            .submit::<CreateArticleMutation>(variables)
            .await
            .and_then(reduce_create_article)
            .map(|created| {
                rl_debug!("createArticle url={} created={}", payload.url, created);
            });
        log_failure("createArticle", &result);
        result
    }

    pub async fn article_save_status(
        &self,
        job_id: &str,
    ) -> Result<SaveArticleStatus, SaveArticleError> {
        let variables = ArticleSavingRequestVariables {
            id: job_id.to_string(),
        };
        let result = self
            .submit::<ArticleSavingRequestQuery>(variables)
            .await
            .and_then(reduce_article_saving_request);
        log_failure("articleSavingRequest", &result);
        result
    }

    async fn submit<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, SaveArticleError> {
        let body = {
            let query = Q::build_query(variables);
            rl_debug!(
                "Submitting {} to {}",
                query.operation_name,
                self.graphql_path
            );
            serde_json::to_value(&query)
                .map_err(|err| SaveArticleError::unknown(format!("unencodable request: {err}")))?
        };

        let raw = self
            .transport
            .send(GraphqlRequest {
                path: self.graphql_path.clone(),
                headers: self.headers.clone(),
                body,
            })
            .await?;

        decode_response::<Q>(raw)
    }
}

fn log_failure<V>(operation: &str, result: &Result<V, SaveArticleError>) {
    if let Err(err) = result {
        rl_warn!("{} failed: {}", operation, err);
    }
}
