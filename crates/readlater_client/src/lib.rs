//! Read-later client: save-article operations over GraphQL.
mod codes;
mod error;
mod handle;
mod input;
mod operations;
mod reducer;
mod service;
mod settings;
mod status;
mod transport;

pub use codes::{
    ArticleSavingRequestErrorCode, CreateArticleErrorCode, CreateArticleSavingRequestErrorCode,
};
pub use error::{SaveArticleError, TransportError, TransportFailure};
pub use handle::{RequestId, SaveCommand, SaveEvent, SaveHandle, SaveOutcome};
pub use input::{
    ArticleContent, CreateArticleInput, CreateArticleSavingRequestInput, PageInfoInput,
    PageScrapePayload, PreparedDocumentInput, ScrapedContent,
};
pub use operations::{
    ArticleSavingRequestData, ArticleSavingRequestQuery, ArticleSavingRequestResult,
    ArticleSavingRequestVariables, CreateArticleData, CreateArticleMutation, CreateArticleResult,
    CreateArticleSavingRequestData, CreateArticleSavingRequestMutation,
    CreateArticleSavingRequestResult, CreateArticleSuccess, ErrorCodes, InputVariables,
    SavingRequest, SavingRequestSuccess,
};
pub use reducer::{
    decode_response, reduce_article_saving_request, reduce_create_article,
    reduce_create_article_saving_request,
};
pub use service::SaveService;
pub use settings::ClientSettings;
pub use status::{SaveArticleStatus, SavingRequestStatus};
pub use transport::{GraphqlRequest, GraphqlTransport, ReqwestTransport};
