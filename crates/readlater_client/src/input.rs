//! Caller-supplied content and the GraphQL input objects built from it.

use serde::Serialize;

/// Page content captured on the client, submitted instead of letting the
/// server fetch the URL itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageScrapePayload {
    pub url: String,
    pub content: ScrapedContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapedContent {
    Html {
        html: String,
        title: Option<String>,
        icon_url: Option<String>,
    },
    /// Only the URL is known; the server fetches the page.
    Url,
}

impl PageScrapePayload {
    pub fn html(url: impl Into<String>, html: impl Into<String>, title: Option<String>) -> Self {
        Self {
            url: url.into(),
            content: ScrapedContent::Html {
                html: html.into(),
                title,
                icon_url: None,
            },
        }
    }

    pub fn url_only(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: ScrapedContent::Url,
        }
    }
}

/// The single content source resolved for an article-creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleContent {
    PreparedDocument {
        document: String,
        title: Option<String>,
    },
    UploadedFile(String),
    UrlOnly,
}

impl ArticleContent {
    /// An uploaded file wins over scraped HTML.
    pub fn resolve(payload: &PageScrapePayload, upload_file_id: Option<&str>) -> Self {
        if let Some(id) = upload_file_id {
            return ArticleContent::UploadedFile(id.to_string());
        }
        match &payload.content {
            ScrapedContent::Html { html, title, .. } => ArticleContent::PreparedDocument {
                document: html.clone(),
                title: title.clone(),
            },
            ScrapedContent::Url => ArticleContent::UrlOnly,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedDocumentInput {
    pub document: String,
    pub page_info: PageInfoInput,
}

/// Input of the `createArticle` mutation.
///
/// `uploadFileId` is sent as an explicit `null` when absent, while an absent
/// `preparedDocument` is omitted from the payload entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepared_document: Option<PreparedDocumentInput>,
    pub upload_file_id: Option<String>,
    pub url: String,
}

impl CreateArticleInput {
    pub fn from_scrape(payload: &PageScrapePayload, upload_file_id: Option<&str>) -> Self {
        Self::from_content(&payload.url, ArticleContent::resolve(payload, upload_file_id))
    }

    pub fn from_content(url: &str, content: ArticleContent) -> Self {
        let (prepared_document, upload_file_id) = match content {
            ArticleContent::PreparedDocument { document, title } => (
                Some(PreparedDocumentInput {
                    document,
                    page_info: PageInfoInput { title },
                }),
                None,
            ),
            ArticleContent::UploadedFile(id) => (None, Some(id)),
            ArticleContent::UrlOnly => (None, None),
        };
        Self {
            prepared_document,
            upload_file_id,
            url: url.to_string(),
        }
    }
}

/// Input of the `createArticleSavingRequest` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateArticleSavingRequestInput {
    pub url: String,
}

impl CreateArticleSavingRequestInput {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn html_payload_builds_prepared_document_and_null_upload() {
        let payload = PageScrapePayload::html(
            "https://example.com/a",
            "<p>hi</p>",
            Some("A title".to_string()),
        );
        let input = CreateArticleInput::from_scrape(&payload, None);

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "preparedDocument": {
                    "document": "<p>hi</p>",
                    "pageInfo": { "title": "A title" }
                },
                "uploadFileId": null,
                "url": "https://example.com/a"
            })
        );
    }

    #[test]
    fn upload_file_id_replaces_scraped_html() {
        let payload = PageScrapePayload::html("https://example.com/doc.pdf", "<p>x</p>", None);
        let input = CreateArticleInput::from_scrape(&payload, Some("file-9"));

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "uploadFileId": "file-9", "url": "https://example.com/doc.pdf" })
        );
    }

    #[test]
    fn missing_title_is_omitted_from_page_info() {
        let payload = PageScrapePayload::html("https://example.com/a", "<p>hi</p>", None);
        let value = serde_json::to_value(CreateArticleInput::from_scrape(&payload, None)).unwrap();

        assert_eq!(value["preparedDocument"]["pageInfo"], json!({}));
    }

    #[test]
    fn url_only_payload_has_no_content_source() {
        let payload = PageScrapePayload::url_only("https://example.com/a");
        assert_eq!(ArticleContent::resolve(&payload, None), ArticleContent::UrlOnly);
        assert_eq!(
            serde_json::to_value(CreateArticleInput::from_scrape(&payload, None)).unwrap(),
            json!({ "uploadFileId": null, "url": "https://example.com/a" })
        );
    }
}
