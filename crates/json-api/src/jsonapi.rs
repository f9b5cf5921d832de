//! Resource-document envelope.
//!
//! Every response, success or error, is one document: `{data: {type, id,
//! attributes}, links?, meta?}` on success, `{errors: [{status, title,
//! detail}]}` on failure. [`JsonApi`] and [`ApiError`] render those shapes so
//! handlers have exactly one way in and out.

use salvo::{
    Request, Response, Scribe,
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::error;

use stockline_app::domain::pagination::Page;

/// Media type served on every inventory/product endpoint.
pub const MEDIA_TYPE: &str = "application/vnd.api+json";

/// A single primary resource.
#[derive(Debug, Serialize, Deserialize)]
pub struct Resource<A> {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub attributes: A,
}

/// Response document carrying one resource.
#[derive(Debug, Serialize, Deserialize)]
pub struct Document<A> {
    pub data: Resource<A>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Response document carrying a collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListDocument<A> {
    pub data: Vec<Resource<A>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

/// Request document. `type` and `id` are accepted but ignored; only the
/// attributes matter on the way in.
#[derive(Debug, Deserialize)]
pub struct RequestDocument<A> {
    pub data: RequestResource<A>,
}

#[derive(Debug, Deserialize)]
pub struct RequestResource<A> {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub attributes: A,
}

/// Navigation links. Absent members are omitted from the payload.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

impl Links {
    #[must_use]
    pub fn self_only(link: impl Into<String>) -> Self {
        Self {
            self_link: Some(link.into()),
            ..Self::default()
        }
    }

    /// Page navigation for `{path}?pageNumber=N&pageSize=S`.
    #[must_use]
    pub fn paginated(path: &str, meta: &PageMeta, has_next: bool, has_previous: bool) -> Self {
        let link = |page: u32| format!("{path}?pageNumber={page}&pageSize={}", meta.page_size);

        Self {
            self_link: Some(link(meta.page_number)),
            first: Some(link(1)),
            last: Some(link(meta.total_pages.max(1))),
            next: has_next.then(|| link(meta.page_number + 1)),
            prev: has_previous.then(|| link(meta.page_number - 1)),
        }
    }
}

/// Pagination totals, mirrored from the domain [`Page`].
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_elements: u64,
    pub total_pages: u32,
    pub page_number: u32,
    pub page_size: u32,
}

impl PageMeta {
    #[must_use]
    pub fn from_page<T>(page: &Page<T>) -> Self {
        Self {
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            page_number: page.page_number,
            page_size: page.page_size,
        }
    }
}

/// Failure document.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorObject {
    pub status: String,
    pub title: String,
    pub detail: String,
}

/// Renders its payload as a resource document with the structured media
/// type.
#[derive(Debug)]
pub struct JsonApi<T>(pub T);

impl<T: Serialize + Send> Scribe for JsonApi<T> {
    fn render(self, res: &mut Response) {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => {
                res.headers_mut()
                    .insert(CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE));

                if let Err(write_error) = res.write_body(bytes) {
                    error!("failed to write resource document: {write_error}");
                }
            }
            Err(serialize_error) => {
                error!("failed to serialize resource document: {serialize_error}");

                res.render(ApiError::internal());
            }
        }
    }
}

/// An HTTP failure rendered through the error-document envelope.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    title: &'static str,
    detail: String,
}

impl ApiError {
    #[must_use]
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            title: "Bad Request",
            detail: detail.into(),
        }
    }

    /// A field-validation failure, reported as `"<field>: <message>"` for
    /// the first offending field only.
    #[must_use]
    pub fn validation(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            title: "Validation Error",
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            title: "Unauthorized",
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            title: "Not Found",
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn conflict(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            title: "Conflict",
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn service_unavailable(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            title: "Service Unavailable",
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            title: "Internal Server Error",
            detail: "unexpected error".to_string(),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        let document = ErrorDocument {
            errors: vec![ErrorObject {
                status: self.status.as_u16().to_string(),
                title: self.title.to_string(),
                detail: self.detail,
            }],
        };

        res.status_code(self.status);

        match serde_json::to_vec(&document) {
            Ok(bytes) => {
                res.headers_mut()
                    .insert(CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE));

                if let Err(write_error) = res.write_body(bytes) {
                    error!("failed to write error document: {write_error}");
                }
            }
            Err(serialize_error) => {
                error!("failed to serialize error document: {serialize_error}");
            }
        }
    }
}

/// Decode a request body into a [`RequestDocument`].
///
/// Parses the raw payload directly so both `application/vnd.api+json` and
/// plain JSON bodies are accepted.
///
/// # Errors
///
/// Returns a 400 [`ApiError`] when the body is missing or malformed.
pub async fn parse_document<A: DeserializeOwned>(
    req: &mut Request,
) -> Result<RequestDocument<A>, ApiError> {
    let payload = req
        .payload()
        .await
        .map_err(|_ignored| ApiError::bad_request("malformed resource document"))?;

    serde_json::from_slice(payload)
        .map_err(|_ignored| ApiError::bad_request("malformed resource document"))
}
