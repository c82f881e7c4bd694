use askama::Template;
use axum::{
    extract::{Form, Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use rand::Rng;
use tracing::error;

use crate::error::FetchError;
use crate::fetcher::fetch_metadata;
use crate::pdf::render_pdf;
use crate::web::models::{ErrorView, LookupForm, RecordView};
use crate::web::state::AppState;
use crate::web::templates::IndexTemplate;

const PDF_FILE_NAME: &str = "spotify_metadata.pdf";

pub async fn index() -> impl IntoResponse {
    let template = IndexTemplate {
        url: String::new(),
        record: None,
        error: None,
    };
    Html(template.render().expect("Template rendering failed"))
}

pub async fn lookup(
    State(state): State<AppState>,
    Form(form): Form<LookupForm>,
) -> impl IntoResponse {
    let template = match fetch_metadata(state.catalog.as_ref(), &form.url).await {
        Ok(record) => IndexTemplate {
            url: form.url,
            record: Some(RecordView::from(&record)),
            error: None,
        },
        Err(e) => IndexTemplate {
            url: form.url,
            record: None,
            error: Some(describe_error(&e, state.production)),
        },
    };
    Html(template.render().expect("Template rendering failed"))
}

/// Regenerates the record for the submitted URL and streams it as a PDF with
/// a fixed file name. Nothing is cached between the page view and the
/// download, so this re-runs the same lookup.
pub async fn download(
    State(state): State<AppState>,
    Query(form): Query<LookupForm>,
) -> Response {
    match fetch_metadata(state.catalog.as_ref(), &form.url).await {
        Ok(record) => {
            let bytes = render_pdf(&record);
            (
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{PDF_FILE_NAME}\""),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            let template = IndexTemplate {
                url: form.url,
                record: None,
                error: Some(describe_error(&e, state.production)),
            };
            Html(template.render().expect("Template rendering failed")).into_response()
        }
    }
}

/// Logs the failure with a short random correlation id and maps it to the
/// generic user-facing notice. Raw detail is only surfaced outside production.
fn describe_error(error: &FetchError, production: bool) -> ErrorView {
    let error_id: u32 = rand::thread_rng().gen_range(1000..10000);
    error!(error_id, error = ?error, "Metadata lookup failed");
    ErrorView {
        message: format!(
            "We encountered an issue while processing your request. (Error ID: {error_id})"
        ),
        detail: (!production).then(|| format!("{error:?}")),
    }
}
