use askama::Template;

use crate::web::models::{ErrorView, RecordView};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub url: String,
    pub record: Option<RecordView>,
    pub error: Option<ErrorView>,
}
