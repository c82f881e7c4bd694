use std::sync::Arc;

use crate::spotify::CatalogClient;

#[derive(Clone)]
pub struct AppState {
    /// Shared catalog client, constructed once at startup.
    pub catalog: Arc<dyn CatalogClient>,
    /// When true, raw error detail is withheld from the page.
    pub production: bool,
}
