pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod templates;
