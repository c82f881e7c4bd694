pub mod config;
pub mod error;
pub mod fetcher;
pub mod link;
pub mod logging;
pub mod pdf;
pub mod record;
pub mod spotify;
pub mod web;
