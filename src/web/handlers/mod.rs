//! Request handlers, split by response type: HTML pages and JSON API.

pub mod api;
pub mod pages;
