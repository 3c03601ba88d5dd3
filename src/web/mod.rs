// Web UI: askama-rendered pages.

pub mod handlers;
