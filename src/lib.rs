#[path = "config.rs"]
pub mod config;

#[path = "director.rs"]
pub mod director;

#[path = "url_builder.rs"]
pub mod url_builder;

#[path = "error.rs"]
pub mod error;
