pub mod config;
pub mod edit;
pub mod error;
pub mod logging;
pub mod url_model;

pub use error::UrlError;
pub use url_model::{QueryParams, Url};
