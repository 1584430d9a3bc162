//! Where the ranking page comes from.
//!
//! The pipeline only sees [`PageSource`]; the production implementation is
//! [`HttpPageSource`], tests plug in fixed pages.

pub mod http;

use async_trait::async_trait;

use cmcexporter_core::error::Result;

pub use http::HttpPageSource;

#[async_trait]
pub trait PageSource: Send + Sync {
    /// Location reported in logs.
    fn location(&self) -> &str;

    /// Fetch the page body. One call, one upstream request.
    async fn fetch(&self) -> Result<String>;
}
