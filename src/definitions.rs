use serde::Deserialize;

use crate::reqwest_client::ClientError;

/// Top level of a MediaWiki `action=query` response (`formatversion=2`).
/// Only the pieces the reader actually consumes are modelled; everything else
/// in the envelope is ignored during deserialization.
#[derive(Debug, Deserialize)]
pub struct WikiResponse {
    #[serde(default)]
    pub query: WikiQuery,
}

#[derive(Debug, Default, Deserialize)]
pub struct WikiQuery {
    /// Present for `prop=revisions` requests.
    #[serde(default)]
    pub pages: Vec<WikiPage>,
    /// Present for `list=search` requests.
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct WikiPage {
    pub title: String,
    /// Set when the requested title does not exist.
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub revisions: Vec<Revision>,
}

impl WikiPage {
    /// Raw markup of the latest fetched revision, if any came back.
    pub fn content(&self) -> Option<&str> {
        self.revisions
            .first()
            .map(|rev| rev.slots.main.content.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct Revision {
    pub slots: RevisionSlots,
}

#[derive(Debug, Deserialize)]
pub struct RevisionSlots {
    pub main: SlotContent,
}

#[derive(Debug, Deserialize)]
pub struct SlotContent {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub title: String,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Everything that can go wrong between "user asked for a title" and "we have
/// raw markup". Parsing itself never fails, so this covers the fetch side
/// only.
#[derive(Debug)]
pub enum FetchError {
    Http(ClientError),
    Url(url::ParseError),
    Process(String),
}

impl From<ClientError> for FetchError {
    fn from(value: ClientError) -> Self {
        Self::Http(value)
    }
}
impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(ClientError::from(value))
    }
}
impl From<reqwest_middleware::Error> for FetchError {
    fn from(value: reqwest_middleware::Error) -> Self {
        Self::Http(ClientError::from(value))
    }
}
impl From<url::ParseError> for FetchError {
    fn from(value: url::ParseError) -> Self {
        Self::Url(value)
    }
}
impl From<String> for FetchError {
    fn from(value: String) -> Self {
        Self::Process(value)
    }
}
impl From<&str> for FetchError {
    fn from(value: &str) -> Self {
        Self::Process(value.to_owned())
    }
}
