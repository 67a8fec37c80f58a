//! Serde wire types for the MediaWiki Action API query envelope.
//!
//! Only the fields the resolver consumes are modeled; everything else in
//! the response is ignored. Requests use `formatversion=2`, where
//! `missing` is a plain boolean and `pages` is an array.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct QueryEnvelope {
    #[serde(default)]
    pub query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryBody {
    #[serde(default)]
    pub pages: Vec<PageRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageRecord {
    pub title: Option<String>,
    #[serde(default)]
    pub missing: bool,
    pub extract: Option<String>,
    pub fullurl: Option<String>,
    #[serde(default)]
    pub pageprops: Option<PageProps>,
    #[serde(default)]
    pub links: Vec<PageLink>,
}

impl PageRecord {
    /// The `disambiguation` page prop is present (with an empty value)
    /// on disambiguation pages and absent otherwise.
    pub fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .is_some_and(|props| props.disambiguation.is_some())
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageProps {
    pub disambiguation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageLink {
    pub title: String,
}
