use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An image attached to an article, keyed in [`Article::images`] by the
/// scraper's slot name. Insertion order carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleImage {
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// A scraped blog article as returned by the search endpoint. The `url`
/// is the unique identifier; everything else is display data. Articles
/// are never mutated client-side, each search replaces the whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(rename = "auteur")]
    pub author: String,
    /// Publication date as sent by the backend. The format is not part
    /// of the contract, so it is kept as an opaque display string.
    #[serde(rename = "date_publication")]
    pub published: String,
    #[serde(rename = "categorie")]
    pub category: String,
    #[serde(rename = "resume", default)]
    pub summary: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: HashMap<String, ArticleImage>,
}
