//! Field-optional post descriptions, loadable from JSON.
//!
//! A draft becomes a [`Post`] only through [`PostDraft::build`], which rejects a
//! missing field before any id is issued.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::base::PostKind;
use super::factory::PostFactory;
use super::Post;
use crate::error::{PostError, Result};

/// A post as described in a drafts file, e.g.
/// `{"kind": "image", "image": "/src/image/img1.png", "author": "Uncle Bob"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PostDraft {
    Text { text: Option<String>, author: Option<String> },
    Image { image: Option<String>, author: Option<String> },
    Video { video: Option<String>, author: Option<String> },
}

impl PostDraft {
    pub fn kind(&self) -> PostKind {
        match self {
            PostDraft::Text { .. } => PostKind::Text,
            PostDraft::Image { .. } => PostKind::Image,
            PostDraft::Video { .. } => PostKind::Video,
        }
    }

    /// Builds the post through `factory`. Fails with [`PostError::MissingField`]
    /// if the payload or author is absent; no id is consumed in that case.
    pub fn build(self, factory: &PostFactory) -> Result<Post> {
        let kind = self.kind();
        let post = match self {
            PostDraft::Text { text, author } => {
                let text = require(kind, "text", text)?;
                let author = require(kind, "author", author)?;
                Post::from(factory.text(text, author))
            }
            PostDraft::Image { image, author } => {
                let image = require(kind, "image", image)?;
                let author = require(kind, "author", author)?;
                Post::from(factory.image(image, author))
            }
            PostDraft::Video { video, author } => {
                let video = require(kind, "video", video)?;
                let author = require(kind, "author", author)?;
                Post::from(factory.video(video, author))
            }
        };
        Ok(post)
    }
}

fn require(kind: PostKind, field: &'static str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| {
        warn!(%kind, field, "rejecting draft with missing field");
        PostError::MissingField { kind, field }
    })
}

/// Parses a JSON array of drafts.
pub fn parse_drafts(json: &str) -> Result<Vec<PostDraft>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a JSON array of drafts from `path`.
pub fn load_drafts(path: impl AsRef<Path>) -> Result<Vec<PostDraft>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| PostError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let drafts = parse_drafts(&json)?;
    debug!(?path, count = drafts.len(), "loaded drafts");
    Ok(drafts)
}

/// Builds every draft in order, stopping at the first one that is incomplete.
pub fn build_all(drafts: Vec<PostDraft>, factory: &PostFactory) -> Result<Vec<Post>> {
    drafts.into_iter().map(|draft| draft.build(factory)).collect()
}
