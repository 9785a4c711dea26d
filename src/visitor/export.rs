use serde::{Deserialize, Serialize};

use super::PostVisitor;
use crate::error::Result;
use crate::post::{ImagePost, PostEntity, PostKind, TextPost, VideoPost};

/// A flat, serializable snapshot of one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub kind: PostKind,
    pub id: u64,
    pub display_count: u64,
    pub author: String,
    pub payload: String,
}

impl PostRecord {
    fn capture<P: PostEntity>(post: &P) -> Self {
        PostRecord {
            kind: post.kind(),
            id: post.id().get(),
            display_count: post.display_count(),
            author: post.author().to_string(),
            payload: post.payload().to_string(),
        }
    }
}

/// Collects a [`PostRecord`] per visited post, in visit order.
#[derive(Debug, Default)]
pub struct ExportVisitor {
    records: Vec<PostRecord>,
}

impl ExportVisitor {
    pub fn new() -> Self {
        ExportVisitor { records: Vec::new() }
    }

    pub fn records(&self) -> &[PostRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<PostRecord> {
        self.records
    }

    /// Renders the collected records as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

impl PostVisitor for ExportVisitor {
    type Output = ();

    fn visit_text(&mut self, post: &TextPost) {
        self.records.push(PostRecord::capture(post));
    }

    fn visit_image(&mut self, post: &ImagePost) {
        self.records.push(PostRecord::capture(post));
    }

    fn visit_video(&mut self, post: &VideoPost) {
        self.records.push(PostRecord::capture(post));
    }
}
