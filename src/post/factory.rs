use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use super::base::PostId;
use super::variants::{ImagePost, TextPost, VideoPost};

/// Construction context for posts. Owns the identity counter, so every post
/// built through one factory gets a distinct id, starting at 1 and increasing
/// in construction order. Safe to share between threads.
#[derive(Debug, Default)]
pub struct PostFactory {
    last_id: AtomicU64,
}

impl PostFactory {
    pub fn new() -> Self {
        PostFactory {
            last_id: AtomicU64::new(0),
        }
    }

    /// Reads, increments, and stores the counter in one atomic step.
    fn next_id(&self) -> PostId {
        let id = PostId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        debug!(%id, "issued post id");
        id
    }

    /// The most recently issued id, or `None` if nothing has been built yet.
    pub fn last_issued(&self) -> Option<PostId> {
        match self.last_id.load(Ordering::SeqCst) {
            0 => None,
            id => Some(PostId::new(id)),
        }
    }

    pub fn text(&self, text: impl Into<String>, author: impl Into<String>) -> TextPost {
        TextPost::new(self.next_id(), text.into(), author.into())
    }

    pub fn image(&self, image: impl Into<String>, author: impl Into<String>) -> ImagePost {
        ImagePost::new(self.next_id(), image.into(), author.into())
    }

    pub fn video(&self, video: impl Into<String>, author: impl Into<String>) -> VideoPost {
        VideoPost::new(self.next_id(), video.into(), author.into())
    }
}
