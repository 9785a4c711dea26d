//! Post entities
//!
//! A closed family of three variants ([`TextPost`], [`ImagePost`], [`VideoPost`])
//! sharing the [`PostEntity`] capabilities, plus the [`Post`] sum type used to
//! hold them side by side.
//!
//! # Usage
//!
//! ```
//! use post_visitor::post::{Post, PostEntity, PostFactory};
//!
//! let factory = PostFactory::new();
//! let post = Post::from(factory.text("Post 1", "Uncle Bob"));
//! let mut out = Vec::new();
//! post.display_to(&mut out).unwrap();
//! assert_eq!(post.id().get(), 1);
//! assert_eq!(post.display_count(), 1);
//! ```

mod base;
pub mod draft;
mod factory;
mod variants;

use tracing::debug;

pub use base::{PostBase, PostEntity, PostId, PostKind};
pub use draft::{build_all, load_drafts, parse_drafts, PostDraft};
pub use factory::PostFactory;
pub use variants::{ImagePost, TextPost, VideoPost};

use crate::visitor::PostVisitor;

/// Any post variant.
#[derive(Debug)]
pub enum Post {
    Text(TextPost),
    Image(ImagePost),
    Video(VideoPost),
}

impl From<TextPost> for Post {
    fn from(post: TextPost) -> Self {
        Post::Text(post)
    }
}

impl From<ImagePost> for Post {
    fn from(post: ImagePost) -> Self {
        Post::Image(post)
    }
}

impl From<VideoPost> for Post {
    fn from(post: VideoPost) -> Self {
        Post::Video(post)
    }
}

impl PostEntity for Post {
    fn kind(&self) -> PostKind {
        match self {
            Post::Text(post) => post.kind(),
            Post::Image(post) => post.kind(),
            Post::Video(post) => post.kind(),
        }
    }

    fn base(&self) -> &PostBase {
        match self {
            Post::Text(post) => post.base(),
            Post::Image(post) => post.base(),
            Post::Video(post) => post.base(),
        }
    }

    fn author(&self) -> &str {
        match self {
            Post::Text(post) => post.author(),
            Post::Image(post) => post.author(),
            Post::Video(post) => post.author(),
        }
    }

    fn payload(&self) -> &str {
        match self {
            Post::Text(post) => post.payload(),
            Post::Image(post) => post.payload(),
            Post::Video(post) => post.payload(),
        }
    }

    fn display_line(&self) -> String {
        match self {
            Post::Text(post) => post.display_line(),
            Post::Image(post) => post.display_line(),
            Post::Video(post) => post.display_line(),
        }
    }

    fn accept<V: PostVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        debug!(id = %self.id(), kind = %self.kind(), "dispatching post");
        match self {
            Post::Text(post) => post.accept(visitor),
            Post::Image(post) => post.accept(visitor),
            Post::Video(post) => post.accept(visitor),
        }
    }
}
