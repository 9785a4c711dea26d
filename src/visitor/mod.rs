//! Visitor pattern over posts
//!
//! The [`PostVisitor`] trait declares one method per post variant. A post's
//! [`accept`](crate::post::PostEntity::accept) calls back into the method matching
//! its own variant, so an operation never sees a mismatched post and entity code
//! never needs to know what the operation does.
//!
//! # Extending
//!
//! - A new operation is a new `PostVisitor` implementation; no post code changes.
//! - A new variant needs a new `accept` route and a new method on every visitor.
//!
//! # Usage
//!
//! ```
//! use post_visitor::post::{ImagePost, PostEntity, PostFactory, TextPost, VideoPost};
//! use post_visitor::visitor::PostVisitor;
//!
//! struct PayloadLength;
//!
//! impl PostVisitor for PayloadLength {
//!     type Output = usize;
//!
//!     fn visit_text(&mut self, post: &TextPost) -> usize { post.text().len() }
//!     fn visit_image(&mut self, post: &ImagePost) -> usize { post.image().len() }
//!     fn visit_video(&mut self, post: &VideoPost) -> usize { post.video().len() }
//! }
//!
//! let factory = PostFactory::new();
//! assert_eq!(factory.text("Post 1", "Uncle Bob").accept(&mut PayloadLength), 6);
//! ```

mod export;
mod report;

pub use export::{ExportVisitor, PostRecord};
pub use report::ReportVisitor;

use crate::post::{ImagePost, Post, PostEntity, TextPost, VideoPost};

/// An operation over posts, with one method per variant.
pub trait PostVisitor {
    /// What each visit produces.
    type Output;

    /// Entry point for visiting any post, dispatching through the post's own `accept`.
    /// Implementors typically do not override this method.
    fn visit_post(&mut self, post: &Post) -> Self::Output {
        post.accept(self)
    }

    /// Visits a text post.
    fn visit_text(&mut self, post: &TextPost) -> Self::Output;

    /// Visits an image post.
    fn visit_image(&mut self, post: &ImagePost) -> Self::Output;

    /// Visits a video post.
    fn visit_video(&mut self, post: &VideoPost) -> Self::Output;
}
