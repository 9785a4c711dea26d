//! The demonstration run: display every post once, then report on all of them.

use std::io::Write;

use clap::ValueEnum;
use tracing::info;

use crate::error::Result;
use crate::post::{Post, PostEntity, PostFactory};
use crate::visitor::{ExportVisitor, PostVisitor, ReportVisitor};

/// Which operation reports on the posts after they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// One sentence per post
    #[default]
    Text,
    /// A JSON array of post records
    Json,
}

/// The fixed sample set: one text, one image, and one video post.
pub fn sample_posts(factory: &PostFactory) -> Vec<Post> {
    vec![
        factory.text("Post 1", "Uncle Bob").into(),
        factory.image("/src/image/img1.png", "Uncle Bob").into(),
        factory.video("/src/video/vid1.png", "John Doe").into(),
    ]
}

/// Displays each post once, in order, then dispatches each through the
/// operation selected by `format`.
pub fn run<W: Write>(posts: &[Post], format: ReportFormat, out: &mut W) -> Result<()> {
    for post in posts {
        post.display_to(&mut *out)?;
    }

    info!(count = posts.len(), ?format, "reporting on posts");
    match format {
        ReportFormat::Text => {
            let mut visitor = ReportVisitor::new(&mut *out);
            for post in posts {
                visitor.visit_post(post)?;
            }
        }
        ReportFormat::Json => {
            let mut visitor = ExportVisitor::new();
            for post in posts {
                visitor.visit_post(post);
            }
            writeln!(out, "{}", visitor.to_json()?)?;
        }
    }
    Ok(())
}
