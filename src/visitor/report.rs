use std::io::Write;

use super::PostVisitor;
use crate::error::Result;
use crate::post::{ImagePost, PostEntity, TextPost, VideoPost};

/// Writes one line per visited post stating its id, how often it was
/// displayed, and its payload, worded per variant ("read", "seen", "watched").
#[derive(Debug)]
pub struct ReportVisitor<W: Write> {
    out: W,
}

impl<W: Write> ReportVisitor<W> {
    pub fn new(out: W) -> Self {
        ReportVisitor { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PostVisitor for ReportVisitor<W> {
    type Output = Result<()>;

    fn visit_text(&mut self, post: &TextPost) -> Result<()> {
        writeln!(
            self.out,
            "Text Post with ID={} has been read {} times! Text: {}",
            post.id(),
            post.display_count(),
            post.text()
        )?;
        Ok(())
    }

    fn visit_image(&mut self, post: &ImagePost) -> Result<()> {
        writeln!(
            self.out,
            "Image Post with ID={} has been seen {} times! Image: {}",
            post.id(),
            post.display_count(),
            post.image()
        )?;
        Ok(())
    }

    fn visit_video(&mut self, post: &VideoPost) -> Result<()> {
        writeln!(
            self.out,
            "Video Post with ID={} has been watched {} times! Video: {}",
            post.id(),
            post.display_count(),
            post.video()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::{Post, PostFactory};

    fn report(post: &Post) -> String {
        let mut visitor = ReportVisitor::new(Vec::new());
        post.accept(&mut visitor).unwrap();
        String::from_utf8(visitor.into_inner()).unwrap()
    }

    #[test]
    fn test_report_wording_per_variant() {
        let factory = PostFactory::new();
        let text = Post::from(factory.text("Post 1", "Uncle Bob"));
        let image = Post::from(factory.image("/src/image/img1.png", "Uncle Bob"));
        let video = Post::from(factory.video("/src/video/vid1.png", "John Doe"));

        assert_eq!(report(&text), "Text Post with ID=1 has been read 0 times! Text: Post 1\n");
        assert_eq!(report(&image), "Image Post with ID=2 has been seen 0 times! Image: /src/image/img1.png\n");
        assert_eq!(report(&video), "Video Post with ID=3 has been watched 0 times! Video: /src/video/vid1.png\n");
    }

    #[test]
    fn test_report_reflects_current_display_count() {
        let factory = PostFactory::new();
        let post = Post::from(factory.text("hello", "Uncle Bob"));
        let mut sink = Vec::new();
        for _ in 0..3 {
            post.display_to(&mut sink).unwrap();
        }

        assert_eq!(report(&post), "Text Post with ID=1 has been read 3 times! Text: hello\n");
    }
}
