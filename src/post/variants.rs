//! The three concrete post variants.
//!
//! Each variant holds its payload plus a [`PostBase`]. Construction goes through
//! [`PostFactory`](super::PostFactory), which assigns identities.

use super::base::{PostBase, PostEntity, PostId, PostKind};
use crate::visitor::PostVisitor;

/// A post carrying plain text.
#[derive(Debug)]
pub struct TextPost {
    base: PostBase,
    text: String,
    author: String,
}

impl TextPost {
    pub(crate) fn new(id: PostId, text: String, author: String) -> Self {
        TextPost {
            base: PostBase::new(id),
            text,
            author,
        }
    }

    /// Returns the text exactly as given at construction.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl PostEntity for TextPost {
    fn kind(&self) -> PostKind { PostKind::Text }
    fn base(&self) -> &PostBase { &self.base }
    fn author(&self) -> &str { &self.author }
    fn payload(&self) -> &str { &self.text }

    fn display_line(&self) -> String {
        format!("Displaying TextPost : Text: {}", self.text)
    }

    fn accept<V: PostVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_text(self)
    }
}

/// A post pointing at an image.
#[derive(Debug)]
pub struct ImagePost {
    base: PostBase,
    image: String,
    author: String,
}

impl ImagePost {
    pub(crate) fn new(id: PostId, image: String, author: String) -> Self {
        ImagePost {
            base: PostBase::new(id),
            image,
            author,
        }
    }

    /// Returns the image path exactly as given at construction.
    pub fn image(&self) -> &str {
        &self.image
    }
}

impl PostEntity for ImagePost {
    fn kind(&self) -> PostKind { PostKind::Image }
    fn base(&self) -> &PostBase { &self.base }
    fn author(&self) -> &str { &self.author }
    fn payload(&self) -> &str { &self.image }

    fn display_line(&self) -> String {
        format!("Displaying ImagePost : Image: {}", self.image)
    }

    fn accept<V: PostVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_image(self)
    }
}

/// A post pointing at a video.
#[derive(Debug)]
pub struct VideoPost {
    base: PostBase,
    video: String,
    author: String,
}

impl VideoPost {
    pub(crate) fn new(id: PostId, video: String, author: String) -> Self {
        VideoPost {
            base: PostBase::new(id),
            video,
            author,
        }
    }

    /// Returns the video path exactly as given at construction.
    pub fn video(&self) -> &str {
        &self.video
    }
}

impl PostEntity for VideoPost {
    fn kind(&self) -> PostKind { PostKind::Video }
    fn base(&self) -> &PostBase { &self.base }
    fn author(&self) -> &str { &self.author }
    fn payload(&self) -> &str { &self.video }

    fn display_line(&self) -> String {
        format!("Displaying VideoPost : Video: {}", self.video)
    }

    fn accept<V: PostVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_video(self)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::*;
    use crate::error::PostError;
    use crate::post::PostFactory;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_display_lines_name_variant_and_payload() {
        let factory = PostFactory::new();
        assert_eq!(factory.text("Post 1", "Uncle Bob").display_line(), "Displaying TextPost : Text: Post 1");
        assert_eq!(
            factory.image("/src/image/img1.png", "Uncle Bob").display_line(),
            "Displaying ImagePost : Image: /src/image/img1.png"
        );
        assert_eq!(
            factory.video("/src/video/vid1.png", "John Doe").display_line(),
            "Displaying VideoPost : Video: /src/video/vid1.png"
        );
    }

    #[test]
    fn test_display_writes_line_then_counts() {
        let factory = PostFactory::new();
        let post = factory.image("cat.png", "Uncle Bob");
        let mut out = Vec::new();

        post.display_to(&mut out).unwrap();
        post.display_to(&mut out).unwrap();

        assert_eq!(post.display_count(), 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Displaying ImagePost : Image: cat.png\nDisplaying ImagePost : Image: cat.png\n"
        );
    }

    #[test]
    fn test_failed_write_still_counts() {
        let factory = PostFactory::new();
        let post = factory.video("clip.mp4", "John Doe");

        let err = post.display_to(&mut BrokenPipe).unwrap_err();

        assert!(matches!(err, PostError::Output(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(post.display_count(), 1);
    }

    #[test]
    fn test_accessors_return_payload_unmodified() {
        let factory = PostFactory::new();
        let text = factory.text("  spaced\ttext \n", "Uncle Bob");
        let image = factory.image("C:\\pics\\ünïcode.png", "Uncle Bob");
        let video = factory.video("", "John Doe");

        assert_eq!(text.text(), "  spaced\ttext \n");
        assert_eq!(image.image(), "C:\\pics\\ünïcode.png");
        assert_eq!(video.video(), "");
        assert_eq!(text.author(), "Uncle Bob");
        assert_eq!(video.author(), "John Doe");
    }
}
