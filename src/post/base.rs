use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::Result;
use crate::visitor::PostVisitor;

/// Identity of a post, issued by a [`PostFactory`](super::PostFactory).
/// Ids start at 1 and are never reused within one factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct PostId(u64);

impl PostId {
    pub(crate) fn new(value: u64) -> Self {
        PostId(value)
    }

    /// Returns the raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of post variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Text,
    Image,
    Video,
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PostKind::Text => "Text",
            PostKind::Image => "Image",
            PostKind::Video => "Video",
        };
        f.write_str(name)
    }
}

/// State shared by every post variant: its identity and how often it has been displayed.
#[derive(Debug)]
pub struct PostBase {
    id: PostId,                // Immutable after construction
    display_count: AtomicU64,  // Only ever incremented, by one, through `record_display`
}

impl PostBase {
    pub(crate) fn new(id: PostId) -> Self {
        PostBase {
            id,
            display_count: AtomicU64::new(0),
        }
    }

    /// Returns the post's identity.
    pub fn id(&self) -> PostId { self.id }
    /// Returns how many times the post has been displayed.
    pub fn display_count(&self) -> u64 { self.display_count.load(Ordering::SeqCst) }

    /// Increments the display counter and returns the new value.
    pub(crate) fn record_display(&self) -> u64 {
        let count = self.display_count.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(id = %self.id, count, "recorded display");
        count
    }
}

/// Capabilities shared by every post variant and by [`Post`](super::Post) itself.
///
/// Implementors supply their base state, payload, and display line; displaying and
/// identity reads are provided on top of those.
pub trait PostEntity {
    /// Which variant this post is.
    fn kind(&self) -> PostKind;

    /// Shared identity and display-count state.
    fn base(&self) -> &PostBase;

    /// The author recorded at construction. Not used by any visitor protocol method.
    fn author(&self) -> &str;

    /// The variant's defining field (text, image path, or video path).
    fn payload(&self) -> &str;

    /// The human-readable line written by [`display_to`](Self::display_to).
    fn display_line(&self) -> String;

    /// Double-dispatch entry point: calls the visitor method matching this
    /// post's variant, passing the post itself.
    fn accept<V: PostVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output;

    fn id(&self) -> PostId {
        self.base().id()
    }

    fn display_count(&self) -> u64 {
        self.base().display_count()
    }

    /// Writes the variant's display line, then increments the display count.
    ///
    /// The count is incremented even if the write fails; the write error is
    /// returned afterwards.
    fn display_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let written = writeln!(out, "{}", self.display_line());
        self.base().record_display();
        written?;
        Ok(())
    }

    /// Same as [`display_to`](Self::display_to) against stdout.
    fn display(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.display_to(&mut handle)
    }
}
