//! Module for generating random post descriptions for property-based testing.
//!
//! `PostSeed` carries everything needed to build one post and exercise it: the
//! variant, its payload and author, and how many times to display it. Seeds are
//! plain data so this crate does not depend on the crate under test; tests turn
//! them into posts through their own factory, or into JSON drafts via `to_json`.

use quickcheck::{Arbitrary, Gen};
use serde_json::{json, Value};

/// Upper bound (exclusive) on generated display counts, keeping tests fast.
const MAX_DISPLAYS: u8 = 16;

/// Which post variant a seed describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedKind {
    Text,
    Image,
    Video,
}

impl SeedKind {
    /// Tag used for the variant in JSON drafts.
    pub fn tag(self) -> &'static str {
        match self {
            SeedKind::Text => "text",
            SeedKind::Image => "image",
            SeedKind::Video => "video",
        }
    }
}

impl Arbitrary for SeedKind {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[SeedKind::Text, SeedKind::Image, SeedKind::Video])
            .expect("choice list is non-empty")
    }
}

/// A randomly generated post description.
#[derive(Clone, Debug)]
pub struct PostSeed {
    pub kind: SeedKind,
    pub payload: String,
    pub author: String,
    pub displays: u8,
}

impl Arbitrary for PostSeed {
    fn arbitrary(g: &mut Gen) -> Self {
        PostSeed {
            kind: SeedKind::arbitrary(g),
            payload: String::arbitrary(g),
            author: String::arbitrary(g),
            displays: u8::arbitrary(g) % MAX_DISPLAYS,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let kind = self.kind;
        let author = self.author.clone();
        let displays = self.displays;
        Box::new(self.payload.shrink().map(move |payload| PostSeed {
            kind,
            payload,
            author: author.clone(),
            displays,
        }))
    }
}

impl PostSeed {
    /// Renders the seed as a complete JSON draft, e.g.
    /// `{"kind": "image", "image": "...", "author": "..."}`.
    pub fn to_json(&self) -> Value {
        let tag = self.kind.tag();
        let mut draft = json!({ "kind": tag, "author": self.author });
        draft[tag] = Value::String(self.payload.clone());
        draft
    }
}
