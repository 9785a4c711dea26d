//! Tests for loading post drafts from disk and building them into posts

use std::fs;

use post_visitor::demo::{self, ReportFormat};
use post_visitor::post::{self, PostEntity, PostFactory, PostKind};
use post_visitor::PostError;
use quickcheck::{QuickCheck, TestResult};
use tempfile::TempDir;
use test_utils::generator::PostSeed;

#[test]
fn test_load_and_run_drafts_file() {
    let _ = post_visitor::logging::init_logger(false, Some("warn"));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posts.json");
    fs::write(
        &path,
        r#"[
            {"kind": "video", "video": "/src/video/intro.mp4", "author": "John Doe"},
            {"kind": "text", "text": "Hello", "author": "Uncle Bob"}
        ]"#,
    )
    .unwrap();

    let factory = PostFactory::new();
    let posts = post::build_all(post::load_drafts(&path).unwrap(), &factory).unwrap();
    let mut out = Vec::new();
    demo::run(&posts, ReportFormat::Text, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Displaying VideoPost : Video: /src/video/intro.mp4\n\
         Displaying TextPost : Text: Hello\n\
         Video Post with ID=1 has been watched 1 times! Video: /src/video/intro.mp4\n\
         Text Post with ID=2 has been read 1 times! Text: Hello\n"
    );
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = post::load_drafts(&path).unwrap_err();

    match err {
        PostError::Load { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected Load error, got {:?}", other),
    }
}

#[test]
fn test_incomplete_draft_stops_build() {
    let drafts = post::parse_drafts(
        r#"[
            {"kind": "text", "text": "first", "author": "Uncle Bob"},
            {"kind": "image", "author": "Uncle Bob"},
            {"kind": "video", "video": "never.mp4", "author": "John Doe"}
        ]"#,
    )
    .unwrap();
    let factory = PostFactory::new();

    let err = post::build_all(drafts, &factory).unwrap_err();

    assert!(matches!(err, PostError::MissingField { kind: PostKind::Image, field: "image" }));
    assert_eq!(factory.last_issued().map(|id| id.get()), Some(1));
}

#[test]
fn test_property_seeds_survive_json_drafts() {
    fn prop(seeds: Vec<PostSeed>) -> TestResult {
        if seeds.is_empty() {
            return TestResult::discard();
        }
        let json = serde_json::Value::Array(seeds.iter().map(PostSeed::to_json).collect()).to_string();
        let factory = PostFactory::new();
        let posts = match post::parse_drafts(&json).and_then(|drafts| post::build_all(drafts, &factory)) {
            Ok(posts) => posts,
            Err(_) => return TestResult::failed(),
        };

        let intact = posts.iter().zip(seeds.iter()).enumerate().all(|(i, (post, seed))| {
            post.id().get() == i as u64 + 1
                && post.payload() == seed.payload
                && post.author() == seed.author
                && post.display_count() == 0
        });
        TestResult::from_bool(intact && posts.len() == seeds.len())
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(Vec<PostSeed>) -> TestResult);
}
