use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use post_visitor::demo::{self, ReportFormat};
use post_visitor::logging;
use post_visitor::post::{self, PostFactory};

/// Displays a set of posts, then reports on each through a visitor.
#[derive(Parser, Debug)]
#[command(name = "post-visitor", version, about, long_about = None)]
struct Args {
    /// JSON array of post drafts to use instead of the built-in sample set
    #[arg(long, value_name = "FILE")]
    posts: Option<PathBuf>,

    /// Report operation to run after displaying
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Log filter for stderr (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Disable ANSI colors in log output
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logger(args.no_color, args.log_level.as_deref())
        .context("failed to initialize logging")?;

    let factory = PostFactory::new();
    let posts = match &args.posts {
        Some(path) => {
            let drafts = post::load_drafts(path)?;
            post::build_all(drafts, &factory)
                .with_context(|| format!("invalid post draft in {}", path.display()))?
        }
        None => demo::sample_posts(&factory),
    };
    info!(count = posts.len(), last_id = ?factory.last_issued(), "built posts");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&posts, args.format, &mut out)?;
    out.flush()?;
    Ok(())
}
