pub mod demo;
pub mod error;
pub mod logging;
pub mod post;
pub mod visitor;

pub use error::{PostError, Result};
