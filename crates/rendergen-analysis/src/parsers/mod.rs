//! Tree-sitter parser subsystem: thread_local parser instances, parse cache,
//! syntax helpers shared by the recognizer, resolver, and classifier.

pub mod cache;
pub mod error_tolerant;
pub mod manager;
pub mod paths;
pub mod syntax;
pub mod types;

pub use cache::ParseCache;
pub use manager::ParserManager;
pub use types::{NodeSpan, ParsedFile, Position, Range};
