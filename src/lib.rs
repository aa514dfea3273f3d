//! # twinepack
//!
//! Converts a Twine 2 story export (one graph node per narrative passage,
//! with links and a JSON metadata block embedded in the passage text) plus a
//! chapter-metadata document into a single chapter-partitioned story JSON
//! document for a downstream player runtime.
//!
//! The conversion is one linear pipeline:
//!
//! ```text
//! load -> extract passages -> classify personages -> assemble chapters
//!      -> assemble story -> write
//! ```
//!
//! See [`story::run`] for the file-to-file entry point and
//! [`story::convert_sources`] for the in-memory one.

pub mod chapter;
pub mod error;
pub mod grammar;
pub mod graph;
pub mod meta;
pub mod passage;
pub mod personage;
pub mod story;

pub use chapter::{Chapter, ChapterPassage};
pub use error::ConvertError;
pub use grammar::Link;
pub use meta::{ChapterDescriptor, PassageMetadata, StoryMeta};
pub use passage::Passage;
pub use personage::ClassifiedPassage;
pub use story::Story;
