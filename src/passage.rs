//! Passage extraction from the loaded story graph.

use tracing::debug;

use crate::error::ConvertError;
use crate::grammar::{self, GrammarError, Link};
use crate::graph::{GraphNode, StoryGraph};
use crate::meta::PassageMetadata;

/// One narrative unit as extracted from the graph, before personage
/// classification and chapter assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct Passage {
    /// The graph node's name, unique within the story.
    pub id: String,
    /// Prose with all inline tokens removed.
    pub text: String,
    /// Outgoing links in first-occurrence order.
    pub links: Vec<Link>,
    /// One-based chapter this passage belongs to, from the node's tag.
    pub chapter_number: u32,
    /// Decoded inline metadata, defaults applied.
    pub meta: PassageMetadata,
}

/// Extract one [`Passage`] per graph node, in document order.
///
/// The node's `tags` attribute must be a plain non-negative integer; partial
/// parses ("3 draft", "3x") are rejected rather than truncated.
pub fn extract_passages(graph: &StoryGraph) -> Result<Vec<Passage>, ConvertError> {
    let passages = graph
        .nodes
        .iter()
        .map(extract_passage)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = passages.len(), "extracted passages");
    Ok(passages)
}

fn extract_passage(node: &GraphNode) -> Result<Passage, ConvertError> {
    let chapter_number =
        node.tags
            .parse::<u32>()
            .map_err(|_| ConvertError::InvalidChapterTag {
                passage_id: node.name.clone(),
                tag: node.tags.clone(),
            })?;

    let parsed = grammar::parse_inline(&node.text).map_err(|e| match e {
        GrammarError::MalformedMetadata { reason } => ConvertError::MalformedMetadata {
            passage_id: node.name.clone(),
            reason,
        },
        GrammarError::MalformedLink { token } => ConvertError::MalformedLink {
            passage_id: node.name.clone(),
            token,
        },
    })?;

    Ok(Passage {
        id: node.name.clone(),
        text: parsed.text,
        links: parsed.links,
        chapter_number,
        meta: parsed.meta,
    })
}
