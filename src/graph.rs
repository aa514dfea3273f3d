//! Reader for the story-graph export document.
//!
//! A Twine 2 export is an HTML page embedding one `tw-storydata` element,
//! which carries the story-level attributes and one `tw-passagedata` child
//! per passage. This module lifts that markup into a plain [`StoryGraph`]
//! value; everything downstream works on the lifted form and never touches
//! the document again.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::error::ConvertError;

static STORY_ROOT: Lazy<Selector> = Lazy::new(|| Selector::parse("tw-storydata").unwrap());
static PASSAGE_NODE: Lazy<Selector> = Lazy::new(|| Selector::parse("tw-passagedata").unwrap());

/// One passage node, attributes and text content as authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    /// The node's `name` attribute, the passage identifier.
    pub name: String,
    /// The node's `tags` attribute, expected to hold the chapter number.
    pub tags: String,
    /// Raw passage body, entities decoded, inline grammar not yet applied.
    pub text: String,
}

/// The loaded graph document: story-level attributes plus the passage nodes
/// in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryGraph {
    pub name: String,
    pub start_passage_id: String,
    pub id: String,
    pub nodes: Vec<GraphNode>,
}

/// Parse the export markup and lift the story root and its passage nodes.
///
/// Fails only when the document holds no `tw-storydata` element; absent
/// story-level attributes become empty strings.
pub fn load_story_graph(html: &str) -> Result<StoryGraph, ConvertError> {
    let document = Html::parse_document(html);

    let root = document
        .select(&STORY_ROOT)
        .next()
        .ok_or_else(|| ConvertError::GraphShape("no tw-storydata element".to_string()))?;

    let nodes = root.select(&PASSAGE_NODE).map(lift_node).collect();

    Ok(StoryGraph {
        name: attr_or_empty(root, "name"),
        start_passage_id: attr_or_empty(root, "startnode"),
        id: attr_or_empty(root, "ifid"),
        nodes,
    })
}

fn lift_node(node: ElementRef) -> GraphNode {
    GraphNode {
        name: attr_or_empty(node, "name"),
        tags: attr_or_empty(node, "tags"),
        text: node.text().collect(),
    }
}

fn attr_or_empty(element: ElementRef, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}
