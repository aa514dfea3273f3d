//! Top-level story assembly and the conversion pipeline.
//!
//! The pipeline is a strict linear sequence: load graph and metadata,
//! extract passages, classify personages, assemble chapters, assemble the
//! story, write the document. Each stage fully consumes its input before the
//! next begins; there is no partial-success mode.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::chapter::{self, Chapter};
use crate::error::ConvertError;
use crate::graph::{self, StoryGraph};
use crate::meta::StoryMeta;
use crate::passage;
use crate::personage;

/// The root output aggregate.
///
/// All metadata-document fields other than the free-chapter list pass
/// through via `extra`; the rest is computed by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub primary_personages: Vec<String>,
    pub name: String,
    pub start_passage_id: String,
    pub id: String,
    pub chapters: Vec<Chapter>,
}

/// Run the full pipeline over an already-loaded graph and metadata document.
pub fn convert(graph: &StoryGraph, meta: StoryMeta) -> Result<Story, ConvertError> {
    let passages = passage::extract_passages(graph)?;
    let (passages, primary_personages) = personage::classify_personages(passages);
    let chapters = chapter::assemble_chapters(passages, &meta);
    debug!(chapters = chapters.len(), "assembled chapters");

    Ok(Story {
        extra: meta.extra,
        primary_personages,
        name: graph.name.clone(),
        start_passage_id: graph.start_passage_id.clone(),
        id: graph.id.clone(),
        chapters,
    })
}

/// Convert from source texts: parse the export markup, decode the metadata
/// document, run the pipeline. `meta_origin` names the metadata source in
/// decode errors.
pub fn convert_sources(
    graph_html: &str,
    meta_json: &str,
    meta_origin: &str,
) -> Result<Story, ConvertError> {
    let graph = graph::load_story_graph(graph_html)?;
    let meta = StoryMeta::from_json(meta_json).map_err(|e| ConvertError::MetaDecode {
        path: meta_origin.to_string(),
        reason: e.to_string(),
    })?;
    convert(&graph, meta)
}

/// File-to-file conversion: read both inputs, convert, write the assembled
/// document as one complete JSON value to `output`.
pub fn run(
    story_path: &Path,
    meta_path: &Path,
    output_path: &Path,
    pretty: bool,
) -> Result<(), ConvertError> {
    let graph_html = read_input(story_path)?;
    let meta_json = read_input(meta_path)?;

    let story = convert_sources(&graph_html, &meta_json, &meta_path.display().to_string())?;

    let bytes = if pretty {
        serde_json::to_vec_pretty(&story)
    } else {
        serde_json::to_vec(&story)
    }
    .map_err(|e| ConvertError::OutputWrite {
        path: output_path.display().to_string(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })?;

    fs::write(output_path, bytes).map_err(|e| ConvertError::OutputWrite {
        path: output_path.display().to_string(),
        source: e,
    })?;

    info!(output = %output_path.display(), "story document written");
    Ok(())
}

fn read_input(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|e| ConvertError::InputRead {
        path: path.display().to_string(),
        source: e,
    })
}
