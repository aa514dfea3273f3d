//! Chapter assembly: partitioning the flat passage list by the metadata
//! document's declared chapters.

use serde::Serialize;
use tracing::warn;

use crate::grammar::Link;
use crate::meta::StoryMeta;
use crate::personage::ClassifiedPassage;

/// A passage in its final output form. Chapter membership is implied by
/// containment, so the chapter number is gone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterPassage {
    pub id: String,
    pub text: String,
    pub links: Vec<Link>,
    pub is_income: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
    pub from_name: String,
}

/// One assembled chapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Zero-based index, matching the descriptor's position.
    pub id: usize,
    pub name: String,
    pub is_free: bool,
    pub store_product_id: String,
    /// Passages in original extraction order.
    pub passages: Vec<ChapterPassage>,
}

/// Partition passages into chapters, one per metadata descriptor, in
/// descriptor order. A descriptor at index `i` collects the passages whose
/// chapter number is `i + 1` and is free iff `i + 1` appears in the
/// free-chapter list.
///
/// A passage whose chapter number matches no descriptor is excluded from the
/// output; the exclusion is deliberate pass-through of the source semantics,
/// logged so orphaned content does not vanish unnoticed.
pub fn assemble_chapters(passages: Vec<ClassifiedPassage>, meta: &StoryMeta) -> Vec<Chapter> {
    let mut buckets: Vec<Vec<ChapterPassage>> = meta.chapters.iter().map(|_| Vec::new()).collect();

    for passage in passages {
        match passage
            .chapter_number
            .checked_sub(1)
            .map(|n| n as usize)
            .filter(|&i| i < buckets.len())
        {
            Some(i) => buckets[i].push(strip_chapter_number(passage)),
            None => warn!(
                passage_id = %passage.id,
                chapter_number = passage.chapter_number,
                "passage matches no declared chapter, dropping it"
            ),
        }
    }

    meta.chapters
        .iter()
        .zip(buckets)
        .enumerate()
        .map(|(i, (descriptor, passages))| Chapter {
            id: i,
            name: descriptor.name.clone(),
            is_free: meta.free_chapters_number.contains(&((i + 1) as u32)),
            store_product_id: descriptor.store_product_id.clone(),
            passages,
        })
        .collect()
}

fn strip_chapter_number(passage: ClassifiedPassage) -> ChapterPassage {
    let ClassifiedPassage {
        id,
        text,
        links,
        chapter_number: _,
        is_income,
        kind,
        time,
        from_name,
    } = passage;
    ChapterPassage {
        id,
        text,
        links,
        is_income,
        kind,
        time,
        from_name,
    }
}
