//! Primary-personage classification.
//!
//! A primary personage is a character name that sends at least one passage
//! not flagged as secondary. The secondary flag is an authoring-time
//! annotation only; classification consumes it, and the record type handed
//! to chapter assembly no longer carries it.

use tracing::debug;

use crate::grammar::Link;
use crate::passage::Passage;

/// A passage after classification: same content as [`Passage`] minus the
/// secondary-personage flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedPassage {
    pub id: String,
    pub text: String,
    pub links: Vec<Link>,
    pub chapter_number: u32,
    pub is_income: bool,
    pub kind: String,
    pub time: String,
    pub from_name: String,
}

/// Scan the passage sequence once, collecting primary personage names in
/// first-occurrence order, de-duplicated. Passages with no sender or with
/// the secondary flag set contribute nothing.
pub fn classify_personages(passages: Vec<Passage>) -> (Vec<ClassifiedPassage>, Vec<String>) {
    let mut primary: Vec<String> = Vec::new();
    let classified = passages
        .into_iter()
        .map(|passage| {
            let Passage {
                id,
                text,
                links,
                chapter_number,
                meta,
            } = passage;

            if !meta.from_name.is_empty()
                && !meta.is_secondary_personage
                && !primary.contains(&meta.from_name)
            {
                primary.push(meta.from_name.clone());
            }

            ClassifiedPassage {
                id,
                text,
                links,
                chapter_number,
                is_income: meta.is_income,
                kind: meta.kind,
                time: meta.time,
                from_name: meta.from_name,
            }
        })
        .collect();

    debug!(personages = primary.len(), "classified personages");
    (classified, primary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::PassageMetadata;

    fn passage(id: &str, from_name: &str, secondary: bool) -> Passage {
        Passage {
            id: id.to_string(),
            text: String::new(),
            links: Vec::new(),
            chapter_number: 1,
            meta: PassageMetadata {
                from_name: from_name.to_string(),
                is_secondary_personage: secondary,
                ..PassageMetadata::default()
            },
        }
    }

    #[test]
    fn secondary_flag_does_not_shadow_a_primary_appearance() {
        let (_, primary) =
            classify_personages(vec![passage("a", "X", false), passage("b", "X", true)]);
        assert_eq!(primary, vec!["X".to_string()]);
    }

    #[test]
    fn only_secondary_appearances_never_promote() {
        let (_, primary) =
            classify_personages(vec![passage("a", "X", true), passage("b", "Y", false)]);
        assert_eq!(primary, vec!["Y".to_string()]);
    }

    #[test]
    fn empty_sender_contributes_nothing() {
        let (classified, primary) = classify_personages(vec![passage("a", "", false)]);
        assert!(primary.is_empty());
        assert_eq!(classified.len(), 1);
    }

    #[test]
    fn names_keep_first_occurrence_order() {
        let (_, primary) = classify_personages(vec![
            passage("a", "Zoe", false),
            passage("b", "Ann", false),
            passage("c", "Zoe", false),
        ]);
        assert_eq!(primary, vec!["Zoe".to_string(), "Ann".to_string()]);
    }

    #[test]
    fn every_passage_survives_classification() {
        let (classified, _) = classify_personages(vec![
            passage("a", "X", true),
            passage("b", "", false),
        ]);
        assert_eq!(classified.len(), 2);
        assert_eq!(classified[0].id, "a");
        assert_eq!(classified[0].from_name, "X");
    }
}
