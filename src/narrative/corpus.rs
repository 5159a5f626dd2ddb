//! Curated narrative corpus.
//!
//! The corpus is static configuration, not computation: per-region fragment
//! lists keyed by confidence band, plus the overall summary openers and the
//! method-conditioned clauses. A compiled-in default ships with the crate
//! and a JSON file with the same shape can replace any part of it.

use crate::analysis::{QualityLabel, RegionKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Base fragments for one region, one list per confidence band.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RegionVoice {
    pub weak: Vec<String>,
    pub moderate: Vec<String>,
    pub strong: Vec<String>,
    pub very_strong: Vec<String>,
}

impl RegionVoice {
    /// Fragments eligible for a band.
    pub fn fragments(&self, label: QualityLabel) -> &[String] {
        match label {
            QualityLabel::Weak => &self.weak,
            QualityLabel::Moderate => &self.moderate,
            QualityLabel::Strong => &self.strong,
            QualityLabel::VeryStrong => &self.very_strong,
        }
    }
}

/// Sentence fragments appended to the overall summary depending on how the
/// reading was produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MethodClauses {
    pub heuristic_enhanced: String,
    pub narrative_only: String,
}

impl Default for MethodClauses {
    fn default() -> Self {
        Self {
            heuristic_enhanced: "The image analysis was strong enough to anchor this reading \
                                 directly in the lines of your palm."
                .to_string(),
            narrative_only: "The image offered limited detail, so this reading leans on the \
                             traditional interpretation of your palm's character."
                .to_string(),
        }
    }
}

/// The full curated corpus.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct NarrativeCorpus {
    pub regions: BTreeMap<RegionKey, RegionVoice>,
    pub summaries: Vec<String>,
    pub method_clauses: MethodClauses,
}

impl NarrativeCorpus {
    /// Voice for a region; falls back to an empty voice when a custom corpus
    /// omits one.
    pub fn voice(&self, key: RegionKey) -> Option<&RegionVoice> {
        self.regions.get(&key)
    }
}

impl Default for NarrativeCorpus {
    fn default() -> Self {
        let mut regions = BTreeMap::new();

        regions.insert(
            RegionKey::PrimaryCurve,
            voice(
                &[
                    "Your life line traces a quiet, steady arc around the thumb.",
                    "The life line keeps a low profile, hinting at reserves not yet drawn on.",
                ],
                &[
                    "Your life line shows a balanced rhythm between effort and rest.",
                    "The life line curves with an even, unhurried energy.",
                ],
                &[
                    "Your life line sweeps in a generous arc, a sign of durable vitality.",
                    "The life line is deeply traced, speaking to stamina that outlasts setbacks.",
                ],
                &[
                    "Your life line is remarkably vivid, an unbroken arc of vitality.",
                    "The life line commands the palm, deep and continuous from wrist to thumb.",
                ],
            ),
        );

        regions.insert(
            RegionKey::UpperBand,
            voice(
                &[
                    "Your heart line stays faint, guarding its feelings closely.",
                    "The heart line is lightly drawn, suggesting affection expressed in private.",
                ],
                &[
                    "Your heart line runs with gentle consistency across the upper palm.",
                    "The heart line holds a measured course, warm without excess.",
                ],
                &[
                    "Your heart line is well defined, open-handed in matters of feeling.",
                    "The heart line cuts a confident path, quick to connect and slow to forget.",
                ],
                &[
                    "Your heart line is strikingly deep, carrying emotion as a first language.",
                    "The heart line dominates the upper palm, generous and unmistakable.",
                ],
            ),
        );

        regions.insert(
            RegionKey::MidBand,
            voice(
                &[
                    "Your head line rests lightly, thought moving below the surface.",
                    "The head line is faint here, favouring intuition over deliberation.",
                ],
                &[
                    "Your head line travels a steady middle course, practical and even.",
                    "The head line shows a patient, methodical slope across the palm.",
                ],
                &[
                    "Your head line is cleanly cut, a mind that finishes what it starts.",
                    "The head line runs long and clear, analysis tempered by imagination.",
                ],
                &[
                    "Your head line is exceptionally crisp, thought and will moving as one.",
                    "The head line carves straight across the palm with rare clarity.",
                ],
            ),
        );

        regions.insert(
            RegionKey::CentralBand,
            voice(
                &[
                    "Your fate line is barely sketched, a path still choosing itself.",
                    "The fate line stays soft, leaving direction to circumstance and choice.",
                ],
                &[
                    "Your fate line rises steadily, work shaping a recognisable course.",
                    "The fate line holds the centre with quiet persistence.",
                ],
                &[
                    "Your fate line climbs the palm decisively, purpose gathering momentum.",
                    "The fate line is firmly drawn, ambition with a spine to it.",
                ],
                &[
                    "Your fate line ascends unbroken from wrist to fingers, a singular course.",
                    "The fate line is etched with unusual force, direction chosen early and kept.",
                ],
            ),
        );

        Self {
            regions,
            summaries: [
                "The palm before me carries a coherent story.",
                "Taken together, the lines of this palm agree with one another.",
                "This palm reads as a whole rather than as separate marks.",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            method_clauses: MethodClauses::default(),
        }
    }
}

fn voice(weak: &[&str], moderate: &[&str], strong: &[&str], very_strong: &[&str]) -> RegionVoice {
    let own = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    RegionVoice {
        weak: own(weak),
        moderate: own(moderate),
        strong: own(strong),
        very_strong: own(very_strong),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_corpus_covers_every_region_and_band() {
        let corpus = NarrativeCorpus::default();
        for key in RegionKey::ALL {
            let voice = corpus.voice(key).expect("default corpus misses a region");
            for label in [
                QualityLabel::Weak,
                QualityLabel::Moderate,
                QualityLabel::Strong,
                QualityLabel::VeryStrong,
            ] {
                assert!(!voice.fragments(label).is_empty(), "{key:?} {label:?}");
            }
        }
        assert!(!corpus.summaries.is_empty());
    }

    #[test]
    fn corpus_round_trips_through_json() {
        let corpus = NarrativeCorpus::default();
        let json = serde_json::to_string(&corpus).unwrap();
        let back: NarrativeCorpus = serde_json::from_str(&json).unwrap();
        assert_eq!(back.regions.len(), corpus.regions.len());
        assert_eq!(back.summaries, corpus.summaries);
    }

    #[test]
    fn partial_custom_corpus_fills_in_defaults() {
        let custom: NarrativeCorpus = serde_json::from_str(r#"{"summaries": ["Short."]}"#).unwrap();
        assert_eq!(custom.summaries, vec!["Short.".to_string()]);
        // Omitted sections fall back to the compiled-in corpus.
        assert_eq!(custom.regions.len(), 4);
        assert!(!custom.method_clauses.narrative_only.is_empty());
    }
}
