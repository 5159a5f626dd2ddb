//! Narrative selection over the curated corpus.
//!
//! The selector is independent of the pixel pipeline: it reads only the
//! per-region assessments and the method gate, picks a base fragment among
//! the equally-eligible corpus entries through the injected random source,
//! and appends a confidence-banded qualifier. Randomness here never feeds
//! back into any numeric field.

pub mod corpus;

pub use corpus::{MethodClauses, NarrativeCorpus, RegionVoice};

use crate::analysis::{QualityClass, RegionAssessment};
use crate::scoring::AnalysisMethod;
use rand::seq::SliceRandom;
use rand::Rng;

/// Qualifier appended when confidence exceeds 0.8.
const QUALIFIER_EXCEPTIONAL: &str =
    "The line analysis confirms exceptional strength in this area.";
/// Qualifier appended when confidence exceeds 0.6.
const QUALIFIER_CLEAR: &str = "The line analysis validates clear definition here.";
/// Qualifier for anything weaker that still registered.
const QUALIFIER_MODERATE: &str = "The line analysis detects moderate presence here.";
/// Override used when the region did not register at all.
const QUALIFIER_DORMANT: &str =
    "The trace is faint in this area, a dormant potential waiting to be drawn out.";

/// Fallback when a custom corpus leaves a region or band empty.
const FALLBACK_FRAGMENT: &str = "This line keeps its own counsel.";
/// Fallback opener when a custom corpus ships no summaries.
const FALLBACK_SUMMARY: &str = "The palm before me carries a coherent story.";

/// Selects and adapts descriptive text from a [`NarrativeCorpus`].
pub struct NarrativeSelector<'a> {
    corpus: &'a NarrativeCorpus,
}

impl<'a> NarrativeSelector<'a> {
    pub fn new(corpus: &'a NarrativeCorpus) -> Self {
        Self { corpus }
    }

    /// Compose the narrative for one region: a base fragment chosen among the
    /// band's eligible entries, plus the confidence-banded qualifier. An
    /// undetected region overrides the banding with the dormant qualifier.
    pub fn region_narrative<R: Rng + ?Sized>(
        &self,
        assessment: &RegionAssessment,
        rng: &mut R,
    ) -> String {
        let base = self
            .corpus
            .voice(assessment.region)
            .map(|voice| voice.fragments(assessment.label))
            .and_then(|fragments| fragments.choose(rng))
            .map(String::as_str)
            .unwrap_or(FALLBACK_FRAGMENT);

        let qualifier = if !assessment.detected {
            QUALIFIER_DORMANT
        } else if assessment.confidence > 0.8 {
            QUALIFIER_EXCEPTIONAL
        } else if assessment.confidence > 0.6 {
            QUALIFIER_CLEAR
        } else {
            QUALIFIER_MODERATE
        };

        format!("{base} {qualifier}")
    }

    /// Compose the overall narrative: a summary opener, the
    /// method-conditioned clause, and, when any region cleared confidence
    /// 0.6, an explicit mention of those lines.
    pub fn overall_narrative<R: Rng + ?Sized>(
        &self,
        quality: QualityClass,
        method: AnalysisMethod,
        regions: &[RegionAssessment],
        rng: &mut R,
    ) -> String {
        let opener = self
            .corpus
            .summaries
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_SUMMARY);

        let clause = match method {
            AnalysisMethod::HeuristicEnhanced => &self.corpus.method_clauses.heuristic_enhanced,
            AnalysisMethod::NarrativeOnly => &self.corpus.method_clauses.narrative_only,
        };

        let mut narrative = format!("{opener} {clause}");

        let strong: Vec<&str> = regions
            .iter()
            .filter(|r| r.confidence > 0.6)
            .map(|r| r.region.line_name())
            .collect();
        if !strong.is_empty() {
            narrative.push_str(&format!(
                " The {} stand out with particular clarity.",
                join_names(&strong)
            ));
        }

        if quality == QualityClass::Poor {
            narrative.push_str(" Read gently: the photograph left some details to intuition.");
        }

        narrative
    }
}

fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{QualityLabel, RegionKey};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assessment(region: RegionKey, confidence: f32) -> RegionAssessment {
        RegionAssessment {
            region,
            confidence,
            detected: confidence > 0.3,
            label: QualityLabel::from_confidence(confidence),
        }
    }

    #[test]
    fn undetected_region_gets_the_dormant_override() {
        let corpus = NarrativeCorpus::default();
        let selector = NarrativeSelector::new(&corpus);
        let mut rng = StdRng::seed_from_u64(1);
        let text = selector.region_narrative(&assessment(RegionKey::PrimaryCurve, 0.1), &mut rng);
        assert!(text.contains("dormant potential"), "{text}");
    }

    #[test]
    fn qualifier_bands_follow_confidence() {
        let corpus = NarrativeCorpus::default();
        let selector = NarrativeSelector::new(&corpus);
        let mut rng = StdRng::seed_from_u64(2);

        let high = selector.region_narrative(&assessment(RegionKey::UpperBand, 0.9), &mut rng);
        assert!(high.contains("exceptional strength"), "{high}");

        let mid = selector.region_narrative(&assessment(RegionKey::UpperBand, 0.7), &mut rng);
        assert!(mid.contains("clear definition"), "{mid}");

        let low = selector.region_narrative(&assessment(RegionKey::UpperBand, 0.5), &mut rng);
        assert!(low.contains("moderate presence"), "{low}");
    }

    #[test]
    fn overall_narrative_names_strong_regions() {
        let corpus = NarrativeCorpus::default();
        let selector = NarrativeSelector::new(&corpus);
        let mut rng = StdRng::seed_from_u64(3);
        let regions = vec![
            assessment(RegionKey::PrimaryCurve, 0.9),
            assessment(RegionKey::UpperBand, 0.2),
            assessment(RegionKey::MidBand, 0.65),
            assessment(RegionKey::CentralBand, 0.6),
        ];
        let text = selector.overall_narrative(
            QualityClass::Good,
            AnalysisMethod::HeuristicEnhanced,
            &regions,
            &mut rng,
        );
        assert!(text.contains("life line and head line"), "{text}");
        assert!(!text.contains("fate line"), "{text}");
    }

    #[test]
    fn overall_narrative_reflects_the_method_clause() {
        let corpus = NarrativeCorpus::default();
        let selector = NarrativeSelector::new(&corpus);
        let mut rng = StdRng::seed_from_u64(4);
        let text = selector.overall_narrative(
            QualityClass::Poor,
            AnalysisMethod::NarrativeOnly,
            &[],
            &mut rng,
        );
        assert!(text.contains("traditional interpretation"), "{text}");
    }

    #[test]
    fn empty_custom_corpus_falls_back_without_panicking() {
        let corpus = NarrativeCorpus {
            regions: Default::default(),
            summaries: Vec::new(),
            method_clauses: MethodClauses::default(),
        };
        let selector = NarrativeSelector::new(&corpus);
        let mut rng = StdRng::seed_from_u64(5);
        let text = selector.region_narrative(&assessment(RegionKey::MidBand, 0.7), &mut rng);
        assert!(text.contains(FALLBACK_FRAGMENT), "{text}");
    }
}
