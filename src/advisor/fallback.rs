//! Built-in fallback knowledge base.
//!
//! Used when a predicted disease has no Disease Catalog entry. Bundled as
//! JSON (`resources/fallback_diseases.json`) and parsed once per process.
//! Carries no medicine data: medicines come from the curated catalog only.

use std::sync::LazyLock;

use serde::Deserialize;

use crate::models::enums::SeverityLevel;

use super::types::{DiseaseInfo, DietPlan, ExerciseItem, RecommendationBundle};

const BUNDLED_FALLBACK_JSON: &str = include_str!("../../resources/fallback_diseases.json");

#[derive(Debug, Clone, Deserialize)]
pub struct FallbackDisease {
    pub name: String,
    pub description: String,
    pub severity_level: SeverityLevel,
    pub specialist_required: String,
    #[serde(default)]
    pub precautions: Vec<String>,
    #[serde(default)]
    pub diet: DietPlan,
    #[serde(default)]
    pub exercises: Vec<ExerciseItem>,
}

impl FallbackDisease {
    pub fn info(&self) -> DiseaseInfo {
        DiseaseInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            severity_level: self.severity_level,
            specialist_required: self.specialist_required.clone(),
        }
    }

    pub fn recommendations(&self) -> RecommendationBundle {
        RecommendationBundle {
            precautions: self.precautions.clone(),
            diet: self.diet.clone(),
            exercises: self.exercises.clone(),
            medicines: Vec::new(),
        }
    }
}

/// Ordered fallback entries, keyed by disease name.
#[derive(Debug, Clone, Default)]
pub struct FallbackKnowledgeBase {
    entries: Vec<FallbackDisease>,
}

impl FallbackKnowledgeBase {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            entries: serde_json::from_str(json)?,
        })
    }

    /// Trimmed, case-insensitive exact match. No fuzzy matching.
    pub fn lookup(&self, name: &str) -> Option<&FallbackDisease> {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        self.entries.iter().find(|e| e.name.to_lowercase() == key)
    }

    /// Fallback bundle for `name`, or an empty bundle when unknown.
    pub fn recommendations(&self, name: &str) -> RecommendationBundle {
        self.lookup(name)
            .map(FallbackDisease::recommendations)
            .unwrap_or_default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static FALLBACK_BASE: LazyLock<FallbackKnowledgeBase> = LazyLock::new(|| {
    FallbackKnowledgeBase::from_json(BUNDLED_FALLBACK_JSON).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Bundled fallback knowledge base is malformed");
        FallbackKnowledgeBase::default()
    })
});

pub fn fallback_base() -> &'static FallbackKnowledgeBase {
    &FALLBACK_BASE
}

/// Disease summary from the fallback base, `None` when not covered.
pub fn lookup_disease_info(name: &str) -> Option<DiseaseInfo> {
    fallback_base().lookup(name).map(FallbackDisease::info)
}

pub fn fallback_recommendations(name: &str) -> RecommendationBundle {
    fallback_base().recommendations(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::profiles::disease_profiles;

    #[test]
    fn bundled_json_parses() {
        let base = FallbackKnowledgeBase::from_json(BUNDLED_FALLBACK_JSON).unwrap();
        assert_eq!(base.len(), 12);
    }

    #[test]
    fn every_profile_has_fallback_entry() {
        for profile in disease_profiles() {
            assert!(
                fallback_base().lookup(profile.name).is_some(),
                "no fallback entry for {}",
                profile.name
            );
        }
    }

    #[test]
    fn lookup_is_case_insensitive_exact() {
        let info = lookup_disease_info("  common cold ").unwrap();
        assert_eq!(info.name, "Common Cold");
        assert_eq!(info.severity_level, SeverityLevel::Low);
        assert_eq!(info.specialist_required, "General Physician");
        assert!(lookup_disease_info("cold").is_none());
        assert!(lookup_disease_info("").is_none());
    }

    #[test]
    fn fallback_bundle_has_no_medicines() {
        let bundle = fallback_recommendations("GERD");
        assert_eq!(bundle.precautions.len(), 5);
        assert_eq!(bundle.diet.recommended.len(), 6);
        assert_eq!(bundle.diet.avoid.len(), 5);
        assert_eq!(bundle.exercises[0].exercise_name, "Walking");
        assert_eq!(bundle.exercises[0].intensity, "light");
        assert!(bundle.medicines.is_empty());
    }

    #[test]
    fn unknown_disease_yields_empty_bundle() {
        assert!(fallback_recommendations("Scurvy").is_empty());
    }
}
