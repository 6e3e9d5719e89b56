//! Weighted set-matching scorer.
//!
//! For each disease profile with at least one matching symptom:
//! specificity = matches / profile size, coverage = matches / reported
//! symptoms, combined 55/45, then shaped by match-count evidence. The
//! strictly highest score wins; ties keep the earlier-declared disease.

use rusqlite::Connection;

use super::confidence::{finalize_confidence, shape_score, weighted_score};
use super::fallback::fallback_base;
use super::normalize::SymptomSet;
use super::profiles::{disease_profiles, DiseaseProfile};
use super::traits::DiseaseCatalog;
use super::types::{AdvisorError, CandidateScore, PredictionResult};

const DEFAULT_SEVERITY: &str = "moderate";
const DEFAULT_SPECIALIST: &str = "General Physician";

/// Score one profile against the reported symptoms. `None` when nothing matches.
pub fn score_disease(profile: &'static DiseaseProfile, symptoms: &SymptomSet) -> Option<CandidateScore> {
    let match_count = symptoms.iter().filter(|s| profile.contains(s)).count();
    if match_count == 0 || profile.is_empty() {
        return None;
    }

    let specificity = match_count as f64 / profile.len() as f64;
    let coverage = match_count as f64 / symptoms.len() as f64;
    let raw_score = weighted_score(specificity, coverage);

    Some(CandidateScore {
        disease_name: profile.name,
        match_count,
        specificity,
        coverage,
        raw_score,
        score: shape_score(raw_score, match_count),
    })
}

/// Every disease with evidence, in table order.
pub fn score_candidates(symptoms: &SymptomSet) -> Vec<CandidateScore> {
    disease_profiles()
        .iter()
        .filter_map(|profile| score_disease(profile, symptoms))
        .collect()
}

/// Highest-scoring candidate. Replacement uses `>` so the first of equal
/// scores is kept.
pub fn best_candidate(symptoms: &SymptomSet) -> Option<CandidateScore> {
    let mut best: Option<CandidateScore> = None;
    for candidate in score_candidates(symptoms) {
        let replace = match &best {
            Some(current) => candidate.score > current.score,
            None => true,
        };
        if replace {
            best = Some(candidate);
        }
    }
    best
}

/// Score the symptoms and attach severity/specialist for the winner, from
/// the catalog when it knows the disease, else from the fallback base.
/// `Ok(None)` means no disease matched at all.
pub fn score(
    conn: &Connection,
    catalog: &dyn DiseaseCatalog,
    symptoms: &SymptomSet,
) -> Result<Option<PredictionResult>, AdvisorError> {
    let Some(best) = best_candidate(symptoms) else {
        tracing::debug!(reported = symptoms.len(), "No disease profile matched");
        return Ok(None);
    };

    let confidence = finalize_confidence(best.score);
    let (severity, specialist) = match catalog.find_exact(conn, best.disease_name) {
        Ok(Some(disease)) => (
            disease.severity_level.as_str().to_string(),
            disease.specialist_required,
        ),
        Ok(None) => fallback_attributes(best.disease_name),
        Err(e) => {
            tracing::warn!(disease = best.disease_name, error = %e, "Catalog lookup failed, using fallback");
            fallback_attributes(best.disease_name)
        }
    };

    tracing::info!(
        disease = best.disease_name,
        confidence,
        matches = best.match_count,
        "Prediction scored"
    );

    Ok(Some(PredictionResult {
        disease_name: best.disease_name.to_string(),
        confidence,
        severity,
        specialist_required: specialist,
    }))
}

fn fallback_attributes(name: &str) -> (String, String) {
    match fallback_base().lookup(name) {
        Some(entry) => (
            entry.severity_level.as_str().to_string(),
            entry.specialist_required.clone(),
        ),
        None => (DEFAULT_SEVERITY.to_string(), DEFAULT_SPECIALIST.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::profiles::find_profile;
    use crate::advisor::store::SqliteDiseaseCatalog;
    use crate::db::repository::insert_disease;
    use crate::db::sqlite::open_memory_database;
    use crate::models::enums::SeverityLevel;
    use crate::models::Disease;

    fn symptoms(items: &[&str]) -> SymptomSet {
        items.iter().collect()
    }

    fn predict(items: &[&str]) -> Option<PredictionResult> {
        let conn = open_memory_database().unwrap();
        score(&conn, &SqliteDiseaseCatalog, &symptoms(items)).unwrap()
    }

    #[test]
    fn single_symptom_against_hypertension_is_penalised() {
        let profile = find_profile("Hypertension").unwrap();
        let c = score_disease(profile, &symptoms(&["headache"])).unwrap();
        assert_eq!(c.match_count, 1);
        assert!((c.specificity - 0.05).abs() < 1e-12);
        assert!((c.raw_score - 47.75).abs() < 1e-9);
        assert_eq!(finalize_confidence(c.score), 16.71);
    }

    #[test]
    fn single_headache_picks_smallest_profile() {
        // Gastroenteritis has 19 symptoms, so its specificity edges out the 20s.
        let result = predict(&["headache"]).unwrap();
        assert_eq!(result.disease_name, "Gastroenteritis");
        assert_eq!(result.confidence, 16.76);
    }

    #[test]
    fn gerd_four_matches_boosted() {
        let result = predict(&["acidity", "heartburn", "chest_pain", "regurgitation"]).unwrap();
        assert_eq!(result.disease_name, "GERD");
        // (0.55 * 4/22 + 0.45 * 1) * 100 = 55, +8 boost
        assert_eq!(result.confidence, 63.0);
        assert_eq!(result.severity, "moderate");
        assert_eq!(result.specialist_required, "Gastroenterologist");
    }

    #[test]
    fn gastroenteritis_two_matches_unshaped() {
        let set = symptoms(&["diarrhea", "vomiting"]);
        let best = best_candidate(&set).unwrap();
        assert_eq!(best.disease_name, "Gastroenteritis");
        assert_eq!(best.match_count, 2);
        assert_eq!(best.score, best.raw_score);
        let result = predict(&["diarrhea", "vomiting"]).unwrap();
        assert_eq!(result.confidence, 50.79);
    }

    #[test]
    fn no_match_returns_none() {
        assert!(predict(&["glowing_skin", "extra_limb"]).is_none());
        assert!(predict(&[]).is_none());
    }

    #[test]
    fn unmatched_symptoms_lower_coverage() {
        let clean = best_candidate(&symptoms(&["diarrhea", "vomiting"])).unwrap();
        let noisy = best_candidate(&symptoms(&["diarrhea", "vomiting", "glowing_skin"])).unwrap();
        assert!(noisy.coverage < clean.coverage);
        assert!(noisy.score < clean.score);
    }

    #[test]
    fn tied_candidates_listed_in_table_order() {
        // Diabetes and Hypertension both list `headache` in 20-symptom profiles.
        let set = symptoms(&["headache"]);
        let candidates = score_candidates(&set);
        let diabetes = candidates.iter().position(|c| c.disease_name == "Diabetes").unwrap();
        let hypertension = candidates
            .iter()
            .position(|c| c.disease_name == "Hypertension")
            .unwrap();
        assert_eq!(candidates[diabetes].score, candidates[hypertension].score);
        assert!(diabetes < hypertension);
    }

    #[test]
    fn score_grows_with_each_extra_match() {
        let gerd = find_profile("GERD").unwrap();
        let mut selected = vec!["acidity", "heartburn"];
        let mut previous = score_disease(gerd, &symptoms(&selected)).unwrap().score;
        assert_eq!(finalize_confidence(previous), 50.0);
        for (extra, expected) in [("chest_pain", 56.5), ("regurgitation", 63.0)] {
            selected.push(extra);
            let current = score_disease(gerd, &symptoms(&selected)).unwrap().score;
            assert!(current >= previous, "{selected:?}: {current} < {previous}");
            assert_eq!(finalize_confidence(current), expected);
            previous = current;
        }
    }

    #[test]
    fn tie_break_is_stable_across_calls() {
        // Several profiles list both; the 19-symptom Gastroenteritis profile
        // has the best specificity.
        let set = symptoms(&["weakness", "fatigue"]);
        let first = best_candidate(&set).unwrap();
        for _ in 0..10 {
            assert_eq!(best_candidate(&set).unwrap(), first);
        }
        assert_eq!(first.disease_name, "Gastroenteritis");
    }

    #[test]
    fn equal_scores_resolve_to_table_order() {
        // confusion + dizziness: Diabetes, Hypertension and Migraine (all 20)
        // contain both; Anxiety contains only dizziness.
        let best = best_candidate(&symptoms(&["confusion", "dizziness"])).unwrap();
        assert_eq!(best.disease_name, "Diabetes");
        assert_eq!(best.match_count, 2);
    }

    #[test]
    fn confidence_always_within_bounds() {
        let sets: [&[&str]; 5] = [
            &["headache"],
            &["cough", "fever"],
            &["joint_pain", "stiffness", "swelling", "tenderness", "warm_joints"],
            &["persistent_sadness", "loss_of_interest", "fatigue"],
            &["sneezing", "not_a_symptom", "also_not", "nope"],
        ];
        for items in sets {
            let result = predict(items).unwrap();
            assert!(
                (5.0..=99.0).contains(&result.confidence),
                "{items:?} -> {}",
                result.confidence
            );
        }
    }

    #[test]
    fn deterministic_for_identical_input() {
        let a = predict(&["cough", "fever", "chills"]).unwrap();
        let b = predict(&["chills", "fever", "cough"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn catalog_overrides_fallback_attributes() {
        let conn = open_memory_database().unwrap();
        insert_disease(
            &conn,
            &Disease {
                id: uuid::Uuid::new_v4(),
                name: "GERD".into(),
                description: "Reflux".into(),
                severity_level: SeverityLevel::High,
                specialist_required: "Internal Medicine".into(),
                created_at: chrono::Local::now().naive_local(),
            },
        )
        .unwrap();
        let result = score(
            &conn,
            &SqliteDiseaseCatalog,
            &symptoms(&["acidity", "heartburn", "regurgitation"]),
        )
        .unwrap()
        .unwrap();
        assert_eq!(result.disease_name, "GERD");
        assert_eq!(result.severity, "high");
        assert_eq!(result.specialist_required, "Internal Medicine");
    }
}
