/// Score shaping constants for the symptom scorer.
pub mod shaping {
    /// Weight of specificity (share of the disease profile matched).
    pub const SPECIFICITY_WEIGHT: f64 = 0.55;

    /// Weight of coverage (share of the reported symptoms explained).
    pub const COVERAGE_WEIGHT: f64 = 0.45;

    /// Upper bound for any score.
    pub const MAX_CONFIDENCE: f64 = 99.0;

    /// Added when four or more symptoms match.
    pub const STRONG_EVIDENCE_BOOST: f64 = 8.0;

    /// Added when exactly three symptoms match.
    pub const MODERATE_EVIDENCE_BOOST: f64 = 4.0;

    /// Multiplier applied to single-symptom matches.
    pub const SINGLE_MATCH_FACTOR: f64 = 0.35;

    /// Floor for single-symptom matches.
    pub const SINGLE_MATCH_FLOOR: f64 = 5.0;
}

use shaping::*;

/// Combine specificity and coverage into a 0–100 score.
pub fn weighted_score(specificity: f64, coverage: f64) -> f64 {
    (SPECIFICITY_WEIGHT * specificity + COVERAGE_WEIGHT * coverage) * 100.0
}

/// Reward corroborating evidence: +8 at four or more matches, +4 at three.
pub fn apply_evidence_boost(score: f64, match_count: usize) -> f64 {
    if match_count >= 4 {
        (score + STRONG_EVIDENCE_BOOST).min(MAX_CONFIDENCE)
    } else if match_count == 3 {
        (score + MODERATE_EVIDENCE_BOOST).min(MAX_CONFIDENCE)
    } else {
        score
    }
}

/// Single-symptom matches are shown as clearly low confidence.
pub fn apply_single_match_penalty(score: f64, match_count: usize) -> f64 {
    if match_count == 1 {
        (score * SINGLE_MATCH_FACTOR).max(SINGLE_MATCH_FLOOR)
    } else {
        score
    }
}

/// Boost first, then penalty. Boost needs ≥ 3 matches and the penalty
/// exactly 1, so at most one of them changes the score.
pub fn shape_score(raw: f64, match_count: usize) -> f64 {
    let boosted = apply_evidence_boost(raw, match_count);
    apply_single_match_penalty(boosted, match_count)
}

/// Clamp to the reportable maximum and round to two decimals.
pub fn finalize_confidence(score: f64) -> f64 {
    round2(score.min(MAX_CONFIDENCE))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
