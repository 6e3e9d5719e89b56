//! Built-in disease → symptom profiles driving the scorer.
//!
//! Declaration order is significant: equal scores resolve to the disease
//! declared first.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Raw table, canonical keys only (lowercase, `_`-joined).
static DISEASE_SYMPTOM_TABLE: &[(&str, &[&str])] = &[
    (
        "GERD",
        &[
            "acidity", "heartburn", "chest_pain", "cough", "throat_irritation",
            "difficulty_swallowing", "regurgitation", "bloating", "burning_chest", "sour_taste",
            "hoarseness", "chronic_cough", "nausea_after_meals", "bad_breath", "tooth_erosion",
            "lump_in_throat", "wheezing", "pain_after_eating", "belching", "hiccups",
            "stomach_pain", "dry_cough",
        ],
    ),
    (
        "Diabetes",
        &[
            "frequent_urination", "excessive_thirst", "fatigue", "blurred_vision", "weight_loss",
            "increased_hunger", "slow_healing", "numbness_tingling", "dry_skin", "yeast_infections",
            "irritability", "dizziness", "weakness", "mood_changes", "dark_skin_patches",
            "repeated_infections", "excessive_sweating", "trembling", "confusion", "headache",
        ],
    ),
    (
        "Hypertension",
        &[
            "headache", "dizziness", "chest_pain", "shortness_of_breath", "nosebleeds",
            "blurred_vision", "fatigue", "irregular_heartbeat", "anxiety", "ear_pounding",
            "facial_flushing", "blood_urine", "chest_pressure", "difficulty_sleeping",
            "nervousness", "sweating", "nausea", "weakness", "confusion", "vision_problems",
        ],
    ),
    (
        "Common Cold",
        &[
            "runny_nose", "cough", "sore_throat", "sneezing", "fever", "congestion",
            "mild_headache", "body_aches", "fatigue", "watery_eyes", "stuffy_nose",
            "scratchy_throat", "mild_chills", "loss_of_appetite", "slight_fever",
            "mucus", "postnasal_drip", "hoarseness", "ear_fullness", "sinus_pressure",
        ],
    ),
    (
        "Migraine",
        &[
            "severe_headache", "nausea", "light_sensitivity", "visual_disturbances",
            "sound_sensitivity", "throbbing_pain", "one_sided_headache", "vomiting", "aura",
            "blurred_vision", "dizziness", "fatigue", "neck_pain", "mood_changes", "food_cravings",
            "stiff_neck", "confusion", "tingling", "weakness", "difficulty_speaking",
        ],
    ),
    (
        "Asthma",
        &[
            "shortness_of_breath", "wheezing", "chest_tightness", "cough", "difficulty_breathing",
            "rapid_breathing", "anxiety", "fatigue", "trouble_sleeping", "chronic_cough",
            "chest_pain", "rapid_pulse", "pale_skin", "sweating", "panic",
            "exercise_induced_symptoms", "nighttime_cough", "phlegm", "tight_chest",
        ],
    ),
    (
        "Gastroenteritis",
        &[
            "diarrhea", "nausea", "vomiting", "abdominal_pain", "fever", "cramping",
            "bloating", "loss_of_appetite", "dehydration", "weakness", "headache",
            "muscle_aches", "watery_stools", "stomach_upset", "chills", "fatigue",
            "blood_in_stool", "mucus_in_stool", "urgent_bowel_movement",
        ],
    ),
    (
        "Bronchitis",
        &[
            "cough", "mucus_production", "fatigue", "chest_discomfort", "fever",
            "shortness_of_breath", "sore_throat", "runny_nose", "body_aches", "wheezing",
            "phlegm", "chills", "chest_tightness", "headache", "blocked_nose", "sneezing",
            "hoarseness", "green_yellow_mucus", "breathing_difficulty", "weakness",
        ],
    ),
    (
        "Pneumonia",
        &[
            "cough", "fever", "chest_pain", "shortness_of_breath", "fatigue", "chills",
            "sweating", "phlegm", "blood_in_phlegm", "loss_of_appetite", "nausea",
            "vomiting", "rapid_breathing", "sharp_chest_pain", "confusion", "bluish_lips",
            "muscle_aches", "weakness", "headache", "diarrhea", "ear_pain",
        ],
    ),
    (
        "Arthritis",
        &[
            "joint_pain", "stiffness", "swelling", "reduced_range_of_motion", "tenderness",
            "warm_joints", "morning_stiffness", "fatigue", "fever", "weight_loss",
            "joint_deformity", "grinding_sensation", "bone_spurs", "muscle_weakness",
            "numbness_tingling", "difficulty_walking", "redness_around_joints",
            "cracking_joints", "pain_after_rest", "inflammation",
        ],
    ),
    (
        "Anxiety",
        &[
            "restlessness", "rapid_heartbeat", "sweating", "difficulty_concentrating", "insomnia",
            "irritability", "muscle_tension", "worry", "fatigue", "panic", "trembling",
            "chest_tightness", "shortness_of_breath", "dizziness", "nausea", "headache",
            "stomach_upset", "avoiding_situations", "feeling_on_edge", "sleep_problems",
        ],
    ),
    (
        "Depression",
        &[
            "persistent_sadness", "loss_of_interest", "fatigue", "sleep_changes",
            "appetite_changes", "weight_changes", "hopelessness", "irritability",
            "difficulty_concentrating", "suicidal_thoughts", "aches_pains", "digestive_issues",
            "slowed_movement", "guilt", "worthlessness", "low_energy", "insomnia", "oversleeping",
            "withdrawal", "loss_of_pleasure", "indecisiveness",
        ],
    ),
];

/// One disease's symptom profile. Membership is all that matters;
/// duplicate entries in the table collapse here.
#[derive(Debug, Clone)]
pub struct DiseaseProfile {
    pub name: &'static str,
    symptoms: HashSet<&'static str>,
}

impl DiseaseProfile {
    fn new(name: &'static str, symptoms: &'static [&'static str]) -> Self {
        Self {
            name,
            symptoms: symptoms.iter().copied().collect(),
        }
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.symptoms.contains(symptom)
    }

    /// Number of distinct symptoms in the profile.
    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn symptoms(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.symptoms.iter().copied()
    }
}

static PROFILES: LazyLock<Vec<DiseaseProfile>> = LazyLock::new(|| {
    DISEASE_SYMPTOM_TABLE
        .iter()
        .map(|&(name, symptoms)| DiseaseProfile::new(name, symptoms))
        .collect()
});

/// All profiles in declaration order.
pub fn disease_profiles() -> &'static [DiseaseProfile] {
    &PROFILES
}

pub fn find_profile(name: &str) -> Option<&'static DiseaseProfile> {
    PROFILES.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::normalize::canonicalize;

    #[test]
    fn declaration_order_preserved() {
        let names: Vec<&str> = disease_profiles().iter().map(|p| p.name).collect();
        assert_eq!(names.first(), Some(&"GERD"));
        assert_eq!(names.last(), Some(&"Depression"));
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn profile_sizes_match_table() {
        assert_eq!(find_profile("GERD").unwrap().len(), 22);
        assert_eq!(find_profile("Hypertension").unwrap().len(), 20);
        assert_eq!(find_profile("Gastroenteritis").unwrap().len(), 19);
    }

    #[test]
    fn every_entry_is_canonical() {
        for profile in disease_profiles() {
            for symptom in profile.symptoms() {
                assert_eq!(canonicalize(symptom), symptom, "{} in {}", symptom, profile.name);
            }
        }
    }

    #[test]
    fn unknown_profile_is_none() {
        assert!(find_profile("Gout").is_none());
    }
}
