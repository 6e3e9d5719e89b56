//! Symptom advisor: turns a loose list of reported symptoms into a
//! best-guess disease, a confidence figure and care recommendations.
//!
//! Pipeline: normalize → score (profiles + confidence shaping) → resolve
//! (catalog or fallback) → record history. The two reference tables are
//! immutable statics; the catalog and patient directory sit behind traits.

pub mod confidence;
pub mod engine;
pub mod fallback;
pub mod normalize;
pub mod profiles;
pub mod recorder;
pub mod resolver;
pub mod scoring;
pub mod store;
pub mod suggestion;
pub mod traits;
pub mod types;
pub mod vocabulary;

pub use engine::{disease_detail, latest_result, predict, prediction_history};
pub use normalize::{normalize_symptoms, SymptomSet};
pub use resolver::ResolvedDisease;
pub use store::{SqliteDiseaseCatalog, SqlitePatientDirectory};
pub use traits::{DiseaseCatalog, PatientDirectory};
pub use types::*;
