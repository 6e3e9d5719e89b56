//! Boundaries to the two external collaborators.
//!
//! - DiseaseCatalog: structured treatment data (read-only for the advisor)
//! - PatientDirectory: patient identity + prediction history
//!
//! Both take the connection per call so one request can share a single
//! SQLite handle across lookups and the history append.

use rusqlite::Connection;
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::*;

/// Read access to the curated disease catalog.
pub trait DiseaseCatalog: Send + Sync {
    /// Exact-name lookup.
    fn find_exact(&self, conn: &Connection, name: &str) -> Result<Option<Disease>, DatabaseError>;

    /// Case-insensitive name lookup.
    fn find_nocase(&self, conn: &Connection, name: &str) -> Result<Option<Disease>, DatabaseError>;

    fn find_by_id(&self, conn: &Connection, id: &Uuid) -> Result<Option<Disease>, DatabaseError>;

    /// Precaution texts, ascending priority.
    fn precautions(&self, conn: &Connection, disease: &Disease) -> Result<Vec<String>, DatabaseError>;

    fn diet(&self, conn: &Connection, disease: &Disease) -> Result<Vec<DiseaseDiet>, DatabaseError>;

    fn exercises(
        &self,
        conn: &Connection,
        disease: &Disease,
    ) -> Result<Vec<DiseaseExercise>, DatabaseError>;

    /// Up to `limit` medicines, ascending priority.
    fn medicines(
        &self,
        conn: &Connection,
        disease: &Disease,
        limit: usize,
    ) -> Result<Vec<DiseaseMedicine>, DatabaseError>;
}

/// Patient identity and prediction history.
pub trait PatientDirectory: Send + Sync {
    fn patient(&self, conn: &Connection, id: &Uuid) -> Result<Option<Patient>, DatabaseError>;

    /// Append one prediction event.
    fn append_prediction(
        &self,
        conn: &Connection,
        record: &PredictionHistory,
    ) -> Result<(), DatabaseError>;

    /// Newest first.
    fn predictions(
        &self,
        conn: &Connection,
        patient_id: &Uuid,
    ) -> Result<Vec<PredictionHistory>, DatabaseError>;

    fn latest_prediction(
        &self,
        conn: &Connection,
        patient_id: &Uuid,
    ) -> Result<Option<PredictionHistory>, DatabaseError>;
}
