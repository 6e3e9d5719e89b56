//! SQLite-backed catalog and patient directory.

use rusqlite::Connection;
use uuid::Uuid;

use crate::db::repository;
use crate::db::DatabaseError;
use crate::models::*;

use super::traits::{DiseaseCatalog, PatientDirectory};

pub struct SqliteDiseaseCatalog;

impl DiseaseCatalog for SqliteDiseaseCatalog {
    fn find_exact(&self, conn: &Connection, name: &str) -> Result<Option<Disease>, DatabaseError> {
        repository::get_disease_by_name(conn, name)
    }

    fn find_nocase(&self, conn: &Connection, name: &str) -> Result<Option<Disease>, DatabaseError> {
        repository::find_disease_by_name_nocase(conn, name)
    }

    fn find_by_id(&self, conn: &Connection, id: &Uuid) -> Result<Option<Disease>, DatabaseError> {
        repository::get_disease_by_id(conn, id)
    }

    fn precautions(&self, conn: &Connection, disease: &Disease) -> Result<Vec<String>, DatabaseError> {
        repository::get_precautions(conn, &disease.id)
    }

    fn diet(&self, conn: &Connection, disease: &Disease) -> Result<Vec<DiseaseDiet>, DatabaseError> {
        repository::get_diet_items(conn, &disease.id)
    }

    fn exercises(
        &self,
        conn: &Connection,
        disease: &Disease,
    ) -> Result<Vec<DiseaseExercise>, DatabaseError> {
        repository::get_exercises(conn, &disease.id)
    }

    fn medicines(
        &self,
        conn: &Connection,
        disease: &Disease,
        limit: usize,
    ) -> Result<Vec<DiseaseMedicine>, DatabaseError> {
        repository::get_top_medicines(conn, &disease.id, limit)
    }
}

pub struct SqlitePatientDirectory;

impl PatientDirectory for SqlitePatientDirectory {
    fn patient(&self, conn: &Connection, id: &Uuid) -> Result<Option<Patient>, DatabaseError> {
        repository::get_patient(conn, id)
    }

    fn append_prediction(
        &self,
        conn: &Connection,
        record: &PredictionHistory,
    ) -> Result<(), DatabaseError> {
        repository::insert_prediction(conn, record)
    }

    fn predictions(
        &self,
        conn: &Connection,
        patient_id: &Uuid,
    ) -> Result<Vec<PredictionHistory>, DatabaseError> {
        repository::get_predictions_for_patient(conn, patient_id)
    }

    fn latest_prediction(
        &self,
        conn: &Connection,
        patient_id: &Uuid,
    ) -> Result<Option<PredictionHistory>, DatabaseError> {
        repository::get_latest_prediction(conn, patient_id)
    }
}
