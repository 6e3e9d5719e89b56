//! Request-level orchestration.
//!
//! normalize → score → resolve → record → response. Only input problems and
//! missing evidence fail a prediction; everything after scoring degrades.

use chrono::NaiveDateTime;
use rusqlite::Connection;
use uuid::Uuid;

use crate::models::{Patient, PredictionHistory};

use super::normalize::normalize_symptoms;
use super::recorder::{compute_age, record_prediction};
use super::resolver::{recommendations_for, resolve_exact, resolve_nocase, ResolvedDisease};
use super::scoring::score;
use super::traits::{DiseaseCatalog, PatientDirectory};
use super::types::{
    AdvisorError, DiseaseDetail, LatestResult, PredictionRequest, PredictionResponse,
    RecommendationBundle,
};

/// Shown when the request carries no known patient.
pub const GUEST_NAME: &str = "Guest";

pub fn predict(
    conn: &Connection,
    catalog: &dyn DiseaseCatalog,
    directory: &dyn PatientDirectory,
    request: &PredictionRequest,
) -> Result<PredictionResponse, AdvisorError> {
    predict_at(conn, catalog, directory, request, chrono::Local::now().naive_local())
}

/// `predict` with an explicit clock, used for age and the history timestamp.
pub fn predict_at(
    conn: &Connection,
    catalog: &dyn DiseaseCatalog,
    directory: &dyn PatientDirectory,
    request: &PredictionRequest,
    now: NaiveDateTime,
) -> Result<PredictionResponse, AdvisorError> {
    let symptoms = normalize_symptoms(&request.symptoms)?;
    if symptoms.is_empty() {
        return Err(AdvisorError::EmptyInput);
    }

    let result = score(conn, catalog, &symptoms)?.ok_or(AdvisorError::NoEvidence)?;

    let resolved = resolve_exact(conn, catalog, &result.disease_name);
    let recommendations = match &resolved {
        Some(r) => recommendations_for(conn, catalog, r),
        None => {
            tracing::warn!(disease = %result.disease_name, "No recommendation source for predicted disease");
            RecommendationBundle::empty()
        }
    };
    let disease_id = resolved.as_ref().and_then(ResolvedDisease::catalog_id);

    let patient = request
        .patient_id
        .and_then(|id| lookup_patient(conn, directory, &id));

    let (patient_name, patient_age, history_recorded) = match &patient {
        Some(p) => (
            p.full_name.clone(),
            compute_age(p.date_of_birth.as_deref(), now.date()),
            record_prediction(conn, directory, p, &symptoms, &result, disease_id, now),
        ),
        None => (GUEST_NAME.to_string(), 0, false),
    };

    Ok(PredictionResponse {
        disease_name: result.disease_name,
        confidence: result.confidence,
        severity: result.severity,
        specialist: result.specialist_required,
        patient_name,
        patient_age,
        recommendations,
        history_recorded,
    })
}

fn lookup_patient(conn: &Connection, directory: &dyn PatientDirectory, id: &Uuid) -> Option<Patient> {
    match directory.patient(conn, id) {
        Ok(Some(p)) => Some(p),
        Ok(None) => {
            tracing::warn!(patient_id = %id, "Unknown patient, prediction not recorded");
            None
        }
        Err(e) => {
            tracing::error!(patient_id = %id, error = %e, "Patient lookup failed");
            None
        }
    }
}

/// Disease page: catalog first (case-insensitive), then the fallback base.
pub fn disease_detail(
    conn: &Connection,
    catalog: &dyn DiseaseCatalog,
    name: &str,
) -> Result<DiseaseDetail, AdvisorError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AdvisorError::Validation("Disease name is missing.".into()));
    }

    let resolved = resolve_nocase(conn, catalog, name).ok_or_else(|| {
        AdvisorError::LookupMiss(format!(
            "Information for \"{name}\" is not available. Please consult a doctor."
        ))
    })?;

    Ok(DiseaseDetail {
        disease: resolved.info(),
        source: resolved.source(),
        recommendations: recommendations_for(conn, catalog, &resolved),
    })
}

/// Newest first.
pub fn prediction_history(
    conn: &Connection,
    directory: &dyn PatientDirectory,
    patient_id: &Uuid,
) -> Result<Vec<PredictionHistory>, AdvisorError> {
    Ok(directory.predictions(conn, patient_id)?)
}

/// The most recent prediction with its disease view. The catalog link is
/// preferred; otherwise the stored disease name is resolved again.
pub fn latest_result(
    conn: &Connection,
    catalog: &dyn DiseaseCatalog,
    directory: &dyn PatientDirectory,
    patient_id: &Uuid,
) -> Result<LatestResult, AdvisorError> {
    let prediction = directory.latest_prediction(conn, patient_id)?.ok_or_else(|| {
        AdvisorError::NotFound("No prediction found. Check your symptoms first.".into())
    })?;

    let linked = match prediction.disease_id {
        Some(id) => match catalog.find_by_id(conn, &id) {
            Ok(found) => found.map(ResolvedDisease::Catalog),
            Err(e) => {
                tracing::warn!(disease_id = %id, error = %e, "Linked disease lookup failed");
                None
            }
        },
        None => None,
    };
    let resolved = linked
        .or_else(|| resolve_nocase(conn, catalog, &prediction.disease_name))
        .ok_or_else(|| {
            AdvisorError::LookupMiss(
                "Your latest prediction could not be loaded. Please check symptoms again.".into(),
            )
        })?;

    Ok(LatestResult {
        disease: resolved.info(),
        source: resolved.source(),
        recommendations: recommendations_for(conn, catalog, &resolved),
        prediction,
    })
}
