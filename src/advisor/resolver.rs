//! Recommendation resolution across the two disease sources.
//!
//! A predicted disease is either curated in the catalog or only known to
//! the fallback base. `ResolvedDisease` makes that explicit so callers match
//! once instead of probing.

use rusqlite::Connection;

use crate::db::DatabaseError;
use crate::models::Disease;

use super::fallback::{fallback_base, FallbackDisease};
use super::traits::DiseaseCatalog;
use super::types::{
    DietItem, DietPlan, DiseaseInfo, ExerciseItem, MedicineItem, RecommendationBundle,
};

/// Catalog bundles list at most this many medicines.
pub const MAX_MEDICINES: usize = 5;

#[derive(Debug, Clone)]
pub enum ResolvedDisease {
    Catalog(Disease),
    Fallback(&'static FallbackDisease),
}

impl ResolvedDisease {
    pub fn name(&self) -> &str {
        match self {
            Self::Catalog(d) => &d.name,
            Self::Fallback(f) => &f.name,
        }
    }

    pub fn info(&self) -> DiseaseInfo {
        match self {
            Self::Catalog(d) => DiseaseInfo {
                name: d.name.clone(),
                description: d.description.clone(),
                severity_level: d.severity_level,
                specialist_required: d.specialist_required.clone(),
            },
            Self::Fallback(f) => f.info(),
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Self::Catalog(_) => "catalog",
            Self::Fallback(_) => "fallback",
        }
    }

    /// Catalog id, when the disease is curated.
    pub fn catalog_id(&self) -> Option<uuid::Uuid> {
        match self {
            Self::Catalog(d) => Some(d.id),
            Self::Fallback(_) => None,
        }
    }
}

/// Resolve by exact catalog name, then the fallback base.
pub fn resolve_exact(
    conn: &Connection,
    catalog: &dyn DiseaseCatalog,
    name: &str,
) -> Option<ResolvedDisease> {
    let found = catalog.find_exact(conn, name);
    from_catalog_or_fallback(found, name)
}

/// Resolve case-insensitively in the catalog, then the fallback base.
pub fn resolve_nocase(
    conn: &Connection,
    catalog: &dyn DiseaseCatalog,
    name: &str,
) -> Option<ResolvedDisease> {
    let found = catalog.find_nocase(conn, name);
    from_catalog_or_fallback(found, name)
}

fn from_catalog_or_fallback(
    found: Result<Option<Disease>, DatabaseError>,
    name: &str,
) -> Option<ResolvedDisease> {
    match found {
        Ok(Some(disease)) => return Some(ResolvedDisease::Catalog(disease)),
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(disease = name, error = %e, "Catalog lookup failed, trying fallback");
        }
    }
    fallback_base().lookup(name).map(ResolvedDisease::Fallback)
}

/// Full bundle for a resolved disease. Catalog read failures degrade to
/// the fallback bundle for the same name (possibly empty).
pub fn recommendations_for(
    conn: &Connection,
    catalog: &dyn DiseaseCatalog,
    resolved: &ResolvedDisease,
) -> RecommendationBundle {
    match resolved {
        ResolvedDisease::Catalog(disease) => catalog_bundle(conn, catalog, disease)
            .unwrap_or_else(|e| {
                tracing::warn!(disease = %disease.name, error = %e, "Catalog recommendations unavailable");
                fallback_base().recommendations(&disease.name)
            }),
        ResolvedDisease::Fallback(entry) => entry.recommendations(),
    }
}

/// Bundle for any disease name; unknown names give an empty bundle.
pub fn resolve_recommendations(
    conn: &Connection,
    catalog: &dyn DiseaseCatalog,
    name: &str,
) -> RecommendationBundle {
    match resolve_nocase(conn, catalog, name) {
        Some(resolved) => recommendations_for(conn, catalog, &resolved),
        None => RecommendationBundle::empty(),
    }
}

fn catalog_bundle(
    conn: &Connection,
    catalog: &dyn DiseaseCatalog,
    disease: &Disease,
) -> Result<RecommendationBundle, DatabaseError> {
    let precautions = catalog.precautions(conn, disease)?;

    let mut diet = DietPlan::default();
    for item in catalog.diet(conn, disease)? {
        let entry = DietItem {
            food_item: item.food_item,
            description: item.description.unwrap_or_default(),
        };
        if item.is_recommended {
            diet.recommended.push(entry);
        } else {
            diet.avoid.push(entry);
        }
    }

    let exercises = catalog
        .exercises(conn, disease)?
        .into_iter()
        .map(|e| ExerciseItem {
            exercise_name: e.exercise_name,
            description: e.description,
            duration: e.duration,
            intensity: e.intensity.as_str().to_string(),
        })
        .collect();

    let medicines = catalog
        .medicines(conn, disease, MAX_MEDICINES)?
        .into_iter()
        .take(MAX_MEDICINES)
        .map(|m| MedicineItem {
            medicine_name: m.medicine_name,
            generic_name: m.generic_name.unwrap_or_default(),
            dosage: m.dosage,
            description: m.description,
            side_effects: m.side_effects.unwrap_or_default(),
        })
        .collect();

    Ok(RecommendationBundle {
        precautions,
        diet,
        exercises,
        medicines,
    })
}
