use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use super::domain::ResolvedPrediction;
use super::repository::{PredictionStore, StoreError};

pub const TOP_DISEASE_LIMIT: usize = 5;

/// Placeholder row reported when no predictions exist; not a real disease.
pub const NO_PREDICTIONS_PLACEHOLDER: &str = "No predictions yet";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopDisease {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_users: u64,
    pub total_predictions: u64,
    pub total_diseases: u64,
    pub total_symptoms: u64,
    pub disease_counts: BTreeMap<String, u64>,
    pub top_diseases: Vec<TopDisease>,
}

impl Statistics {
    /// No events recorded; `top_diseases` then holds only the placeholder row.
    pub fn is_empty(&self) -> bool {
        self.total_predictions == 0
    }
}

/// Catalog-wide counters gathered alongside the event snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogTotals {
    pub users: u64,
    pub diseases: u64,
    pub symptoms: u64,
}

/// Reduce an event snapshot into per-disease counts and a top-N ranking.
pub fn summarize(events: &[ResolvedPrediction], totals: CatalogTotals) -> Statistics {
    let mut disease_counts: BTreeMap<String, u64> = BTreeMap::new();
    for resolved in events {
        *disease_counts
            .entry(resolved.disease.name.clone())
            .or_default() += 1;
    }

    // Stable sort keeps name order among equal counts.
    let mut ranked: Vec<(&String, &u64)> = disease_counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1));
    let mut top_diseases: Vec<TopDisease> = ranked
        .into_iter()
        .take(TOP_DISEASE_LIMIT)
        .map(|(name, count)| TopDisease {
            name: name.clone(),
            count: *count,
        })
        .collect();

    if top_diseases.is_empty() {
        top_diseases.push(TopDisease {
            name: NO_PREDICTIONS_PLACEHOLDER.to_string(),
            count: 0,
        });
    }

    Statistics {
        total_users: totals.users,
        total_predictions: events.len() as u64,
        total_diseases: totals.diseases,
        total_symptoms: totals.symptoms,
        disease_counts,
        top_diseases,
    }
}

/// Read-side aggregator over the prediction store.
pub struct StatisticsService<S> {
    store: Arc<S>,
}

impl<S> StatisticsService<S>
where
    S: PredictionStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn statistics(&self) -> Result<Statistics, StoreError> {
        let totals = CatalogTotals {
            users: self.store.count_users()?,
            diseases: self.store.count_diseases()?,
            symptoms: self.store.count_symptoms()?,
        };
        let events = self.store.list_all_events()?;
        Ok(summarize(&events, totals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::domain::{
        Disease, DiseaseId, PredictionEvent, PredictionId, UserId,
    };
    use chrono::Utc;

    fn resolved(id: u64, disease: &str) -> ResolvedPrediction {
        ResolvedPrediction {
            event: PredictionEvent {
                id: PredictionId(id),
                user_id: UserId(1),
                disease_id: DiseaseId(id),
                confidence: 0.5,
                created_at: Utc::now(),
            },
            disease: Disease {
                id: DiseaseId(id),
                name: disease.to_string(),
                description: String::new(),
                precautions: String::new(),
            },
        }
    }

    #[test]
    fn empty_log_reports_placeholder() {
        let stats = summarize(&[], CatalogTotals::default());
        assert_eq!(stats.total_predictions, 0);
        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.total_diseases, 0);
        assert_eq!(stats.total_symptoms, 0);
        assert!(stats.disease_counts.is_empty());
        assert_eq!(
            stats.top_diseases,
            vec![TopDisease {
                name: NO_PREDICTIONS_PLACEHOLDER.to_string(),
                count: 0
            }]
        );
        assert!(stats.is_empty());
    }

    #[test]
    fn ranks_by_count_then_name_and_caps_at_five() {
        let names = [
            "Migraine", "Asthma", "Migraine", "Typhoid", "Anemia", "Vertigo", "Malaria", "Asthma",
            "Migraine",
        ];
        let events: Vec<ResolvedPrediction> = names
            .iter()
            .enumerate()
            .map(|(index, name)| resolved(index as u64 + 1, name))
            .collect();

        let stats = summarize(&events, CatalogTotals { users: 2, diseases: 29, symptoms: 65 });

        assert_eq!(stats.total_predictions, 9);
        assert_eq!(stats.disease_counts["Migraine"], 3);
        assert_eq!(stats.disease_counts.len(), 6);
        let top: Vec<(&str, u64)> = stats
            .top_diseases
            .iter()
            .map(|entry| (entry.name.as_str(), entry.count))
            .collect();
        assert_eq!(
            top,
            vec![
                ("Migraine", 3),
                ("Asthma", 2),
                ("Anemia", 1),
                ("Malaria", 1),
                ("Typhoid", 1)
            ]
        );
    }

    #[test]
    fn serializes_wire_field_names() {
        let stats = summarize(&[resolved(1, "Asthma")], CatalogTotals::default());
        let value = serde_json::to_value(&stats).expect("serializes");
        assert_eq!(value["totalPredictions"], 1);
        assert_eq!(value["diseaseCounts"]["Asthma"], 1);
        assert_eq!(value["topDiseases"][0]["name"], "Asthma");
        assert_eq!(value["topDiseases"][0]["count"], 1);
    }
}
