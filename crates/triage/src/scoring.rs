//! Symptom-overlap scoring against the rule catalog.
//!
//! A rule's score is the fraction of *its own* symptom set present in the
//! input, so small specific rules reach high scores with few matches. Ties go
//! to the earliest rule in catalog order.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::RuleCatalog;
use crate::prediction::domain::normalize_name;

pub const UNKNOWN_DISEASE: &str = "Unknown";
pub const MIN_CONFIDENCE: f64 = 0.05;
pub const MAX_CONFIDENCE: f64 = 0.99;

const EMPTY_INPUT_PRECAUTIONS: &str = "Please provide symptoms.";
const GENERAL_PRECAUTIONS: &str = "General precautions: rest, hydrate, seek professional advice.";

/// Result of a single scoring call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub disease_name: String,
    pub confidence: f64,
    pub precautions: String,
}

impl Outcome {
    fn unknown() -> Self {
        Self {
            disease_name: UNKNOWN_DISEASE.to_string(),
            confidence: 0.0,
            precautions: EMPTY_INPUT_PRECAUTIONS.to_string(),
        }
    }
}

/// Per-rule breakdown used to explain a prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleScore {
    pub disease: String,
    pub matched: usize,
    pub rule_size: usize,
    pub score: f64,
}

/// Stateless matcher sharing one immutable catalog across callers.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<RuleCatalog>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(RuleCatalog::standard()))
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn predict<S: AsRef<str>>(&self, symptoms: &[S]) -> Outcome {
        if symptoms.is_empty() {
            return Outcome::unknown();
        }

        let input = normalized_set(symptoms);
        let mut best_score = -1.0_f64;
        let mut best_disease = UNKNOWN_DISEASE;
        let mut best_precautions = GENERAL_PRECAUTIONS;

        for rule in self.catalog.rules() {
            let score = overlap(&input, rule.len(), |symptom| rule.contains(symptom)).1;
            if score > best_score {
                best_score = score;
                best_disease = rule.disease.as_str();
                best_precautions = rule.precautions.as_str();
            }
        }

        Outcome {
            disease_name: best_disease.to_string(),
            confidence: clamp_confidence(best_score),
            precautions: best_precautions.to_string(),
        }
    }

    /// Scores for every rule in catalog order, without selecting a winner.
    pub fn rank<S: AsRef<str>>(&self, symptoms: &[S]) -> Vec<RuleScore> {
        let input = normalized_set(symptoms);
        self.catalog
            .rules()
            .map(|rule| {
                let (matched, score) = overlap(&input, rule.len(), |symptom| rule.contains(symptom));
                RuleScore {
                    disease: rule.disease.clone(),
                    matched,
                    rule_size: rule.len(),
                    score,
                }
            })
            .collect()
    }
}

pub fn clamp_confidence(score: f64) -> f64 {
    score.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

fn normalized_set<S: AsRef<str>>(symptoms: &[S]) -> HashSet<String> {
    symptoms
        .iter()
        .map(|symptom| normalize_name(symptom.as_ref()))
        .collect()
}

fn overlap(
    input: &HashSet<String>,
    rule_size: usize,
    contains: impl Fn(&str) -> bool,
) -> (usize, f64) {
    if rule_size == 0 {
        return (0, 0.0);
    }
    let matched = input.iter().filter(|symptom| contains(symptom.as_str())).count();
    (matched, matched as f64 / rule_size as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rule;

    fn engine() -> ScoringEngine {
        ScoringEngine::standard()
    }

    #[test]
    fn empty_input_returns_unknown_sentinel() {
        let outcome = engine().predict::<&str>(&[]);
        assert_eq!(outcome.disease_name, UNKNOWN_DISEASE);
        assert_eq!(outcome.confidence, 0.0);
        assert!(!outcome.precautions.is_empty());
    }

    #[test]
    fn predicts_covid_for_taste_and_smell_loss() {
        let outcome = engine().predict(&[
            "fever",
            "dry cough",
            "loss of taste",
            "loss of smell",
            "fatigue",
        ]);
        assert_eq!(outcome.disease_name, "COVID-19");
        assert!(outcome.confidence > 0.6);
        assert!(!outcome.precautions.is_empty());
    }

    #[test]
    fn predicts_common_cold() {
        let outcome = engine().predict(&["sneezing", "runny nose", "sore throat", "nasal congestion"]);
        assert_eq!(outcome.disease_name, "Common Cold");
        assert!((outcome.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn predicts_flu_for_classic_cluster() {
        let outcome = engine().predict(&["fever", "cough", "sore throat", "fatigue", "body aches"]);
        assert_eq!(outcome.disease_name, "Flu (Influenza)");
        assert!(outcome.confidence > 0.5);
    }

    #[test]
    fn predicts_migraine() {
        let outcome = engine().predict(&["severe headache", "nausea", "sensitivity to light", "vomiting"]);
        assert_eq!(outcome.disease_name, "Migraine");
    }

    #[test]
    fn gastrointestinal_tie_goes_to_first_rule() {
        let outcome = engine().predict(&["nausea", "vomiting", "diarrhea", "abdominal pain", "fever"]);
        assert_eq!(outcome.disease_name, "Gastroenteritis");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let upper = engine().predict(&["FEVER", "COUGH"]);
        let lower = engine().predict(&["fever", "cough"]);
        assert_eq!(upper, lower);

        let padded = engine().predict(&["  Fever ", "Cough"]);
        assert_eq!(padded, lower);
    }

    #[test]
    fn single_symptom_is_deterministic() {
        let first = engine().predict(&["fever"]);
        for _ in 0..10 {
            assert_eq!(engine().predict(&["fever"]), first);
        }
        // 1/5 beats every 1/6 and 1/7 rule; Tonsillitis precedes Ear Infection.
        assert_eq!(first.disease_name, "Tonsillitis");
        assert!((first.confidence - 0.2).abs() < 1e-9);
    }

    #[test]
    fn unknown_symptoms_fall_back_to_first_rule_with_floor_confidence() {
        let outcome = engine().predict(&["unknown_symptom_1", "unknown_symptom_2"]);
        assert_eq!(outcome.disease_name, "Flu (Influenza)");
        assert_eq!(outcome.confidence, MIN_CONFIDENCE);
    }

    #[test]
    fn adding_rule_symptoms_never_lowers_confidence() {
        let few = engine().predict(&["fever", "cough"]);
        let more = engine().predict(&[
            "fever",
            "cough",
            "sore throat",
            "fatigue",
            "body aches",
            "chills",
        ]);
        assert_eq!(few.disease_name, "Flu (Influenza)");
        assert_eq!(more.disease_name, "Flu (Influenza)");
        assert!(more.confidence >= few.confidence);
    }

    #[test]
    fn full_match_is_capped_below_certainty() {
        let outcome = engine().predict(&["headache", "fatigue", "muscle pain", "difficulty sleeping"]);
        assert_eq!(outcome.disease_name, "Tension Headache");
        assert_eq!(outcome.confidence, MAX_CONFIDENCE);
    }

    #[test]
    fn confidence_stays_within_bounds_for_non_empty_input() {
        let inputs: [&[&str]; 5] = [
            &["fever"],
            &["rash", "blisters"],
            &["nothing relevant"],
            &["wheezing", "shortness of breath", "chest tightness", "cough", "breathing difficulty"],
            &[""],
        ];
        for symptoms in inputs {
            let outcome = engine().predict(symptoms);
            assert!(
                (MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&outcome.confidence),
                "{symptoms:?} produced {}",
                outcome.confidence
            );
        }
    }

    #[test]
    fn denominator_is_rule_size() {
        let catalog = RuleCatalog::from_rules(vec![
            Rule::new("Broad", ["a", "b", "c", "d"], "broad"),
            Rule::new("Narrow", ["a"], "narrow"),
        ])
        .expect("valid catalog");
        let engine = ScoringEngine::new(Arc::new(catalog));

        let outcome = engine.predict(&["a", "b", "c"]);
        assert_eq!(outcome.disease_name, "Narrow");
        assert_eq!(outcome.precautions, "narrow");
    }

    #[test]
    fn rank_reports_each_rule_in_catalog_order() {
        let scores = engine().rank(&["sneezing", "runny nose"]);
        assert_eq!(scores.len(), 25);
        assert_eq!(scores[0].disease, "Flu (Influenza)");
        let cold = &scores[1];
        assert_eq!(cold.disease, "Common Cold");
        assert_eq!(cold.matched, 2);
        assert_eq!(cold.rule_size, 5);
    }
}
