//! Fixed decision table mapping diseases to their characteristic symptoms.

mod rules;
pub mod seed;

use std::collections::HashSet;

use serde::Serialize;

use crate::prediction::domain::normalize_name;

/// One row of the decision table: a disease, its symptom cluster, and advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub disease: String,
    pub symptoms: Vec<String>,
    pub precautions: String,
    #[serde(skip)]
    index: HashSet<String>,
}

impl Rule {
    pub fn new<I, S>(disease: impl Into<String>, symptoms: I, precautions: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut index = HashSet::new();
        for symptom in symptoms {
            let normalized = normalize_name(symptom.as_ref());
            if !normalized.is_empty() && index.insert(normalized.clone()) {
                ordered.push(normalized);
            }
        }

        Self {
            disease: disease.into(),
            symptoms: ordered,
            precautions: precautions.into(),
            index,
        }
    }

    pub fn contains(&self, normalized_symptom: &str) -> bool {
        self.index.contains(normalized_symptom)
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}

/// Immutable, insertion-ordered rule table.
///
/// Iteration order doubles as the scoring tie-break priority, so the standard
/// table must keep its seed order.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Built-in table covering respiratory, neurological, gastrointestinal,
    /// infectious, dermatological, ENT and cardiovascular/metabolic families.
    pub fn standard() -> Self {
        Self {
            rules: rules::standard_rules(),
        }
    }

    pub fn from_rules(rules: Vec<Rule>) -> Result<Self, CatalogError> {
        let catalog = Self { rules };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog is non-empty, every rule has at least one symptom, and
    /// disease names are unique.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.rules.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.is_empty() {
                return Err(CatalogError::EmptyRule {
                    disease: rule.disease.clone(),
                });
            }
            if !seen.insert(normalize_name(&rule.disease)) {
                return Err(CatalogError::DuplicateDisease {
                    disease: rule.disease.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, disease: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.disease == disease)
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("rule catalog has no rules")]
    EmptyCatalog,
    #[error("rule for '{disease}' has no symptoms")]
    EmptyRule { disease: String },
    #[error("disease '{disease}' appears more than once in the rule catalog")]
    DuplicateDisease { disease: String },
}
