//! The in-memory catalog: dataset plus generated statistics, built once.

use std::collections::HashSet;

use pedinfo_common::error::{PedinfoError, Result};
use pedinfo_common::{Disease, StatisticItem, Symptom};
use tracing::info;

use crate::dataset::{self, Dataset};
use crate::statistics;

/// Immutable, read-only catalog shared by all requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) symptoms: Vec<Symptom>,
    pub(crate) diseases: Vec<Disease>,
    pub(crate) statistics: Vec<StatisticItem>,
}

impl Catalog {
    /// Build the catalog from the built-in reference dataset.
    pub fn load() -> Result<Self> {
        let catalog = Self::from_dataset(dataset::reference_dataset()?)?;
        info!(
            symptoms = catalog.symptoms.len(),
            diseases = catalog.diseases.len(),
            statistics = catalog.statistics.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Generate statistics for `dataset` and verify the table's keys.
    /// Ids and symptom references were checked when `dataset` was built.
    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        let Dataset { symptoms, diseases } = dataset;
        let statistics = statistics::generate(&diseases);

        let mut keys = HashSet::with_capacity(statistics.len());
        for item in &statistics {
            if !keys.insert((item.disease_id, item.year, item.season)) {
                return Err(PedinfoError::Dataset(format!(
                    "duplicate statistic ({}, {}, {})",
                    item.disease_id, item.year, item.season
                )));
            }
        }

        Ok(Self { symptoms, diseases, statistics })
    }

    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    pub fn statistics(&self) -> &[StatisticItem] {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builds_full_tables() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.list_symptoms().len(), 10);
        assert_eq!(catalog.diseases().len(), 45);
        assert_eq!(catalog.statistics().len(), 45 * 3 * 4);
    }

    #[test]
    fn test_duplicate_disease_rows_are_rejected() {
        let mut ds = dataset::reference_dataset().unwrap();
        let copy = ds.diseases[0].clone();
        ds.diseases.push(copy);
        let err = Catalog::from_dataset(ds).unwrap_err();
        assert!(matches!(err, PedinfoError::Dataset(_)));
    }
}
