//! Read-only queries over the catalog.
//!
//! Listing operations return an empty vec when nothing matches; identifier
//! lookups and the symptom search return `PedinfoError::NotFound` instead.

use std::collections::BTreeSet;
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use pedinfo_common::error::{PedinfoError, Result};
use pedinfo_common::{
    AgeGroup, Disease, DiseaseSummary, DiseaseWithStats, FilterMeta, Season, StatisticItem,
    Symptom,
};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;

use crate::catalog::Catalog;

pub const DISEASE_NOT_FOUND: &str = "Заболевание не найдено";
pub const NO_DISEASES_WITH_SYMPTOM: &str = "Нет заболеваний с данным симптомом";

/// Integer argument taken from a path segment or query string.
///
/// Any run of digits is accepted; values beyond `i64` become `OutOfRange`,
/// which no record id, year or disease id can equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntArg {
    Value(i64),
    OutOfRange,
}

impl IntArg {
    pub fn get(self) -> Option<i64> {
        match self {
            IntArg::Value(v) => Some(v),
            IntArg::OutOfRange => None,
        }
    }
}

impl From<i64> for IntArg {
    fn from(v: i64) -> Self {
        IntArg::Value(v)
    }
}

impl FromStr for IntArg {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(v) => Ok(IntArg::Value(v)),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Ok(IntArg::OutOfRange)
            }
            Err(e) => Err(e),
        }
    }
}

impl<'de> Deserialize<'de> for IntArg {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct IntArgVisitor;

        impl<'de> Visitor<'de> for IntArgVisitor {
            type Value = IntArg;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an integer")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<IntArg, E> {
                Ok(IntArg::Value(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<IntArg, E> {
                Ok(i64::try_from(v).map_or(IntArg::OutOfRange, IntArg::Value))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<IntArg, E> {
                v.parse().map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(IntArgVisitor)
    }
}

/// Predicates for the disease listing. Absent or empty fields impose no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiseaseFilter {
    pub transmission: Option<String>,
    pub age_group: Option<AgeGroup>,
    pub pathogen_type: Option<String>,
    /// Substring of the disease name.
    pub q: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StatisticsFilter {
    pub year: Option<IntArg>,
    pub season: Option<Season>,
    pub disease_id: Option<IntArg>,
}

/// Lower-cased, trimmed form of a text argument; `None` when absent or empty.
fn normalise(arg: Option<&str>) -> Option<String> {
    arg.filter(|s| !s.is_empty()).map(|s| s.trim().to_lowercase())
}

impl DiseaseFilter {
    fn matcher(&self) -> impl Fn(&Disease) -> bool + '_ {
        let transmission = normalise(self.transmission.as_deref());
        let pathogen_type = normalise(self.pathogen_type.as_deref());
        let q = normalise(self.q.as_deref());

        move |d: &Disease| {
            transmission.as_ref().map_or(true, |t| d.transmission.to_lowercase() == *t)
                && self.age_group.map_or(true, |a| d.age_group == a)
                && pathogen_type.as_ref().map_or(true, |p| d.pathogen_type.to_lowercase() == *p)
                && q.as_ref().map_or(true, |q| d.name.to_lowercase().contains(q.as_str()))
        }
    }
}

impl StatisticsFilter {
    fn matches(&self, item: &StatisticItem) -> bool {
        self.year.map_or(true, |y| y.get() == Some(i64::from(item.year)))
            && self.season.map_or(true, |s| item.season == s)
            && self.disease_id.map_or(true, |id| id.get() == Some(i64::from(item.disease_id)))
    }
}

impl Catalog {
    /// Disease summaries matching every supplied predicate, dataset order.
    pub fn list_diseases(&self, filter: &DiseaseFilter) -> Vec<DiseaseSummary> {
        let matches = filter.matcher();
        self.diseases
            .iter()
            .filter(|&d| matches(d))
            .map(Disease::summary)
            .collect()
    }

    pub fn find_disease(&self, id: IntArg) -> Option<&Disease> {
        let id = id.get()?;
        self.diseases.iter().find(|d| i64::from(d.id) == id)
    }

    /// Full record with its statistics in generation order.
    pub fn disease_with_stats(&self, id: IntArg) -> Result<DiseaseWithStats> {
        let disease = self
            .find_disease(id)
            .ok_or_else(|| PedinfoError::NotFound(DISEASE_NOT_FOUND.to_string()))?;

        let statistics = self
            .statistics
            .iter()
            .filter(|s| s.disease_id == disease.id)
            .copied()
            .collect();

        Ok(DiseaseWithStats { disease: disease.clone(), statistics })
    }

    pub fn list_symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Diseases presenting the symptom. Unlike `list_diseases`, an empty
    /// result is an error.
    pub fn search_by_symptom(&self, symptom_id: IntArg) -> Result<Vec<DiseaseSummary>> {
        let symptom_id = symptom_id.get();
        let result: Vec<DiseaseSummary> = self
            .diseases
            .iter()
            .filter(|d| d.symptoms.iter().any(|s| Some(i64::from(s.id)) == symptom_id))
            .map(Disease::summary)
            .collect();

        if result.is_empty() {
            return Err(PedinfoError::NotFound(NO_DISEASES_WITH_SYMPTOM.to_string()));
        }
        Ok(result)
    }

    pub fn list_statistics(&self, filter: &StatisticsFilter) -> Vec<StatisticItem> {
        self.statistics.iter().filter(|s| filter.matches(s)).copied().collect()
    }

    /// Sorted distinct labels present in the dataset.
    pub fn filter_meta(&self) -> FilterMeta {
        let age_groups: BTreeSet<&str> = self.diseases.iter().map(|d| d.age_group.as_str()).collect();
        let transmissions: BTreeSet<&str> = self.diseases.iter().map(|d| d.transmission.as_str()).collect();
        let pathogen_types: BTreeSet<&str> = self.diseases.iter().map(|d| d.pathogen_type.as_str()).collect();

        FilterMeta {
            age_groups: age_groups.into_iter().map(String::from).collect(),
            transmissions: transmissions.into_iter().map(String::from).collect(),
            pathogen_types: pathogen_types.into_iter().map(String::from).collect(),
        }
    }
}
