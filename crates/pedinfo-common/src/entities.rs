//! Core record types of the disease catalog.
//! Field names and enum labels are part of the JSON contract served by pedinfo-web.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

/// Season of a statistics observation. Serialized as the localized label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Season {
    #[serde(rename = "Зима", alias = "winter")]
    Winter,
    #[serde(rename = "Весна", alias = "spring")]
    Spring,
    #[serde(rename = "Лето", alias = "summer")]
    Summer,
    #[serde(rename = "Осень", alias = "autumn")]
    Autumn,
}

impl Season {
    /// Generation order of the statistics table.
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    /// Wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Зима",
            Season::Spring => "Весна",
            Season::Summer => "Лето",
            Season::Autumn => "Осень",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Age group
// ---------------------------------------------------------------------------

/// Coarse classification of the affected pediatric population.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    #[serde(rename = "Дошкольный возраст", alias = "preschool")]
    Preschool,
    #[serde(rename = "Дети до 7 лет", alias = "under7")]
    Under7,
    #[serde(rename = "Детский возраст", alias = "children")]
    Children,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Preschool, AgeGroup::Under7, AgeGroup::Children];

    /// Wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Preschool => "Дошкольный возраст",
            AgeGroup::Under7    => "Дети до 7 лет",
            AgeGroup::Children  => "Детский возраст",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Symptom / Disease
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Symptom {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
}

/// Full disease record. Symptoms are embedded by value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Disease {
    pub id: u32,
    pub name: String,
    pub pathogen_type: String,
    pub transmission: String,
    pub age_group: AgeGroup,
    pub symptoms: Vec<Symptom>,
    pub prevention: Option<String>,
}

impl Disease {
    pub fn summary(&self) -> DiseaseSummary {
        DiseaseSummary {
            id: self.id,
            name: self.name.clone(),
            age_group: self.age_group,
            pathogen_type: self.pathogen_type.clone(),
        }
    }

    pub fn has_symptom(&self, symptom_id: u32) -> bool {
        self.symptoms.iter().any(|s| s.id == symptom_id)
    }
}

/// List item returned by the disease listing and symptom search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiseaseSummary {
    pub id: u32,
    pub name: String,
    pub age_group: AgeGroup,
    pub pathogen_type: String,
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// One (disease, year, season) case-count observation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatisticItem {
    pub disease_id: u32,
    pub year: i32,
    pub season: Season,
    pub cases: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiseaseWithStats {
    #[serde(flatten)]
    pub disease: Disease,
    pub statistics: Vec<StatisticItem>,
}

/// Distinct label values used to populate the UI filter controls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterMeta {
    pub age_groups: Vec<String>,
    pub transmissions: Vec<String>,
    pub pathogen_types: Vec<String>,
}
