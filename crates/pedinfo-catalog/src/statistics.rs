//! Synthetic seasonal case statistics.
//!
//! Counts are a deterministic function of the disease id and transmission
//! route. Every step truncates toward zero; results must stay bit-identical
//! across builds, so the float expressions below keep their evaluation order.

use pedinfo_common::{Disease, Season, StatisticItem};

/// Observation window, ascending.
pub const YEARS: [i32; 3] = [2021, 2022, 2023];

pub const AIRBORNE: &str = "Воздушно-капельный";
pub const FECAL_ORAL: &str = "Фекально-оральный";

/// Seasonal profile selected by the transmission label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransmissionClass {
    Airborne,
    FecalOral,
    Other,
}

impl TransmissionClass {
    /// Exact, case-sensitive match on the dataset label.
    pub fn classify(transmission: &str) -> Self {
        match transmission {
            AIRBORNE   => TransmissionClass::Airborne,
            FECAL_ORAL => TransmissionClass::FecalOral,
            _          => TransmissionClass::Other,
        }
    }

    pub fn season_multiplier(&self, season: Season) -> f64 {
        match (self, season) {
            (TransmissionClass::Airborne, Season::Winter)  => 1.5,
            (TransmissionClass::Airborne, Season::Spring)  => 1.1,
            (TransmissionClass::Airborne, Season::Summer)  => 0.6,
            (TransmissionClass::Airborne, Season::Autumn)  => 1.0,
            (TransmissionClass::FecalOral, Season::Winter) => 0.6,
            (TransmissionClass::FecalOral, Season::Spring) => 0.9,
            (TransmissionClass::FecalOral, Season::Summer) => 1.6,
            (TransmissionClass::FecalOral, Season::Autumn) => 1.2,
            (TransmissionClass::Other, Season::Winter)     => 1.0,
            (TransmissionClass::Other, Season::Spring)     => 1.1,
            (TransmissionClass::Other, Season::Summer)     => 0.9,
            (TransmissionClass::Other, Season::Autumn)     => 1.0,
        }
    }
}

/// Yearly baseline before the year coefficient: `25 + 6 * id`.
pub fn base_cases(disease_id: u32) -> u32 {
    25 + 6 * disease_id
}

/// 0.9 for the first year of the window, +0.1 per following year.
pub fn year_coefficient(year: i32) -> f64 {
    0.9 + 0.1 * f64::from(year - YEARS[0])
}

/// Truncated baseline for one year.
pub fn base_for_year(disease_id: u32, year: i32) -> u32 {
    (f64::from(base_cases(disease_id)) * year_coefficient(year)) as u32
}

/// Build the statistics table: disease order, then year, then season.
pub fn generate(diseases: &[Disease]) -> Vec<StatisticItem> {
    let mut table = Vec::with_capacity(diseases.len() * YEARS.len() * Season::ALL.len());

    for disease in diseases {
        let class = TransmissionClass::classify(&disease.transmission);
        for year in YEARS {
            let base_year = base_for_year(disease.id, year);
            for season in Season::ALL {
                let cases = (f64::from(base_year) * class.season_multiplier(season)) as u32;
                table.push(StatisticItem { disease_id: disease.id, year, season, cases });
            }
        }
    }

    table
}
