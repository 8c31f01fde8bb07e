//! RD 888/2022 ordinal scales: the six disability classes of table 5.4 and
//! the five-grade deficiency ladder.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Disability class per RD 888/2022, table 5.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DisabilityClass {
    NoDisability,
    Mild,
    Moderate,
    Severe,
    Total,
    Absolute,
}

impl DisabilityClass {
    pub fn ordinal(&self) -> u8 {
        match self {
            DisabilityClass::NoDisability => 0,
            DisabilityClass::Mild => 1,
            DisabilityClass::Moderate => 2,
            DisabilityClass::Severe => 3,
            DisabilityClass::Total => 4,
            DisabilityClass::Absolute => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisabilityClass::NoDisability => "Clase 0 (Sin discapacidad)",
            DisabilityClass::Mild => "Clase 1 (Leve)",
            DisabilityClass::Moderate => "Clase 2 (Moderada)",
            DisabilityClass::Severe => "Clase 3 (Grave)",
            DisabilityClass::Total => "Clase 4 (Total)",
            DisabilityClass::Absolute => "Clase 5 (Absoluta)",
        }
    }

    pub fn range(&self) -> &'static str {
        match self {
            DisabilityClass::NoDisability => "0% - 4%",
            DisabilityClass::Mild => "5% - 24%",
            DisabilityClass::Moderate => "25% - 49%",
            DisabilityClass::Severe => "50% - 74%",
            DisabilityClass::Total => "75% - 95%",
            DisabilityClass::Absolute => "> 95%",
        }
    }
}

/// Disability class for a final disability percentage. Class 5 is open-ended
/// above 95 %.
pub fn class_for(percentage: f64) -> DisabilityClass {
    if percentage > 95.0 {
        DisabilityClass::Absolute
    } else if percentage >= 75.0 {
        DisabilityClass::Total
    } else if percentage >= 50.0 {
        DisabilityClass::Severe
    } else if percentage >= 25.0 {
        DisabilityClass::Moderate
    } else if percentage >= 5.0 {
        DisabilityClass::Mild
    } else {
        DisabilityClass::NoDisability
    }
}

/// Ordinal deficiency grade per RD 888/2022.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DisabilityGrade {
    NoDeficiency,
    Mild,
    Moderate,
    Severe,
    Total,
}

impl DisabilityGrade {
    pub fn ordinal(&self) -> u8 {
        match self {
            DisabilityGrade::NoDeficiency => 0,
            DisabilityGrade::Mild => 1,
            DisabilityGrade::Moderate => 2,
            DisabilityGrade::Severe => 3,
            DisabilityGrade::Total => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisabilityGrade::NoDeficiency => "Grado 0 (Sin deficiencia)",
            DisabilityGrade::Mild => "Grado 1 (Leve)",
            DisabilityGrade::Moderate => "Grado 2 (Moderada)",
            DisabilityGrade::Severe => "Grado 3 (Grave)",
            DisabilityGrade::Total => "Grado 4 (Total)",
        }
    }

    pub fn range(&self) -> &'static str {
        match self {
            DisabilityGrade::NoDeficiency => "0% - 4%",
            DisabilityGrade::Mild => "5% - 24%",
            DisabilityGrade::Moderate => "25% - 49%",
            DisabilityGrade::Severe => "50% - 95%",
            DisabilityGrade::Total => "> 95%",
        }
    }
}

/// Deficiency grade for a percentage-like score.
pub fn grade_for(score: f64) -> DisabilityGrade {
    if score > 95.0 {
        DisabilityGrade::Total
    } else if score >= 50.0 {
        DisabilityGrade::Severe
    } else if score >= 25.0 {
        DisabilityGrade::Moderate
    } else if score >= 5.0 {
        DisabilityGrade::Mild
    } else {
        DisabilityGrade::NoDeficiency
    }
}
