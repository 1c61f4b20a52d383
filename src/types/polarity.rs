//! Polarity summary: positive/negative/neutral classification of cells

use serde::{Deserialize, Serialize};

/// Qualitative balance verdict over the whole triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Balance {
    #[serde(rename = "Mostly positive")]
    MostlyPositive,
    #[serde(rename = "Mostly negative")]
    MostlyNegative,
    #[serde(rename = "Neutral")]
    Neutral,
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Balance::MostlyPositive => "Mostly positive",
            Balance::MostlyNegative => "Mostly negative",
            Balance::Neutral => "Neutral",
        };
        write!(f, "{}", name)
    }
}

/// Per-bucket cell listing: (position letter, digit)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarityDetail {
    pub positive: Vec<(char, u8)>,
    pub negative: Vec<(char, u8)>,
    pub neutral: Vec<(char, u8)>,
}

/// Counts, verdict and detail for one triangle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolaritySummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub balance: Balance,
    pub detail: PolarityDetail,
}
