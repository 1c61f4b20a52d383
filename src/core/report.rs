//! Report assembly: the panel bundles served by the CLI and HTTP shells
//!
//! A cycle report mirrors the triptych layout: left = DOB triangle,
//! right = driver triangle, combined = the active pattern that the
//! scanner and polarity summary run against.

use serde::{Deserialize, Serialize};

use crate::core::combine::combine;
use crate::core::date::InvalidDateFormat;
use crate::core::drivers::{
    month_year_driver, month_year_driver_selected, mulank_bhagyank, resolve_day,
    year_only_triangle,
};
use crate::core::polarity::summarize_polarity;
use crate::core::reads::build_reads;
use crate::core::scanner::scan_special_signals;
use crate::core::triangle::triangle_from_dob;
use crate::types::{PolaritySummary, Reads, SignalBundle, Triangle};

/// One triangle with its reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    pub values: Triangle,
    pub reads: Reads,
}

impl Panel {
    fn new(values: Triangle) -> Self {
        let reads = build_reads(&values);
        Self { values, reads }
    }
}

/// Core glance of the combined triangle: the three headline numbers
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Glance {
    #[serde(rename = "G")]
    pub g: u8,
    #[serde(rename = "EF")]
    pub ef: u32,
    #[serde(rename = "P")]
    pub p: u8,
}

/// Triptych report for one time cycle (daily/monthly/yearly)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleReport {
    pub dob: String,
    pub feature: String,
    /// What the right-hand driver represents (year, month-year or day)
    pub right_label: String,
    pub left: Panel,
    pub right: Panel,
    pub combined: Panel,
    /// Polarity of the combined triangle
    pub polarity: PolaritySummary,
    /// Scanner output for this feature, absent when nothing matched
    pub special_signals: Option<SignalBundle>,
    pub glance: Glance,
}

fn assemble(
    dob: &str,
    feature: &str,
    right_label: String,
    left: Triangle,
    right: Triangle,
) -> CycleReport {
    let combined = combine(&left, &right);
    let combined_panel = Panel::new(combined);
    let polarity = summarize_polarity(&combined);
    let special_signals =
        scan_special_signals(feature, &combined, Some(&combined_panel.reads));
    let glance = Glance {
        g: combined.layer1.g,
        ef: combined.core.core_pair,
        p: combined.third_layer.p,
    };

    CycleReport {
        dob: dob.to_string(),
        feature: feature.to_string(),
        right_label,
        left: Panel::new(left),
        right: Panel::new(right),
        combined: combined_panel,
        polarity,
        special_signals,
        glance,
    }
}

/// DOB ⊕ year-only driver, scanned as "yearly"
pub fn yearly_report(dob: &str, year: u32) -> Result<CycleReport, InvalidDateFormat> {
    let left = triangle_from_dob(dob)?;
    let right = year_only_triangle(year);
    Ok(assemble(dob, "yearly", year.to_string(), left, right))
}

/// DOB ⊕ month-year driver, scanned as "monthly".
///
/// `month` overrides the DOB's month when given (the user-selected
/// variant); otherwise the month comes from the DOB itself.
pub fn monthly_report(
    dob: &str,
    year: u32,
    month: Option<u32>,
) -> Result<CycleReport, InvalidDateFormat> {
    let left = triangle_from_dob(dob)?;
    let (right, label) = match month {
        Some(m) => (
            month_year_driver_selected(m, year),
            format!("{:02}-{:04}", m, year),
        ),
        None => (month_year_driver(dob, year)?, format!("{:04}", year)),
    };
    Ok(assemble(dob, "monthly", label, left, right))
}

/// DOB ⊕ day triangle, scanned as "daily"
pub fn daily_report(dob: &str, day: Option<&str>) -> Result<CycleReport, InvalidDateFormat> {
    let left = triangle_from_dob(dob)?;
    let (right, label) = resolve_day(day)?;
    Ok(assemble(dob, "daily", label, left, right))
}

/// Single-person report: one triangle, scanned as "person"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonReport {
    pub dob: String,
    pub values: Triangle,
    pub reads: Reads,
    pub polarity: PolaritySummary,
    pub special_signals: Option<SignalBundle>,
    pub mulank: u8,
    pub bhagyank: u8,
}

pub fn person_report(dob: &str) -> Result<PersonReport, InvalidDateFormat> {
    let values = triangle_from_dob(dob)?;
    let reads = build_reads(&values);
    let polarity = summarize_polarity(&values);
    let special_signals = scan_special_signals("person", &values, Some(&reads));
    let (mulank, bhagyank) = mulank_bhagyank(dob)?;

    Ok(PersonReport {
        dob: dob.to_string(),
        values,
        reads,
        polarity,
        special_signals,
        mulank,
        bhagyank,
    })
}

// =============================================================================
// TESTS
// =============================================================================
