//! Driver triangles: synthetic seeds for time-cycle influences
//!
//! Drivers reuse the seed pipeline with zeroed slots:
//! - year-only: A=0, B=0, C/D from the target year
//! - month-year: A=0, B=reduced month, C/D from the target year

use chrono::{Datelike, Local};

use crate::core::combine::combine;
use crate::core::date::{parse_date, InvalidDateFormat};
use crate::core::reduce::full_reduce;
use crate::core::triangle::{
    today_triangle, triangle_from_dob, triangle_from_seeds, year_halves,
};
use crate::types::Triangle;

/// Year-only driver for yearly prediction: A=0, B=0
pub fn year_only_triangle(year: u32) -> Triangle {
    let (c, d) = year_halves(year);
    triangle_from_seeds(0, 0, c, d)
}

/// Month-year driver for monthly prediction, month taken from the DOB
pub fn month_year_driver(dob: &str, year: u32) -> Result<Triangle, InvalidDateFormat> {
    let date = parse_date(dob)?;
    Ok(month_year_driver_selected(date.month(), year))
}

/// Month-year driver for a caller-selected month and year
pub fn month_year_driver_selected(month: u32, year: u32) -> Triangle {
    let (c, d) = year_halves(year);
    triangle_from_seeds(0, full_reduce(month), c, d)
}

/// Resolve the right-hand day triangle.
///
/// `None`, an empty string or `"today"` (case-insensitive) resolve to
/// today's triangle labeled DD-MM-YYYY; anything else is parsed as a date
/// and the caller's raw string is echoed back as the label.
pub fn resolve_day(day: Option<&str>) -> Result<(Triangle, String), InvalidDateFormat> {
    match day {
        None => Ok((today_triangle(), today_label())),
        Some(s) if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("today") => {
            Ok((today_triangle(), today_label()))
        }
        Some(s) => Ok((triangle_from_dob(s)?, s.to_string())),
    }
}

fn today_label() -> String {
    Local::now().date_naive().format("%d-%m-%Y").to_string()
}

/// DOB ⊕ day: the active daily pattern
pub fn daily_combined_triangle(
    dob: &str,
    day: Option<&str>,
) -> Result<Triangle, InvalidDateFormat> {
    let left = triangle_from_dob(dob)?;
    let (right, _label) = resolve_day(day)?;
    Ok(combine(&left, &right))
}

/// DOB ⊕ year-only driver: the active yearly pattern
pub fn yearly_combined_triangle(dob: &str, year: u32) -> Result<Triangle, InvalidDateFormat> {
    let left = triangle_from_dob(dob)?;
    Ok(combine(&left, &year_only_triangle(year)))
}

/// DOB ⊕ month-year driver: the active monthly pattern
pub fn monthly_combined_triangle(dob: &str, year: u32) -> Result<Triangle, InvalidDateFormat> {
    let left = triangle_from_dob(dob)?;
    let right = month_year_driver(dob, year)?;
    Ok(combine(&left, &right))
}

/// Mulank and Bhagyank of a DOB: (A, G) of its triangle
pub fn mulank_bhagyank(dob: &str) -> Result<(u8, u8), InvalidDateFormat> {
    let t = triangle_from_dob(dob)?;
    Ok((t.inputs.a, t.layer1.g))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_only_zeroes_day_and_month() {
        let t = year_only_triangle(2025);
        assert_eq!(t.inputs.a, 0);
        assert_eq!(t.inputs.b, 0);
        assert!((1..=9).contains(&t.inputs.c));
        assert!((1..=9).contains(&t.inputs.d));
    }

    #[test]
    fn test_year_only_layer1_from_year_halves() {
        // 2025: C = 2, D = reduce(25) = 7, so E = 0, F = 9, G = 9
        let t = year_only_triangle(2025);
        assert_eq!((t.layer1.e, t.layer1.f, t.layer1.g), (0, 9, 9));
    }

    #[test]
    fn test_month_year_driver_takes_month_from_dob() {
        let t = month_year_driver("29-10-2001", 2025).unwrap();
        assert_eq!(t.inputs.a, 0);
        assert_eq!(t.inputs.b, full_reduce(10));
        assert_eq!(t, month_year_driver_selected(10, 2025));
    }

    #[test]
    fn test_resolve_day_today_variants() {
        let (t1, label1) = resolve_day(None).unwrap();
        let (t2, label2) = resolve_day(Some("today")).unwrap();
        let (t3, _) = resolve_day(Some("  TODAY ")).unwrap();
        assert_eq!(t1, t2);
        assert_eq!(t2, t3);
        assert_eq!(label1, label2);
        // DD-MM-YYYY label
        assert_eq!(label1.len(), 10);
    }

    #[test]
    fn test_resolve_day_echoes_caller_string() {
        let (t, label) = resolve_day(Some("29/10/2001")).unwrap();
        assert_eq!(label, "29/10/2001");
        assert_eq!(t, triangle_from_dob("29-10-2001").unwrap());
    }

    #[test]
    fn test_resolve_day_propagates_parse_error() {
        assert!(resolve_day(Some("soon")).is_err());
    }

    #[test]
    fn test_combined_builders_are_deterministic() {
        let y1 = yearly_combined_triangle("29-10-2001", 2025).unwrap();
        let y2 = yearly_combined_triangle("29-10-2001", 2025).unwrap();
        assert_eq!(y1, y2);
        let m1 = monthly_combined_triangle("29-10-2001", 2025).unwrap();
        let m2 = monthly_combined_triangle("29-10-2001", 2025).unwrap();
        assert_eq!(m1, m2);
    }

    #[test]
    fn test_mulank_bhagyank_are_a_and_g() {
        // 29-10-2001: A = 2, G = 6
        assert_eq!(mulank_bhagyank("29-10-2001").unwrap(), (2, 6));
    }
}
