//! Triangle construction: seed digits through the fixed dependency graph
//!
//! Derivation (every step is `full_reduce(x + y)`):
//! - E = A+B, F = C+D, G = E+F
//! - I = A+E, J = B+E, H = I+J
//! - K = C+F, L = D+F, M = K+L
//! - N = F+G, O = E+G, P = N+O, Q = O+P, R = N+P
//!
//! P hangs off N and O, which hang off layer1 — never off A–D directly.

use std::collections::BTreeSet;

use chrono::{Datelike, Local, NaiveDate};

use crate::core::date::{parse_date, InvalidDateFormat};
use crate::core::reduce::full_reduce;
use crate::types::{Inputs, Layer1, SecondLayer, ThirdLayer, Triangle};

/// Build a triangle from four seed digits.
///
/// Zero seeds are the driver escape hatch; DOB paths always pass 1–9.
pub fn triangle_from_seeds(a: u8, b: u8, c: u8, d: u8) -> Triangle {
    let add = |x: u8, y: u8| full_reduce(x as u32 + y as u32);

    let e = add(a, b);
    let f = add(c, d);
    let g = add(e, f);

    let i = add(a, e);
    let j = add(b, e);
    let h = add(i, j);
    let k = add(c, f);
    let l = add(d, f);
    let m = add(k, l);

    let n = add(f, g);
    let o = add(e, g);
    let p = add(n, o);
    let q = add(o, p);
    let r = add(n, p);

    Triangle::assemble(
        Inputs { a, b, c, d },
        Layer1 { e, f, g },
        SecondLayer { h, i, j, k, l, m },
        ThirdLayer { n, o, p, q, r },
    )
}

/// Reduced halves of a four-digit-padded year: (first two, remainder)
pub fn year_halves(year: u32) -> (u8, u8) {
    let y = format!("{:04}", year);
    let (head, tail) = y.split_at(2);
    (
        full_reduce(head.parse::<u32>().unwrap_or(0)),
        full_reduce(tail.parse::<u32>().unwrap_or(0)),
    )
}

/// Build a triangle from a calendar date via the DOB seed rule
pub fn triangle_from_date(date: NaiveDate) -> Triangle {
    let (c, d) = year_halves(date.year().unsigned_abs());
    triangle_from_seeds(
        full_reduce(date.day()),
        full_reduce(date.month()),
        c,
        d,
    )
}

/// Build a triangle from a DOB string (`DD-MM-YYYY` or `YYYY-MM-DD`)
pub fn triangle_from_dob(dob: &str) -> Result<Triangle, InvalidDateFormat> {
    Ok(triangle_from_date(parse_date(dob)?))
}

/// Build a triangle from today's date
pub fn today_triangle() -> Triangle {
    triangle_from_date(Local::now().date_naive())
}

/// Distinct digits appearing anywhere in the four tiers
pub fn used_numbers(t: &Triangle) -> BTreeSet<u8> {
    t.flatten().iter().map(|&(_, v)| v).collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_graph_29_10_2001() {
        let t = triangle_from_dob("29-10-2001").unwrap();
        assert_eq!((t.inputs.a, t.inputs.b, t.inputs.c, t.inputs.d), (2, 1, 2, 1));
        assert_eq!((t.layer1.e, t.layer1.f, t.layer1.g), (3, 3, 6));
        assert_eq!(t.third_layer.p, 9);
    }

    #[test]
    fn test_dependency_graph_28_01_2005() {
        let t = triangle_from_dob("28-01-2005").unwrap();
        assert_eq!((t.inputs.a, t.inputs.b, t.inputs.c, t.inputs.d), (1, 1, 2, 5));
        assert_eq!((t.layer1.e, t.layer1.f, t.layer1.g), (2, 7, 9));
        assert_eq!(t.second_layer.h, 6);
        assert_eq!(t.third_layer.p, 9);
    }

    #[test]
    fn test_core_summary_consistency() {
        let t = triangle_from_dob("29-10-2001").unwrap();
        assert_eq!(
            t.core.core_pair,
            t.layer1.e as u32 * 10 + t.layer1.f as u32
        );
        assert_eq!(t.core.g, t.layer1.g);
        assert_eq!(t.core.p_outcome, t.third_layer.p);
    }

    #[test]
    fn test_derived_tiers_never_zero_for_dob_seeds() {
        for a in 1..=9 {
            for b in 1..=9 {
                let t = triangle_from_seeds(a, b, 3, 7);
                for (label, v) in t.flatten().iter().skip(4) {
                    assert!((1..=9).contains(v), "{} = {} for seeds {},{}", label, v, a, b);
                }
            }
        }
    }

    #[test]
    fn test_year_halves() {
        assert_eq!(year_halves(2001), (2, 1));
        assert_eq!(year_halves(2025), (2, 7));
        assert_eq!(year_halves(1999), (1, 9));
        // padded to four digits
        assert_eq!(year_halves(5), (0, 5));
    }

    #[test]
    fn test_today_triangle_is_fully_populated() {
        let t = today_triangle();
        for (_, v) in t.flatten().iter().skip(4) {
            assert!((1..=9).contains(v));
        }
    }

    #[test]
    fn test_used_numbers_collects_all_tiers() {
        let t = triangle_from_dob("29-10-2001").unwrap();
        let used = used_numbers(&t);
        assert!(used.contains(&t.inputs.a));
        assert!(used.contains(&t.third_layer.r));
        assert!(used.iter().all(|d| *d <= 9));
    }
}
