//! Reads derivation: concatenation codes over one triangle

use crate::types::{Reads, Triangle};

/// Derive the fixed read table from a triangle.
///
/// Codes concatenate two cells as decimal digits (never reduced); `G`
/// passes through raw.
pub fn build_reads(t: &Triangle) -> Reads {
    let cat = |x: u8, y: u8| x as u32 * 10 + y as u32;

    let i = &t.inputs;
    let l1 = &t.layer1;
    let l2 = &t.second_layer;
    let l3 = &t.third_layer;

    Reads {
        g: l1.g as u32,
        ef_core: cat(l1.e, l1.f),
        ab: cat(i.a, i.b),
        cd: cat(i.c, i.d),
        ae: cat(i.a, l1.e),
        be: cat(i.b, l1.e),
        cf: cat(i.c, l1.f),
        df: cat(i.d, l1.f),
        ij: cat(l2.i, l2.j),
        kl: cat(l2.k, l2.l),
        jg: cat(l2.j, l1.g),
        gk: cat(l1.g, l2.k),
        eg: cat(l1.e, l1.g),
        fg: cat(l1.f, l1.g),
        no: cat(l3.n, l3.o),
        np: cat(l3.n, l3.p),
        op: cat(l3.o, l3.p),
        pq: cat(l3.p, l3.q),
        pr: cat(l3.p, l3.r),
    }
}

// =============================================================================
// TESTS
// =============================================================================
