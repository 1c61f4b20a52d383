//! Triangle combination: slotwise add-and-reduce of two triangles

use crate::core::reduce::full_reduce;
use crate::types::{Inputs, Layer1, SecondLayer, ThirdLayer, Triangle};

/// Combine two triangles cell by cell: `full_reduce(left + right)` for
/// every named slot, with the core summary rebuilt from the combined
/// E/F/G/P rather than copied from either side.
///
/// Commutative and deterministic; not idempotent except at fixed points.
pub fn combine(t1: &Triangle, t2: &Triangle) -> Triangle {
    let add = |x: u8, y: u8| full_reduce(x as u32 + y as u32);

    Triangle::assemble(
        Inputs {
            a: add(t1.inputs.a, t2.inputs.a),
            b: add(t1.inputs.b, t2.inputs.b),
            c: add(t1.inputs.c, t2.inputs.c),
            d: add(t1.inputs.d, t2.inputs.d),
        },
        Layer1 {
            e: add(t1.layer1.e, t2.layer1.e),
            f: add(t1.layer1.f, t2.layer1.f),
            g: add(t1.layer1.g, t2.layer1.g),
        },
        SecondLayer {
            h: add(t1.second_layer.h, t2.second_layer.h),
            i: add(t1.second_layer.i, t2.second_layer.i),
            j: add(t1.second_layer.j, t2.second_layer.j),
            k: add(t1.second_layer.k, t2.second_layer.k),
            l: add(t1.second_layer.l, t2.second_layer.l),
            m: add(t1.second_layer.m, t2.second_layer.m),
        },
        ThirdLayer {
            n: add(t1.third_layer.n, t2.third_layer.n),
            o: add(t1.third_layer.o, t2.third_layer.o),
            p: add(t1.third_layer.p, t2.third_layer.p),
            q: add(t1.third_layer.q, t2.third_layer.q),
            r: add(t1.third_layer.r, t2.third_layer.r),
        },
    )
}

// =============================================================================
// TESTS
// =============================================================================
