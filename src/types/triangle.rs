//! Triangle value object: four tiers of named digit cells plus a derived core

use serde::{Deserialize, Serialize};

/// Seed tier A–D.
///
/// DOB-built triangles carry digits in 1–9; synthetic drivers (year-only,
/// month-year) zero out A and/or B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inputs {
    /// Reduced day of birth (or 0 for drivers)
    #[serde(rename = "A")]
    pub a: u8,
    /// Reduced month of birth (or 0 for the year-only driver)
    #[serde(rename = "B")]
    pub b: u8,
    /// Reduced first two digits of the year
    #[serde(rename = "C")]
    pub c: u8,
    /// Reduced last two digits of the year
    #[serde(rename = "D")]
    pub d: u8,
}

/// First derived tier: E = A+B, F = C+D, G = E+F (all reduced)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer1 {
    #[serde(rename = "E")]
    pub e: u8,
    #[serde(rename = "F")]
    pub f: u8,
    #[serde(rename = "G")]
    pub g: u8,
}

/// Second derived tier: the two side clusters and their heads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondLayer {
    #[serde(rename = "H")]
    pub h: u8,
    #[serde(rename = "I")]
    pub i: u8,
    #[serde(rename = "J")]
    pub j: u8,
    #[serde(rename = "K")]
    pub k: u8,
    #[serde(rename = "L")]
    pub l: u8,
    #[serde(rename = "M")]
    pub m: u8,
}

/// Third derived tier: the outcome chain N, O, P, Q, R
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdLayer {
    #[serde(rename = "N")]
    pub n: u8,
    #[serde(rename = "O")]
    pub o: u8,
    #[serde(rename = "P")]
    pub p: u8,
    #[serde(rename = "Q")]
    pub q: u8,
    #[serde(rename = "R")]
    pub r: u8,
}

/// Redundant core summary, always rebuilt from layer1/third_layer.
///
/// `core_pair` concatenates E and F as decimal digits (E=3, F=3 → 33).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreGlance {
    pub core_pair: u32,
    #[serde(rename = "G")]
    pub g: u8,
    #[serde(rename = "P_outcome")]
    pub p_outcome: u8,
}

impl CoreGlance {
    /// Derive the core summary from already-built tiers
    pub fn derive(layer1: &Layer1, third_layer: &ThirdLayer) -> Self {
        Self {
            core_pair: layer1.e as u32 * 10 + layer1.f as u32,
            g: layer1.g,
            p_outcome: third_layer.p,
        }
    }
}

/// The full four-tier triangle.
///
/// Immutable once built; combination produces a fresh triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub inputs: Inputs,
    pub layer1: Layer1,
    pub core: CoreGlance,
    pub second_layer: SecondLayer,
    pub third_layer: ThirdLayer,
}

impl Triangle {
    /// Assemble a triangle from its tiers, deriving the core summary
    pub fn assemble(
        inputs: Inputs,
        layer1: Layer1,
        second_layer: SecondLayer,
        third_layer: ThirdLayer,
    ) -> Self {
        Self {
            inputs,
            layer1,
            core: CoreGlance::derive(&layer1, &third_layer),
            second_layer,
            third_layer,
        }
    }

    /// Look up a single cell by its position letter
    pub fn digit(&self, label: char) -> Option<u8> {
        let v = match label {
            'A' => self.inputs.a,
            'B' => self.inputs.b,
            'C' => self.inputs.c,
            'D' => self.inputs.d,
            'E' => self.layer1.e,
            'F' => self.layer1.f,
            'G' => self.layer1.g,
            'H' => self.second_layer.h,
            'I' => self.second_layer.i,
            'J' => self.second_layer.j,
            'K' => self.second_layer.k,
            'L' => self.second_layer.l,
            'M' => self.second_layer.m,
            'N' => self.third_layer.n,
            'O' => self.third_layer.o,
            'P' => self.third_layer.p,
            'Q' => self.third_layer.q,
            'R' => self.third_layer.r,
            _ => return None,
        };
        Some(v)
    }

    /// All 18 cells in tier order (inputs, layer1, second, third)
    pub fn flatten(&self) -> [(char, u8); 18] {
        [
            ('A', self.inputs.a),
            ('B', self.inputs.b),
            ('C', self.inputs.c),
            ('D', self.inputs.d),
            ('E', self.layer1.e),
            ('F', self.layer1.f),
            ('G', self.layer1.g),
            ('H', self.second_layer.h),
            ('I', self.second_layer.i),
            ('J', self.second_layer.j),
            ('K', self.second_layer.k),
            ('L', self.second_layer.l),
            ('M', self.second_layer.m),
            ('N', self.third_layer.n),
            ('O', self.third_layer.o),
            ('P', self.third_layer.p),
            ('Q', self.third_layer.q),
            ('R', self.third_layer.r),
        ]
    }
}
