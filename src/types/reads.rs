//! Read codes: fixed-name digit concatenations derived from one triangle

use serde::{Deserialize, Serialize};

/// The fixed read table: 18 two-position concatenations plus the `G`
/// pass-through.
///
/// Each concatenation joins two cells as decimal digits without reducing
/// (E=2, F=7 → 27). A zeroed driver cell can collapse a code to a single
/// digit (A=0, B=5 → 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reads {
    /// Raw G value, not a concatenation
    #[serde(rename = "G")]
    pub g: u32,
    #[serde(rename = "EF(CORE)")]
    pub ef_core: u32,
    #[serde(rename = "AB")]
    pub ab: u32,
    #[serde(rename = "CD")]
    pub cd: u32,
    #[serde(rename = "AE")]
    pub ae: u32,
    #[serde(rename = "BE")]
    pub be: u32,
    #[serde(rename = "CF")]
    pub cf: u32,
    #[serde(rename = "DF")]
    pub df: u32,
    #[serde(rename = "IJ")]
    pub ij: u32,
    #[serde(rename = "KL")]
    pub kl: u32,
    #[serde(rename = "JG")]
    pub jg: u32,
    #[serde(rename = "GK")]
    pub gk: u32,
    #[serde(rename = "EG")]
    pub eg: u32,
    #[serde(rename = "FG")]
    pub fg: u32,
    #[serde(rename = "NO")]
    pub no: u32,
    #[serde(rename = "NP")]
    pub np: u32,
    #[serde(rename = "OP")]
    pub op: u32,
    #[serde(rename = "PQ")]
    pub pq: u32,
    #[serde(rename = "PR")]
    pub pr: u32,
}

impl Reads {
    /// Code names in table order
    pub const KEYS: [&'static str; 19] = [
        "G", "EF(CORE)", "AB", "CD", "AE", "BE", "CF", "DF", "IJ", "KL", "JG",
        "GK", "EG", "FG", "NO", "NP", "OP", "PQ", "PR",
    ];

    /// All read values in table order
    pub fn values(&self) -> [u32; 19] {
        [
            self.g, self.ef_core, self.ab, self.cd, self.ae, self.be, self.cf,
            self.df, self.ij, self.kl, self.jg, self.gk, self.eg, self.fg,
            self.no, self.np, self.op, self.pq, self.pr,
        ]
    }

    /// Compound read values (both digits present, 10–99), table order
    pub fn compound_values(&self) -> Vec<u32> {
        self.values()
            .into_iter()
            .filter(|v| (crate::COMPOUND_READ_MIN..=crate::COMPOUND_READ_MAX).contains(v))
            .collect()
    }
}
