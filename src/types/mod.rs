//! Core types for Trikona

mod polarity;
mod reads;
mod signal;
mod triangle;

pub use polarity::{Balance, PolarityDetail, PolaritySummary};
pub use reads::Reads;
pub use signal::{DownfallReport, DownfallWindow, SignalBundle, SpecialRule};
pub use triangle::{CoreGlance, Inputs, Layer1, SecondLayer, ThirdLayer, Triangle};
