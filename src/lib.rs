//! Trikona: deterministic numerology triangle engine
//!
//! Pipeline: date → seed digits A–D → triangle E–R → reads → signal scan

pub mod core;
pub mod types;

// =============================================================================
// POSITION SETS [C] - triangle geometry
// =============================================================================

/// Positions on the left slope of the triangle
pub const LEFT_POSITIONS: [char; 7] = ['A', 'B', 'E', 'H', 'K', 'N', 'Q'];

/// Positions on the right slope of the triangle
pub const RIGHT_POSITIONS: [char; 7] = ['C', 'D', 'F', 'J', 'M', 'O', 'R'];

/// Spine positions between the slopes
pub const MIDDLE_POSITIONS: [char; 4] = ['G', 'I', 'L', 'P'];

/// Positions counted as positive in the polarity summary
pub const POLARITY_POSITIVE: [char; 4] = ['C', 'D', 'F', 'G'];

/// Positions counted as negative in the polarity summary
pub const POLARITY_NEGATIVE: [char; 3] = ['A', 'B', 'E'];

// =============================================================================
// SCANNER CONSTANTS [C] - fixed rule memberships, preserved verbatim
// =============================================================================

/// Pairing groups for the A↔D / B↔C rule; equal digits also pair
pub const PAIR_GROUPS: [[u8; 2]; 4] = [[1, 6], [2, 7], [3, 8], [4, 9]];

/// Digits that form the leader pattern across C, D, F, G, K, L
pub const LEADER_DIGITS: [u8; 3] = [1, 2, 3];

/// Read values that open a downfall window (yearly/monthly only)
pub const DOWNFALL_READS: [u32; 2] = [18, 81];

/// Age ceilings of the three downfall windows
pub const DOWNFALL_AGE_WINDOWS: [u32; 3] = [27, 36, 45];

/// Occurrence count at which downfall risk extends past the last age ceiling
pub const DOWNFALL_ESCALATION_COUNT: usize = 3;

/// Compound read range: two concatenated decimal digits
pub const COMPOUND_READ_MIN: u32 = 10;
pub const COMPOUND_READ_MAX: u32 = 99;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
