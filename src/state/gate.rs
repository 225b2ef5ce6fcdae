//! Gating conditions for the conditional counter variant

use serde::{Deserialize, Serialize};

/// One of the three independent gating conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateFlag {
    Okay,
    Safe,
    Cool,
}

impl GateFlag {
    /// Look up a flag by its lowercase name, as used in request paths
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "okay" => Some(Self::Okay),
            "safe" => Some(Self::Safe),
            "cool" => Some(Self::Cool),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Okay => "okay",
            Self::Safe => "safe",
            Self::Cool => "cool",
        }
    }
}

/// The three independent booleans whose conjunction drives the gated
/// counter. All start false, so the gated counter starts stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GateFlags {
    pub okay: bool,
    pub safe: bool,
    pub cool: bool,
}

impl GateFlags {
    /// Create gate flags with every condition false
    pub fn new() -> Self {
        Self {
            okay: false,
            safe: false,
            cool: false,
        }
    }

    /// Flip one condition and return its new value
    pub fn toggle(&mut self, flag: GateFlag) -> bool {
        let slot = match flag {
            GateFlag::Okay => &mut self.okay,
            GateFlag::Safe => &mut self.safe,
            GateFlag::Cool => &mut self.cool,
        };
        *slot = !*slot;
        *slot
    }

    /// The derived value: the gate is open iff every condition holds.
    /// Recomputed eagerly after each toggle; the counter's active level
    /// is set from this and nothing else.
    pub fn is_open(&self) -> bool {
        self.okay && self.safe && self.cool
    }
}

impl Default for GateFlags {
    fn default() -> Self {
        Self::new()
    }
}
