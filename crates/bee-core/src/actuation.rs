use crate::region::RegionClass;
use serde::{Deserialize, Serialize};

/// Fraction of the linear headroom granted while throttled.
pub const DEFAULT_THROTTLE_CAP: f64 = 0.5;

fn default_throttle_cap() -> f64 {
    DEFAULT_THROTTLE_CAP
}

/// Risk bands on `r_bee`. Expected `hard_limit > soft_limit > 0`; not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub soft_limit: f64,
    pub hard_limit: f64,
    #[serde(default = "default_throttle_cap")]
    pub throttle_cap: f64,
}

impl RiskThresholds {
    pub fn new(soft_limit: f64, hard_limit: f64) -> Self {
        Self {
            soft_limit,
            hard_limit,
            throttle_cap: DEFAULT_THROTTLE_CAP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActuationLimits {
    pub region: RegionClass,
    /// 0–1 multiplier for nanoswarm actuators.
    pub duty_scale: f64,
    /// Whether bees should be encouraged to forage.
    pub allow_foraging: bool,
}

impl ActuationLimits {
    pub fn halted(region: RegionClass) -> Self {
        Self {
            region,
            duty_scale: 0.0,
            allow_foraging: false,
        }
    }

    pub fn is_halted(&self) -> bool {
        self.duty_scale == 0.0 && !self.allow_foraging
    }
}
