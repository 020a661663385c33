use crate::actuation::RiskThresholds;
use crate::error::ConfigError;
use crate::hazard::HazardParameters;
use crate::polytope::Polytope;
use serde::{Deserialize, Serialize};

/// Allowed drift of the mixture weight sum away from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Everything a guard needs, as handed over by the calibration side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardConfig {
    pub hazard: HazardParameters,
    #[serde(default)]
    pub forage_polytope: Polytope,
    #[serde(default)]
    pub retreat_polytope: Polytope,
    pub thresholds: RiskThresholds,
}

impl GuardConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Opt-in sanity check. Guards built from an unchecked config still run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let h = &self.hazard;
        let hazard_values = [
            h.lc50.pm25_ug_m3,
            h.lc50.nox_ppb,
            h.lc50.o3_ppb,
            h.lc50.voc_ug_m3,
            h.weights.w_pm25,
            h.weights.w_nox,
            h.weights.w_o3,
            h.weights.w_voc,
            h.pm25_eq_viability_ug_m3,
        ];
        if !hazard_values.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::NonFinite("hazard parameters"));
        }
        for (name, poly) in [
            ("forage polytope", &self.forage_polytope),
            ("retreat polytope", &self.retreat_polytope),
        ] {
            let finite = poly
                .rows()
                .iter()
                .all(|row| row.b.is_finite() && row.a.iter().all(|a| a.is_finite()));
            if !finite {
                return Err(ConfigError::NonFinite(name));
            }
        }

        let t = &self.thresholds;
        if !(t.soft_limit.is_finite() && t.hard_limit.is_finite() && t.throttle_cap.is_finite()) {
            return Err(ConfigError::NonFinite("risk thresholds"));
        }
        if t.soft_limit <= 0.0 {
            return Err(ConfigError::NonPositiveSoftLimit(t.soft_limit));
        }
        if t.hard_limit <= t.soft_limit {
            return Err(ConfigError::ThresholdOrder {
                soft: t.soft_limit,
                hard: t.hard_limit,
            });
        }
        if !(0.0..=1.0).contains(&t.throttle_cap) {
            return Err(ConfigError::ThrottleCap(t.throttle_cap));
        }

        let sum = h.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum(sum));
        }
        Ok(())
    }
}
