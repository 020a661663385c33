use bee_core::actuation::{ActuationLimits, RiskThresholds};
use bee_core::hazard::HazardState;
use bee_core::region::RegionClass;
use tracing::debug;

/// Ordered decision: hard stop, then soft throttle, then normal operation.
#[derive(Debug, Clone, Copy)]
pub struct ActuationPolicy {
    thresholds: RiskThresholds,
}

impl ActuationPolicy {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    pub fn decide(&self, hazard: &HazardState, region: RegionClass) -> ActuationLimits {
        let t = &self.thresholds;
        let r_bee = hazard.r_bee;

        if region == RegionClass::Forbidden || r_bee >= t.hard_limit {
            debug!(%region, r_bee, "hard stop");
            return ActuationLimits::halted(region);
        }

        if region == RegionClass::RetreatOnly || r_bee > t.soft_limit {
            // Linear clip of the headroom left below the hard limit.
            let alpha = (1.0 - r_bee / t.hard_limit).max(0.0);
            let duty_scale = alpha * t.throttle_cap;
            debug!(%region, r_bee, duty_scale, "soft throttle");
            return ActuationLimits {
                region,
                duty_scale,
                allow_foraging: false,
            };
        }

        debug!(%region, r_bee, "normal operation");
        ActuationLimits {
            region,
            duty_scale: 1.0,
            allow_foraging: true,
        }
    }
}
