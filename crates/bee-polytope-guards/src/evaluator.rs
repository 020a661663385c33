use bee_core::hazard::{pm25_equivalent, ChannelRatios, HazardParameters, HazardState};
use bee_core::state::EnvironmentalState;
use tracing::trace;

/// Mixture-weighted toxicity index over PM2.5, NOx, O3 and VOC.
#[derive(Debug, Clone)]
pub struct HazardEvaluator {
    params: HazardParameters,
}

impl HazardEvaluator {
    pub fn new(params: HazardParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &HazardParameters {
        &self.params
    }

    /// Inputs are taken as-is; negative or extreme readings pass straight through.
    pub fn compute_hazard(
        &self,
        state: &EnvironmentalState,
        voc_ug_m3: f64,
        soft_limit: f64,
    ) -> HazardState {
        let ratios = ChannelRatios::from_readings(state, voc_ug_m3, &self.params.lc50);
        let r_bee = ratios.weighted(&self.params.weights);
        let pm25_eq = pm25_equivalent(state, voc_ug_m3, &self.params.weights);
        let within_viability =
            pm25_eq <= self.params.pm25_eq_viability_ug_m3 && r_bee <= soft_limit;

        trace!(r_bee, pm25_eq, within_viability, "hazard evaluated");

        HazardState {
            r_bee,
            pm25_eq,
            within_viability,
            ratios,
        }
    }
}
