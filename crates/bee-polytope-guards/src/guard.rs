use crate::evaluator::HazardEvaluator;
use crate::policy::ActuationPolicy;
use crate::region::RegionClassifier;
use bee_core::actuation::{ActuationLimits, RiskThresholds};
use bee_core::config::GuardConfig;
use bee_core::hazard::{HazardParameters, HazardState};
use bee_core::polytope::Polytope;
use bee_core::region::RegionClass;
use bee_core::state::EnvironmentalState;

/// Maps a 5-D ambient state plus VOC reading to nanoswarm actuation limits.
///
/// Configuration is fixed at construction and never mutated, so one guard can
/// be shared by reference across any number of callers. Nothing here is
/// validated: see [`GuardConfig::validate`] for an opt-in check.
#[derive(Debug, Clone)]
pub struct BeePolytopeGuard {
    evaluator: HazardEvaluator,
    classifier: RegionClassifier,
    policy: ActuationPolicy,
}

impl BeePolytopeGuard {
    pub fn new(
        hazard: HazardParameters,
        forage_polytope: Polytope,
        retreat_polytope: Polytope,
        r_bee_soft_limit: f64,
        r_bee_hard_limit: f64,
    ) -> Self {
        Self::with_thresholds(
            hazard,
            forage_polytope,
            retreat_polytope,
            RiskThresholds::new(r_bee_soft_limit, r_bee_hard_limit),
        )
    }

    pub fn with_thresholds(
        hazard: HazardParameters,
        forage_polytope: Polytope,
        retreat_polytope: Polytope,
        thresholds: RiskThresholds,
    ) -> Self {
        Self {
            evaluator: HazardEvaluator::new(hazard),
            classifier: RegionClassifier::new(forage_polytope, retreat_polytope),
            policy: ActuationPolicy::new(thresholds),
        }
    }

    pub fn from_config(config: GuardConfig) -> Self {
        Self::with_thresholds(
            config.hazard,
            config.forage_polytope,
            config.retreat_polytope,
            config.thresholds,
        )
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        self.policy.thresholds()
    }

    pub fn compute_hazard(&self, state: &EnvironmentalState, voc_ug_m3: f64) -> HazardState {
        self.evaluator
            .compute_hazard(state, voc_ug_m3, self.thresholds().soft_limit)
    }

    pub fn classify_region(&self, state: &EnvironmentalState) -> RegionClass {
        self.classifier.classify_region(state)
    }

    /// Hazard and limits from a single pass over the reading.
    pub fn evaluate(
        &self,
        state: &EnvironmentalState,
        voc_ug_m3: f64,
    ) -> (HazardState, ActuationLimits) {
        let hazard = self.compute_hazard(state, voc_ug_m3);
        let region = self.classify_region(state);
        let limits = self.policy.decide(&hazard, region);
        (hazard, limits)
    }

    pub fn compute_actuation(&self, state: &EnvironmentalState, voc_ug_m3: f64) -> ActuationLimits {
        self.evaluate(state, voc_ug_m3).1
    }
}
