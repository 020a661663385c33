use bee_core::polytope::Polytope;
use bee_core::region::RegionClass;
use bee_core::state::EnvironmentalState;
use tracing::trace;

/// Two-polytope classifier. Forage-safe wins wherever the polytopes overlap.
#[derive(Debug, Clone)]
pub struct RegionClassifier {
    forage: Polytope,
    retreat: Polytope,
}

impl RegionClassifier {
    pub fn new(forage: Polytope, retreat: Polytope) -> Self {
        Self { forage, retreat }
    }

    pub fn forage_polytope(&self) -> &Polytope {
        &self.forage
    }

    pub fn retreat_polytope(&self) -> &Polytope {
        &self.retreat
    }

    pub fn classify_region(&self, state: &EnvironmentalState) -> RegionClass {
        let x = state.as_point();
        if self.forage.contains_point(&x) {
            return RegionClass::ForageSafe;
        }
        if self.retreat.contains_point(&x) {
            return RegionClass::RetreatOnly;
        }
        trace!(
            forage_row = ?self.forage.first_violation(state),
            retreat_row = ?self.retreat.first_violation(state),
            "state outside both polytopes"
        );
        RegionClass::Forbidden
    }
}
