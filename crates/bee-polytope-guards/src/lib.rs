pub mod directive;
pub mod evaluator;
pub mod guard;
pub mod policy;
pub mod region;

pub use directive::{issue_directive, ActuationDirective, DirectiveError, SensorReading};
pub use evaluator::HazardEvaluator;
pub use guard::BeePolytopeGuard;
pub use policy::ActuationPolicy;
pub use region::RegionClassifier;
