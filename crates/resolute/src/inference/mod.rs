//! Inference rules, redundancy checks and derivation tracking

pub mod control;
pub mod derivation;
pub mod factoring;
pub mod literal_selection;
pub mod proof;
pub mod resolution;
pub mod subsumption;

pub use control::{compute_all_factors, compute_all_resolvents, ResControl};
pub use derivation::{
    derivation_output_enabled, disable_derivation_output, enable_derivation_output,
    ordered_derivation, Derivable, Derivation,
};
pub use factoring::factor;
pub use literal_selection::{select_inference_literals, LiteralSelection};
pub use proof::{Proof, ProofStep};
pub use resolution::resolve;
pub use subsumption::{backward_subsumption, forward_subsumption, subsumes};
