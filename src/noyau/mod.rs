//! Noyau arithmétique (f64)
//!
//! Organisation interne :
//! - erreur.rs  : ErreurEvaluation (thiserror)
//! - jetons.rs  : tokenisation + moins unaire + politique du point
//! - rpn.rs     : shunting-yard
//! - eval.rs    : pile RPN + pipeline complet

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurEvaluation;
pub use eval::{evaluer, evaluer_avec, evaluer_detaille, Evaluation, Reglages};
pub use jetons::PolitiquePoint;
