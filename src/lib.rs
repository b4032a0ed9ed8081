//! Calculatrice simple — bibliothèque
//!
//! Le noyau (`noyau`) évalue une expression arithmétique tapée par un humain:
//! jetons -> RPN -> valeur f64. Il est sans état et sans I/O.
//!
//! La coque graphique (binaire) n’appelle que `noyau::evaluer`.

pub mod noyau;

pub use noyau::{evaluer, ErreurEvaluation};
