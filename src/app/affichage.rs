// src/app/affichage.rs
//
// Présentation des sorties du noyau : arrondi du résultat, messages d’erreur.

use calculatrice_simple::ErreurEvaluation;

/// Arrondit à `decimales` chiffres, retire les zéros finaux, "-0" devient "0".
pub fn format_resultat(v: f64, decimales: usize) -> String {
    let mut s = format!("{v:.decimales$}");

    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Seule la division par zéro a un message dédié.
pub fn message_erreur(e: &ErreurEvaluation) -> &'static str {
    if e.est_division_par_zero() {
        "Division par zéro"
    } else {
        "Erreur"
    }
}
