//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile de valeurs f64
//!
//! Chaque appel est indépendant : jetons, RPN et pile lui appartiennent et
//! disparaissent au retour. Aucune donnée partagée, aucune I/O.

use tracing::debug;

use super::erreur::{ErreurEvaluation, Result};
use super::jetons::{format_jetons, tokenize_avec, Jeton, PolitiquePoint};
use super::rpn::vers_rpn;

/// Réglages du noyau (tous ont une valeur par défaut).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    pub politique_point: PolitiquePoint,
}

/// Résultat détaillé : valeur + démarche (jetons, RPN) en texte.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression avec les réglages par défaut.
///
/// - chaîne vide (après trim) => 0
/// - résultat non fini (débordement) => `DivisionParZero`
pub fn evaluer(expr_str: &str) -> Result<f64> {
    evaluer_avec(expr_str, &Reglages::default())
}

pub fn evaluer_avec(expr_str: &str, reglages: &Reglages) -> Result<f64> {
    evaluer_detaille(expr_str, reglages).map(|e| e.valeur)
}

#[tracing::instrument(level = "debug", skip(reglages))]
pub fn evaluer_detaille(expr_str: &str, reglages: &Reglages) -> Result<Evaluation> {
    let s = match expr_str.trim() {
        "" => "0",
        s => s,
    };

    let resultat = pipeline(s, reglages);
    if let Err(e) = &resultat {
        debug!(expression = s, erreur = %e, "évaluation refusée");
    }
    resultat
}

fn pipeline(s: &str, reglages: &Reglages) -> Result<Evaluation> {
    // 1) Jetons
    let jetons = tokenize_avec(s, reglages.politique_point)?;
    let jetons_txt = format_jetons(&jetons);
    debug!(jetons = %jetons_txt, "jetons");

    // 2) RPN
    let rpn = vers_rpn(&jetons)?;
    let rpn_txt = format_jetons(&rpn);
    debug!(rpn = %rpn_txt, "rpn");

    // 3) Pile
    let valeur = evaluer_rpn(&rpn)?;
    if !valeur.is_finite() {
        // débordement : même classe que la division par zéro pour l’appelant
        return Err(ErreurEvaluation::DivisionParZero);
    }
    debug!(valeur, "valeur");

    Ok(Evaluation {
        valeur,
        jetons: jetons_txt,
        rpn: rpn_txt,
    })
}

/// Réduit une RPN à une seule valeur.
pub fn evaluer_rpn(rpn: &[Jeton]) -> Result<f64> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Jeton::Nombre(texte) => pile.push(lire_nombre(texte)?),

            Jeton::Operateur(op) => {
                // LIFO : le premier dépilé est l’opérande de droite
                let b = pile.pop().ok_or(ErreurEvaluation::OperandesInsuffisantes)?;
                let a = pile.pop().ok_or(ErreurEvaluation::OperandesInsuffisantes)?;

                let v = match op {
                    '+' => a + b,
                    '-' => a - b,
                    '*' => a * b,
                    '/' => {
                        if b == 0.0 {
                            return Err(ErreurEvaluation::DivisionParZero);
                        }
                        a / b
                    }
                    _ => return Err(ErreurEvaluation::jeton_invalide(op.to_string())),
                };

                pile.push(v);
            }

            Jeton::ParG | Jeton::ParD => {
                return Err(ErreurEvaluation::jeton_invalide(tok.to_string()))
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurEvaluation::ExpressionMalformee),
    }
}

/// Littéral décimal simple : chiffres, au plus un point, au moins un chiffre.
/// (refuse "inf", "1e5"… que `f64::from_str` accepterait)
fn lire_nombre(texte: &str) -> Result<f64> {
    let points = texte.chars().filter(|&c| c == '.').count();
    let chiffres = texte.chars().filter(char::is_ascii_digit).count();

    if points > 1 || chiffres == 0 || chiffres + points != texte.chars().count() {
        return Err(ErreurEvaluation::jeton_invalide(texte));
    }

    texte
        .parse::<f64>()
        .map_err(|_| ErreurEvaluation::jeton_invalide(texte))
}
