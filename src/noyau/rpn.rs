// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> RPN (postfix)
//
// Règles:
// - + et - : précédence 1 ; * et / : précédence 2
// - tous les opérateurs sont associatifs à gauche : "a-b-c" => "a b - c -"
// - le moins unaire est déjà réécrit en "0 -" (ou "( 0 - x )") par jetons.rs

use super::erreur::{ErreurEvaluation, Result};
use super::jetons::{est_operateur, Jeton};

pub fn precedence(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        '*' | '/' => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(1), Plus, Num(2), Star, Num(3)]
///   rpn:    [Num(1), Num(2), Num(3), Star, Plus]
pub fn vers_rpn(tokens: &[Jeton]) -> Result<Vec<Jeton>> {
    let mut out: Vec<Jeton> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Jeton> = Vec::new();

    for tok in tokens {
        match tok {
            Jeton::Nombre(_) => out.push(tok.clone()),

            Jeton::Operateur(op) => {
                if !est_operateur(*op) {
                    return Err(ErreurEvaluation::jeton_invalide(op.to_string()));
                }

                // dépile tant que le sommet est un opérateur de précédence >=
                while let Some(Jeton::Operateur(top)) = ops.last() {
                    if precedence(*top) < precedence(*op) {
                        break;
                    }
                    out.extend(ops.pop());
                }

                ops.push(tok.clone());
            }

            Jeton::ParG => ops.push(Jeton::ParG),

            Jeton::ParD => {
                // dépile jusqu’à '(' ; pile vide avant => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(Jeton::ParG) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurEvaluation::ParenthesesDesequilibrees),
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::ParG | Jeton::ParD) {
            return Err(ErreurEvaluation::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}
