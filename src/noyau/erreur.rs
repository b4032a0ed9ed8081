// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau. Chaque étage du pipeline échoue immédiatement,
/// sans tentative de récupération.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEvaluation {
    /// `(` jamais fermée ou `)` sans `(` correspondante.
    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    /// Jeton hors grammaire (symbole inconnu, nombre illisible, parenthèse en RPN…).
    #[error("jeton invalide: '{0}'")]
    JetonInvalide(String),

    /// Un opérateur a trouvé moins de deux valeurs sur la pile.
    #[error("opérandes insuffisantes")]
    OperandesInsuffisantes,

    /// La pile ne contient pas exactement une valeur à la fin.
    #[error("expression malformée")]
    ExpressionMalformee,

    /// Diviseur nul, ou résultat final non fini.
    #[error("division par zéro")]
    DivisionParZero,
}

impl ErreurEvaluation {
    pub fn jeton_invalide(texte: impl Into<String>) -> Self {
        Self::JetonInvalide(texte.into())
    }

    /// Seule classe d’erreur que la coque affiche spécifiquement.
    pub fn est_division_par_zero(&self) -> bool {
        matches!(self, Self::DivisionParZero)
    }
}

pub type Result<T> = std::result::Result<T, ErreurEvaluation>;
