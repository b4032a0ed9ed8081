// src/noyau/jetons.rs

use std::fmt;

use super::erreur::{ErreurEvaluation, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    // Texte du littéral (normalisé: "12." devient "12.0")
    Nombre(String),

    // + - * /  (tout autre symbole sera refusé par rpn/eval)
    Operateur(char),

    ParG,
    ParD,
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(texte) => f.write_str(texte),
            Jeton::Operateur(op) => write!(f, "{op}"),
            Jeton::ParG => f.write_str("("),
            Jeton::ParD => f.write_str(")"),
        }
    }
}

/// Que faire d’un deuxième point décimal dans un même littéral.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolitiquePoint {
    /// Le littéral s’arrête avant le deuxième point; la suite est relue
    /// comme un nouveau nombre ("1.2.3" -> "1.2", ".3").
    #[default]
    Tronquer,
    /// Le deuxième point est une erreur `JetonInvalide`.
    Refuser,
}

pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Tokenize une chaîne en jetons (politique `Tronquer`, ne peut pas échouer).
///
/// - nombres: chiffres et au plus un point (ex: 12, 3.5, .5, 12. -> 12.0)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - tout autre caractère (espaces compris) est ignoré
/// - moins unaire: "-5" -> 0 - 5, "(-5)" -> ( 0 - 5 ), "3*-2" -> 3 * ( 0 - 2 )
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let resultat = tokenize_avec(s, PolitiquePoint::Tronquer);
    // Tronquer ne renvoie jamais Err
    debug_assert!(resultat.is_ok(), "tokenize (Tronquer) a échoué: {resultat:?}");
    resultat.unwrap_or_else(|e| {
        tracing::warn!(erreur = %e, "tokenize (Tronquer) a échoué");
        Vec::new()
    })
}

/// Tokenize avec une politique explicite pour le deuxième point décimal.
pub fn tokenize_avec(s: &str, politique: PolitiquePoint) -> Result<Vec<Jeton>> {
    let chars: Vec<char> = s.chars().collect();
    let mut lecteur = Lecteur::new(politique);
    let mut i: usize = 0;

    while i < chars.len() {
        i = lecteur.scan_un(&chars, i)?;
    }

    Ok(lecteur.finir())
}

/// État du balayage (local à un appel).
///
/// Moins unaire juste après un opérateur binaire : "3*-2" devient
/// "3 * ( 0 - 2 )" et non "3 * 0 - 2". Les parenthèses synthétiques se
/// ferment dès que l’opérande suivante est complète (nombre ou groupe).
struct Lecteur {
    politique: PolitiquePoint,
    out: Vec<Jeton>,
    // profondeur des parenthèses tapées
    profondeur: usize,
    // profondeur à laquelle chaque '(' synthétique doit se refermer
    fermetures: Vec<usize>,
}

impl Lecteur {
    fn new(politique: PolitiquePoint) -> Self {
        Self {
            politique,
            out: Vec::new(),
            profondeur: 0,
            fermetures: Vec::new(),
        }
    }

    /// Lit un élément à partir de `i`, renvoie la position suivante (toujours > i).
    fn scan_un(&mut self, chars: &[char], mut i: usize) -> Result<usize> {
        let c = chars[i];

        // Nombre: plus longue suite de chiffres/points, un seul point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut vu_point = false;

            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    if vu_point {
                        if self.politique == PolitiquePoint::Refuser {
                            let fautif: String = chars[start..=i].iter().collect();
                            return Err(ErreurEvaluation::jeton_invalide(fautif));
                        }
                        break;
                    }
                    vu_point = true;
                }
                i += 1;
            }

            let mut texte: String = chars[start..i].iter().collect();
            if texte.ends_with('.') {
                texte.push('0');
            }
            self.out.push(Jeton::Nombre(texte));
            self.fermer_operandes();
            return Ok(i);
        }

        match c {
            '(' => {
                self.out.push(Jeton::ParG);
                self.profondeur += 1;
            }
            ')' => {
                // une '(' synthétique ouverte dans ce groupe se ferme avant lui,
                // même sans opérande : la ')' tapée ne doit fermer qu’une '(' tapée
                self.fermer_operandes();
                self.out.push(Jeton::ParD);
                // ')' orpheline : rpn.rs la signalera
                self.profondeur = self.profondeur.saturating_sub(1);
                self.fermer_operandes();
            }
            '-' => match self.out.last() {
                None | Some(Jeton::ParG) => {
                    self.out.push(Jeton::Nombre("0".to_string()));
                    self.out.push(Jeton::Operateur('-'));
                }
                Some(Jeton::Operateur(_)) => {
                    self.out.push(Jeton::ParG);
                    self.out.push(Jeton::Nombre("0".to_string()));
                    self.out.push(Jeton::Operateur('-'));
                    self.fermetures.push(self.profondeur);
                }
                Some(_) => self.out.push(Jeton::Operateur('-')),
            },
            _ if est_operateur(c) => self.out.push(Jeton::Operateur(c)),
            // espaces et caractères inconnus
            _ => {}
        }

        Ok(i + 1)
    }

    /// Referme les '(' synthétiques ouvertes à la profondeur courante.
    fn fermer_operandes(&mut self) {
        while self.fermetures.last() == Some(&self.profondeur) {
            self.fermetures.pop();
            self.out.push(Jeton::ParD);
        }
    }

    /// Fin de chaîne : les '(' synthétiques restantes sont refermées.
    fn finir(mut self) -> Vec<Jeton> {
        for _ in 0..self.fermetures.len() {
            self.out.push(Jeton::ParD);
        }
        self.out
    }
}

/// Format utilitaire (“démarche”) : liste de jetons en texte.
pub fn format_jetons(tokens: &[Jeton]) -> String {
    tokens
        .iter()
        .map(Jeton::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
