//! Tests de propriétés : déterminisme + aller-retour RPN + accord avec un calcul de référence.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global

use std::time::{Duration, Instant};

use super::erreur::ErreurEvaluation;
use super::eval::evaluer_rpn;
use super::evaluer;
use super::jetons::tokenize;
use super::rpn::vers_rpn;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Chaînes plates (sans parenthèses) ------------------------ */

/// Littéral non nul (texte, valeur) : jamais de diviseur nul.
fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    let entier = 1 + rng.pick(9);
    match rng.pick(3) {
        0 => (format!("{entier}.5"), entier as f64 + 0.5),
        1 => (format!("{entier}."), entier as f64),
        _ => (format!("{entier}"), entier as f64),
    }
}

/// Facteur éventuellement négatif après un opérateur : "-3" vaut 0 - 3.
fn gen_facteur(rng: &mut Rng, apres_operateur: bool) -> (String, f64) {
    let (txt, v) = gen_nombre(rng);
    if apres_operateur && rng.pick(4) == 0 {
        (format!("-{txt}"), 0.0 - v)
    } else {
        (txt, v)
    }
}

/// Expression plate + valeur de référence calculée terme par terme
/// (* et / d’abord, puis + et -, de gauche à droite).
fn gen_plate(rng: &mut Rng, n: usize) -> (String, f64) {
    let mut txt = String::new();

    // moins unaire en tête : "-a…" vaut "0 - a…"
    let mut total = 0.0;
    let mut signe = '+';
    if rng.pick(4) == 0 {
        txt.push('-');
        signe = '-';
    }

    let (f, v) = gen_facteur(rng, false);
    txt.push_str(&f);
    let mut terme = v;

    for _ in 1..n {
        let op = ['+', '-', '*', '/'][rng.pick(4) as usize];
        let (f, v) = gen_facteur(rng, true);
        txt.push(op);
        txt.push_str(&f);

        match op {
            '*' => terme *= v,
            '/' => terme /= v,
            _ => {
                total = if signe == '+' { total + terme } else { total - terme };
                signe = op;
                terme = v;
            }
        }
    }

    // le 0 initial de total joue le rôle du 0 implicite du moins unaire
    if signe == '+' {
        total += terme;
    } else {
        total -= terme;
    }

    (txt, total)
}

#[test]
fn prop_accord_avec_reference_plate() {
    let start = Instant::now();
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2_000 {
        budget(start, Duration::from_secs(5));
        let n = 1 + rng.pick(8) as usize;
        let (txt, attendu) = gen_plate(&mut rng, n);
        let obtenu = evaluer(&txt).unwrap_or_else(|e| panic!("expr={txt:?} err={e}"));
        assert_eq!(obtenu, attendu, "expr={txt:?}");
    }
}

/* ------------------------ Arbres parenthésés ------------------------ */

fn gen_arbre(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_nombre(rng).0;
    }

    let a = gen_arbre(rng, depth - 1);
    let b = gen_arbre(rng, depth - 1);
    let op = ['+', '-', '*', '/'][rng.pick(4) as usize];

    match rng.pick(3) {
        0 => format!("({a}{op}{b})"),
        1 => format!("-({a}){op}{b}"),
        _ => format!("{a}{op}({b})"),
    }
}

#[test]
fn prop_aller_retour_rpn() {
    let start = Instant::now();
    let mut rng = Rng::new(42);

    for _ in 0..1_000 {
        budget(start, Duration::from_secs(5));
        let txt = gen_arbre(&mut rng, 4);

        let rpn = vers_rpn(&tokenize(&txt)).unwrap_or_else(|e| panic!("expr={txt:?} err={e}"));
        match evaluer_rpn(&rpn) {
            Ok(_) => {}
            // un sous-arbre peut valoir exactement 0 ("(1-1)")
            Err(ErreurEvaluation::DivisionParZero) => {}
            Err(e) => panic!("expr={txt:?} rpn réduite avec erreur: {e}"),
        }
    }
}

/* ------------------------ Chaînes quelconques ------------------------ */

fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '7', '9', '.', '+', '-', '*', '/', '(', ')', ' ', 'x',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

#[test]
fn prop_idempotence_sur_bruit() {
    let start = Instant::now();
    let mut rng = Rng::new(7);

    for _ in 0..3_000 {
        budget(start, Duration::from_secs(5));
        let len = rng.pick(24) as usize;
        let txt = gen_bruit(&mut rng, len);

        let r1 = evaluer(&txt);
        let r2 = evaluer(&txt);
        assert_eq!(r1, r2, "expr={txt:?}");

        if let Ok(v) = r1 {
            assert!(v.is_finite(), "expr={txt:?} valeur non finie {v}");
        }
    }
}

#[test]
fn prop_parentheses_superflues_neutres() {
    let mut rng = Rng::new(99);

    for _ in 0..500 {
        let n = 1 + rng.pick(6) as usize;
        let (txt, _) = gen_plate(&mut rng, n);
        let entoure = if rng.coin() {
            format!("({txt})")
        } else {
            format!("(({txt}))")
        };
        assert_eq!(evaluer(&txt), evaluer(&entoure), "expr={txt:?}");
    }
}

/// Les '(' et ')' de la chaîne sont exactement les parenthèses tapées.
fn parentheses_tapees_equilibrees(s: &str) -> bool {
    let mut ouvertes: i64 = 0;
    for c in s.chars() {
        match c {
            '(' => ouvertes += 1,
            ')' => {
                ouvertes -= 1;
                if ouvertes < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    ouvertes == 0
}

#[test]
fn prop_desequilibre_jamais_repare() {
    let start = Instant::now();
    let mut rng = Rng::new(2024);
    let mut desequilibres = 0;

    for _ in 0..3_000 {
        budget(start, Duration::from_secs(5));
        let len = 1 + rng.pick(16) as usize;
        let txt = gen_bruit(&mut rng, len);

        if !parentheses_tapees_equilibrees(&txt) {
            desequilibres += 1;
            assert!(
                evaluer(&txt).is_err(),
                "expr={txt:?} déséquilibrée mais évaluée: {:?}",
                evaluer(&txt)
            );
        }
    }

    assert!(desequilibres > 100, "générateur trop pauvre: {desequilibres}");
}

#[test]
fn prop_moins_unaire_sans_operande_jamais_repare() {
    let mut rng = Rng::new(5);

    for _ in 0..500 {
        let (a, _) = gen_nombre(&mut rng);
        let (b, _) = gen_nombre(&mut rng);
        let op = ['+', '-', '*', '/'][rng.pick(4) as usize];
        // "(a op -)b" : le moins n’a pas d’opérande avant ')'
        let txt = format!("({a}{op}-){b}");
        assert!(evaluer(&txt).is_err(), "expr={txt:?}");
    }
}
