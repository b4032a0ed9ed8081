//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, décimales, démarche)
//! et offrir des opérations simples (C/AC/DEL, insertion) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - L’expression courante vit ici et est passée au noyau par référence.

/// Décimales affichées par défaut (arrondi d’affichage seulement).
const DECIMALES_DEFAUT: usize = 10;

/// Au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub(crate) const DECIMALES_MAX: usize = 15;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // valeur arrondie pour l’affichage
    pub erreur: String,   // message d’erreur (si l’évaluation échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub decimales: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            decimales: DECIMALES_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultat + décimales par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.decimales = DECIMALES_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher au résultat).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Efface résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère (et les espaces finaux).
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        self.focus_entree = true;
    }

    /// Insère le symbole d’un bouton.
    ///
    /// Un '.' est ignoré si le nombre en cours de saisie en a déjà un.
    pub fn inserer(&mut self, symbole: char) {
        if symbole == '.' && self.nombre_courant_a_un_point() {
            self.focus_entree = true;
            return;
        }
        self.entree.push(symbole);
        self.focus_entree = true;
    }

    /// Vrai si le littéral en fin d’entrée contient déjà un point.
    /// On remonte seulement jusqu’au premier caractère qui n’est ni chiffre ni point.
    pub fn nombre_courant_a_un_point(&self) -> bool {
        self.entree
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .any(|c| c == '.')
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE l’entrée pour que l’utilisateur puisse la corriger.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.resultat.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat ; il remplace l’entrée pour enchaîner.
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.entree = self.resultat.clone();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : limite les décimales.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
        self.focus_entree = true;
    }
}
