//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche)
//! et offrir des opérations simples (C/CLR/AC/DEL) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (le noyau ne fournit que le type `DemarcheNoyau`).
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_rpn::DemarcheNoyau;

/// Motifs retirés d’un bloc par DEL (fonctions ouvertes + constantes).
/// Les plus longs d’abord : "log16(" avant "log2(" etc.
static MOTIFS_DEL: [&str; 11] = [
    "log16(", "log10(", "log2(", "log8(", "sqrt(", "sin(", "cos(", "tan(", "cot(", "ln(", "pi",
];

/// Façon d’insérer le texte d’une touche dans l’entrée.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// Chiffres et '.' : tels quels.
    Chiffre,
    /// ')' et '!' : collés à ce qui précède.
    Collee,
    /// Opérateurs binaires et ',' : entourés d’espaces.
    Operateur,
    /// '(' et "fonction(" : espace si un opérande précède.
    Ouvrante,
    /// Constantes : idem.
    Mot,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // valeur formatée (6 décimales)
    pub erreur: String,   // message d’erreur (si l’évaluation échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: DemarcheNoyau,

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
            demarche: DemarcheNoyau::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    /// DEL : retire d’un coup les motifs utiles ("sin(", "pi", ...), sinon un caractère.
    pub fn backspace_entree(&mut self) {
        let garde = self.entree.trim_end().len();
        self.entree.truncate(garde);

        let motif = MOTIFS_DEL.iter().find(|m| self.entree.ends_with(*m));
        match motif {
            Some(m) => {
                let reste = self.entree.len() - m.len();
                self.entree.truncate(reste);
            }
            None => {
                self.entree.pop();
            }
        }

        let garde = self.entree.trim_end().len();
        self.entree.truncate(garde);
        self.focus_entree = true;
    }

    /// Insère le texte d’une touche selon son genre.
    pub fn inserer(&mut self, texte: &str, genre: Insertion) {
        let garde = self.entree.trim_end().len();
        match genre {
            Insertion::Chiffre => {}
            Insertion::Collee => self.entree.truncate(garde),
            Insertion::Operateur => {
                self.entree.truncate(garde);
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
            }
            Insertion::Ouvrante | Insertion::Mot => {
                let apres_operande = self
                    .entree
                    .trim_end()
                    .ends_with(|c: char| c.is_ascii_alphanumeric() || c == ')');
                if apres_operande && garde == self.entree.len() {
                    self.entree.push(' ');
                }
            }
        }

        self.entree.push_str(texte);
        if genre == Insertion::Operateur {
            self.entree.push(' ');
        }
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe la démarche (non fiable si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur formatée + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: DemarcheNoyau) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }
}
