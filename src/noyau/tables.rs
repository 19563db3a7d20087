// src/noyau/tables.rs
//
// Tables statiques : opérateurs, fonctions, constantes.
// Données `const` : aucune initialisation paresseuse, aucune écriture après compilation.

use std::f64::consts::{E, PI};

/// Position d’un opérateur par rapport à son (ses) opérande(s).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// a op b
    Infixe,
    /// op a (neg, pos)
    Prefixe,
    /// a op (!)
    Postfixe,
}

#[derive(Debug, PartialEq)]
pub struct OpInfo {
    /// Nom interne : "+", "-", ..., "neg", "pos", "!"
    pub symbole: &'static str,
    pub precedence: u8,
    pub gauche: bool, // associatif à gauche ?
    pub position: Position,
}

impl OpInfo {
    pub fn est_unaire(&self) -> bool {
        !matches!(self.position, Position::Infixe)
    }
}

#[derive(Debug, PartialEq)]
pub struct FonctionInfo {
    pub nom: &'static str,
    pub arite: usize,
}

#[derive(Debug, PartialEq)]
pub struct ConstanteInfo {
    pub nom: &'static str,
    pub valeur: f64,
}

const fn op(symbole: &'static str, precedence: u8, gauche: bool, position: Position) -> OpInfo {
    OpInfo {
        symbole,
        precedence,
        gauche,
        position,
    }
}

pub static OPERATEURS: [OpInfo; 9] = [
    op("+", 2, true, Position::Infixe),
    op("-", 2, true, Position::Infixe),
    op("*", 3, true, Position::Infixe),
    op("/", 3, true, Position::Infixe),
    op("%", 3, true, Position::Infixe),
    op("^", 5, false, Position::Infixe),
    op("neg", 4, false, Position::Prefixe),
    op("pos", 4, false, Position::Prefixe),
    op("!", 6, true, Position::Postfixe),
];

pub static FONCTIONS: [FonctionInfo; 10] = [
    FonctionInfo { nom: "sqrt", arite: 1 },
    FonctionInfo { nom: "sin", arite: 1 },
    FonctionInfo { nom: "cos", arite: 1 },
    FonctionInfo { nom: "tan", arite: 1 },
    FonctionInfo { nom: "cot", arite: 1 },
    FonctionInfo { nom: "ln", arite: 1 },
    FonctionInfo { nom: "log10", arite: 1 },
    FonctionInfo { nom: "log2", arite: 1 },
    FonctionInfo { nom: "log8", arite: 1 },
    FonctionInfo { nom: "log16", arite: 1 },
];

pub static CONSTANTES: [ConstanteInfo; 2] = [
    ConstanteInfo { nom: "pi", valeur: PI },
    ConstanteInfo { nom: "e", valeur: E },
];

/// Recherche d’un opérateur par son nom interne.
pub fn operateur(symbole: &str) -> Option<&'static OpInfo> {
    OPERATEURS.iter().find(|o| o.symbole == symbole)
}

pub fn fonction(nom: &str) -> Option<&'static FonctionInfo> {
    FONCTIONS.iter().find(|f| f.nom == nom)
}

pub fn constante(nom: &str) -> Option<&'static ConstanteInfo> {
    CONSTANTES.iter().find(|c| c.nom == nom)
}
