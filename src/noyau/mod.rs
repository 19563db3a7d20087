//! Noyau de calcul f64
//!
//! Organisation interne :
//! - tables.rs  : opérateurs, fonctions, constantes (données `const`)
//! - jetons.rs  : tokenisation
//! - rpn.rs     : shunting-yard (infixe -> postfix)
//! - calcul.rs  : évaluation sur pile
//! - erreur.rs  : erreurs par étage + enveloppe
//! - format.rs  : affichage du résultat
//! - eval.rs    : pipeline complet

pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod tables;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{CalcError, ErrorKind, EvalError, LexError, StageError, SyntaxError};
pub use eval::{evaluate, evaluate_detaille, DemarcheNoyau};
pub use format::format_resultat;
