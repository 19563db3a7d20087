//! Calculatrice RPN — noyau f64
//!
//! Évalue une expression infixe (opérateurs, fonctions, constantes) en `f64` :
//! jetons -> RPN (shunting-yard) -> pile.
//!
//! ```
//! use calculatrice_rpn::{evaluate, format_resultat};
//!
//! let v = evaluate("2 ^ 3 ^ 2").unwrap();
//! assert_eq!(format_resultat(v), "512.000000");
//! ```

pub mod noyau;

pub use noyau::{
    evaluate, evaluate_detaille, format_resultat, CalcError, DemarcheNoyau, ErrorKind,
    EvalError, LexError, StageError, SyntaxError,
};
