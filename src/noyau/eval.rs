//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> to_postfix -> eval_postfix
//!
//! Toute erreur d’étage est enveloppée dans `CalcError` avec le texte d’origine.
//! Pas de résultat partiel : le premier échec arrête tout.

use super::calcul::eval_postfix;
use super::erreur::CalcError;
use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::to_postfix;

/// Démarche d’une évaluation réussie : jetons et RPN en texte.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

struct Pipeline {
    jetons: Vec<Tok>,
    rpn: Vec<Tok>,
    valeur: f64,
}

fn pipeline(expression: &str) -> Result<Pipeline, CalcError> {
    // 1) Jetons (refuse aussi l’entrée vide)
    let jetons = tokenize(expression).map_err(|e| CalcError::new(expression, e))?;

    // 2) RPN
    let rpn = to_postfix(&jetons).map_err(|e| CalcError::new(expression, e))?;

    // 3) Pile
    let valeur = eval_postfix(&rpn).map_err(|e| CalcError::new(expression, e))?;

    Ok(Pipeline {
        jetons,
        rpn,
        valeur,
    })
}

/// API publique : évalue une expression infixe en f64.
///
/// ```
/// use calculatrice_rpn::evaluate;
///
/// assert_eq!(evaluate("3 + 4 * (2 - 1)").unwrap(), 7.0);
/// assert!(evaluate("1/0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    pipeline(expression).map(|p| p.valeur)
}

/// Comme `evaluate`, avec la démarche (jetons + RPN) pour affichage.
pub fn evaluate_detaille(expression: &str) -> Result<(f64, DemarcheNoyau), CalcError> {
    let p = pipeline(expression)?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&p.jetons),
        rpn: format_tokens(&p.rpn),
    };

    Ok((p.valeur, d))
}
