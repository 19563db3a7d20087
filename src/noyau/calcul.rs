// src/noyau/calcul.rs
//
// Évaluation d’une RPN sur une pile de f64.

use num_traits::ToPrimitive;

use super::erreur::EvalError;
use super::jetons::Tok;
use super::tables::{FonctionInfo, OpInfo};

/// Plus grand n tel que n! reste exact et fini en f64 (garde-fou).
const FACTORIELLE_MAX: f64 = 20.0;

fn depile(st: &mut Vec<f64>, nom: &str) -> Result<f64, EvalError> {
    st.pop()
        .ok_or_else(|| EvalError::InsufficientOperands(nom.to_string()))
}

fn binaire(op: &OpInfo, a: f64, b: f64) -> Result<f64, EvalError> {
    match op.symbole {
        "+" => Ok(a + b),
        "-" => Ok(a - b),
        "*" => Ok(a * b),
        "/" => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a / b)
        }
        "%" => {
            if b == 0.0 {
                return Err(EvalError::ModuloByZero);
            }
            // reste flottant (signe du dividende), comme fmod
            Ok(a % b)
        }
        // NaN / inf laissés tels quels (IEEE)
        "^" => Ok(a.powf(b)),
        _ => unreachable!("opérateur binaire hors table: {}", op.symbole),
    }
}

fn factorielle(v: f64) -> Result<f64, EvalError> {
    if v < 0.0 || v != v.floor() {
        return Err(EvalError::FactorialUndefined);
    }
    if v > FACTORIELLE_MAX {
        return Err(EvalError::FactorialTooLarge);
    }
    let n = v.to_u32().ok_or(EvalError::FactorialUndefined)?;
    Ok((1..=n).fold(1.0, |acc, k| acc * f64::from(k)))
}

fn unaire(op: &OpInfo, v: f64) -> Result<f64, EvalError> {
    match op.symbole {
        "neg" => Ok(-v),
        "pos" => Ok(v),
        "!" => factorielle(v),
        _ => unreachable!("opérateur unaire hors table: {}", op.symbole),
    }
}

fn log_positif(nom: &'static str, x: f64, f: impl Fn(f64) -> f64) -> Result<f64, EvalError> {
    if x <= 0.0 {
        return Err(EvalError::Domain {
            fonction: nom,
            detail: "non-positive argument",
        });
    }
    Ok(f(x))
}

fn fonction(f: &FonctionInfo, x: f64) -> Result<f64, EvalError> {
    match f.nom {
        "sqrt" => {
            if x < 0.0 {
                return Err(EvalError::Domain {
                    fonction: "sqrt",
                    detail: "negative argument",
                });
            }
            Ok(x.sqrt())
        }
        "sin" => Ok(x.sin()),
        "cos" => Ok(x.cos()),
        "tan" => Ok(x.tan()),
        "cot" => {
            let t = x.tan();
            if t == 0.0 {
                return Err(EvalError::Domain {
                    fonction: "cot",
                    detail: "tangent is zero",
                });
            }
            Ok(1.0 / t)
        }
        "ln" => log_positif("ln", x, f64::ln),
        "log10" => log_positif("log10", x, f64::log10),
        "log2" => log_positif("log2", x, f64::log2),
        // changement de base
        "log8" => log_positif("log8", x, |v| v.ln() / 8f64.ln()),
        "log16" => log_positif("log16", x, |v| v.ln() / 16f64.ln()),
        _ => unreachable!("fonction hors table: {}", f.nom),
    }
}

/// Évalue une RPN (sortie de `to_postfix`).
///
/// Une seule passe, une pile de f64 : la pile finale doit contenir exactement une valeur.
pub fn eval_postfix(rpn: &[Tok]) -> Result<f64, EvalError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(s) => {
                let v = s
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(s.clone()))?;
                st.push(v);
            }

            Tok::Const(k) => st.push(k.valeur),

            Tok::BinOp(op) => {
                if st.len() < 2 {
                    return Err(EvalError::InsufficientOperands(op.symbole.to_string()));
                }
                let b = depile(&mut st, op.symbole)?;
                let a = depile(&mut st, op.symbole)?;
                st.push(binaire(op, a, b)?);
            }

            Tok::UnOp(op) => {
                let v = depile(&mut st, op.symbole)?;
                st.push(unaire(op, v)?);
            }

            Tok::Func(f) => {
                if st.len() < f.arite {
                    return Err(EvalError::InsufficientOperands(f.nom.to_string()));
                }
                let x = depile(&mut st, f.nom)?;
                st.push(fonction(f, x)?);
            }

            // une RPN bien construite n’en contient pas
            Tok::LPar | Tok::RPar | Tok::Comma => {
                return Err(EvalError::UnexpectedToken(tok.text().to_string()));
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::InvalidResult(st.len())),
    }
}
