// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> RPN (postfix)
//
// Règles:
// - Num / Const : sortie directe
// - Func : sur la pile, sortie à sa parenthèse fermante
// - Opérateur entrant : dépile selon précédence/associativité
// - ',' : dépile jusqu’à '(' (séparateur d’arguments)
// - ')' : dépile jusqu’à '(' puis sort la fonction éventuelle
//
// NOTE:
// - Unaires préfixes (neg, pos) : même règle que les binaires ("2 ^ -1" => "2 ^ 1 neg").
// - Un '!' postfixe s’applique à l’opérande complet, signes en attente compris :
//   "-1!" => "1 neg !".

use super::erreur::SyntaxError;
use super::jetons::Tok;
use super::tables::{OpInfo, Position};

/// Faut-il sortir `sommet` avant d’empiler `entrant` ?
fn doit_depiler(entrant: &OpInfo, sommet: &OpInfo) -> bool {
    if entrant.position == Position::Postfixe && sommet.position == Position::Prefixe {
        return true;
    }
    if entrant.gauche {
        entrant.precedence <= sommet.precedence
    } else {
        entrant.precedence < sommet.precedence
    }
}

/// Shunting-yard complet.
/// Renvoie aussi le nombre de fonctions sorties par le filet de sécurité
/// (opérateur entrant alors qu’une fonction est au sommet).
fn shunting_yard(tokens: &[Tok]) -> Result<(Vec<Tok>, usize), SyntaxError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();
    let mut filets: usize = 0;

    for tok in tokens {
        match tok {
            Tok::Num(_) | Tok::Const(_) => out.push(tok.clone()),

            Tok::Func(_) | Tok::LPar => ops.push(tok.clone()),

            Tok::BinOp(entrant) | Tok::UnOp(entrant) => {
                while let Some(top) = ops.last() {
                    let doit_pop = match top {
                        // filet de sécurité : normalement sortie à ')'
                        Tok::Func(_) => {
                            filets += 1;
                            true
                        }
                        Tok::BinOp(sommet) | Tok::UnOp(sommet) => doit_depiler(entrant, sommet),
                        _ => false,
                    };
                    if !doit_pop {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }
                ops.push(tok.clone());
            }

            Tok::Comma => {
                while !matches!(ops.last(), Some(Tok::LPar) | None) {
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }
                if ops.is_empty() {
                    return Err(SyntaxError::MisplacedComma);
                }
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(t) => out.push(t),
                        None => return Err(SyntaxError::MissingLeftParen),
                    }
                }

                // si une fonction est au sommet, on la sort aussi
                if matches!(ops.last(), Some(Tok::Func(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(SyntaxError::MissingRightParen);
        }
        out.push(op);
    }

    if out.is_empty() {
        return Err(SyntaxError::EmptyExpression);
    }

    Ok((out, filets))
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: sin ( pi / 2 ) + 1
///   rpn:    pi 2 / sin 1 +
pub fn to_postfix(tokens: &[Tok]) -> Result<Vec<Tok>, SyntaxError> {
    shunting_yard(tokens).map(|(out, _)| out)
}
