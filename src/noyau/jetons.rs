// src/noyau/jetons.rs

use super::erreur::LexError;
use super::tables::{self, ConstanteInfo, FonctionInfo, OpInfo};

/// Jeton : nombre (lexème validé), opérateur, parenthèse, fonction, constante, virgule.
///
/// Opérateurs / fonctions / constantes pointent dans les tables statiques :
/// impossible de fabriquer un jeton au nom inconnu.
#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(String),
    BinOp(&'static OpInfo),
    UnOp(&'static OpInfo),
    LPar,
    RPar,
    Comma,
    Func(&'static FonctionInfo),
    Const(&'static ConstanteInfo),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokKind {
    Number,
    BinaryOp,
    UnaryOp,
    LeftParen,
    RightParen,
    Function,
    Constant,
    Comma,
}

impl Tok {
    pub fn kind(&self) -> TokKind {
        match self {
            Tok::Num(_) => TokKind::Number,
            Tok::BinOp(_) => TokKind::BinaryOp,
            Tok::UnOp(_) => TokKind::UnaryOp,
            Tok::LPar => TokKind::LeftParen,
            Tok::RPar => TokKind::RightParen,
            Tok::Comma => TokKind::Comma,
            Tok::Func(_) => TokKind::Function,
            Tok::Const(_) => TokKind::Constant,
        }
    }

    /// Lexème (unaires normalisés : "neg", "pos").
    pub fn text(&self) -> &str {
        match self {
            Tok::Num(s) => s,
            Tok::BinOp(o) | Tok::UnOp(o) => o.symbole,
            Tok::LPar => "(",
            Tok::RPar => ")",
            Tok::Comma => ",",
            Tok::Func(f) => f.nom,
            Tok::Const(c) => c.nom,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Tok::BinOp(o) | Tok::UnOp(o) => o.precedence,
            _ => 0,
        }
    }

    pub fn left_associative(&self) -> bool {
        match self {
            Tok::BinOp(o) | Tok::UnOp(o) => o.gauche,
            _ => true,
        }
    }

    pub fn arg_count(&self) -> usize {
        match self {
            Tok::Func(f) => f.arite,
            _ => 0,
        }
    }
}

/// Un '+' / '-' à cette place est-il unaire ?
/// Oui en tête, après n’importe quel opérateur (binaire ou unaire, '!' compris),
/// après '(' ou ','.
fn attend_operande(precedent: Option<&Tok>) -> bool {
    match precedent {
        None => true,
        Some(Tok::BinOp(_) | Tok::UnOp(_) | Tok::LPar | Tok::Comma) => true,
        Some(_) => false,
    }
}

/// Un opérateur de la table en jeton (binaire ou unaire selon sa position).
fn jeton_operateur(symbole: &str, c: char) -> Result<Tok, LexError> {
    let info = tables::operateur(symbole).ok_or(LexError::UnexpectedChar(c))?;
    Ok(if info.est_unaire() {
        Tok::UnOp(info)
    } else {
        Tok::BinOp(info)
    })
}

fn valider_nombre(lexeme: &str) -> Result<(), LexError> {
    match lexeme.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(()),
        _ => Err(LexError::InvalidNumber(lexeme.to_string())),
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (12, 3.14, .5)
/// - opérateurs + - * / % ^ ! (+/- unaires => pos/neg)
/// - parenthèses ( ) et virgule
/// - fonctions (sqrt, sin, ..., log16) et constantes (pi, e)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, LexError> {
    if s.trim().is_empty() {
        return Err(LexError::EmptyExpression);
    }

    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : chiffre, ou '.' suivi d’un chiffre ; au plus un '.'
        let chiffre_suivant = chars.get(i + 1).is_some_and(|d| d.is_ascii_digit());
        if c.is_ascii_digit() || (c == '.' && chiffre_suivant) {
            let start = i;
            let mut point = false;
            while i < chars.len() {
                match chars[i] {
                    d if d.is_ascii_digit() => i += 1,
                    '.' if !point => {
                        point = true;
                        i += 1;
                    }
                    _ => break,
                }
            }
            let lexeme: String = chars[start..i].iter().collect();
            valider_nombre(&lexeme)?;
            out.push(Tok::Num(lexeme));
            continue;
        }

        match c {
            '+' | '-' => {
                let symbole = match (c, attend_operande(out.last())) {
                    ('-', true) => "neg",
                    ('+', true) => "pos",
                    ('-', false) => "-",
                    _ => "+",
                };
                out.push(jeton_operateur(symbole, c)?);
                i += 1;
                continue;
            }
            '*' | '/' | '%' | '^' | '!' => {
                out.push(jeton_operateur(c.encode_utf8(&mut [0u8; 4]), c)?);
                i += 1;
                continue;
            }
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            ',' => {
                out.push(Tok::Comma);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants : [a-zA-Z][a-zA-Z0-9_]* => fonction, sinon constante
        if c.is_ascii_alphabetic() {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();

            if let Some(f) = tables::fonction(&word) {
                out.push(Tok::Func(f));
            } else if let Some(k) = tables::constante(&word) {
                out.push(Tok::Const(k));
            } else {
                return Err(LexError::UnknownIdentifier(word));
            }
            continue;
        }

        return Err(LexError::UnexpectedChar(c));
    }

    Ok(out)
}

/// Liste de jetons en texte (lexèmes séparés par un espace).
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(Tok::text).collect::<Vec<_>>().join(" ")
}
