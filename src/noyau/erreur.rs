// src/noyau/erreur.rs
//
// Erreurs du noyau : une par étage (jetons / RPN / pile), puis l’enveloppe
// qui porte le texte d’origine.

use thiserror::Error;

/// Étage 1 : lecture des jetons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("expression is empty or contains only whitespace")]
    EmptyExpression,

    #[error("unexpected character in expression: '{0}'")]
    UnexpectedChar(char),

    #[error("invalid number format: '{0}'")]
    InvalidNumber(String),

    #[error("unknown function or constant: '{0}'")]
    UnknownIdentifier(String),
}

/// Étage 2 : réordonnancement (shunting-yard).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("mismatched parentheses: missing '('")]
    MissingLeftParen,

    #[error("mismatched parentheses: missing ')'")]
    MissingRightParen,

    #[error("misplaced comma or missing '(' for function arguments")]
    MisplacedComma,

    #[error("expression resulted in empty postfix (e.g. empty parentheses)")]
    EmptyExpression,
}

/// Étage 3 : évaluation sur pile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("insufficient operands for '{0}'")]
    InsufficientOperands(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    #[error("{fonction} undefined: {detail}")]
    Domain {
        fonction: &'static str,
        detail: &'static str,
    },

    #[error("factorial undefined for non-integer or negative numbers")]
    FactorialUndefined,

    #[error("factorial input too large (max 20)")]
    FactorialTooLarge,

    #[error("unexpected token in postfix sequence: '{0}'")]
    UnexpectedToken(String),

    #[error("invalid number during evaluation: '{0}'")]
    InvalidNumber(String),

    #[error("invalid result: {0} values left on the stack, expected 1")]
    InvalidResult(usize),
}

/// Erreur d’un étage, sans le contexte.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Genre d’erreur (pratique pour les tests et l’UI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
    Eval,
}

/// Erreur publique : l’étage fautif + l’expression d’origine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Calculation error processing '{expression}': {source}")]
pub struct CalcError {
    pub expression: String,
    #[source]
    pub source: StageError,
}

impl CalcError {
    pub fn new(expression: &str, source: impl Into<StageError>) -> Self {
        Self {
            expression: expression.to_string(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.source {
            StageError::Lex(_) => ErrorKind::Lex,
            StageError::Syntax(_) => ErrorKind::Syntax,
            StageError::Eval(_) => ErrorKind::Eval,
        }
    }
}
