//! Tests scientifiques (campagne) : identités numériques + robustesse + limites contrôlées.
//!
//! But : vérifier le noyau f64 contre des identités connues sans faire chauffer la machine.
//! - tolérance flottante explicite
//! - budget temps global
//! - tailles bornées (profondeur, longueur)

use std::time::{Duration, Instant};

use super::erreur::{ErrorKind, EvalError, StageError};
use super::evaluate;

const TOL: f64 = 1e-9;

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() <= TOL * attendu.abs().max(1.0),
        "expr={expr:?} v={v} attendu={attendu}"
    );
}

fn assert_eval_err(expr: &str, attendu: EvalError) {
    let e = evaluate(expr).expect_err(expr);
    assert_eq!(e.source, StageError::Eval(attendu), "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Trig ------------------------ */

#[test]
fn sci_pythagore_trig() {
    for x in ["0.3", "1", "2.5", "pi/7", "-4"] {
        assert_proche(&format!("sin({x})^2 + cos({x})^2"), 1.0);
    }
}

#[test]
fn sci_cot_inverse_tan() {
    assert_proche("cot(pi/3) * tan(pi/3)", 1.0);
    assert_proche("cot(1)", 1.0 / 1f64.tan());
}

#[test]
fn sci_symetries() {
    assert_proche("sin(-pi/4) + sin(pi/4)", 0.0);
    assert_proche("cos(-pi/3) - cos(pi/3)", 0.0);
}

/* ------------------------ Logarithmes ------------------------ */

#[test]
fn sci_changement_de_base() {
    assert_proche("log8(64)", 2.0);
    assert_proche("log16(4096)", 3.0);
    assert_proche("log2(8) / log2(16)", 0.75);
    assert_proche("ln(e^3)", 3.0);
    assert_proche("log10(2) + log10(5)", 1.0);
}

#[test]
fn sci_domaines_log() {
    for f in ["ln", "log10", "log2", "log8", "log16"] {
        let e = evaluate(&format!("{f}(0)")).expect_err(f);
        assert_eq!(e.kind(), ErrorKind::Eval, "f={f}");
    }
}

/* ------------------------ Puissances / racines ------------------------ */

#[test]
fn sci_racines() {
    assert_proche("sqrt(2)^2", 2.0);
    assert_proche("2^0.5 - sqrt(2)", 0.0);
    assert_proche("sqrt(0)", 0.0);
}

#[test]
fn sci_factorielle_limites() {
    assert_proche("20! / 19!", 20.0);
    assert_proche("(3!)!", 720.0);
    assert_eval_err("21!", EvalError::FactorialTooLarge);
    assert_eval_err("(0-3)!", EvalError::FactorialUndefined);
    assert_eval_err("0.5!", EvalError::FactorialUndefined);
}

#[test]
fn sci_modulo() {
    assert_proche("10 % 4", 2.0);
    assert_proche("-10 % 4", -2.0);
    assert_proche("7.5 % 2.5", 0.0);
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // pas de récursion dans le noyau : une profondeur de 2000 ne doit pas poser problème
    let n = 2000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 1.0);
    budget(t0, max);
}

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 5000].join(" + ");
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 2500.0);
    budget(t0, max);
}

#[test]
fn sci_stress_fonctions_imbriquees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = "1".to_string();
    for _ in 0..300 {
        expr = format!("sqrt({expr})");
        budget(t0, max);
    }

    assert_eq!(eval_ok(&expr), 1.0);
}
