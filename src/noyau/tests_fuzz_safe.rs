//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions bien formées : seules des erreurs d’évaluation sont admises
//! - bruit aléatoire : jamais de panique, toujours Ok ou Err

use std::time::{Duration, Instant};

use super::erreur::ErrorKind;
use super::evaluate;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn choisir<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.pick(items.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const FONCTIONS: [&str; 10] = [
    "sqrt", "sin", "cos", "tan", "cot", "ln", "log10", "log2", "log8", "log16",
];

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => format!("{}", rng.pick(10)), // inclut 0 (division par zéro voulue)
        1 => format!("{}.{}", rng.pick(100), rng.pick(10)),
        2 => "pi".to_string(),
        3 => "e".to_string(),
        4 => format!("{}!", rng.pick(8)),
        _ => format!(".{}", rng.pick(10)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(7) {
        0 => gen_atom(rng),
        1 => {
            let op = rng.choisir(&["+", "-", "*", "/", "%", "^"]);
            let mut a = gen_expr(rng, depth - 1);
            let mut b = gen_expr(rng, depth - 1);
            // après '!' un signe redevient unaire ; sous '^' un signe sort la puissance
            if a.ends_with('!') {
                a = format!("({a})");
            }
            if b.starts_with(['-', '+']) {
                b = format!("({b})");
            }
            format!("{a} {op} {b}")
        }
        2 => format!("({})", gen_expr(rng, depth - 1)),
        3 => format!("-{}", gen_expr(rng, depth - 1)),
        4 => format!("+({})", gen_expr(rng, depth - 1)),
        5 => {
            let f = rng.choisir(&FONCTIONS);
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        _ => format!("({})!", gen_expr(rng, depth - 1)),
    }
}

fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: &[&str] = &[
        "1", "2", ".", "+", "-", "*", "/", "%", "^", "!", "(", ")", ",", " ", "pi", "e", "sin",
        "x", "$", "é",
    ];
    let n = 1 + rng.pick(16);
    (0..n).map(|_| rng.choisir(ALPHABET)).collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match evaluate(&expr) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                // syntaxe toujours correcte : seule la pile peut refuser
                assert_eq!(
                    e.kind(),
                    ErrorKind::Eval,
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let a = evaluate(&expr);
        let b = evaluate(&expr);

        match (a, b) {
            (Ok(x), Ok(y)) => assert_eq!(x.to_bits(), y.to_bits(), "expr={expr:?}"),
            (Err(x), Err(y)) => assert_eq!(x, y, "expr={expr:?}"),
            (a, b) => panic!("résultats divergents: expr={expr:?} a={a:?} b={b:?}"),
        }
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..1000 {
        budget(t0, max);

        let expr = gen_bruit(&mut rng);
        if let Err(e) = evaluate(&expr) {
            // le message embarque toujours l’expression d’origine
            assert!(e.to_string().contains(&format!("'{expr}'")), "expr={expr:?}");
        }
    }
}
