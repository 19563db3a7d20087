// src/noyau/format.rs
//
// Affichage du résultat numérique.

/// Nombre de décimales affichées (convention de la commande `calculate`).
pub const DECIMALES: usize = 6;

/// Résultat en virgule fixe, 6 décimales : 7 -> "7.000000".
/// NaN / inf gardent leur forme Rust ("NaN", "inf", "-inf").
pub fn format_resultat(v: f64) -> String {
    // -0.0 s’affiche "0.000000"
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{:.*}", DECIMALES, v)
}
