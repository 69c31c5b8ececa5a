// src/noyau/format.rs

/// Nombre maximal de décimales affichées.
pub const DECIMALES_MAX: usize = 8;

/// Formate un résultat pour l'affichage et l'historique.
///
/// - au plus [`DECIMALES_MAX`] décimales, zéros finaux retirés
///   ("14.00000000" -> "14", "0.30000000" -> "0.3")
/// - valeurs spéciales rendues telles quelles : "NaN", "∞", "-∞"
///
/// Un résultat fini reformaté puis re-parsé comme littéral retombe sur la
/// même valeur à la précision du formateur près.
pub fn formater_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v.is_sign_positive() { "∞" } else { "-∞" }.to_string();
    }

    let brut = format!("{v:.p$}", p = DECIMALES_MAX);
    brut.trim_end_matches('0').trim_end_matches('.').to_string()
}
