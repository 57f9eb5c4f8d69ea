// src/noyau/format.rs
//
// Deux textes pour un même f64:
// - format_valeur : affichage canonique (4.0 -> "4", 4.5 -> "4.5", jamais d’exposant)
// - texte_interne : texte aller-retour réinjecté par la condensation des parenthèses
//   ("2.0", "-7.0", "1e20", "inf", "NaN"), relu par lecture::lit_nombre.
//
// On garde ".0" dans le texte interne: deux valeurs condensées collées par ")("
// donnent "2.03.0" (rejeté) et non "23".

use super::expr::Expr;

/// Affichage canonique d’une valeur.
pub fn format_valeur(x: f64) -> String {
    // -0.0 s’affiche "0"
    if x == 0.0 {
        return "0".to_string();
    }

    let brut = texte_interne(x);
    if let Some(entier) = brut.strip_suffix(".0") {
        return entier.to_string();
    }

    // Debug passe en exposant hors [1e-5, 1e16); Display jamais.
    if x.is_finite() && brut.contains('e') {
        return format!("{x}");
    }

    brut
}

/// Texte aller-retour (le plus court qui relit exactement `x`).
pub fn texte_interne(x: f64) -> String {
    format!("{x:?}")
}

/// Arbre entièrement parenthésé, ex: ((10÷5)×50).
pub fn format_arbre(e: &Expr) -> String {
    match e {
        Expr::Litteral(v) => v.to_string(),
        Expr::Binaire {
            op, gauche, droite, ..
        } => format!(
            "({}{}{})",
            format_arbre(gauche),
            op.symbole(),
            format_arbre(droite)
        ),
    }
}
