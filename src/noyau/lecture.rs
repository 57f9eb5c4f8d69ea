// src/noyau/lecture.rs
//
// Lecture d’une feuille (sans opérateur, sans parenthèse) en Valeur.
//
// - moins unaires en tête: comptés puis retirés (nombre impair => négation)
// - reste: décimal standard ("12", "0.75", ".5", "5.")
// - textes internes issus de la condensation acceptés aussi ("1e20", "inf", "NaN");
//   la saisie utilisateur ne peut pas les produire (normalise refuse les lettres)

use super::erreur::{ErreurAnalyse, Resultat};
use super::jetons::MOINS_UNAIRE;
use super::valeur::Valeur;

pub fn lit_nombre(feuille: &str) -> Resultat<Valeur> {
    let corps = feuille.trim_start_matches(MOINS_UNAIRE);
    let negations = feuille.len() - corps.len();

    if corps.is_empty() {
        return Err(ErreurAnalyse::expression());
    }

    // "+5" passerait f64::from_str: une feuille ne commence jamais par un signe.
    if corps.starts_with(['+', '-']) {
        return Err(ErreurAnalyse::expression());
    }

    let x: f64 = corps.parse().map_err(|_| {
        log::trace!("feuille illisible: {feuille:?}");
        ErreurAnalyse::expression()
    })?;

    Ok(Valeur::new(if negations % 2 == 1 { -x } else { x }))
}
