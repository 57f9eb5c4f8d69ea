// src/noyau/nettoyage.rs
//
// Désambiguïsation du moins.
//
// Un '−' est une vraie soustraction s’il suit un chiffre ou ')'.
// Sinon c’est un moins unaire:
// - en position 0 : on insère un '0' devant ("−5" => "0−5")
// - ailleurs      : il devient le marqueur unaire '-' ("5×−3" => "5×-3")
//
// Idempotent: une chaîne nettoyée passe toujours sous_ops_valides.

use super::jetons::{MOINS_UNAIRE, PAR_FERMANTE, SYMBOLE_SUB};

fn precede_une_soustraction(c: char) -> bool {
    c.is_ascii_digit() || c == PAR_FERMANTE
}

/// Vrai si chaque '−' de la chaîne est une soustraction binaire.
pub fn sous_ops_valides(s: &str) -> bool {
    let mut prec: Option<char> = None;

    for c in s.chars() {
        if c == SYMBOLE_SUB && !prec.is_some_and(precede_une_soustraction) {
            return false;
        }
        prec = Some(c);
    }

    true
}

/// Réécrit les '−' ambigus (gauche à droite, sur les caractères d’origine).
pub fn nettoie_soustractions(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 1);
    let mut prec: Option<char> = None;

    for c in s.chars() {
        if c == SYMBOLE_SUB {
            match prec {
                None => {
                    out.push('0');
                    out.push(SYMBOLE_SUB);
                }
                Some(p) if precede_une_soustraction(p) => out.push(SYMBOLE_SUB),
                Some(_) => out.push(MOINS_UNAIRE),
            }
        } else {
            out.push(c);
        }
        prec = Some(c);
    }

    out
}
