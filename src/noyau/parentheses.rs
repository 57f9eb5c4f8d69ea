// src/noyau/parentheses.rs
//
// Réduction des parenthèses.
//
// 1) Multiplication implicite: chiffre suivi de '(' ou ')' suivi d’un chiffre => '×' inséré.
//    ")(" n’est PAS touché ici.
// 2) Condensation: pile des indices de '(' à partir de la première ouvrante.
//    Sur ')', on dépile, on évalue l’intérieur (rappel récursif du pipeline) et on remplace
//    tout le span "(...)" par le texte interne de la valeur. On s’arrête quand la pile est vide;
//    l’appelant relance le pipeline sur la chaîne obtenue (groupes suivants).
//
// Indices en octets: '(' et ')' sont ASCII, jamais confondus avec un octet de '×' ou '−'.

use super::erreur::{ErreurAnalyse, Resultat};
use super::jetons::{PAR_FERMANTE, PAR_OUVRANTE, SYMBOLE_MUL};
use super::valeur::Valeur;

/// Vrai si la chaîne contient au moins une parenthèse.
pub fn a_des_parentheses(s: &str) -> bool {
    s.contains([PAR_OUVRANTE, PAR_FERMANTE])
}

pub fn insere_multiplications(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut it = s.chars().peekable();

    while let Some(c) = it.next() {
        out.push(c);
        if let Some(&suiv) = it.peek() {
            let chiffre_puis_ouvrante = c.is_ascii_digit() && suiv == PAR_OUVRANTE;
            let fermante_puis_chiffre = c == PAR_FERMANTE && suiv.is_ascii_digit();
            if chiffre_puis_ouvrante || fermante_puis_chiffre {
                out.push(SYMBOLE_MUL);
            }
        }
    }

    out
}

/// Condense le premier groupe parenthésé de plus haut niveau (et tous ses sous-groupes).
///
/// `evalue` est le rappel vers le pipeline complet pour un intérieur de parenthèses.
pub fn condense_parentheses<F>(s: &str, mut evalue: F) -> Resultat<String>
where
    F: FnMut(&str) -> Resultat<Valeur>,
{
    let mut travail = insere_multiplications(s);

    let Some(debut) = travail.find(PAR_OUVRANTE) else {
        // ')' sans aucune '('
        return Err(ErreurAnalyse::parentheses());
    };
    if travail[..debut].contains(PAR_FERMANTE) {
        // ')' fermante avant toute ouvrante: pile vide
        return Err(ErreurAnalyse::parentheses());
    }

    let mut pile: Vec<usize> = vec![debut];
    let mut idx = debut;

    while !pile.is_empty() {
        idx += 1;
        let octet = *travail
            .as_bytes()
            .get(idx)
            .ok_or_else(ErreurAnalyse::parentheses)?;

        match octet {
            b')' => {
                let ouvrante = pile.pop().ok_or_else(ErreurAnalyse::parentheses)?;
                let valeur = evalue(&travail[ouvrante + 1..idx])?;
                let texte = valeur.texte_interne();

                log::trace!("condense {:?} -> {texte}", &travail[ouvrante..=idx]);

                travail.replace_range(ouvrante..=idx, &texte);
                // idx pointe sur le dernier caractère du texte inséré
                idx = ouvrante + texte.len() - 1;
            }
            b'(' => pile.push(idx),
            _ => {}
        }
    }

    Ok(travail)
}
