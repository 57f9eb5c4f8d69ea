// src/noyau/decoupe.rs
//
// Découpe par précédence d’une chaîne plate (sans parenthèses, moins désambiguïsés).
//
// Point de coupe = opérateur le plus À DROITE du palier le plus faible présent:
// - palier A (+ −) s’il y en a un,
// - sinon palier B (× ÷),
// - sinon feuille.
// Couper à droite donne l’associativité à gauche: a−b−c = (a−b)−c.

use super::erreur::Resultat;
use super::expr::{Expr, Operateur, Tier};

/// (indice en octets, opérateur) du point de coupe, ou None pour une feuille.
pub fn point_de_coupe(s: &str) -> Option<(usize, Operateur)> {
    [Tier::A, Tier::B].into_iter().find_map(|tier| {
        s.char_indices().rev().find_map(|(i, c)| {
            Operateur::depuis_symbole(c)
                .filter(|op| op.tier() == tier)
                .map(|op| (i, op))
        })
    })
}

/// Coupe `s` en `op` à l’indice `i` et construit le noeud binaire.
///
/// `analyse` est le rappel récursif vers le pipeline pour chaque moitié.
pub fn decoupe<F>(s: &str, i: usize, op: Operateur, mut analyse: F) -> Resultat<Expr>
where
    F: FnMut(&str) -> Resultat<Expr>,
{
    let gauche = &s[..i];
    let droite = &s[i + op.symbole().len_utf8()..];

    log::trace!("coupe {s:?} en {} : {gauche:?} | {droite:?}", op.symbole());

    let g = analyse(gauche)?;
    let d = analyse(droite)?;
    Ok(Expr::binaire(op, g, d))
}
