//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> [nettoyage des moins -> parenthèses -> découpe | feuille] (récursif)
//!
//! Chaque étape résout la chaîne OU relance le pipeline sur une chaîne plus simple
//! (moins de moins ambigus, moins de parenthèses, ou moins d’opérateurs).
//! Aucun état partagé entre appels.

use super::decoupe::{decoupe, point_de_coupe};
use super::erreur::{ErreurAnalyse, Resultat};
use super::expr::Expr;
use super::jetons::normalise;
use super::lecture::lit_nombre;
use super::nettoyage::{nettoie_soustractions, sous_ops_valides};
use super::parentheses::{a_des_parentheses, condense_parentheses};
use super::valeur::Valeur;

/// Profondeur de récursion par défaut.
pub const PROFONDEUR_DEFAUT: usize = 1024;

/// Garde-fou : plafond absolu. Une chaîne de cette profondeur tient
/// dans une pile de 2 Mio (thread::spawn, threads de test), même en debug.
pub const PROFONDEUR_PLAFOND: usize = 1024;

/// Réglages du noyau.
///
/// `profondeur_max` borne les rappels récursifs du pipeline : chaque opérateur
/// d’une chaîne plate en coûte un, chaque groupe parenthésé successif aussi
/// (les groupes imbriqués sont condensés à plat et ne comptent pas).
/// Au-delà, on rend `ErreurAnalyse::Structure` avec le message
/// "Expression trop complexe (profondeur max N)" : une expression bien
/// parenthésée mais trop longue tombe donc dans la catégorie Structure,
/// avec son propre message, distinct de "Format de parenthèses invalide".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub profondeur_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            profondeur_max: PROFONDEUR_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn avec_profondeur(profondeur: usize) -> Self {
        Self {
            profondeur_max: profondeur.clamp(1, PROFONDEUR_PLAFOND),
        }
    }
}

/// API publique : analyse une saisie et retourne l’arbre évalué.
pub fn parse(entree: &str) -> Resultat<Expr> {
    parse_with(entree, &Reglages::default())
}

pub fn parse_with(entree: &str, reglages: &Reglages) -> Resultat<Expr> {
    let s = normalise(entree)?;
    let expr = analyse(&s, reglages, 0)?;
    log::trace!(
        "{entree:?} => {expr} = {} ({} opérateurs)",
        expr.valeur(),
        expr.nb_operateurs()
    );
    Ok(expr)
}

/// Raccourci : seulement la valeur.
pub fn evalue(entree: &str) -> Resultat<Valeur> {
    parse(entree).map(|e| e.valeur())
}

fn analyse(s: &str, reglages: &Reglages, profondeur: usize) -> Resultat<Expr> {
    if profondeur > reglages.profondeur_max {
        return Err(ErreurAnalyse::trop_profond(reglages.profondeur_max));
    }
    let suivant = profondeur + 1;

    // 1) Moins ambigus
    if !sous_ops_valides(s) {
        let nettoyee = nettoie_soustractions(s);
        log::trace!("nettoyage {s:?} -> {nettoyee:?}");
        return analyse(&nettoyee, reglages, suivant);
    }

    // 2) Parenthèses
    if a_des_parentheses(s) {
        let condensee = condense_parentheses(s, |interieur| {
            analyse(interieur, reglages, suivant).map(|e| e.valeur())
        })?;
        return analyse(&condensee, reglages, suivant);
    }

    // 3) Découpe ou feuille
    match point_de_coupe(s) {
        None => lit_nombre(s).map(Expr::Litteral),
        Some((i, op)) => decoupe(s, i, op, |moitie| analyse(moitie, reglages, suivant)),
    }
}
