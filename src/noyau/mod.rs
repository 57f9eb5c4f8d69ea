//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - jetons.rs      : alphabet canonique + normalisation clavier
//! - nettoyage.rs   : moins unaire vs soustraction
//! - parentheses.rs : multiplication implicite + condensation des groupes
//! - decoupe.rs     : découpe par précédence (palier A puis B, plus à droite)
//! - lecture.rs     : feuille -> Valeur
//! - expr.rs        : arbre (Litteral | Binaire), valeur calculée à la construction
//! - valeur.rs      : Valeur (f64) + affichage canonique
//! - format.rs      : textes d’affichage / texte interne / arbre
//! - erreur.rs      : Structure | FormatNumerique
//! - eval.rs        : pipeline complet (récursif)

pub mod decoupe;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod nettoyage;
pub mod parentheses;
pub mod valeur;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurAnalyse, Resultat};
pub use eval::{evalue, parse, parse_with, Reglages};
pub use expr::{Expr, Operateur, Tier};
pub use valeur::Valeur;
