//! Calculatrice — analyse et évaluation d’expressions arithmétiques (f64).
//!
//! - `noyau` : pipeline récursif (moins unaire, parenthèses, précédence, feuilles)
//! - `app`   : état de la calculatrice (aperçu en direct, "=") + vue terminal

pub mod app;
pub mod noyau;

pub use noyau::{evalue, parse, parse_with, ErreurAnalyse, Expr, Reglages, Valeur};
