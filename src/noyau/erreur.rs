// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - Structure       : parenthèses mal appariées, ou expression trop profonde (Reglages)
// - FormatNumerique : feuille qui n’est pas un nombre décimal valide
//
// Le message (Display) est affiché tel quel par l’UI après "=".

use thiserror::Error;

pub const MSG_PARENTHESES: &str = "Format de parenthèses invalide";
pub const MSG_EXPRESSION: &str = "Expression invalide";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ErreurAnalyse {
    #[error("{0}")]
    Structure(String),

    #[error("{0}")]
    FormatNumerique(String),
}

/// Résultat du noyau.
pub type Resultat<T> = Result<T, ErreurAnalyse>;

impl ErreurAnalyse {
    pub fn parentheses() -> Self {
        Self::Structure(MSG_PARENTHESES.into())
    }

    pub fn expression() -> Self {
        Self::FormatNumerique(MSG_EXPRESSION.into())
    }

    pub fn trop_profond(max: usize) -> Self {
        Self::Structure(format!("Expression trop complexe (profondeur max {max})"))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Structure(m) | Self::FormatNumerique(m) => m,
        }
    }

    pub fn est_structurelle(&self) -> bool {
        matches!(self, Self::Structure(_))
    }
}
