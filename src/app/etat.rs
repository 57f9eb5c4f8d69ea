//! src/app/etat.rs
//!
//! État de la calculatrice (sans vue).
//!
//! Rôle : contenir l’entrée et la ligne d’aperçu, et offrir les actions des touches
//! (caractère, ⌫, AC, =) sans logique d’affichage.
//!
//! Contrats :
//! - Aperçu en direct après chaque édition : une erreur donne un aperçu VIDE.
//! - "=" : succès => l’entrée devient le résultat affiché, aperçu vidé;
//!   échec => l’entrée est gardée, l’aperçu montre le message d’erreur.

use crate::noyau::{parse_with, ErreurAnalyse, Reglages, Valeur};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sortie ---
    pub apercu: String, // réponse en cours, ou message d’erreur après "="

    // --- paramètres ---
    pub reglages: Reglages,
}

impl AppCalc {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    /* ------------------------ Actions “touches” ------------------------ */

    /// Touche caractère (chiffre, '.', opérateur, parenthèse).
    pub fn ajoute(&mut self, touche: &str) {
        self.entree.push_str(touche);
        self.rafraichit_apercu();
    }

    /// ⌫ : retire le dernier caractère (rien si l’entrée est vide).
    pub fn efface_dernier(&mut self) {
        self.entree.pop();
        self.rafraichit_apercu();
    }

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.apercu.clear();
    }

    /// "=" : évalue l’entrée.
    pub fn evalue(&mut self) -> Result<Valeur, ErreurAnalyse> {
        match parse_with(&self.entree, &self.reglages) {
            Ok(expr) => {
                let v = expr.valeur();
                log::debug!("= {:?} -> {v}", self.entree);
                self.entree = v.to_string();
                self.apercu.clear();
                Ok(v)
            }
            Err(e) => {
                log::debug!("= {:?} -> erreur: {e}", self.entree);
                self.apercu = e.message().to_string();
                Err(e)
            }
        }
    }

    /// Aperçu en direct : les erreurs sont avalées (aperçu vide).
    fn rafraichit_apercu(&mut self) {
        self.apercu = match parse_with(&self.entree, &self.reglages) {
            Ok(expr) => expr.valeur().to_string(),
            Err(e) => {
                log::trace!("aperçu indisponible pour {:?}: {e}", self.entree);
                String::new()
            }
        };
    }
}
