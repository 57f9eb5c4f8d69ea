// src/noyau/valeur.rs

use std::fmt;

use super::format::{format_valeur, texte_interne};

/// Valeur numérique (f64) immuable, avec affichage canonique.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Valeur(f64);

impl Valeur {
    pub fn new(x: f64) -> Self {
        Self(x)
    }

    pub fn nombre(self) -> f64 {
        self.0
    }

    /// Texte réinjecté dans la chaîne de travail (aller-retour exact).
    pub fn texte_interne(self) -> String {
        texte_interne(self.0)
    }

    /// Même valeur au sens du noyau: NaN est égal à NaN.
    pub fn meme_que(self, autre: Valeur) -> bool {
        (self.0.is_nan() && autre.0.is_nan()) || self.0 == autre.0
    }
}

impl fmt::Display for Valeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_valeur(self.0))
    }
}
