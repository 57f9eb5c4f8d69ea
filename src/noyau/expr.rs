// src/noyau/expr.rs
//
// Arbre d’expression (f64).
// - Litteral : une Valeur
// - Binaire  : op + gauche + droite, valeur calculée UNE fois à la construction
//
// Invariant: valeur(Binaire) == op(valeur(gauche), valeur(droite)).
// Rien n’est muté après construction, donc l’invariant tient par construction.

use std::fmt;

use super::format::format_arbre;
use super::jetons::{SYMBOLE_ADD, SYMBOLE_DIV, SYMBOLE_MUL, SYMBOLE_SUB};
use super::valeur::Valeur;

/// Palier de précédence. A (+ −) est découpé en premier, B (× ÷) lie plus fort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    A,
    B,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Add,
        Operateur::Sub,
        Operateur::Mul,
        Operateur::Div,
    ];

    pub fn symbole(self) -> char {
        match self {
            Operateur::Add => SYMBOLE_ADD,
            Operateur::Sub => SYMBOLE_SUB,
            Operateur::Mul => SYMBOLE_MUL,
            Operateur::Div => SYMBOLE_DIV,
        }
    }

    pub fn tier(self) -> Tier {
        match self {
            Operateur::Add | Operateur::Sub => Tier::A,
            Operateur::Mul | Operateur::Div => Tier::B,
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Operateur> {
        Self::TOUS.into_iter().find(|op| op.symbole() == c)
    }

    /// Arithmétique IEEE: x÷0 donne ±inf ou NaN, pas d’erreur.
    pub fn applique(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Add => a + b,
            Operateur::Sub => a - b,
            Operateur::Mul => a * b,
            Operateur::Div => a / b,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Litteral(Valeur),
    Binaire {
        op: Operateur,
        gauche: Box<Expr>,
        droite: Box<Expr>,
        valeur: Valeur,
    },
}

impl Expr {
    pub fn litteral(x: f64) -> Expr {
        Expr::Litteral(Valeur::new(x))
    }

    /// Construit un noeud binaire et calcule sa valeur immédiatement.
    pub fn binaire(op: Operateur, gauche: Expr, droite: Expr) -> Expr {
        let valeur = Valeur::new(op.applique(gauche.valeur().nombre(), droite.valeur().nombre()));
        Expr::Binaire {
            op,
            gauche: Box::new(gauche),
            droite: Box::new(droite),
            valeur,
        }
    }

    pub fn valeur(&self) -> Valeur {
        match self {
            Expr::Litteral(v) => *v,
            Expr::Binaire { valeur, .. } => *valeur,
        }
    }

    /// Nombre d’opérateurs dans l’arbre.
    pub fn nb_operateurs(&self) -> usize {
        match self {
            Expr::Litteral(_) => 0,
            Expr::Binaire { gauche, droite, .. } => {
                1 + gauche.nb_operateurs() + droite.nb_operateurs()
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_arbre(self))
    }
}
