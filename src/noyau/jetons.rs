// src/noyau/jetons.rs
//
// Alphabet du noyau + normalisation de l’entrée clavier.
//
// Glyphes canoniques:
// - '+'  addition
// - '−'  soustraction (U+2212)
// - '×'  multiplication (U+00D7)
// - '÷'  division (U+00F7)
// - '-'  moins UNAIRE (U+002D), jamais une soustraction
//
// Le moins unaire est aussi le signe du texte d’un f64 négatif ("-7.0"):
// une valeur condensée réinjectée dans la chaîne reste donc unaire.

use super::erreur::{ErreurAnalyse, Resultat};

pub const SYMBOLE_ADD: char = '+';
pub const SYMBOLE_SUB: char = '\u{2212}';
pub const SYMBOLE_MUL: char = '\u{00D7}';
pub const SYMBOLE_DIV: char = '\u{00F7}';
pub const MOINS_UNAIRE: char = '-';

pub const PAR_OUVRANTE: char = '(';
pub const PAR_FERMANTE: char = ')';

/// Ramène une saisie clavier à l’alphabet canonique.
///
/// - espaces ignorés
/// - `*`, `x`, `X`, `⨯` (U+2A2F), `·` => `×`
/// - `/`, `:` => `÷`
/// - `-`, `–` (tiret demi-cadratin) => `−` (le nettoyage décidera si c’est unaire)
///
/// Tout autre caractère hors alphabet => FormatNumerique.
pub fn normalise(s: &str) -> Resultat<String> {
    let mut out = String::with_capacity(s.len());

    for c in s.trim().chars() {
        if c.is_whitespace() {
            continue;
        }

        let canon = match c {
            '0'..='9' | '.' | PAR_OUVRANTE | PAR_FERMANTE => c,
            SYMBOLE_ADD | SYMBOLE_SUB | SYMBOLE_MUL | SYMBOLE_DIV => c,
            '*' | 'x' | 'X' | '\u{2A2F}' | '\u{00B7}' => SYMBOLE_MUL,
            '/' | ':' => SYMBOLE_DIV,
            '-' | '\u{2013}' => SYMBOLE_SUB,
            _ => {
                log::debug!("caractère hors alphabet: {c:?}");
                return Err(ErreurAnalyse::expression());
            }
        };
        out.push(canon);
    }

    Ok(out)
}
