// src/app/vue.rs
//
// Vue terminal : une ligne de saisie = une suite de touches.
//
// Touches:
// - "AC" (ligne entière) : remise à zéro
// - '<'                  : ⌫ (retour arrière)
// - '='                  : évaluer
// - espaces              : ignorés
// - tout autre caractère : ajouté à l’entrée (aperçu rafraîchi à chaque touche)
//
// Le rendu : l’entrée, puis la ligne d’aperçu si elle n’est pas vide.

use super::etat::AppCalc;

pub const TOUCHE_RESET: &str = "AC";
pub const TOUCHE_EFFACE: char = '<';
pub const TOUCHE_EGAL: char = '=';

/// Applique une ligne de touches à l’état et retourne le rendu.
pub fn traite_ligne(app: &mut AppCalc, ligne: &str) -> String {
    let ligne = ligne.trim();

    if ligne.eq_ignore_ascii_case(TOUCHE_RESET) {
        app.reset_total();
        return rendu(app);
    }

    for c in ligne.chars() {
        match c {
            TOUCHE_EFFACE => app.efface_dernier(),
            // l’erreur éventuelle est déjà dans l’aperçu
            TOUCHE_EGAL => {
                let _ = app.evalue();
            }
            c if c.is_whitespace() => {}
            c => {
                app.ajoute(c.encode_utf8(&mut [0; 4]));
                log::debug!("{:?} | {:?}", app.entree, app.apercu);
            }
        }
    }

    rendu(app)
}

/// Texte affiché : entrée + aperçu (s’il y en a un).
pub fn rendu(app: &AppCalc) -> String {
    if app.apercu.is_empty() {
        app.entree.clone()
    } else {
        format!("{}\n  {}", app.entree, app.apercu)
    }
}
