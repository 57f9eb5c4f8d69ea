// src/main.rs
//
// Calculatrice — point d’entrée terminal
// --------------------------------------
// Chaque ligne lue sur stdin est une suite de touches (voir app/vue.rs).
// Journaux : RUST_LOG=debug (touches + aperçu), RUST_LOG=trace (pipeline du noyau).

use std::io::{self, BufRead, Write};

use calculette::app::{vue, AppCalc};

fn main() -> io::Result<()> {
    env_logger::init();

    let mut app = AppCalc::default();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for ligne in stdin.lock().lines() {
        let ligne = ligne?;
        writeln!(out, "{}", vue::traite_ligne(&mut app, &ligne))?;
        out.flush()?;
    }

    Ok(())
}
