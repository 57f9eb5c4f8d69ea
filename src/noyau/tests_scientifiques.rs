//! Tests scientifiques (campagne) : cas de référence + invariants.
//!
//! - cas historiques de la calculatrice (addition, négatifs, parenthèses, produit implicite)
//! - propriétés: précédence, associativité, emballage "(E)", idempotence de l’affichage
//! - erreurs: structure vs format numérique
//! - division par zéro: IEEE, pas une erreur

use pretty_assertions::assert_eq;

use super::{parse, ErreurAnalyse};

fn val(expr: &str) -> f64 {
    parse(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .valeur()
        .nombre()
}

fn aff(expr: &str) -> String {
    parse(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .valeur()
        .to_string()
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = val(expr);
    assert!((v - attendu).abs() < 1e-9, "expr={expr:?} v={v} attendu={attendu}");
}

fn assert_structure(expr: &str) {
    match parse(expr) {
        Err(e @ ErreurAnalyse::Structure(_)) => assert_eq!(e, ErreurAnalyse::parentheses()),
        autre => panic!("expr={expr:?}: attendu Structure, obtenu {autre:?}"),
    }
}

fn assert_format(expr: &str) {
    match parse(expr) {
        Err(ErreurAnalyse::FormatNumerique(_)) => {}
        autre => panic!("expr={expr:?}: attendu FormatNumerique, obtenu {autre:?}"),
    }
}

/* ------------------------ Quatre opérations ------------------------ */

#[test]
fn sci_additions() {
    assert_eq!(aff("2+2"), "4");
    assert_proche("4+1+0.75", 5.75);
    assert_eq!(aff("−30+10"), "-20");
}

#[test]
fn sci_soustractions() {
    assert_eq!(aff("20−10"), "10");
    assert_proche("20−9.5", 10.5);
    assert_eq!(aff("−10−20−30"), "-60");
}

#[test]
fn sci_produits_quotients() {
    assert_eq!(aff("3×50"), "150");
    assert_eq!(aff("150÷5"), "30");
}

/* ------------------------ Précédence + associativité ------------------------ */

#[test]
fn sci_palier_a_seul() {
    assert_eq!(aff("10+5−10+95+5−5"), "100");
}

#[test]
fn sci_palier_b_pli_a_gauche() {
    // (10÷5)×50 et non 10÷(5×50)
    assert_eq!(aff("10÷5×50"), "100");
    assert_eq!(aff("100÷10÷5"), "2");
    assert_eq!(aff("2×3÷4×8"), "12");
}

#[test]
fn sci_paliers_melanges() {
    assert_eq!(aff("3×5÷3+5−1×6÷2"), "7");
    assert_eq!(aff("1+5+3×5÷2−7+8.5"), "15");
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn sci_parentheses() {
    assert_eq!(aff("(5+6)×2"), "22");
    assert_eq!(aff("(5×(5+1)+2)×3"), "96");
    assert_eq!(aff("5×(5+5)"), "50");
}

#[test]
fn sci_emballage_neutre() {
    for e in ["3×5÷3+5−1×6÷2", "−10−20", "(5+6)×2", "0.1+0.2", "7(8(5+5))"] {
        let nu = val(e);
        let emballe = val(&format!("({e})"));
        assert_eq!(nu.to_bits(), emballe.to_bits(), "E={e:?}");
    }
}

#[test]
fn sci_groupes_successifs() {
    assert_eq!(aff("(1+1)×(2+2)−(3)"), "5");
}

/* ------------------------ Multiplication implicite ------------------------ */

#[test]
fn sci_multiplication_implicite() {
    assert_eq!(aff("5(5+5)"), "50");
    assert_eq!(val("5(5+5)"), val("5×(5+5)"));
    assert_eq!(aff("5(5+5)+10(10−20)−50(2)"), "-150");
    assert_eq!(aff("(2)3"), "6");
    assert_eq!(aff("7(8(5+5))"), "560");
}

#[test]
fn sci_fermante_ouvrante() {
    // Au premier niveau, la valeur condensée "2.0" précède '(' : produit implicite au passage suivant.
    assert_eq!(aff("(2)(3)"), "6");
    // Imbriqué, les deux valeurs se collent ("2.03.0") : rejeté.
    assert_format("((2)(3))");
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn sci_moins_unaire() {
    assert_eq!(aff("−10(50−20)"), "-300");
    assert_eq!(aff("−10(20−50)"), "300");
    assert_eq!(aff("−(−7)"), "7");
    assert_eq!(aff("−5(−5+3)÷−5"), "-2");
    assert_eq!(aff("−(4×5)−8"), "-28");
    assert_eq!(aff("5×−3"), "-15");
}

#[test]
fn sci_moins_unaire_en_chaine() {
    assert_eq!(aff("−−7"), "7");
    assert_eq!(aff("−−−7"), "-7");
    assert_eq!(aff("3−−2"), "5");
}

#[test]
fn sci_moins_ascii() {
    // saisie clavier: '-' est normalisé puis désambiguïsé
    assert_eq!(aff("-30+10"), "-20");
    assert_eq!(aff("-(-7)"), "7");
    assert_eq!(aff("-10(50-20)"), "-300");
    assert_eq!(aff("-10(20-50)"), "300");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_erreurs_structure() {
    assert_structure(")");
    assert_structure("(");
    assert_structure("(1+2");
    assert_structure("1+2)");
    assert_structure("(1))");
    assert_structure(")(");
}

#[test]
fn sci_erreurs_format() {
    assert_format("5+");
    assert_format("");
    assert_format("()");
    assert_format("5+×3");
    assert_format("1.2.3");
    assert_format(".");
    assert_format("2+a");
}

#[test]
fn sci_messages() {
    assert_eq!(
        parse(")").unwrap_err().to_string(),
        "Format de parenthèses invalide"
    );
    assert_eq!(parse("5+").unwrap_err().to_string(), "Expression invalide");
}

/* ------------------------ Division par zéro (IEEE) ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_eq!(aff("1÷0"), "inf");
    assert_eq!(aff("−1÷0"), "-inf");
    assert_eq!(aff("0÷0"), "NaN");
    assert_eq!(aff("(1÷0)×2"), "inf");
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn sci_affichage_canonique() {
    assert_eq!(aff("4"), "4");
    assert_eq!(aff("4.0"), "4");
    assert_eq!(aff("4.5"), "4.5");
    assert_eq!(aff("9÷2"), "4.5");
    assert_eq!(aff("0×−5"), "0");
}

#[test]
fn sci_affichage_idempotent() {
    for e in ["4.5", "22÷7", "−1÷3", "1000000×1000000×1000000", "1÷10000000", "0.1+0.2"] {
        let premier = parse(e).unwrap().valeur();
        let relu = parse(&premier.to_string()).unwrap().valeur();
        assert!(premier.meme_que(relu), "E={e:?} {premier} != {relu}");
    }
}
