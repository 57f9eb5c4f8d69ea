//! Tests fuzz safe : robustesse + invariants, via proptest.
//!
//! - chaînes arbitraires sur l’alphabet : jamais de panique, erreur ou valeur
//! - expressions bien formées générées : "(E)" == E, pli à gauche du palier B
//! - affichage : relire le texte affiché redonne la même valeur
//!
//! Tailles bornées (longueur, profondeur) pour rester rapide.

use proptest::prelude::*;

use super::{parse, Valeur};

/* ------------------------ Générateurs ------------------------ */

fn nombre() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 0u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
    ]
}

fn operateur() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('−'), Just('×'), Just('÷')]
}

/// Expression bien formée (parenthèses équilibrées, moins unaire éventuel).
fn expression() -> impl Strategy<Value = String> {
    let feuille = nombre().boxed();
    feuille.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), operateur(), inner.clone())
                .prop_map(|(a, op, b)| format!("{a}{op}{b}")),
            inner.clone().prop_map(|a| format!("({a})")),
            inner.prop_map(|a| format!("−({a})")),
        ]
    })
}

fn meme(a: Valeur, b: Valeur) -> bool {
    a.meme_que(b)
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn fuzz_jamais_de_panique(s in "[0-9.+−×÷()\\-]{0,30}") {
        // seul compte: retour normal (Ok ou Err), pas de panique
        let _ = parse(&s);
    }

    #[test]
    fn fuzz_emballage_neutre(e in expression()) {
        if let Ok(nu) = parse(&e) {
            let emballe = parse(&format!("({e})"));
            prop_assert!(emballe.is_ok(), "E={:?} emballe={:?}", e, emballe);
            let emballe = emballe.unwrap().valeur();
            prop_assert!(meme(nu.valeur(), emballe), "E={:?} {} != {}", e, nu.valeur(), emballe);
        }
    }

    #[test]
    fn fuzz_palier_b_pli_a_gauche(
        premier in 1u32..100,
        suite in prop::collection::vec((prop_oneof![Just('×'), Just('÷')], 1u32..100), 1..8),
    ) {
        let mut texte = premier.to_string();
        let mut attendu = f64::from(premier);
        for (op, n) in &suite {
            texte.push(*op);
            texte.push_str(&n.to_string());
            attendu = if *op == '×' { attendu * f64::from(*n) } else { attendu / f64::from(*n) };
        }
        let v = parse(&texte).unwrap().valeur().nombre();
        prop_assert_eq!(v.to_bits(), attendu.to_bits(), "texte={:?}", texte);
    }

    #[test]
    fn fuzz_affichage_relu(a in -1_000_000i64..1_000_000, b in 1u32..10_000) {
        let e = format!("{a}÷{b}");
        let v = parse(&e).unwrap().valeur();
        let relu = parse(&v.to_string()).unwrap().valeur();
        prop_assert!(meme(v, relu), "E={:?} {} != {}", e, v, relu);
    }

    #[test]
    fn fuzz_litteral_decimal(n in nombre()) {
        let v = parse(&n).unwrap().valeur().nombre();
        prop_assert_eq!(v, n.parse::<f64>().unwrap());
    }
}
