//! Tests moteur (campagne) : comportements épinglés du pipeline complet.
//!
//! But : figer le contrat observable, y compris la tolérance aux entrées
//! mal formées. Cette tolérance n'est PAS à "corriger" en validation
//! stricte : une parenthèse orpheline ou une opérande manquante donne un
//! résultat best-effort, seule un littéral numérique illisible est une
//! erreur.

use super::format::formater_resultat;
use super::jetons::ErreurNoyau;
use super::evaluer;

fn ok(s: &str) -> f64 {
    evaluer(s).unwrap_or_else(|e| panic!("evaluer({s:?}) erreur: {e}"))
}

fn erreur(s: &str) -> ErreurNoyau {
    match evaluer(s) {
        Ok(v) => panic!("evaluer({s:?}) aurait dû échouer, a donné {v}"),
        Err(e) => e,
    }
}

// --- Arithmétique simple ---

#[test]
fn binaires_simples() {
    assert_eq!(ok("7+5"), 12.0);
    assert_eq!(ok("7-5"), 2.0);
    assert_eq!(ok("7*5"), 35.0);
    assert_eq!(ok("7/5"), 1.4);
    assert_eq!(ok("2^5"), 32.0);
}

#[test]
fn litteraux_decimaux() {
    assert_eq!(ok("3.5+1.25"), 4.75);
    assert_eq!(ok(".5*4"), 2.0);
    assert_eq!(ok("5.*2"), 10.0);
}

#[test]
fn blancs_ignores() {
    assert_eq!(ok(" 2 + 3 * 4 "), 14.0);
    assert_eq!(ok("\t(2+3)\t*4"), 20.0);
}

#[test]
fn imbrication_parentheses() {
    assert_eq!(ok("((2+3)*(4-1))"), 15.0);
    assert_eq!(ok("2*(3+(4*5))"), 46.0);
}

// --- Moins unaire, cas tordus ---

#[test]
fn moins_unaire_en_tete_et_apres_operateur() {
    assert_eq!(ok("-5"), -5.0);
    assert_eq!(ok("-5+3"), -2.0);
    assert_eq!(ok("3*-2"), -6.0);
    assert_eq!(ok("(-4)^2"), 16.0);
    // moins binaire puis moins unaire : 5-(-3)
    assert_eq!(ok("5--3"), 8.0);
}

#[test]
fn moins_unaire_devant_racine() {
    // le '-' seul dans le tampon redevient un Minus binaire : 0 - √9
    assert_eq!(ok("-√9"), -3.0);
}

// --- Tolérance (contrat hérité, épinglé volontairement) ---

#[test]
fn parenthese_ouvrante_orpheline() {
    assert_eq!(ok("(2+3"), 5.0);
    assert_eq!(ok("((2+3"), 5.0);
}

#[test]
fn parenthese_fermante_orpheline() {
    assert_eq!(ok("2+3)"), 5.0);
    assert_eq!(ok(")2+3"), 5.0);
}

#[test]
fn operande_gauche_manquante_vaut_zero() {
    // "5+" => RPN [5, +] => 0 + 5
    assert_eq!(ok("5+"), 5.0);
    // "*5" => RPN [5, *] => 0 * 5
    assert_eq!(ok("*5"), 0.0);
}

#[test]
fn pile_vide_absorbee_en_zero() {
    assert_eq!(ok("+"), 0.0);
    assert_eq!(ok("√"), 0.0);
    assert_eq!(ok("-"), 0.0);
}

#[test]
fn caracteres_inconnus_ignores() {
    assert_eq!(ok("2a+2"), 4.0);
    assert_eq!(ok("2&+#2"), 4.0);
}

#[test]
fn nombres_juxtaposes_dernier_gagne() {
    // [1, 2] en RPN sans opérateur : le sommet de pile sort
    assert_eq!(ok("1 2"), 2.0);
}

// --- La seule erreur : littéral illisible ---

#[test]
fn litteral_invalide_est_une_erreur() {
    assert_eq!(
        erreur("1.2.3"),
        ErreurNoyau::NombreInvalide("1.2.3".to_string())
    );
    assert_eq!(erreur("3+."), ErreurNoyau::NombreInvalide(".".to_string()));
}

#[test]
fn double_moins_nest_pas_une_erreur() {
    // le premier '-' est vidé en Minus, le second repart en unaire :
    // [Minus, Num(-5)] => 0 - (-5)
    assert_eq!(ok("--5"), 5.0);
}

// --- Pourcentage ---

#[test]
fn pourcentage_apres_produit() {
    assert_eq!(ok("50*10%"), 5.0);
}

#[test]
fn pourcentage_seul_et_additionne() {
    assert_eq!(ok("10%"), 0.1);
    assert_eq!(ok("50+10%"), 50.1);
}

// --- Valeurs spéciales ---

#[test]
fn degenere_propage_sans_erreur() {
    assert_eq!(ok("5/0"), f64::INFINITY);
    assert!(ok("0/0").is_nan());
    assert!(ok("√-2").is_nan());
}

// --- Formatage ---

#[test]
fn format_entier_sans_decimales() {
    assert_eq!(formater_resultat(14.0), "14");
    assert_eq!(formater_resultat(-3.0), "-3");
    assert_eq!(formater_resultat(0.0), "0");
}

#[test]
fn format_tronque_a_huit_decimales() {
    assert_eq!(formater_resultat(2.5), "2.5");
    assert_eq!(formater_resultat(0.1 + 0.2), "0.3");
    assert_eq!(formater_resultat(1.0 / 3.0), "0.33333333");
}

#[test]
fn format_valeurs_speciales() {
    assert_eq!(formater_resultat(f64::NAN), "NaN");
    assert_eq!(formater_resultat(f64::INFINITY), "∞");
    assert_eq!(formater_resultat(f64::NEG_INFINITY), "-∞");
}

#[test]
fn aller_retour_format_puis_reparse() {
    // un résultat affiché, rappelé depuis l'historique comme littéral,
    // doit redonner la même valeur à la précision du formateur près
    for s in ["2+3*4", "1/3", "0.1+0.2", "√2", "2^0.5", "-7/9"] {
        let v = ok(s);
        let affiche = formater_resultat(v);
        let relu = ok(&affiche);
        assert!(
            (relu - v).abs() <= 1e-8,
            "aller-retour {s:?} : {v} -> {affiche:?} -> {relu}"
        );
    }
}
