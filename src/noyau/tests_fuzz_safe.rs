//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur d'expression bornée
//! - budget temps global
//! - la seule erreur admise : littéral numérique invalide
//! - invariants clés : jamais de panique, même entrée => même sortie (bit à
//!   bit, NaN compris), le formateur avale n'importe quel f64

use std::time::{Duration, Instant};

use super::format::formater_resultat;
use super::jetons::ErreurNoyau;
use super::evaluer;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng, sortie: &mut String) {
    if rng.pick(4) == 0 {
        sortie.push('-');
    }
    for _ in 0..=rng.pick(3) {
        sortie.push(char::from(b'0' + rng.pick(10) as u8));
    }
    if rng.coin() {
        sortie.push('.');
        for _ in 0..=rng.pick(2) {
            sortie.push(char::from(b'0' + rng.pick(10) as u8));
        }
    }
}

fn gen_expression(rng: &mut Rng) -> String {
    let mut s = String::new();
    let termes = 1 + rng.pick(6);

    for i in 0..termes {
        if i > 0 {
            s.push(match rng.pick(6) {
                0 => '+',
                1 => '-',
                2 => '*',
                3 => '/',
                4 => '^',
                _ => '%',
            });
        }

        // parenthèses parfois déséquilibrées : la tolérance doit absorber
        if rng.pick(5) == 0 {
            s.push('(');
        }
        if rng.pick(6) == 0 {
            s.push('√');
        }
        gen_nombre(rng, &mut s);
        if rng.pick(5) == 0 {
            s.push(')');
        }
        if rng.pick(8) == 0 {
            s.push(' ');
        }
    }

    // bruit hors alphabet de temps en temps (doit être ignoré ou
    // déboucher sur NombreInvalide, jamais sur une panique)
    if rng.pick(10) == 0 {
        s.push(match rng.pick(4) {
            0 => 'a',
            1 => '#',
            2 => '@',
            _ => '.',
        });
    }

    s
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_jamais_de_panique() {
    let mut rng = Rng::new(0xCA1C_0001);
    let start = Instant::now();

    for _ in 0..4000 {
        budget(start, Duration::from_secs(10));
        let expr = gen_expression(&mut rng);

        match evaluer(&expr) {
            Ok(v) => {
                // le formateur doit avaler n'importe quelle valeur, NaN/∞ compris
                let _ = formater_resultat(v);
            }
            Err(ErreurNoyau::NombreInvalide(litteral)) => {
                // seule erreur admise ; le littéral fautif est bien non vide
                assert!(!litteral.is_empty(), "expr={expr:?}");
            }
        }
    }
}

#[test]
fn fuzz_determinisme_bit_a_bit() {
    let mut rng = Rng::new(0xCA1C_0002);
    let start = Instant::now();

    for _ in 0..2000 {
        budget(start, Duration::from_secs(10));
        let expr = gen_expression(&mut rng);

        let premier = evaluer(&expr);
        let second = evaluer(&expr);

        match (premier, second) {
            (Ok(a), Ok(b)) => {
                // to_bits : NaN == NaN pour ce qui nous concerne
                assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
            }
            (Err(a), Err(b)) => assert_eq!(a, b, "expr={expr:?}"),
            (a, b) => panic!("non déterministe: expr={expr:?} {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn fuzz_aller_retour_formate() {
    let mut rng = Rng::new(0xCA1C_0003);
    let start = Instant::now();

    for _ in 0..2000 {
        budget(start, Duration::from_secs(10));
        let expr = gen_expression(&mut rng);

        let Ok(v) = evaluer(&expr) else { continue };
        if !v.is_finite() {
            continue;
        }

        let affiche = formater_resultat(v);
        let relu = evaluer(&affiche).unwrap_or_else(|e| {
            panic!("reparse de {affiche:?} (depuis {expr:?}): {e}")
        });

        // soit identique (grands nombres), soit dans la troncature du formateur
        assert!(
            relu == v || (relu - v).abs() <= 1e-8,
            "aller-retour: {expr:?} -> {v} -> {affiche:?} -> {relu}"
        );
    }
}
