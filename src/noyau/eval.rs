//! Noyau — évaluation (pipeline complet)
//!
//! tokenize -> RPN -> évaluation postfixée sur pile de f64
//!
//! Contrat de tolérance (hérité, observable, à préserver) :
//! - parenthèse orpheline : ignorée (rpn.rs)
//! - opérande manquante : remplacée par 0.0
//! - arithmétique dégénérée (÷0, √ de négatif) : propagée en ±∞/NaN,
//!   jamais convertie en erreur — l'affichage sait rendre ces valeurs
//!
//! La seule erreur qui remonte : littéral numérique invalide (jetons.rs).

use super::jetons::{tokenize, ErreurNoyau, Tok};
use super::rpn::en_rpn;

/// API publique : évalue une expression infixe et retourne un `f64`.
///
/// Pur et ré-entrant : piles et tampons sont locaux à l'appel, rien n'est
/// partagé ni retenu entre deux appels. Expression vide => 0.0 (défaut
/// pile vide).
pub fn evaluer(expression: &str) -> Result<f64, ErreurNoyau> {
    let jetons = tokenize(expression)?;
    let rpn = en_rpn(&jetons);
    Ok(eval_rpn(&rpn))
}

/// Évaluation postfixée : une passe, une pile de valeurs.
fn eval_rpn(rpn: &[Tok]) -> f64 {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => pile.push(v),

            Tok::Sqrt => {
                let a = pile.pop().unwrap_or(0.0);
                pile.push(a.sqrt());
            }

            // Pourcentage-de : "10%" vaut 0.1, donc "50*10%" = 50*(10/100) = 5.
            Tok::Percent => {
                let b = pile.pop().unwrap_or(0.0);
                pile.push(b / 100.0);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = pile.pop().unwrap_or(0.0);
                let a = pile.pop().unwrap_or(0.0);
                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    Tok::Caret => a.powf(b),
                    _ => unreachable!(),
                };
                pile.push(v);
            }

            // en_rpn n'émet jamais de parenthèse.
            Tok::LPar | Tok::RPar => {}
        }
    }

    pile.pop().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::evaluer;

    fn ok(s: &str) -> f64 {
        evaluer(s).unwrap_or_else(|e| panic!("evaluer({s:?}) erreur: {e}"))
    }

    #[test]
    fn priorite_des_operateurs() {
        assert_eq!(ok("2+3*4"), 14.0);
        assert_eq!(ok("(2+3)*4"), 20.0);
    }

    #[test]
    fn associativite_gauche() {
        assert_eq!(ok("8-3-2"), 3.0);
        assert_eq!(ok("16/4/2"), 2.0);
        // ^ aussi : (2^3)^2, pas 2^(3^2)
        assert_eq!(ok("2^3^2"), 64.0);
    }

    #[test]
    fn racine_prioritaire() {
        // √ ne prend que le littéral qui suit
        assert_eq!(ok("√9+1"), 4.0);
        assert_eq!(ok("√9*2"), 6.0);
        assert_eq!(ok("2*√16"), 8.0);
    }

    #[test]
    fn racine_sur_groupe() {
        assert_eq!(ok("√(9+16)"), 5.0);
    }

    #[test]
    fn pourcentage_de() {
        assert_eq!(ok("50*10%"), 5.0);
        assert_eq!(ok("200*15%"), 30.0);
        assert_eq!(ok("10%"), 0.1);
    }

    #[test]
    fn moins_unaire() {
        assert_eq!(ok("-5+3"), -2.0);
        assert_eq!(ok("3*-2"), -6.0);
        assert_eq!(ok("(-4)^2"), 16.0);
    }

    #[test]
    fn puissance() {
        assert_eq!(ok("2^10"), 1024.0);
    }

    #[test]
    fn division_par_zero_propage_infini() {
        assert_eq!(ok("5/0"), f64::INFINITY);
        assert_eq!(ok("-5/0"), f64::NEG_INFINITY);
    }

    #[test]
    fn racine_negative_propage_nan() {
        assert!(ok("√-9").is_nan());
    }

    #[test]
    fn entree_vide_vaut_zero() {
        assert_eq!(ok(""), 0.0);
        assert_eq!(ok("   "), 0.0);
    }

    #[test]
    fn determinisme() {
        for s in ["2+3*4", "√2", "1/3", "0.1+0.2"] {
            assert_eq!(ok(s).to_bits(), ok(s).to_bits());
        }
    }
}
