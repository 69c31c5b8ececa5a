// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - Num : sortie directe
// - √ et '(' : empilés sans comparaison
// - ')' : dépile jusqu'à '(' ; la '(' est jetée
// - opérateur : dépile tant que le sommet est un opérateur de précédence
//   supérieure OU ÉGALE (=> associativité gauche sur un même palier),
//   puis s'empile
//
// Tolérance (contrat observable, à préserver):
// - ')' sans ouvrante : ignorée, le balayage continue
// - '(' jamais fermée : abandonnée à la vidange finale
// Aucune erreur ne sort d'ici.

use super::jetons::Tok;

fn precedence(t: Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Caret | Tok::Sqrt => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn en_rpn(jetons: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    for tok in jetons.iter().copied() {
        match tok {
            Tok::Num(_) => out.push(tok),

            // √ colle à l'opérande qui suit : empilée sans comparer.
            Tok::Sqrt => ops.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                while let Some(top) = ops.pop() {
                    if top == Tok::LPar {
                        break;
                    }
                    out.push(top);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret | Tok::Percent => {
                while let Some(&top) = ops.last() {
                    if !top.est_operateur() {
                        break;
                    }
                    if precedence(top) >= precedence(tok) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops ; une '(' restante n'a pas de place en RPN
    while let Some(op) = ops.pop() {
        if op.est_operateur() {
            out.push(op);
        }
    }

    out
}
