// src/noyau/jetons.rs

use std::fmt;

/// Erreur du noyau.
///
/// Un seul cas distinguable : un littéral numérique accumulé par la
/// tokenisation qui ne se lit pas comme un `f64` (ex: "1.2.3").
/// Tout le reste (parenthèse orpheline, opérande manquante) est absorbé
/// en best-effort par l'évaluation — contrat observable, voir eval.rs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurNoyau {
    NombreInvalide(String),
}

impl fmt::Display for ErreurNoyau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurNoyau::NombreInvalide(litteral) => {
                write!(f, "nombre invalide: '{litteral}'")
            }
        }
    }
}

impl std::error::Error for ErreurNoyau {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    Caret,   // ^
    Percent, // % = pourcentage-de, PAS le modulo
    Sqrt,    // √

    LPar,
    RPar,
}

impl Tok {
    /// Vrai pour tout opérateur (Sqrt inclus) ; faux pour nombres et parenthèses.
    pub fn est_operateur(self) -> bool {
        matches!(
            self,
            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret | Tok::Percent | Tok::Sqrt
        )
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - littéraux décimaux (ex: 12, 3.5, .5)
/// - opérateurs + - * / ^ %
/// - parenthèses ( )
/// - √ (racine carrée, préfixe)
/// - moins unaire (fusionné dans le littéral qui suit : "-5" => Num(-5.0))
///
/// Les blancs sont sautés. Tout caractère hors alphabet est ignoré
/// silencieusement (permissif par omission) : l'entrée vient d'un pavé de
/// boutons, le clavier libre ne doit pas faire tomber le moteur.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut out: Vec<Tok> = Vec::new();
    let mut tampon = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            tampon.push(c);
            continue;
        }

        // Tout caractère non numérique clôt le littéral en cours.
        vider_tampon(&mut tampon, &mut out)?;

        match c {
            '√' => out.push(Tok::Sqrt),

            '-' => {
                // Moins unaire : début d'expression, ou juste après un
                // opérateur ou une '('. Le signe part dans le tampon au lieu
                // de devenir un jeton, le littéral suivant sera négatif.
                let unaire = match out.last() {
                    None => true,
                    Some(&t) => t.est_operateur() || t == Tok::LPar,
                };
                if unaire {
                    tampon.push('-');
                } else {
                    out.push(Tok::Minus);
                }
            }

            '+' => out.push(Tok::Plus),
            '*' => out.push(Tok::Star),
            '/' => out.push(Tok::Slash),
            '^' => out.push(Tok::Caret),
            '%' => out.push(Tok::Percent),
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),

            c if c.is_whitespace() => {}

            // Hors alphabet : ignoré.
            _ => {}
        }
    }

    vider_tampon(&mut tampon, &mut out)?;

    Ok(out)
}

/// Clôt le littéral en cours (si non vide) en jeton `Num`.
///
/// Cas limite : un tampon réduit à "-" (moins unaire jamais suivi d'un
/// chiffre) redevient un `Minus` binaire au lieu d'échouer — "-√9" doit
/// valoir -3, pas une erreur.
fn vider_tampon(tampon: &mut String, out: &mut Vec<Tok>) -> Result<(), ErreurNoyau> {
    if tampon.is_empty() {
        return Ok(());
    }

    if tampon == "-" {
        out.push(Tok::Minus);
        tampon.clear();
        return Ok(());
    }

    match tampon.parse::<f64>() {
        Ok(v) => {
            out.push(Tok::Num(v));
            tampon.clear();
            Ok(())
        }
        Err(_) => Err(ErreurNoyau::NombreInvalide(std::mem::take(tampon))),
    }
}
