//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état de la calculatrice (expression, résultat, erreur,
//! historique) et offrir des opérations simples sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Garde-fou : l'historique est borné.

/// Indicateur d'erreur générique montré à l'écran.
/// Le détail (quel littéral a échoué) ne remonte jamais jusqu'à l'utilisateur.
pub const TEXTE_ERREUR: &str = "Erreur";

/// Garde-fou : taille maximale de l'historique (les plus anciens sortent).
const HISTORIQUE_MAX: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sorties ---
    pub resultat: String, // résultat formaté ; vide tant que rien n'est calculé
    pub en_erreur: bool,  // true => `resultat` contient TEXTE_ERREUR

    // --- historique (plus récent en tête) ---
    pub historique: Vec<EntreeHistorique>,
    pub historique_visible: bool,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: String::new(),
            resultat: String::new(),
            en_erreur: false,
            historique: Vec::new(),
            historique_visible: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions "boutons" (état seulement) ------------------------ */

    /// Ajoute un symbole (chiffre, opérateur, parenthèse) en fin d'expression.
    pub fn ajouter(&mut self, symbole: &str) {
        self.expression.push_str(symbole);
        self.focus_entree = true;
    }

    /// C : efface l'expression et le résultat.
    pub fn effacer(&mut self) {
        self.expression.clear();
        self.resultat.clear();
        self.en_erreur = false;
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère de l'expression.
    pub fn effacer_dernier(&mut self) {
        self.expression.pop();
        self.focus_entree = true;
    }

    /// Affiche/masque le panneau d'historique.
    pub fn basculer_historique(&mut self) {
        self.historique_visible = !self.historique_visible;
    }

    pub fn vider_historique(&mut self) {
        self.historique.clear();
    }

    /// Recharge une entrée d'historique comme nouvelle expression.
    /// Le résultat courant est effacé, le panneau se referme.
    pub fn charger_historique(&mut self, index: usize) {
        if let Some(entree) = self.historique.get(index) {
            self.expression = entree.expression.clone();
            self.resultat.clear();
            self.en_erreur = false;
            self.historique_visible = false;
            self.focus_entree = true;
        }
    }

    /* ------------------------ Dépôt des résultats ------------------------ */

    /// Dépose un résultat formaté et archive la paire (expression, résultat)
    /// en tête d'historique.
    pub fn deposer_resultat(&mut self, resultat: impl Into<String>) {
        let resultat = resultat.into();

        self.historique.insert(
            0,
            EntreeHistorique {
                expression: self.expression.clone(),
                resultat: resultat.clone(),
            },
        );
        self.historique.truncate(HISTORIQUE_MAX);

        self.resultat = resultat;
        self.en_erreur = false;
        self.focus_entree = true;
    }

    /// L'évaluation a échoué : indicateur générique, pas de détail.
    /// L'expression reste en place pour correction ; rien n'est archivé.
    pub fn signaler_erreur(&mut self) {
        self.resultat = TEXTE_ERREUR.to_string();
        self.en_erreur = true;
        self.focus_entree = true;
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCalc, TEXTE_ERREUR};

    #[test]
    fn depot_archive_en_tete() {
        let mut app = AppCalc::default();

        app.ajouter("2+3");
        app.deposer_resultat("5");
        app.expression = "7*7".to_string();
        app.deposer_resultat("49");

        assert_eq!(app.resultat, "49");
        assert_eq!(app.historique.len(), 2);
        assert_eq!(app.historique[0].expression, "7*7");
        assert_eq!(app.historique[1].expression, "2+3");
    }

    #[test]
    fn erreur_conserve_expression_sans_archiver() {
        let mut app = AppCalc::default();

        app.ajouter("1.2.3");
        app.signaler_erreur();

        assert!(app.en_erreur);
        assert_eq!(app.resultat, TEXTE_ERREUR);
        assert_eq!(app.expression, "1.2.3");
        assert!(app.historique.is_empty());
    }

    #[test]
    fn charger_historique_referme_le_panneau() {
        let mut app = AppCalc::default();

        app.ajouter("2+3");
        app.deposer_resultat("5");
        app.basculer_historique();
        app.expression.clear();

        app.charger_historique(0);

        assert_eq!(app.expression, "2+3");
        assert!(app.resultat.is_empty());
        assert!(!app.historique_visible);
    }

    #[test]
    fn charger_hors_bornes_est_sans_effet() {
        let mut app = AppCalc::default();
        app.charger_historique(3);
        assert!(app.expression.is_empty());
    }
}
