// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Le pavé insère les glyphes visuels × et ÷ ; la canonisation vers * et /
//   se fait ici, juste avant l'appel au noyau (le moteur ne connaît que
//   l'alphabet ASCII + √)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Pro");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(6.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                if self.historique_visible {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);
                    self.ui_historique(ui);
                }
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.expression)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, √9+1, 50*10%")
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus au champ.
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue, seulement si le champ est focus : on évite les
        // déclenchements "globaux" quand l'utilisateur clique ailleurs.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.calculer();
            self.focus_entree = true;
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(1.5 * ui.text_style_height(&egui::TextStyle::Monospace));

                if self.en_erreur {
                    ui.colored_label(ui.visuals().error_fg_color, &self.resultat);
                } else {
                    ui.monospace(&self.resultat);
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        // Rangée d'actions + opérateurs "savants"
        ui.horizontal_wrapped(|ui| {
            self.bouton_action(ui, "C", "Efface l'expression et le résultat", Action::Effacer);
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::EffacerDernier);

            ui.separator();

            self.bouton_insert(ui, "(");
            self.bouton_insert(ui, ")");
            self.bouton_insert(ui, "√");
            self.bouton_insert(ui, "^");
            self.bouton_insert(ui, "%");

            ui.separator();

            self.bouton_action(
                ui,
                "Hist",
                "Affiche/masque l'historique",
                Action::BasculerHistorique,
            );
        });

        ui.add_space(8.0);

        // Pavé numérique : glyphes visuels × et ÷ (canonisés dans calculer)
        egui::Grid::new("pave_calcpro")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7");
                self.bouton_insert(ui, "8");
                self.bouton_insert(ui, "9");
                self.bouton_insert(ui, "÷");
                ui.end_row();

                self.bouton_insert(ui, "4");
                self.bouton_insert(ui, "5");
                self.bouton_insert(ui, "6");
                self.bouton_insert(ui, "×");
                ui.end_row();

                self.bouton_insert(ui, "1");
                self.bouton_insert(ui, "2");
                self.bouton_insert(ui, "3");
                self.bouton_insert(ui, "-");
                ui.end_row();

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ".");
                self.bouton_egal(ui);
                self.bouton_insert(ui, "+");
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Historique :");
            if ui.small_button("Vider").clicked() {
                self.vider_historique();
            }
        });

        if self.historique.is_empty() {
            ui.monospace("(vide)");
            return;
        }

        // Clic sur une ligne : recharge l'expression pour la retravailler.
        let mut a_charger: Option<usize> = None;
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                for (i, entree) in self.historique.iter().enumerate() {
                    let ligne = format!("{} = {}", entree.expression, entree.resultat);
                    if ui
                        .add(egui::Button::new(egui::RichText::new(ligne).monospace()).frame(false))
                        .on_hover_text("Recharger cette expression")
                        .clicked()
                    {
                        a_charger = Some(i);
                    }
                }
            });

        if let Some(i) = a_charger {
            self.charger_historique(i);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Effacer => self.effacer(),
                Action::EffacerDernier => self.effacer_dernier(),
                Action::BasculerHistorique => self.basculer_historique(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str) {
        let resp = ui.add_sized([46.0, 32.0], egui::Button::new(symbole));
        if resp.clicked() {
            self.ajouter(symbole);
        }
    }

    fn bouton_egal(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add_sized([46.0, 32.0], egui::Button::new("="));
        if resp.clicked() {
            self.calculer();
            self.focus_entree = true;
        }
    }

    /// Évalue l'expression via le noyau, puis dépose le résultat formaté
    /// (et l'archive) dans l'état UI.
    fn calculer(&mut self) {
        // Entrée vide : pas d'appel au noyau, pas d'archive.
        if self.expression.trim().is_empty() {
            return;
        }

        // Glyphes visuels -> alphabet du moteur.
        let canonique = self.expression.replace('×', "*").replace('÷', "/");

        match noyau::evaluer(&canonique) {
            Ok(v) => {
                let affiche = noyau::formater_resultat(v);
                self.deposer_resultat(affiche);
            }
            Err(_) => self.signaler_erreur(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Effacer,
    EffacerDernier,
    BasculerHistorique,
}
