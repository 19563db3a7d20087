// src/app/vue.rs
//
// Vue egui (natif + web) : entrée, clavier, sorties.
// Le clavier est une table : la vue ne fait que la parcourir.

use eframe::egui;

use calculatrice_rpn::{evaluate_detaille, format_resultat};

use super::etat::{AppCalc, Insertion};

const NOTE_DEMARCHE: &str = "jetons -> RPN (shunting-yard) -> pile f64";
const TAILLE_TOUCHE: [f32; 2] = [52.0, 32.0];

const FONCTIONS: [&str; 10] = [
    "sqrt", "sin", "cos", "tan", "cot", "ln", "log10", "log2", "log8", "log16",
];

/// C / CLR / AC : (libellé, bulle, action).
const ACTIONS: [(&str, &str, fn(&mut AppCalc)); 3] = [
    ("C", "Efface seulement l’entrée", AppCalc::clear_entree),
    ("CLR", "Efface résultat + erreur + démarche", AppCalc::clear_resultats),
    ("AC", "Remise à zéro totale", AppCalc::reset_total),
];

#[derive(Clone, Copy, Debug)]
enum Touche {
    Texte(&'static str, Insertion),
    Efface,
    Egal,
}

use Insertion::{Chiffre, Collee, Mot, Operateur, Ouvrante};
use Touche::{Efface, Egal, Texte};

#[rustfmt::skip]
const CLAVIER: [[Touche; 5]; 5] = [
    [Texte("7", Chiffre), Texte("8", Chiffre), Texte("9", Chiffre), Texte("/", Operateur), Efface],
    [Texte("4", Chiffre), Texte("5", Chiffre), Texte("6", Chiffre), Texte("*", Operateur), Texte("(", Ouvrante)],
    [Texte("1", Chiffre), Texte("2", Chiffre), Texte("3", Chiffre), Texte("-", Operateur), Texte(")", Collee)],
    [Texte("0", Chiffre), Texte(".", Chiffre), Texte(",", Operateur), Texte("+", Operateur), Egal],
    [Texte("%", Operateur), Texte("^", Operateur), Texte("!", Collee), Texte("pi", Mot), Texte("e", Mot)],
];

impl AppCalc {
    /// UI principale : appelée par eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(crate::TITRE_APP);
                self.ui_entree(ui);
                ui.separator();
                self.ui_clavier(ui);
                ui.separator();
                self.ui_sorties(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("3 + 4 * (2 - 1), sin(pi/2), (5!) - 1")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter : seulement si le champ a le focus
        if resp.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.eval_via_noyau();
        }

        ui.horizontal(|ui| {
            for (label, bulle, action) in ACTIONS {
                let resp = ui
                    .add_sized(TAILLE_TOUCHE, egui::Button::new(label))
                    .on_hover_text(bulle);
                if resp.clicked() {
                    action(self);
                }
            }
        });
    }

    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("clavier").spacing([6.0, 6.0]).show(ui, |ui| {
            for ligne in CLAVIER {
                for touche in ligne {
                    self.touche(ui, touche);
                }
                ui.end_row();
            }
        });

        ui.horizontal_wrapped(|ui| {
            for nom in FONCTIONS {
                if ui.add_sized(TAILLE_TOUCHE, egui::Button::new(nom)).clicked() {
                    self.inserer(&format!("{nom}("), Ouvrante);
                }
            }
        });
    }

    fn touche(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let label = match touche {
            Texte(t, _) => t,
            Efface => "DEL",
            Egal => "=",
        };
        if !ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label)).clicked() {
            return;
        }
        match touche {
            Texte(t, genre) => self.inserer(t, genre),
            Efface => self.backspace_entree(),
            Egal => self.eval_via_noyau(),
        }
    }

    fn ui_sorties(&self, ui: &mut egui::Ui) {
        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }

        let lignes = [
            ("Résultat", &self.resultat),
            ("Jetons", &self.demarche.jetons),
            ("RPN", &self.demarche.rpn),
        ];
        egui::Grid::new("sorties")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for (titre, valeur) in lignes {
                    ui.label(titre);
                    ui.monospace(if valeur.is_empty() { "—" } else { valeur.as_str() });
                    ui.end_row();
                }
            });

        if !self.demarche.rpn.is_empty() {
            ui.weak(NOTE_DEMARCHE);
        }
    }

    fn eval_via_noyau(&mut self) {
        match evaluate_detaille(&self.entree) {
            Ok((valeur, demarche)) => self.set_resultat(format_resultat(valeur), demarche),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}
