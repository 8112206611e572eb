//! Renderers for the five page sections. Each returns the actions the user
//! triggered so the app can apply them after the frame's layout is measured.

use eframe::egui;
use portfolio_core::ContactForm;
use shared::{content::PortfolioContent, domain::SectionId};

pub const SECTION_MIN_HEIGHT: f32 = 520.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    Navigate(SectionId),
    SubmitContact,
    Copy { label: String, value: String },
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.add_space(48.0);
    ui.label(egui::RichText::new(title).size(30.0).strong());
    ui.add_space(20.0);
}

fn tag_row(ui: &mut egui::Ui, tags: &[String]) {
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            egui::Frame::new()
                .fill(ui.visuals().faint_bg_color)
                .corner_radius(10.0)
                .inner_margin(egui::Margin::symmetric(8, 3))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(tag).small());
                });
        }
    });
}

fn card<R>(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(16, 14))
        .show(ui, add)
        .inner
}

pub fn render(
    ui: &mut egui::Ui,
    section: SectionId,
    content: &PortfolioContent,
    form: &mut ContactForm,
    actions: &mut Vec<PageAction>,
) {
    match section {
        SectionId::Home => home(ui, content, actions),
        SectionId::About => about(ui, content),
        SectionId::Projects => projects(ui, content),
        SectionId::Skills => skills(ui, content),
        SectionId::Contact => contact(ui, content, form, actions),
    }
}

fn home(ui: &mut egui::Ui, content: &PortfolioContent, actions: &mut Vec<PageAction>) {
    ui.vertical_centered(|ui| {
        ui.add_space(140.0);
        ui.label(egui::RichText::new(&content.owner_name).size(46.0).strong());
        ui.add_space(12.0);
        ui.label(egui::RichText::new(&content.tagline).size(20.0).weak());
        ui.add_space(28.0);
        ui.horizontal(|ui| {
            // Center the two buttons inside the full-width row.
            let buttons_width = 300.0;
            ui.add_space(((ui.available_width() - buttons_width) / 2.0).max(0.0));
            if ui.button("View My Work").clicked() {
                actions.push(PageAction::Navigate(SectionId::Projects));
            }
            ui.add_space(12.0);
            if ui.button("Get In Touch").clicked() {
                actions.push(PageAction::Navigate(SectionId::Contact));
            }
        });
    });
}

fn about(ui: &mut egui::Ui, content: &PortfolioContent) {
    section_title(ui, "About Me");
    for paragraph in &content.about {
        ui.label(egui::RichText::new(paragraph).size(16.0));
        ui.add_space(12.0);
    }
}

fn projects(ui: &mut egui::Ui, content: &PortfolioContent) {
    section_title(ui, "My Projects");
    for (index, project) in content.projects.iter().enumerate() {
        card(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(format!("Project {}", index + 1))
                    .small()
                    .weak(),
            );
            ui.label(egui::RichText::new(&project.title).size(20.0).strong());
            ui.label(&project.summary);
            ui.add_space(6.0);
            tag_row(ui, &project.tech);
        });
        ui.add_space(12.0);
    }
}

fn skills(ui: &mut egui::Ui, content: &PortfolioContent) {
    section_title(ui, "Skills & Technologies");
    for category in &content.skills {
        card(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&category.name).size(18.0).strong());
            ui.add_space(6.0);
            tag_row(ui, &category.skills);
        });
        ui.add_space(12.0);
    }
}

fn contact(
    ui: &mut egui::Ui,
    content: &PortfolioContent,
    form: &mut ContactForm,
    actions: &mut Vec<PageAction>,
) {
    section_title(ui, "Get In Touch");

    for channel in &content.contact {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&channel.label).strong());
            ui.label(&channel.value);
            if ui.small_button("Copy").clicked() {
                actions.push(PageAction::Copy {
                    label: channel.label.clone(),
                    value: channel.value.clone(),
                });
            }
        });
    }
    ui.add_space(20.0);

    card(ui, |ui| {
        ui.set_width(ui.available_width());
        let busy = form.is_busy();
        ui.add_enabled_ui(!busy, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut form.name)
                    .id_salt("contact_name")
                    .hint_text("Your Name")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);
            ui.add(
                egui::TextEdit::singleline(&mut form.email)
                    .id_salt("contact_email")
                    .hint_text("Your Email")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);
            ui.add(
                egui::TextEdit::multiline(&mut form.message)
                    .id_salt("contact_message")
                    .hint_text("Your Message")
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            );
        });
        ui.add_space(10.0);
        if ui
            .add_enabled(!busy, egui::Button::new(form.submit_label()))
            .clicked()
        {
            actions.push(PageAction::SubmitContact);
        }
    });
    ui.add_space(48.0);
}
