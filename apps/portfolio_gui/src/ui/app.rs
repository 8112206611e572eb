use std::time::{Duration, Instant};

use arboard::Clipboard;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use portfolio_core::{
    ContactForm, Notification, NotificationKind, SectionBounds, SectionLayouts, ViewEffect,
    ViewEvent, ViewState,
};
use shared::{content::PortfolioContent, domain::SectionId};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::sections::{self, PageAction, SECTION_MIN_HEIGHT};

/// Below this width the navigation collapses into the hamburger menu.
const MOBILE_BREAKPOINT: f32 = 768.0;
const IDLE_REPAINT: Duration = Duration::from_millis(100);

pub struct PortfolioApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    content: PortfolioContent,
    view: ViewState,
    form: ContactForm,

    layouts: SectionLayouts,
    last_scroll_offset: Option<f32>,
    pending_scroll: Option<SectionId>,
    compact_nav: bool,

    notification: Option<Notification>,
    status: String,
    status_banner: Option<UiError>,
}

impl PortfolioApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        content: PortfolioContent,
        view: ViewState,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            content,
            view,
            form: ContactForm::new(),
            layouts: SectionLayouts::new(),
            last_scroll_offset: None,
            pending_scroll: None,
            compact_nav: false,
            notification: None,
            status: "Starting...".to_string(),
            status_banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::ContactDelivered => {
                    self.notification = Some(self.form.finish_submit(&Ok(())));
                    self.status = "Message sent".to_string();
                }
                UiEvent::ContactFailed(err) => {
                    let ui_error = UiError::from_contact_error(&err);
                    self.status = ui_error.banner_text();
                    self.notification = Some(self.form.finish_submit(&Err(err)));
                }
                UiEvent::Error(err) => {
                    tracing::error!(
                        context = ?err.context(),
                        category = ?err.category(),
                        "{}",
                        err.message()
                    );
                    self.status = err.banner_text();
                    self.status_banner = Some(err);
                }
            }
        }
    }

    fn apply_view_event(&mut self, event: ViewEvent, now: Instant) {
        if let Some(ViewEffect::ScrollTo(section)) = self.view.apply(event, &self.layouts, now) {
            self.pending_scroll = Some(section);
        }
    }

    fn submit_contact(&mut self) {
        let submission = match self.form.begin_submit() {
            Ok(submission) => submission,
            Err(err) => {
                self.notification = Some(Notification::failure(&err));
                return;
            }
        };

        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SubmitContact(submission),
            &mut self.status,
        );
        if queued {
            self.status = "Sending message...".to_string();
        } else {
            self.form.abandon_submit();
            self.status_banner = Some(UiError::from_message(
                UiErrorContext::ContactSubmit,
                self.status.clone(),
            ));
        }
    }

    fn copy_to_clipboard(&mut self, label: &str, value: &str) {
        let result = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(value));
        match result {
            Ok(()) => self.status = format!("Copied {label} to clipboard"),
            Err(err) => {
                let err = UiError::from_message(
                    UiErrorContext::Clipboard,
                    format!("could not copy {label}: {err}"),
                );
                tracing::warn!("{}", err.message());
                self.status = err.banner_text();
            }
        }
    }

    fn apply_page_actions(&mut self, actions: Vec<PageAction>, now: Instant) {
        for action in actions {
            match action {
                PageAction::Navigate(section) => {
                    self.apply_view_event(ViewEvent::NavClicked(section), now);
                }
                PageAction::SubmitContact => self.submit_contact(),
                PageAction::Copy { label, value } => self.copy_to_clipboard(&label, &value),
            }
        }
    }

    fn nav_button(&self, ui: &mut egui::Ui, section: SectionId) -> bool {
        let active = self.view.active_section() == section;
        let text = if active {
            egui::RichText::new(section.label()).strong()
        } else {
            egui::RichText::new(section.label())
        };
        ui.add(egui::Button::new(text).selected(active)).clicked()
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context, now: Instant) {
        let mut clicked = None;
        let mut toggled = false;

        egui::TopBottomPanel::top("nav_bar")
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::symmetric(20, 12)),
            )
            .show(ctx, |ui| {
                self.compact_nav = ui.available_width() < MOBILE_BREAKPOINT;
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&self.content.owner_name)
                            .size(20.0)
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.compact_nav {
                            let icon = if self.view.menu_open() { "✕" } else { "☰" };
                            if ui.button(icon).clicked() {
                                toggled = true;
                            }
                        } else {
                            // Right-to-left layout: add links in reverse display order.
                            for section in SectionId::ALL.into_iter().rev() {
                                if self.nav_button(ui, section) {
                                    clicked = Some(section);
                                }
                            }
                        }
                    });
                });
            });

        if self.compact_nav && self.view.menu_open() {
            egui::TopBottomPanel::top("mobile_nav")
                .resizable(false)
                .show(ctx, |ui| {
                    ui.vertical_centered_justified(|ui| {
                        for section in SectionId::ALL {
                            if self.nav_button(ui, section) {
                                clicked = Some(section);
                            }
                        }
                    });
                });
        }

        if toggled {
            self.apply_view_event(ViewEvent::MenuToggled, now);
        }
        if let Some(section) = clicked {
            self.apply_view_event(ViewEvent::NavClicked(section), now);
        }
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.status).small().weak());
            });
            if let Some(banner) = self.status_banner.clone() {
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(111, 53, 53))
                    .stroke(egui::Stroke::new(
                        1.0,
                        egui::Color32::from_rgb(175, 96, 96),
                    ))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(
                                egui::RichText::new(banner.banner_text())
                                    .color(egui::Color32::WHITE),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("Dismiss").clicked() {
                                        self.status_banner = None;
                                    }
                                },
                            );
                        });
                    });
            }
        });
    }

    fn show_page(&mut self, ctx: &egui::Context, now: Instant) {
        let blocked = self.notification.is_some();
        let mut actions = Vec::new();
        let mut layouts = SectionLayouts::new();

        let scroll_offset = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| {
                    // Sections fill the viewport so the last one can reach the
                    // top of the page and be picked up by the tracker.
                    let section_height = ui.available_height().max(SECTION_MIN_HEIGHT);
                    egui::ScrollArea::vertical()
                        .id_salt("portfolio_page")
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            let origin = ui.cursor().top();
                            for section in SectionId::ALL {
                                let response = ui.scope(|ui| {
                                    ui.set_width(ui.available_width());
                                    ui.set_min_height(section_height);
                                    sections::render(
                                        ui,
                                        section,
                                        &self.content,
                                        &mut self.form,
                                        &mut actions,
                                    );
                                });
                                let rect = response.response.rect;
                                layouts.set(
                                    section,
                                    SectionBounds::new(rect.top() - origin, rect.height()),
                                );
                                if self.pending_scroll == Some(section) {
                                    ui.scroll_to_rect(rect, Some(egui::Align::Min));
                                    self.pending_scroll = None;
                                }
                            }
                        })
                        .state
                        .offset
                        .y
                })
                .inner
            })
            .inner;

        self.layouts = layouts;
        let scrolled = self
            .last_scroll_offset
            .is_none_or(|last| (last - scroll_offset).abs() > f32::EPSILON);
        if scrolled {
            self.last_scroll_offset = Some(scroll_offset);
            self.apply_view_event(
                ViewEvent::Scrolled {
                    offset: scroll_offset,
                },
                now,
            );
        }

        self.apply_page_actions(actions, now);
    }

    fn show_section_indicator(&self, ctx: &egui::Context, now: Instant) {
        if !self.view.indicator_visible(now) {
            return;
        }
        egui::Area::new(egui::Id::new("section_indicator"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -48.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(&ctx.style())
                    .corner_radius(egui::CornerRadius::same(12))
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(self.view.active_section().label())
                                .size(18.0)
                                .strong(),
                        );
                    });
            });
    }

    fn show_notification(&mut self, ctx: &egui::Context) {
        let Some(notification) = self.notification.clone() else {
            return;
        };
        let title = match notification.kind {
            NotificationKind::Success => "Message sent",
            NotificationKind::Failure => "Message not sent",
        };

        let mut dismissed = false;
        egui::Window::new(title)
            .id(egui::Id::new("contact_notification"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&notification.message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    dismissed = true;
                }
            });
        if dismissed {
            self.notification = None;
        }
    }

    fn next_repaint(&self, now: Instant) -> Duration {
        self.view
            .indicator_time_left(now)
            .map_or(IDLE_REPAINT, |left| left.min(IDLE_REPAINT))
    }

    fn run_frame(&mut self, ctx: &egui::Context, now: Instant) {
        self.process_ui_events();
        self.apply_view_event(ViewEvent::Tick, now);

        self.show_nav_bar(ctx, now);
        self.show_status_bar(ctx);
        self.show_page(ctx, now);
        self.show_section_indicator(ctx, now);
        self.show_notification(ctx);

        ctx.request_repaint_after(self.next_repaint(now));
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx, Instant::now());
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
