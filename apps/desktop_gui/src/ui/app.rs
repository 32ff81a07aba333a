use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::run_command;
use crate::controller::reducer::ControllerState;
use crate::ui::{
    layout::{COMPOSER_HEIGHT, HEADER_HEIGHT, TRANSCRIPT_WIDTH_FRACTION, WINDOW_TITLE},
    panels, theme,
};

const UI_EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: ControllerState,
}

impl DesktopGuiApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        ctx: &egui::Context,
    ) -> Self {
        ctx.set_visuals(theme::visuals());
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: ControllerState::default(),
        };
        let cmd = app.state.mount();
        run_command(&mut app.state, &app.cmd_tx, cmd);
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            if let Some(cmd) = self.state.apply(event) {
                run_command(&mut self.state, &self.cmd_tx, cmd);
            }
        }
    }

    fn pick_and_upload(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .pick_file()
        else {
            return;
        };
        tracing::debug!(path = %path.display(), "pdf selected for upload");
        let cmd = self.state.begin_upload(path);
        run_command(&mut self.state, &self.cmd_tx, cmd);
    }

    fn submit_question(&mut self) {
        if let Some(cmd) = self.state.submit_input() {
            run_command(&mut self.state, &self.cmd_tx, cmd);
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let pending = self.state.is_pending();
        let mut upload_clicked = false;
        let mut submitted = false;

        egui::TopBottomPanel::top("header")
            .resizable(false)
            .exact_height(HEADER_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(theme::BLUE_500)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                upload_clicked = panels::show_header(ui, WINDOW_TITLE, pending);
            });

        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .show(ctx, |ui| panels::show_status(ui, self.state.status()));

        egui::TopBottomPanel::bottom("composer")
            .resizable(false)
            .exact_height(COMPOSER_HEIGHT)
            .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(12, 10)))
            .show(ctx, |ui| {
                submitted = panels::show_composer(ui, &mut self.state.input, pending);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let documents_width = ui.available_width() * (1.0 - TRANSCRIPT_WIDTH_FRACTION);
            egui::SidePanel::right("documents")
                .resizable(false)
                .exact_width(documents_width)
                .show_inside(ui, |ui| panels::show_documents(ui, self.state.documents()));
            egui::CentralPanel::default()
                .show_inside(ui, |ui| panels::show_transcript(ui, self.state.messages()));
        });

        if upload_clicked {
            self.pick_and_upload();
        }
        if submitted {
            self.submit_question();
        }

        ctx.request_repaint_after(UI_EVENT_POLL_INTERVAL);
    }
}
