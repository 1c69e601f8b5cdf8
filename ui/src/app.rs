use log::info;
use vowly_business::table::ViewMode;
use vowly_states::Time;

use crate::pages::{Page, Pages};
use crate::state::State;

pub struct VowlyAdminApp {
    pub state: State,
    page: Page,
    pub pages: Pages,
    waker_installed: bool,
}

impl VowlyAdminApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            page: Page::default(),
            pages: Pages::default(),
            waker_installed: false,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn open(&mut self, page: Page) {
        if self.page != page {
            info!("Opening {}", page.title());
            self.page = page;
        }
    }

    fn navigation(&mut self, ui: &mut egui::Ui) {
        for page in Page::ALL {
            let label = format!("{} {}", page.icon(), page.title());
            if ui.selectable_label(self.page == page, label).clicked() {
                self.open(page);
            }
        }
    }
}

impl eframe::App for VowlyAdminApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Finished API work wakes the UI up to apply its results.
        if !self.waker_installed {
            let egui_ctx = ctx.clone();
            self.state.ctx.set_waker(move || egui_ctx.request_repaint());
            self.waker_installed = true;
        }

        self.state.ctx.sync();
        self.state.ctx.state_mut::<Time>().tick();

        let narrow = ViewMode::for_width(ctx.content_rect().width()) == Some(ViewMode::Cards);

        if narrow {
            egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.strong("Vowly Admin");
                    ui.separator();
                    self.navigation(ui);
                });
            });
        } else {
            egui::SidePanel::left("navigation")
                .resizable(false)
                .exact_width(200.0)
                .show(ctx, |ui| {
                    ui.add_space(8.0);
                    ui.heading("Vowly Admin");
                    ui.separator();
                    ui.vertical(|ui| self.navigation(ui));
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.pages.show(self.page, &mut self.state.ctx, ui);
                });
        });
    }
}
