//! Pagination controls.

use egui::Ui;
use vowly_business::PageMeta;
use vowly_business::table::Paginator;

/// Page change requested through [`server_pager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Prev,
    Next,
}

/// Prev/next controls for lists paged by the API.
pub fn server_pager(ui: &mut Ui, meta: Option<&PageMeta>, loading: bool) -> Option<PageRequest> {
    let meta = meta?;
    let mut request = None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(meta.has_prev() && !loading, egui::Button::new("◀ Sebelumnya"))
            .clicked()
        {
            request = Some(PageRequest::Prev);
        }
        ui.label(format!(
            "Halaman {} dari {} ({} data)",
            meta.current_page,
            meta.last_page.max(1),
            meta.total
        ));
        if ui
            .add_enabled(meta.has_next() && !loading, egui::Button::new("Berikutnya ▶"))
            .clicked()
        {
            request = Some(PageRequest::Next);
        }
    });

    request
}

/// Prev/next controls for lists paged in memory.
pub fn local_pager(ui: &mut Ui, paginator: &mut Paginator, len: usize) {
    paginator.clamp(len);
    if paginator.total_pages(len) <= 1 {
        return;
    }

    ui.horizontal(|ui| {
        if ui
            .add_enabled(paginator.has_prev(), egui::Button::new("◀ Sebelumnya"))
            .clicked()
        {
            paginator.prev();
        }
        ui.label(format!(
            "Halaman {} dari {}",
            paginator.page(),
            paginator.total_pages(len)
        ));
        if ui
            .add_enabled(paginator.has_next(len), egui::Button::new("Berikutnya ▶"))
            .clicked()
        {
            paginator.next(len);
        }
    });
}
