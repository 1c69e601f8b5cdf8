//! Desktop rendering: one header row and one body row per visible row.

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;

use super::column::HeaderCtx;
use super::{HEADER_HEIGHT, ROW_HEIGHT, RowAction, View, empty_state};

pub(super) fn show<R, A>(
    ui: &mut Ui,
    view: View<'_, R, A>,
    rows: &[R],
    visible: &[usize],
) -> Option<RowAction<A>> {
    let View {
        id,
        descriptors,
        renderers,
        state,
        empty_text,
    } = view;

    let mut action = None;
    let mut toggled = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt(id.with("desktop"))
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for renderer in renderers {
        builder = builder.column(renderer.width);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            for (descriptor, renderer) in descriptors.iter().zip(renderers) {
                header.col(|ui| {
                    let mut ctx = HeaderCtx::new(descriptor, state.sort.direction_for(descriptor.key()));
                    (renderer.header)(ui, &mut ctx);
                    if ctx.was_toggled() {
                        toggled = Some(ctx.key());
                    }
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, visible.len(), |mut row| {
                let index = visible[row.index()];
                let record = &rows[index];
                for renderer in renderers {
                    row.col(|ui| {
                        if let Some(emitted) = (renderer.cell)(ui, record) {
                            action.get_or_insert(RowAction {
                                index,
                                action: emitted,
                            });
                        }
                    });
                }
            });
        });

    // Tables have no column spans; the message sits under the header across
    // the full width instead.
    if visible.is_empty() {
        empty_state(ui, empty_text);
    }

    if let Some(key) = toggled {
        state.sort.toggle(key);
    }

    action
}
