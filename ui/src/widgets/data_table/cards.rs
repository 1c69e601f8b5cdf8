//! Narrow-screen rendering: one card per row with a label/value line per
//! column. Headers are not shown, so sorting moves to a row of buttons.

use egui::{Frame, Grid, RichText, Ui};
use vowly_business::table::{Column, SortState, UNSORTED_INDICATOR};

use super::{RowAction, View, empty_state};

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

    sort_bar(ui, descriptors, &mut state.sort);

    if visible.is_empty() {
        empty_state(ui, empty_text);
        return None;
    }

    let labels: Vec<String> = descriptors.iter().map(Column::card_label).collect();
    let mut action = None;

    for &index in visible {
        let record = &rows[index];
        Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            Grid::new(id.with(("card", index)))
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for (label, renderer) in labels.iter().zip(renderers) {
                        ui.label(RichText::new(label).strong());
                        if let Some(emitted) = (renderer.cell)(ui, record) {
                            action.get_or_insert(RowAction {
                                index,
                                action: emitted,
                            });
                        }
                        ui.end_row();
                    }
                });
        });
        ui.add_space(4.0);
    }

    action
}

fn sort_bar<R>(ui: &mut Ui, descriptors: &[Column<R>], sort: &mut SortState) {
    if !descriptors.iter().any(Column::is_sortable) {
        return;
    }

    ui.horizontal_wrapped(|ui| {
        ui.label("Urutkan:");
        for descriptor in descriptors.iter().filter(|c| c.is_sortable()) {
            let key = descriptor.key();
            let indicator = sort
                .direction_for(key)
                .map(|direction| direction.indicator())
                .unwrap_or(UNSORTED_INDICATOR);
            let label = format!("{} {indicator}", descriptor.card_label());
            if ui.small_button(label).clicked() {
                sort.toggle(key);
            }
        }
    });
    ui.add_space(4.0);
}
