//! Sorting and filtering over an in-memory row slice.
//!
//! The engine never copies rows: it returns indices into the caller's slice,
//! so the UI can render the original records in the computed order.

use log::debug;
use ustr::Ustr;

use super::column::{Column, RowRecord};
use super::value::CellValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Indicator for a sortable column that is not the active one.
pub const UNSORTED_INDICATOR: &str = "⬍";

/// At most one column is sorted at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(Ustr, SortDirection)>,
}

impl SortState {
    /// Cycles the column through ascending, descending and unsorted.
    /// Switching to another column starts it at ascending.
    pub fn toggle(&mut self, key: Ustr) {
        self.active = match self.active {
            Some((current, SortDirection::Ascending)) if current == key => {
                Some((key, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == key => None,
            _ => Some((key, SortDirection::Ascending)),
        };
        debug!("Sort toggled on {key}: {:?}", self.active.map(|(_, d)| d));
    }

    pub fn set(&mut self, key: Ustr, direction: SortDirection) {
        self.active = Some((key, direction));
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<(Ustr, SortDirection)> {
        self.active
    }

    pub fn direction_for(&self, key: Ustr) -> Option<SortDirection> {
        self.active
            .filter(|(current, _)| *current == key)
            .map(|(_, direction)| direction)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    #[default]
    Insensitive,
}

/// Free-text filter bound to one search column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    column: Ustr,
    value: String,
    case: CaseSensitivity,
}

impl FilterState {
    pub fn new(column: &str) -> Self {
        Self {
            column: Ustr::from(column),
            value: String::new(),
            case: CaseSensitivity::default(),
        }
    }

    pub fn with_case(mut self, case: CaseSensitivity) -> Self {
        self.case = case;
        self
    }

    pub fn column(&self) -> Ustr {
        self.column
    }

    pub fn case(&self) -> CaseSensitivity {
        self.case
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Direct access for text inputs.
    pub fn value_mut(&mut self) -> &mut String {
        &mut self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.value.is_empty()
    }

    pub fn matches(&self, value: &CellValue) -> bool {
        value.contains(&self.value, self.case)
    }
}

/// Sort and filter state owned by one table instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub sort: SortState,
    pub filter: FilterState,
}

impl TableState {
    pub fn new(search_column: &str) -> Self {
        Self {
            sort: SortState::default(),
            filter: FilterState::new(search_column),
        }
    }

    pub fn with_case(mut self, case: CaseSensitivity) -> Self {
        self.filter = self.filter.with_case(case);
        self
    }
}

/// Indices of the rows to render, filtered then sorted.
///
/// The search column is looked up among `columns` first; when it is not one
/// of them the row is queried directly by key. A display-only search column
/// filters nothing. Descending order is the exact reverse of ascending.
pub fn visible_rows<R: RowRecord>(rows: &[R], columns: &[Column<R>], state: &TableState) -> Vec<usize> {
    let mut indices: Vec<usize> = if state.filter.is_active() {
        let search = state.filter.column();
        let column = columns.iter().find(|column| column.key() == search);

        match column {
            Some(column) if !column.is_filterable() => (0..rows.len()).collect(),
            Some(column) => (0..rows.len())
                .filter(|&i| {
                    column
                        .value(&rows[i])
                        .is_some_and(|value| state.filter.matches(&value))
                })
                .collect(),
            None => (0..rows.len())
                .filter(|&i| state.filter.matches(&rows[i].field(&search)))
                .collect(),
        }
    } else {
        (0..rows.len()).collect()
    };

    let Some((key, direction)) = state.sort.active() else {
        return indices;
    };
    let Some(column) = columns
        .iter()
        .find(|column| column.key() == key && column.is_sortable())
    else {
        return indices;
    };

    let mut keyed: Vec<(usize, CellValue)> = indices
        .drain(..)
        .map(|i| (i, column.value(&rows[i]).unwrap_or_default()))
        .collect();
    keyed.sort_by(|(_, a), (_, b)| a.natural_cmp(b));

    let mut sorted: Vec<usize> = keyed.into_iter().map(|(i, _)| i).collect();
    if direction == SortDirection::Descending {
        sorted.reverse();
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Invitation {
        id: i64,
        name: String,
        price: i64,
    }

    impl RowRecord for Invitation {
        fn field(&self, key: &str) -> CellValue {
            match key {
                "id" => self.id.into(),
                "name" => self.name.as_str().into(),
                "price" => self.price.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn row(id: i64, name: &str, price: i64) -> Invitation {
        Invitation {
            id,
            name: name.to_string(),
            price,
        }
    }

    fn columns() -> Vec<Column<Invitation>> {
        vec![
            Column::field("id").header("ID"),
            Column::field("name").header("Nama"),
            Column::field("price").header("Harga"),
            Column::display("actions"),
        ]
    }

    fn catalog() -> Vec<Invitation> {
        vec![
            row(1, "Undangan Rustic", 150_000),
            row(2, "undangan minimalis", 90_000),
            row(3, "Kartu Ucapan", 25_000),
            row(4, "Souvenir Kayu", 90_000),
            row(5, "UNDANGAN Floral", 175_000),
        ]
    }

    #[test]
    fn filter_returns_exactly_matching_rows_case_insensitive() {
        let rows = catalog();
        let mut state = TableState::new("name");

        for needle in ["undangan", "U", "kayu", "zzz", "AN"] {
            state.filter.set_value(needle);
            let expected: Vec<usize> = rows
                .iter()
                .enumerate()
                .filter(|(_, r)| r.name.to_lowercase().contains(&needle.to_lowercase()))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(visible_rows(&rows, &columns(), &state), expected, "needle {needle}");
        }
    }

    #[test]
    fn filter_returns_exactly_matching_rows_case_sensitive() {
        let rows = catalog();
        let mut state = TableState::new("name").with_case(CaseSensitivity::Sensitive);

        for needle in ["Undangan", "undangan", "UNDANGAN", "a"] {
            state.filter.set_value(needle);
            let expected: Vec<usize> = rows
                .iter()
                .enumerate()
                .filter(|(_, r)| r.name.contains(needle))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(visible_rows(&rows, &columns(), &state), expected, "needle {needle}");
        }
    }

    #[test]
    fn descending_is_reverse_of_ascending() {
        let rows = catalog();
        let price = Ustr::from("price");

        for needle in ["", "undangan", "o"] {
            let mut state = TableState::new("name");
            state.filter.set_value(needle);

            state.sort.toggle(price);
            let ascending = visible_rows(&rows, &columns(), &state);
            state.sort.toggle(price);
            let mut descending = visible_rows(&rows, &columns(), &state);

            descending.reverse();
            assert_eq!(ascending, descending, "needle {needle:?}");
        }
    }

    #[test]
    fn sort_orders_naturally() {
        let rows = catalog();
        let mut state = TableState::new("name");
        state.sort.set(Ustr::from("price"), SortDirection::Ascending);

        let prices: Vec<i64> = visible_rows(&rows, &columns(), &state)
            .into_iter()
            .map(|i| rows[i].price)
            .collect();
        assert_eq!(prices, vec![25_000, 90_000, 90_000, 150_000, 175_000]);
    }

    #[test]
    fn toggle_cycles_back_to_original_order() {
        let rows = catalog();
        let name = Ustr::from("name");
        let mut state = TableState::new("name");

        state.sort.toggle(name);
        assert_eq!(state.sort.direction_for(name), Some(SortDirection::Ascending));
        state.sort.toggle(name);
        assert_eq!(state.sort.direction_for(name), Some(SortDirection::Descending));
        state.sort.toggle(name);
        assert_eq!(state.sort.active(), None);

        assert_eq!(visible_rows(&rows, &columns(), &state), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn toggling_another_column_starts_ascending() {
        let mut sort = SortState::default();
        sort.toggle(Ustr::from("name"));
        sort.toggle(Ustr::from("name"));
        sort.toggle(Ustr::from("price"));

        assert_eq!(
            sort.active(),
            Some((Ustr::from("price"), SortDirection::Ascending))
        );
        assert_eq!(sort.direction_for(Ustr::from("name")), None);
    }

    #[test]
    fn display_columns_are_ignored_for_sort_and_filter() {
        let rows = catalog();
        let mut state = TableState::new("actions");
        state.filter.set_value("whatever");
        state.sort.set(Ustr::from("actions"), SortDirection::Descending);

        assert_eq!(visible_rows(&rows, &columns(), &state), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn search_column_outside_columns_uses_field_lookup() {
        let rows = catalog();
        let columns = vec![Column::<Invitation>::field("id")];
        let mut state = TableState::new("name");
        state.filter.set_value("kartu");

        assert_eq!(visible_rows(&rows, &columns, &state), vec![2]);
    }

    #[test]
    fn invitation_search_scenario() {
        let rows = vec![row(1, "Undangan A", 0), row(2, "Undangan B", 0)];
        let mut state = TableState::new("name");

        state.filter.set_value("a");
        assert_eq!(visible_rows(&rows, &columns(), &state), vec![0, 1]);

        state.filter.set_value("Undangan B");
        let only: Vec<i64> = visible_rows(&rows, &columns(), &state)
            .into_iter()
            .map(|i| rows[i].id)
            .collect();
        assert_eq!(only, vec![2]);

        state.filter.clear();
        assert_eq!(visible_rows(&rows, &columns(), &state), vec![0, 1]);
    }

    #[test]
    fn empty_rows_are_valid() {
        let mut state = TableState::new("name");
        state.filter.set_value("a");
        state.sort.toggle(Ustr::from("name"));
        assert!(visible_rows::<Invitation>(&[], &columns(), &state).is_empty());
    }
}
