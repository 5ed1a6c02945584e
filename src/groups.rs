//! Group Table Utilities
//!
//! Helper functions for rendering item groups as tables.

use crate::models::Item;

/// Split a group's slots into rows of `columns` cells.
/// The last row may be shorter.
pub fn chunk_rows(slots: &[Option<Item>], columns: usize) -> Vec<Vec<Option<Item>>> {
    slots.chunks(columns.max(1)).map(|row| row.to_vec()).collect()
}

/// Text for one table cell; empty slots render blank
pub fn cell_text(slot: &Option<Item>) -> String {
    slot.as_ref().map(Item::display_label).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_item;

    #[test]
    fn test_chunk_rows_pairs() {
        let slots = vec![
            Some(make_item(1, "A", 0)),
            None,
            Some(make_item(3, "C", 2)),
        ];

        let rows = chunk_rows(&slots, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 1);
        assert_eq!(cell_text(&rows[0][0]), "A");
        assert_eq!(cell_text(&rows[0][1]), "");
        assert_eq!(cell_text(&rows[1][0]), "C");
    }

    #[test]
    fn test_chunk_rows_empty_group() {
        assert!(chunk_rows(&[], 2).is_empty());
    }

    #[test]
    fn test_cell_text_marks_deleted() {
        let mut item = make_item(1, "Retired", 0);
        item.deleted = true;
        assert_eq!(cell_text(&Some(item)), "Retired (deleted)");
    }
}
