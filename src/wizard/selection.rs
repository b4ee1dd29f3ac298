//! Selection-card model
//!
//! A card group is a set of display items the user picks from. Groups are
//! either single-select (at most one selected card) or multi-select (any
//! subset). This is the only way the wizard reads user intent out of the
//! interaction layer.

use crate::catalog::CardSpec;

/// Selection behaviour of a card group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// At most one card selected at a time
    Single,
    /// Any subset of cards may be selected
    Multi,
}

/// A clickable item representing one discrete choice value
#[derive(Debug, Clone)]
pub struct SelectionCard {
    /// Value recorded into the draft when selected
    pub value: String,
    /// Short label shown on the card
    pub label: String,
    /// One-line description shown under the label
    pub blurb: String,
    /// Whether the card is currently selected
    pub selected: bool,
}

impl From<&CardSpec> for SelectionCard {
    fn from(spec: &CardSpec) -> Self {
        Self {
            value: spec.value.to_string(),
            label: spec.label.to_string(),
            blurb: spec.blurb.to_string(),
            selected: false,
        }
    }
}

/// A grouping of selection cards with a cursor for keyboard navigation
#[derive(Debug, Clone)]
pub struct CardGroup {
    /// Cards in display order
    pub cards: Vec<SelectionCard>,
    /// Selection behaviour
    pub mode: SelectionMode,
    /// Card the keyboard cursor is on
    pub cursor: usize,
}

impl CardGroup {
    /// Materialize a group from static catalog specs
    pub fn from_specs(specs: &[CardSpec], mode: SelectionMode) -> Self {
        Self {
            cards: specs.iter().map(SelectionCard::from).collect(),
            mode,
            cursor: 0,
        }
    }

    /// Number of cards in the group
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the group has no cards (an inert step)
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Select the card at `index`.
    ///
    /// Single-select deselects every other card in the group; multi-select
    /// toggles only the chosen card. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.cards.len() {
            return;
        }

        match self.mode {
            SelectionMode::Single => {
                for (i, card) in self.cards.iter_mut().enumerate() {
                    card.selected = i == index;
                }
            }
            SelectionMode::Multi => {
                self.cards[index].selected = !self.cards[index].selected;
            }
        }
    }

    /// Select the card under the cursor
    pub fn select_at_cursor(&mut self) {
        self.select(self.cursor);
    }

    /// Read the single selected value, or an empty string if none
    pub fn read_single(&self) -> String {
        self.cards
            .iter()
            .find(|card| card.selected)
            .map(|card| card.value.clone())
            .unwrap_or_default()
    }

    /// Read all selected values in display order
    pub fn read_multi(&self) -> Vec<String> {
        self.cards
            .iter()
            .filter(|card| card.selected)
            .map(|card| card.value.clone())
            .collect()
    }

    /// Clear every selection and reset the cursor
    pub fn clear(&mut self) {
        for card in &mut self.cards {
            card.selected = false;
        }
        self.cursor = 0;
    }

    /// Pre-select the card holding `value`, if present
    pub fn preselect(&mut self, value: &str) {
        if let Some(index) = self.cards.iter().position(|card| card.value == value) {
            self.select(index);
        }
    }

    /// Move the cursor up one row in a grid of `columns` columns
    pub fn cursor_up(&mut self, columns: usize) {
        let columns = columns.max(1);
        if self.cursor >= columns {
            self.cursor -= columns;
        }
    }

    /// Move the cursor down one row in a grid of `columns` columns
    pub fn cursor_down(&mut self, columns: usize) {
        let columns = columns.max(1);
        if self.cursor + columns < self.cards.len() {
            self.cursor += columns;
        }
    }

    /// Move the cursor left one card
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor right one card
    pub fn cursor_right(&mut self) {
        if self.cursor + 1 < self.cards.len() {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(mode: SelectionMode) -> CardGroup {
        static SPECS: &[CardSpec] = &[
            CardSpec { value: "a", label: "A", blurb: "" },
            CardSpec { value: "b", label: "B", blurb: "" },
            CardSpec { value: "c", label: "C", blurb: "" },
            CardSpec { value: "d", label: "D", blurb: "" },
        ];
        CardGroup::from_specs(SPECS, mode)
    }

    fn selected_count(group: &CardGroup) -> usize {
        group.cards.iter().filter(|c| c.selected).count()
    }

    #[test]
    fn test_single_select_at_most_one() {
        let mut g = group(SelectionMode::Single);

        // Any sequence of clicks leaves at most one card selected
        for index in [0, 2, 1, 1, 3, 0] {
            g.select(index);
            assert!(selected_count(&g) <= 1);
        }
        assert_eq!(g.read_single(), "a");
    }

    #[test]
    fn test_single_select_replaces_previous() {
        let mut g = group(SelectionMode::Single);
        g.select(1);
        g.select(3);
        assert_eq!(g.read_single(), "d");
        assert!(!g.cards[1].selected);
    }

    #[test]
    fn test_multi_select_is_odd_click_set() {
        let mut g = group(SelectionMode::Multi);

        // a: 1 click, b: 2 clicks, c: 3 clicks, d: 0 clicks
        g.select(0);
        g.select(1);
        g.select(1);
        g.select(2);
        g.select(2);
        g.select(2);

        assert_eq!(g.read_multi(), vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_read_multi_preserves_display_order() {
        let mut g = group(SelectionMode::Multi);
        g.select(3);
        g.select(0);
        assert_eq!(g.read_multi(), vec!["a".to_string(), "d".to_string()]);
    }

    #[test]
    fn test_read_empty_group() {
        let empty = CardGroup::from_specs(&[], SelectionMode::Single);
        assert_eq!(empty.read_single(), "");

        let empty_multi = CardGroup::from_specs(&[], SelectionMode::Multi);
        assert_eq!(empty_multi.read_multi(), Vec::<String>::new());
    }

    #[test]
    fn test_read_with_no_selection() {
        let g = group(SelectionMode::Single);
        assert_eq!(g.read_single(), "");
        assert!(group(SelectionMode::Multi).read_multi().is_empty());
    }

    #[test]
    fn test_out_of_range_select_ignored() {
        let mut g = group(SelectionMode::Single);
        g.select(42);
        assert_eq!(g.read_single(), "");
    }

    #[test]
    fn test_clear() {
        let mut g = group(SelectionMode::Multi);
        g.select(0);
        g.select(2);
        g.cursor = 2;
        g.clear();
        assert!(g.read_multi().is_empty());
        assert_eq!(g.cursor, 0);
    }

    #[test]
    fn test_preselect() {
        let mut g = group(SelectionMode::Single);
        g.preselect("c");
        assert_eq!(g.read_single(), "c");
        g.preselect("missing");
        assert_eq!(g.read_single(), "c");
    }

    #[test]
    fn test_cursor_grid_movement() {
        let mut g = group(SelectionMode::Single);

        // 2-column grid: a b / c d
        g.cursor_right();
        assert_eq!(g.cursor, 1);
        g.cursor_down(2);
        assert_eq!(g.cursor, 3);
        g.cursor_left();
        assert_eq!(g.cursor, 2);
        g.cursor_up(2);
        assert_eq!(g.cursor, 0);

        // Movement clamps at the edges
        g.cursor_up(2);
        g.cursor_left();
        assert_eq!(g.cursor, 0);
    }
}
