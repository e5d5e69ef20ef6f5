//! User actions offered by the menu.

use core::fmt;

/// Every action the shell can perform, in menu order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    ViewInventory,
    AddItem,
    UpdateItem,
    RemoveItem,
    SearchItem,
    ViewReports,
    Exit,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::ViewInventory,
        Action::AddItem,
        Action::UpdateItem,
        Action::RemoveItem,
        Action::SearchItem,
        Action::ViewReports,
        Action::Exit,
    ];

    /// Menu caption.
    pub fn label(self) -> &'static str {
        match self {
            Action::ViewInventory => "View Inventory",
            Action::AddItem => "Add New Item",
            Action::UpdateItem => "Update Item",
            Action::RemoveItem => "Remove Item",
            Action::SearchItem => "Search for Item",
            Action::ViewReports => "View Reports",
            Action::Exit => "Exit",
        }
    }

    /// 1-based position in the menu.
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|action| *action == self)
            .map_or(0, |idx| idx + 1)
    }

    /// Parse a menu selection: either the menu number or the caption
    /// (case-insensitive, surrounding whitespace ignored).
    pub fn parse(selection: &str) -> Option<Action> {
        let selection = selection.trim();

        if let Ok(number) = selection.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|idx| Self::ALL.get(idx))
                .copied();
        }

        Self::ALL
            .into_iter()
            .find(|action| action.label().eq_ignore_ascii_case(selection))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
