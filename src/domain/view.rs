//! View-mode selection for the contact list.

use super::CodeTable;
use std::fmt;

/// How the front-end wants the contact list presented.
///
/// Replaces free-text option parsing: the selectable options are built once
/// from a [`CodeTable`] and carried as a tagged value from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Every contact, in current in-memory order.
    ShowAll,
    /// Every contact, sorted ascending by name (case-insensitive).
    SortByName,
    /// Only contacts whose phone number carries this calling code.
    FilterByCode(String),
}

impl ViewMode {
    /// The full option list a selector should offer: the two fixed modes
    /// followed by one filter entry per code-table row, in table order.
    pub fn options(table: &CodeTable) -> Vec<ViewMode> {
        let mut options = vec![ViewMode::ShowAll, ViewMode::SortByName];
        options.extend(
            table
                .entries()
                .map(|(code, _)| ViewMode::FilterByCode(code.to_string())),
        );
        options
    }

    /// Human-readable label for this option.
    ///
    /// Label construction lives with the view mode so the front-end never
    /// has to re-parse labels back into modes.
    pub fn label(&self, table: &CodeTable) -> String {
        match self {
            ViewMode::ShowAll => "Show all".to_string(),
            ViewMode::SortByName => "Sort by name".to_string(),
            ViewMode::FilterByCode(code) => {
                let country = table.country_name(code).unwrap_or("Unknown");
                format!("Code +{code} ({country})")
            }
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::ShowAll => write!(f, "show-all"),
            ViewMode::SortByName => write!(f, "sort-by-name"),
            ViewMode::FilterByCode(code) => write!(f, "filter-by-code(+{code})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_follow_table_order() {
        let table = CodeTable::default();
        let options = ViewMode::options(&table);
        assert_eq!(options[0], ViewMode::ShowAll);
        assert_eq!(options[1], ViewMode::SortByName);
        assert_eq!(options.len(), 2 + table.len());
        assert_eq!(options[2], ViewMode::FilterByCode("1".to_string()));
    }

    #[test]
    fn test_labels() {
        let table = CodeTable::default();
        let mode = ViewMode::FilterByCode("44".to_string());
        assert_eq!(mode.label(&table), "Code +44 (United Kingdom)");
        assert_eq!(ViewMode::ShowAll.label(&table), "Show all");
    }
}
