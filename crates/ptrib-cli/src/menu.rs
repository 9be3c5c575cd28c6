//! Interactive file picker.

use comfy_table::{Attribute, Cell, Table};

use ptrib_ingest::SpreadsheetFile;

use crate::summary::apply_table_style;

/// What the user picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Zero-based index into the listed files.
    File(usize),
    Refresh,
    Quit,
}

/// Parse one line of input against a menu listing `file_count` files.
///
/// Options are 1-based: files first, then refresh, then quit.
pub fn parse_choice(input: &str, file_count: usize) -> Option<MenuChoice> {
    let option: usize = input.trim().parse().ok()?;
    match option {
        0 => None,
        n if n <= file_count => Some(MenuChoice::File(n - 1)),
        n if n == file_count + 1 => Some(MenuChoice::Refresh),
        n if n == file_count + 2 => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Numbered option table; the newest file is bold.
pub fn menu_table(files: &[SpreadsheetFile]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    for (index, file) in files.iter().enumerate() {
        let name = if index == 0 {
            Cell::new(&file.name).add_attribute(Attribute::Bold)
        } else {
            Cell::new(&file.name)
        };
        table.add_row(vec![Cell::new(index + 1), name]);
    }
    table.add_row(vec![
        Cell::new(files.len() + 1),
        Cell::new("Atualizar lista de arquivos"),
    ]);
    table.add_row(vec![Cell::new(files.len() + 2), Cell::new("Sair")]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_options_are_one_based() {
        assert_eq!(parse_choice("1", 3), Some(MenuChoice::File(0)));
        assert_eq!(parse_choice(" 3\n", 3), Some(MenuChoice::File(2)));
    }

    #[test]
    fn trailing_options_refresh_and_quit() {
        assert_eq!(parse_choice("4", 3), Some(MenuChoice::Refresh));
        assert_eq!(parse_choice("5", 3), Some(MenuChoice::Quit));
        assert_eq!(parse_choice("1", 0), Some(MenuChoice::Refresh));
        assert_eq!(parse_choice("2", 0), Some(MenuChoice::Quit));
    }

    #[test]
    fn anything_else_is_rejected() {
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("6", 3), None);
        assert_eq!(parse_choice("dois", 3), None);
        assert_eq!(parse_choice("", 3), None);
        assert_eq!(parse_choice("-1", 3), None);
    }
}
