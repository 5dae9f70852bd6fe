//! Menu building and rendering
//!
//! The menu is built once from the command table and kept as an immutable
//! value; the loop re-renders the same model each iteration rather than
//! rebuilding it.

use std::io;

use console::Term;

use crate::colors::ColorTheme;
use crate::config::CommandTable;

/// Ordered, pre-rendered list of display lines shown to the user.
#[derive(Debug, Clone)]
pub struct MenuModel {
    lines: Vec<String>,
}

impl MenuModel {
    /// Pure function of the table's contents and order.
    ///
    /// Layout: banner, blank, one `<index>) <name> -> <instruction>` line per
    /// entry in insertion order, `<len+1>) Exit`, trailing blank.
    pub fn build(table: &CommandTable) -> Self {
        let frame = ColorTheme::frame();
        let accent = ColorTheme::accent();
        let ok = ColorTheme::ok();
        let alert = ColorTheme::alert();
        let detail = ColorTheme::detail();

        let mut lines = vec![
            frame.apply_to("==============================").to_string(),
            accent.apply_to("     Command Line Menu").to_string(),
            frame.apply_to("==============================").to_string(),
            String::new(),
        ];

        for (position, entry) in table.iter().enumerate() {
            lines.push(format!(
                "{} {}{} {}",
                ok.apply_to(format!("{})", position + 1)),
                entry.name,
                frame.apply_to(" ->"),
                detail.apply_to(&entry.instruction),
            ));
        }

        lines.push(alert.apply_to(format!("{}) Exit", table.len() + 1)).to_string());
        lines.push(String::new());

        Self { lines }
    }

    /// Clear the visible terminal area and write the menu, one line each.
    pub fn render(&self, term: &Term) -> io::Result<()> {
        term.clear_screen()?;
        for line in &self.lines {
            term.write_line(line)?;
        }
        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_table() -> CommandTable {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.txt");
        std::fs::write(&path, "build=echo hello\nclean=echo bye\n").unwrap();
        CommandTable::load(&path).unwrap()
    }

    #[test]
    fn menu_has_one_option_per_entry_plus_exit() {
        let model = MenuModel::build(&sample_table());
        // 3 banner lines + blank + 2 entries + exit + trailing blank
        assert_eq!(model.lines().len(), 8);
        let stripped: Vec<String> = model
            .lines()
            .iter()
            .map(|l| console::strip_ansi_codes(l).to_string())
            .collect();
        assert_eq!(stripped[4], "1) build -> echo hello");
        assert_eq!(stripped[5], "2) clean -> echo bye");
        assert_eq!(stripped[6], "3) Exit");
    }

    #[test]
    fn exit_index_tracks_table_size() {
        let empty = MenuModel::build(&CommandTable::default());
        let stripped: Vec<String> = empty
            .lines()
            .iter()
            .map(|l| console::strip_ansi_codes(l).to_string())
            .collect();
        assert_eq!(stripped[4], "1) Exit");
    }
}
