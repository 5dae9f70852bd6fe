//! Commands-file loading for bashmenu
//!
//! The file is plain UTF-8 text, one `name=instruction` pair per line.
//! Blank lines and `#` comments are skipped; a line without `=` is reported
//! and ignored so one typo never takes the whole menu down.

use std::fs;
use std::path::Path;

use log::warn;

use crate::error::MenuError;

/// One named shell command loaded from the commands file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: String,
    pub instruction: String,
}

/// Ordered table of command entries, read-only after load.
///
/// Insertion order is significant: it determines menu numbering. A duplicate
/// name later in the file updates the instruction in place without moving
/// the entry, so the menu position of a command is always where it first
/// appeared.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MenuError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    fn parse(content: &str) -> Self {
        let mut table = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once('=') {
                Some((name, instruction)) => {
                    table.insert(name.trim(), instruction.trim());
                }
                None => {
                    warn!("skipping invalid line: {}", line);
                    eprintln!("Skipping invalid line: {}", line);
                }
            }
        }

        table
    }

    fn insert(&mut self, name: &str, instruction: &str) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == name) {
            existing.instruction = instruction.to_string();
        } else {
            self.entries.push(CommandEntry {
                name: name.to_string(),
                instruction: instruction.to_string(),
            });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a zero-based position in insertion order.
    pub fn get(&self, index: usize) -> Option<&CommandEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_trimmed_pairs_in_order() {
        let table = CommandTable::parse("build = echo hello\n  clean=echo bye  \n");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0).unwrap().name, "build");
        assert_eq!(table.get(0).unwrap().instruction, "echo hello");
        assert_eq!(table.get(1).unwrap().name, "clean");
        assert_eq!(table.get(1).unwrap().instruction, "echo bye");
    }

    #[test]
    fn skips_blanks_and_comments() {
        let table = CommandTable::parse("\n# a comment\n   \nbuild=make\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0).unwrap().name, "build");
    }

    #[test]
    fn splits_on_first_equals_only() {
        let table = CommandTable::parse("a=b=c\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0).unwrap().name, "a");
        assert_eq!(table.get(0).unwrap().instruction, "b=c");
    }

    #[test]
    fn malformed_line_is_skipped_without_aborting() {
        let table = CommandTable::parse("no delimiter here\nbuild=make\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0).unwrap().name, "build");
    }

    #[test]
    fn duplicate_name_updates_in_place() {
        let table = CommandTable::parse("build=make\nclean=rm -rf out\nbuild=make -j4\n");
        assert_eq!(table.len(), 2);
        // position of first insertion is kept, instruction is the later one
        assert_eq!(table.get(0).unwrap().name, "build");
        assert_eq!(table.get(0).unwrap().instruction, "make -j4");
        assert_eq!(table.get(1).unwrap().name, "clean");
    }
}
