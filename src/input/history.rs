use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::ShellError;

/// Ordered record of every line the shell has executed, mirrored to a
/// file so it survives across sessions. The `history` builtin lists it
/// with 1-based indices, oldest first.
pub struct History {
    entries: Vec<String>,
    file_path: PathBuf,
    max_entries: usize,
}

impl History {
    pub fn new(file_path: PathBuf, max_entries: usize) -> Result<Self, ShellError> {
        let entries = load_entries(&file_path)?;
        Ok(History {
            entries,
            file_path,
            max_entries,
        })
    }

    pub fn add(&mut self, entry: &str) -> Result<(), ShellError> {
        let entry = entry.trim();
        if entry.is_empty() {
            return Ok(());
        }

        self.entries.push(entry.to_owned());
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }

        append_entry(&self.file_path, entry)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn load_entries(path: &PathBuf) -> Result<Vec<String>, ShellError> {
    let mut entries = Vec::new();

    if path.exists() {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                entries.push(line);
            }
        }
    }

    Ok(entries)
}

fn append_entry(path: &PathBuf, entry: &str) -> Result<(), ShellError> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;

    writeln!(file, "{}", entry)?;
    Ok(())
}
