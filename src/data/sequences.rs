use crate::error::Result;
use std::path::Path;

/// Sequences from FASTA text, or one sequence per line when no header is present.
/// Blank lines are skipped and bases are uppercased.
pub fn parse_sequences(text: &str) -> Vec<String> {
    let lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    if !text.trim_start().starts_with('>') {
        return lines.map(str::to_ascii_uppercase).collect();
    }

    let mut sequences = Vec::new();
    let mut current = String::new();
    for line in lines {
        if line.starts_with('>') {
            if !current.is_empty() {
                sequences.push(std::mem::take(&mut current));
            }
        } else {
            current.push_str(&line.to_ascii_uppercase());
        }
    }
    if !current.is_empty() {
        sequences.push(current);
    }
    sequences
}

pub fn read_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(&path)?;
    let sequences = parse_sequences(&text);
    log::info!(
        "Read {} sequences from {}",
        sequences.len(),
        path.as_ref().display()
    );
    Ok(sequences)
}
