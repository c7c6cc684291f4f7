use std::fs;
use std::path::Path;

use initials_core::charmap;

pub fn charmap(input: &str, output: &str) {
    eprintln!("Reading {input}...");
    let count = die!(
        charmap::write_charmap(Path::new(input), Path::new(output)),
        "Error building character map: {}"
    );

    let file_size = fs::metadata(output).map(|m| m.len()).unwrap_or(0);
    eprintln!("Wrote {output} ({count} code points, {file_size} bytes)");
}
