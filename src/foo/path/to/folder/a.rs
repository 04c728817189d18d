use std::io::{self, Write};

/// Writes `folder_a` on its own line.
pub fn folder_a(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "folder_a")
}
