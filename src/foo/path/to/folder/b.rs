use std::io::{self, Write};

pub fn folder_b(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "folder_b")
}
