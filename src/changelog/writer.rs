use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;

/// Prepends `entry` to the file at `path`, creating it when absent.
///
/// The file is rewritten in full; there is no recovery from a partial write.
pub fn prepend_to_file(path: &Path, entry: &str) -> Result<()> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    fs::write(path, format!("{}{}", entry, existing))?;
    Ok(())
}
