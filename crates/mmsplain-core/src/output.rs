//! Writing rendered documents to files and directories.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use mmsplain_wsp::{Document, Part};
use tracing::{debug, info};

use crate::error::Result;

/// Name of the header file in directory output.
pub const HEADER_FILE: &str = "header.txt";

/// Writes the plain-text rendering of `document` to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_plain_file(document: &Document, path: &Path, include_body: bool) -> Result<()> {
    let plain = document.to_plain(include_body);
    fs::write(path, &plain)?;
    info!(path = %path.display(), bytes = plain.len(), "wrote plain text");
    Ok(())
}

/// Writes `document` as a directory: the rendering without payloads in
/// [`HEADER_FILE`], and each part payload in its own file.
///
/// Returns the paths written, header first.
///
/// # Errors
///
/// Returns an error if the directory or any file cannot be written.
pub fn write_directory(document: &Document, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let header = dir.join(HEADER_FILE);
    fs::write(&header, document.to_plain(false))?;
    let mut written = vec![header];

    let mut taken = HashSet::from([HEADER_FILE.to_string()]);
    if document.has_body() {
        for (index, part) in document.body().iter().enumerate() {
            let name = unique_name(part_file_name(part, index), index, &mut taken);
            let path = dir.join(&name);
            fs::write(&path, &part.data)?;
            debug!(path = %path.display(), bytes = part.data_len(), "wrote part");
            written.push(path);
        }
    }

    info!(dir = %dir.display(), files = written.len(), "wrote directory output");
    Ok(written)
}

/// File name for a part: its `Content-Location` reduced to a bare file
/// name, or `part-<index>` if it has none.
#[must_use]
pub fn part_file_name(part: &Part, index: usize) -> String {
    part.header_value("Content-Location")
        .and_then(sanitize)
        .unwrap_or_else(|| format!("part-{index}"))
}

fn sanitize(location: &str) -> Option<String> {
    let base = location.rsplit(['/', '\\']).next().unwrap_or(location);
    let name: String = base
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '"' | '<' | '>' | ':' | '|' | '?' | '*'))
        .collect();
    let name = name.trim();

    match name {
        "" | "." | ".." => None,
        name => Some(name.to_string()),
    }
}

/// Suffixes `-<n>` before the extension while `name` is taken, with `n`
/// counting up from `index`.
fn unique_name(name: String, index: usize, taken: &mut HashSet<String>) -> String {
    let mut candidate = name.clone();
    let mut suffix = index;
    while taken.contains(&candidate) {
        candidate = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => format!("{stem}-{suffix}.{ext}"),
            _ => format!("{name}-{suffix}"),
        };
        suffix += 1;
    }
    taken.insert(candidate.clone());
    candidate
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mmsplain_wsp::Field;

    fn part(location: Option<&str>) -> Part {
        let mut header = vec![Field::new("Content-Type", "text/plain", 0..1)];
        if let Some(location) = location {
            header.push(Field::new("Content-Location", location, 1..2));
        }
        Part::new(header, b"x".to_vec())
    }

    #[test]
    fn test_part_file_name() {
        assert_eq!(part_file_name(&part(Some("image.jpg")), 0), "image.jpg");
        assert_eq!(part_file_name(&part(Some("../../etc/passwd")), 1), "passwd");
        assert_eq!(part_file_name(&part(Some("C:\\tmp\\a.txt")), 1), "a.txt");
        assert_eq!(part_file_name(&part(Some("\"<q>\"")), 1), "q");
        assert_eq!(part_file_name(&part(Some("dir/")), 2), "part-2");
        assert_eq!(part_file_name(&part(Some("..")), 3), "part-3");
        assert_eq!(part_file_name(&part(None), 4), "part-4");
    }

    #[test]
    fn test_unique_name() {
        let mut taken = HashSet::from([HEADER_FILE.to_string()]);
        assert_eq!(unique_name("a.txt".to_string(), 0, &mut taken), "a.txt");
        assert_eq!(unique_name("a.txt".to_string(), 1, &mut taken), "a-1.txt");
        assert_eq!(unique_name("README".to_string(), 2, &mut taken), "README");
        assert_eq!(unique_name("README".to_string(), 3, &mut taken), "README-3");
        assert_eq!(unique_name("header.txt".to_string(), 4, &mut taken), "header-4.txt");
    }

    #[test]
    fn test_unique_name_skips_suffixed_names_already_taken() {
        let mut taken = HashSet::from([HEADER_FILE.to_string()]);
        assert_eq!(unique_name("a.txt".to_string(), 0, &mut taken), "a.txt");
        assert_eq!(unique_name("a-2.txt".to_string(), 1, &mut taken), "a-2.txt");
        assert_eq!(unique_name("a.txt".to_string(), 2, &mut taken), "a-3.txt");
    }

    #[test]
    fn test_write_directory_keeps_every_payload() {
        let dir = std::env::temp_dir().join(format!("mmsplain-output-clash-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let mut doc = Document::new();
        doc.add_header_field(Field::new("Message-Type", "M-Retrieve-Conf", 0..2));
        doc.add_header_field(Field::new("Content-Type", "application/vnd.wap.multipart.mixed", 2..4));
        for (location, payload) in [("a.txt", "one"), ("a-2.txt", "two"), ("a.txt", "three")] {
            let header = vec![
                Field::new("Content-Type", "text/plain", 0..1),
                Field::new("Content-Location", location, 1..2),
            ];
            doc.add_part(Part::new(header, payload.as_bytes().to_vec()));
        }

        let written = write_directory(&doc, &dir).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, [HEADER_FILE, "a.txt", "a-2.txt", "a-3.txt"]);
        assert_eq!(fs::read(dir.join("a.txt")).unwrap(), b"one");
        assert_eq!(fs::read(dir.join("a-2.txt")).unwrap(), b"two");
        assert_eq!(fs::read(dir.join("a-3.txt")).unwrap(), b"three");

        fs::remove_dir_all(&dir).unwrap();
    }
}
