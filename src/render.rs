//! Go source renderer for parsed documents.

use crate::error::{Error, Result};
use crate::model::Document;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the generated file inside the destination directory.
pub const OUTPUT_FILE: &str = "docs.go";

const GENERATED_MARKER: &str = "// Code generated by \"mdtogo\"; DO NOT EDIT.";

/// Render the complete contents of `docs.go`.
pub fn render(header: &str, package: &str, docs: &[Document]) -> String {
    let mut output = String::new();
    output.push_str(header);
    output.push_str("\n\n");
    output.push_str(GENERATED_MARKER);
    output.push('\n');
    output.push_str(&format!("package {}\n", package));

    for doc in docs {
        output.push('\n');
        output.push_str(&render_document(doc));
    }

    output
}

/// Declarations for one document, one `var` per non-empty field.
pub fn render_document(doc: &Document) -> String {
    let fields = [
        ("Short", &doc.short),
        ("Long", &doc.long),
        ("Examples", &doc.examples),
    ];
    let decls: Vec<String> = fields
        .iter()
        .filter(|(_, text)| !text.is_empty())
        .map(|(suffix, text)| format!("var {}{}={}", doc.name, suffix, raw_string(text)))
        .collect();

    let mut block = decls.join("\n");
    block.push('\n');
    block
}

/// Wrap `text` in a Go raw string literal.
///
/// Raw strings cannot contain a backtick, so each one closes the literal,
/// concatenates an interpreted "`", and reopens it.
pub fn raw_string(text: &str) -> String {
    format!("`{}`", text.replace('`', "` + \"`\" + `"))
}

/// Go package name for the destination directory: its base name.
pub fn package_name(dest_dir: &Path) -> Result<String> {
    let base = match dest_dir.file_name() {
        Some(name) => Some(name.to_os_string()),
        // "." or "..": use the directory it refers to
        None => dest_dir
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_os_string())),
    };
    base.map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| Error::PackageName {
            path: dest_dir.to_path_buf(),
        })
}

/// Write `text` to `<dest_dir>/docs.go`, creating the directory if needed.
pub fn write_output(dest_dir: &Path, text: &str) -> Result<PathBuf> {
    if let Err(e) = fs::create_dir_all(dest_dir) {
        log::debug!("could not create {}: {}", dest_dir.display(), e);
    }

    let path = dest_dir.join(OUTPUT_FILE);
    fs::write(&path, text).map_err(|source| Error::WriteOutput {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn doc(name: &str, short: &str, long: &str, examples: &str) -> Document {
        Document {
            name: name.to_string(),
            short: short.to_string(),
            long: long.to_string(),
            examples: examples.to_string(),
        }
    }

    #[test]
    fn renders_header_marker_and_package() {
        let out = render("// License", "docs", &[]);
        assert_eq!(
            out,
            "// License\n\n// Code generated by \"mdtogo\"; DO NOT EDIT.\npackage docs\n"
        );
    }

    #[test]
    fn empty_header() {
        let out = render("", "docs", &[]);
        assert!(out.starts_with("\n\n// Code generated"));
    }

    #[test]
    fn renders_all_fields_in_order() {
        let out = render(
            "",
            "generated",
            &[doc("Edit", "Edit a resource.", "Edit in place.", "kubectl edit pod/foo")],
        );
        assert!(out.ends_with(
            "package generated\n\n\
             var EditShort=`Edit a resource.`\n\
             var EditLong=`Edit in place.`\n\
             var EditExamples=`kubectl edit pod/foo`\n"
        ));
    }

    #[test]
    fn empty_fields_are_skipped() {
        let block = render_document(&doc("Get", "", "Get things.", ""));
        assert_eq!(block, "var GetLong=`Get things.`\n");
    }

    #[test]
    fn one_block_per_document() {
        let out = render(
            "",
            "p",
            &[doc("A", "a", "", ""), doc("B", "b", "", "")],
        );
        assert!(out.ends_with("package p\n\nvar AShort=`a`\n\nvar BShort=`b`\n"));
    }

    #[test]
    fn backticks_escaped() {
        assert_eq!(raw_string("run `kpt`"), "`run ` + \"`\" + `kpt` + \"`\" + ``");
        assert_eq!(raw_string("plain"), "`plain`");
    }

    #[test]
    fn package_from_base_name() {
        assert_eq!(package_name(Path::new("internal/docs/generated")).unwrap(), "generated");
        assert_eq!(package_name(Path::new("out/")).unwrap(), "out");
    }

    #[test]
    fn package_from_current_dir() {
        let expected = std::env::current_dir()
            .unwrap()
            .canonicalize()
            .unwrap()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert_eq!(package_name(Path::new(".")).unwrap(), expected);
    }

    #[test]
    fn root_has_no_package_name() {
        let err = package_name(Path::new("/")).unwrap_err();
        assert!(matches!(err, Error::PackageName { .. }), "got {err:?}");
    }

    #[test]
    fn write_creates_directory_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("nested").join("docs");
        let path = write_output(&dest, "first").unwrap();
        assert_eq!(path, dest.join(OUTPUT_FILE));
        write_output(&dest, "second").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }
}
