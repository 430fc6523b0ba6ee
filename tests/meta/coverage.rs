//! Checks that `tests/unit` mirrors `src` and that every unit file is compiled

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    /// Files that only declare modules or start a binary
    fn is_module_root(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("main.rs" | "lib.rs" | "mod.rs")
        )
    }

    /// Every `.rs` file below `root` other than module roots, relative to `root`
    fn leaf_modules(root: &Path) -> BTreeSet<PathBuf> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir)
                .unwrap_or_else(|error| panic!("cannot read {}: {error}", dir.display()));
            for entry in entries {
                let path = entry.expect("directory entry should be readable").path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") && !is_module_root(&path)
                {
                    let relative = path.strip_prefix(root).expect("entry lies under its root");
                    found.insert(relative.to_path_buf());
                }
            }
        }
        found
    }

    /// Names declared as `mod name;` or `pub mod name;`
    fn declared_modules(file: &Path) -> BTreeSet<String> {
        fs::read_to_string(file)
            .unwrap_or_default()
            .lines()
            .map(|line| line.trim().trim_start_matches("pub ").trim_start())
            .filter_map(|line| line.strip_prefix("mod ")?.strip_suffix(';'))
            .map(|name| name.trim().to_string())
            .collect()
    }

    fn listing(paths: &[String]) -> String {
        paths
            .iter()
            .map(|path| format!("  - {path}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests each source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/style/color.rs
    #[test]
    fn test_sources_have_unit_files() {
        let units = leaf_modules(Path::new(UNIT_ROOT));
        let untested: Vec<String> = leaf_modules(Path::new(SOURCE_ROOT))
            .difference(&units)
            .map(|path| format!("src/{} -> {UNIT_ROOT}/{}", path.display(), path.display()))
            .collect();

        assert!(
            untested.is_empty(),
            "Source files without unit tests:\n{}",
            listing(&untested)
        );
    }

    // Tests each unit test file still has a source file to test
    // Verified by adding tests/unit/io/stale.rs
    #[test]
    fn test_unit_files_have_sources() {
        let sources = leaf_modules(Path::new(SOURCE_ROOT));
        let orphaned: Vec<String> = leaf_modules(Path::new(UNIT_ROOT))
            .difference(&sources)
            .map(|path| format!("{UNIT_ROOT}/{}", path.display()))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files with no source file:\n{}",
            listing(&orphaned)
        );
    }

    // Tests every unit file and directory is declared by the harness or its mod.rs
    // Verified by removing `pub mod palette;` from tests/unit/shrink/mod.rs
    #[test]
    fn test_unit_files_are_declared() {
        let root = Path::new(UNIT_ROOT);
        let mut undeclared = BTreeSet::new();

        for relative in leaf_modules(root) {
            let mut parent = root.to_path_buf();
            for component in relative.with_extension("").components() {
                let name = component.as_os_str().to_string_lossy().into_owned();
                let declaring = if parent == root {
                    parent.join("main.rs")
                } else {
                    parent.join("mod.rs")
                };
                if !declared_modules(&declaring).contains(&name) {
                    undeclared.insert(format!("`mod {name};` in {}", declaring.display()));
                }
                parent.push(&name);
            }
        }

        let undeclared: Vec<String> = undeclared.into_iter().collect();
        assert!(
            undeclared.is_empty(),
            "Unit test files that are never compiled:\n{}",
            listing(&undeclared)
        );
    }

    // Tests every test file outside the harness roots defines at least one test
    // Verified by emptying tests/pipeline.rs
    #[test]
    fn test_test_files_contain_tests() {
        let root = Path::new("tests");
        let empty: Vec<String> = leaf_modules(root)
            .into_iter()
            .map(|relative| root.join(relative))
            .filter(|path| {
                !fs::read_to_string(path)
                    .unwrap_or_default()
                    .contains("#[test]")
            })
            .map(|path| path.display().to_string())
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            listing(&empty)
        );
    }
}
