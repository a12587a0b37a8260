//! Shared fixtures for the glossort integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Glossary with sections A and C out of order and section B absent
pub const UNSORTED_GLOSSARY: &str = "# English to Bulgarian glossary\n\
\n\
Intro paragraph | with a pipe.\n\
\n\
### 1-9\n\
Term | Part | Translation\n\
-----|------|------------\n\
2FA | noun | двуфакторна автентикация\n\
\n\
### A\n\
Term | Part | Translation\n\
-----|------|------------\n\
(an) array | noun | масив\n\
abort | verb | прекратявам\n\
(an) API | noun | приложен програмен интерфейс\n\
\n\
### C\n\
Term | Part | Translation\n\
-----|------|------------\n\
cache | noun | кеш\n\
(to) compile | verb | компилирам\n\
(a) callback | noun | обратно извикване\n\
\n\
Footer stays put.\n";

pub const SORTED_GLOSSARY: &str = "# English to Bulgarian glossary\n\
\n\
Intro paragraph | with a pipe.\n\
\n\
### 1-9\n\
Term | Part | Translation\n\
-----|------|------------\n\
2FA | noun | двуфакторна автентикация\n\
\n\
### A\n\
Term | Part | Translation\n\
-----|------|------------\n\
abort | verb | прекратявам\n\
(an) API | noun | приложен програмен интерфейс\n\
(an) array | noun | масив\n\
\n\
### C\n\
Term | Part | Translation\n\
-----|------|------------\n\
cache | noun | кеш\n\
(a) callback | noun | обратно извикване\n\
(to) compile | verb | компилирам\n\
\n\
Footer stays put.\n";

/// Temp dir that looks like a repository root, so config discovery stops there
pub fn repo_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git");
    dir
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}
