// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run the termsift binary with the given arguments.
pub fn run_termsift(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_termsift"))
        .args(args)
        .output()
        .expect("Failed to execute termsift");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// A scratch directory holding a corpus, a dictionary, and an output path.
pub struct Fixture {
    pub dir: TempDir,
    pub corpus: PathBuf,
    pub dictionary: PathBuf,
    pub output: PathBuf,
}

impl Fixture {
    pub fn new(corpus: &str, dictionary: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let corpus_path = dir.path().join("corpus.csv");
        let dict_path = dir.path().join("keywords.json");
        let output_path = dir.path().join("candidates.csv");
        write_file(&corpus_path, corpus);
        write_file(&dict_path, dictionary);
        Self {
            dir,
            corpus: corpus_path,
            dictionary: dict_path,
            output: output_path,
        }
    }

    /// Positional arguments for invoking termsift on this fixture.
    pub fn args(&self) -> Vec<String> {
        vec![
            self.corpus.display().to_string(),
            self.dictionary.display().to_string(),
            self.output.display().to_string(),
        ]
    }

    /// Run termsift on this fixture with extra flags appended.
    pub fn run(&self, extra: &[&str]) -> (String, String, i32) {
        let mut args: Vec<String> = self.args();
        args.extend(extra.iter().map(|s| s.to_string()));
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        run_termsift(&arg_refs)
    }

    /// Output header line, panicking if no output file was produced.
    pub fn output_header(&self) -> String {
        let contents = std::fs::read_to_string(&self.output).expect("output file should exist");
        contents.lines().next().unwrap_or_default().to_string()
    }

    /// Output data rows (header excluded) as an order-independent set.
    pub fn output_rows(&self) -> BTreeSet<String> {
        let contents = std::fs::read_to_string(&self.output).expect("output file should exist");
        contents.lines().skip(1).map(str::to_string).collect()
    }
}

fn write_file(path: &Path, contents: &str) {
    let mut file = std::fs::File::create(path).expect("Failed to create fixture file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write fixture file");
}
