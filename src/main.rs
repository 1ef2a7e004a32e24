mod clean;
mod cli;

use clap::Parser;
use clean::Outcome;
use cli::Cli;
use colored::Colorize;
use std::env;
use std::io::{self, Write};

fn print_status(results: &[(&str, Outcome)], out: &mut impl Write) -> io::Result<()> {
    for (target, outcome) in results {
        let Some(line) = outcome.status_line(target) else {
            continue;
        };
        match outcome {
            Outcome::Failed(_) => writeln!(out, "{}", line.red())?,
            _ => writeln!(out, "{}", line.green())?,
        }
    }
    Ok(())
}

fn sweep_current_dir() -> Result<(), String> {
    let cwd = env::current_dir().map_err(|e| format!("Failed to read current directory: {e}"))?;

    let results = clean::clean_targets(&cwd);
    print_status(&results, &mut io::stdout().lock())
        .map_err(|e| format!("Failed to write status: {e}"))
}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = sweep_current_dir() {
        eprintln!("Error: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn uncolored_output_is_one_line_per_deletion() {
        colored::control::set_override(false);

        let dir = TempDir::new().unwrap();
        let pkg = dir.path().join("node_modules").join("react");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("index.js"), "").unwrap();
        fs::write(dir.path().join("package-lock.json"), "{}").unwrap();

        let results = clean::clean_targets(dir.path());
        let mut out = Vec::new();
        print_status(&results, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Deleted directory: node_modules\nDeleted file: package-lock.json\n"
        );
    }

    #[test]
    fn failed_entry_is_printed_without_stopping() {
        colored::control::set_override(false);

        let results = [
            (
                "node_modules",
                Outcome::Failed(io::Error::new(io::ErrorKind::PermissionDenied, "access denied")),
            ),
            (".next", Outcome::Skipped),
            ("bun.lockb", Outcome::DeletedFile),
        ];
        let mut out = Vec::new();
        print_status(&results, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Failed to delete node_modules: access denied\nDeleted file: bun.lockb\n"
        );
    }
}
