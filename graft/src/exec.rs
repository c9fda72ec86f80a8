//! External collaborator capabilities: subprocess execution, the dependency
//! tidy step, and textual import-path rewrites over generated files.

use std::path::Path;
use std::process::Command;

use eyre::{Result, eyre};

/// Runs an external command in a directory. The generation pipeline only
/// observes success or failure.
pub trait Executor {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<()>;
}

/// Executor backed by real subprocesses.
pub struct ShellExecutor;

impl Executor for ShellExecutor {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<()> {
        let status = Command::new(program).args(args).current_dir(dir).status()?;
        if !status.success() {
            return Err(eyre!("{} {} failed with {}", program, args.join(" "), status));
        }
        Ok(())
    }
}

/// Run the dependency tidy step in the generated module's directory.
pub fn tidy(dir: &Path, executor: &dyn Executor) -> Result<()> {
    executor.run("go", &["mod", "tidy"], dir)
}

/// Replace every occurrence of `old` with `new` in one generated file.
/// Used to point the backend imports at their final relative location.
pub fn replace_in_file(path: &Path, old: &str, new: &str) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    std::fs::write(path, content.replace(old, new))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct RecordingExecutor {
        calls: RefCell<Vec<String>>,
    }

    impl Executor for RecordingExecutor {
        fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(format!("{} {} in {}", program, args.join(" "), dir.display()));
            Ok(())
        }
    }

    #[test]
    fn tidy_runs_go_mod_tidy() {
        let executor = RecordingExecutor {
            calls: RefCell::new(Vec::new()),
        };
        tidy(Path::new("/tmp/resolvers"), &executor).unwrap();
        assert_eq!(executor.calls.borrow()[0], "go mod tidy in /tmp/resolvers");
    }

    #[test]
    fn replace_in_file_rewrites_paths() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("handler.go");
        std::fs::write(&path, "import pb \"example.com/backend/proto\"\n").unwrap();

        replace_in_file(&path, "example.com/backend", "../../projects/client").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "import pb \"../../projects/client/proto\"\n"
        );
    }
}
