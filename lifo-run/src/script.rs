use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Name and contents of a script.
pub struct Script {
    pub name: String,
    pub text: String,
}

impl Script {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read a script from a file, or from stdin if the path is "-".
    pub fn read(path: &Path) -> io::Result<Self> {
        if path == Path::new("-") {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(Self::new("<stdin>", text))
        } else {
            let text = std::fs::read_to_string(path)?;
            Ok(Self::new(path.display().to_string(), text))
        }
    }

    /// Return stdin if no files given, else lazily read the files.
    pub fn from_pathbufs(files: &[PathBuf]) -> Box<dyn Iterator<Item = io::Result<Self>> + '_> {
        if files.is_empty() {
            Box::new(std::iter::once(Self::read(Path::new("-"))))
        } else {
            Box::new(files.iter().map(|file| Self::read(file)))
        }
    }

    /// Lines together with their 1-based line numbers.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.text.lines().enumerate().map(|(i, line)| (i + 1, line))
    }
}

#[test]
fn lines() {
    let script = Script::new("test", "# setup\npush 1\n\n  push 2\npop\n");
    let lines: Vec<_> = script.lines().collect();
    assert_eq!(lines[1], (2, "push 1"));
    assert_eq!(lines[3], (4, "  push 2"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn missing_file() {
    let path = Path::new("this/script/does/not/exist.stack");
    let err = Script::read(path).err().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
