use std::{
    fs::File,
    io::{self, BufWriter, Read as _, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use connectn_engine::Board;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Reads a board in text form from `path`, or from stdin when `path` is `None`.
pub fn read_board<P>(path: Option<P>) -> anyhow::Result<Board>
where
    P: AsRef<Path>,
{
    let (text, source) = match path {
        Some(path) => {
            let path = path.as_ref();
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read board file: {}", path.display()))?;
            (text, path.display().to_string())
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read board from stdin")?;
            (text, "stdin".to_string())
        }
    };

    text.parse::<Board>()
        .with_context(|| format!("Failed to parse board from {source}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_board_from_file() {
        let path = std::env::temp_dir().join(format!("connectn-board-{}.txt", std::process::id()));
        std::fs::write(&path, ". . .\nX O .\n-----\n0 1 2\n").unwrap();
        let board = read_board(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!((board.rows(), board.cols()), (2, 3));
        assert_eq!(board.column_height(0), 1);
        assert_eq!(board.column_height(2), 0);
    }

    #[test]
    fn test_read_board_reports_missing_file() {
        let err = read_board(Some("/nonexistent/connectn-board.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read board file"));
    }
}
