use std::{
    fs::File,
    io::{self, BufWriter, Read as _, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

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
    /// Write `value` as pretty JSON to `output_path`, or to stdout for `None`
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = match output_path {
            Some(path) => Output::open(path)?,
            None => Output::Stdout {
                writer: io::stdout().lock(),
            },
        };
        output.write_json(value)?;
        tracing::debug!(output = %output.display_path(), "report written");
        Ok(())
    }

    fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
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

/// Read the whole input text from a file, or from stdin for `None` or `-`
///
/// # Returns
///
/// A display name for the input together with its contents
pub fn read_input(path: Option<&Path>) -> anyhow::Result<(String, String)> {
    let mut text = String::new();
    match path {
        Some(path) if path != Path::new("-") => {
            File::open(path)
                .and_then(|mut file| file.read_to_string(&mut text))
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        _ => {
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read values from stdin")?;
            Ok(("stdin".to_string(), text))
        }
    }
}

/// Parse finite numbers separated by whitespace and/or commas
pub fn parse_values(text: &str) -> anyhow::Result<Vec<f64>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            let value = token
                .parse::<f64>()
                .with_context(|| format!("Invalid number '{token}' (value #{})", i + 1))?;
            anyhow::ensure!(
                value.is_finite(),
                "Invalid number '{token}' (value #{}): must be finite",
                i + 1
            );
            Ok(value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_json_to_file() {
        let path = std::env::temp_dir().join(format!("dicestat-{}.json", std::process::id()));
        Output::save_json(&serde_json::json!({ "count": 3 }), Some(path.clone())).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&text).unwrap(),
            serde_json::json!({ "count": 3 })
        );
    }

    #[test]
    fn test_save_json_bad_path() {
        let path = std::env::temp_dir().join("dicestat-missing-dir").join("out.json");
        let err = Output::save_json(&1, Some(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to create output file"), "{err}");
    }

    #[test]
    fn test_parse_values_separators() {
        let values = parse_values("1 2,3\n4.5,, -6\t7e1\n").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.5, -6.0, 70.0]);
    }

    #[test]
    fn test_parse_values_empty() {
        assert!(parse_values("  \n ,").unwrap().is_empty());
    }

    #[test]
    fn test_parse_values_invalid() {
        let err = parse_values("1 2 three").unwrap_err();
        assert!(err.to_string().contains("'three' (value #3)"), "{err}");
    }

    #[test]
    fn test_parse_values_non_finite() {
        assert!(parse_values("1 NaN").is_err());
        assert!(parse_values("inf 2").is_err());
    }
}
