use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use pistat_dataset::Cohort;

/// Destination of a report or dataset dump: stdout or a file.
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
    /// Writes `value` as pretty JSON to `output_path`, or to stdout when no
    /// path is given.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or the JSON cannot be
    /// written
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    /// Opens the destination named on the command line.
    ///
    /// # Errors
    ///
    /// Returns error if `output_path` is given and cannot be created
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::create(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    /// Creates (or truncates) the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created
    pub fn create(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    /// Serializes `value` followed by a newline, then flushes.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or any write fails
    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.finish()
    }

    /// Flushes buffered output, logging the destination file if any.
    ///
    /// # Errors
    ///
    /// Returns error if the flush fails
    pub fn finish(&mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        if let Output::File { path, .. } = self {
            tracing::info!(path = %path.display(), "wrote output file");
        }
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

/// Reads a JSON file into `T`.
///
/// # Arguments
///
/// * `file_kind` - What the file holds, used in error messages
/// * `path` - Path to the JSON file
///
/// # Errors
///
/// Returns error if the file cannot be opened or parsed
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

/// Loads the cohort from a dataset file, or the built-in cohort when no
/// path is given.
///
/// # Errors
///
/// Returns error if the dataset file cannot be opened or parsed
pub fn load_cohort(dataset: Option<&Path>) -> anyhow::Result<Cohort> {
    match dataset {
        Some(path) => {
            let cohort: Cohort = read_json_file("dataset", path)?;
            tracing::info!(path = %path.display(), "loaded dataset");
            Ok(cohort)
        }
        None => {
            tracing::debug!("using the built-in cohort");
            Ok(Cohort::builtin())
        }
    }
}
