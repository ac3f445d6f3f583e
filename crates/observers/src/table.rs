use std::io::{self, Write};

use emlib_core::{Renderer, Trajectory};
use thiserror::Error;

/// Errors that can occur while writing a trajectory table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("{found} column names given for a state of {expected} components")]
    NameCount { expected: usize, found: usize },

    #[error("failed to write table: {0}")]
    Io(#[from] io::Error),

    #[error("failed to write table record: {0}")]
    Csv(#[from] csv::Error),
}

/// Renders a trajectory as a tab-separated text table.
///
/// Each row is one sample: the time followed by every state component.
/// A header row is written when column names are set. Names containing a
/// tab, quote or line break are quoted so every row keeps the same number
/// of columns.
///
/// # Example
///
/// ```
/// use emlib_core::{Renderer, Sample, Trajectory};
/// use emlib_observers::TableRenderer;
///
/// let mut trajectory = Trajectory::new();
/// trajectory.push(Sample::new(0.0, [3.0, 2.0])).unwrap();
/// trajectory.push(Sample::new(1.0, [0.0, 6.0])).unwrap();
///
/// let mut table = TableRenderer::new(Vec::new()).names(["prey", "predator"]);
/// table.render(&trajectory).unwrap();
///
/// let text = String::from_utf8(table.into_inner()).unwrap();
/// assert_eq!(text, "t\tprey\tpredator\n0\t3\t2\n1\t0\t6\n");
/// ```
#[derive(Debug)]
pub struct TableRenderer<W> {
    writer: W,
    names: Option<Vec<String>>,
    precision: Option<usize>,
}

impl<W: Write> TableRenderer<W> {
    /// Creates a renderer that writes to `writer`, without a header.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            names: None,
            precision: None,
        }
    }

    /// Sets column names for the state components and enables the header.
    #[must_use]
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Writes every value with a fixed number of decimal places.
    #[must_use]
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Consumes the renderer and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => value.to_string(),
    }
}

impl<W: Write> Renderer for TableRenderer<W> {
    type Error = TableError;

    fn render(&mut self, trajectory: &Trajectory) -> Result<(), TableError> {
        let dimension = trajectory.dimension().unwrap_or(0);

        if let Some(names) = &self.names {
            if names.len() != dimension {
                return Err(TableError::NameCount {
                    expected: dimension,
                    found: names.len(),
                });
            }
        }

        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(&mut self.writer);

        if let Some(names) = &self.names {
            let mut header = Vec::with_capacity(dimension + 1);
            header.push("t");
            header.extend(names.iter().map(String::as_str));
            wtr.write_record(&header)?;
        }

        let mut record = Vec::with_capacity(dimension + 1);
        for sample in trajectory {
            record.clear();
            record.push(format_value(sample.time, self.precision));
            record.extend(
                sample
                    .state
                    .iter()
                    .map(|&value| format_value(value, self.precision)),
            );
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use emlib_core::Sample;

    fn trajectory() -> Trajectory {
        let mut trajectory = Trajectory::new();
        trajectory.push(Sample::new(0.0, [1.0, 0.5])).unwrap();
        trajectory.push(Sample::new(0.25, [1.1875, 0.3125])).unwrap();
        trajectory
    }

    fn render(table: TableRenderer<Vec<u8>>) -> String {
        let mut table = table;
        table.render(&trajectory()).unwrap();
        String::from_utf8(table.into_inner()).unwrap()
    }

    #[test]
    fn writes_rows_without_header() {
        let text = render(TableRenderer::new(Vec::new()));
        assert_eq!(text, "0\t1\t0.5\n0.25\t1.1875\t0.3125\n");
    }

    #[test]
    fn fixed_precision() {
        let text = render(TableRenderer::new(Vec::new()).precision(2));
        assert_eq!(text, "0.00\t1.00\t0.50\n0.25\t1.19\t0.31\n");
    }

    #[test]
    fn header_uses_names() {
        let text = render(TableRenderer::new(Vec::new()).names(["x", "y"]));
        assert!(text.starts_with("t\tx\ty\n"));
    }

    #[test]
    fn rejects_wrong_number_of_names() {
        let mut table = TableRenderer::new(Vec::new()).names(["only one"]);

        let err = table.render(&trajectory()).unwrap_err();

        assert!(matches!(
            err,
            TableError::NameCount {
                expected: 2,
                found: 1
            }
        ));
        assert!(table.into_inner().is_empty());
    }

    #[test]
    fn names_with_separators_are_quoted() {
        let text = render(TableRenderer::new(Vec::new()).names(["prey\tA", "pred\nator"]));

        assert!(text.starts_with("t\t\"prey\tA\"\t\"pred\nator\"\n"));

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_reader(text.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 3));
        assert_eq!(&rows[0][1], "prey\tA");
        assert_eq!(&rows[0][2], "pred\nator");
    }
}
