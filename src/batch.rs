//! Batch classification
//!
//! Candidates are collected from command-line arguments, standard input,
//! line-oriented text files and JSON arrays, then classified on a rayon
//! pool. Reports come back in input order.

use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::classifier::{MessageTable, Options, Outcome, classify_value};
use crate::core::constants::files;
use crate::core::error::{Result, UrlFormatError};

/// Source name used for values given directly as arguments
pub const ARGUMENT_SOURCE: &str = "<argument>";
/// Source name used for values read from standard input
pub const STDIN_SOURCE: &str = "<stdin>";

/// One value waiting to be classified, with where it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// `null` for an absent value, a string for a URL candidate
    pub value: Value,
    /// File path, or a marker for arguments and standard input
    pub source: String,
    /// Line number in a text file, or 1-based position in a JSON array
    pub line: Option<u64>,
}

impl Candidate {
    pub fn text(value: impl Into<String>, source: impl Into<String>, line: Option<u64>) -> Self {
        Self {
            value: Value::String(value.into()),
            source: source.into(),
            line,
        }
    }

    /// The value as shown to users: strings verbatim, anything else as JSON.
    pub fn display_value(&self) -> String {
        match &self.value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.source, line),
            None => write!(f, "{}", self.source),
        }
    }
}

/// A candidate together with its outcome
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub candidate: Candidate,
    pub outcome: Outcome,
}

impl Report {
    /// Message for this report's outcome.
    pub fn message<'a>(&self, table: &'a MessageTable) -> &'a str {
        table.message(self.outcome)
    }
}

/// Outcome counts for a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub valid: usize,
    pub rejected: usize,
    /// Counts per outcome, in priority order; outcomes never seen are omitted
    pub by_outcome: BTreeMap<Outcome, usize>,
}

impl Summary {
    pub fn all_valid(&self) -> bool {
        self.rejected == 0
    }
}

/// Turn command-line arguments into candidates; `-` pulls lines from `stdin`.
pub fn collect_from_args<R: BufRead>(args: &[String], stdin: R) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::with_capacity(args.len());
    let mut stdin = Some(stdin);
    for arg in args {
        if arg == files::STDIN_ARG {
            // Standard input can only be drained once
            if let Some(reader) = stdin.take() {
                candidates.extend(collect_from_lines(reader, STDIN_SOURCE)?);
            }
        } else {
            candidates.push(Candidate::text(arg.clone(), ARGUMENT_SOURCE, None));
        }
    }
    Ok(candidates)
}

/// Read one candidate per line, skipping empty lines and `#` comments.
///
/// Only the line ending is stripped; other surrounding whitespace is part of
/// the candidate.
pub fn collect_from_lines<R: BufRead>(reader: R, source: &str) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() || line.starts_with(files::COMMENT_MARKER) {
            continue;
        }
        candidates.push(Candidate::text(line, source, Some(index as u64 + 1)));
    }
    debug!("Read {} candidate(s) from {}", candidates.len(), source);
    Ok(candidates)
}

/// Read candidates from a text file.
pub fn collect_from_file(path: &Path) -> Result<Vec<Candidate>> {
    if !path.exists() {
        return Err(UrlFormatError::FileNotFound(path.display().to_string()));
    }
    let file = fs::File::open(path)?;
    collect_from_lines(std::io::BufReader::new(file), &path.display().to_string())
}

/// Read candidates from a JSON document holding an array of values.
pub fn collect_from_json_str(text: &str, source: &str) -> Result<Vec<Candidate>> {
    let document: Value = serde_json::from_str(text)?;
    let Value::Array(values) = document else {
        return Err(UrlFormatError::InvalidArgument(format!(
            "{source} must contain a JSON array of values"
        )));
    };
    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| Candidate {
            value,
            source: source.to_string(),
            line: Some(index as u64 + 1),
        })
        .collect())
}

/// Read candidates from a JSON file.
pub fn collect_from_json_file(path: &Path) -> Result<Vec<Candidate>> {
    if !path.exists() {
        return Err(UrlFormatError::FileNotFound(path.display().to_string()));
    }
    let text = fs::read_to_string(path)?;
    collect_from_json_str(&text, &path.display().to_string())
}

/// Read several files in parallel, keeping file order.
pub fn collect_from_files<F>(paths: &[PathBuf], read: F) -> Result<Vec<Candidate>>
where
    F: Fn(&Path) -> Result<Vec<Candidate>> + Sync,
{
    let per_file: Vec<Vec<Candidate>> = paths
        .par_iter()
        .map(|path| read(path.as_path()))
        .collect::<Result<_>>()?;

    let total: usize = per_file.iter().map(Vec::len).sum();
    let mut candidates = Vec::with_capacity(total);
    for file_candidates in per_file {
        candidates.extend(file_candidates);
    }
    Ok(candidates)
}

/// Classify every candidate on a pool of `threads` workers.
pub fn classify_all(
    candidates: Vec<Candidate>,
    options: &Options,
    threads: usize,
) -> Result<Vec<Report>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| UrlFormatError::InvalidArgument(format!("Could not start workers: {e}")))?;

    info!(
        "Classifying {} candidate(s) on {threads} thread(s)",
        candidates.len()
    );

    let reports = pool.install(|| {
        candidates
            .into_par_iter()
            .map(|candidate| {
                let outcome = classify_value(&candidate.value, options);
                Report { candidate, outcome }
            })
            .collect()
    });
    Ok(reports)
}

/// Count outcomes.
pub fn summarize(reports: &[Report]) -> Summary {
    let mut summary = Summary {
        total: reports.len(),
        ..Summary::default()
    };
    for report in reports {
        *summary.by_outcome.entry(report.outcome).or_insert(0) += 1;
        if report.outcome.is_valid() {
            summary.valid += 1;
        } else {
            summary.rejected += 1;
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_collect_from_args() -> Result<()> {
        let args = vec!["http://example.com".to_string(), "nope".to_string()];
        let candidates = collect_from_args(&args, Cursor::new(""))?;
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].source, ARGUMENT_SOURCE);
        assert_eq!(candidates[0].line, None);
        assert_eq!(candidates[1].display_value(), "nope");
        Ok(())
    }

    #[test]
    fn test_collect_from_args_reads_stdin_once() -> Result<()> {
        let args = vec![
            "-".to_string(),
            "http://a.com".to_string(),
            "-".to_string(),
        ];
        let stdin = Cursor::new("http://x.com\nhttp://y.com\n");
        let candidates = collect_from_args(&args, stdin)?;
        let values: Vec<String> = candidates.iter().map(Candidate::display_value).collect();
        assert_eq!(values, ["http://x.com", "http://y.com", "http://a.com"]);
        assert_eq!(candidates[1].source, STDIN_SOURCE);
        assert_eq!(candidates[1].line, Some(2));
        Ok(())
    }

    #[test]
    fn test_collect_from_lines_skips_comments_and_empty_lines() -> Result<()> {
        let text = "# header\nhttp://a.com\r\n\n  \nhttp://b.com/x y\n";
        let candidates = collect_from_lines(Cursor::new(text), "list.txt")?;
        let values: Vec<String> = candidates.iter().map(Candidate::display_value).collect();
        // Whitespace-only lines stay as blank candidates
        assert_eq!(values, ["http://a.com", "  ", "http://b.com/x y"]);
        assert_eq!(candidates[0].line, Some(2));
        assert_eq!(candidates[2].line, Some(5));
        Ok(())
    }

    #[test]
    fn test_collect_from_file_missing() {
        let result = collect_from_file(Path::new("/no/such/file.txt"));
        assert!(matches!(result, Err(UrlFormatError::FileNotFound(_))));
    }

    #[test]
    fn test_collect_from_json_str() -> Result<()> {
        let candidates =
            collect_from_json_str(r#"["http://a.com", null, 42, {"k": 1}]"#, "in.json")?;
        assert_eq!(candidates.len(), 4);
        assert_eq!(candidates[1].value, Value::Null);
        assert_eq!(candidates[2].display_value(), "42");
        assert_eq!(candidates[3].line, Some(4));
        Ok(())
    }

    #[test]
    fn test_collect_from_json_str_rejects_non_array() {
        let result = collect_from_json_str(r#"{"url": "http://a.com"}"#, "in.json");
        assert!(matches!(result, Err(UrlFormatError::InvalidArgument(_))));

        let result = collect_from_json_str("[", "in.json");
        assert!(matches!(result, Err(UrlFormatError::Json(_))));
    }

    #[test]
    fn test_collect_from_files_keeps_order() -> Result<()> {
        let mut first = tempfile::NamedTempFile::new()?;
        writeln!(first, "http://first.com")?;
        let mut second = tempfile::NamedTempFile::new()?;
        writeln!(second, "http://second.com\nhttp://third.com")?;

        let paths = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let candidates = collect_from_files(&paths, collect_from_file)?;
        let values: Vec<String> = candidates.iter().map(Candidate::display_value).collect();
        assert_eq!(
            values,
            ["http://first.com", "http://second.com", "http://third.com"]
        );
        Ok(())
    }

    #[test]
    fn test_classify_all_preserves_order() -> Result<()> {
        let candidates: Vec<Candidate> = (0..200)
            .map(|i| {
                let value = if i % 2 == 0 {
                    format!("http://host{i}.com")
                } else {
                    format!("ftp://host{i}.com")
                };
                Candidate::text(value, ARGUMENT_SOURCE, Some(i))
            })
            .collect();

        let reports = classify_all(candidates, &Options::default(), 4)?;
        assert_eq!(reports.len(), 200);
        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.candidate.line, Some(i as u64));
            let expected = if i % 2 == 0 {
                Outcome::ValidUrl
            } else {
                Outcome::InvalidScheme
            };
            assert_eq!(report.outcome, expected);
        }
        Ok(())
    }

    #[test]
    fn test_summarize() -> Result<()> {
        let candidates = vec![
            Candidate::text("http://a.com", ARGUMENT_SOURCE, None),
            Candidate::text("http://b.com", ARGUMENT_SOURCE, None),
            Candidate::text("", ARGUMENT_SOURCE, None),
            Candidate {
                value: Value::Bool(true),
                source: "x.json".to_string(),
                line: Some(1),
            },
            Candidate::text("http://a b.com", ARGUMENT_SOURCE, None),
        ];
        let reports = classify_all(candidates, &Options::default(), 2)?;
        let summary = summarize(&reports);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.valid, 2);
        assert_eq!(summary.rejected, 3);
        assert!(!summary.all_valid());
        assert_eq!(summary.by_outcome.get(&Outcome::NilOrBlankUrl), Some(&2));
        assert_eq!(summary.by_outcome.get(&Outcome::SpaceSymbol), Some(&1));
        assert_eq!(summary.by_outcome.get(&Outcome::LocalUrl), None);

        let order: Vec<Outcome> = summary.by_outcome.keys().copied().collect();
        assert_eq!(
            order,
            [Outcome::ValidUrl, Outcome::NilOrBlankUrl, Outcome::SpaceSymbol]
        );
        Ok(())
    }

    #[test]
    fn test_report_message_uses_table() {
        let report = Report {
            candidate: Candidate::text("http://10.0.0.1", ARGUMENT_SOURCE, None),
            outcome: Outcome::LocalUrl,
        };
        let table = MessageTable::default().with_message(Outcome::LocalUrl, "inside");
        assert_eq!(report.message(&table), "inside");
        assert_eq!(report.candidate.to_string(), ARGUMENT_SOURCE);
    }
}
