//! JSONL journal on disk with a SHA-256 hash chain.
//!
//! - Line 1: header with `format_version`, `build_id`, `seed`.
//! - Lines 2+: one record per applied tick or action, each carrying
//!   `prev_sha256_hex` and `sha256_hex`.
//!
//! `tick_boundary` is the simulation tick a record applies at. Tick records
//! advance it by one; an action record's boundary must equal its own `tick`.
//!
//! Every append is flushed. Loading stops at the first line whose JSON shape,
//! sequence number, tick boundary, or chain link does not check out.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::journal::{InputJournal, InputPayload, InputRecord, JOURNAL_FORMAT_VERSION};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
struct FileHeader {
    format_version: u16,
    build_id: String,
    seed: String,
}

/// Canonical hash input, concatenated with `prev_sha256_hex`.
#[derive(Serialize)]
struct RecordBody<'a> {
    seq: u64,
    tick_boundary: u64,
    payload: &'a InputPayload,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct FileRecord {
    seq: u64,
    tick_boundary: u64,
    payload: InputPayload,
    prev_sha256_hex: String,
    sha256_hex: String,
}

const INITIAL_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// `hex(SHA-256(body_json || prev_sha256_hex))`
fn compute_record_sha256(body_json: &str, prev_sha256_hex: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body_json.as_bytes());
    hasher.update(prev_sha256_hex.as_bytes());
    let result = hasher.finalize();
    format!("{result:064x}")
}

pub struct JournalWriter {
    writer: BufWriter<File>,
    last_sha256_hex: String,
    next_seq: u64,
}

impl JournalWriter {
    /// Creates the file and writes the header line.
    pub fn create(path: &Path, seed: &str, build_id: &str) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let header = FileHeader {
            format_version: JOURNAL_FORMAT_VERSION,
            build_id: build_id.to_string(),
            seed: seed.to_string(),
        };
        let header_json = serde_json::to_string(&header).map_err(io::Error::other)?;
        writeln!(writer, "{header_json}")?;
        writer.flush()?;

        Ok(Self { writer, last_sha256_hex: INITIAL_HASH.to_string(), next_seq: 0 })
    }

    /// Continues an existing file; chain tip and sequence come from `LoadedJournal`.
    pub fn resume(path: &Path, last_sha256_hex: String, next_seq: u64) -> io::Result<Self> {
        let file = OpenOptions::new().append(true).open(path)?;
        let writer = BufWriter::new(file);
        Ok(Self { writer, last_sha256_hex, next_seq })
    }

    pub fn append(&mut self, tick_boundary: u64, payload: &InputPayload) -> io::Result<()> {
        if let InputPayload::Action { tick, .. } = payload
            && *tick != tick_boundary
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("action for tick {tick} written at boundary {tick_boundary}"),
            ));
        }
        let body = RecordBody { seq: self.next_seq, tick_boundary, payload };
        let body_json = serde_json::to_string(&body).map_err(io::Error::other)?;
        let sha256_hex = compute_record_sha256(&body_json, &self.last_sha256_hex);

        let record = FileRecord {
            seq: self.next_seq,
            tick_boundary,
            payload: payload.clone(),
            prev_sha256_hex: self.last_sha256_hex.clone(),
            sha256_hex: sha256_hex.clone(),
        };

        let record_json = serde_json::to_string(&record).map_err(io::Error::other)?;
        writeln!(self.writer, "{record_json}")?;
        self.writer.flush()?;

        self.last_sha256_hex = sha256_hex;
        self.next_seq += 1;

        Ok(())
    }
}

/// Writes a whole in-memory journal to `path`, replaying its tick boundaries.
pub fn write_journal_to_file(path: &Path, journal: &InputJournal) -> io::Result<()> {
    let mut writer = JournalWriter::create(path, &journal.seed, &journal.build_id)?;
    let mut tick = 0;
    for record in &journal.records {
        match &record.payload {
            InputPayload::Tick { .. } => {
                writer.append(tick, &record.payload)?;
                tick += 1;
            }
            InputPayload::Action { tick: action_tick, .. } => {
                writer.append(*action_tick, &record.payload)?;
            }
        }
    }
    Ok(())
}

#[derive(Debug)]
pub struct LoadedJournal {
    pub journal: InputJournal,
    /// Hash of the last valid record, or the initial hash when there are none.
    pub last_sha256_hex: String,
    pub next_seq: u64,
    /// Tick boundary the next appended record applies at.
    pub next_tick_boundary: u64,
}

#[derive(Debug, Error)]
pub enum JournalLoadError {
    #[error("journal I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("journal file is empty")]
    EmptyFile,
    #[error("invalid journal header at line {line}: {message}")]
    InvalidHeader { line: usize, message: String },
    #[error("invalid journal record at line {line}: {message}")]
    InvalidRecord { line: usize, message: String },
    /// The file ended without a trailing newline.
    #[error("incomplete journal line at line {line}")]
    IncompleteLine { line: usize },
    #[error("SHA-256 hash chain broken at line {line}")]
    HashChainBroken { line: usize },
    #[error("tick boundary at line {line}: expected {expected}, found {found}")]
    TickBoundaryMismatch { line: usize, expected: u64, found: u64 },
}

/// Checks a record's boundary against the running tick and returns the tick
/// the following record applies at.
fn check_tick_boundary(
    line: usize,
    expected: u64,
    record: &FileRecord,
) -> Result<u64, JournalLoadError> {
    let found = match &record.payload {
        InputPayload::Action { tick, .. } if *tick != record.tick_boundary => *tick,
        _ => record.tick_boundary,
    };
    if found != expected {
        return Err(JournalLoadError::TickBoundaryMismatch { line, expected, found });
    }
    Ok(match record.payload {
        InputPayload::Tick { .. } => expected + 1,
        InputPayload::Action { .. } => expected,
    })
}

pub fn load_journal_from_file(path: &Path) -> Result<LoadedJournal, JournalLoadError> {
    let content = fs::read_to_string(path)?;
    if content.is_empty() {
        return Err(JournalLoadError::EmptyFile);
    }
    let has_trailing_newline = content.ends_with('\n');
    let lines: Vec<&str> = content.lines().collect();
    if lines.is_empty() {
        return Err(JournalLoadError::EmptyFile);
    }
    if !has_trailing_newline {
        return Err(JournalLoadError::IncompleteLine { line: lines.len() });
    }

    let header: FileHeader = serde_json::from_str(lines[0])
        .map_err(|e| JournalLoadError::InvalidHeader { line: 1, message: e.to_string() })?;

    let mut journal = InputJournal {
        format_version: header.format_version,
        build_id: header.build_id,
        seed: header.seed,
        records: Vec::new(),
    };

    let mut prev_sha256_hex = INITIAL_HASH.to_string();
    let mut next_seq: u64 = 0;
    let mut next_tick_boundary: u64 = 0;

    for (line_index, line) in lines.iter().skip(1).enumerate() {
        // 1-indexed, header is line 1
        let line_number = line_index + 2;

        if line.is_empty() {
            return Err(JournalLoadError::InvalidRecord {
                line: line_number,
                message: "empty line".to_string(),
            });
        }

        let record: FileRecord = serde_json::from_str(line).map_err(|e| {
            JournalLoadError::InvalidRecord { line: line_number, message: e.to_string() }
        })?;

        if record.seq != next_seq {
            return Err(JournalLoadError::InvalidRecord {
                line: line_number,
                message: format!("expected seq {next_seq}, found {}", record.seq),
            });
        }
        if record.prev_sha256_hex != prev_sha256_hex {
            return Err(JournalLoadError::HashChainBroken { line: line_number });
        }

        let body = RecordBody {
            seq: record.seq,
            tick_boundary: record.tick_boundary,
            payload: &record.payload,
        };
        let body_json = serde_json::to_string(&body).map_err(|e| {
            JournalLoadError::InvalidRecord { line: line_number, message: e.to_string() }
        })?;
        if record.sha256_hex != compute_record_sha256(&body_json, &prev_sha256_hex) {
            return Err(JournalLoadError::HashChainBroken { line: line_number });
        }

        next_tick_boundary = check_tick_boundary(line_number, next_tick_boundary, &record)?;

        journal.records.push(InputRecord { seq: record.seq, payload: record.payload });
        prev_sha256_hex = record.sha256_hex;
        next_seq += 1;
    }

    tracing::debug!(records = journal.records.len(), seed = %journal.seed, "journal loaded");
    Ok(LoadedJournal { journal, last_sha256_hex: prev_sha256_hex, next_seq, next_tick_boundary })
}
