// src/resource.rs
// ============================================================================
// Module: Scoped Resources
// Description: File handles as parameters and guaranteed release on scope exit.
// Purpose: Confine stateful handles to well-defined scopes owned by the caller.
// Dependencies: thiserror, std::{fs, io, path}
// ============================================================================

//! ## Overview
//! Stateful handles cannot be eliminated, but they can be confined. The
//! message helpers take their handle as a formal parameter instead of opening
//! one ambiently, so the caller decides the handle's scope. [`ScratchFile`]
//! ties a transient file's lifetime to a value: when the guard leaves scope,
//! by any exit path, the file is removed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// SECTION: Resource Errors
// ============================================================================

/// Errors raised while working with scoped file resources
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An underlying I/O operation failed
    #[error("failed to {context}")]
    Io {
        /// What the operation was attempting
        context: &'static str,
        /// The underlying I/O failure
        #[source]
        source: io::Error,
    },
}

impl ResourceError {
    /// Creates an I/O error with context describing the attempted operation
    #[must_use]
    pub fn io(context: &'static str, source: io::Error) -> Self {
        Self::Io {
            context,
            source,
        }
    }
}

// ============================================================================
// SECTION: Handles As Parameters
// ============================================================================

/// Writes a message through a caller-scoped writer
///
/// The writer is a formal parameter: this function neither opens nor closes
/// anything, so it stays testable against any sink.
///
/// # Errors
/// Returns [`ResourceError::Io`] when the write fails.
pub fn write_message(writer: &mut impl Write, message: &str) -> Result<(), ResourceError> {
    writer
        .write_all(message.as_bytes())
        .map_err(|source| ResourceError::io("write message", source))
}

/// Reads one line through a caller-scoped reader
///
/// The counterpart to [`write_message`]: the reader's scope belongs to the
/// caller. A message written without a trailing newline reads back whole.
///
/// # Errors
/// Returns [`ResourceError::Io`] when the read fails.
pub fn read_message(mut reader: impl BufRead) -> Result<String, ResourceError> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(|source| ResourceError::io("read message", source))?;
    Ok(line)
}

// ============================================================================
// SECTION: Scoped Scratch File
// ============================================================================

/// Guard tying a transient file's existence to a scope
///
/// Dropping the guard removes the file if it exists. Removal is best-effort:
/// a file that was never created, or already removed, is not an error, and
/// drop never panics.
///
/// # Invariants
/// - Owns the path for the guard's whole lifetime; the file is gone once the
///   guard is dropped (when the filesystem cooperates).
#[derive(Debug)]
pub struct ScratchFile {
    /// Path the guard removes on drop
    path: PathBuf,
}

impl ScratchFile {
    /// Creates a guard for the given path without touching the filesystem
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    /// Returns the guarded path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        // Best-effort removal; a missing file is the desired end state anyway.
        let _ = fs::remove_file(&self.path);
    }
}

// ============================================================================
// SECTION: Scoped Round Trip
// ============================================================================

/// Writes a message to a file and reads it back through scoped handles
///
/// Each handle lives in its own block: the writer is flushed and closed
/// before the reader opens, regardless of how either block exits. This is
/// the crate's only boundary crossing.
///
/// # Errors
/// Returns [`ResourceError::Io`] when any file operation fails.
pub fn roundtrip_message(path: &Path, message: &str) -> Result<String, ResourceError> {
    {
        let file = File::create(path).map_err(|source| ResourceError::io("create file", source))?;
        let mut writer = BufWriter::new(file);
        write_message(&mut writer, message)?;
        writer.flush().map_err(|source| ResourceError::io("flush file", source))?;
    }

    let file = File::open(path).map_err(|source| ResourceError::io("open file", source))?;
    read_message(BufReader::new(file))
}
