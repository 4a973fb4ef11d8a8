//! File adaptor for PCN documents.
//!
//! Thin wrappers around [crate::parse] that attach the offending path to any
//! failure. The algebraic core never touches the file system; these two
//! functions are the only I/O in the crate.

use crate::{parse, CubeList, PcnError};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Read a PCN document from a file.
pub fn read_pcn<P: AsRef<Path>>(path: P) -> Result<CubeList, PcnError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PcnError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let sop = parse::parse_document(&text).map_err(|source| PcnError::Malformed {
        path: path.display().to_string(),
        source: Box::new(source),
    })?;
    info!(
        "{}: {} cubes in {} variables",
        path.display(),
        sop.len(),
        sop.arity()
    );
    Ok(sop)
}

/// Write a cube list to a file as a PCN document.
pub fn write_pcn<P: AsRef<Path>>(path: P, sop: &CubeList) -> Result<(), PcnError> {
    let path = path.as_ref();
    debug!("writing {} cubes to {}", sop.len(), path.display());
    fs::write(path, parse::format_document(sop)).map_err(|source| PcnError::Write {
        path: path.display().to_string(),
        source,
    })
}
