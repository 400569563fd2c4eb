//! Source file loading with validation
//!
//! File I/O stays out of the core library; the CLI owns reading the
//! source from disk and turning OS failures into typed errors.

use psc_lexer::config::constants::compile_time::source::MAX_SOURCE_SIZE;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("No existe el archivo: {path}")]
    NotFound { path: PathBuf },

    #[error("Archivo demasiado grande: {size} bytes (máximo {MAX_SOURCE_SIZE})")]
    TooLarge { size: u64 },

    #[error("El archivo no es UTF-8 válido: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("El archivo está vacío: {path}")]
    Empty { path: PathBuf },

    #[error("No se pudo leer el archivo: {0}")]
    Io(#[from] std::io::Error),
}

/// Source text plus the metadata the report writer needs
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
    pub size: u64,
    pub line_count: usize,
}

/// Read and validate a source file.
pub fn load_source(path: &Path) -> Result<SourceFile, SourceError> {
    if !path.is_file() {
        return Err(SourceError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let size = fs::metadata(path)?.len();
    if size > MAX_SOURCE_SIZE as u64 {
        return Err(SourceError::TooLarge { size });
    }

    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|_| SourceError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;

    if content.is_empty() {
        return Err(SourceError::Empty {
            path: path.to_path_buf(),
        });
    }

    let line_count = content.lines().count();
    log::debug!(
        "loaded {} ({} bytes, {} lines)",
        path.display(),
        size,
        line_count
    );

    Ok(SourceFile {
        path: path.to_path_buf(),
        content,
        size,
        line_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("programa.psc");
        fs::write(&path, "Algoritmo Hola\nFinAlgoritmo\n").unwrap();

        let source = load_source(&path).unwrap();
        assert_eq!(source.line_count, 2);
        assert!(source.content.starts_with("Algoritmo"));
    }

    #[test]
    fn test_missing_file_reports_not_found() {
        let result = load_source(Path::new("/no/existe/x.psc"));
        assert!(matches!(result, Err(SourceError::NotFound { .. })));
    }

    #[test]
    fn test_empty_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vacio.psc");
        fs::write(&path, "").unwrap();

        let result = load_source(&path);
        assert!(matches!(result, Err(SourceError::Empty { .. })));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("malo.psc");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0x41, 0xff, 0xfe, 0x42]).unwrap();
        drop(file);

        let result = load_source(&path);
        assert!(matches!(result, Err(SourceError::InvalidEncoding { .. })));
    }
}
