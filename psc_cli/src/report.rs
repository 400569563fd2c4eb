//! Report file writer
//!
//! One short TXT summary per analyzed file, named after the original
//! plus `.reporte.txt`. Format:
//!
//! ```text
//! Archivo: <ruta>
//! Fecha: 2026-08-30 14:05:12
//! Estado: OK
//! Tokens procesados: 42
//! ```
//!
//! On error the token count is replaced by the position, the message
//! and a caret diagram pointing at the offending column.

use chrono::Local;
use psc_lexer::logging::codes;
use psc_lexer::{log_error, log_success, AnalysisReport};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("No se pudo crear el directorio de reportes: {0}")]
    Dir(std::io::Error),

    #[error("No se pudo escribir el reporte: {0}")]
    Write(std::io::Error),
}

/// Strip characters that are unsafe in file names.
fn safe_basename(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sin_nombre".to_string());
    name.chars()
        .filter(|ch| !matches!(ch, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect()
}

/// Build the report body for an analysis.
pub fn format_report(report: &AnalysisReport, source_path: &Path) -> String {
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    let mut lines = Vec::new();
    lines.push(format!("Archivo: {}", source_path.display()));
    lines.push(format!("Fecha: {}", stamp));
    lines.push(format!("Estado: {}", report.status().as_str()));

    match report.error() {
        Some(error) => {
            lines.push(format!(
                "Línea: {}, Columna: {}",
                error.line(),
                error.column()
            ));
            lines.push(format!("Mensaje: {}", error));
            if let Some(diagram) = report.caret_diagram() {
                lines.push(String::new());
                lines.push(diagram);
            }
        }
        None => {
            lines.push(format!("Tokens procesados: {}", report.token_count()));
        }
    }

    lines.join("\n")
}

/// Write the report next to its siblings in `report_dir`, returning
/// the path of the file written.
pub fn write_report(
    report: &AnalysisReport,
    report_dir: &Path,
    source_path: &Path,
) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(report_dir).map_err(|e| {
        log_error!(codes::report::REPORT_DIR_FAILED, "Report directory creation failed",
            "dir" => report_dir.display()
        );
        ReportError::Dir(e)
    })?;

    let safe = safe_basename(source_path);
    let txt_path = report_dir.join(format!("{}.reporte.txt", safe));

    let body = format_report(report, source_path);
    fs::write(&txt_path, body).map_err(|e| {
        log_error!(codes::report::REPORT_WRITE_FAILED, "Report write failed",
            "path" => txt_path.display()
        );
        ReportError::Write(e)
    })?;

    log_success!(codes::success::REPORT_WRITTEN, "Report written",
        "path" => txt_path.display(),
        "status" => report.status().as_str()
    );

    Ok(txt_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use psc_lexer::analyze_source_default;

    #[test]
    fn test_safe_basename_strips_reserved_chars() {
        assert_eq!(safe_basename(Path::new("pro?gra*ma.psc")), "programa.psc");
        assert_eq!(safe_basename(Path::new("normal.psc")), "normal.psc");
    }

    #[test]
    fn test_ok_report_contents() {
        let report = analyze_source_default("Leer x\n").unwrap();
        let body = format_report(&report, Path::new("programa.psc"));

        assert!(body.contains("Archivo: programa.psc"));
        assert!(body.contains("Estado: OK"));
        assert!(body.contains("Tokens procesados: 2"));
        assert!(!body.contains("Línea:"));
    }

    #[test]
    fn test_error_report_contents() {
        let report = analyze_source_default("Leer x\nEscribir @").unwrap();
        let body = format_report(&report, Path::new("programa.psc"));

        assert!(body.contains("Estado: ERROR"));
        assert!(body.contains("Línea: 2, Columna: 10"));
        assert!(body.contains("Mensaje:"));
        // caret diagram points at the offender
        assert!(body.contains("Escribir @\n         ^"));
    }

    #[test]
    fn test_write_report_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let report_dir = dir.path().join("reportes");
        let report = analyze_source_default("Leer x\n").unwrap();

        let path = write_report(&report, &report_dir, Path::new("programa.psc")).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "programa.psc.reporte.txt"
        );

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("Estado: OK"));
    }
}
