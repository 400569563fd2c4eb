//! # pscolor
//!
//! Coloreador léxico for Spanish-keyword pseudocode. Analyzes one
//! source file, prints the highlighted text to the terminal and leaves
//! a short TXT report in the report directory.

mod render;
mod report;
mod source;
mod theme;

use clap::Parser;
use psc_lexer::grammar::Dialect;
use psc_lexer::logging::{self, codes};
use psc_lexer::{log_error, log_info};
use std::path::PathBuf;
use std::process::ExitCode;

const STATUS_OK: &str = "✅ Archivo válido";
const STATUS_ERR: &str = "❌ Error léxico";

#[derive(Debug, Parser)]
#[command(
    name = "pscolor",
    version,
    about = "Coloreador léxico para pseudocódigo en español"
)]
struct Cli {
    /// Archivo de pseudocódigo a analizar
    file: PathBuf,

    /// Directorio donde se escriben los reportes
    #[arg(long, default_value = "reportes")]
    report_dir: PathBuf,

    /// Archivo TOML con un dialecto de palabras reservadas
    #[arg(long)]
    dialect: Option<PathBuf>,

    /// Archivo TOML con un tema de colores
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Desactiva el coloreado ANSI
    #[arg(long)]
    no_color: bool,

    /// No imprime el código, solo el estado y el reporte
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    if let Err(e) = logging::init_global_logging() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    match run(&cli) {
        Ok(had_lexical_error) => {
            if had_lexical_error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let dialect = load_dialect(cli)?;
    let theme = match &cli.theme {
        Some(path) => theme::Theme::load(path)?,
        None => theme::Theme::default(),
    };

    log_info!("Analyzing file",
        "path" => cli.file.display(),
        "dialect" => dialect.name
    );

    let src = source::load_source(&cli.file)?;
    let analysis = psc_lexer::analyze_source(&src.content, &dialect).map_err(|e| {
        log_error!(e.error_code(), "Analysis pipeline failed",
            "file" => cli.file.display()
        );
        e
    })?;

    if !cli.quiet {
        let rendered = render::render(&analysis, &theme, !cli.no_color);
        print!("{}", rendered);
        if !rendered.ends_with('\n') {
            println!();
        }
        println!();
    }

    match analysis.error() {
        None => {
            println!("{}", STATUS_OK);
            println!("Tokens procesados: {}", analysis.token_count());
        }
        Some(error) => {
            println!("{}", STATUS_ERR);
            println!("Línea: {}, Columna: {}", error.line(), error.column());
            println!("Mensaje: {}", error);
            if let Some(diagram) = analysis.caret_diagram() {
                println!();
                println!("{}", diagram);
            }
        }
    }

    let report_path = report::write_report(&analysis, &cli.report_dir, &src.path)?;
    println!("Reporte: {}", report_path.display());

    Ok(!analysis.is_ok())
}

fn load_dialect(cli: &Cli) -> Result<Dialect, Box<dyn std::error::Error>> {
    match &cli.dialect {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let dialect = Dialect::from_toml_str(&text).map_err(|e| {
                log_error!(codes::dialect::DIALECT_PARSE_ERROR, "Dialect file rejected",
                    "path" => path.display()
                );
                e
            })?;
            Ok(dialect)
        }
        None => Ok(Dialect::default()),
    }
}
