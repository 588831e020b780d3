use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use walkdir::WalkDir;

use prismalint_core::{Config, Diagnostic, Report, Severity};
use prismalint_rules::{default_rules, Rule};
use prismalint_schema::{SchemaContext, StructuralParser};

/// PrismaLint - naming-convention checks for Prisma schemas
#[derive(Parser)]
#[command(name = "prismalint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: prismalint.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check schema naming against the configured styles
    Check {
        /// Schema files or directories to scan (default: current directory)
        paths: Vec<PathBuf>,

        /// Output file for report.json
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Also output markdown report
        #[arg(short, long)]
        markdown: Option<PathBuf>,
    },

    /// Apply rename suggestions to schema files in place
    Fix {
        /// Schema files or directories to fix (default: current directory)
        paths: Vec<PathBuf>,
    },

    /// Write a default prismalint.toml
    InitConfig {
        /// Destination path
        #[arg(short, long, default_value = "prismalint.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = if let Some(config_path) = &cli.config {
        tracing::debug!(path = %config_path.display(), "loading config");
        Config::from_file(config_path)?
    } else if Path::new("prismalint.toml").exists() {
        Config::from_file(Path::new("prismalint.toml"))?
    } else {
        if cli.verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        Config::default()
    };

    match cli.command {
        Commands::Check {
            paths,
            output,
            markdown,
        } => check_command(&config, &paths, &output, markdown.as_deref(), cli.verbose),
        Commands::Fix { paths } => fix_command(&config, &paths, cli.verbose),
        Commands::InitConfig { output } => init_config_command(&output),
    }
}

fn check_command(
    config: &Config,
    paths: &[PathBuf],
    output: &Path,
    markdown: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let rules = default_rules(config)?;
    let files = discover_schema_files(paths)?;
    anyhow::ensure!(!files.is_empty(), "no .prisma files found");

    let mut report = Report::new();

    for file in &files {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let display = file.display().to_string();

        let Some(ctx) = SchemaContext::build(&text, &StructuralParser) else {
            report.summary.files_skipped += 1;
            if verbose {
                eprintln!("{} {} (schema did not parse)", "Skipping".yellow(), display);
            }
            continue;
        };
        report.summary.files_checked += 1;

        for diagnostic in run_rules(&rules, &ctx, &display, config) {
            print_diagnostic(&diagnostic);
            report.add_diagnostic(diagnostic);
        }
    }

    report
        .save_to_file(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    if let Some(markdown_path) = markdown {
        std::fs::write(markdown_path, report.to_markdown())
            .with_context(|| format!("failed to write {}", markdown_path.display()))?;
    }

    let summary = format!(
        "{} diagnostics ({} errors, {} warnings) in {} file(s)",
        report.summary.total,
        report.summary.errors,
        report.summary.warnings,
        report.summary.files_checked,
    );
    if report.has_errors() {
        eprintln!("{}", summary.red());
        std::process::exit(1);
    }
    eprintln!("{}", summary.green());
    Ok(())
}

fn fix_command(config: &Config, paths: &[PathBuf], verbose: bool) -> Result<()> {
    let rules = default_rules(config)?;
    let files = discover_schema_files(paths)?;
    anyhow::ensure!(!files.is_empty(), "no .prisma files found");

    let mut total_applied = 0;

    for file in &files {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let display = file.display().to_string();

        let Some(ctx) = SchemaContext::build(&text, &StructuralParser) else {
            if verbose {
                eprintln!("{} {} (schema did not parse)", "Skipping".yellow(), display);
            }
            continue;
        };

        // Suggestion ranges are schema-relative; only rewrite files whose
        // content is the raw schema itself.
        if ctx.schema != text {
            eprintln!(
                "{} {} (carrier documents cannot be fixed in place)",
                "Skipping".yellow(),
                display
            );
            continue;
        }

        let suggestions: Vec<_> = run_rules(&rules, &ctx, &display, config)
            .into_iter()
            .filter_map(|d| d.suggestion)
            .collect();

        let (fixed, applied) = apply_suggestions(&ctx.schema, suggestions);
        if applied > 0 {
            std::fs::write(file, fixed)
                .with_context(|| format!("failed to write {}", file.display()))?;
            eprintln!("{} {} ({} rename(s))", "Fixed".green(), display, applied);
            total_applied += applied;
        }
    }

    eprintln!("Applied {total_applied} rename(s)");
    Ok(())
}

fn init_config_command(output: &Path) -> Result<()> {
    anyhow::ensure!(
        !output.exists(),
        "{} already exists",
        output.display()
    );
    Config::default().save_to_file(output)?;
    eprintln!("{} {}", "Wrote".green(), output.display());
    Ok(())
}

/// Run every rule against one analyzed document, applying configured
/// severity overrides.
fn run_rules(
    rules: &[Box<dyn Rule>],
    ctx: &SchemaContext,
    file: &str,
    config: &Config,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for rule in rules {
        for mut diagnostic in rule.check(ctx, file) {
            diagnostic.severity = config
                .severity
                .get_severity(diagnostic.code, diagnostic.severity);
            diagnostics.push(diagnostic);
        }
    }
    diagnostics
}

/// Apply non-overlapping suggestions back-to-front so earlier ranges stay
/// valid. Returns the rewritten text and the number of applied renames.
fn apply_suggestions(
    text: &str,
    mut suggestions: Vec<prismalint_core::Suggestion>,
) -> (String, usize) {
    suggestions.sort_by(|a, b| b.range.0.cmp(&a.range.0));

    let mut fixed = text.to_string();
    let mut applied = 0;
    let mut last_start = usize::MAX;

    for suggestion in suggestions {
        let (start, end) = suggestion.range;
        if end > last_start || end > fixed.len() {
            continue;
        }
        fixed.replace_range(start..end, &suggestion.replacement);
        last_start = start;
        applied += 1;
    }

    (fixed, applied)
}

fn discover_schema_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let roots: Vec<PathBuf> = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    };

    let mut files = Vec::new();
    for root in roots {
        if root.is_file() {
            files.push(root);
            continue;
        }
        for entry in WalkDir::new(&root).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "prisma") {
                files.push(path.to_path_buf());
            }
        }
    }
    files.sort();
    files.dedup();
    tracing::debug!(count = files.len(), "discovered schema files");
    Ok(files)
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    let severity = match diagnostic.severity {
        Severity::Error => "error".red().bold(),
        Severity::Warn => "warn".yellow().bold(),
        Severity::Info => "info".cyan().bold(),
    };
    let location = match &diagnostic.location {
        Some(loc) => match (loc.line, loc.column) {
            (Some(line), Some(column)) => format!("{}:{}:{}", loc.file, line, column),
            (Some(line), None) => format!("{}:{}", loc.file, line),
            _ => loc.file.clone(),
        },
        None => String::from("<unknown>"),
    };
    let suggestion = diagnostic
        .suggestion
        .as_ref()
        .map(|s| format!(" (rename to \"{}\")", s.replacement))
        .unwrap_or_default();

    eprintln!(
        "{severity} {} [{}] {}{suggestion}",
        location,
        diagnostic.code,
        diagnostic.message
    );
}
