//! unresume CLI - résumé PDF parsing tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use unresume::{render, JsonFormat, PageSelection, ParseOptions, ResumeParser};

#[derive(Parser)]
#[command(name = "unresume")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Parse résumé PDFs into structured candidate records", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Page range (e.g., "1-2", "1,3")
    #[arg(long, global = true)]
    pages: Option<String>,

    /// Skip pages whose text cannot be extracted instead of failing
    #[arg(long, global = true)]
    lenient: bool,

    /// Reject documents producing more text atoms than this
    #[arg(long, global = true, env = "UNRESUME_MAX_ATOMS", value_name = "N")]
    max_atoms: Option<usize>,

    /// Give unknown bold all-caps headings their own section
    #[arg(long, global = true)]
    split_unknown_headings: bool,
}

impl GlobalArgs {
    fn parse_options(&self) -> Result<ParseOptions, Box<dyn std::error::Error>> {
        let pages = match self.pages.as_deref() {
            Some(p) => PageSelection::parse(p).map_err(|e| format!("Invalid page range: {}", e))?,
            None => PageSelection::All,
        };

        let mut options = ParseOptions::new()
            .with_pages(pages)
            .with_split_unknown_headings(self.split_unknown_headings);
        if self.lenient {
            options = options.lenient();
        }
        if let Some(limit) = self.max_atoms {
            options = options.with_max_atoms(limit);
        }
        Ok(options)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a résumé into JSON
    Parse {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the reconstructed text lines
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show detected sections and subsections
    Sections {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Dump sections as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a summary of what was recognized
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Parse every PDF in a directory
    Batch {
        /// Input directory
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory (defaults to the input directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Parse one file at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Show version information
    Version,
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = cli.global.parse_options().and_then(|options| {
        let parser = ResumeParser::with_options(options);
        match cli.command {
            Commands::Parse {
                input,
                output,
                compact,
            } => cmd_parse(&parser, &input, output.as_deref(), compact),
            Commands::Text { input, output } => cmd_text(&parser, &input, output.as_deref()),
            Commands::Sections { input, json } => cmd_sections(&parser, &input, json),
            Commands::Info { input } => cmd_info(&parser, &input),
            Commands::Batch {
                input,
                output,
                compact,
                sequential,
            } => {
                let parser = if sequential { parser.sequential() } else { parser };
                cmd_batch(&parser, &input, output.as_deref(), compact)
            }
            Commands::Version => {
                cmd_version();
                Ok(())
            }
        }
    });

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> CmdResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_parse(parser: &ResumeParser, input: &Path, output: Option<&Path>, compact: bool) -> CmdResult {
    let resume = parser.parse_file(input)?;
    let json = render::to_json(&resume, json_format(compact))?;
    write_or_print(output, &json)
}

fn cmd_text(parser: &ResumeParser, input: &Path, output: Option<&Path>) -> CmdResult {
    let layout = parser.analyze_file(input)?;
    let text = unresume::layout::raw_text(&layout.lines);
    write_or_print(output, &text)
}

fn cmd_sections(parser: &ResumeParser, input: &Path, json: bool) -> CmdResult {
    let layout = parser.analyze_file(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&layout.sections)?);
        return Ok(());
    }

    for section in &layout.sections {
        let subsections = unresume::layout::split_subsections(
            &section.lines,
            parser.options().subsection_gap_ratio,
            parser.options().default_line_gap,
        );
        println!(
            "{} {}",
            section.tag.to_string().to_uppercase().cyan().bold(),
            format!("({} lines, {} subsections)", section.lines.len(), subsections.len()).dimmed()
        );
        for (i, subsection) in subsections.iter().enumerate() {
            for (j, line) in subsection.iter().enumerate() {
                let marker = if j == 0 { format!("{:>3}", i + 1) } else { "   ".to_string() };
                let text = if line.starts_bold() {
                    line.text().bold()
                } else {
                    line.text().normal()
                };
                println!("{} {} {}", marker.dimmed(), "│".dimmed(), text);
            }
        }
        println!();
    }

    Ok(())
}

fn cmd_info(parser: &ResumeParser, input: &Path) -> CmdResult {
    let layout = parser.analyze_file(input)?;
    let resume = layout.assemble(parser.options());

    let mut pages: Vec<u32> = layout.lines.iter().map(|l| l.page()).collect();
    pages.dedup();

    println!("{}", "Document".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages with text".bold(), pages.len());
    println!("{}: {}", "Lines".bold(), layout.lines.len());
    let tags: Vec<String> = layout.sections.iter().map(|s| s.tag.to_string()).collect();
    println!("{}: {}", "Sections".bold(), tags.join(", "));

    println!();
    println!("{}", "Candidate".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    let profile = &resume.profile;
    for (label, value) in [
        ("Name", &profile.name),
        ("Email", &profile.email),
        ("Phone", &profile.phone),
        ("Location", &profile.location),
        ("URL", &profile.url),
    ] {
        if value.is_empty() {
            println!("{}: {}", label.bold(), "-".dimmed());
        } else {
            println!("{}: {}", label.bold(), value);
        }
    }
    println!("{}: {}", "Experiences".bold(), resume.experiences.len());
    println!("{}: {}", "Educations".bold(), resume.educations.len());
    println!("{}: {}", "Projects".bold(), resume.projects.len());
    println!(
        "{}: {} skills, {} languages, {} certifications",
        "Skills".bold(),
        resume.skills.skills.len(),
        resume.skills.languages.len(),
        resume.skills.certifications.len()
    );

    Ok(())
}

fn cmd_batch(
    parser: &ResumeParser,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> CmdResult {
    let files = collect_pdfs(input)?;
    let output_dir = output.unwrap_or(input);
    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let process = |path: &PathBuf| -> Result<(), String> {
        let result = parser
            .parse_file(path)
            .and_then(|resume| render::to_json(&resume, json_format(compact)))
            .map_err(|e| e.to_string())
            .and_then(|json| {
                let stem = path.file_stem().unwrap_or_default().to_string_lossy();
                fs::write(output_dir.join(format!("{}.json", stem)), json)
                    .map_err(|e| e.to_string())
            });
        pb.inc(1);
        result
    };

    let results: Vec<Result<(), String>> = if parser.options().parallel {
        files.par_iter().map(process).collect()
    } else {
        files.iter().map(process).collect()
    };
    pb.finish_with_message("Done!");

    let mut failed = 0;
    for (path, result) in files.iter().zip(&results) {
        if let Err(e) = result {
            failed += 1;
            eprintln!("{} {}: {}", "Failed".red(), path.display(), e);
        }
    }

    println!(
        "\n{} {} parsed, {} failed",
        "Done!".green().bold(),
        files.len() - failed,
        failed
    );
    if failed > 0 {
        log::warn!("{} of {} files failed", failed, files.len());
    }
    Ok(())
}

/// PDF files directly inside `dir`, sorted by name.
fn collect_pdfs(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn cmd_version() {
    println!("{} {}", "unresume".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Résumé PDF parsing tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unresume".dimmed());
    println!("License: MIT");
}
