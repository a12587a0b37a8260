use clap::Parser;
use glossort_lib::SortMode;

#[derive(Parser, Debug)]
#[command(
    name = "glossort",
    author,
    version,
    about = "Sorts and verifies glossary tables in Markdown documents",
    long_about = "Checks that the rows of every section table (### 1-9, ### A … ### Z) are in \
alphabetical order. With --fix the document is rewritten with the rows sorted.\n\n\
Configuration precedence: CLI > .glossort.toml > defaults."
)]
pub struct Cli {
    /// The filename to process (default: readme.md, or default-file in config)
    pub filename: Option<String>,

    /// Fix and save the file instead of only reporting
    #[arg(long, default_value = "false")]
    pub fix: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Ignore any discovered configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Output format for the report
    #[arg(long, value_parser = ["text", "json"],
          help = "Output format (default: text, or output-format in config)")]
    pub output_format: Option<String>,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print diagnostics, but no diff or success message
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn sort_mode(&self) -> SortMode {
        if self.fix { SortMode::Fix } else { SortMode::Check }
    }
}
