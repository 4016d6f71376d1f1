use crate::page_range::PageRange;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfsplit")]
#[command(about = "Split a PDF into several files by page ranges")]
#[command(version)]
pub struct Cli {
    /// PDF file to split
    pub input: PathBuf,

    /// Page ranges, each "start-end" or a single page (e.g. 1-3 5 8-12)
    #[arg(required = true, value_parser = PageRange::parse)]
    pub ranges: Vec<PageRange>,

    /// Output folder; files go to OUTPUT/<input name>/
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Print the created files as JSON
    #[arg(long)]
    pub json: bool,

    /// Log directory creation and every written file
    #[arg(short, long)]
    pub verbose: bool,
}
