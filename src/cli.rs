use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the grocery inventory CSV file (Category,Ingredient columns)
    #[arg(short, long)]
    pub groceries_file: String,

    /// Path to the recipe collection JSON file
    #[arg(short, long)]
    pub recipes_file: String,

    /// Minimum confidence (0-100) for a match to count as strictly
    /// available in the report; falls back to the environment, then to 50
    #[arg(long)]
    pub min_confidence: Option<u8>,

    /// Only report recipes at or above this compatibility score (0-100)
    #[arg(long)]
    pub min_score: Option<u8>,

    /// Emit the full analysis as pretty-printed JSON instead of the report
    #[arg(long)]
    pub json: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
