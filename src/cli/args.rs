use clap::Parser;
use clap::builder::RangedU64ValueParser;
use genpass::settings::{
    MAX_LENGTH, MAX_LENGTH_CEILING, MAX_MIN_PER_CLASS, MAX_MIN_PER_CLASS_CEILING,
};

fn bounded(ceiling: usize) -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(..=ceiling as u64)
}

/// Constraint-driven password generator.
///
/// Without arguments, opens the interactive settings view.
#[derive(Debug, Parser)]
#[command(name = "genpass", version)]
pub struct CliFlags {
    /// Characters per password (default: 20)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out special characters
    #[arg(long)]
    pub no_special: bool,

    /// Minimum number of digits (default: 5)
    #[arg(long, value_name = "N")]
    pub min_digits: Option<usize>,

    /// Minimum number of special characters (default: 5)
    #[arg(long, value_name = "N")]
    pub min_special: Option<usize>,

    /// Draw special characters only from this set (others are dropped)
    #[arg(long, value_name = "CHARS")]
    pub special_chars: Option<String>,

    /// Upper bound for the password length
    #[arg(long, value_name = "N", default_value_t = MAX_LENGTH,
          value_parser = bounded(MAX_LENGTH_CEILING))]
    pub max_length: usize,

    /// Upper bound for each minimum count
    #[arg(long = "max-min", value_name = "N", default_value_t = MAX_MIN_PER_CLASS,
          value_parser = bounded(MAX_MIN_PER_CLASS_CEILING))]
    pub max_min: usize,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    pub number: usize,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive view with these settings
    #[arg(short, long)]
    pub interactive: bool,
}
