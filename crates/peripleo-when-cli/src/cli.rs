use clap::{ArgAction, Parser, ValueEnum};
use peripleo_when::EraStyle;

/// Normalize years, ranges and timespans into labelled bounds.
#[derive(Parser, Debug)]
#[command(
    name = "peripleo-when",
    version,
    about = "Normalize years, ranges and timespans into labelled bounds",
    after_help = "Each INPUT is read as JSON when it is valid JSON (75, {\"timespans\":[...]}), \
                  otherwise as text (100/200, >=50). Negative years (-44) may be given \
                  anywhere; other inputs starting with '-' (-100/200) go after `--`. \
                  With no INPUT, each non-empty stdin line is one input."
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Era markers used in labels.
    #[arg(long, value_enum, default_value_t = Era::BcAd)]
    pub era: Era,

    /// Print only the label (an empty line when there is none).
    #[arg(long)]
    pub label_only: bool,

    /// Pretty-print JSON output.
    #[arg(long, conflicts_with = "label_only")]
    pub pretty: bool,

    /// Values to normalize. Reads stdin lines when omitted.
    #[arg(allow_negative_numbers = true)]
    pub inputs: Vec<String>,
}

/// Era style as exposed on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Era {
    /// 50 BC, AD 100
    BcAd,
    /// 50 BCE, 100 CE
    CommonEra,
}

impl From<Era> for EraStyle {
    fn from(era: Era) -> Self {
        match era {
            Era::BcAd => EraStyle::BcAd,
            Era::CommonEra => EraStyle::CommonEra,
        }
    }
}
