use std::path::PathBuf;

use skysense_predict::ConfidenceLevel;
use structopt::StructOpt;

/// Current weather for a city, plus a rain estimate adjusted by your own hunch
#[derive(StructOpt, Debug)]
#[structopt(name = "skysense")]
pub struct Args {
    /// City to look up; prompted for when omitted
    pub city: Option<String>,

    /// How likely you think rain is: "Very Unlikely", "Unlikely", "Neutral",
    /// "Likely" or "Very Likely"; prompted for when omitted
    #[structopt(short, long)]
    pub confidence: Option<ConfidenceLevel>,

    /// Print the report as JSON
    #[structopt(long, requires_all = &["city", "confidence"])]
    pub json: bool,

    /// Config file to use instead of the default location
    #[structopt(long, parse(from_os_str))]
    pub config: Option<PathBuf>,
}
