use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fretecalc", about = "batch freight pricing for Brazilian road shipments")]
pub struct CliArgs {
    /// JSON file holding one freight query object or an array of them
    pub query_file: String,

    /// write results to this file instead of stdout
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// pretty-print the JSON output
    #[arg(short, long, default_value_t = false)]
    pub pretty: bool,
}
