use clap::Parser;
use fretecalc::app::cli_args::CliArgs;
use fretecalc::app::run;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    match run::command_line_runner(&args) {
        Ok(_) => {}
        Err(e) => log::error!("{e}"),
    }
}
