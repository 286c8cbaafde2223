use clap::Parser;
use morsy::{
    lang::{DEFAULT_SOURCE, DEFAULT_TARGET},
    logging::init_logging,
    morsy::redirect_target,
    translate_file,
};
use std::{path::PathBuf, process::ExitCode};
use tracing::debug;

/// Translate english into morse or vice versa
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "On any error prints `Error in translation: <message>` to stdout and exits with status 1."
)]
struct Args {
    #[arg(
        short = 's',
        long = "source-lang",
        default_value = DEFAULT_SOURCE.name,
        help = "input file language"
    )]
    source_lang: String,

    #[arg(
        short = 't',
        long = "target-lang",
        default_value = DEFAULT_TARGET.name,
        help = "output file language"
    )]
    target_lang: String,

    #[arg(help = "path to output file")]
    output_file: PathBuf,

    #[arg(help = "path to input file")]
    input_file: PathBuf,
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();
    let target = redirect_target(&args.source_lang, &args.target_lang);
    debug!(?args, target, "starting");

    match translate_file(&args.source_lang, target, &args.input_file, &args.output_file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error in translation: {e}");
            ExitCode::FAILURE
        }
    }
}
