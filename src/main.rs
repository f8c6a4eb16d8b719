use anyhow::Result;
use clap::Parser;

use slx_cli::cli::commands::translate;
use slx_cli::cli::{Args, Command};
use slx_cli::output::{self, OutputConfig};
use slx_cli::translation::print_targets;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    match args.command {
        Some(Command::Languages) => {
            print_targets();
        }
        None => {
            let Some(file) = args.file else {
                anyhow::bail!(
                    "No input file given\n\n\
                     Usage: slx <strings.xml> --to <lang>[,<lang>...]\n\
                     Run 'slx --help' for details."
                );
            };

            let options = translate::TranslateOptions {
                file,
                to: args.to,
                overwrite: args.overwrite,
                single: args.single,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
