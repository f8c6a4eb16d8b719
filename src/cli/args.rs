use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "slx")]
#[command(about = "Batching machine-translation for Android strings.xml resources")]
#[command(version)]
pub struct Args {
    /// Source strings.xml file to translate
    pub file: Option<String>,

    /// Target language codes, comma separated (e.g. ja,ko,zh-CN)
    #[arg(short = 't', long = "to", value_delimiter = ',')]
    pub to: Vec<String>,

    /// Re-translate entries even when a translation file already exists
    #[arg(short = 'o', long)]
    pub overwrite: bool,

    /// Translate one span per request instead of batching
    #[arg(short = 's', long)]
    pub single: bool,

    /// Suppress status output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported target language codes
    Languages,
}
