use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "glot")]
#[command(about = "Gemini-powered translation and proofreading CLI")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Source language code (e.g., en, ta)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (e.g., en, ta)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Maximum request attempts per submission
    #[arg(short = 'r', long)]
    pub retries: Option<u32>,

    /// Suppress status output on stderr
    #[arg(short = 'q', long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Proofread text instead of translating it
    Proofread {
        /// File to proofread (reads from stdin if not provided)
        file: Option<String>,

        /// Language code of the text (e.g., en, ta)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// Maximum request attempts per submission
        #[arg(short = 'r', long)]
        retries: Option<u32>,
    },
    /// List supported language codes
    Languages,
    /// Interactive session mode
    Session {
        /// Source language code (e.g., en, ta)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Target language code (e.g., en, ta)
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// Maximum request attempts per submission
        #[arg(short = 'r', long)]
        retries: Option<u32>,
    },
    /// Configure glot settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
