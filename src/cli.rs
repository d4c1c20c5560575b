use crate::config::{Alphabet, HuffcConfig};
use crate::error::Result;
use crate::{pipeline, report};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = "Huffman code construction with entropy statistics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Builds a Huffman code for a text and prints the code table
    Encode {
        /// Text to encode; reads stdin when neither TEXT nor --input is given
        text: Option<String>,

        /// Read the input text from a file instead
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Allowed alphabet [lowercase, any]
        #[arg(short, long, default_value = "lowercase")]
        alphabet: Alphabet,

        /// Maximum input length in characters
        #[arg(long, default_value_t = 40)]
        max_len: usize,

        /// Maximum number of distinct symbols
        #[arg(long, default_value_t = 10)]
        max_symbols: usize,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encode { text, input, alphabet, max_len, max_symbols } => {
            let text = match (text, input) {
                (Some(t), _) => t.clone(),
                (None, Some(path)) => fs::read_to_string(path)?.trim_end().to_string(),
                (None, None) => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf.trim_end().to_string()
                }
            };

            let config = HuffcConfig {
                alphabet: *alphabet,
                max_input_len: *max_len,
                max_symbols: *max_symbols,
            };

            let result = pipeline::encode(&text, &config)?;

            println!("[input]");
            println!("{}", text);
            println!();
            print!("{}", report::render(&result));
        }
    }

    Ok(())
}
