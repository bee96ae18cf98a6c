use clap::{Parser, ValueEnum};
use embercss_lib::ember_css;
use embercss_lib::Compaction;
use std::fs;

const EMBERCSS_INTRO: &str = r#"
      ______          __              ________________
     / ____/___ ___  / /_  ___  _____/ ____/ ___/ ___/
    / __/ / __ `__ \/ __ \/ _ \/ ___/ /    \__ \\__ \
   / /___/ / / / / / /_/ /  __/ /  / /___ ___/ /__/ /
  /_____/_/ /_/ /_/_.___/\___/_/   \____//____/____/

  Welcome to EmberCSS - The Rust-Powered CSS Reformatter!
"#;

#[derive(Parser)]
#[command(name = "EmberCSS")]
#[command(about = "Parse and reformat CSS-like text using Rust")]
struct Args {
    /// Input file name.
    input: String,

    /// Output file name. Prints to stdout when omitted.
    output: Option<String>,

    /// How much optional whitespace to strip from the output.
    #[arg(long, value_enum, default_value = "none")]
    compaction: CompactionArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum CompactionArg {
    None,
    Low,
    Med,
    Max,
}

impl From<CompactionArg> for Compaction {
    fn from(level: CompactionArg) -> Self {
        match level {
            CompactionArg::None => Compaction::None,
            CompactionArg::Low => Compaction::Low,
            CompactionArg::Med => Compaction::Med,
            CompactionArg::Max => Compaction::Max,
        }
    }
}

fn main() {
    env_logger::init();
    println!("{}", EMBERCSS_INTRO);

    // parse the args given in terminal
    let args: Args = Args::parse();

    match fs::read_to_string(&args.input) {
        Ok(css_content) => {
            let document = ember_css::parse(&css_content);
            let rendered = ember_css::render(&document, args.compaction.into());
            match &args.output {
                Some(path) => {
                    if let Err(e) = fs::write(path, rendered) {
                        eprintln!("Error writing output file: {}", e);
                        std::process::exit(1);
                    }
                }
                None => println!("{}", rendered),
            }
        }
        Err(e) => {
            eprintln!("Error reading CSS file: {}", e);
            std::process::exit(1);
        }
    }
}
