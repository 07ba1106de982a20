//! myrustlib CLI
//!
//! Command-line driver for the myrustlib greeting library.
//!
//! # Commands
//!
//! - `greet` - Build a greeting with the safe Rust API
//! - `hello` - Print the static greeting
//! - `ffi-check` - Drive the C ABI in-process and check for leaks
//! - `version` - Show version information

mod commands;
mod error;

use clap::{Parser, Subcommand};
use myrustlib_core::GreeterConfig;
use tracing_subscriber::EnvFilter;

/// myrustlib command-line tools.
#[derive(Parser)]
#[command(name = "myrustlib")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a greeting with the safe Rust API
    Greet {
        /// Who to greet
        name: String,

        /// Word placed before the name
        #[arg(short, long, default_value = "Hello")]
        salutation: String,

        /// Text placed after the name
        #[arg(short, long, default_value = "!")]
        punctuation: String,

        /// Strip surrounding whitespace from the name
        #[arg(short, long)]
        trim: bool,

        /// Reject names longer than this many bytes
        #[arg(short, long)]
        max_len: Option<usize>,

        /// Reject an empty name
        #[arg(short, long)]
        require_name: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the static greeting
    Hello {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Allocate and free greetings through the C ABI and report leaks
    FfiCheck {
        /// Name passed to rust_greeting
        #[arg(short, long, default_value = "World")]
        name: String,

        /// Number of allocate/free round trips
        #[arg(short, long, default_value = "1000")]
        iterations: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Greet {
            name,
            salutation,
            punctuation,
            trim,
            max_len,
            require_name,
            format,
        } => {
            let mut config = GreeterConfig::new()
                .salutation(salutation)
                .punctuation(punctuation)
                .trim_whitespace(trim)
                .reject_empty(require_name);
            if let Some(max) = max_len {
                config = config.max_name_len(max);
            }
            commands::greet::run(&name, config, &format)?;
        }
        Commands::Hello { format } => {
            commands::hello::run(&format)?;
        }
        Commands::FfiCheck {
            name,
            iterations,
            format,
        } => {
            commands::ffi_check::run(&name, iterations, &format)?;
        }
        Commands::Version => {
            println!("myrustlib CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("myrustlib core v{}", myrustlib_core::VERSION);
            println!("C ABI version {}", myrustlib::myrustlib_abi_version());
        }
    }

    Ok(())
}
