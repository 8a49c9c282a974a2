mod ui;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use locksafe::{evaluate_password, generate_password, DEFAULT_PASSWORD_LENGTH};
use log::{info, LevelFilter};

#[derive(Parser)]
#[command(
    name = "locksafe",
    version,
    author,
    about = "Password strength evaluator and random password generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print only the result, without decorations or tips
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a password's strength
    Check {
        /// Read the password from the first line of stdin instead of prompting
        #[arg(long)]
        stdin: bool,
    },

    /// Generate a random password
    Generate {
        #[arg(
            short,
            long,
            env = "LOCKSAFE_LENGTH",
            default_value_t = DEFAULT_PASSWORD_LENGTH as u8,
            value_parser = clap::value_parser!(u8).range(8..=20)
        )]
        length: u8,
    },

    /// Print tips for choosing a strong password
    Tips,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: !cli.no_color && ui::detect_color_support(),
        quiet: cli.quiet,
    };

    match cli.command {
        Command::Check { stdin } => {
            let password = if stdin {
                ui::read_password_line()?
            } else {
                ui::prompt_password()?
            };

            info!("Evaluating a {}-character password", password.chars().count());
            let evaluation = evaluate_password(&password);
            ui::display_evaluation(&evaluation, &options);
        }
        Command::Generate { length } => {
            info!("Generating a {}-character password", length);
            let password = generate_password(usize::from(length));
            ui::display_generated(&password, &options);
        }
        Command::Tips => ui::display_tips(&options),
    }

    Ok(())
}
