use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use nc2text::cli::{Cli, Commands, InfoFormat, PrintArgs, load_config};
use nc2text::info::{get_dataset_info, write_info_human, write_info_json, write_info_yaml};
use nc2text::log::{init_logging, job_echo, show_farewell_with_timing};
use nc2text::run_print_job;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;
    match cli.command {
        Some(Commands::Print(args)) => print(&args, config_path),
        None => print(&cli.print, config_path),
        Some(Commands::Info {
            file,
            detailed,
            variable,
            format,
        }) => info(&file, variable.as_deref(), detailed, format),
        Some(Commands::Completions { shell, output }) => completions(shell, output),
    }
}

fn print(args: &PrintArgs, config_path: Option<PathBuf>) -> Result<()> {
    let start_time = Instant::now();

    let config = load_config(config_path.as_deref())?;
    let job = args.resolve(config);
    job_echo(&job);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let rows = run_print_job(&job, &mut out)?;

    show_farewell_with_timing(rows, start_time.elapsed());
    Ok(())
}

fn info(file: &str, variable: Option<&str>, detailed: bool, format: InfoFormat) -> Result<()> {
    let info = get_dataset_info(file, variable, detailed)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        InfoFormat::Human => write_info_human(&mut out, &info)?,
        InfoFormat::Json => write_info_json(&mut out, &info)?,
        InfoFormat::Yaml => write_info_yaml(&mut out, &info)?,
    }
    out.flush()?;
    Ok(())
}

fn completions(shell: clap_complete::Shell, output: Option<PathBuf>) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();

    match output {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            clap_complete::generate(shell, &mut command, name, &mut file);
        }
        None => {
            clap_complete::generate(shell, &mut command, name, &mut io::stdout());
        }
    }
    Ok(())
}
