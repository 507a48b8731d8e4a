use crate::config::Config;
use crate::display::{display_age_range, display_loaded, display_stats, display_top};
use clap::Parser;
use eyre::{Result, WrapErr};
use rscores::{CsvStore, Repository, Score, ScoreBook, Student, StudentRepository};
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};

mod config;
mod display;

#[derive(Parser)]
#[command(version, author, about)]
struct Options {
    /// Use FILE as TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Save students to FILE instead of the configured file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Do not save students to disk nor load them back
    #[arg(short = 'n', long)]
    dry_run: bool,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn register(repository: &mut StudentRepository, book: &mut ScoreBook) -> Result<()> {
    for (id, name, age) in [
        ("2021001", "张三", 20),
        ("2021002", "李四", 19),
        ("2021003", "王五", 21),
    ] {
        repository.add(Student::new(id, name, age)?)?;
    }
    info!(count = repository.len(), "students registered");
    for (id, subject, points) in [
        ("2021001", "math", 95.5),
        ("2021001", "english", 87.0),
        ("2021002", "math", 78.5),
        ("2021002", "english", 85.5),
        ("2021003", "math", 88.0),
        ("2021003", "english", 92.0),
    ] {
        book.add_score(id, Score::new(subject, points)?)?;
    }
    info!("scores recorded");
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = match &options.config {
        Some(file_name) => Config::load(file_name)?,
        None => Config::default(),
    };

    let mut repository = StudentRepository::new();
    let mut book = ScoreBook::new();
    register(&mut repository, &mut book).wrap_err("cannot register students")?;
    display_age_range(&repository, config.report.min_age, config.report.max_age);
    display_stats(&repository, &book)?;
    display_top(&book, config.report.top);

    if !options.dry_run {
        let store = CsvStore::new(options.output.unwrap_or(config.storage.file));
        store.save(&repository.all());
        display_loaded(&store.load());
    }
    Ok(())
}
