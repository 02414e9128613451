mod cli;
mod config;
mod prefs;
mod runner;

use anyhow::Context;
use clap::Parser;
use readlater_client::{PageScrapePayload, SaveArticleStatus, SaveCommand, SaveOutcome};
use readlater_logging::rl_info;

use crate::cli::{Cli, Command, SavePage};
use crate::config::{AppConfig, TOKEN_ENV};
use crate::runner::SaveRunner;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    readlater_logging::initialize(&cli.log_destination(), cli.log_level());

    let config = AppConfig::load(&cli.config)?.with_overrides(
        cli.base_url.clone(),
        cli.token.clone(),
        std::env::var(TOKEN_ENV).ok(),
    );
    rl_info!("Using API at {}", config.client.base_url);

    match cli.command {
        Command::SaveUrl { url, wait } => {
            let runner = runner_for(&config)?;
            let status = expect_status(runner.run(SaveCommand::SaveUrl { url })?)?;
            finish_status(&runner, status, wait)
        }
        Command::SavePage(args) => {
            let runner = runner_for(&config)?;
            let command = save_page_command(args)?;
            match runner.run(command)? {
                SaveOutcome::PageSaved(result) => {
                    result?;
                    println!("Saved.");
                    Ok(())
                }
                SaveOutcome::Status(_) => Err(anyhow::anyhow!("unexpected status result")),
            }
        }
        Command::Status { job_id, wait } => {
            let runner = runner_for(&config)?;
            let status = expect_status(runner.run(SaveCommand::PollStatus { job_id })?)?;
            finish_status(&runner, status, wait)
        }
        Command::Prefs(args) => {
            match prefs::edit(config.preferences.clone(), &args)? {
                Some(chosen) => {
                    let pretty = ron::ser::PrettyConfig::new();
                    println!("{}", ron::ser::to_string_pretty(&chosen, pretty)?);
                }
                None => println!("Preferences unchanged."),
            }
            Ok(())
        }
    }
}

fn runner_for(config: &AppConfig) -> anyhow::Result<SaveRunner> {
    SaveRunner::new(&config.client, config.poll_interval(), config.max_polls)
}

fn save_page_command(args: SavePage) -> anyhow::Result<SaveCommand> {
    let payload = match &args.html_file {
        Some(path) => {
            let html = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            PageScrapePayload::html(args.url, html, args.title)
        }
        None => PageScrapePayload::url_only(args.url),
    };
    Ok(SaveCommand::SavePage {
        payload,
        upload_file_id: args.upload_file_id,
    })
}

fn expect_status(outcome: SaveOutcome) -> anyhow::Result<SaveArticleStatus> {
    match outcome {
        SaveOutcome::Status(result) => Ok(result?),
        SaveOutcome::PageSaved(_) => Err(anyhow::anyhow!("unexpected page result")),
    }
}

fn finish_status(runner: &SaveRunner, status: SaveArticleStatus, wait: bool) -> anyhow::Result<()> {
    let status = match status {
        SaveArticleStatus::Processing { job_id } if wait => runner.wait_for(&job_id)?,
        other => other,
    };
    match status {
        SaveArticleStatus::Processing { job_id } => println!("Processing (job {job_id})"),
        SaveArticleStatus::Succeeded => println!("Saved."),
        SaveArticleStatus::Failed => anyhow::bail!("the server could not save the page"),
    }
    Ok(())
}
