//! # blasetables
//!
//! A CLI that shows notable games from a simulated baseball league as
//! terminal or Markdown tables.
//!
//! ## Overview
//!
//! blasetables is built on top of blasetableslib. It reads a JSON file of
//! games already grouped by category (blowout, shutout, shame, underdog,
//! maxedout, defensive) and ranked, narrows them down to the requested
//! seasons and teams, and prints one table per category.
//!
//! ## Usage
//!
//! ```bash
//! # Top 10 games of every category, winners on the left
//! blasetables --data games.json
//!
//! # Home/away layout with pitchers and emoji team names
//! blasetables --data games.json --home-away --home-pitcher --away-pitcher --name-style emoji
//!
//! # Underdog wins of seasons 3 and 4, as Markdown appended to a file
//! blasetables --data games.json -r underdog -s 3 -s 4 --markdown -o underdogs.md
//! ```

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use blasetableslib::{
    BlasetablesError, Category, ConsoleRenderer, JsonGameData, MarkdownRenderer, NameStyle,
    Orientation, OutputTarget, Pitchers, Renderer, SeasonSelector, TableView, TeamSelector,
    ViewOptions, OVERWRITE_GRACE_PERIOD,
};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::Style;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("blasetables")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Show notable games (blowouts, shutouts, underdog wins, ...) as tables")
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .required(true)
                .help("JSON file of categorized games"),
        )
        .arg(
            Arg::new("n-results")
                .short('n')
                .long("n-results")
                .value_parser(value_parser!(usize))
                .default_value("10")
                .help("Number of games to show per table"),
        )
        .arg(
            Arg::new("win-loss")
                .long("win-loss")
                .action(ArgAction::SetTrue)
                .conflicts_with("home-away")
                .help("Organize columns by winner/loser (default)"),
        )
        .arg(
            Arg::new("home-away")
                .long("home-away")
                .action(ArgAction::SetTrue)
                .help("Organize columns by home/away"),
        )
        .arg(
            Arg::new("winning-pitcher")
                .long("winning-pitcher")
                .action(ArgAction::SetTrue)
                .help("Show the winning pitcher (win/loss only)"),
        )
        .arg(
            Arg::new("losing-pitcher")
                .long("losing-pitcher")
                .action(ArgAction::SetTrue)
                .help("Show the losing pitcher (win/loss only)"),
        )
        .arg(
            Arg::new("home-pitcher")
                .long("home-pitcher")
                .action(ArgAction::SetTrue)
                .help("Show the home pitcher (home/away only)"),
        )
        .arg(
            Arg::new("away-pitcher")
                .long("away-pitcher")
                .action(ArgAction::SetTrue)
                .help("Show the away pitcher (home/away only)"),
        )
        .arg(
            Arg::new("name-style")
                .long("name-style")
                .value_parser(["long", "short", "emoji"])
                .default_value("short")
                .help("How to show team names"),
        )
        .arg(
            Arg::new("season")
                .short('s')
                .long("season")
                .action(ArgAction::Append)
                .help("Season to show, 1-based (can be specified multiple times, or 'all')"),
        )
        .arg(
            Arg::new("postseason")
                .long("postseason")
                .action(ArgAction::SetTrue)
                .help("Only show postseason games"),
        )
        .arg(
            Arg::new("team")
                .short('t')
                .long("team")
                .action(ArgAction::Append)
                .help("Team nickname to show (can be specified multiple times)"),
        )
        .arg(
            Arg::new("reason")
                .short('r')
                .long("reason")
                .action(ArgAction::Append)
                .help("Category to show: blowout, shutout, shame, underdog, maxedout, defensive"),
        )
        .arg(
            Arg::new("markdown")
                .long("markdown")
                .action(ArgAction::SetTrue)
                .help("Render Markdown tables instead of terminal tables"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write tables to this file instead of standard output"),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .action(ArgAction::SetTrue)
                .help("Overwrite an existing output file without waiting"),
        )
}

/// Extract all values of a repeatable argument
fn extract_many(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// Build view options from matches
fn build_options(matches: &ArgMatches) -> Result<ViewOptions, BlasetablesError> {
    let home_away = matches.get_flag("home-away");
    let win_loss = matches.get_flag("win-loss") || !home_away;
    let orientation = Orientation::from_flags(win_loss, home_away)?;

    let pitchers = Pitchers::none()
        .with_winning(matches.get_flag("winning-pitcher"))
        .with_losing(matches.get_flag("losing-pitcher"))
        .with_home(matches.get_flag("home-pitcher"))
        .with_away(matches.get_flag("away-pitcher"));

    let name_style: NameStyle = matches
        .get_one::<String>("name-style")
        .map(|s| s.as_str())
        .unwrap_or("short")
        .parse()?;

    let categories = extract_many(matches, "reason")
        .iter()
        .map(|name| name.parse::<Category>())
        .collect::<Result<Vec<_>, _>>()?;

    let result_limit = matches.get_one::<usize>("n-results").copied().unwrap_or(10);

    Ok(ViewOptions::new()
        .orientation(orientation)
        .pitchers(pitchers)
        .name_style(name_style)
        .result_limit(result_limit)
        .seasons(SeasonSelector::from_values(extract_many(matches, "season"))?)
        .postseason_only(matches.get_flag("postseason"))
        .teams(TeamSelector::teams(extract_many(matches, "team")))
        .categories(categories))
}

/// Render every requested table with the given renderer
fn render<R: Renderer>(
    options: ViewOptions,
    renderer: R,
    target: OutputTarget,
    data: &str,
) -> anyhow::Result<usize> {
    let source = JsonGameData::new(data, options.clone());
    let view = TableView::new(options, renderer, target);
    let count = view
        .render_all(&source)
        .with_context(|| format!("rendering tables from {}", data))?;
    Ok(count)
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let options = build_options(matches)?;
    let data = matches
        .get_one::<String>("data")
        .map(|s| s.as_str())
        .unwrap_or_default();

    let grace = if matches.get_flag("force") {
        Duration::ZERO
    } else {
        OVERWRITE_GRACE_PERIOD
    };
    let output = matches.get_one::<String>("output").map(Path::new);
    let target = OutputTarget::prepare(output, grace)?;
    let to_file = matches!(target, OutputTarget::File(_));

    let count = if matches.get_flag("markdown") {
        render(options, MarkdownRenderer::new(), target, data)?
    } else if to_file {
        render(options, ConsoleRenderer::plain(), target, data)?
    } else {
        render(options, ConsoleRenderer::new(), target, data)?
    };

    if count == 0 {
        log::warn!("no matching categories in {}", data);
    }
    Ok(())
}

/// Print an error the same way for usage and runtime failures
fn report(message: &str, configuration: bool) -> ExitCode {
    let label = Style::new().red().bold().for_stderr().apply_to("Error:");
    eprintln!("{} {}", label, message);
    if configuration {
        eprintln!("Run with --help to see the available options.");
    }
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = match build_command().try_get_matches() {
        Ok(matches) => matches,
        // --help and --version land here too
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let rendered = e.render().to_string();
            let message = rendered.trim_start_matches("error: ").trim_end();
            return report(message, false);
        }
    };

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let configuration = e
                .downcast_ref::<BlasetablesError>()
                .is_some_and(BlasetablesError::is_configuration);
            report(&format!("{:#}", e), configuration)
        }
    }
}
