use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use matchcast::{
    collect_adjustments, forecast, line_probabilities, prompt_line, prompt_scores, run_dir,
    summarize, write_report, AdjustmentMap, TeamStats,
};

/// Interactive two-team match forecast from recent scoring history
#[derive(Parser, Debug)]
#[command(name = "matchcast", version, about)]
struct Config {
    /// Base directory for dated report output
    #[arg(long, env = "MATCHCAST_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,

    /// CSV file of head-to-head adjustments to preload (home,away,factor)
    #[arg(long)]
    adjustments: Option<PathBuf>,

    /// Skip writing the xlsx report
    #[arg(long, default_value = "false")]
    no_export: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let home_name = prompt_line(&mut input, &mut output, "Enter the home team's name")?;
    let away_name = prompt_line(&mut input, &mut output, "Enter the away team's name")?;

    let (home_stats, home_lines) = read_team(&mut input, &mut output, &home_name)?;
    let (away_stats, away_lines) = read_team(&mut input, &mut output, &away_name)?;

    info!(
        team = %home_name,
        mean = home_stats.mean,
        conceded = home_stats.opponent_mean,
        std_dev = home_stats.std_dev,
        "home form"
    );
    info!(
        team = %away_name,
        mean = away_stats.mean,
        conceded = away_stats.opponent_mean,
        std_dev = away_stats.std_dev,
        "away form"
    );

    let home_probs = line_probabilities(home_stats.mean, &home_lines, home_stats.std_dev)?;
    let away_probs = line_probabilities(away_stats.mean, &away_lines, away_stats.std_dev)?;

    let mut adjustments = AdjustmentMap::new();
    if let Some(path) = &config.adjustments {
        adjustments
            .read_from_file(path)
            .with_context(|| format!("failed to read adjustments from {}", path.display()))?;
        info!(count = adjustments.len(), "preloaded adjustments");
    }
    collect_adjustments(&mut input, &mut output, &mut adjustments)?;

    let result = forecast(&home_probs, &away_probs, &adjustments)?;

    writeln!(output)?;
    writeln!(
        output,
        "Predicted match outcome is {} with an adjusted probability of {:.2}%",
        result.best_outcome, result.best_outcome_pct
    )?;
    writeln!(output)?;
    writeln!(output, "Win/draw/loss split:")?;
    writeln!(output, "  Home Win: {:.2}%", result.outcomes.home_win)?;
    writeln!(output, "  Away Win: {:.2}%", result.outcomes.away_win)?;
    writeln!(output, "  Draw:     {:.2}%", result.outcomes.draw)?;
    writeln!(output)?;
    writeln!(output, "Probabilities for each possible total points outcome:")?;
    for (points, pct) in &result.total_points {
        writeln!(output, "  Total points {points}: {pct:.2}%")?;
    }

    if !config.no_export {
        let dir = run_dir(&config.out_dir)?;
        let path = write_report(&dir, &home_name, &away_name, &result)?;
        info!("report written to {}", path.display());
    }

    Ok(())
}

fn read_team<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    name: &str,
) -> Result<(TeamStats, Vec<i64>)> {
    writeln!(output, "\nEnter data for {name}")?;
    let scored = prompt_scores(
        input,
        output,
        &format!("{name}'s points scored in recent games (space-separated)"),
    )?;
    let conceded = prompt_scores(
        input,
        output,
        &format!("Opponents' points against {name} in recent games (space-separated)"),
    )?;
    let stats = summarize(&scored, &conceded)?;
    Ok((stats, scored))
}
