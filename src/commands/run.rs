// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Run command - records an algorithm and replays its steps

use super::{GraphArgs, OutputOptions};
use crate::algorithms::Algorithm;
use crate::config::Config;
use crate::graph::Graph;
use crate::step::AlgorithmStep;
use crate::summary::{Outcome, RunSummary};
use crate::types::NodeId;
use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tracing::{info, warn};

/// Arguments for the run command
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Algorithm to record
    pub algorithm: Algorithm,
    /// Start node for algorithms that need one
    pub start: Option<NodeId>,
    /// The graph to run on
    pub graph: GraphArgs,
    /// Pause override in milliseconds
    pub delay_ms: Option<u64>,
    /// Stop the replay after this step (1-based)
    pub step: Option<usize>,
}

/// JSON document printed with `--json`
#[derive(Serialize)]
struct Report<'a> {
    algorithm: Algorithm,
    steps: &'a [AlgorithmStep],
    summary: Option<RunSummary>,
}

/// Run the run command
pub fn run(args: RunArgs, config: &Config, output: OutputOptions) -> Result<()> {
    let graph = args.graph.build()?;

    if matches!(args.algorithm, Algorithm::Mst(_)) && !graph.is_connected() {
        warn!(
            "Graph has {} components; {} will build a spanning forest",
            graph.component_count(),
            args.algorithm
        );
    }

    let steps = args
        .algorithm
        .run(&graph, args.start)
        .with_context(|| format!("Failed to run {}", args.algorithm))?;
    info!("Recorded {} steps", steps.len());

    let shown = visible_steps(&steps, args.step)?;
    let delay = args
        .delay_ms
        .map_or_else(|| config.playback.delay(), Duration::from_millis);

    let mut stdout = std::io::stdout().lock();
    if output.json {
        write_json(&mut stdout, args.algorithm, &graph, shown)
    } else {
        replay(&mut stdout, &graph, shown, steps.len(), delay, output.color)
    }
}

/// Steps up to and including `step`
fn visible_steps(steps: &[AlgorithmStep], step: Option<usize>) -> Result<&[AlgorithmStep]> {
    match step {
        None => Ok(steps),
        Some(0) => bail!("--step counts from 1"),
        Some(n) if n > steps.len() => {
            warn!("Only {} steps recorded, showing all of them", steps.len());
            Ok(steps)
        }
        Some(n) => Ok(&steps[..n]),
    }
}

fn write_json<W: Write>(
    out: &mut W,
    algorithm: Algorithm,
    graph: &Graph,
    steps: &[AlgorithmStep],
) -> Result<()> {
    let report = Report {
        algorithm,
        steps,
        summary: RunSummary::from_steps(graph, steps),
    };
    serde_json::to_writer_pretty(&mut *out, &report).context("Failed to serialize steps")?;
    writeln!(out)?;
    Ok(())
}

/// Print steps one by one, pausing `delay` between them, then a summary
pub fn replay<W: Write>(
    out: &mut W,
    graph: &Graph,
    steps: &[AlgorithmStep],
    total: usize,
    delay: Duration,
    color: bool,
) -> Result<()> {
    let width = total.to_string().len();

    for (i, step) in steps.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            out.flush()?;
            std::thread::sleep(delay);
        }
        let counter = format!("[{:>width$}/{}]", i + 1, total);
        if color {
            writeln!(out, "{} {}", counter.dimmed(), step.log_message())?;
        } else {
            writeln!(out, "{} {}", counter, step.log_message())?;
        }
    }

    let Some(summary) = RunSummary::from_steps(graph, steps) else {
        return Ok(());
    };

    writeln!(out)?;
    let outcome = match summary.outcome {
        Outcome::Finished if steps.len() < total => "stopped early",
        Outcome::Finished => "finished",
        Outcome::NegativeCycle => "negative cycle",
    };
    if color {
        match summary.outcome {
            Outcome::Finished => writeln!(out, "Outcome: {}", outcome.green())?,
            Outcome::NegativeCycle => writeln!(out, "Outcome: {}", outcome.red())?,
        }
    } else {
        writeln!(out, "Outcome: {outcome}")?;
    }

    if let Some(distances) = &summary.distances {
        let listed: Vec<_> = distances.iter().map(|(n, d)| format!("{n}={d}")).collect();
        writeln!(out, "Distances: {}", listed.join(" "))?;
    }
    if let Some(weight) = summary.mst_weight {
        writeln!(out, "MST weight: {weight}")?;
    }

    Ok(())
}
