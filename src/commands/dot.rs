// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Dot command - renders the graph, or one recorded step, for Graphviz

use super::GraphArgs;
use crate::algorithms::Algorithm;
use crate::types::NodeId;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the dot command
#[derive(Debug, Clone)]
pub struct DotArgs {
    /// The graph to render
    pub graph: GraphArgs,
    /// Color the output by a step of this algorithm
    pub algorithm: Option<Algorithm>,
    /// Start node for the algorithm
    pub start: Option<NodeId>,
    /// Which step to render (1-based), the last one by default
    pub step: Option<usize>,
    /// Output file (stdout if not specified)
    pub output: Option<PathBuf>,
}

/// Run the dot command
pub fn run(args: DotArgs) -> Result<()> {
    let content = render(&args)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
        }
    }

    Ok(())
}

fn render(args: &DotArgs) -> Result<String> {
    let graph = args.graph.build()?;

    let Some(algorithm) = args.algorithm else {
        return Ok(graph.to_dot(None));
    };

    let steps = algorithm
        .run(&graph, args.start)
        .with_context(|| format!("Failed to run {algorithm}"))?;
    let index = match args.step {
        Some(0) => anyhow::bail!("--step counts from 1"),
        Some(n) => n.min(steps.len()) - 1,
        None => steps.len() - 1,
    };
    info!("Rendering step {} of {}", index + 1, steps.len());

    Ok(graph.to_dot(steps.get(index)))
}
