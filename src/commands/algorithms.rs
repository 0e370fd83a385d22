// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Algorithms command - lists what can be recorded

use super::OutputOptions;
use crate::algorithms::Algorithm;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Entry {
    name: &'static str,
    slug: &'static str,
    requires_start_node: bool,
    tracks_distances: bool,
}

/// Run the algorithms command
pub fn run(output: OutputOptions) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    list(&mut stdout, output)
}

fn list<W: Write>(out: &mut W, output: OutputOptions) -> Result<()> {
    let entries: Vec<_> = Algorithm::ALL
        .iter()
        .map(|a| Entry {
            name: a.name(),
            slug: a.slug(),
            requires_start_node: a.requires_start_node(),
            tracks_distances: a.tracks_distances(),
        })
        .collect();

    if output.json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    for entry in &entries {
        let start = if entry.requires_start_node { "needs --start" } else { "no start node" };
        writeln!(out, "  {:<14} {:<14} {}", entry.slug, entry.name, start)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_listing() {
        let mut out = Vec::new();
        list(&mut out, OutputOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("bellman-ford"));
        assert!(text.lines().last().unwrap().ends_with("no start node"));
    }

    #[test]
    fn test_json_listing() {
        let mut out = Vec::new();
        list(&mut out, OutputOptions { json: true, color: false }).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value[0]["slug"], "dijkstra");
        assert_eq!(value[3]["requires_start_node"], false);
    }
}
