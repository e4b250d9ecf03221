//! Terminal output for frame updates.

use lpa_core::label_propagation::{communities, Frame, Phase};
use serde::Serialize;
use std::fmt;

use crate::player::FrameUpdate;

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human readable frame description
    #[default]
    Text,
    /// One JSON object per update
    Json,
}

/// Title and algorithm outline, printed once before the first text frame.
pub const INTRO: &str = "\
Agent-Based Label Propagation
Community Detection Algorithm Visualization

Algorithm Steps:
  1. Initialize: Each vertex gets its own ID as label
  2. Migrate: Each agent visits its vertex's neighbors
  3. Collect: Agent collects neighbor's current label
  4. Return: Agent returns to home vertex
  5. Update: Majority vote - vertex adopts most common neighbor label
  6. Repeat: Until no labels change (converged)";

pub fn render(format: OutputFormat, update: &FrameUpdate<Frame>) -> String {
    match format {
        OutputFormat::Text => TextView(update).to_string(),
        OutputFormat::Json => serde_json::json!({
            "status": update.status,
            "frame": &*update.frame,
        })
        .to_string(),
    }
}

struct TextView<'a>(&'a FrameUpdate<Frame>);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = &self.0.status;
        let frame = &*self.0.frame;

        writeln!(
            f,
            "Step {}/{} [{}, {:.1}s]",
            status.step,
            status.frame_count,
            status.state,
            status.interval_ms as f64 / 1000.0
        )?;
        writeln!(f, "{}", frame.description)?;

        let vertices: Vec<String> = frame
            .labels
            .iter()
            .enumerate()
            .map(|(node, label)| {
                let marker = if frame.is_highlighted(node) { "*" } else { "" };
                format!("V{} L:{}{}", node, label, marker)
            })
            .collect();
        writeln!(f, "  Vertices: {}", vertices.join("  "))?;

        let agents: Vec<String> = frame
            .agent_positions
            .iter()
            .enumerate()
            .map(|(agent, position)| {
                let carrying = frame.agent_carrying.get(agent).copied().unwrap_or(agent);
                let moving = if frame.is_moving(agent) { "~" } else { "" };
                match position {
                    Some(node) => format!("A{}@V{}(L{}){}", agent, node, carrying, moving),
                    None => format!("A{}@-", agent),
                }
            })
            .collect();
        writeln!(f, "  Agents:   {}", agents.join("  "))?;

        if let Some(collected) = &frame.collected {
            let entries: Vec<String> = collected
                .iter()
                .map(|(agent, labels)| format!("A{} {:?}", agent, labels))
                .collect();
            writeln!(f, "  Collected labels: {}", entries.join("  "))?;
        }

        if let Some(votes) = &frame.votes {
            writeln!(f, "  Majority vote:")?;
            for (node, counts) in votes {
                let tally: Vec<String> = counts
                    .iter()
                    .map(|(label, count)| format!("L{}:{}", label, count))
                    .collect();
                let winner = frame.labels.get(*node).copied().unwrap_or(*node);
                writeln!(f, "    V{}: {} -> L{}", node, tally.join(", "), winner)?;
            }
        }

        if frame.phase == Phase::Converged {
            let groups: Vec<String> = communities(&frame.labels)
                .values()
                .map(|nodes| {
                    let nodes: Vec<String> = nodes.iter().map(|n| n.to_string()).collect();
                    format!("{{{}}}", nodes.join(","))
                })
                .collect();
            writeln!(f, "  Communities: {}", groups.join(" "))?;
        }
        Ok(())
    }
}
