//! Frame model for the agent-based label propagation animation.
//!
//! The animation runs on a fixed five vertex graph: a triangle `0-1-2`
//! bridged to the pair `3-4` through the edge `2-3`. Every vertex owns one
//! agent that walks to its neighbors, collects their labels, returns home and
//! takes part in a majority vote.
//!
//! ```text
//!        (1)
//!       /   \
//!    (0)     \
//!       \     \
//!        (2)--(3)--(4)
//! ```
//!
//! The frames here are a scripted trace; nothing in this crate runs the
//! algorithm. The sequencer treats them as opaque payloads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vertex index
pub type NodeId = usize;
/// Community label
pub type Label = usize;
/// Agent index (agent `i` lives on vertex `i`)
pub type AgentId = usize;

/// Layout position of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// The fixed graph the trace was recorded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    pub node_positions: Vec<Point>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::two_clusters()
    }
}

impl Graph {
    /// Triangle `0-1-2` connected to `3-4` via `2-3`.
    pub fn two_clusters() -> Self {
        let point = |x, y| Point { x, y };
        Graph {
            node_positions: vec![
                point(120.0, 100.0),
                point(220.0, 60.0),
                point(220.0, 140.0),
                point(320.0, 100.0),
                point(420.0, 100.0),
            ],
            edges: vec![(0, 1), (1, 2), (0, 2), (2, 3), (3, 4)],
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_positions.len()
    }

    /// Neighbors of `node` in ascending order.
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        let mut neighbors: Vec<NodeId> = self
            .edges
            .iter()
            .filter_map(|&(a, b)| match node {
                n if n == a => Some(b),
                n if n == b => Some(a),
                _ => None,
            })
            .collect();
        neighbors.sort_unstable();
        neighbors
    }

    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.edges
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}

/// Step of the algorithm a frame illustrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Init,
    Migrate,
    Collect,
    Return,
    Update,
    Converged,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Init => write!(f, "init"),
            Phase::Migrate => write!(f, "migrate"),
            Phase::Collect => write!(f, "collect"),
            Phase::Return => write!(f, "return"),
            Phase::Update => write!(f, "update"),
            Phase::Converged => write!(f, "converged"),
        }
    }
}

/// One snapshot of the animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub phase: Phase,
    /// Algorithm iteration, 0 for the initial state
    pub iteration: u32,
    pub description: String,
    /// Current label of each vertex
    pub labels: Vec<Label>,
    /// Vertex each agent stands on, `None` if it has no neighbor left to visit
    pub agent_positions: Vec<Option<NodeId>>,
    /// Label each agent carries
    pub agent_carrying: Vec<Label>,
    /// Labels gathered so far, per agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected: Option<BTreeMap<AgentId, Vec<Label>>>,
    /// Vote tally per vertex: label -> count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<BTreeMap<NodeId, BTreeMap<Label, u32>>>,
    /// Vertices drawn emphasized
    pub highlight: Vec<NodeId>,
    /// Agents drawn in motion
    pub moving: Vec<AgentId>,
}

impl Frame {
    pub fn is_highlighted(&self, node: NodeId) -> bool {
        self.highlight.contains(&node)
    }

    pub fn is_moving(&self, agent: AgentId) -> bool {
        self.moving.contains(&agent)
    }
}

/// Group vertices by label, labels in ascending order.
pub fn communities(labels: &[Label]) -> BTreeMap<Label, Vec<NodeId>> {
    let mut groups: BTreeMap<Label, Vec<NodeId>> = BTreeMap::new();
    for (node, &label) in labels.iter().enumerate() {
        groups.entry(label).or_default().push(node);
    }
    groups
}

fn collected(entries: &[(AgentId, &[Label])]) -> Option<BTreeMap<AgentId, Vec<Label>>> {
    Some(
        entries
            .iter()
            .map(|(agent, labels)| (*agent, labels.to_vec()))
            .collect(),
    )
}

fn tally(
    entries: &[(NodeId, &[(Label, u32)])],
) -> Option<BTreeMap<NodeId, BTreeMap<Label, u32>>> {
    Some(
        entries
            .iter()
            .map(|(node, counts)| (*node, counts.iter().copied().collect()))
            .collect(),
    )
}

fn frame(phase: Phase, iteration: u32, description: &str) -> Frame {
    Frame {
        phase,
        iteration,
        description: description.to_string(),
        labels: vec![0, 1, 2, 3, 4],
        agent_positions: HOME.to_vec(),
        agent_carrying: vec![0, 1, 2, 3, 4],
        collected: None,
        votes: None,
        highlight: Vec::new(),
        moving: Vec::new(),
    }
}

const HOME: [Option<NodeId>; 5] = [Some(0), Some(1), Some(2), Some(3), Some(4)];
const FIRST_NEIGHBOR: [Option<NodeId>; 5] = [Some(1), Some(0), Some(0), Some(2), Some(3)];
const SECOND_NEIGHBOR: [Option<NodeId>; 5] = [Some(2), Some(2), Some(1), Some(4), None];
const ALL: [usize; 5] = [0, 1, 2, 3, 4];

/// The scripted 12-frame trace on [`Graph::two_clusters`].
pub fn demo_trace() -> Vec<Frame> {
    let first_round: &[(AgentId, &[Label])] =
        &[(0, &[1]), (1, &[0]), (2, &[0]), (3, &[2]), (4, &[3])];
    let second_round: &[(AgentId, &[Label])] =
        &[(0, &[1, 2]), (1, &[0, 2]), (2, &[0, 1]), (3, &[2, 4]), (4, &[3])];
    let after_vote: &[(AgentId, &[Label])] =
        &[(0, &[2]), (1, &[2]), (2, &[2]), (3, &[2]), (4, &[4])];

    let voted = |mut f: Frame| {
        f.labels = vec![2, 2, 2, 4, 4];
        f.agent_carrying = vec![2, 2, 2, 4, 4];
        f
    };

    vec![
        frame(
            Phase::Init,
            0,
            "Initialize: Each vertex gets its own ID as label",
        ),
        Frame {
            agent_positions: FIRST_NEIGHBOR.to_vec(),
            moving: ALL.to_vec(),
            ..frame(
                Phase::Migrate,
                1,
                "Iteration 1: Agents migrate to first neighbor",
            )
        },
        Frame {
            agent_positions: FIRST_NEIGHBOR.to_vec(),
            collected: collected(first_round),
            highlight: ALL.to_vec(),
            ..frame(Phase::Collect, 1, "Agents collect neighbor labels")
        },
        Frame {
            collected: collected(first_round),
            moving: ALL.to_vec(),
            ..frame(Phase::Return, 1, "Agents return home")
        },
        Frame {
            agent_positions: SECOND_NEIGHBOR.to_vec(),
            collected: collected(first_round),
            moving: vec![0, 1, 2, 3],
            ..frame(Phase::Migrate, 1, "Agents migrate to second neighbor")
        },
        Frame {
            agent_positions: SECOND_NEIGHBOR.to_vec(),
            collected: collected(second_round),
            highlight: vec![0, 1, 2, 3],
            ..frame(Phase::Collect, 1, "Agents collect more labels")
        },
        Frame {
            collected: collected(second_round),
            moving: vec![0, 1, 2, 3],
            ..frame(Phase::Return, 1, "Agents return home")
        },
        Frame {
            // Ties are broken towards the highest label
            votes: tally(&[
                (0, &[(0, 1), (1, 1), (2, 1)]),
                (1, &[(0, 1), (1, 1), (2, 1)]),
                (2, &[(0, 1), (1, 1), (2, 1)]),
                (3, &[(2, 1), (3, 1), (4, 1)]),
                (4, &[(3, 1), (4, 1)]),
            ]),
            highlight: ALL.to_vec(),
            ..voted(frame(
                Phase::Update,
                1,
                "Majority vote: Vertices update labels",
            ))
        },
        Frame {
            agent_positions: FIRST_NEIGHBOR.to_vec(),
            moving: ALL.to_vec(),
            ..voted(frame(
                Phase::Migrate,
                2,
                "Iteration 2: Agents migrate to neighbors",
            ))
        },
        Frame {
            agent_positions: FIRST_NEIGHBOR.to_vec(),
            collected: collected(after_vote),
            highlight: ALL.to_vec(),
            ..voted(frame(Phase::Collect, 2, "Agents collect neighbor labels"))
        },
        Frame {
            collected: collected(after_vote),
            moving: ALL.to_vec(),
            ..voted(frame(Phase::Return, 2, "Agents return home"))
        },
        Frame {
            labels: vec![2, 2, 2, 2, 4],
            agent_carrying: vec![2, 2, 2, 2, 4],
            ..frame(
                Phase::Converged,
                2,
                "✓ Converged! Two communities found: {0,1,2,3} and {4}",
            )
        },
    ]
}
