//! Procedural sector graph.
//!
//! Only node positions and chord edges are random. Node kind and faction come
//! from fixed cycling tables keyed by index, and a ring of edges keeps every
//! node reachable.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::balance::{
    EXTRA_EDGE_ATTEMPTS, MIN_EDGE_DISTANCE, NODE_COUNT, SECTOR_INNER_RADIUS, SECTOR_RADIUS,
};
use crate::content::NODE_NAMES;
use crate::rng::SeededStream;
use crate::types::{FactionId, NodeKind, Vec2};

const KIND_CYCLE: [NodeKind; 4] =
    [NodeKind::Station, NodeKind::Field, NodeKind::Outpost, NodeKind::Field];

const FACTION_CYCLE: [Option<FactionId>; 5] = [
    Some(FactionId::HelixGuild),
    Some(FactionId::FreeHaulers),
    None,
    Some(FactionId::OrbitalUnion),
    Some(FactionId::FreeHaulers),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub faction: Option<FactionId>,
    pub position: Vec2,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorEdge {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub nodes: Vec<SectorNode>,
    pub edges: Vec<SectorEdge>,
}

impl Sector {
    pub fn node(&self, id: &str) -> Option<&SectorNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Edges are traversable in both directions.
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&SectorEdge> {
        self.edges
            .iter()
            .find(|edge| (edge.from == a && edge.to == b) || (edge.from == b && edge.to == a))
    }

    pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges.iter().filter_map(move |edge| {
            if edge.from == id {
                Some(edge.to.as_str())
            } else if edge.to == id {
                Some(edge.from.as_str())
            } else {
                None
            }
        })
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &SectorNode> {
        self.nodes.iter().filter(move |node| node.kind == kind)
    }
}

pub fn node_id(index: usize) -> String {
    format!("node-{index}")
}

pub fn generate_sector(seed: &str) -> Sector {
    let mut stream = SeededStream::from_key(&format!("{seed}|sector"));

    let nodes: Vec<SectorNode> = (0..NODE_COUNT)
        .map(|index| {
            let angle = stream.next_f64() * TAU;
            let radius =
                SECTOR_INNER_RADIUS + stream.next_f64() * (SECTOR_RADIUS - SECTOR_INNER_RADIUS);
            SectorNode {
                id: node_id(index),
                name: NODE_NAMES[index % NODE_NAMES.len()].to_string(),
                kind: KIND_CYCLE[index % KIND_CYCLE.len()],
                faction: FACTION_CYCLE[index % FACTION_CYCLE.len()],
                position: Vec2::new(angle.cos() * radius, angle.sin() * radius),
            }
        })
        .collect();

    let mut edges: Vec<SectorEdge> = Vec::with_capacity(NODE_COUNT + EXTRA_EDGE_ATTEMPTS);
    for index in 0..nodes.len() {
        let next = (index + 1) % nodes.len();
        if next != index {
            edges.push(make_edge(&nodes[index], &nodes[next]));
        }
    }

    if nodes.len() > 1 {
        for _ in 0..EXTRA_EDGE_ATTEMPTS {
            let a = stream.range_usize(0, nodes.len() - 1);
            let b = stream.range_usize(0, nodes.len() - 1);
            if a == b {
                continue;
            }
            let exists = edges.iter().any(|edge| {
                (edge.from == nodes[a].id && edge.to == nodes[b].id)
                    || (edge.from == nodes[b].id && edge.to == nodes[a].id)
            });
            if !exists {
                edges.push(make_edge(&nodes[a], &nodes[b]));
            }
        }
    }

    tracing::debug!(seed, nodes = nodes.len(), edges = edges.len(), "sector generated");
    Sector { nodes, edges }
}

fn make_edge(from: &SectorNode, to: &SectorNode) -> SectorEdge {
    SectorEdge {
        from: from.id.clone(),
        to: to.id.clone(),
        distance: from.position.distance(to.position).max(MIN_EDGE_DISTANCE),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn same_seed_same_sector() {
        assert_eq!(generate_sector("sector-a"), generate_sector("sector-a"));
        assert_ne!(generate_sector("sector-a"), generate_sector("sector-b"));
    }

    #[test]
    fn kinds_and_factions_follow_index_tables() {
        let left = generate_sector("tables-1");
        let right = generate_sector("tables-2");
        for (a, b) in left.nodes.iter().zip(&right.nodes) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.faction, b.faction);
            assert_eq!(a.id, b.id);
        }
        assert!(left.nodes_of_kind(NodeKind::Station).count() >= 1);
        assert!(left.nodes_of_kind(NodeKind::Field).count() >= 1);
    }

    #[test]
    fn nodes_sit_inside_disk() {
        for node in generate_sector("disk").nodes {
            assert!(node.position.length() <= SECTOR_RADIUS + 1e-9);
            assert!(node.position.length() >= SECTOR_INNER_RADIUS - 1e-9);
        }
    }

    #[test]
    fn ring_guarantees_successor_and_connectivity() {
        let sector = generate_sector("ring");
        for (index, node) in sector.nodes.iter().enumerate() {
            let successor = node_id((index + 1) % sector.nodes.len());
            assert!(sector.edge_between(&node.id, &successor).is_some());
        }

        let mut seen = BTreeSet::new();
        let mut frontier = vec![sector.nodes[0].id.as_str()];
        while let Some(current) = frontier.pop() {
            if seen.insert(current) {
                frontier.extend(sector.neighbors(current));
            }
        }
        assert_eq!(seen.len(), sector.nodes.len());
    }

    #[test]
    fn edges_are_unique_and_floor_clamped() {
        let sector = generate_sector("edges");
        let mut pairs = BTreeSet::new();
        for edge in &sector.edges {
            assert!(edge.distance >= MIN_EDGE_DISTANCE);
            let pair = if edge.from < edge.to {
                (edge.from.clone(), edge.to.clone())
            } else {
                (edge.to.clone(), edge.from.clone())
            };
            assert!(pairs.insert(pair), "duplicate edge {} - {}", edge.from, edge.to);
        }
    }
}
