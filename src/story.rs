//! Story graph: immutable narrative nodes loaded once from the bundled RON
//! asset and validated before any run starts.

use std::collections::{BTreeMap, VecDeque};

use ron::Options;
use serde::{Deserialize, Serialize};

use crate::config::FINALE_PREFIX;
use crate::error::{GameError, Result};

/// Target id meaning "this choice ends the run".
pub const END_OF_RUN: i32 = -1;
pub const ENTRY_NODE: i32 = 0;

const BUNDLED_STORY: &str = include_str!("../assets/story.ron");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndingTag {
    Good,
    Bad,
    Neutral,
}

impl EndingTag {
    pub fn label(&self) -> &'static str {
        match self {
            EndingTag::Good => "Good ending",
            EndingTag::Bad => "Bad ending",
            EndingTag::Neutral => "Neutral ending",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EndingTag::Good => "#3fb950",
            EndingTag::Bad => "#f85149",
            EndingTag::Neutral => "#d29922",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub target: i32,
    pub xp: i64,
    pub score: i64,
    #[serde(default)]
    pub flavor: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoryNode {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub is_ending: bool,
    #[serde(default)]
    pub ending_tag: Option<EndingTag>,
}

impl StoryNode {
    /// Achievement name unlocked by reaching this node: the finale text of
    /// its closing choice, or the title when there is none.
    pub fn ending_name(&self) -> String {
        self.choices
            .iter()
            .find_map(|c| c.flavor.strip_prefix(FINALE_PREFIX))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.title.clone())
    }
}

/// What picking a choice leads to.
#[derive(Clone, Debug, PartialEq)]
pub struct ChoiceOutcome {
    pub next_node: i32,
    pub xp_reward: i64,
    pub score_reward: i64,
    pub flavor: String,
    pub is_terminal: bool,
    /// Ending unlocked by this choice, if any.
    pub ending: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StoryFile {
    nodes: Vec<StoryNode>,
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoryGraph {
    nodes: BTreeMap<i32, StoryNode>,
}

impl StoryGraph {
    /// The story shipped with the game, parsed and validated.
    pub fn bundled() -> Result<StoryGraph> {
        StoryGraph::from_ron(BUNDLED_STORY)
    }

    pub fn from_ron(source: &str) -> Result<StoryGraph> {
        let file: StoryFile = ron_options()
            .from_str(source)
            .map_err(|e| GameError::StoryData(e.to_string()))?;
        StoryGraph::from_nodes(file.nodes)
    }

    pub fn from_nodes(nodes: Vec<StoryNode>) -> Result<StoryGraph> {
        let mut map = BTreeMap::new();
        for node in nodes {
            let id = node.id;
            if map.insert(id, node).is_some() {
                return Err(GameError::InvalidGraph(format!("duplicate node id {id}")));
            }
        }
        let graph = StoryGraph { nodes: map };
        graph.validate()?;
        Ok(graph)
    }

    pub fn node(&self, id: i32) -> Result<&StoryNode> {
        self.nodes.get(&id).ok_or(GameError::NodeNotFound(id))
    }

    #[cfg(test)]
    pub fn entry(&self) -> Result<&StoryNode> {
        self.node(ENTRY_NODE)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn ending_count(&self) -> usize {
        self.nodes.values().filter(|n| n.is_ending).count()
    }

    pub fn resolve_choice(&self, current: i32, index: usize) -> Result<ChoiceOutcome> {
        let node = self.node(current)?;
        let choice = node.choices.get(index).ok_or(GameError::ChoiceOutOfRange {
            node: current,
            index,
            available: node.choices.len(),
        })?;

        let (is_terminal, ending) = if choice.target == END_OF_RUN {
            (true, node.is_ending.then(|| node.ending_name()))
        } else {
            let target = self.node(choice.target)?;
            (target.is_ending, target.is_ending.then(|| target.ending_name()))
        };

        Ok(ChoiceOutcome {
            next_node: choice.target,
            xp_reward: choice.xp,
            score_reward: choice.score,
            flavor: choice.flavor.clone(),
            is_terminal,
            ending,
        })
    }

    /// Authoring checks. Any failure is a defect in the dataset.
    pub fn validate(&self) -> Result<()> {
        if !self.nodes.contains_key(&ENTRY_NODE) {
            return Err(GameError::InvalidGraph("missing entry node 0".into()));
        }

        for node in self.nodes.values() {
            if node.is_ending != node.ending_tag.is_some() {
                return Err(GameError::InvalidGraph(format!(
                    "node {} must have an ending tag exactly when it is an ending",
                    node.id
                )));
            }
            if node.choices.is_empty() {
                return Err(GameError::InvalidGraph(format!(
                    "node {} has no choices",
                    node.id
                )));
            }
            for choice in &node.choices {
                if node.is_ending && choice.target != END_OF_RUN {
                    return Err(GameError::InvalidGraph(format!(
                        "ending node {} has a choice leading to {}",
                        node.id, choice.target
                    )));
                }
                if choice.target != END_OF_RUN && !self.nodes.contains_key(&choice.target) {
                    return Err(GameError::InvalidGraph(format!(
                        "node {} points at missing node {}",
                        node.id, choice.target
                    )));
                }
            }
        }

        // Reachability from the entry node
        let mut reached: BTreeMap<i32, bool> = self.nodes.keys().map(|id| (*id, false)).collect();
        let mut queue = VecDeque::from([ENTRY_NODE]);
        reached.insert(ENTRY_NODE, true);
        while let Some(id) = queue.pop_front() {
            for choice in &self.nodes[&id].choices {
                if choice.target == END_OF_RUN {
                    continue;
                }
                if let Some(seen) = reached.get_mut(&choice.target) {
                    if !*seen {
                        *seen = true;
                        queue.push_back(choice.target);
                    }
                }
            }
        }
        if let Some((id, _)) = reached.iter().find(|(_, seen)| !**seen) {
            return Err(GameError::InvalidGraph(format!(
                "node {id} is unreachable from the entry node"
            )));
        }

        self.check_acyclic()
    }

    fn check_acyclic(&self) -> Result<()> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }
        let mut marks: BTreeMap<i32, Mark> =
            self.nodes.keys().map(|id| (*id, Mark::Unvisited)).collect();

        for &start in self.nodes.keys() {
            if marks[&start] != Mark::Unvisited {
                continue;
            }
            // Iterative DFS: (node, index of next choice to follow)
            let mut stack: Vec<(i32, usize)> = vec![(start, 0)];
            marks.insert(start, Mark::InProgress);
            while let Some((id, next)) = stack.pop() {
                let choices = &self.nodes[&id].choices;
                if next >= choices.len() {
                    marks.insert(id, Mark::Done);
                    continue;
                }
                stack.push((id, next + 1));
                let target = choices[next].target;
                if target == END_OF_RUN {
                    continue;
                }
                match marks[&target] {
                    Mark::InProgress => {
                        return Err(GameError::InvalidGraph(format!(
                            "node {target} can reach itself"
                        )));
                    }
                    Mark::Unvisited => {
                        marks.insert(target, Mark::InProgress);
                        stack.push((target, 0));
                    }
                    Mark::Done => {}
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(target: i32, xp: i64, score: i64, flavor: &str) -> Choice {
        Choice {
            label: format!("go {target}"),
            target,
            xp,
            score,
            flavor: flavor.to_string(),
        }
    }

    fn node(id: i32, choices: Vec<Choice>) -> StoryNode {
        StoryNode {
            id,
            title: format!("Node {id}"),
            text: String::new(),
            choices,
            is_ending: false,
            ending_tag: None,
        }
    }

    fn ending(id: i32, name: &str) -> StoryNode {
        StoryNode {
            is_ending: true,
            ending_tag: Some(EndingTag::Good),
            ..node(id, vec![choice(END_OF_RUN, 10, 10, &format!("FINALE: {name}"))])
        }
    }

    fn small_graph() -> StoryGraph {
        StoryGraph::from_nodes(vec![
            node(0, vec![choice(1, 50, 100, "left"), choice(2, 30, 80, "right")]),
            node(1, vec![choice(2, 20, 40, "converge")]),
            ending(2, "Shared End"),
        ])
        .unwrap()
    }

    #[test]
    fn bundled_story_is_valid() {
        let graph = StoryGraph::bundled().unwrap();
        assert_eq!(graph.len(), 30);
        assert_eq!(graph.ending_count(), 17);
        assert_eq!(graph.entry().unwrap().title, "Awakening");
    }

    #[test]
    fn bundled_ending_names_strip_finale_prefix() {
        let graph = StoryGraph::bundled().unwrap();
        assert_eq!(graph.node(13).unwrap().ending_name(), "Digital God");
        assert_eq!(graph.node(18).unwrap().ending_tag, Some(EndingTag::Bad));
    }

    #[test]
    fn resolve_returns_choice_fields() {
        let graph = small_graph();
        let out = graph.resolve_choice(0, 0).unwrap();
        assert_eq!(out.next_node, 1);
        assert_eq!(out.xp_reward, 50);
        assert_eq!(out.score_reward, 100);
        assert_eq!(out.flavor, "left");
        assert!(!out.is_terminal);
        assert!(out.ending.is_none());
    }

    #[test]
    fn choice_into_ending_node_is_terminal() {
        let graph = small_graph();
        let out = graph.resolve_choice(1, 0).unwrap();
        assert!(out.is_terminal);
        assert_eq!(out.ending.as_deref(), Some("Shared End"));
    }

    #[test]
    fn end_of_run_choice_is_terminal() {
        let graph = small_graph();
        let out = graph.resolve_choice(2, 0).unwrap();
        assert_eq!(out.next_node, END_OF_RUN);
        assert!(out.is_terminal);
        assert_eq!(out.ending.as_deref(), Some("Shared End"));
    }

    #[test]
    fn out_of_range_choice_is_an_index_error() {
        let err = small_graph().resolve_choice(0, 2).unwrap_err();
        assert!(matches!(
            err,
            GameError::ChoiceOutOfRange {
                node: 0,
                index: 2,
                available: 2
            }
        ));
    }

    #[test]
    fn unknown_node_is_not_found() {
        let err = small_graph().resolve_choice(42, 0).unwrap_err();
        assert!(matches!(err, GameError::NodeNotFound(42)));
        assert!(err.is_fatal());
    }

    #[test]
    fn converging_targets_are_allowed() {
        // both 0 and 1 lead to node 2
        assert_eq!(small_graph().ending_count(), 1);
    }

    #[test]
    fn rejects_unreachable_node() {
        let err = StoryGraph::from_nodes(vec![
            node(0, vec![choice(1, 0, 0, "")]),
            ending(1, "End"),
            ending(5, "Orphan"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("unreachable"));
    }

    #[test]
    fn rejects_missing_target() {
        let err = StoryGraph::from_nodes(vec![node(0, vec![choice(9, 0, 0, "")])]).unwrap_err();
        assert!(matches!(err, GameError::InvalidGraph(_)));
    }

    #[test]
    fn rejects_ending_with_forward_choice() {
        let mut bad = ending(1, "End");
        bad.choices.push(choice(0, 0, 0, ""));
        let err = StoryGraph::from_nodes(vec![node(0, vec![choice(1, 0, 0, "")]), bad])
            .unwrap_err();
        assert!(err.to_string().contains("ending node 1"));
    }

    #[test]
    fn rejects_cycles() {
        let err = StoryGraph::from_nodes(vec![
            node(0, vec![choice(1, 0, 0, "")]),
            node(1, vec![choice(2, 0, 0, ""), choice(END_OF_RUN, 0, 0, "")]),
            node(2, vec![choice(1, 0, 0, "")]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("reach itself"));
    }

    #[test]
    fn rejects_duplicate_ids_and_missing_entry() {
        let dup = StoryGraph::from_nodes(vec![
            node(0, vec![choice(END_OF_RUN, 0, 0, "")]),
            node(0, vec![choice(END_OF_RUN, 0, 0, "")]),
        ]);
        assert!(dup.is_err());
        let no_entry = StoryGraph::from_nodes(vec![ending(3, "End")]);
        assert!(no_entry.is_err());
    }

    #[test]
    fn parse_errors_are_story_data_errors() {
        let err = StoryGraph::from_ron("(nodes: [ (id: 0, ").unwrap_err();
        assert!(matches!(err, GameError::StoryData(_)));
    }

    #[test]
    fn ending_name_falls_back_to_title() {
        let mut n = ending(4, "ignored");
        n.choices[0].flavor = "The end".into();
        assert_eq!(n.ending_name(), "Node 4");
    }

    #[test]
    fn every_bundled_ending_has_a_distinct_name() {
        let graph = StoryGraph::bundled().unwrap();
        let mut names: Vec<String> = (0..30)
            .filter_map(|id| graph.node(id).ok())
            .filter(|n| n.is_ending)
            .map(|n| n.ending_name())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), graph.ending_count());
    }
}
