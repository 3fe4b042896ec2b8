//! The scene graph of one chapter.

use std::collections::BTreeMap;

use super::{Branch, Scene};
use crate::error::ParseError;
use crate::resolve::closest_match;

/// All scenes of a chapter, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneGraph {
    scenes: BTreeMap<String, Scene>,
}

impl SceneGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scene, returning any scene previously stored under its id.
    pub fn insert(&mut self, scene: impl Into<Scene>) -> Option<Scene> {
        let scene = scene.into();
        self.scenes.insert(scene.id().to_string(), scene)
    }

    /// Add a scene and return the graph.
    pub fn with_scene(mut self, scene: impl Into<Scene>) -> Self {
        self.insert(scene);
        self
    }

    /// Get a scene by id.
    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Whether a scene with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.scenes.contains_key(id)
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the graph has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// All scenes, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values()
    }

    /// All scene ids, in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scenes.keys().map(String::as_str)
    }

    /// Remaining branches of a node scene, or `None` for other scenes.
    pub fn branches(&self, id: &str) -> Option<&[Branch]> {
        match self.scenes.get(id)? {
            Scene::Node(node) => Some(&node.branches),
            Scene::Leaf(_) | Scene::Terminus(_) => None,
        }
    }

    /// Permanently remove a branch from a node scene.
    pub fn prune(&mut self, id: &str, index: usize) -> Option<Branch> {
        match self.scenes.get_mut(id)? {
            Scene::Node(node) => {
                let pruned = node.prune(index)?;
                tracing::debug!(scene = id, target = %pruned.target, "branch pruned");
                Some(pruned)
            }
            Scene::Leaf(_) | Scene::Terminus(_) => None,
        }
    }

    /// The closest existing id to `id`, for error messages.
    pub fn suggest(&self, id: &str) -> Option<String> {
        closest_match(self.ids(), id)
    }

    /// Check that `start` and every target in the graph exist.
    pub fn validate(&self, start: &str) -> Result<(), ParseError> {
        if !self.contains(start) {
            return Err(ParseError::MissingStartScene(start.to_string()));
        }
        for scene in self.scenes.values() {
            if let Some(target) = scene.targets().into_iter().find(|t| !self.contains(t)) {
                return Err(ParseError::DanglingReference {
                    scene: scene.id().to_string(),
                    target: target.to_string(),
                    suggestion: self.suggest(target),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{LeafScene, NodeScene, TerminusScene};

    fn test_graph() -> SceneGraph {
        SceneGraph::new()
            .with_scene(
                NodeScene::new("village", "A village.")
                    .with_branch(Branch::new("forge", "visit forge"))
                    .with_branch(Branch::new("tavern", "visit tavern")),
            )
            .with_scene(LeafScene::new("forge", "Hot.", "village"))
            .with_scene(LeafScene::new("tavern", "Loud.", "end"))
            .with_scene(TerminusScene::new("end", "Fin."))
    }

    #[test]
    fn insert_and_get() {
        let graph = test_graph();
        assert_eq!(graph.len(), 4);
        assert!(graph.contains("village"));
        assert_eq!(graph.get("forge").map(Scene::id), Some("forge"));
        assert!(graph.get("moon").is_none());
    }

    #[test]
    fn prune_only_touches_nodes() {
        let mut graph = test_graph();

        let pruned = graph.prune("village", 0).unwrap();
        assert_eq!(pruned.target, "forge");
        assert_eq!(graph.branches("village").unwrap().len(), 1);
        assert_eq!(graph.branches("village").unwrap()[0].target, "tavern");

        assert!(graph.prune("forge", 0).is_none());
        assert!(graph.prune("moon", 0).is_none());
    }

    #[test]
    fn valid_graph_passes() {
        assert!(test_graph().validate("village").is_ok());
    }

    #[test]
    fn missing_start_scene() {
        let err = test_graph().validate("castle").unwrap_err();
        assert!(matches!(err, ParseError::MissingStartScene(id) if id == "castle"));
    }

    #[test]
    fn dangling_reference_with_suggestion() {
        let graph = test_graph().with_scene(LeafScene::new("well", "Deep.", "vilage"));
        let err = graph.validate("village").unwrap_err();
        match err {
            ParseError::DanglingReference {
                scene,
                target,
                suggestion,
            } => {
                assert_eq!(scene, "well");
                assert_eq!(target, "vilage");
                assert_eq!(suggestion.as_deref(), Some("village"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
