//! JSON document model for chapters and saves.
//!
//! Chapters and saves share one shape: a player, a map of scenes tagged by
//! `sceneType`, the scene to start from and an optional next chapter. The
//! serde types here mirror that shape exactly; converting them into a
//! [`Chapter`] or [`Session`] is where requirement and event types are
//! checked and scene references are validated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::choice::{Event, Requirement};
use crate::config::EngineConfig;
use crate::error::ParseError;
use crate::player::Player;
use crate::scene::{Branch, LeafScene, NodeScene, Scene, SceneGraph, TerminusScene};
use crate::session::{Chapter, Session};

/// A chapter or save document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Name of the game. Required in saves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    /// Scene to start or resume from.
    pub curr_scene: String,
    /// Chapter that follows this one. Empty means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_chapter: Option<String>,
    /// The player. Required in saves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<Player>,
    /// Scenes by id.
    pub scenes: BTreeMap<String, SceneDoc>,
}

/// A scene as written in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sceneType", rename_all = "lowercase")]
pub enum SceneDoc {
    /// A scene with branches.
    Node {
        /// Text template.
        lines: String,
        /// Event applied on every visit.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event: Option<EventDoc>,
        /// Remaining branches.
        branches: Vec<BranchDoc>,
    },
    /// A scene with one successor.
    Leaf {
        /// Text template.
        lines: String,
        /// Event applied on every visit.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event: Option<EventDoc>,
        /// The successor. Empty ends the chapter.
        #[serde(rename = "nextScene")]
        next_scene: String,
    },
    /// The closing scene.
    Terminus {
        /// Text template.
        lines: String,
    },
}

/// An event as written in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDoc {
    /// `getPerk`, `getStatus` or `getItem`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The tag granted.
    pub arg: String,
}

/// A branch as written in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchDoc {
    /// Target scene id. Empty ends the chapter.
    pub b_scene: String,
    /// Prompt template.
    pub prompt: String,
    /// Event applied when taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<EventDoc>,
    /// Gate on the branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<RequirementDoc>,
}

/// A requirement as written in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementDoc {
    /// `perk`, `item`, `status`, `and`, `or` or `not`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Tag, child list or single child, depending on `kind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub req: Option<RequirementArg>,
}

/// The `req` payload of a requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequirementArg {
    /// A tag, for `perk`, `item` and `status`.
    Tag(String),
    /// Children, for `and` and `or`.
    List(Vec<RequirementDoc>),
    /// The child of `not`.
    Single(Box<RequirementDoc>),
}

impl Document {
    /// Parse a document without interpreting it.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ParseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Capture a session, including its pruned branches.
    pub fn from_session(session: &Session) -> Self {
        Self {
            game_name: Some(session.game_name().to_string()),
            curr_scene: session.current_scene().to_string(),
            next_chapter: session.next_chapter().map(str::to_string),
            player: Some(session.player().clone()),
            scenes: session
                .graph()
                .iter()
                .map(|scene| (scene.id().to_string(), SceneDoc::from(scene)))
                .collect(),
        }
    }

    /// Build the chapter described by this document. Any player is ignored.
    pub fn into_chapter(self, config: &EngineConfig) -> Result<Chapter, ParseError> {
        let mut graph = SceneGraph::new();
        for (id, doc) in self.scenes {
            let scene = build_scene(id, doc, config)?;
            graph.insert(scene);
        }

        if config.validate_references {
            graph.validate(&self.curr_scene)?;
        }

        Ok(Chapter {
            graph,
            start: self.curr_scene,
            next_chapter: self.next_chapter.filter(|id| !id.is_empty()),
            game_name: self.game_name.unwrap_or_default(),
        })
    }

    /// Build a session from a document that carries a player.
    pub fn into_session(mut self, config: &EngineConfig) -> Result<Session, ParseError> {
        let player = self.player.take().ok_or(ParseError::MissingField("player"))?;
        Ok(Session::new(player, self.into_chapter(config)?))
    }
}

/// Parse a chapter document. `player` and `gameName` are optional.
pub fn parse_chapter(json: &str, config: &EngineConfig) -> Result<Chapter, ParseError> {
    Document::from_json(json)?.into_chapter(config)
}

/// Parse a save document. `player` and `gameName` are required.
pub fn parse_session(json: &str, config: &EngineConfig) -> Result<Session, ParseError> {
    let document = Document::from_json(json)?;
    if document.game_name.is_none() {
        return Err(ParseError::MissingField("gameName"));
    }
    document.into_session(config)
}

/// Write a session as a save document.
pub fn serialize_session(session: &Session) -> Result<String, ParseError> {
    Document::from_session(session).to_json()
}

fn build_scene(id: String, doc: SceneDoc, config: &EngineConfig) -> Result<Scene, ParseError> {
    let context = format!("scene \"{id}\"");
    let scene = match doc {
        SceneDoc::Node {
            lines,
            event,
            branches,
        } => {
            let mut node = NodeScene::new(id, lines);
            node.event = build_event(event, &context, config)?;
            for (i, branch) in branches.into_iter().enumerate() {
                let context = format!("{context}, branch {}", i + 1);
                node.branches.push(build_branch(branch, &context, config)?);
            }
            Scene::Node(node)
        }
        SceneDoc::Leaf {
            lines,
            event,
            next_scene,
        } => {
            let mut leaf = LeafScene::new(id, lines, next_scene);
            leaf.event = build_event(event, &context, config)?;
            Scene::Leaf(leaf)
        }
        SceneDoc::Terminus { lines } => Scene::Terminus(TerminusScene::new(id, lines)),
    };
    Ok(scene)
}

fn build_branch(doc: BranchDoc, context: &str, config: &EngineConfig) -> Result<Branch, ParseError> {
    let mut branch = Branch::new(doc.b_scene, doc.prompt);
    branch.event = build_event(doc.event, context, config)?;
    branch.requirement = match doc.requirement {
        Some(requirement) => build_requirement(requirement, context, config)?,
        None => None,
    };
    Ok(branch)
}

/// `Ok(None)` means the event was absent, or dropped by a lenient load.
fn build_event(doc: Option<EventDoc>, context: &str, config: &EngineConfig) -> Result<Option<Event>, ParseError> {
    let Some(EventDoc { kind, arg }) = doc else {
        return Ok(None);
    };
    let event = match kind.as_str() {
        "getPerk" => Event::GrantPerk(arg),
        "getStatus" => Event::GrantStatus(arg),
        "getItem" => Event::GrantItem(arg),
        _ if config.strict_types => {
            return Err(ParseError::UnknownEventType {
                context: context.to_string(),
                kind: kind.clone(),
            });
        }
        _ => {
            tracing::warn!(context, kind = %kind, "ignoring unknown event type");
            return Ok(None);
        }
    };
    Ok(Some(event))
}

/// `Ok(None)` means the requirement was dropped by a lenient load.
fn build_requirement(
    doc: RequirementDoc,
    context: &str,
    config: &EngineConfig,
) -> Result<Option<Requirement>, ParseError> {
    let invalid = |reason: &str| ParseError::InvalidRequirement {
        context: context.to_string(),
        reason: reason.to_string(),
    };

    let requirement = match (doc.kind.as_str(), doc.req) {
        ("perk", Some(RequirementArg::Tag(tag))) => Requirement::HasPerk(tag),
        ("item", Some(RequirementArg::Tag(tag))) => Requirement::HasItem(tag),
        ("status", Some(RequirementArg::Tag(tag))) => Requirement::HasStatus(tag),
        ("perk" | "item" | "status", _) => {
            return Err(invalid(&format!("`{}` expects a tag string", doc.kind)));
        }
        ("and", Some(RequirementArg::List(children))) => {
            Requirement::And(build_children(children, context, config)?)
        }
        ("or", Some(RequirementArg::List(children))) => {
            Requirement::Or(build_children(children, context, config)?)
        }
        ("and" | "or", _) => {
            return Err(invalid(&format!("`{}` expects a list of requirements", doc.kind)));
        }
        ("not", Some(RequirementArg::Single(inner))) => match build_requirement(*inner, context, config)? {
            Some(inner) => Requirement::negate(inner),
            None => return Err(invalid("`not` has no usable requirement to negate")),
        },
        ("not", _) => return Err(invalid("`not` expects a single requirement")),
        (_, _) if config.strict_types => {
            return Err(ParseError::UnknownRequirementType {
                context: context.to_string(),
                kind: doc.kind.clone(),
            });
        }
        (_, _) => {
            tracing::warn!(context, kind = %doc.kind, "ignoring unknown requirement type");
            return Ok(None);
        }
    };
    Ok(Some(requirement))
}

fn build_children(
    children: Vec<RequirementDoc>,
    context: &str,
    config: &EngineConfig,
) -> Result<Vec<Requirement>, ParseError> {
    let mut built = Vec::with_capacity(children.len());
    for child in children {
        if let Some(requirement) = build_requirement(child, context, config)? {
            built.push(requirement);
        }
    }
    Ok(built)
}

impl From<&Event> for EventDoc {
    fn from(event: &Event) -> Self {
        let (kind, arg) = match event {
            Event::GrantPerk(tag) => ("getPerk", tag),
            Event::GrantStatus(tag) => ("getStatus", tag),
            Event::GrantItem(tag) => ("getItem", tag),
        };
        Self {
            kind: kind.to_string(),
            arg: arg.clone(),
        }
    }
}

impl From<&Requirement> for RequirementDoc {
    fn from(requirement: &Requirement) -> Self {
        let (kind, req) = match requirement {
            Requirement::HasPerk(tag) => ("perk", RequirementArg::Tag(tag.clone())),
            Requirement::HasItem(tag) => ("item", RequirementArg::Tag(tag.clone())),
            Requirement::HasStatus(tag) => ("status", RequirementArg::Tag(tag.clone())),
            Requirement::And(children) => ("and", RequirementArg::List(children.iter().map(Self::from).collect())),
            Requirement::Or(children) => ("or", RequirementArg::List(children.iter().map(Self::from).collect())),
            Requirement::Not(inner) => ("not", RequirementArg::Single(Box::new(Self::from(inner.as_ref())))),
        };
        Self {
            kind: kind.to_string(),
            req: Some(req),
        }
    }
}

impl From<&Branch> for BranchDoc {
    fn from(branch: &Branch) -> Self {
        Self {
            b_scene: branch.target.clone(),
            prompt: branch.prompt.clone(),
            event: branch.event.as_ref().map(EventDoc::from),
            requirement: branch.requirement.as_ref().map(RequirementDoc::from),
        }
    }
}

impl From<&Scene> for SceneDoc {
    fn from(scene: &Scene) -> Self {
        match scene {
            Scene::Node(node) => Self::Node {
                lines: node.text.clone(),
                event: node.event.as_ref().map(EventDoc::from),
                branches: node.branches.iter().map(BranchDoc::from).collect(),
            },
            Scene::Leaf(leaf) => Self::Leaf {
                lines: leaf.text.clone(),
                event: leaf.event.as_ref().map(EventDoc::from),
                next_scene: leaf.next.clone(),
            },
            Scene::Terminus(terminus) => Self::Terminus {
                lines: terminus.text.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use proptest::prelude::*;

    const VILLAGE: &str = r#"{
        "gameName": "The_Village",
        "currScene": "village",
        "nextChapter": "2",
        "player": { "name": "Ada", "perks": ["swift"], "items": [], "statuses": [] },
        "scenes": {
            "village": {
                "sceneType": "node",
                "lines": "Welcome, %s.",
                "branches": [
                    { "bScene": "forge", "prompt": "visit forge",
                      "requirement": { "type": "and", "req": [
                          { "type": "perk", "req": "swift" },
                          { "type": "not", "req": { "type": "status", "req": "tired" } }
                      ] } },
                    { "bScene": "tavern", "prompt": "visit tavern",
                      "event": { "type": "getStatus", "arg": "thirsty" } }
                ]
            },
            "forge": { "sceneType": "leaf", "lines": "Hot.", "nextScene": "village",
                       "event": { "type": "getItem", "arg": "blade" } },
            "tavern": { "sceneType": "leaf", "lines": "Loud.", "nextScene": "end" },
            "end": { "sceneType": "terminus", "lines": "Fin." }
        }
    }"#;

    fn with_requirement(requirement: &str) -> String {
        format!(
            r#"{{
                "currScene": "village",
                "scenes": {{
                    "village": {{ "sceneType": "node", "lines": "A village.", "branches": [
                        {{ "bScene": "end", "prompt": "leave", "requirement": {requirement} }}
                    ] }},
                    "end": {{ "sceneType": "terminus", "lines": "Fin." }}
                }}
            }}"#
        )
    }

    fn first_requirement(chapter: &Chapter) -> Option<Requirement> {
        chapter.graph.branches("village").unwrap()[0].requirement.clone()
    }

    #[test]
    fn parse_save_document() {
        let session = parse_session(VILLAGE, &EngineConfig::default()).unwrap();

        assert_eq!(session.game_name(), "The_Village");
        assert_eq!(session.current_scene(), "village");
        assert_eq!(session.next_chapter(), Some("2"));
        assert!(session.player().has_perk("swift"));
        assert_eq!(session.graph().len(), 4);

        let branches = session.graph().branches("village").unwrap();
        assert_eq!(
            branches[0].requirement,
            Some(Requirement::And(vec![
                Requirement::perk("swift"),
                Requirement::negate(Requirement::status("tired")),
            ]))
        );
        assert_eq!(branches[1].event, Some(Event::GrantStatus("thirsty".to_string())));
        assert_eq!(
            session.graph().get("forge").and_then(Scene::event),
            Some(&Event::GrantItem("blade".to_string()))
        );
    }

    #[test]
    fn save_requires_player_and_game_name() {
        let mut document = Document::from_json(VILLAGE).unwrap();
        document.game_name = None;
        let err = parse_session(&document.to_json().unwrap(), &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, ParseError::MissingField("gameName")));

        let mut document = Document::from_json(VILLAGE).unwrap();
        document.player = None;
        let err = parse_session(&document.to_json().unwrap(), &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, ParseError::MissingField("player")));
    }

    #[test]
    fn chapter_needs_neither_player_nor_game_name() {
        let chapter = parse_chapter(&with_requirement(r#"{ "type": "item", "req": "key" }"#), &EngineConfig::default())
            .unwrap();
        assert_eq!(chapter.game_name, "");
        assert_eq!(chapter.next_chapter, None);
        assert_eq!(first_requirement(&chapter), Some(Requirement::item("key")));
    }

    #[test]
    fn empty_next_chapter_is_none() {
        let mut document = Document::from_json(VILLAGE).unwrap();
        document.next_chapter = Some(String::new());
        let chapter = document.into_chapter(&EngineConfig::default()).unwrap();
        assert_eq!(chapter.next_chapter, None);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = parse_chapter(r#"{ "scenes": {} }"#, &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
        assert!(err.to_string().contains("currScene"));

        let err = parse_chapter(
            r#"{ "currScene": "a", "scenes": { "a": { "sceneType": "cutscene", "lines": "" } } }"#,
            &EngineConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn unknown_requirement_type_is_an_error_by_default() {
        let json = with_requirement(r#"{ "type": "luck", "req": "high" }"#);
        let err = parse_chapter(&json, &EngineConfig::default()).unwrap_err();
        insta::assert_snapshot!(err, @r#"unknown requirement type "luck" in scene "village", branch 1"#);
    }

    #[test]
    fn lenient_load_drops_unknown_requirement() {
        let json = with_requirement(r#"{ "type": "luck", "req": "high" }"#);
        let chapter = parse_chapter(&json, &EngineConfig::lenient()).unwrap();
        assert_eq!(first_requirement(&chapter), None);
    }

    #[test]
    fn lenient_load_drops_unknown_children() {
        let json = with_requirement(
            r#"{ "type": "or", "req": [ { "type": "luck", "req": "high" }, { "type": "perk", "req": "swift" } ] }"#,
        );
        let chapter = parse_chapter(&json, &EngineConfig::lenient()).unwrap();
        assert_eq!(
            first_requirement(&chapter),
            Some(Requirement::Or(vec![Requirement::perk("swift")]))
        );
    }

    #[test]
    fn not_without_usable_inner_is_always_an_error() {
        let json = with_requirement(r#"{ "type": "not", "req": { "type": "luck", "req": "high" } }"#);
        let err = parse_chapter(&json, &EngineConfig::lenient()).unwrap_err();
        assert!(matches!(err, ParseError::InvalidRequirement { .. }));

        let json = with_requirement(r#"{ "type": "not" }"#);
        let err = parse_chapter(&json, &EngineConfig::lenient()).unwrap_err();
        insta::assert_snapshot!(err, @r#"invalid requirement in scene "village", branch 1: `not` expects a single requirement"#);
    }

    #[test]
    fn tag_requirement_with_list_is_invalid() {
        let json = with_requirement(r#"{ "type": "perk", "req": [] }"#);
        let err = parse_chapter(&json, &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, ParseError::InvalidRequirement { .. }));
    }

    #[test]
    fn unknown_event_type() {
        let json = r#"{
            "currScene": "shrine",
            "scenes": {
                "shrine": { "sceneType": "leaf", "lines": "A shrine.", "nextScene": "",
                            "event": { "type": "getGold", "arg": "10" } }
            }
        }"#;

        let err = parse_chapter(json, &EngineConfig::default()).unwrap_err();
        insta::assert_snapshot!(err, @r#"unknown event type "getGold" in scene "shrine""#);

        let chapter = parse_chapter(json, &EngineConfig::lenient()).unwrap();
        assert_eq!(chapter.graph.get("shrine").and_then(Scene::event), None);
    }

    #[test]
    fn dangling_reference_is_caught_at_load() {
        let json = VILLAGE.replace(r#""bScene": "tavern""#, r#""bScene": "tavren""#);

        let err = parse_session(&json, &EngineConfig::default()).unwrap_err();
        insta::assert_snapshot!(err, @r#"scene "village" points to unknown scene "tavren" (did you mean "tavern"?)"#);

        let unchecked = EngineConfig::default().with_reference_validation(false);
        assert!(parse_session(&json, &unchecked).is_ok());
    }

    #[test]
    fn missing_start_scene() {
        let json = VILLAGE.replace(r#""currScene": "village""#, r#""currScene": "castle""#);
        let err = parse_session(&json, &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, ParseError::MissingStartScene(id) if id == "castle"));
    }

    #[test]
    fn save_keeps_pruned_branches_and_player() {
        let mut session = parse_session(VILLAGE, &EngineConfig::default()).unwrap();
        // visit tavern, continue
        let mut console = ScriptedConsole::new(["2", ""]);
        session.step(&mut console).unwrap();
        session.step(&mut console).unwrap();
        assert_eq!(session.current_scene(), "end");

        let json = serialize_session(&session).unwrap();
        let restored = parse_session(&json, &EngineConfig::default()).unwrap();

        assert_eq!(restored, session);
        assert!(restored.player().has_status("thirsty"));
        assert_eq!(restored.graph().branches("village").unwrap().len(), 1);
        assert_eq!(restored.next_chapter(), Some("2"));
    }

    #[test]
    fn serialized_form_uses_document_keys() {
        let session = parse_session(VILLAGE, &EngineConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&serialize_session(&session).unwrap()).unwrap();

        assert_eq!(value["gameName"], "The_Village");
        assert_eq!(value["currScene"], "village");
        assert_eq!(value["scenes"]["end"]["sceneType"], "terminus");
        assert_eq!(value["scenes"]["tavern"]["nextScene"], "end");
        assert_eq!(value["scenes"]["village"]["branches"][1]["bScene"], "tavern");
        assert_eq!(
            value["scenes"]["village"]["branches"][0]["requirement"]["req"][1]["type"],
            "not"
        );
        assert_eq!(value["player"]["perks"][0], "swift");
    }

    #[test]
    fn blank_target_ends_chapter_without_dangling() {
        let json = r#"{ "currScene": "start", "scenes": {
            "start": { "sceneType": "leaf", "lines": "Go.", "nextScene": " " }
        } }"#;
        let chapter = parse_chapter(json, &EngineConfig::default()).unwrap();
        let scene = chapter.graph.get("start").unwrap();
        assert!(scene.targets().is_empty());
    }

    const SCENE_IDS: &[&str] = &["square", "road", "end"];

    fn arb_tag() -> impl Strategy<Value = String> {
        "[a-c]"
    }

    fn arb_player() -> impl Strategy<Value = Player> {
        let tags = || prop::collection::btree_set(arb_tag(), 0..3);
        ("[A-Z][a-z]{0,6}", tags(), tags(), tags()).prop_map(|(name, perks, items, statuses)| Player {
            name,
            perks,
            items,
            statuses,
        })
    }

    fn arb_event() -> impl Strategy<Value = Option<Event>> {
        prop::option::of(prop_oneof![
            arb_tag().prop_map(Event::GrantPerk),
            arb_tag().prop_map(Event::GrantStatus),
            arb_tag().prop_map(Event::GrantItem),
        ])
    }

    fn arb_requirement() -> impl Strategy<Value = Requirement> {
        let leaf = prop_oneof![
            arb_tag().prop_map(Requirement::HasPerk),
            arb_tag().prop_map(Requirement::HasItem),
            arb_tag().prop_map(Requirement::HasStatus),
        ];
        leaf.prop_recursive(3, 16, 3, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..3).prop_map(Requirement::And),
                prop::collection::vec(inner.clone(), 0..3).prop_map(Requirement::Or),
                inner.prop_map(Requirement::negate),
            ]
        })
    }

    /// A scene id from the graph, or the empty chapter-end target.
    fn arb_target() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["square", "road", "end", ""]).prop_map(str::to_string)
    }

    fn arb_branch() -> impl Strategy<Value = Branch> {
        (arb_target(), "[a-z %]{0,12}", arb_event(), prop::option::of(arb_requirement())).prop_map(
            |(target, prompt, event, requirement)| {
                let mut branch = Branch::new(target, prompt);
                branch.event = event;
                branch.requirement = requirement;
                branch
            },
        )
    }

    fn arb_session() -> impl Strategy<Value = Session> {
        (
            arb_player(),
            arb_event(),
            prop::collection::vec(arb_branch(), 0..5),
            prop::collection::vec(0usize..5, 0..3),
            arb_target(),
            prop::sample::select(SCENE_IDS.to_vec()),
            prop::option::of("[1-9]"),
        )
            .prop_map(|(player, event, branches, pruned, next, current, next_chapter)| {
                let mut square = NodeScene::new("square", "The square, %s.");
                square.event = event.clone();
                square.branches = branches;
                for index in pruned {
                    square.prune(index);
                }
                let mut road = LeafScene::new("road", "The road.", next);
                road.event = event;
                let graph = SceneGraph::new()
                    .with_scene(square)
                    .with_scene(road)
                    .with_scene(TerminusScene::new("end", "Fin."));
                let chapter = Chapter {
                    graph,
                    start: current.to_string(),
                    next_chapter,
                    game_name: "The_Village".to_string(),
                };
                Session::new(player, chapter)
            })
    }

    proptest! {
        #[test]
        fn save_round_trip_preserves_session(session in arb_session()) {
            let json = serialize_session(&session).unwrap();
            let restored = parse_session(&json, &EngineConfig::default()).unwrap();
            prop_assert_eq!(restored, session);
        }
    }
}
