use match_types::EngineError;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The six winning-shot families. `opponent_direct_fault` is not a shot by
/// the tracked player but is still counted in the winner bucket, so the
/// classifier checks it separately.
pub const WINNER_FAMILIES: [&str; 6] = [
    "passing_winner",
    "volley_winner",
    "smash_winner",
    "lob_winner",
    "vibora_bandeja_winner",
    "bajada_winner",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OutcomeColor {
    /// Point won by the tracked side.
    Green,
    /// Point lost by the tracked side.
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubTag {
    pub id: String,
    pub label: String,
}

impl SubTag {
    fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// Tagging shape of an action. Most actions carry at most one refinement
/// dimension; only the unforced-error action needs the second, independent
/// axis (shot family x fault location), so the shapes form a closed set the
/// classifier can validate exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TagDimensions {
    None,
    Single(Vec<SubTag>),
    Dual {
        sub_tags: Vec<SubTag>,
        sub_sub_tags: Vec<SubTag>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActionDefinition {
    pub id: String,
    pub label: String,
    pub description: String,
    pub icon: String,
    pub outcome_color: OutcomeColor,
    pub requires_player: bool,
    pub tags: TagDimensions,
}

impl ActionDefinition {
    pub fn sub_tags(&self) -> &[SubTag] {
        match &self.tags {
            TagDimensions::None => &[],
            TagDimensions::Single(sub_tags) => sub_tags,
            TagDimensions::Dual { sub_tags, .. } => sub_tags,
        }
    }

    pub fn sub_sub_tags(&self) -> Option<&[SubTag]> {
        match &self.tags {
            TagDimensions::Dual { sub_sub_tags, .. } => Some(sub_sub_tags),
            _ => None,
        }
    }

    pub fn declares_sub_tag(&self, tag_id: &str) -> bool {
        self.sub_tags().iter().any(|tag| tag.id == tag_id)
    }

    pub fn declares_sub_sub_tag(&self, tag_id: &str) -> bool {
        self.sub_sub_tags()
            .is_some_and(|tags| tags.iter().any(|tag| tag.id == tag_id))
    }
}

/// The fixed catalog of recordable actions.
///
/// Built once at startup and passed by reference to the classifier and any
/// UI collaborator; there is no runtime mutation API. Declaration order is
/// stable across calls, which presentation layers rely on.
pub struct Catalog {
    actions: Vec<ActionDefinition>,
}

impl Catalog {
    /// The standard padel catalog: six winner families, the two
    /// opponent-caused outcomes, and the two fault families.
    pub fn standard() -> Self {
        let location_tags = || {
            vec![
                SubTag::new("right", "Right"),
                SubTag::new("center", "Center"),
                SubTag::new("left", "Left"),
            ]
        };

        let actions = vec![
            ActionDefinition {
                id: "passing_winner".to_string(),
                label: "Passing shot".to_string(),
                description: "Winning passing shot past the net pair".to_string(),
                icon: "arrow-right-circle".to_string(),
                outcome_color: OutcomeColor::Green,
                requires_player: true,
                tags: TagDimensions::Single(location_tags()),
            },
            ActionDefinition {
                id: "volley_winner".to_string(),
                label: "Volley".to_string(),
                description: "Winning volley at the net".to_string(),
                icon: "zap".to_string(),
                outcome_color: OutcomeColor::Green,
                requires_player: true,
                tags: TagDimensions::Single(location_tags()),
            },
            ActionDefinition {
                id: "smash_winner".to_string(),
                label: "Smash".to_string(),
                description: "Winning smash".to_string(),
                icon: "trending-down".to_string(),
                outcome_color: OutcomeColor::Green,
                requires_player: true,
                tags: TagDimensions::Single(vec![
                    SubTag::new("3rd", "Over the third"),
                    SubTag::new("4th", "Over the fourth"),
                    SubTag::new("lob-smash", "Lob smash"),
                ]),
            },
            ActionDefinition {
                id: "lob_winner".to_string(),
                label: "Lob".to_string(),
                description: "Winning lob over the net pair".to_string(),
                icon: "corner-right-up".to_string(),
                outcome_color: OutcomeColor::Green,
                requires_player: true,
                tags: TagDimensions::Single(location_tags()),
            },
            ActionDefinition {
                id: "vibora_bandeja_winner".to_string(),
                label: "Vibora / bandeja".to_string(),
                description: "Winning vibora or bandeja".to_string(),
                icon: "wind".to_string(),
                outcome_color: OutcomeColor::Green,
                requires_player: true,
                tags: TagDimensions::Single(location_tags()),
            },
            ActionDefinition {
                id: "bajada_winner".to_string(),
                label: "Bajada".to_string(),
                description: "Winning bajada off the back glass".to_string(),
                icon: "corner-left-down".to_string(),
                outcome_color: OutcomeColor::Green,
                requires_player: true,
                tags: TagDimensions::Single(location_tags()),
            },
            ActionDefinition {
                id: "opponent_direct_fault".to_string(),
                label: "Opponent direct fault".to_string(),
                description: "Point won directly on an opponent mistake".to_string(),
                icon: "gift".to_string(),
                outcome_color: OutcomeColor::Green,
                requires_player: false,
                tags: TagDimensions::None,
            },
            ActionDefinition {
                id: "winner_on_error".to_string(),
                label: "Opponent winner".to_string(),
                description: "Point lost to an opponent winning shot".to_string(),
                icon: "shield-off".to_string(),
                outcome_color: OutcomeColor::Red,
                requires_player: false,
                tags: TagDimensions::None,
            },
            ActionDefinition {
                id: "forced_error".to_string(),
                label: "Forced error".to_string(),
                description: "Error forced by opponent pressure".to_string(),
                icon: "alert-triangle".to_string(),
                outcome_color: OutcomeColor::Red,
                requires_player: true,
                tags: TagDimensions::Single(vec![
                    SubTag::new("counter_smash", "Counter smash"),
                    SubTag::new("short_lob", "Short lob"),
                    SubTag::new("zone_error", "Zone error"),
                ]),
            },
            ActionDefinition {
                id: "unforced_error".to_string(),
                label: "Unforced error".to_string(),
                description: "Error with no opponent pressure".to_string(),
                icon: "x-circle".to_string(),
                outcome_color: OutcomeColor::Red,
                requires_player: true,
                tags: TagDimensions::Dual {
                    sub_tags: vec![
                        SubTag::new("passing", "Passing shot"),
                        SubTag::new("volley", "Volley"),
                        SubTag::new("smash", "Smash"),
                        SubTag::new("lob", "Lob"),
                        SubTag::new("vibora_bandeja", "Vibora / bandeja"),
                        SubTag::new("bajada", "Bajada"),
                    ],
                    sub_sub_tags: vec![
                        SubTag::new("net", "Net"),
                        SubTag::new("glass", "Glass"),
                        SubTag::new("grid", "Fence grid"),
                    ],
                },
            },
        ];

        Self { actions }
    }

    pub fn get(&self, action_id: &str) -> Result<&ActionDefinition, EngineError> {
        self.actions
            .iter()
            .find(|action| action.id == action_id)
            .ok_or_else(|| EngineError::UnknownAction {
                action_id: action_id.to_string(),
            })
    }

    /// All actions in catalog-declaration order.
    pub fn actions(&self) -> &[ActionDefinition] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = Catalog::standard();
        let mut ids: Vec<&str> = catalog.actions().iter().map(|a| a.id.as_str()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let first: Vec<String> = Catalog::standard()
            .actions()
            .iter()
            .map(|a| a.id.clone())
            .collect();
        let second: Vec<String> = Catalog::standard()
            .actions()
            .iter()
            .map(|a| a.id.clone())
            .collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "passing_winner");
    }

    #[test]
    fn test_winner_families_are_green_with_location_tags() {
        let catalog = Catalog::standard();
        for id in WINNER_FAMILIES {
            let action = catalog.get(id).unwrap();
            assert_eq!(action.outcome_color, OutcomeColor::Green);
            assert!(action.requires_player);
            assert_eq!(action.sub_tags().len(), 3);
        }

        // Smash uses its own refinement set, not court locations
        let smash = catalog.get("smash_winner").unwrap();
        assert!(smash.declares_sub_tag("3rd"));
        assert!(smash.declares_sub_tag("4th"));
        assert!(smash.declares_sub_tag("lob-smash"));
        assert!(!smash.declares_sub_tag("right"));
    }

    #[test]
    fn test_only_unforced_error_has_second_dimension() {
        let catalog = Catalog::standard();
        let dual: Vec<&str> = catalog
            .actions()
            .iter()
            .filter(|a| a.sub_sub_tags().is_some())
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(dual, vec!["unforced_error"]);

        let unforced = catalog.get("unforced_error").unwrap();
        assert_eq!(unforced.sub_tags().len(), 6);
        assert_eq!(unforced.sub_sub_tags().unwrap().len(), 3);
        assert!(unforced.declares_sub_sub_tag("net"));
        assert!(unforced.declares_sub_sub_tag("glass"));
        assert!(unforced.declares_sub_sub_tag("grid"));
    }

    #[test]
    fn test_unknown_action_lookup() {
        let catalog = Catalog::standard();
        let err = catalog.get("backhand_winner").unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownAction {
                action_id: "backhand_winner".to_string()
            }
        );
    }
}
