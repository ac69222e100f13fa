use match_types::{EngineError, OutcomeCategory, PointOutcome};

use crate::taxonomy::{ActionDefinition, OutcomeColor, WINNER_FAMILIES};

pub struct Classifier;

impl Classifier {
    /// Derive `(category1, category2)` for an action and its chosen tags.
    ///
    /// Pure: no state, no side effects. Fails only on tags the action does
    /// not declare; every valid combination classifies.
    pub fn classify(
        action: &ActionDefinition,
        sub_tag_id: Option<&str>,
        sub_sub_tag_id: Option<&str>,
    ) -> Result<(PointOutcome, OutcomeCategory), EngineError> {
        Self::validate_tags(action, sub_tag_id, sub_sub_tag_id)?;

        let category1 = match action.outcome_color {
            OutcomeColor::Green => PointOutcome::Won,
            OutcomeColor::Red => PointOutcome::Lost,
        };

        Ok((category1, Self::category_for(&action.id)))
    }

    /// Category 2 is keyed on action identity, never on tags.
    ///
    /// `opponent_direct_fault` lands in the winner bucket even though it is
    /// not a shot by the tracked player; the source statistics count points
    /// won on a direct opponent mistake among winning shots.
    pub fn category_for(action_id: &str) -> OutcomeCategory {
        if WINNER_FAMILIES.contains(&action_id) || action_id == "opponent_direct_fault" {
            return OutcomeCategory::Winner;
        }

        match action_id {
            "unforced_error" => OutcomeCategory::UnforcedError,
            "forced_error" => OutcomeCategory::ForcedError,
            "winner_on_error" => OutcomeCategory::OpponentFault,
            _ => OutcomeCategory::None,
        }
    }

    fn validate_tags(
        action: &ActionDefinition,
        sub_tag_id: Option<&str>,
        sub_sub_tag_id: Option<&str>,
    ) -> Result<(), EngineError> {
        if let Some(tag_id) = sub_tag_id {
            if !action.declares_sub_tag(tag_id) {
                return Err(EngineError::InvalidTagForAction {
                    action_id: action.id.clone(),
                    tag_id: tag_id.to_string(),
                });
            }
        }

        if let Some(tag_id) = sub_sub_tag_id {
            if !action.declares_sub_sub_tag(tag_id) {
                return Err(EngineError::InvalidTagForAction {
                    action_id: action.id.clone(),
                    tag_id: tag_id.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Catalog;

    #[test]
    fn test_passing_winner_classifies_as_won_winner() {
        let catalog = Catalog::standard();
        let action = catalog.get("passing_winner").unwrap();

        let (category1, category2) = Classifier::classify(action, Some("right"), None).unwrap();
        assert_eq!(category1, PointOutcome::Won);
        assert_eq!(category2, OutcomeCategory::Winner);
    }

    #[test]
    fn test_unforced_error_with_both_dimensions() {
        let catalog = Catalog::standard();
        let action = catalog.get("unforced_error").unwrap();

        let (category1, category2) =
            Classifier::classify(action, Some("smash"), Some("net")).unwrap();
        assert_eq!(category1, PointOutcome::Lost);
        assert_eq!(category2, OutcomeCategory::UnforcedError);
    }

    #[test]
    fn test_opponent_outcomes() {
        let catalog = Catalog::standard();

        // Won directly on an opponent mistake: winner bucket despite not
        // being a shot by the tracked player.
        let direct = catalog.get("opponent_direct_fault").unwrap();
        let (category1, category2) = Classifier::classify(direct, None, None).unwrap();
        assert_eq!(category1, PointOutcome::Won);
        assert_eq!(category2, OutcomeCategory::Winner);

        // Lost to an opponent winning shot: not a fault by the tracked side.
        let on_error = catalog.get("winner_on_error").unwrap();
        let (category1, category2) = Classifier::classify(on_error, None, None).unwrap();
        assert_eq!(category1, PointOutcome::Lost);
        assert_eq!(category2, OutcomeCategory::OpponentFault);
    }

    #[test]
    fn test_forced_error_cause_tags() {
        let catalog = Catalog::standard();
        let action = catalog.get("forced_error").unwrap();

        for cause in ["counter_smash", "short_lob", "zone_error"] {
            let (category1, category2) = Classifier::classify(action, Some(cause), None).unwrap();
            assert_eq!(category1, PointOutcome::Lost);
            assert_eq!(category2, OutcomeCategory::ForcedError);
        }
    }

    #[test]
    fn test_undeclared_sub_tag_is_rejected() {
        let catalog = Catalog::standard();
        let action = catalog.get("passing_winner").unwrap();

        let err = Classifier::classify(action, Some("3rd"), None).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidTagForAction {
                action_id: "passing_winner".to_string(),
                tag_id: "3rd".to_string(),
            }
        );
    }

    #[test]
    fn test_sub_sub_tag_requires_dual_action() {
        let catalog = Catalog::standard();

        // passing_winner declares no second dimension at all
        let action = catalog.get("passing_winner").unwrap();
        let err = Classifier::classify(action, Some("right"), Some("anything")).unwrap_err();
        assert!(matches!(err, EngineError::InvalidTagForAction { .. }));

        // and even on the dual action, the tag must be declared
        let unforced = catalog.get("unforced_error").unwrap();
        let err = Classifier::classify(unforced, Some("smash"), Some("roof")).unwrap_err();
        assert!(matches!(err, EngineError::InvalidTagForAction { .. }));
    }

    #[test]
    fn test_tags_are_optional() {
        let catalog = Catalog::standard();
        let action = catalog.get("smash_winner").unwrap();

        let (category1, category2) = Classifier::classify(action, None, None).unwrap();
        assert_eq!(category1, PointOutcome::Won);
        assert_eq!(category2, OutcomeCategory::Winner);
    }
}
