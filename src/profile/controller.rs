use super::interest::{self, Interest};

/// Change requested by the interaction layer. The owner of the interest
/// collection applies it (see [`apply_event`]) and hands the updated set
/// back down for layout.
#[derive(Clone, Debug, PartialEq)]
pub enum InterestEvent {
    Selected { id: String },
    LevelUpdated { interest: Interest },
    Added { interest: Interest },
    Removed { id: String },
}

/// Mediates user actions on the interest set. Holds no authoritative data,
/// only the transient selection and the add-form state; every operation
/// that changes the collection is emitted as an [`InterestEvent`] instead
/// of mutating anything here. Invalid requests are silent no-ops.
#[derive(Debug, Default)]
pub struct InterestController {
    selected: Option<String>,
    add_form_open: bool,
    draft_name: String,
}

impl InterestController {
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Marks `id` as the single selected interest; any previous selection
    /// is implicitly dropped. Unknown ids leave the selection untouched.
    pub fn select(&mut self, interests: &[Interest], id: &str) -> Option<InterestEvent> {
        let interest = interests.iter().find(|interest| interest.id == id)?;
        self.selected = Some(interest.id.clone());
        Some(InterestEvent::Selected {
            id: interest.id.clone(),
        })
    }

    pub fn update_level(
        &self,
        interests: &[Interest],
        id: &str,
        new_level: u8,
    ) -> Option<InterestEvent> {
        if !interest::level_in_range(new_level) {
            return None;
        }

        let found = interests.iter().find(|interest| interest.id == id)?;
        if found.level == new_level {
            return None;
        }

        let mut updated = found.clone();
        updated.level = new_level;
        Some(InterestEvent::LevelUpdated { interest: updated })
    }

    /// Blank or whitespace-only names are rejected without an event.
    pub fn add_interest(&self, name: &str) -> Option<InterestEvent> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        Some(InterestEvent::Added {
            interest: Interest::named(name),
        })
    }

    /// Same as [`Self::add_interest`] but tags the interest as discovered
    /// during the conversation.
    pub fn add_interest_from_chat(&self, name: &str) -> Option<InterestEvent> {
        let mut event = self.add_interest(name)?;
        if let InterestEvent::Added { interest } = &mut event {
            interest.from_conversation = true;
        }
        Some(event)
    }

    pub fn remove_interest(&self, interests: &[Interest], id: &str) -> Option<InterestEvent> {
        interests
            .iter()
            .any(|interest| interest.id == id)
            .then(|| InterestEvent::Removed { id: id.to_owned() })
    }

    pub fn add_form_open(&self) -> bool {
        self.add_form_open
    }

    pub fn open_add_form(&mut self) {
        self.add_form_open = true;
    }

    pub fn close_add_form(&mut self) {
        self.add_form_open = false;
        self.draft_name.clear();
    }

    pub fn draft_name(&mut self) -> &mut String {
        &mut self.draft_name
    }
}

/// Applies a collection-changing event to the authoritative interest list.
/// `Selected` carries no collection change; its downstream effects
/// (details panel, navigation) are the caller's business.
pub fn apply_event(interests: &mut Vec<Interest>, event: &InterestEvent) {
    match event {
        InterestEvent::Selected { .. } => {}
        InterestEvent::LevelUpdated { interest } => {
            if let Some(slot) = interests.iter_mut().find(|slot| slot.id == interest.id) {
                *slot = interest.clone();
            }
        }
        InterestEvent::Added { interest } => interests.push(interest.clone()),
        InterestEvent::Removed { id } => interests.retain(|interest| &interest.id != id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> Vec<Interest> {
        vec![
            Interest {
                id: "a".to_owned(),
                name: "Photography".to_owned(),
                level: 4,
                related_interests: vec!["Landscape".to_owned()],
                from_conversation: false,
            },
            Interest {
                id: "b".to_owned(),
                name: "Hiking".to_owned(),
                level: 3,
                related_interests: Vec::new(),
                from_conversation: false,
            },
        ]
    }

    #[test]
    fn selection_is_exclusive() {
        let interests = sample_set();
        let mut controller = InterestController::default();

        controller.select(&interests, "a").unwrap();
        let event = controller.select(&interests, "b").unwrap();

        assert_eq!(event, InterestEvent::Selected { id: "b".to_owned() });
        assert_eq!(controller.selected_id(), Some("b"));
        assert!(!controller.is_selected("a"));
    }

    #[test]
    fn selecting_unknown_id_is_a_no_op() {
        let interests = sample_set();
        let mut controller = InterestController::default();

        assert!(controller.select(&interests, "missing").is_none());
        assert_eq!(controller.selected_id(), None);
    }

    #[test]
    fn level_updates_are_validated() {
        let interests = sample_set();
        let controller = InterestController::default();

        assert!(controller.update_level(&interests, "a", 0).is_none());
        assert!(controller.update_level(&interests, "a", 6).is_none());
        assert!(controller.update_level(&interests, "missing", 2).is_none());

        for valid in [1u8, 5] {
            let Some(InterestEvent::LevelUpdated { interest }) =
                controller.update_level(&interests, "a", valid)
            else {
                panic!("expected a level update for {valid}");
            };
            assert_eq!(interest.level, valid);
            assert_eq!(interest.name, "Photography");
        }
    }

    #[test]
    fn level_update_carries_the_full_record() {
        let mut interests = sample_set();
        let controller = InterestController::default();

        let event = controller.update_level(&interests, "a", 2).unwrap();
        apply_event(&mut interests, &event);

        assert_eq!(interests[0].level, 2);
        assert_eq!(interests[0].related_interests, vec!["Landscape".to_owned()]);
    }

    #[test]
    fn blank_names_are_rejected() {
        let controller = InterestController::default();
        assert!(controller.add_interest("").is_none());
        assert!(controller.add_interest("   ").is_none());
        assert!(controller.add_interest("\t\n").is_none());
    }

    #[test]
    fn add_then_remove_round_trips() {
        let mut interests = Vec::new();
        let controller = InterestController::default();

        let added = controller.add_interest("Chess").unwrap();
        apply_event(&mut interests, &added);

        assert_eq!(interests.len(), 1);
        assert_eq!(interests[0].name, "Chess");
        assert_eq!(interests[0].level, 3);
        assert!(!interests[0].id.is_empty());
        assert!(interests[0].related_interests.is_empty());

        let id = interests[0].id.clone();
        let removed = controller.remove_interest(&interests, &id).unwrap();
        apply_event(&mut interests, &removed);

        assert!(interests.is_empty());
    }

    #[test]
    fn removal_is_idempotent() {
        let mut interests = sample_set();
        let controller = InterestController::default();

        let event = controller.remove_interest(&interests, "a").unwrap();
        apply_event(&mut interests, &event);
        assert_eq!(interests.len(), 1);

        assert!(controller.remove_interest(&interests, "a").is_none());
        assert_eq!(interests.len(), 1);
    }

    #[test]
    fn chat_adds_carry_the_conversation_flag() {
        let controller = InterestController::default();

        let Some(InterestEvent::Added { interest }) = controller.add_interest_from_chat("Baking")
        else {
            panic!("expected an add event");
        };
        assert!(interest.from_conversation);
        assert!(controller.add_interest_from_chat("  ").is_none());
    }
}
