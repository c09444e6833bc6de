use crate::dataset::{DATASET_PATH, TeamDataset};
use crate::era::Era;
use crate::member::TeamMember;
use crate::popup::{ClickRegion, PopupState};
use crate::roles::{RolePartition, partition_by_role};

/// Everything the team page knows. Replaced wholesale on every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub dataset: TeamDataset,
    pub loading: bool,
    pub era: Era,
    pub popup: PopupState,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            dataset: TeamDataset::default(),
            loading: true,
            era: Era::default(),
            popup: PopupState::Closed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Loaded(TeamDataset),
    LoadFailed(String),
    SelectEra(Era),
    CardClicked(TeamMember),
    PopupClicked(ClickRegion),
}

/// Side effects the host must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchDataset { path: &'static str },
    LogError(String),
}

impl PageState {
    /// Initial state plus the single dataset fetch.
    pub fn mount() -> (Self, Vec<Effect>) {
        (
            Self::default(),
            vec![Effect::FetchDataset { path: DATASET_PATH }],
        )
    }

    pub fn apply(self, event: PageEvent) -> (Self, Vec<Effect>) {
        match event {
            PageEvent::Loaded(dataset) => (
                Self {
                    dataset,
                    loading: false,
                    ..self
                },
                Vec::new(),
            ),
            PageEvent::LoadFailed(message) => (
                Self {
                    loading: false,
                    ..self
                },
                vec![Effect::LogError(message)],
            ),
            PageEvent::SelectEra(era) => (Self { era, ..self }, Vec::new()),
            PageEvent::CardClicked(member) => {
                let popup = self.popup.open(member);
                (Self { popup, ..self }, Vec::new())
            }
            PageEvent::PopupClicked(region) => {
                let popup = self.popup.click(region);
                (Self { popup, ..self }, Vec::new())
            }
        }
    }

    pub fn displayed(&self) -> &[TeamMember] {
        self.dataset.members(self.era)
    }

    pub fn partition(&self) -> RolePartition {
        partition_by_role(self.displayed())
    }

    pub fn is_active(&self, era: Era) -> bool {
        self.era == era
    }
}

/// List key for a rendered card. Ids are only unique within one era, so the
/// era is part of the key; a reused id in another era gets a fresh card.
pub fn card_key(era: Era, member: &TeamMember) -> String {
    format!("{}/{}", era.dataset_key(), member.id)
}

#[cfg(test)]
mod tests {
    use super::{Effect, PageEvent, PageState, card_key};
    use crate::dataset::{DATASET_PATH, TeamDataset};
    use crate::era::Era;
    use crate::popup::ClickRegion;
    use serde_json::json;

    fn sample_dataset() -> TeamDataset {
        serde_json::from_value(json!({
            "currentLeads": [
                { "id": "1", "title": "Ada", "subtitle": "President", "imageUrl": "/a.png" },
                { "id": "2", "title": "Lin", "subtitle": "Web Lead", "imageUrl": "/l.png" }
            ],
            "2024-2025Leads": [
                { "id": "3", "title": "Bo", "subtitle": "Former Executive", "imageUrl": "" }
            ],
            "2023Leads": [],
            "2022Leads": [
                { "id": "4", "title": "Cy", "subtitle": "Designer" }
            ]
        }))
        .unwrap()
    }

    fn loaded() -> PageState {
        let (state, _) = PageState::mount();
        state.apply(PageEvent::Loaded(sample_dataset())).0
    }

    fn fetch_count(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::FetchDataset { .. }))
            .count()
    }

    #[test]
    fn mount_requests_dataset_once() {
        let (state, effects) = PageState::mount();
        assert!(state.loading);
        assert_eq!(state.era, Era::Current);
        assert_eq!(effects, vec![Effect::FetchDataset { path: DATASET_PATH }]);
    }

    #[test]
    fn load_success_replaces_dataset() {
        let state = loaded();
        assert!(!state.loading);
        assert_eq!(state.displayed().len(), 2);
    }

    #[test]
    fn single_president_scenario() {
        let dataset: TeamDataset = serde_json::from_value(json!({
            "currentLeads": [{ "id": "1", "title": "Ada", "subtitle": "President", "imageUrl": "/a.png" }],
            "2024-2025Leads": [],
            "2023Leads": [],
            "2022Leads": []
        }))
        .unwrap();
        let (state, _) = PageState::mount();
        let (state, _) = state.apply(PageEvent::Loaded(dataset));
        let (state, _) = state.apply(PageEvent::SelectEra(Era::Current));
        assert_eq!(state.era.year(), 2026);
        let split = state.partition();
        let names: Vec<&str> = split.leadership.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(names, vec!["Ada"]);
        assert!(split.other.is_empty());
    }

    #[test]
    fn load_failure_clears_loading_and_logs() {
        let (state, _) = PageState::mount();
        let (state, effects) = state.apply(PageEvent::LoadFailed("fetch error: offline".into()));
        assert!(!state.loading);
        assert!(state.dataset.is_empty());
        assert!(state.partition().is_empty());
        assert_eq!(effects, vec![Effect::LogError("fetch error: offline".into())]);
        for era in Era::ALL {
            let (next, _) = state.clone().apply(PageEvent::SelectEra(era));
            assert!(next.partition().is_empty());
        }
    }

    #[test]
    fn selecting_eras_never_fetches() {
        let (mut state, mut effects) = PageState::mount();
        let (next, fx) = state.apply(PageEvent::Loaded(sample_dataset()));
        state = next;
        effects.extend(fx);
        let sequence = [
            Era::Leads2022,
            Era::Leads2023,
            Era::Current,
            Era::Leads2024To2025,
            Era::Leads2024To2025,
            Era::Leads2022,
            Era::Current,
        ];
        for era in sequence {
            let (next, fx) = state.apply(PageEvent::SelectEra(era));
            assert_eq!(next.era, era);
            state = next;
            effects.extend(fx);
        }
        assert_eq!(fetch_count(&effects), 1);
    }

    #[test]
    fn selecting_era_switches_displayed_group() {
        let (state, _) = loaded().apply(PageEvent::SelectEra(Era::Leads2024To2025));
        let split = state.partition();
        assert_eq!(split.leadership.len(), 1);
        assert_eq!(split.leadership[0].id, "3");
        assert!(split.other.is_empty());

        let (state, _) = state.apply(PageEvent::SelectEra(Era::Leads2022));
        let split = state.partition();
        assert!(split.leadership.is_empty());
        assert_eq!(split.other[0].id, "4");
    }

    #[test]
    fn only_selected_marker_is_active() {
        let (state, _) = loaded().apply(PageEvent::SelectEra(Era::Leads2023));
        let active: Vec<Era> = Era::ALL.into_iter().filter(|e| state.is_active(*e)).collect();
        assert_eq!(active, vec![Era::Leads2023]);
    }

    #[test]
    fn popup_round_trip() {
        let state = loaded();
        let ada = state.displayed()[0].clone();

        let (state, fx) = state.apply(PageEvent::CardClicked(ada.clone()));
        assert!(fx.is_empty());
        assert_eq!(state.popup.member().map(|m| m.id.as_str()), Some("1"));

        let (state, _) = state.apply(PageEvent::PopupClicked(ClickRegion::Panel));
        assert!(state.popup.is_open());

        let (state, _) = state.apply(PageEvent::PopupClicked(ClickRegion::Backdrop));
        assert!(!state.popup.is_open());

        let (state, _) = state.apply(PageEvent::CardClicked(ada));
        let (state, _) = state.apply(PageEvent::PopupClicked(ClickRegion::CloseControl));
        assert!(!state.popup.is_open());
    }

    #[test]
    fn popup_survives_era_change() {
        let state = loaded();
        let lin = state.displayed()[1].clone();
        let (state, _) = state.apply(PageEvent::CardClicked(lin));
        let (state, _) = state.apply(PageEvent::SelectEra(Era::Leads2022));
        assert_eq!(state.popup.member().map(|m| m.id.as_str()), Some("2"));
    }

    #[test]
    fn same_id_in_two_eras_follows_selection() {
        let dataset: TeamDataset = serde_json::from_value(json!({
            "currentLeads": [{ "id": "1", "title": "Ada", "subtitle": "President" }],
            "2023Leads": [{ "id": "1", "title": "Bob", "subtitle": "President" }]
        }))
        .unwrap();
        let (state, _) = PageState::mount();
        let (state, _) = state.apply(PageEvent::Loaded(dataset));
        let before = state.partition().leadership[0].clone();
        assert_eq!(before.title, "Ada");

        let (state, _) = state.apply(PageEvent::SelectEra(Era::Leads2023));
        let after = state.partition().leadership[0].clone();
        assert_eq!(after.title, "Bob");
        assert_ne!(
            card_key(Era::Current, &before),
            card_key(Era::Leads2023, &after)
        );

        let (state, _) = state.apply(PageEvent::CardClicked(after));
        assert_eq!(state.popup.member().map(|m| m.title.as_str()), Some("Bob"));
    }

    #[test]
    fn card_key_is_stable_within_an_era() {
        let state = loaded();
        let ada = &state.displayed()[0];
        assert_eq!(card_key(Era::Current, ada), card_key(Era::Current, &ada.clone()));
        assert_eq!(card_key(Era::Current, ada), "currentLeads/1");
    }
}
