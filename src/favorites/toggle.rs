use std::collections::HashMap;

use thiserror::Error;

use super::FavoritesController;
use crate::model::AssetId;
use crate::page::{ElementId, HostPage, Notification, Section};
use crate::service::ApiResult;

/// Where a given asset is in its toggle lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToggleState {
    #[default]
    Idle,
    /// Hearts already flipped, request outstanding. `previous` is what every
    /// affected heart showed before the flip.
    Optimistic {
        target: bool,
        previous: Vec<(ElementId, bool)>,
    },
    /// Server accepted the change. `stamp` orders it against store loads.
    Confirmed { favorited: bool, stamp: u64 },
    /// Server refused or was unreachable; hearts were put back.
    Reverted,
}

impl ToggleState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, ToggleState::Optimistic { .. })
    }
}

/// Per-asset toggle state, keyed by asset id.
#[derive(Debug, Default)]
pub struct ToggleTracker {
    states: HashMap<AssetId, ToggleState>,
    clock: u64,
}

impl ToggleTracker {
    pub fn state(&self, asset_id: &AssetId) -> ToggleState {
        self.states.get(asset_id).cloned().unwrap_or_default()
    }

    pub fn is_in_flight(&self, asset_id: &AssetId) -> bool {
        self.states
            .get(asset_id)
            .map(ToggleState::is_in_flight)
            .unwrap_or(false)
    }

    /// Current stamp. A load started now supersedes every confirmation with a
    /// stamp at or below this value.
    pub fn stamp(&self) -> u64 {
        self.clock
    }

    fn set_optimistic(&mut self, asset_id: AssetId, target: bool, previous: Vec<(ElementId, bool)>) {
        self.states
            .insert(asset_id, ToggleState::Optimistic { target, previous });
    }

    fn confirm(&mut self, asset_id: AssetId, favorited: bool) {
        self.clock += 1;
        let stamp = self.clock;
        self.states
            .insert(asset_id, ToggleState::Confirmed { favorited, stamp });
    }

    fn revert(&mut self, asset_id: AssetId) {
        self.states.insert(asset_id, ToggleState::Reverted);
    }

    fn take_previous(&mut self, asset_id: &AssetId) -> Option<Vec<(ElementId, bool)>> {
        match self.states.get_mut(asset_id) {
            Some(ToggleState::Optimistic { previous, .. }) => Some(std::mem::take(previous)),
            _ => None,
        }
    }

    /// Drop settled entries that a store load started at `stamp` already
    /// reflects. In-flight entries are kept.
    pub fn settle_up_to(&mut self, stamp: u64) {
        self.states.retain(|_, state| match state {
            ToggleState::Optimistic { .. } => true,
            ToggleState::Confirmed { stamp: confirmed, .. } => *confirmed > stamp,
            ToggleState::Idle | ToggleState::Reverted => false,
        });
    }

    /// Confirmed favorited states not yet reflected by the store.
    pub fn confirmed_overrides(&self) -> impl Iterator<Item = (&AssetId, bool)> {
        self.states.iter().filter_map(|(id, state)| match state {
            ToggleState::Confirmed { favorited, .. } => Some((id, *favorited)),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleRejected {
    #[error("Favorite update for asset {0} is still in progress")]
    InFlight(AssetId),

    #[error("Heart element is no longer on the page")]
    UnknownElement,
}

/// A toggle whose optimistic half has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingToggle {
    pub asset_id: AssetId,
    /// State the hearts were flipped to
    pub target: bool,
}

/// Work the host should start after a toggle settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleFollowUp {
    pub reload_favorites: bool,
    pub refresh_count: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Confirmed { favorited: bool },
    Reverted,
}

impl<P: HostPage> FavoritesController<P> {
    /// Flip every heart of the asset behind `element` and mark the asset in
    /// flight. The triggering element's current state decides the direction.
    pub fn begin_toggle(
        &mut self,
        asset_id: &AssetId,
        element: ElementId,
    ) -> Result<PendingToggle, ToggleRejected> {
        let trigger = self
            .page
            .heart(element)
            .filter(|h| &h.asset_id == asset_id)
            .ok_or(ToggleRejected::UnknownElement)?;

        if self.toggles.is_in_flight(asset_id) {
            tracing::debug!(%asset_id, "toggle rejected, request already in flight");
            return Err(ToggleRejected::InFlight(asset_id.clone()));
        }

        let target = !trigger.favorited;
        let previous: Vec<(ElementId, bool)> = self
            .page
            .hearts_for(asset_id)
            .into_iter()
            .map(|h| (h.id, h.favorited))
            .collect();

        for (id, _) in &previous {
            self.page.set_heart(*id, target);
        }

        tracing::debug!(%asset_id, target, instances = previous.len(), "optimistic toggle applied");
        self.toggles.set_optimistic(asset_id.clone(), target, previous);

        Ok(PendingToggle {
            asset_id: asset_id.clone(),
            target,
        })
    }

    /// Apply the server's answer to a toggle started with [`begin_toggle`].
    ///
    /// [`begin_toggle`]: FavoritesController::begin_toggle
    pub fn complete_toggle(&mut self, pending: &PendingToggle, result: ApiResult<()>) -> ToggleFollowUp {
        let asset_id = &pending.asset_id;

        match result {
            Ok(()) => {
                if self.toggles.take_previous(asset_id).is_none() {
                    tracing::warn!(%asset_id, "toggle confirmed without an optimistic state");
                }

                // Instances inserted while the request was out (a detail modal
                // opened mid-flight) still need the new state.
                for heart in self.page.hearts_for(asset_id) {
                    if heart.favorited != pending.target {
                        self.page.set_heart(heart.id, pending.target);
                    }
                }
                self.toggles.confirm(asset_id.clone(), pending.target);

                let message = if pending.target {
                    "Asset added to favorites"
                } else {
                    "Asset removed from favorites"
                };
                self.page.notify(Notification::success(message));
                tracing::info!(%asset_id, favorited = pending.target, "favorite toggled");

                ToggleFollowUp {
                    reload_favorites: self.page.active_section() == Section::Favorites,
                    refresh_count: true,
                }
            }
            Err(e) => {
                let previous = self.toggles.take_previous(asset_id).unwrap_or_default();
                for (id, was) in &previous {
                    // Elements re-rendered away in the meantime are skipped.
                    self.page.set_heart(*id, *was);
                }
                // Instances inserted mid-flight copied the optimistic state.
                for heart in self.page.hearts_for(asset_id) {
                    let known = previous.iter().any(|(id, _)| *id == heart.id);
                    if !known && heart.favorited != !pending.target {
                        self.page.set_heart(heart.id, !pending.target);
                    }
                }
                self.toggles.revert(asset_id.clone());

                self.page.notify(Notification::error(format!(
                    "Failed to update favorite: {}",
                    e.reason()
                )));
                tracing::warn!(%asset_id, error = %e, "favorite toggle reverted");

                ToggleFollowUp::default()
            }
        }
    }

    /// Toggle, wait for the server, then run the follow-ups.
    pub async fn toggle_favorite(
        &mut self,
        asset_id: &AssetId,
        element: ElementId,
    ) -> Result<ToggleOutcome, ToggleRejected> {
        let pending = self.begin_toggle(asset_id, element)?;
        let result = self.api.toggle_favorite(&pending.asset_id).await;
        let confirmed = result.is_ok();
        let follow_up = self.complete_toggle(&pending, result);

        if follow_up.reload_favorites {
            let filters = self.filters.clone();
            self.load_favorites(filters).await;
        }
        if follow_up.refresh_count {
            self.refresh_favorite_count().await;
        }

        Ok(if confirmed {
            ToggleOutcome::Confirmed {
                favorited: pending.target,
            }
        } else {
            ToggleOutcome::Reverted
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::test_support::{controller, FakeApi};
    use crate::page::{Container, NotificationKind, Page, TOOLTIP_FAVORITED, TOOLTIP_NOT_FAVORITED};
    use crate::service::ApiError;

    fn page_with_two_instances(asset: u64, favorited: bool) -> (Page, ElementId, ElementId) {
        let mut page = Page::new();
        let grid = page.insert_heart(Container::Grid, AssetId::from(asset), favorited);
        let detail = page.insert_heart(Container::Detail, AssetId::from(asset), favorited);
        (page, grid, detail)
    }

    #[tokio::test]
    async fn test_success_updates_every_instance() {
        let (page, grid, detail) = page_with_two_instances(7, false);
        let other = AssetId::from(8);
        let api = FakeApi::new().with_count(Ok(1));
        let mut ctl = controller(api.clone(), page);
        let other_heart = ctl.page_mut().insert_heart(Container::Grid, other, false);

        let outcome = ctl.toggle_favorite(&AssetId::from(7), grid).await.unwrap();

        assert_eq!(outcome, ToggleOutcome::Confirmed { favorited: true });
        for id in [grid, detail] {
            let heart = ctl.page().heart(id).unwrap();
            assert!(heart.favorited);
            assert_eq!(heart.tooltip, TOOLTIP_FAVORITED);
        }
        assert!(!ctl.page().heart(other_heart).unwrap().favorited);
        assert_eq!(api.toggle_calls(), vec![AssetId::from(7)]);

        let notes = ctl.page_mut().drain_notifications();
        assert_eq!(notes[0].kind, NotificationKind::Success);
        assert!(notes[0].message.contains("added"));
        assert_eq!(ctl.page().count_label(), 1);
    }

    #[tokio::test]
    async fn test_removal_message() {
        let (page, grid, _) = page_with_two_instances(3, true);
        let mut ctl = controller(FakeApi::new(), page);

        ctl.toggle_favorite(&AssetId::from(3), grid).await.unwrap();

        let notes = ctl.page_mut().drain_notifications();
        assert!(notes[0].message.contains("removed"));
        assert_eq!(
            ctl.toggle_state(&AssetId::from(3)),
            ToggleState::Confirmed { favorited: false, stamp: 1 }
        );
    }

    #[tokio::test]
    async fn test_forbidden_reverts_and_reports_reason() {
        let mut page = Page::new();
        let heart = page.insert_heart(Container::Grid, AssetId::from(42), false);
        let api = FakeApi::new().with_toggle(Err(ApiError::Rejected("forbidden".to_string())));
        let mut ctl = controller(api, page);

        let pending = ctl.begin_toggle(&AssetId::from(42), heart).unwrap();
        assert!(ctl.page().heart(heart).unwrap().favorited);

        let result = ctl.api().toggle_favorite(&pending.asset_id).await;
        ctl.complete_toggle(&pending, result);

        let h = ctl.page().heart(heart).unwrap();
        assert!(!h.favorited);
        assert_eq!(h.tooltip, TOOLTIP_NOT_FAVORITED);

        let notes = ctl.page_mut().drain_notifications();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].is_error());
        assert!(notes[0].message.contains("forbidden"));
        assert_eq!(ctl.toggle_state(&AssetId::from(42)), ToggleState::Reverted);
    }

    #[tokio::test]
    async fn test_failure_restores_mixed_prior_states() {
        // Instances disagree before the click (stale detail modal). A failed
        // toggle must put each one back exactly as it was.
        let mut page = Page::new();
        let grid = page.insert_heart(Container::Grid, AssetId::from(9), false);
        let detail = page.insert_heart(Container::Detail, AssetId::from(9), true);
        let api = FakeApi::new().with_toggle(Err(ApiError::Transport("connection refused".to_string())));
        let mut ctl = controller(api.clone(), page);

        let outcome = ctl.toggle_favorite(&AssetId::from(9), grid).await.unwrap();

        assert_eq!(outcome, ToggleOutcome::Reverted);
        assert!(!ctl.page().heart(grid).unwrap().favorited);
        assert!(ctl.page().heart(detail).unwrap().favorited);
        // No count refresh after a failure
        assert_eq!(api.count_calls(), 0);
    }

    #[test]
    fn test_second_toggle_while_in_flight_is_rejected() {
        let (page, grid, detail) = page_with_two_instances(5, false);
        let mut ctl = controller(FakeApi::new(), page);

        let pending = ctl.begin_toggle(&AssetId::from(5), grid).unwrap();
        let second = ctl.begin_toggle(&AssetId::from(5), detail);

        assert_eq!(second, Err(ToggleRejected::InFlight(AssetId::from(5))));
        // Rejected toggle changed nothing
        assert!(ctl.page().heart(grid).unwrap().favorited);
        assert!(ctl.page().heart(detail).unwrap().favorited);

        ctl.complete_toggle(&pending, Ok(()));
        assert!(ctl.begin_toggle(&AssetId::from(5), detail).is_ok());
    }

    #[test]
    fn test_other_assets_toggle_independently() {
        let mut page = Page::new();
        let a = page.insert_heart(Container::Grid, AssetId::from(1), false);
        let b = page.insert_heart(Container::Grid, AssetId::from(2), false);
        let mut ctl = controller(FakeApi::new(), page);

        assert!(ctl.begin_toggle(&AssetId::from(1), a).is_ok());
        assert!(ctl.begin_toggle(&AssetId::from(2), b).is_ok());
    }

    #[test]
    fn test_unknown_element_is_rejected() {
        let mut page = Page::new();
        let heart = page.insert_heart(Container::Grid, AssetId::from(1), false);
        let mut ctl = controller(FakeApi::new(), page);

        assert_eq!(
            ctl.begin_toggle(&AssetId::from(2), heart),
            Err(ToggleRejected::UnknownElement)
        );
        assert_eq!(
            ctl.begin_toggle(&AssetId::from(1), ElementId(999)),
            Err(ToggleRejected::UnknownElement)
        );
    }

    #[test]
    fn test_instance_added_mid_flight_gets_confirmed_state() {
        let mut page = Page::new();
        let grid = page.insert_heart(Container::Grid, AssetId::from(4), false);
        let mut ctl = controller(FakeApi::new(), page);

        let pending = ctl.begin_toggle(&AssetId::from(4), grid).unwrap();
        let late = ctl.page_mut().insert_heart(Container::Detail, AssetId::from(4), false);
        ctl.complete_toggle(&pending, Ok(()));

        assert!(ctl.page().heart(late).unwrap().favorited);
    }

    #[test]
    fn test_instance_added_mid_flight_is_reverted_on_failure() {
        let mut page = Page::new();
        let grid = page.insert_heart(Container::Grid, AssetId::from(4), false);
        let mut ctl = controller(FakeApi::new(), page);

        let pending = ctl.begin_toggle(&AssetId::from(4), grid).unwrap();
        // A detail modal opened now copies the flipped grid heart
        let late = ctl.page_mut().insert_heart(Container::Detail, AssetId::from(4), true);
        ctl.complete_toggle(&pending, Err(ApiError::Rejected("forbidden".to_string())));

        let grid_heart = ctl.page().heart(grid).unwrap();
        let late_heart = ctl.page().heart(late).unwrap();
        assert!(!grid_heart.favorited);
        assert_eq!(late_heart.favorited, grid_heart.favorited);
        assert_eq!(late_heart.tooltip, TOOLTIP_NOT_FAVORITED);
    }

    #[test]
    fn test_follow_up_reloads_only_on_favorites_section() {
        let mut page = Page::new();
        let heart = page.insert_heart(Container::Favorites, AssetId::from(1), true);
        let mut ctl = controller(FakeApi::new(), page);

        let pending = ctl.begin_toggle(&AssetId::from(1), heart).unwrap();
        let follow_up = ctl.complete_toggle(&pending, Ok(()));
        assert!(!follow_up.reload_favorites);
        assert!(follow_up.refresh_count);

        ctl.page_mut().set_active_section(Section::Favorites);
        let pending = ctl.begin_toggle(&AssetId::from(1), heart).unwrap();
        let follow_up = ctl.complete_toggle(&pending, Ok(()));
        assert!(follow_up.reload_favorites);
    }

    #[test]
    fn test_settle_up_to_keeps_newer_confirmations() {
        let mut tracker = ToggleTracker::default();
        tracker.confirm(AssetId::from(1), true);
        let load_started = tracker.stamp();
        tracker.confirm(AssetId::from(2), false);
        tracker.set_optimistic(AssetId::from(3), true, Vec::new());
        tracker.revert(AssetId::from(4));

        tracker.settle_up_to(load_started);

        assert_eq!(tracker.state(&AssetId::from(1)), ToggleState::Idle);
        assert!(matches!(tracker.state(&AssetId::from(2)), ToggleState::Confirmed { .. }));
        assert!(tracker.is_in_flight(&AssetId::from(3)));
        assert_eq!(tracker.state(&AssetId::from(4)), ToggleState::Idle);
    }
}
