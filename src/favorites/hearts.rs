use std::collections::HashSet;
use std::time::Instant;

use super::FavoritesController;
use crate::model::AssetId;
use crate::page::{Container, HostPage};

impl<P: HostPage> FavoritesController<P> {
    /// Ids the store says are favorited, corrected by confirmed toggles the
    /// store has not caught up with yet.
    pub fn stored_favorite_ids(&self) -> HashSet<AssetId> {
        let mut ids = self.store.asset_ids();
        for (asset_id, favorited) in self.toggles.confirmed_overrides() {
            if favorited {
                ids.insert(asset_id.clone());
            } else {
                ids.remove(asset_id);
            }
        }
        ids
    }

    /// The current best guess at the favorited set: the store plus favorited
    /// hearts in the favorites panel, with confirmed toggles applied last.
    pub fn favorite_set(&self) -> HashSet<AssetId> {
        let mut set = self.store.asset_ids();
        for heart in self.page.hearts() {
            if heart.container == Container::Favorites && heart.favorited {
                set.insert(heart.asset_id);
            }
        }
        for (asset_id, favorited) in self.toggles.confirmed_overrides() {
            if favorited {
                set.insert(asset_id.clone());
            } else {
                set.remove(asset_id);
            }
        }
        set
    }

    /// Make every heart on the page match [`favorite_set`]. Only hearts that
    /// disagree are written; assets with a toggle in flight are left alone.
    /// Returns how many hearts changed.
    ///
    /// Does nothing until the store has loaded once, since without it an
    /// unfavorited heart can't be told apart from an unknown one.
    ///
    /// [`favorite_set`]: FavoritesController::favorite_set
    pub fn reconcile_all_hearts(&mut self) -> usize {
        self.reconcile_due = None;

        if !self.store.is_loaded() {
            tracing::debug!("skipping heart reconcile, favorites not loaded yet");
            return 0;
        }

        let set = self.favorite_set();
        let mut changed = 0;

        for heart in self.page.hearts() {
            if self.toggles.is_in_flight(&heart.asset_id) {
                continue;
            }
            let should_be = set.contains(&heart.asset_id);
            if heart.favorited != should_be && self.page.set_heart(heart.id, should_be) {
                changed += 1;
            }
        }

        if changed > 0 {
            tracing::debug!(changed, favorites = set.len(), "hearts reconciled");
        }
        changed
    }

    pub fn schedule_reconcile(&mut self, now: Instant) {
        self.reconcile_due = Some(now + self.reconcile_delay);
    }

    pub fn reconcile_due(&self) -> Option<Instant> {
        self.reconcile_due
    }

    /// Run the scheduled reconcile if its delay has passed.
    pub fn run_due_reconcile(&mut self, now: Instant) -> Option<usize> {
        match self.reconcile_due {
            Some(due) if now >= due => Some(self.reconcile_all_hearts()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::favorites::test_support::{controller, record, FakeApi};
    use crate::model::{AssetId, FavoriteFilters};
    use crate::page::{Container, HostPage, Page, TOOLTIP_FAVORITED};

    #[tokio::test]
    async fn test_reconcile_flips_only_stale_hearts() {
        let mut page = Page::new();
        let five = page.insert_heart(Container::Grid, AssetId::from(5), false);
        let six = page.insert_heart(Container::Grid, AssetId::from(6), false);
        let api = FakeApi::new().with_favorites(Ok(vec![record(5, "Ruko")]));
        let mut ctl = controller(api, page);
        ctl.load_favorites(FavoriteFilters::default()).await;

        let changed = ctl.reconcile_all_hearts();

        assert_eq!(changed, 1);
        let heart = ctl.page().heart(five).unwrap();
        assert!(heart.favorited);
        assert_eq!(heart.tooltip, TOOLTIP_FAVORITED);
        assert!(!ctl.page().heart(six).unwrap().favorited);

        // Second pass is a no-op
        assert_eq!(ctl.reconcile_all_hearts(), 0);
    }

    #[test]
    fn test_reconcile_waits_for_first_load() {
        let mut page = Page::new();
        let heart = page.insert_heart(Container::Grid, AssetId::from(1), true);
        let mut ctl = controller(FakeApi::new(), page);

        assert_eq!(ctl.reconcile_all_hearts(), 0);
        assert!(ctl.page().heart(heart).unwrap().favorited);
    }

    #[tokio::test]
    async fn test_favorites_panel_hearts_count_as_favorited() {
        let api = FakeApi::new().with_favorites(Ok(Vec::new()));
        let mut ctl = controller(api, Page::new());
        ctl.load_favorites(FavoriteFilters::default()).await;

        ctl.page_mut().insert_heart(Container::Favorites, AssetId::from(3), true);
        let grid = ctl.page_mut().insert_heart(Container::Grid, AssetId::from(3), false);

        ctl.reconcile_all_hearts();
        assert!(ctl.page().heart(grid).unwrap().favorited);
    }

    #[tokio::test]
    async fn test_confirmed_removal_survives_stale_store() {
        let api = FakeApi::new().with_favorites(Ok(vec![record(2, "Lahan")]));
        let mut page = Page::new();
        let grid = page.insert_heart(Container::Grid, AssetId::from(2), true);
        let mut ctl = controller(api, page);
        ctl.load_favorites(FavoriteFilters::default()).await;

        // Assets section is active, so no reload happens after the toggle
        // and the store still lists asset 2.
        ctl.toggle_favorite(&AssetId::from(2), grid).await.unwrap();
        assert!(ctl.store().contains(&AssetId::from(2)));

        ctl.reconcile_all_hearts();
        assert!(!ctl.page().heart(grid).unwrap().favorited);
        assert!(!ctl.favorite_set().contains(&AssetId::from(2)));
    }

    #[tokio::test]
    async fn test_confirmed_removal_survives_load_started_before_it() {
        let api = FakeApi::new().with_favorites(Ok(vec![record(2, "Lahan")]));
        let mut page = Page::new();
        let grid = page.insert_heart(Container::Grid, AssetId::from(2), true);
        let mut ctl = controller(api, page);
        ctl.load_favorites(FavoriteFilters::default()).await;

        // The list request goes out, then the removal is confirmed before the
        // response lands with the old list.
        let ticket = ctl.begin_load(FavoriteFilters::default());
        ctl.toggle_favorite(&AssetId::from(2), grid).await.unwrap();
        let now = Instant::now();
        ctl.complete_load(ticket, Ok(vec![record(2, "Lahan")]), now);
        assert!(ctl
            .page()
            .hearts()
            .iter()
            .any(|h| h.container == Container::Favorites && h.favorited));

        ctl.run_due_reconcile(now + Duration::from_secs(1));

        assert!(!ctl.favorite_set().contains(&AssetId::from(2)));
        assert!(!ctl.page().heart(grid).unwrap().favorited);
        assert!(ctl.page().hearts().iter().all(|h| !h.favorited));
    }

    #[tokio::test]
    async fn test_in_flight_hearts_are_not_clobbered() {
        let api = FakeApi::new().with_favorites(Ok(Vec::new()));
        let mut page = Page::new();
        let grid = page.insert_heart(Container::Grid, AssetId::from(8), false);
        let mut ctl = controller(api, page);
        ctl.load_favorites(FavoriteFilters::default()).await;

        ctl.begin_toggle(&AssetId::from(8), grid).unwrap();
        ctl.reconcile_all_hearts();

        assert!(ctl.page().heart(grid).unwrap().favorited);
    }
}
