use super::FavoritesController;
use crate::page::{Badge, HostPage};
use crate::service::ApiResult;

impl<P: HostPage> FavoritesController<P> {
    /// Count derived from the last successful favorites load, or zero if
    /// nothing has loaded yet.
    pub fn fallback_count(&self) -> usize {
        if !self.store.is_loaded() {
            return 0;
        }
        self.stored_favorite_ids().len()
    }

    /// Apply a count response to every count surface. Errors of any kind fall
    /// back to the local count. Returns the count displayed.
    pub fn complete_count(&mut self, result: ApiResult<usize>) -> usize {
        let count = match result {
            Ok(count) => count,
            Err(e) => {
                let fallback = self.fallback_count();
                tracing::warn!(error = %e, fallback, "favorite count unavailable, using local count");
                fallback
            }
        };

        self.page.set_favorite_count(count);

        // A badge that disagrees with the count (most often a leftover
        // nonzero badge after the count dropped to zero) is corrected here.
        let expected = Badge::for_count(count);
        let shown = self.page.badge();
        if shown != expected {
            tracing::warn!(count, shown_text = %shown.text, shown_visible = shown.visible, "correcting stale favorites badge");
            self.page.force_badge(expected);
        }

        self.last_count = Some(count);
        count
    }

    pub async fn refresh_favorite_count(&mut self) -> usize {
        let result = self.api.favorite_count().await;
        self.complete_count(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::favorites::test_support::{controller, record, FakeApi};
    use crate::favorites::{FavoriteCard, FavoritesController};
    use crate::model::FavoriteFilters;
    use crate::page::{Badge, ElementId, HeartIcon, HostPage, Notification, Page, Section};
    use crate::service::ApiError;

    #[tokio::test]
    async fn test_server_count_is_displayed() {
        let mut ctl = controller(FakeApi::new().with_count(Ok(4)), Page::new());

        assert_eq!(ctl.refresh_favorite_count().await, 4);
        assert_eq!(ctl.page().count_label(), 4);
        assert_eq!(ctl.page().badge(), Badge::for_count(4));
    }

    #[tokio::test]
    async fn test_http_500_falls_back_to_store() {
        let api = FakeApi::new()
            .with_favorites(Ok(vec![record(1, "A"), record(2, "B"), record(3, "C")]))
            .with_count(Err(ApiError::Status {
                status: 500,
                message: "Internal Server Error".to_string(),
            }));
        let mut ctl = controller(api, Page::new());
        ctl.load_favorites(FavoriteFilters::default()).await;

        assert_eq!(ctl.refresh_favorite_count().await, 3);
        assert_eq!(ctl.page().count_label(), 3);
        assert!(ctl.page().badge().visible);
    }

    #[tokio::test]
    async fn test_rejected_count_without_store_is_zero() {
        let api = FakeApi::new().with_count(Err(ApiError::Rejected("Unauthenticated".to_string())));
        let mut ctl = controller(api, Page::new());

        assert_eq!(ctl.refresh_favorite_count().await, 0);
        assert!(!ctl.page().badge().visible);
        // Count failures are logged, not shown
        assert!(ctl.page_mut().drain_notifications().is_empty());
    }

    #[tokio::test]
    async fn test_badge_hidden_iff_zero() {
        let api = FakeApi::new().with_count(Ok(2));
        let mut ctl = controller(api.clone(), Page::new());

        ctl.refresh_favorite_count().await;
        assert!(ctl.page().badge().visible);

        api.set_count(Ok(0));
        ctl.refresh_favorite_count().await;
        assert_eq!(ctl.page().badge(), Badge::hidden());
    }

    /// A host whose count update never touches the badge.
    #[derive(Default)]
    struct StickyBadgePage {
        inner: Page,
    }

    impl HostPage for StickyBadgePage {
        fn hearts(&self) -> Vec<HeartIcon> {
            self.inner.hearts()
        }
        fn set_heart(&mut self, id: ElementId, favorited: bool) -> bool {
            self.inner.set_heart(id, favorited)
        }
        fn active_section(&self) -> Section {
            self.inner.active_section()
        }
        fn show_favorites_loading(&mut self) {
            self.inner.show_favorites_loading()
        }
        fn render_favorites(&mut self, cards: Vec<FavoriteCard>) {
            self.inner.render_favorites(cards)
        }
        fn render_favorites_empty(&mut self) {
            self.inner.render_favorites_empty()
        }
        fn render_favorites_error(&mut self, message: &str) {
            self.inner.render_favorites_error(message)
        }
        fn set_favorite_count(&mut self, _count: usize) {}
        fn badge(&self) -> Badge {
            self.inner.badge()
        }
        fn force_badge(&mut self, badge: Badge) {
            self.inner.force_badge(badge)
        }
        fn notify(&mut self, notification: Notification) {
            self.inner.notify(notification)
        }
    }

    #[tokio::test]
    async fn test_stale_nonzero_badge_is_forced_to_zero() {
        let mut page = StickyBadgePage::default();
        page.inner.force_badge(Badge::for_count(5));
        let mut ctl = FavoritesController::new(
            std::sync::Arc::new(FakeApi::new().with_count(Ok(0))),
            page,
        );

        ctl.refresh_favorite_count().await;

        assert_eq!(ctl.page().badge(), Badge::hidden());
        assert_eq!(ctl.last_count(), Some(0));
    }
}
