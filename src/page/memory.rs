use std::collections::{HashSet, VecDeque};

use super::{
    tooltip_for, Badge, Container, ElementId, HeartIcon, HostPage, Notification, Section,
};
use crate::favorites::list::FavoriteCard;
use crate::model::{Asset, AssetId};

/// Contents of the favorites container.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Cards(Vec<FavoriteCard>),
    Empty,
    Error(String),
}

/// In-memory page model rendered by the terminal UI.
///
/// Holds the element tree the favorites controller reconciles against: the
/// asset grid, the favorites panel, an optional detail modal, the count
/// surfaces and a queue of pending notifications.
#[derive(Debug, Default)]
pub struct Page {
    hearts: Vec<HeartIcon>,
    next_element: u64,
    section: Section,
    grid: Vec<Asset>,
    panel: PanelState,
    detail: Option<Asset>,
    count_label: usize,
    badge: Badge,
    notifications: VecDeque<Notification>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a heart to `container` and return its handle.
    pub fn insert_heart(&mut self, container: Container, asset_id: AssetId, favorited: bool) -> ElementId {
        self.next_element += 1;
        let id = ElementId(self.next_element);
        self.hearts.push(HeartIcon {
            id,
            asset_id,
            container,
            favorited,
            tooltip: tooltip_for(favorited).to_string(),
        });
        id
    }

    fn remove_hearts_in(&mut self, container: Container) {
        self.hearts.retain(|h| h.container != container);
    }

    pub fn heart_in(&self, container: Container, asset_id: &AssetId) -> Option<&HeartIcon> {
        self.hearts
            .iter()
            .find(|h| h.container == container && &h.asset_id == asset_id)
    }

    /// Replace the asset grid. A card starts favorited if the catalog says so
    /// or if `known_favorites` contains it.
    pub fn render_asset_grid(&mut self, assets: Vec<Asset>, known_favorites: &HashSet<AssetId>) {
        self.remove_hearts_in(Container::Grid);
        for asset in &assets {
            let favorited = asset.is_favorited || known_favorites.contains(&asset.id);
            self.insert_heart(Container::Grid, asset.id.clone(), favorited);
        }
        self.grid = assets;
    }

    pub fn grid(&self) -> &[Asset] {
        &self.grid
    }

    /// Open the detail modal, adding a second heart instance for the asset.
    pub fn open_detail(&mut self, asset: Asset, favorited: bool) -> ElementId {
        self.close_detail();
        let id = self.insert_heart(Container::Detail, asset.id.clone(), favorited);
        self.detail = Some(asset);
        id
    }

    pub fn close_detail(&mut self) {
        self.remove_hearts_in(Container::Detail);
        self.detail = None;
    }

    pub fn detail(&self) -> Option<&Asset> {
        self.detail.as_ref()
    }

    pub fn set_active_section(&mut self, section: Section) {
        self.section = section;
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn count_label(&self) -> usize {
        self.count_label
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }
}

impl HostPage for Page {
    fn hearts(&self) -> Vec<HeartIcon> {
        self.hearts.clone()
    }

    fn heart(&self, id: ElementId) -> Option<HeartIcon> {
        self.hearts.iter().find(|h| h.id == id).cloned()
    }

    fn set_heart(&mut self, id: ElementId, favorited: bool) -> bool {
        match self.hearts.iter_mut().find(|h| h.id == id) {
            Some(heart) => {
                heart.favorited = favorited;
                heart.tooltip = tooltip_for(favorited).to_string();
                true
            }
            None => false,
        }
    }

    fn active_section(&self) -> Section {
        self.section
    }

    fn show_favorites_loading(&mut self) {
        self.remove_hearts_in(Container::Favorites);
        self.panel = PanelState::Loading;
    }

    fn render_favorites(&mut self, cards: Vec<FavoriteCard>) {
        self.remove_hearts_in(Container::Favorites);
        for card in &cards {
            self.insert_heart(Container::Favorites, card.asset_id.clone(), card.favorited);
        }
        self.panel = PanelState::Cards(cards);
    }

    fn render_favorites_empty(&mut self) {
        self.remove_hearts_in(Container::Favorites);
        self.panel = PanelState::Empty;
    }

    fn render_favorites_error(&mut self, message: &str) {
        self.remove_hearts_in(Container::Favorites);
        self.panel = PanelState::Error(message.to_string());
    }

    fn set_favorite_count(&mut self, count: usize) {
        self.count_label = count;
        self.badge = Badge::for_count(count);
    }

    fn badge(&self) -> Badge {
        self.badge.clone()
    }

    fn force_badge(&mut self, badge: Badge) {
        self.badge = badge;
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::test_support::asset;

    #[test]
    fn test_grid_hearts_follow_catalog_and_known_favorites() {
        let mut page = Page::new();
        let mut liked = asset(1, "Ruko A");
        liked.is_favorited = true;
        let known: HashSet<AssetId> = [AssetId::from(2)].into_iter().collect();

        page.render_asset_grid(vec![liked, asset(2, "Ruko B"), asset(3, "Lahan C")], &known);

        let states: Vec<bool> = page.hearts().iter().map(|h| h.favorited).collect();
        assert_eq!(states, vec![true, true, false]);
    }

    #[test]
    fn test_rerender_invalidates_old_handles() {
        let mut page = Page::new();
        page.render_asset_grid(vec![asset(1, "Ruko A")], &HashSet::new());
        let old = page.hearts()[0].id;

        page.render_asset_grid(vec![asset(1, "Ruko A")], &HashSet::new());
        assert!(!page.set_heart(old, true));
        assert_eq!(page.hearts().len(), 1);
    }

    #[test]
    fn test_detail_adds_second_instance() {
        let mut page = Page::new();
        page.render_asset_grid(vec![asset(7, "Gedung")], &HashSet::new());
        page.open_detail(asset(7, "Gedung"), false);

        assert_eq!(page.hearts_for(&AssetId::from(7)).len(), 2);

        page.close_detail();
        assert_eq!(page.hearts_for(&AssetId::from(7)).len(), 1);
        assert!(page.detail().is_none());
    }

    #[test]
    fn test_set_heart_updates_tooltip() {
        let mut page = Page::new();
        let id = page.insert_heart(Container::Grid, AssetId::from(1), false);
        assert!(page.set_heart(id, true));

        let heart = page.heart(id).unwrap();
        assert!(heart.favorited);
        assert_eq!(heart.tooltip, crate::page::TOOLTIP_FAVORITED);
    }
}
