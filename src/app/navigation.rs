use super::App;
use super::state::ViewMode;
use crate::page::{HostPage, PanelState, Section};

impl App {
    fn current_list_len(&self) -> usize {
        match self.view_mode {
            ViewMode::Assets => self.page().grid().len(),
            ViewMode::Favorites => match self.page().panel() {
                PanelState::Cards(cards) => cards.len(),
                _ => 0,
            },
        }
    }

    pub fn move_down(&mut self) {
        let len = self.current_list_len();
        match self.view_mode {
            ViewMode::Assets => self.assets_list.move_down(len),
            ViewMode::Favorites => self.favorites_list.move_down(len),
        }
    }

    pub fn move_up(&mut self) {
        match self.view_mode {
            ViewMode::Assets => self.assets_list.move_up(),
            ViewMode::Favorites => self.favorites_list.move_up(),
        }
    }

    /// Switch between the asset grid and the favorites section. Activating
    /// the favorites section reloads the list.
    pub fn switch_view(&mut self) {
        self.close_detail();
        self.view_mode = self.view_mode.next();
        let section = self.view_mode.section();
        self.favorites.page_mut().set_active_section(section);
        if section == Section::Favorites {
            self.spawn_favorites_load();
        }
    }

    /// Open the detail modal for the selected asset. Its heart starts from the
    /// heart already shown for the asset, or the known favorite set.
    pub fn open_detail(&mut self) {
        let Some(asset_id) = self.selected_asset_id() else {
            return;
        };
        let Some(asset) = self.find_asset(&asset_id) else {
            self.add_debug(format!("Asset {} not found for detail view", asset_id));
            return;
        };

        let favorited = match self.page().hearts_for(&asset_id).first() {
            Some(heart) => heart.favorited,
            None => self.favorites.favorite_set().contains(&asset_id),
        };
        self.favorites.page_mut().open_detail(asset, favorited);
    }

    pub fn close_detail(&mut self) {
        self.favorites.page_mut().close_detail();
    }

    pub fn is_detail_open(&self) -> bool {
        self.page().detail().is_some()
    }

    pub fn filter_label(&self) -> &'static str {
        self.favorites
            .filters()
            .asset_type
            .map(|t| t.label())
            .unwrap_or("Semua")
    }

    /// Advance the asset type filter and reload everything it applies to.
    pub fn cycle_type_filter(&mut self) {
        let mut filters = self.favorites.filters().clone();
        filters.cycle_asset_type();
        self.favorites.set_filters(filters);
        self.set_status_info(format!("Filter: {}", self.filter_label()));
        self.reload();
    }

    /// Re-fetch the catalog and the favorites list with the current filters.
    pub fn reload(&mut self) {
        self.spawn_catalog_load();
        self.spawn_favorites_load();
    }
}
