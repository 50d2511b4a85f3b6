//! The host page contract.
//!
//! The favorites controller never reaches into a UI directly. Whatever hosts
//! it (the terminal app, a test harness) implements [`HostPage`] and hands it
//! over at construction.

pub mod memory;

use crate::favorites::list::FavoriteCard;
use crate::model::AssetId;

pub use memory::{Page, PanelState};

pub const TOOLTIP_FAVORITED: &str = "Remove from favorites";
pub const TOOLTIP_NOT_FAVORITED: &str = "Add to favorites";

pub fn tooltip_for(favorited: bool) -> &'static str {
    if favorited {
        TOOLTIP_FAVORITED
    } else {
        TOOLTIP_NOT_FAVORITED
    }
}

/// Handle to one heart element. Handles are never reused, so a handle to an
/// element that has been re-rendered away simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Where a heart element lives on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// Asset card grid
    Grid,
    /// The favorites panel
    Favorites,
    /// Asset detail modal
    Detail,
}

/// Which top-level section the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Assets,
    Favorites,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeartIcon {
    pub id: ElementId,
    pub asset_id: AssetId,
    pub container: Container,
    pub favorited: bool,
    pub tooltip: String,
}

/// Count badge as currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub visible: bool,
    pub text: String,
}

impl Badge {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            text: "0".to_string(),
        }
    }

    /// What the badge must look like for `count`: hidden at zero.
    pub fn for_count(count: usize) -> Self {
        if count == 0 {
            Self::hidden()
        } else {
            Self {
                visible: true,
                text: if count > 99 { "99+".to_string() } else { count.to_string() },
            }
        }
    }
}

impl Default for Badge {
    fn default() -> Self {
        Badge::hidden()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Everything the favorites controller needs from the page hosting it.
pub trait HostPage {
    /// Every heart element currently on the page.
    fn hearts(&self) -> Vec<HeartIcon>;

    fn heart(&self, id: ElementId) -> Option<HeartIcon> {
        self.hearts().into_iter().find(|h| h.id == id)
    }

    fn hearts_for(&self, asset_id: &AssetId) -> Vec<HeartIcon> {
        self.hearts()
            .into_iter()
            .filter(|h| &h.asset_id == asset_id)
            .collect()
    }

    /// Set the favorited marker and tooltip of one heart. Returns false if
    /// the element no longer exists.
    fn set_heart(&mut self, id: ElementId, favorited: bool) -> bool;

    fn active_section(&self) -> Section;

    fn show_favorites_loading(&mut self);

    fn render_favorites(&mut self, cards: Vec<FavoriteCard>);

    fn render_favorites_empty(&mut self);

    fn render_favorites_error(&mut self, message: &str);

    /// Update every count surface: labels and the badge.
    fn set_favorite_count(&mut self, count: usize);

    fn badge(&self) -> Badge;

    /// Overwrite the badge regardless of what the count surfaces think.
    fn force_badge(&mut self, badge: Badge);

    fn notify(&mut self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_for_count() {
        assert_eq!(Badge::for_count(0), Badge::hidden());
        assert_eq!(Badge::for_count(3).text, "3");
        assert!(Badge::for_count(3).visible);
        assert_eq!(Badge::for_count(150).text, "99+");
    }

    #[test]
    fn test_tooltip_for() {
        assert_eq!(tooltip_for(true), TOOLTIP_FAVORITED);
        assert_eq!(tooltip_for(false), TOOLTIP_NOT_FAVORITED);
    }
}
