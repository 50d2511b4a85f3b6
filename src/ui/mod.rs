pub mod assets;
pub mod detail;
pub mod favorites;
pub mod help;
pub mod keybindings;
pub mod status_bar;
pub mod styles;
pub mod theme;

pub use assets::{render_assets_view, AssetsViewState};
pub use detail::{render_detail_modal, DetailViewState};
pub use favorites::{render_favorites_view, FavoritesViewState};
pub use help::{render_help_panel, HelpPanelState};
pub use keybindings::help_content_height;
pub use status_bar::{render_status_bar, StatusBarState};
pub use theme::Theme;
