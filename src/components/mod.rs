pub mod app;
pub mod clicker_view;
pub mod ending_overlay;
pub mod leaderboard_row;
pub mod leaderboard_view;
pub mod menu_view;
pub mod name_modal;
pub mod notice_banner;
pub mod profile_view;
pub mod shop_view;
pub mod stats_panel;
pub mod story_view;
pub mod timeout;
