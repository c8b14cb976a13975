pub mod achievements;
pub mod app;
pub mod countdown;
pub mod leaderboard;
pub mod participation_form;
pub mod stats_panel;
pub mod success_modal;
