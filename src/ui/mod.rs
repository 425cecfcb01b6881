pub mod candidates;
pub mod drawer_view;
pub mod job_dialog;
pub mod main_window;
pub mod sidebar;
