pub mod dashboard_layout;
pub mod left_menu;

pub use dashboard_layout::DashboardLayout;
pub use left_menu::LeftMenu;
