mod nav_bar;
mod page_view;
mod popup;
mod status_bar;

pub use nav_bar::NavBarWidget;
pub use page_view::PageViewWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
