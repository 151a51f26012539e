pub mod camera_panel;
pub mod handlers;
pub mod header;
pub mod preview_area;
pub mod results;
pub mod theme_toggle;
pub mod toast;
pub mod upload_section;
pub mod utils;
