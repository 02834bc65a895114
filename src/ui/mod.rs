// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (nav bar, content, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - nav_bar: Renders the nav bar from the engine's layout decision
// - more_menu: Renders the overflow disclosure under its trigger
// - content: Renders the scrollable page sections
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with the layout state
// - toast: Renders toast notifications (brief pop-up messages)

pub mod content;
pub mod layout;
pub mod legend;
pub mod more_menu;
pub mod nav_bar;
pub mod render;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
