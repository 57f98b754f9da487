// Host page contract and input bindings for the web frontend.
//
// Geometry, camera and animation tuning live in `globe_core::constants`;
// only browser-facing names are kept here.

// Element the canvas is appended to; falls back to <body>.
pub const CONTAINER_ID: &str = "container";
pub const CANVAS_ID: &str = "globe-canvas";

// Tuning panel
pub const GUI_PANEL_ID: &str = "globe-gui";
pub const GUI_PROGRESS_ID: &str = "globe-gui-progress";
pub const GUI_PANEL_STYLE: &str = "position:fixed;top:8px;right:8px;padding:6px 10px;\
background:rgba(20,20,28,0.85);color:#eee;font:12px system-ui;border-radius:4px;z-index:10";

// Keys
pub const KEY_TOGGLE_PLAY: &str = " ";
pub const KEY_TOGGLE_GUI: &str = "h";

