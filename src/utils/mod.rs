pub mod form;
pub mod layout;
pub mod list_navigation;
pub mod path;
pub mod style;
pub mod text_input;

pub use form::{focus_move, FocusMove, FocusRing, FormField, FIELD_HEIGHT};
pub use layout::{center_column, center_popup, stack_rows};
pub use list_navigation::ListStateExt;
pub use path::{get_config_dir, get_config_path, get_home_dir, get_log_dir, CONFIG_DIR_ENV};
pub use style::{
    focused_border_style, input_placeholder_style, input_text_style, unfocused_border_style,
};
pub use text_input::TextInput;
