pub mod card_stack;
pub mod images_slider;
pub mod moving_text;
pub mod sticky_scroll;
pub mod style_picker;
pub mod subscribe_form;
pub mod theme_toggle;
pub mod toast;
pub mod typewriter;
