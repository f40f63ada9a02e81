//! Property key names understood by the engine.

// Every widget.
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const LEFT: &str = "left";
pub const TOP: &str = "top";
pub const VISIBLE: &str = "visible";
pub const ENABLED: &str = "enabled";
pub const BACKGROUND_COLOR: &str = "backgroundColor";
pub const ALPHA: &str = "alpha";
pub const FONT_HANDLE: &str = "fontHandle";

// Text widgets.
pub const TEXT: &str = "text";
pub const FONT_COLOR: &str = "fontColor";
pub const FONT_SIZE: &str = "fontSize";
pub const MAX_NUMBER_OF_LINES: &str = "maxNumberOfLines";

// Edit box.
pub const PLACEHOLDER: &str = "placeholder";
pub const EDIT_MODE: &str = "editMode";
pub const MAX_LENGTH: &str = "maxLength";

// Images.
pub const IMAGE: &str = "image";
pub const SCALE_MODE: &str = "scaleMode";

// Toggles.
pub const CHECKED: &str = "checked";

// Slider and progress bar.
pub const MAX: &str = "max";
pub const VALUE: &str = "value";
pub const INCREASE_VALUE: &str = "increaseValue";
pub const DECREASE_VALUE: &str = "decreaseValue";
pub const PROGRESS: &str = "progress";
pub const INCREMENT_PROGRESS: &str = "incrementProgress";

// Containers.
pub const CHILD_COUNT: &str = "childCount";
pub const CHILD_HORIZONTAL_ALIGNMENT: &str = "childHorizontalAlignment";
pub const CHILD_VERTICAL_ALIGNMENT: &str = "childVerticalAlignment";

// Screens.
pub const TITLE: &str = "title";
pub const ICON: &str = "icon";
pub const BACK_BUTTON_ENABLED: &str = "backButtonEnabled";
pub const CURRENT_TAB: &str = "currentTab";

// Dialogs.
pub const SHOWN: &str = "shown";

// Radio groups.
pub const RADIO_GROUP_ADD_VIEW: &str = "addview";
pub const RADIO_GROUP_SELECTED: &str = "selected";
