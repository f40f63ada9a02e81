//! Screen options menus.

use crate::config::PlatformFeatures;
use crate::error::{WidgetError, WidgetResult};
use crate::services::{ImageRef, ImageTable};

/// Icon mode flag: `icon` is one of the predefined platform icons.
pub const ICON_MODE_PREDEFINED: i32 = 1;
/// Icon mode flag: `icon` is an image table handle.
pub const ICON_MODE_IMAGE: i32 = 0;

/// Predefined platform icons, in host constant order.
pub const PREDEFINED_ICONS: &[&str] = &[
    "add",
    "agenda",
    "always_landscape",
    "always_portrait",
    "archive",
    "call",
    "camera",
    "close",
    "compass",
    "crop",
    "day",
    "delete",
    "directions",
    "edit",
    "gallery",
    "help",
    "info_details",
    "manage",
    "mapmode",
    "month",
    "more",
    "my_calendar",
    "mylocation",
    "myplaces",
    "preferences",
    "recent_history",
    "report_image",
    "revert",
    "rotate",
    "save",
    "search",
    "send",
    "set_as",
    "share",
    "slideshow",
    "sort_alphabetically",
    "sort_by_size",
    "today",
    "upload",
    "upload_you_tube",
    "view",
    "week",
    "zoom",
];

/// Lowest predefined icon constant.
pub const ICON_ADD: i32 = 0;
/// Highest predefined icon constant.
pub const ICON_ZOOM: i32 = PREDEFINED_ICONS.len() as i32 - 1;

/// Icon attached to a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuIcon {
    None,
    Predefined(i32),
    Image(ImageRef),
}

impl MenuIcon {
    /// Name of a predefined icon constant.
    pub fn predefined_name(constant: i32) -> Option<&'static str> {
        usize::try_from(constant)
            .ok()
            .and_then(|index| PREDEFINED_ICONS.get(index).copied())
    }
}

/// One entry of a screen's options menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    pub icon: MenuIcon,
}

/// Turn a host icon argument into a [`MenuIcon`].
///
/// In predefined mode `icon` must name a platform icon. In image mode a
/// non-negative handle found in the image table must decode; any other
/// handle means "no icon".
pub fn resolve_icon(
    icon: i32,
    mode: i32,
    features: PlatformFeatures,
    images: &dyn ImageTable,
) -> WidgetResult<MenuIcon> {
    match mode {
        ICON_MODE_PREDEFINED => {
            if !features.contains(PlatformFeatures::OPTIONS_MENU_ICONS) {
                return Err(WidgetError::InvalidIcon {
                    icon,
                    reason: "predefined icons are not available on this platform",
                });
            }
            if !(ICON_ADD..=ICON_ZOOM).contains(&icon) {
                return Err(WidgetError::InvalidIcon {
                    icon,
                    reason: "not a predefined icon constant",
                });
            }
            Ok(MenuIcon::Predefined(icon))
        }
        ICON_MODE_IMAGE => {
            if icon < 0 || !images.contains(icon) {
                return Ok(MenuIcon::None);
            }
            images
                .bitmap(icon)
                .map(MenuIcon::Image)
                .ok_or(WidgetError::InvalidIcon {
                    icon,
                    reason: "image resource cannot be decoded",
                })
        }
        mode => Err(WidgetError::InvalidIconMode { mode }),
    }
}
