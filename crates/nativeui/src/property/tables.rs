//! Property tables per widget kind.

use super::convert::{
    format_bool, format_color, parse_bool, parse_color, parse_count, parse_float, parse_int,
};
use super::keys;
use super::{PropertyContext, PropertyDescriptor, PropertyError};
use crate::config::PlatformFeatures;
use crate::services::ImageRef;
use crate::widget::{
    EditMode, HorizontalAlignment, ImageState, LayoutState, RangeState, ScaleMode, ScreenState,
    TextState, VerticalAlignment, Widget, WidgetBody, WidgetKind, WRAP_CONTENT,
};

type Table = &'static [PropertyDescriptor];

/// Tables consulted for a kind, most specific first.
pub(super) fn for_kind(kind: WidgetKind) -> &'static [Table] {
    match kind {
        WidgetKind::NativeRoot => &[],
        WidgetKind::VerticalLayout | WidgetKind::HorizontalLayout => {
            &[LINEAR_LAYOUT, CONTAINER, COMMON]
        }
        WidgetKind::RelativeLayout | WidgetKind::ListView | WidgetKind::RadioGroup => {
            &[CONTAINER, COMMON]
        }
        WidgetKind::Label => &[LABEL, TEXT, COMMON],
        WidgetKind::Button | WidgetKind::ListViewItem => &[TEXT, COMMON],
        WidgetKind::EditBox => &[EDIT_BOX, TEXT, COMMON],
        WidgetKind::Image => &[IMAGE, COMMON],
        WidgetKind::ImageButton => &[IMAGE, TEXT, COMMON],
        WidgetKind::CheckBox | WidgetKind::RadioButton => &[TOGGLE, COMMON],
        WidgetKind::Slider => &[SLIDER, COMMON],
        WidgetKind::ProgressBar => &[PROGRESS_BAR, COMMON],
        WidgetKind::Screen => &[SCREEN, CONTAINER, COMMON],
        WidgetKind::StackScreen => &[STACK_SCREEN, SCREEN, CONTAINER, COMMON],
        WidgetKind::TabScreen => &[TAB_SCREEN, SCREEN, CONTAINER, COMMON],
        WidgetKind::Dialog => &[DIALOG, CONTAINER, COMMON],
    }
}

// Body accessors. A mismatch means the table list above is wrong for the
// kind, which surfaces to the host as an unknown property.

fn text_mut(widget: &mut Widget) -> Result<&mut TextState, PropertyError> {
    widget.text_mut().ok_or(PropertyError::UnknownName)
}

fn text(widget: &Widget) -> Result<&TextState, PropertyError> {
    widget.text().ok_or(PropertyError::UnknownName)
}

fn image_mut(widget: &mut Widget) -> Result<&mut ImageState, PropertyError> {
    match &mut widget.body {
        WidgetBody::Image(image) => Ok(image),
        _ => Err(PropertyError::UnknownName),
    }
}

fn image(widget: &Widget) -> Result<&ImageState, PropertyError> {
    match &widget.body {
        WidgetBody::Image(image) => Ok(image),
        _ => Err(PropertyError::UnknownName),
    }
}

fn range_mut(widget: &mut Widget) -> Result<&mut RangeState, PropertyError> {
    match &mut widget.body {
        WidgetBody::Range(range) => Ok(range),
        _ => Err(PropertyError::UnknownName),
    }
}

fn range(widget: &Widget) -> Result<&RangeState, PropertyError> {
    match &widget.body {
        WidgetBody::Range(range) => Ok(range),
        _ => Err(PropertyError::UnknownName),
    }
}

fn layout_mut(widget: &mut Widget) -> Result<&mut LayoutState, PropertyError> {
    match &mut widget.body {
        WidgetBody::Layout(layout) => Ok(layout),
        _ => Err(PropertyError::UnknownName),
    }
}

fn layout(widget: &Widget) -> Result<&LayoutState, PropertyError> {
    match &widget.body {
        WidgetBody::Layout(layout) => Ok(layout),
        _ => Err(PropertyError::UnknownName),
    }
}

fn screen_mut(widget: &mut Widget) -> Result<&mut ScreenState, PropertyError> {
    widget.screen_mut().ok_or(PropertyError::UnknownName)
}

fn screen(widget: &Widget) -> Result<&ScreenState, PropertyError> {
    widget.screen().ok_or(PropertyError::UnknownName)
}

/// Resolve an image handle; `-1` clears.
fn resolve_image(value: &str, ctx: &PropertyContext<'_>) -> Result<Option<ImageRef>, PropertyError> {
    let handle = parse_int(value)?;
    if handle == -1 {
        return Ok(None);
    }
    ctx.images
        .bitmap(handle)
        .map(Some)
        .ok_or_else(|| PropertyError::InvalidValue(format!("no image with handle {}", handle)))
}

fn format_image(image: Option<&ImageRef>) -> String {
    image.map_or(-1, |image| image.handle).to_string()
}

fn parse_dimension(value: &str) -> Result<i32, PropertyError> {
    let parsed = parse_int(value)?;
    if parsed < WRAP_CONTENT {
        return Err(PropertyError::InvalidValue(format!(
            "{} is neither a size nor a fill/wrap constant",
            parsed
        )));
    }
    Ok(parsed)
}

// Shared by every widget except the native root.
const COMMON: Table = &[
    PropertyDescriptor::read_write(
        keys::WIDTH,
        |w, v, _| {
            w.common.width = parse_dimension(v)?;
            Ok(())
        },
        |w, _| Ok(w.common.width.to_string()),
    ),
    PropertyDescriptor::read_write(
        keys::HEIGHT,
        |w, v, _| {
            w.common.height = parse_dimension(v)?;
            Ok(())
        },
        |w, _| Ok(w.common.height.to_string()),
    ),
    PropertyDescriptor::read_write(
        keys::LEFT,
        |w, v, _| {
            w.common.left = parse_int(v)?;
            Ok(())
        },
        |w, _| Ok(w.common.left.to_string()),
    ),
    PropertyDescriptor::read_write(
        keys::TOP,
        |w, v, _| {
            w.common.top = parse_int(v)?;
            Ok(())
        },
        |w, _| Ok(w.common.top.to_string()),
    ),
    PropertyDescriptor::read_write(
        keys::VISIBLE,
        |w, v, _| {
            w.common.visible = parse_bool(v)?;
            Ok(())
        },
        |w, _| Ok(format_bool(w.common.visible)),
    ),
    PropertyDescriptor::read_write(
        keys::ENABLED,
        |w, v, _| {
            w.common.enabled = parse_bool(v)?;
            Ok(())
        },
        |w, _| Ok(format_bool(w.common.enabled)),
    ),
    PropertyDescriptor::read_write(
        keys::BACKGROUND_COLOR,
        |w, v, _| {
            w.common.background_color = parse_color(v)?;
            Ok(())
        },
        |w, _| Ok(format_color(w.common.background_color)),
    ),
    PropertyDescriptor::read_write(
        keys::ALPHA,
        |w, v, ctx| {
            ctx.require(PlatformFeatures::WIDGET_ALPHA, "widget alpha")?;
            let alpha = parse_float(v)?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(PropertyError::InvalidValue(format!(
                    "alpha {} is outside 0.0..=1.0",
                    alpha
                )));
            }
            w.common.alpha = alpha;
            Ok(())
        },
        |w, ctx| {
            ctx.require(PlatformFeatures::WIDGET_ALPHA, "widget alpha")?;
            Ok(w.common.alpha.to_string())
        },
    ),
];

const CONTAINER: Table = &[PropertyDescriptor::read_only(keys::CHILD_COUNT, |w, _| {
    Ok(w.child_count().to_string())
})];

const TEXT: Table = &[
    PropertyDescriptor::read_write(
        keys::TEXT,
        |w, v, _| {
            text_mut(w)?.text = v.to_string();
            Ok(())
        },
        |w, _| Ok(text(w)?.text.clone()),
    ),
    PropertyDescriptor::read_write(
        keys::FONT_COLOR,
        |w, v, _| {
            text_mut(w)?.font_color = parse_color(v)?;
            Ok(())
        },
        |w, _| Ok(format_color(text(w)?.font_color)),
    ),
    PropertyDescriptor::read_write(
        keys::FONT_SIZE,
        |w, v, _| {
            let size = parse_float(v)?;
            if size <= 0.0 {
                return Err(PropertyError::InvalidValue(format!(
                    "font size {} must be positive",
                    size
                )));
            }
            text_mut(w)?.font_size = size;
            Ok(())
        },
        |w, _| Ok(text(w)?.font_size.to_string()),
    ),
];

const LABEL: Table = &[PropertyDescriptor::read_write(
    keys::MAX_NUMBER_OF_LINES,
    |w, v, _| {
        text_mut(w)?.max_lines = parse_count(v)?;
        Ok(())
    },
    |w, _| Ok(text(w)?.max_lines.to_string()),
)];

fn edit_box_mut(widget: &mut Widget) -> Result<&mut crate::widget::EditBoxState, PropertyError> {
    match &mut widget.body {
        WidgetBody::EditBox(edit) => Ok(edit),
        _ => Err(PropertyError::UnknownName),
    }
}

fn edit_box(widget: &Widget) -> Result<&crate::widget::EditBoxState, PropertyError> {
    match &widget.body {
        WidgetBody::EditBox(edit) => Ok(edit),
        _ => Err(PropertyError::UnknownName),
    }
}

/// Keep at most `max` characters; 0 means unlimited.
fn truncate_chars(text: &mut String, max: u32) {
    if max == 0 {
        return;
    }
    if let Some((byte_index, _)) = text.char_indices().nth(max as usize) {
        text.truncate(byte_index);
    }
}

const EDIT_BOX: Table = &[
    PropertyDescriptor::read_write(
        keys::TEXT,
        |w, v, _| {
            let edit = edit_box_mut(w)?;
            let mut text = v.to_string();
            truncate_chars(&mut text, edit.max_length);
            edit.text.text = text;
            Ok(())
        },
        |w, _| Ok(edit_box(w)?.text.text.clone()),
    ),
    PropertyDescriptor::read_write(
        keys::PLACEHOLDER,
        |w, v, _| {
            edit_box_mut(w)?.placeholder = v.to_string();
            Ok(())
        },
        |w, _| Ok(edit_box(w)?.placeholder.clone()),
    ),
    PropertyDescriptor::read_write(
        keys::EDIT_MODE,
        |w, v, _| {
            edit_box_mut(w)?.mode =
                EditMode::parse(v).ok_or_else(|| PropertyError::conversion(v, "edit mode"))?;
            Ok(())
        },
        |w, _| Ok(edit_box(w)?.mode.as_str().to_string()),
    ),
    PropertyDescriptor::read_write(
        keys::MAX_LENGTH,
        |w, v, _| {
            let max = parse_count(v)?;
            let edit = edit_box_mut(w)?;
            edit.max_length = max;
            truncate_chars(&mut edit.text.text, max);
            Ok(())
        },
        |w, _| Ok(edit_box(w)?.max_length.to_string()),
    ),
];

const IMAGE: Table = &[
    PropertyDescriptor::read_write(
        keys::IMAGE,
        |w, v, ctx| {
            let resolved = resolve_image(v, ctx)?;
            image_mut(w)?.image = resolved;
            Ok(())
        },
        |w, _| Ok(format_image(image(w)?.image.as_ref())),
    ),
    PropertyDescriptor::read_write(
        keys::SCALE_MODE,
        |w, v, _| {
            image_mut(w)?.scale_mode =
                ScaleMode::parse(v).ok_or_else(|| PropertyError::conversion(v, "scale mode"))?;
            Ok(())
        },
        |w, _| Ok(image(w)?.scale_mode.as_str().to_string()),
    ),
];

const TOGGLE: Table = &[PropertyDescriptor::read_write(
    keys::CHECKED,
    |w, v, _| {
        let checked = parse_bool(v)?;
        w.toggle_mut().ok_or(PropertyError::UnknownName)?.checked = checked;
        Ok(())
    },
    |w, _| {
        let toggle = w.toggle().ok_or(PropertyError::UnknownName)?;
        Ok(format_bool(toggle.checked))
    },
)];

fn set_range_max(widget: &mut Widget, value: &str) -> Result<(), PropertyError> {
    let max = parse_count(value)?;
    let max = i32::try_from(max).map_err(|_| PropertyError::conversion(value, "integer"))?;
    range_mut(widget)?.set_max(max);
    Ok(())
}

fn set_range_value(widget: &mut Widget, value: &str) -> Result<(), PropertyError> {
    let parsed = parse_int(value)?;
    let range = range_mut(widget)?;
    if !(0..=range.max).contains(&parsed) {
        return Err(PropertyError::InvalidValue(format!(
            "{} is outside 0..={}",
            parsed, range.max
        )));
    }
    range.value = parsed;
    Ok(())
}

fn offset_range(widget: &mut Widget, value: &str, sign: i32) -> Result<(), PropertyError> {
    let delta = i32::try_from(parse_count(value)?)
        .map_err(|_| PropertyError::conversion(value, "integer"))?;
    range_mut(widget)?.offset(sign * delta);
    Ok(())
}

const SLIDER: Table = &[
    PropertyDescriptor::read_write(
        keys::MAX,
        |w, v, _| set_range_max(w, v),
        |w, _| Ok(range(w)?.max.to_string()),
    ),
    PropertyDescriptor::read_write(
        keys::VALUE,
        |w, v, _| set_range_value(w, v),
        |w, _| Ok(range(w)?.value.to_string()),
    ),
    PropertyDescriptor::write_only(keys::INCREASE_VALUE, |w, v, _| offset_range(w, v, 1)),
    PropertyDescriptor::write_only(keys::DECREASE_VALUE, |w, v, _| offset_range(w, v, -1)),
];

const PROGRESS_BAR: Table = &[
    PropertyDescriptor::read_write(
        keys::MAX,
        |w, v, _| set_range_max(w, v),
        |w, _| Ok(range(w)?.max.to_string()),
    ),
    PropertyDescriptor::read_write(
        keys::PROGRESS,
        |w, v, _| set_range_value(w, v),
        |w, _| Ok(range(w)?.value.to_string()),
    ),
    PropertyDescriptor::write_only(keys::INCREMENT_PROGRESS, |w, v, _| offset_range(w, v, 1)),
];

const LINEAR_LAYOUT: Table = &[
    PropertyDescriptor::read_write(
        keys::CHILD_HORIZONTAL_ALIGNMENT,
        |w, v, _| {
            layout_mut(w)?.horizontal = HorizontalAlignment::parse(v)
                .ok_or_else(|| PropertyError::conversion(v, "horizontal alignment"))?;
            Ok(())
        },
        |w, _| Ok(layout(w)?.horizontal.as_str().to_string()),
    ),
    PropertyDescriptor::read_write(
        keys::CHILD_VERTICAL_ALIGNMENT,
        |w, v, _| {
            layout_mut(w)?.vertical = VerticalAlignment::parse(v)
                .ok_or_else(|| PropertyError::conversion(v, "vertical alignment"))?;
            Ok(())
        },
        |w, _| Ok(layout(w)?.vertical.as_str().to_string()),
    ),
];

const SCREEN: Table = &[
    PropertyDescriptor::read_write(
        keys::TITLE,
        |w, v, _| {
            screen_mut(w)?.title = v.to_string();
            Ok(())
        },
        |w, _| Ok(screen(w)?.title.clone()),
    ),
    PropertyDescriptor::read_write(
        keys::ICON,
        |w, v, ctx| {
            let resolved = resolve_image(v, ctx)?;
            screen_mut(w)?.icon = resolved;
            Ok(())
        },
        |w, _| Ok(format_image(screen(w)?.icon.as_ref())),
    ),
];

const STACK_SCREEN: Table = &[PropertyDescriptor::read_write(
    keys::BACK_BUTTON_ENABLED,
    |w, v, _| {
        let enabled = parse_bool(v)?;
        match &mut w.body {
            WidgetBody::StackScreen(_, stack) => {
                stack.back_enabled = enabled;
                Ok(())
            }
            _ => Err(PropertyError::UnknownName),
        }
    },
    |w, _| {
        let stack = w.stack().ok_or(PropertyError::UnknownName)?;
        Ok(format_bool(stack.back_enabled))
    },
)];

const TAB_SCREEN: Table = &[PropertyDescriptor::read_write(
    keys::CURRENT_TAB,
    |w, v, _| {
        let index = parse_int(v)?;
        let tabs = w.child_count();
        let index = usize::try_from(index)
            .ok()
            .filter(|&index| index < tabs)
            .ok_or_else(|| {
                PropertyError::InvalidValue(format!("tab {} out of range 0..{}", index, tabs))
            })?;
        w.tabs_mut().ok_or(PropertyError::UnknownName)?.active = Some(index);
        Ok(())
    },
    |w, _| {
        let tabs = w.tabs().ok_or(PropertyError::UnknownName)?;
        Ok(tabs.active.map_or(-1, |index| index as i32).to_string())
    },
)];

const DIALOG: Table = &[
    PropertyDescriptor::read_write(
        keys::TITLE,
        |w, v, _| {
            w.dialog_mut().ok_or(PropertyError::UnknownName)?.title = v.to_string();
            Ok(())
        },
        |w, _| Ok(w.dialog().ok_or(PropertyError::UnknownName)?.title.clone()),
    ),
    PropertyDescriptor::read_only(keys::SHOWN, |w, _| {
        let dialog = w.dialog().ok_or(PropertyError::UnknownName)?;
        Ok(format_bool(dialog.shown))
    }),
];

#[cfg(test)]
mod tests {
    use super::super::{get_property, known_keys, set_property};
    use super::*;
    use crate::handle::Handle;
    use crate::services::{ImageTable, NoImages};

    struct OneImage;

    impl ImageTable for OneImage {
        fn contains(&self, handle: i32) -> bool {
            handle == 7
        }

        fn bitmap(&self, handle: i32) -> Option<ImageRef> {
            (handle == 7).then_some(ImageRef {
                handle,
                width: 16,
                height: 16,
            })
        }
    }

    fn ctx(images: &dyn ImageTable, features: PlatformFeatures) -> PropertyContext<'_> {
        PropertyContext { images, features }
    }

    fn widget(kind: WidgetKind) -> Widget {
        Widget::new(Handle::from_raw(1), kind)
    }

    #[test]
    fn test_every_creatable_kind_has_common_properties() {
        for kind in WidgetKind::CREATABLE {
            let known = known_keys(kind);
            assert!(known.contains(&keys::WIDTH), "{:?}", kind);
            assert!(known.contains(&keys::BACKGROUND_COLOR), "{:?}", kind);
        }
        assert!(known_keys(WidgetKind::NativeRoot).is_empty());
    }

    #[test]
    fn test_common_round_trip() {
        let images = NoImages;
        let ctx = ctx(&images, PlatformFeatures::all());
        let mut label = widget(WidgetKind::Label);

        set_property(&mut label, keys::WIDTH, "-1", &ctx).unwrap();
        assert_eq!(get_property(&label, keys::WIDTH, &ctx).unwrap(), "-1");
        assert!(matches!(
            set_property(&mut label, keys::WIDTH, "-3", &ctx),
            Err(PropertyError::InvalidValue(_))
        ));

        set_property(&mut label, keys::BACKGROUND_COLOR, "#336699", &ctx).unwrap();
        assert_eq!(
            get_property(&label, keys::BACKGROUND_COLOR, &ctx).unwrap(),
            "0x336699"
        );
    }

    #[test]
    fn test_alpha_needs_feature() {
        let images = NoImages;
        let without = ctx(&images, PlatformFeatures::empty());
        let mut button = widget(WidgetKind::Button);
        assert_eq!(
            set_property(&mut button, keys::ALPHA, "0.5", &without),
            Err(PropertyError::FeatureNotAvailable("widget alpha"))
        );

        let with = ctx(&images, PlatformFeatures::WIDGET_ALPHA);
        set_property(&mut button, keys::ALPHA, "0.5", &with).unwrap();
        assert_eq!(get_property(&button, keys::ALPHA, &with).unwrap(), "0.5");
        assert!(set_property(&mut button, keys::ALPHA, "1.5", &with).is_err());
    }

    #[test]
    fn test_unknown_and_access_errors() {
        let images = NoImages;
        let ctx = ctx(&images, PlatformFeatures::all());
        let mut label = widget(WidgetKind::Label);
        assert_eq!(
            set_property(&mut label, "bogus", "1", &ctx),
            Err(PropertyError::UnknownName)
        );
        assert_eq!(
            set_property(&mut label, keys::CHILD_COUNT, "1", &ctx),
            Err(PropertyError::UnknownName)
        );

        let mut layout = widget(WidgetKind::VerticalLayout);
        assert_eq!(
            set_property(&mut layout, keys::CHILD_COUNT, "1", &ctx),
            Err(PropertyError::ReadOnly)
        );

        let slider = widget(WidgetKind::Slider);
        assert_eq!(
            get_property(&slider, keys::INCREASE_VALUE, &ctx),
            Err(PropertyError::WriteOnly)
        );
    }

    #[test]
    fn test_edit_box_max_length_truncates() {
        let images = NoImages;
        let ctx = ctx(&images, PlatformFeatures::all());
        let mut edit = widget(WidgetKind::EditBox);
        set_property(&mut edit, keys::TEXT, "héllo world", &ctx).unwrap();
        set_property(&mut edit, keys::MAX_LENGTH, "5", &ctx).unwrap();
        assert_eq!(get_property(&edit, keys::TEXT, &ctx).unwrap(), "héllo");

        set_property(&mut edit, keys::TEXT, "abcdefgh", &ctx).unwrap();
        assert_eq!(get_property(&edit, keys::TEXT, &ctx).unwrap(), "abcde");

        set_property(&mut edit, keys::EDIT_MODE, "password", &ctx).unwrap();
        assert!(set_property(&mut edit, keys::EDIT_MODE, "secret", &ctx).is_err());
    }

    #[test]
    fn test_image_resolves_through_table() {
        let images = OneImage;
        let ctx = ctx(&images, PlatformFeatures::all());
        let mut image = widget(WidgetKind::Image);
        set_property(&mut image, keys::IMAGE, "7", &ctx).unwrap();
        assert_eq!(get_property(&image, keys::IMAGE, &ctx).unwrap(), "7");
        assert!(matches!(
            set_property(&mut image, keys::IMAGE, "8", &ctx),
            Err(PropertyError::InvalidValue(_))
        ));
        set_property(&mut image, keys::IMAGE, "-1", &ctx).unwrap();
        assert_eq!(get_property(&image, keys::IMAGE, &ctx).unwrap(), "-1");
    }

    #[test]
    fn test_slider_range() {
        let images = NoImages;
        let ctx = ctx(&images, PlatformFeatures::all());
        let mut slider = widget(WidgetKind::Slider);
        set_property(&mut slider, keys::MAX, "10", &ctx).unwrap();
        set_property(&mut slider, keys::VALUE, "4", &ctx).unwrap();
        set_property(&mut slider, keys::INCREASE_VALUE, "20", &ctx).unwrap();
        assert_eq!(get_property(&slider, keys::VALUE, &ctx).unwrap(), "10");
        set_property(&mut slider, keys::DECREASE_VALUE, "3", &ctx).unwrap();
        assert_eq!(get_property(&slider, keys::VALUE, &ctx).unwrap(), "7");
        assert!(set_property(&mut slider, keys::VALUE, "11", &ctx).is_err());
    }

    #[test]
    fn test_tab_screen_current_tab_bounds() {
        let images = NoImages;
        let ctx = ctx(&images, PlatformFeatures::all());
        let mut tabs = widget(WidgetKind::TabScreen);
        assert_eq!(get_property(&tabs, keys::CURRENT_TAB, &ctx).unwrap(), "-1");
        assert!(set_property(&mut tabs, keys::CURRENT_TAB, "0", &ctx).is_err());

        tabs.insert_child_at(0, Handle::from_raw(2));
        tabs.insert_child_at(1, Handle::from_raw(3));
        set_property(&mut tabs, keys::CURRENT_TAB, "1", &ctx).unwrap();
        assert_eq!(get_property(&tabs, keys::CURRENT_TAB, &ctx).unwrap(), "1");
        assert_eq!(
            get_property(&tabs, keys::TITLE, &ctx).unwrap(),
            String::new()
        );
    }
}
