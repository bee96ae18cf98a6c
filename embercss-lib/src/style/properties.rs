//! The closed whitelist of recognized CSS property names.
//!
//! Declarations whose property is not in this enumeration never enter the
//! document model; the rule builder drops them with a warning. Extending
//! the whitelist is a code change, not configuration.

/// A recognized CSS property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Background,
    BackgroundColor,
    BackgroundImage,
    BackgroundPosition,
    BackgroundRepeat,
    Border,
    BorderBottom,
    BorderCollapse,
    BorderColor,
    BorderLeft,
    BorderRight,
    BorderSpacing,
    BorderStyle,
    BorderTop,
    BorderWidth,
    Bottom,
    Clear,
    Color,
    Cursor,
    Display,
    Float,
    Font,
    FontFamily,
    FontSize,
    FontStyle,
    FontWeight,
    Height,
    Left,
    LetterSpacing,
    LineHeight,
    ListStyle,
    ListStyleType,
    Margin,
    MarginBottom,
    MarginLeft,
    MarginRight,
    MarginTop,
    MaxHeight,
    MaxWidth,
    MinHeight,
    MinWidth,
    Overflow,
    Padding,
    PaddingBottom,
    PaddingLeft,
    PaddingRight,
    PaddingTop,
    Position,
    Right,
    TextAlign,
    TextDecoration,
    TextIndent,
    TextTransform,
    Top,
    VerticalAlign,
    Visibility,
    WhiteSpace,
    Width,
    WordSpacing,
    ZIndex,
}

impl Property {
    /// Looks up a property by its CSS name, e.g. `"border-width"`.
    ///
    /// Returns `None` for anything outside the whitelist.
    pub fn from_name(name: &str) -> Option<Property> {
        let property = match name {
            "background" => Property::Background,
            "background-color" => Property::BackgroundColor,
            "background-image" => Property::BackgroundImage,
            "background-position" => Property::BackgroundPosition,
            "background-repeat" => Property::BackgroundRepeat,
            "border" => Property::Border,
            "border-bottom" => Property::BorderBottom,
            "border-collapse" => Property::BorderCollapse,
            "border-color" => Property::BorderColor,
            "border-left" => Property::BorderLeft,
            "border-right" => Property::BorderRight,
            "border-spacing" => Property::BorderSpacing,
            "border-style" => Property::BorderStyle,
            "border-top" => Property::BorderTop,
            "border-width" => Property::BorderWidth,
            "bottom" => Property::Bottom,
            "clear" => Property::Clear,
            "color" => Property::Color,
            "cursor" => Property::Cursor,
            "display" => Property::Display,
            "float" => Property::Float,
            "font" => Property::Font,
            "font-family" => Property::FontFamily,
            "font-size" => Property::FontSize,
            "font-style" => Property::FontStyle,
            "font-weight" => Property::FontWeight,
            "height" => Property::Height,
            "left" => Property::Left,
            "letter-spacing" => Property::LetterSpacing,
            "line-height" => Property::LineHeight,
            "list-style" => Property::ListStyle,
            "list-style-type" => Property::ListStyleType,
            "margin" => Property::Margin,
            "margin-bottom" => Property::MarginBottom,
            "margin-left" => Property::MarginLeft,
            "margin-right" => Property::MarginRight,
            "margin-top" => Property::MarginTop,
            "max-height" => Property::MaxHeight,
            "max-width" => Property::MaxWidth,
            "min-height" => Property::MinHeight,
            "min-width" => Property::MinWidth,
            "overflow" => Property::Overflow,
            "padding" => Property::Padding,
            "padding-bottom" => Property::PaddingBottom,
            "padding-left" => Property::PaddingLeft,
            "padding-right" => Property::PaddingRight,
            "padding-top" => Property::PaddingTop,
            "position" => Property::Position,
            "right" => Property::Right,
            "text-align" => Property::TextAlign,
            "text-decoration" => Property::TextDecoration,
            "text-indent" => Property::TextIndent,
            "text-transform" => Property::TextTransform,
            "top" => Property::Top,
            "vertical-align" => Property::VerticalAlign,
            "visibility" => Property::Visibility,
            "white-space" => Property::WhiteSpace,
            "width" => Property::Width,
            "word-spacing" => Property::WordSpacing,
            "z-index" => Property::ZIndex,
            _ => return None,
        };
        Some(property)
    }

    /// Returns the CSS name of this property.
    pub fn name(&self) -> &'static str {
        match self {
            Property::Background => "background",
            Property::BackgroundColor => "background-color",
            Property::BackgroundImage => "background-image",
            Property::BackgroundPosition => "background-position",
            Property::BackgroundRepeat => "background-repeat",
            Property::Border => "border",
            Property::BorderBottom => "border-bottom",
            Property::BorderCollapse => "border-collapse",
            Property::BorderColor => "border-color",
            Property::BorderLeft => "border-left",
            Property::BorderRight => "border-right",
            Property::BorderSpacing => "border-spacing",
            Property::BorderStyle => "border-style",
            Property::BorderTop => "border-top",
            Property::BorderWidth => "border-width",
            Property::Bottom => "bottom",
            Property::Clear => "clear",
            Property::Color => "color",
            Property::Cursor => "cursor",
            Property::Display => "display",
            Property::Float => "float",
            Property::Font => "font",
            Property::FontFamily => "font-family",
            Property::FontSize => "font-size",
            Property::FontStyle => "font-style",
            Property::FontWeight => "font-weight",
            Property::Height => "height",
            Property::Left => "left",
            Property::LetterSpacing => "letter-spacing",
            Property::LineHeight => "line-height",
            Property::ListStyle => "list-style",
            Property::ListStyleType => "list-style-type",
            Property::Margin => "margin",
            Property::MarginBottom => "margin-bottom",
            Property::MarginLeft => "margin-left",
            Property::MarginRight => "margin-right",
            Property::MarginTop => "margin-top",
            Property::MaxHeight => "max-height",
            Property::MaxWidth => "max-width",
            Property::MinHeight => "min-height",
            Property::MinWidth => "min-width",
            Property::Overflow => "overflow",
            Property::Padding => "padding",
            Property::PaddingBottom => "padding-bottom",
            Property::PaddingLeft => "padding-left",
            Property::PaddingRight => "padding-right",
            Property::PaddingTop => "padding-top",
            Property::Position => "position",
            Property::Right => "right",
            Property::TextAlign => "text-align",
            Property::TextDecoration => "text-decoration",
            Property::TextIndent => "text-indent",
            Property::TextTransform => "text-transform",
            Property::Top => "top",
            Property::VerticalAlign => "vertical-align",
            Property::Visibility => "visibility",
            Property::WhiteSpace => "white-space",
            Property::Width => "width",
            Property::WordSpacing => "word-spacing",
            Property::ZIndex => "z-index",
        }
    }
}
