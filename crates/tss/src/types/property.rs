//! Recognized TSS properties and how their values are typed.

use phf::phf_set;

/// Property names the stylesheet parser accepts without a warning.
static KNOWN_PROPERTIES: phf::Set<&'static str> = phf_set! {
    "color",
    "text-color",
    "background-color",
    "button-color",
    "button-color-hover",
    "button-color-active",
    "widget-background-color",
    "widget-background-color-hover",
    "widget-background-color-active",
    "frame-background-color",
    "window-background-color",
    "width",
    "height",
    "padding",
    "margin",
    "font-size",
    "font-family",
    "border-radius",
    "opacity",
    "content",
};

/// Whether `name` is on the property whitelist.
pub fn is_known_property(name: &str) -> bool {
    KNOWN_PROPERTIES.contains(name)
}

/// How a property's string value is coerced into a [`StyleValue`](super::StyleValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `color`, any `*-color` property and its `-hover`/`-active` variants,
    /// parsed into a packed RGBA color.
    Color,
    /// Sizes and spacing, parsed as a float prefix (no number is `0`).
    Number,
    /// `opacity`, clamped to `[0, 1]`, `1` when unparsable.
    Opacity,
    /// Everything else, kept as written.
    Text,
}

impl PropertyKind {
    pub fn of(property: &str) -> Self {
        match property {
            "color" => PropertyKind::Color,
            p if ["-color", "-color-hover", "-color-active"]
                .iter()
                .any(|suffix| p.ends_with(suffix)) =>
            {
                PropertyKind::Color
            }
            "width" | "height" | "padding" | "margin" | "font-size" | "border-radius" => {
                PropertyKind::Number
            }
            "opacity" => PropertyKind::Opacity,
            _ => PropertyKind::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_family_is_detected_by_suffix() {
        assert_eq!(PropertyKind::of("color"), PropertyKind::Color);
        assert_eq!(PropertyKind::of("widget-background-color"), PropertyKind::Color);
        assert_eq!(PropertyKind::of("button-color"), PropertyKind::Color);
        assert_eq!(PropertyKind::of("button-color-hover"), PropertyKind::Color);
        assert_eq!(PropertyKind::of("colorful"), PropertyKind::Text);
    }

    #[test]
    fn sizes_and_opacity() {
        assert_eq!(PropertyKind::of("width"), PropertyKind::Number);
        assert_eq!(PropertyKind::of("border-radius"), PropertyKind::Number);
        assert_eq!(PropertyKind::of("opacity"), PropertyKind::Opacity);
        assert_eq!(PropertyKind::of("font-family"), PropertyKind::Text);
    }

    #[test]
    fn whitelist_lookup() {
        assert!(is_known_property("text-color"));
        assert!(!is_known_property("text-colour"));
    }
}
