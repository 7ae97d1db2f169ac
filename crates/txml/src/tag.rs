//! The closed set of TXML tags understood by the renderer.

use std::fmt;

/// Tag name every document root must carry.
pub const ROOT_TAG: &str = "App";

/// A recognized TXML tag.
///
/// Anything outside the whitelist maps to [`Tag::Unknown`]; the renderer warns
/// about those and skips them instead of failing the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    App,
    Head,
    Body,
    Window,
    Text,
    Button,
    InputText,
    SliderFloat,
    Checkbox,
    SameLine,
    Spacing,
    Separator,
    Unknown,
}

impl Tag {
    /// All recognized tags, in document order of a typical app.
    pub const KNOWN: [Tag; 12] = [
        Tag::App,
        Tag::Head,
        Tag::Body,
        Tag::Window,
        Tag::Text,
        Tag::Button,
        Tag::InputText,
        Tag::SliderFloat,
        Tag::Checkbox,
        Tag::SameLine,
        Tag::Spacing,
        Tag::Separator,
    ];

    /// Maps a tag name to its variant. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            "App" => Tag::App,
            "Head" => Tag::Head,
            "Body" => Tag::Body,
            "Window" => Tag::Window,
            "Text" => Tag::Text,
            "Button" => Tag::Button,
            "InputText" => Tag::InputText,
            "SliderFloat" => Tag::SliderFloat,
            "Checkbox" => Tag::Checkbox,
            "SameLine" => Tag::SameLine,
            "Spacing" => Tag::Spacing,
            "Separator" => Tag::Separator,
            _ => Tag::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::App => "App",
            Tag::Head => "Head",
            Tag::Body => "Body",
            Tag::Window => "Window",
            Tag::Text => "Text",
            Tag::Button => "Button",
            Tag::InputText => "InputText",
            Tag::SliderFloat => "SliderFloat",
            Tag::Checkbox => "Checkbox",
            Tag::SameLine => "SameLine",
            Tag::Spacing => "Spacing",
            Tag::Separator => "Separator",
            Tag::Unknown => "Unknown",
        }
    }

    pub fn is_known(self) -> bool {
        self != Tag::Unknown
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_round_trip_through_names() {
        for tag in Tag::KNOWN {
            assert_eq!(Tag::from_name(tag.as_str()), tag);
        }
    }

    #[test]
    fn tag_lookup_is_case_sensitive() {
        assert_eq!(Tag::from_name("window"), Tag::Unknown);
        assert_eq!(Tag::from_name("Window"), Tag::Window);
    }
}
