//! Enums whose variants map one-to-one onto CSS keywords

/// Declare an enum of CSS keywords.
///
/// Generates `ALL`, `css()`, `from_css()` (case-insensitive) and a
/// `Display` impl printing the keyword.
macro_rules! css_keywords {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $css:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every keyword, in menu order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// CSS text of the keyword
            pub fn css(self) -> &'static str {
                match self {
                    $($name::$variant => $css),+
                }
            }

            /// Parse a keyword from its CSS text
            pub fn from_css(value: &str) -> Option<Self> {
                let value = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|keyword| keyword.css().eq_ignore_ascii_case(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.css())
            }
        }
    };
}

pub(crate) use css_keywords;
