/// Defines an enum whose variants are identified by the text shown in the dashboard UI.
#[macro_export]
macro_rules! define_ui_enum {
    (
        $(#[$enum_attr:meta])*
        $vis:vis enum $enum_name:ident {
            $(
                $(#[$variant_attr:meta])*
                $variant:ident => $text:literal
            ),* $(,)?
        }
    ) => {
        $(#[$enum_attr])*
        $vis enum $enum_name {
            $(
                $(#[$variant_attr])*
                $variant
            ),*
        }

        impl $enum_name {
            /// All variants in the order they are listed in the UI.
            pub const ALL: &'static [$enum_name] = &[$(Self::$variant),*];

            /// Returns text that represents the variant in the UI.
            pub const fn text(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),*
                }
            }

            /// Returns texts of all variants.
            pub fn texts() -> Vec<String> {
                Self::ALL.iter().map(|v| v.text().to_owned()).collect()
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.text())
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = $crate::UnknownVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant)),*,
                    _ => Err($crate::UnknownVariantError::new(stringify!($enum_name), s)),
                }
            }
        }
    };
}
