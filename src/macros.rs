/// Declares a closed icon enum whose asset paths are fixed at compile time.
///
/// Usage:
/// `icon_set! {
///     pub enum Icon {
///         Car => "car",
///         MapPin => "map-pin",
///     }
/// }`
///
/// Generates `name()`, `asset()` (`/icons/<name>.svg`) and `ALL`.
#[macro_export]
macro_rules! icon_set {
    ( $vis:vis enum $enum_name:ident { $( $variant:ident => $file:literal ),+ $(,)? } ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $enum_name {
            $( $variant, )+
        }

        impl $enum_name {
            pub const ALL: &'static [$enum_name] = &[ $( $enum_name::$variant, )+ ];

            pub const fn name(&self) -> &'static str {
                match self {
                    $( $enum_name::$variant => $file, )+
                }
            }

            pub const fn asset(&self) -> &'static str {
                match self {
                    $( $enum_name::$variant => concat!("/icons/", $file, ".svg"), )+
                }
            }
        }
    };
}
