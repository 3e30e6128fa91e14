//! Macros for ergonomic action definitions.

/// Generate an action enum with its `Action` implementation.
///
/// Each variant is paired with the string tag it carries on the wire.
/// The enum serializes as `{ "type": "<TAG>" }`. An optional
/// `unrecognized:` variant catches every tag not listed, so reducers get an
/// explicit fallthrough branch instead of a deserialization error.
///
/// # Example
///
/// ```
/// use unistore::action_enum;
/// use unistore::core::Action;
///
/// action_enum! {
///     pub enum LightAction {
///         TurnOn => "TURN_ON",
///         TurnOff => "TURN_OFF",
///     }
///     unrecognized: Other
/// }
///
/// assert_eq!(LightAction::TurnOn.kind(), "TURN_ON");
///
/// let parsed: LightAction = serde_json::from_str(r#"{"type":"DIM"}"#).unwrap();
/// assert_eq!(parsed, LightAction::Other);
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $kind:tt
            ),* $(,)?
        }

        $(unrecognized: $fallback:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        #[serde(tag = "type")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $kind)]
                $variant,
            )*
            $(
                #[serde(other)]
                $fallback,
            )?
        }

        impl $crate::core::Action for $name {
            fn kind(&self) -> &str {
                match self {
                    $(Self::$variant => $kind,)*
                    $(Self::$fallback => stringify!($fallback),)?
                }
            }
        }
    };
}
