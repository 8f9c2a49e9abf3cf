//! Newtype IDs for type-safe Slack references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types (a canvas ID passed
//! where a user ID is expected, for example).

/// Errors that can occur when parsing an ID from user input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input string is empty or only whitespace.
    #[error("{kind} cannot be empty")]
    Empty {
        /// Name of the ID type.
        kind: &'static str,
    },
    /// The input contains whitespace after trimming.
    #[error("{kind} must not contain whitespace")]
    Whitespace {
        /// Name of the ID type.
        kind: &'static str,
    },
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `parse()`, `as_str()`
/// - `From<&str>`, `From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use canvas_bot_core::define_id;
/// define_id!(ChannelId);
/// define_id!(MessageId);
///
/// let channel = ChannelId::new("C01");
/// let message = MessageId::new("C01");
///
/// // These are different types, so this won't compile:
/// // let _: ChannelId = message;
/// # assert_eq!(channel.as_str(), message.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID without validation.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Parse an ID typed by a user, trimming surrounding whitespace.
            ///
            /// # Errors
            ///
            /// Returns an error if the input is blank or contains inner whitespace.
            pub fn parse(input: &str) -> ::core::result::Result<Self, $crate::IdError> {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    return Err($crate::IdError::Empty {
                        kind: stringify!($name),
                    });
                }
                if trimmed.chars().any(char::is_whitespace) {
                    return Err($crate::IdError::Whitespace {
                        kind: stringify!($name),
                    });
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(CanvasId);
define_id!(SectionId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let id = CanvasId::parse("  F0123ABC \n").expect("valid id");
        assert_eq!(id.as_str(), "F0123ABC");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(
            CanvasId::parse("   "),
            Err(IdError::Empty { kind: "CanvasId" })
        );
    }

    #[test]
    fn test_parse_rejects_inner_whitespace() {
        assert!(matches!(
            UserId::parse("U1 U2"),
            Err(IdError::Whitespace { kind: "UserId" })
        ));
    }

    #[test]
    fn test_serde_transparent() {
        let id = SectionId::new("temp:C:abc");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"temp:C:abc\"");

        let back: SectionId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn test_display() {
        assert_eq!(UserId::from("U123").to_string(), "U123");
    }
}
