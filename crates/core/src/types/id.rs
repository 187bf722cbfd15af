//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_entity_id!` macro to create type-safe ID wrappers that
//! prevent accidentally mixing IDs from different entity types. Content
//! entities are identified by generated string IDs of the form
//! `<prefix>-<uuid>`, matching what the content API returns.

/// Macro to define a type-safe entity ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `new()` and `as_str()` accessors
/// - `generate()` producing a fresh `<prefix>-<uuid>` ID
/// - `From<String>` and `From<ID> for String` implementations
///
/// # Example
///
/// ```rust
/// # use geduc_core::define_entity_id;
/// define_entity_id!(MemberId, "member");
/// define_entity_id!(PartnerId, "partner");
///
/// let member_id = MemberId::generate();
/// let partner_id = PartnerId::generate();
///
/// assert!(member_id.as_str().starts_with("member-"));
/// // These are different types, so this won't compile:
/// // let _: MemberId = partner_id;
/// ```
#[macro_export]
macro_rules! define_entity_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix carried by generated IDs of this type.
            pub const PREFIX: &'static str = $prefix;

            /// Create an ID from an existing string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh unique ID.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!("{}-{}", $prefix, ::uuid::Uuid::new_v4().simple()))
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define the standard entity IDs
define_entity_id!(MemberId, "member");
define_entity_id!(InitiativeId, "initiative");
define_entity_id!(TestimonialId, "testimonial");
define_entity_id!(FaqId, "faq");
define_entity_id!(MediaId, "media");
define_entity_id!(PartnerId, "partner");
