//! Helper macro for declaring port error enums.
//!
//! Each declared variant gets a `thiserror` message, a snake_case
//! constructor taking `impl Into<_>` arguments, and a stable `kind()` label
//! used as a structured logging field.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),+ }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                Self::$variant { $($field: $field.into()),+ }
            }
        }
    };

    (@pattern $variant:ident) => { Self::$variant };
    (@pattern $variant:ident { $($field:ident : $ty:ty),+ }) => { Self::$variant { .. } };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),+ $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),+ } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),+ } )?);
            )*

            /// Snake_case name of the variant, for log fields.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(
                        define_port_error!(@pattern $variant $( { $($field : $ty),+ } )?) => {
                            ::paste::paste! { stringify!([<$variant:snake>]) }
                        }
                    )*
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for the generated helpers.
    use rstest::rstest;

    define_port_error! {
        pub enum SamplePortError {
            Unavailable => "store unavailable",
            Rejected { message: String } => "rejected: {message}",
            Limited { message: String, retries: u8 } => "limited: {message} after {retries}",
        }
    }

    #[rstest]
    fn unit_constructor_builds_variant() {
        assert_eq!(SamplePortError::unavailable(), SamplePortError::Unavailable);
    }

    #[rstest]
    fn string_fields_accept_str() {
        let err = SamplePortError::rejected("duplicate key");
        assert_eq!(err.to_string(), "rejected: duplicate key");
    }

    #[rstest]
    fn mixed_fields_keep_their_types() {
        let err = SamplePortError::limited("pool exhausted", 3_u8);
        assert_eq!(err.to_string(), "limited: pool exhausted after 3");
    }

    #[rstest]
    #[case(SamplePortError::unavailable(), "unavailable")]
    #[case(SamplePortError::rejected("x"), "rejected")]
    #[case(SamplePortError::limited("x", 1_u8), "limited")]
    fn kind_is_snake_case_variant_name(#[case] err: SamplePortError, #[case] expected: &str) {
        assert_eq!(err.kind(), expected);
    }
}
