//! Macro generating port error enums.
//!
//! Each enum gets `thiserror` display messages, one snake_case constructor per
//! variant (fields accept `impl Into<T>`) and a `kind()` accessor naming the
//! variant, which is safe to log.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            /// Snake-case variant name, without payload.
            pub fn kind(&self) -> &'static str {
                ::paste::paste! {
                    match self {
                        $( Self::$variant { .. } => stringify!([<$variant:snake>]), )*
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        pub enum StoreError {
            Unreachable => "store unreachable",
            Rejected { reason: String } => "rejected: {reason}",
            RetryLater { reason: String, attempts: u32 } => "retry later: {reason} after {attempts}",
        }
    }

    #[rstest]
    fn string_fields_take_str() {
        assert_eq!(StoreError::rejected("full").to_string(), "rejected: full");
    }

    #[rstest]
    fn mixed_fields_keep_their_types() {
        let err = StoreError::retry_later("busy", 3_u32);
        assert_eq!(
            err,
            StoreError::RetryLater {
                reason: "busy".to_owned(),
                attempts: 3
            }
        );
        assert_eq!(err.to_string(), "retry later: busy after 3");
    }

    #[rstest]
    #[case(StoreError::unreachable(), "unreachable")]
    #[case(StoreError::rejected("x"), "rejected")]
    #[case(StoreError::retry_later("x", 1_u32), "retry_later")]
    fn kind_names_the_variant(#[case] err: StoreError, #[case] kind: &str) {
        assert_eq!(err.kind(), kind);
    }
}
