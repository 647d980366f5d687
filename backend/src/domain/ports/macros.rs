//! Helper macro for store port error enums.
//!
//! Each variant names the [`ErrorCode`](crate::domain::ErrorCode) it maps to
//! and its display message. The macro derives `thiserror::Error`, emits
//! snake_case constructors, and converts the enum into the domain
//! [`Error`](crate::domain::Error) with the message unchanged.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? as $code:ident => $message:expr
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

            /// Failure category surfaced to clients.
            pub fn code(&self) -> $crate::domain::ErrorCode {
                match self {
                    $( Self::$variant { .. } => $crate::domain::ErrorCode::$code, )*
                }
            }
        }

        impl From<$name> for $crate::domain::Error {
            fn from(value: $name) -> Self {
                $crate::domain::Error::new(value.code(), value.to_string())
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::{Error, ErrorCode};

    define_port_error! {
        pub enum ExamplePortError {
            Missing as NotFound => "thing not found",
            Taken { name: String } as Conflict => "{name} is taken",
            Counted { message: String, count: u32 } as InvalidRequest => "{message} ({count})",
        }
    }

    #[test]
    fn unit_constructor_uses_snake_case() {
        assert_eq!(ExamplePortError::missing().to_string(), "thing not found");
    }

    #[test]
    fn field_constructors_accept_str() {
        let err = ExamplePortError::taken("ada");
        assert_eq!(err.to_string(), "ada is taken");
        let err = ExamplePortError::counted("bad", 3_u32);
        assert_eq!(err.to_string(), "bad (3)");
    }

    #[test]
    fn converts_into_domain_error_verbatim() {
        let err: Error = ExamplePortError::taken("ada").into();
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), "ada is taken");

        let err: Error = ExamplePortError::missing().into();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
