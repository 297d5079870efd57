//! `define_port_error!`: error enums for driven ports.
//!
//! Every variant carries one `message: String` and gets a snake_case
//! constructor accepting anything `Into<String>`:
//!
//! ```ignore
//! define_port_error! {
//!     pub enum StoreError {
//!         Connection => "store connection failed: {message}",
//!     }
//! }
//! let err = StoreError::connection("refused");
//! ```

macro_rules! define_port_error {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $display:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($display)]
                $variant { message: String },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Build a [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant { message: message.into() }
                    }
                }
            )+

            /// Adapter-supplied detail.
            pub fn message(&self) -> &str {
                match self {
                    $( Self::$variant { message } )|+ => message,
                }
            }
        }
    };
}

pub(crate) use define_port_error;
