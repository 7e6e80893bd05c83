//! Error types for the barcode core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::forest::SortStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by the disjoint set and the forest builder.
///
/// Vertices are reported through their `Debug` rendering so the error stays
/// independent of the caller's vertex type.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BarcodeError {
    /// A vertex was looked up before it was registered.
    #[error("vertex {vertex} is not registered")]
    UnregisteredVertex {
        /// `Debug` rendering of the unknown vertex.
        vertex: Arc<str>,
    },
    /// An edge carried a zero or negative weight.
    #[error("edge ({left}, {right}) has non-positive weight {weight}")]
    NonPositiveWeight {
        /// `Debug` rendering of the first endpoint.
        left: Arc<str>,
        /// `Debug` rendering of the second endpoint.
        right: Arc<str>,
        /// The rejected weight.
        weight: f64,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// `Debug` rendering of the first endpoint.
        left: Arc<str>,
        /// `Debug` rendering of the second endpoint.
        right: Arc<str>,
    },
    /// An edge weight is so small that its reciprocal death overflows.
    #[error("edge ({left}, {right}) has weight {weight}, too small for a finite death")]
    DeathOverflow {
        /// `Debug` rendering of the first endpoint.
        left: Arc<str>,
        /// `Debug` rendering of the second endpoint.
        right: Arc<str>,
        /// The rejected weight.
        weight: f64,
    },
    /// The requested sort strategy is not compiled into this build.
    #[error("the requested sort strategy {requested:?} is not available in this build")]
    StrategyUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: SortStrategy,
    },
    /// A synchronisation primitive became poisoned after a panic.
    #[error("lock for {resource} is poisoned")]
    LockPoisoned {
        /// Name of the locked resource that was poisoned.
        resource: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`BarcodeError`] variants.
    enum BarcodeErrorCode for BarcodeError {
        /// A vertex was looked up before it was registered.
        UnregisteredVertex => UnregisteredVertex { .. } => "BARCODE_UNREGISTERED_VERTEX",
        /// An edge carried a zero or negative weight.
        NonPositiveWeight => NonPositiveWeight { .. } => "BARCODE_NON_POSITIVE_WEIGHT",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "BARCODE_NON_FINITE_WEIGHT",
        /// An edge weight is so small that its reciprocal death overflows.
        DeathOverflow => DeathOverflow { .. } => "BARCODE_DEATH_OVERFLOW",
        /// The requested sort strategy is not compiled into this build.
        StrategyUnavailable => StrategyUnavailable { .. } => "BARCODE_STRATEGY_UNAVAILABLE",
        /// A synchronisation primitive became poisoned.
        LockPoisoned => LockPoisoned { .. } => "BARCODE_LOCK_POISONED",
    }
}

impl BarcodeError {
    pub(crate) fn unregistered<V: fmt::Debug + ?Sized>(vertex: &V) -> Self {
        Self::UnregisteredVertex {
            vertex: label(vertex),
        }
    }
}

pub(crate) fn label<V: fmt::Debug + ?Sized>(vertex: &V) -> Arc<str> {
    Arc::from(format!("{vertex:?}"))
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, BarcodeError>;
