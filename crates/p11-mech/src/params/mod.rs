//! # Mechanism Parameter Blocks
//!
//! Each supported mechanism gets a safe parameter type that owns its
//! buffers, validates presence at construction, and knows how to bind
//! itself into the raw record the token interface expects.
//! [`MechanismParams`] is the seam mechanism dispatch consumes.

use crate::native::CK_MECHANISM_TYPE;

pub mod skipjack;

pub use skipjack::{
    SkipjackPrivateWrapParams, SkipjackPrivateWrapParamsBuilder, SkipjackPrivateWrapRecord,
};

/// Common interface of all mechanism parameter blocks.
///
/// Implementors translate themselves into a raw native record. The record
/// type borrows the block (`Native<'a>`), so the compiler rejects any use
/// of the record after the block that owns the underlying buffers is gone.
pub trait MechanismParams {
    /// The raw record handed to the token interface for this mechanism.
    type Native<'a>
    where
        Self: 'a;

    /// Mechanism code this parameter block belongs to.
    const MECHANISM: CK_MECHANISM_TYPE;

    /// Bind the block's buffers into the raw record for a native call.
    fn to_native(&self) -> Self::Native<'_>;
}
