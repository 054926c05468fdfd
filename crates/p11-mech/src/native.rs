//! # Raw Token-Interface Types — Native Parameter Records
//!
//! Scalar type aliases, mechanism codes, and the `#[repr(C)]` parameter
//! record for the SKIPJACK private wrap mechanism. This module is the
//! only place the native binary layout lives; everything else in the
//! crate goes through it.
//!
//! Type and field names follow the C conventions of the token interface
//! so the definitions read against the native documentation.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use std::os::raw::{c_uchar, c_ulong};

/// Unsigned 8-bit value.
pub type CK_BYTE = c_uchar;

/// The token interface's universal unsigned scalar.
pub type CK_ULONG = c_ulong;

/// Pointer to an input byte buffer.
pub type CK_BYTE_PTR = *const CK_BYTE;

/// Mechanism type code.
pub type CK_MECHANISM_TYPE = CK_ULONG;

/// Mechanism code for the SKIPJACK private-key wrap operation.
pub const CKM_SKIPJACK_PRIVATE_WRAP: CK_MECHANISM_TYPE = 0x0000_1009;

/// Parameter record for [`CKM_SKIPJACK_PRIVATE_WRAP`].
///
/// Six pointer/length pairs in fixed order: password, public data,
/// random Ra, prime p, base g, subprime q. Field order is an interop
/// requirement — the native provider dereferences this layout directly.
/// The pointers borrow caller-owned storage; the record owns nothing.
#[repr(C)]
pub struct CK_SKIPJACK_PRIVATE_WRAP_PARAMS {
    pub pPassword: CK_BYTE_PTR,
    pub ulPasswordLen: CK_ULONG,
    pub pPublicData: CK_BYTE_PTR,
    pub ulPublicDataLen: CK_ULONG,
    pub pRandomA: CK_BYTE_PTR,
    pub ulRandomALen: CK_ULONG,
    pub pPrimeP: CK_BYTE_PTR,
    pub ulPrimePLen: CK_ULONG,
    pub pBaseG: CK_BYTE_PTR,
    pub ulBaseGLen: CK_ULONG,
    pub pSubprimeQ: CK_BYTE_PTR,
    pub ulSubprimeQLen: CK_ULONG,
}
