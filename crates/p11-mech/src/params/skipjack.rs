//! # SKIPJACK Private Wrap — Mechanism Parameters
//!
//! Parameter block for the SKIPJACK private-key wrap mechanism: wrapping
//! and unwrapping a private key under the KEA key-exchange scheme of the
//! legacy SKIPJACK cipher.
//!
//! ## Design
//!
//! - Six owned byte buffers. Presence is enforced once, at the builder.
//!   After that the fields are non-optional and absence is unrepresentable.
//!   Buffer *contents* are opaque here; the token decides cryptographic
//!   validity.
//! - Equality and hashing are structural over the byte contents of all
//!   six buffers.
//! - [`to_native()`](SkipjackPrivateWrapParams::to_native) produces a
//!   lifetime-bound record whose raw pointers the compiler keeps valid for
//!   as long as the record exists.
//! - `Debug` redacts the password. `Display` renders all six buffers as
//!   hex for diagnostics.

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::os::raw::c_void;

use p11_core::error::ParameterError;
use p11_core::hex::{hex_prefix, to_hex, INDENT};

use crate::native::{
    CK_MECHANISM_TYPE, CK_SKIPJACK_PRIVATE_WRAP_PARAMS, CK_ULONG, CKM_SKIPJACK_PRIVATE_WRAP,
};
use crate::params::MechanismParams;

/// Parameters for the SKIPJACK private-key wrap mechanism.
///
/// Carries the user-supplied password, the peer's key-exchange public
/// value, the locally generated random nonce Ra, and the big-endian
/// domain parameters p, g and q. All six buffers are always present.
///
/// `Clone` deep-copies every buffer; a clone shares no storage with the
/// original. If an instance is shared across threads, callers synchronize
/// or clone — the type itself carries no locking.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SkipjackPrivateWrapParams {
    password: Vec<u8>,
    public_data: Vec<u8>,
    random_a: Vec<u8>,
    prime_p: Vec<u8>,
    base_g: Vec<u8>,
    subprime_q: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl SkipjackPrivateWrapParams {
    /// Create a parameter block from six buffers.
    ///
    /// Ownership of each buffer transfers to the block. The signature
    /// requires every field, so there is no presence check to fail. Use
    /// [`builder()`](Self::builder) when fields arrive independently and
    /// may be missing.
    pub fn new(
        password: impl Into<Vec<u8>>,
        public_data: impl Into<Vec<u8>>,
        random_a: impl Into<Vec<u8>>,
        prime_p: impl Into<Vec<u8>>,
        base_g: impl Into<Vec<u8>>,
        subprime_q: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            password: password.into(),
            public_data: public_data.into(),
            random_a: random_a.into(),
            prime_p: prime_p.into(),
            base_g: base_g.into(),
            subprime_q: subprime_q.into(),
        }
    }

    /// Start assembling a parameter block field by field.
    pub fn builder() -> SkipjackPrivateWrapParamsBuilder {
        SkipjackPrivateWrapParamsBuilder::default()
    }
}

// ---------------------------------------------------------------------------
// Accessors and mutators
// ---------------------------------------------------------------------------

impl SkipjackPrivateWrapParams {
    /// The user-supplied password.
    pub fn password(&self) -> &[u8] {
        &self.password
    }

    /// The peer's key-exchange public value.
    pub fn public_data(&self) -> &[u8] {
        &self.public_data
    }

    /// The random Ra data.
    pub fn random_a(&self) -> &[u8] {
        &self.random_a
    }

    /// The prime p value, big-endian.
    pub fn prime_p(&self) -> &[u8] {
        &self.prime_p
    }

    /// The base g value, big-endian.
    pub fn base_g(&self) -> &[u8] {
        &self.base_g
    }

    /// The subprime q value, big-endian.
    pub fn subprime_q(&self) -> &[u8] {
        &self.subprime_q
    }

    /// Replace the password.
    pub fn set_password(&mut self, password: impl Into<Vec<u8>>) {
        self.password = password.into();
    }

    /// Replace the peer public value.
    pub fn set_public_data(&mut self, public_data: impl Into<Vec<u8>>) {
        self.public_data = public_data.into();
    }

    /// Replace the random Ra data.
    pub fn set_random_a(&mut self, random_a: impl Into<Vec<u8>>) {
        self.random_a = random_a.into();
    }

    /// Replace the prime p value.
    pub fn set_prime_p(&mut self, prime_p: impl Into<Vec<u8>>) {
        self.prime_p = prime_p.into();
    }

    /// Replace the base g value.
    pub fn set_base_g(&mut self, base_g: impl Into<Vec<u8>>) {
        self.base_g = base_g.into();
    }

    /// Replace the subprime q value.
    pub fn set_subprime_q(&mut self, subprime_q: impl Into<Vec<u8>>) {
        self.subprime_q = subprime_q.into();
    }
}

// ---------------------------------------------------------------------------
// Native record translation
// ---------------------------------------------------------------------------

impl SkipjackPrivateWrapParams {
    /// Bind the six buffers into the raw record the token interface
    /// consumes for this mechanism.
    ///
    /// The record borrows the buffers; it never owns them. The borrow on
    /// `self` keeps every pointer in the record valid for the record's
    /// lifetime; dropping or mutating the block while the record is alive
    /// is a compile error.
    pub fn to_native(&self) -> SkipjackPrivateWrapRecord<'_> {
        SkipjackPrivateWrapRecord {
            raw: CK_SKIPJACK_PRIVATE_WRAP_PARAMS {
                pPassword: self.password.as_ptr(),
                ulPasswordLen: self.password.len() as CK_ULONG,
                pPublicData: self.public_data.as_ptr(),
                ulPublicDataLen: self.public_data.len() as CK_ULONG,
                pRandomA: self.random_a.as_ptr(),
                ulRandomALen: self.random_a.len() as CK_ULONG,
                pPrimeP: self.prime_p.as_ptr(),
                ulPrimePLen: self.prime_p.len() as CK_ULONG,
                pBaseG: self.base_g.as_ptr(),
                ulBaseGLen: self.base_g.len() as CK_ULONG,
                pSubprimeQ: self.subprime_q.as_ptr(),
                ulSubprimeQLen: self.subprime_q.len() as CK_ULONG,
            },
            _params: PhantomData,
        }
    }
}

impl MechanismParams for SkipjackPrivateWrapParams {
    type Native<'a>
        = SkipjackPrivateWrapRecord<'a>
    where
        Self: 'a;

    const MECHANISM: CK_MECHANISM_TYPE = CKM_SKIPJACK_PRIVATE_WRAP;

    fn to_native(&self) -> SkipjackPrivateWrapRecord<'_> {
        SkipjackPrivateWrapParams::to_native(self)
    }
}

/// Borrowed native view of a [`SkipjackPrivateWrapParams`].
///
/// Holds the raw pointer/length record for the duration of a native call.
/// The lifetime ties the record to the parameter block that owns the
/// buffers its pointers reference.
pub struct SkipjackPrivateWrapRecord<'a> {
    raw: CK_SKIPJACK_PRIVATE_WRAP_PARAMS,
    _params: PhantomData<&'a SkipjackPrivateWrapParams>,
}

impl SkipjackPrivateWrapRecord<'_> {
    /// The raw record, for assembling the mechanism argument of a native
    /// call.
    pub fn as_raw(&self) -> &CK_SKIPJACK_PRIVATE_WRAP_PARAMS {
        &self.raw
    }

    /// Type-erased pointer to the record, as native calls take it.
    pub fn as_ptr(&self) -> *const c_void {
        &self.raw as *const CK_SKIPJACK_PRIVATE_WRAP_PARAMS as *const c_void
    }

    /// Byte length of the record, paired with [`as_ptr()`](Self::as_ptr).
    pub fn param_len(&self) -> CK_ULONG {
        mem::size_of::<CK_SKIPJACK_PRIVATE_WRAP_PARAMS>() as CK_ULONG
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`SkipjackPrivateWrapParams`].
///
/// The single place presence validation lives. Callers at the interop
/// boundary receive fields independently and in any order;
/// [`build()`](Self::build) rejects the first field that was never
/// supplied, checking in the fixed order password, public data, random Ra,
/// prime p, base g, subprime q.
///
/// Does not implement `Debug` — a half-assembled block may already hold
/// the password.
#[derive(Default, Clone)]
pub struct SkipjackPrivateWrapParamsBuilder {
    password: Option<Vec<u8>>,
    public_data: Option<Vec<u8>>,
    random_a: Option<Vec<u8>>,
    prime_p: Option<Vec<u8>>,
    base_g: Option<Vec<u8>>,
    subprime_q: Option<Vec<u8>>,
}

impl SkipjackPrivateWrapParamsBuilder {
    /// Supply the user password.
    pub fn password(mut self, password: impl Into<Vec<u8>>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Supply the peer public value.
    pub fn public_data(mut self, public_data: impl Into<Vec<u8>>) -> Self {
        self.public_data = Some(public_data.into());
        self
    }

    /// Supply the random Ra data.
    pub fn random_a(mut self, random_a: impl Into<Vec<u8>>) -> Self {
        self.random_a = Some(random_a.into());
        self
    }

    /// Supply the prime p value.
    pub fn prime_p(mut self, prime_p: impl Into<Vec<u8>>) -> Self {
        self.prime_p = Some(prime_p.into());
        self
    }

    /// Supply the base g value.
    pub fn base_g(mut self, base_g: impl Into<Vec<u8>>) -> Self {
        self.base_g = Some(base_g.into());
        self
    }

    /// Supply the subprime q value.
    pub fn subprime_q(mut self, subprime_q: impl Into<Vec<u8>>) -> Self {
        self.subprime_q = Some(subprime_q.into());
        self
    }

    /// Assemble the parameter block.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::MissingField`] naming the first field, in
    /// canonical order, that was never supplied. No partially assembled
    /// block escapes on failure.
    pub fn build(self) -> Result<SkipjackPrivateWrapParams, ParameterError> {
        Ok(SkipjackPrivateWrapParams {
            password: require(self.password, "password")?,
            public_data: require(self.public_data, "public_data")?,
            random_a: require(self.random_a, "random_a")?,
            prime_p: require(self.prime_p, "prime_p")?,
            base_g: require(self.base_g, "base_g")?,
            subprime_q: require(self.subprime_q, "subprime_q")?,
        })
    }
}

/// Presence precondition shared by every required field.
fn require(field: Option<Vec<u8>>, name: &'static str) -> Result<Vec<u8>, ParameterError> {
    field.ok_or(ParameterError::MissingField { field: name })
}

// ---------------------------------------------------------------------------
// Display and Debug
// ---------------------------------------------------------------------------

impl fmt::Display for SkipjackPrivateWrapParams {
    /// Fixed-order hex rendering of all six fields, for diagnostics only.
    /// Do not parse data from this output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{INDENT}Password (hex): {}", to_hex(&self.password))?;
        writeln!(f, "{INDENT}Public Data (hex): {}", to_hex(&self.public_data))?;
        writeln!(f, "{INDENT}Random Data A (hex): {}", to_hex(&self.random_a))?;
        writeln!(f, "{INDENT}Prime P (hex): {}", to_hex(&self.prime_p))?;
        writeln!(f, "{INDENT}Base G (hex): {}", to_hex(&self.base_g))?;
        write!(f, "{INDENT}Subprime Q (hex): {}", to_hex(&self.subprime_q))
    }
}

impl fmt::Debug for SkipjackPrivateWrapParams {
    /// Redacts the password and abbreviates the remaining buffers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipjackPrivateWrapParams")
            .field("password", &format_args!("<{} bytes>", self.password.len()))
            .field(
                "public_data",
                &format_args!("{}...", hex_prefix(&self.public_data)),
            )
            .field("random_a", &format_args!("{}...", hex_prefix(&self.random_a)))
            .field("prime_p", &format_args!("{}...", hex_prefix(&self.prime_p)))
            .field("base_g", &format_args!("{}...", hex_prefix(&self.base_g)))
            .field(
                "subprime_q",
                &format_args!("{}...", hex_prefix(&self.subprime_q)),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn sample() -> SkipjackPrivateWrapParams {
        SkipjackPrivateWrapParams::new(
            vec![0x01, 0x02],
            vec![0x03],
            vec![0x04, 0x05],
            vec![0x10],
            vec![0x11],
            vec![0x12],
        )
    }

    fn full_builder() -> SkipjackPrivateWrapParamsBuilder {
        SkipjackPrivateWrapParams::builder()
            .password(vec![0x01, 0x02])
            .public_data(vec![0x03])
            .random_a(vec![0x04, 0x05])
            .prime_p(vec![0x10])
            .base_g(vec![0x11])
            .subprime_q(vec![0x12])
    }

    fn hash_of(params: &SkipjackPrivateWrapParams) -> u64 {
        let mut hasher = DefaultHasher::new();
        params.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_builder_with_all_fields_builds() {
        let params = full_builder().build().expect("all fields supplied");
        assert_eq!(params, sample());
    }

    #[test]
    fn test_builder_missing_each_field_is_named() {
        let cases: [(&str, fn(&mut SkipjackPrivateWrapParamsBuilder)); 6] = [
            ("password", |b| b.password = None),
            ("public_data", |b| b.public_data = None),
            ("random_a", |b| b.random_a = None),
            ("prime_p", |b| b.prime_p = None),
            ("base_g", |b| b.base_g = None),
            ("subprime_q", |b| b.subprime_q = None),
        ];
        for (field, clear) in cases {
            let mut builder = full_builder();
            clear(&mut builder);
            let err = builder.build().expect_err("one field absent");
            assert_eq!(err, ParameterError::MissingField { field });
        }
    }

    #[test]
    fn test_builder_reports_earliest_missing_field() {
        // Everything absent: password comes first in canonical order.
        let err = SkipjackPrivateWrapParams::builder()
            .build()
            .expect_err("empty builder");
        assert_eq!(err.field(), "password");

        // random_a and base_g both absent: random_a is earlier.
        let mut builder = full_builder();
        builder.random_a = None;
        builder.base_g = None;
        let err = builder.build().expect_err("two fields absent");
        assert_eq!(err.field(), "random_a");
    }

    #[test]
    fn test_empty_buffers_are_present() {
        // Presence-only validation: empty is not absent.
        let params = SkipjackPrivateWrapParams::builder()
            .password(vec![])
            .public_data(vec![])
            .random_a(vec![])
            .prime_p(vec![])
            .base_g(vec![])
            .subprime_q(vec![])
            .build()
            .expect("empty buffers are valid");
        assert!(params.password().is_empty());
        assert!(params.prime_p().is_empty());
    }

    #[test]
    fn test_accessors_return_construction_buffers() {
        let params = sample();
        assert_eq!(params.password(), &[0x01, 0x02]);
        assert_eq!(params.public_data(), &[0x03]);
        assert_eq!(params.random_a(), &[0x04, 0x05]);
        assert_eq!(params.prime_p(), &[0x10]);
        assert_eq!(params.base_g(), &[0x11]);
        assert_eq!(params.subprime_q(), &[0x12]);
    }

    #[test]
    fn test_setters_replace_buffers() {
        let mut params = sample();
        params.set_password(vec![0xaa]);
        params.set_public_data(vec![0xbb]);
        params.set_random_a(vec![0xcc]);
        params.set_prime_p(vec![0xdd]);
        params.set_base_g(vec![0xee]);
        params.set_subprime_q(vec![0xff]);
        assert_eq!(params.password(), &[0xaa]);
        assert_eq!(params.public_data(), &[0xbb]);
        assert_eq!(params.random_a(), &[0xcc]);
        assert_eq!(params.prime_p(), &[0xdd]);
        assert_eq!(params.base_g(), &[0xee]);
        assert_eq!(params.subprime_q(), &[0xff]);
    }

    #[test]
    fn test_clone_equals_original() {
        let params = sample();
        assert_eq!(params.clone(), params);
    }

    #[test]
    fn test_clone_storage_is_independent() {
        let original = sample();
        let mut clone = original.clone();
        clone.set_prime_p(vec![0x77]);
        assert_eq!(original.prime_p(), &[0x10]);
        assert_ne!(original, clone);

        // And the other direction.
        let mut original = sample();
        let clone = original.clone();
        original.set_password(vec![0x99]);
        assert_eq!(clone.password(), &[0x01, 0x02]);
    }

    #[test]
    fn test_equal_content_means_equal_and_equal_hash() {
        let a = sample();
        let b = full_builder().build().unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_changing_any_single_field_breaks_equality() {
        let reference = sample();
        let mutations: [fn(&mut SkipjackPrivateWrapParams); 6] = [
            |p| p.set_password(vec![0x7f]),
            |p| p.set_public_data(vec![0x7f]),
            |p| p.set_random_a(vec![0x7f]),
            |p| p.set_prime_p(vec![0x7f]),
            |p| p.set_base_g(vec![0x7f]),
            |p| p.set_subprime_q(vec![0x7f]),
        ];
        for mutate in mutations {
            let mut changed = sample();
            mutate(&mut changed);
            assert_ne!(reference, changed);
        }
    }

    #[test]
    fn test_native_record_lengths_and_pointers() {
        let params = sample();
        let record = params.to_native();
        let raw = record.as_raw();

        assert_eq!(raw.pPassword, params.password().as_ptr());
        assert_eq!(raw.ulPasswordLen, 2);
        assert_eq!(raw.pPublicData, params.public_data().as_ptr());
        assert_eq!(raw.ulPublicDataLen, 1);
        assert_eq!(raw.pRandomA, params.random_a().as_ptr());
        assert_eq!(raw.ulRandomALen, 2);
        assert_eq!(raw.pPrimeP, params.prime_p().as_ptr());
        assert_eq!(raw.ulPrimePLen, 1);
        assert_eq!(raw.pBaseG, params.base_g().as_ptr());
        assert_eq!(raw.ulBaseGLen, 1);
        assert_eq!(raw.pSubprimeQ, params.subprime_q().as_ptr());
        assert_eq!(raw.ulSubprimeQLen, 1);
    }

    #[test]
    fn test_record_ptr_and_len_describe_the_record() {
        let params = sample();
        let record = params.to_native();
        assert_eq!(record.as_ptr(), record.as_raw() as *const _ as *const c_void);
        assert_eq!(
            record.param_len(),
            mem::size_of::<CK_SKIPJACK_PRIVATE_WRAP_PARAMS>() as CK_ULONG
        );
    }

    #[test]
    fn test_mechanism_code() {
        assert_eq!(
            <SkipjackPrivateWrapParams as MechanismParams>::MECHANISM,
            CKM_SKIPJACK_PRIVATE_WRAP
        );
    }

    #[test]
    fn test_display_renders_all_fields_in_order() {
        let rendered = sample().to_string();
        let expected = [
            "  Password (hex): 0102",
            "  Public Data (hex): 03",
            "  Random Data A (hex): 0405",
            "  Prime P (hex): 10",
            "  Base G (hex): 11",
            "  Subprime Q (hex): 12",
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", sample());
        assert!(debug.contains("<2 bytes>"));
        assert!(!debug.contains("0102"));
        assert!(debug.contains("public_data"));
    }
}
