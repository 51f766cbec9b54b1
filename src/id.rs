#[cfg(not(feature = "std"))]
use core as std;

use crate::Error;
use fstr::FStr;
use std::fmt;

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// The layout family of a UUID, encoded in the most significant bits of the eighth byte.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xxx`: reserved for NCS backward compatibility.
    Ncs,

    /// `10xx`: the variant specified by RFC 4122 and used by every UUID this crate generates.
    Rfc4122,

    /// `110x`: reserved for Microsoft backward compatibility.
    Microsoft,

    /// `111x`: reserved for future definition.
    Future,
}

impl Variant {
    /// Decoding order. NCS must come last as its one-bit mask is the loosest test.
    const DECODE_ORDER: [Self; 4] = [Self::Rfc4122, Self::Microsoft, Self::Future, Self::Ncs];

    /// Returns the `(mask, pattern)` pair of the variant bits.
    const fn bits(self) -> (u8, u8) {
        match self {
            Self::Ncs => (0x80, 0x00),
            Self::Rfc4122 => (0xc0, 0x80),
            Self::Microsoft => (0xe0, 0xc0),
            Self::Future => (0xe0, 0xe0),
        }
    }
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for X.500 distinguished names (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the underlying byte array.
    pub const fn to_bytes(&self) -> [u8; 16] {
        self.0
    }

    /// Creates an object from a byte slice that must be exactly 16 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Error, Uuid};
    ///
    /// let x = Uuid::from_slice(&[0xff; 16])?;
    /// assert_eq!(x, Uuid::MAX);
    /// assert_eq!(Uuid::from_slice(&[0xff; 15]), Err(Error::InvalidLength { len: 15 }));
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self, Error> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| Error::InvalidLength { len: src.len() })
    }

    /// Creates a UUID byte array from UUIDv1 field values.
    ///
    /// `ticks` is the 60-bit count of 100-nanosecond intervals since 1582-10-15 00:00:00 UTC,
    /// `clock_seq` the 14-bit clock sequence, and `node` the 48-bit node identifier.
    ///
    /// # Panics
    ///
    /// Panics if `ticks` or `clock_seq` does not fit in its field.
    pub const fn from_fields_v1(ticks: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if ticks >= 1 << 60 || clock_seq >= 1 << 14 {
            panic!("invalid field value");
        }

        Self([
            (ticks >> 24) as u8,
            (ticks >> 16) as u8,
            (ticks >> 8) as u8,
            ticks as u8,
            (ticks >> 40) as u8,
            (ticks >> 32) as u8,
            0x10 | (ticks >> 56) as u8,
            (ticks >> 48) as u8,
            0x80 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Returns `true` if this is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Returns the variant field value.
    pub const fn variant(&self) -> Variant {
        let mut i = 0;
        while i < Variant::DECODE_ORDER.len() {
            let (mask, pattern) = Variant::DECODE_ORDER[i].bits();
            if self.0[8] & mask == pattern {
                return Variant::DECODE_ORDER[i];
            }
            i += 1;
        }
        Variant::Ncs
    }

    /// Returns a copy of this UUID with the variant bits replaced.
    ///
    /// Only the bits the variant occupies are overwritten: one for NCS, two for RFC 4122, and
    /// three for the Microsoft and future variants.
    pub const fn with_variant(mut self, variant: Variant) -> Self {
        let (mask, pattern) = variant.bits();
        self.0[8] = (self.0[8] & !mask) | pattern;
        self
    }

    /// Returns the version field value (0-15).
    ///
    /// The value is meaningful only for the RFC 4122 variant.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns a copy of this UUID with the version nibble replaced by the lower four bits of
    /// `version`.
    pub const fn with_version(mut self, version: u8) -> Self {
        self.0[6] = (self.0[6] & 0x0f) | (version << 4);
        self
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x = "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for i in 0..16 {
            let e = self.0[i] as usize;
            *buf_iter.next().unwrap() = DIGITS[e >> 4];
            *buf_iter.next().unwrap() = DIGITS[e & 15];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: ok because buffer consists of ASCII bytes
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Error, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = Error;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Self::Value::parse(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [([u8; 16], &'static str)] {
        &[
            ([0x00; 16], "00000000-0000-0000-0000-000000000000"),
            ([0xff; 16], "ffffffff-ffff-ffff-ffff-ffffffffffff"),
            (
                [
                    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f,
                    0xd4, 0x30, 0xc8,
                ],
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            ),
            (
                [
                    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76,
                    0x54, 0x32, 0x10,
                ],
                "01234567-89ab-cdef-fedc-ba9876543210",
            ),
        ]
    }

    /// Encodes prepared cases correctly
    #[test]
    fn encodes_prepared_cases_correctly() {
        for (bytes, text) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(&e.encode() as &str, *text);
            #[cfg(feature = "std")]
            assert_eq!(&e.to_string(), text);
            #[cfg(feature = "std")]
            assert_eq!(&String::from(e), text);
        }
    }

    /// Encodes arbitrary bytes in canonical form
    #[cfg(feature = "std")]
    #[test]
    fn encodes_arbitrary_bytes_in_canonical_form() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        for _ in 0..10_000 {
            let e = Uuid::from(rand::random::<[u8; 16]>());
            assert!(re.is_match(&e.encode()));
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert!(Uuid::NIL.is_nil());
        assert!(!Uuid::MAX.is_nil());
        assert_eq!(Uuid::default(), Uuid::NIL);
    }

    /// Returns predefined namespaces
    #[test]
    fn returns_predefined_namespaces() {
        let cases = [
            (Uuid::NAMESPACE_DNS, "6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            (Uuid::NAMESPACE_URL, "6ba7b811-9dad-11d1-80b4-00c04fd430c8"),
            (Uuid::NAMESPACE_OID, "6ba7b812-9dad-11d1-80b4-00c04fd430c8"),
            (Uuid::NAMESPACE_X500, "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
        ];

        for (e, text) in cases {
            assert_eq!(&e.encode() as &str, text);
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), 1);
            assert_eq!(Uuid::from(uuid::Uuid::parse_str(text).unwrap().into_bytes()), e);
        }
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (bytes, _) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::from_slice(e.as_bytes()), Ok(e));
            assert_eq!(Uuid::try_from(&e.to_bytes()[..]), Ok(e));
            assert_eq!(Uuid::from_slice(&e.to_bytes()).map(|x| x.to_bytes()), Ok(*bytes));
            assert_eq!(e.as_ref(), &bytes[..]);
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(uuid::Uuid::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }

    /// Returns copies that do not alias the original
    #[test]
    fn returns_copies_that_do_not_alias_the_original() {
        let e = Uuid::NAMESPACE_OID;
        let mut bytes = e.to_bytes();
        bytes[0] = 0;
        assert_eq!(e, Uuid::NAMESPACE_OID);
        assert_ne!(Uuid::from(bytes), e);
    }

    /// Returns error to byte slices of wrong length
    #[test]
    fn returns_error_to_byte_slices_of_wrong_length() {
        use crate::Error;

        for len in [0, 1, 15, 17, 32] {
            let src = [0xa5u8; 32];
            assert_eq!(
                Uuid::from_slice(&src[..len]),
                Err(Error::InvalidLength { len })
            );
        }
    }

    /// Reads variant by priority order
    #[test]
    fn reads_variant_by_priority_order() {
        for b in 0..=255u8 {
            let mut bytes = [0u8; 16];
            bytes[8] = b;
            let expected = match b {
                0x00..=0x7f => Variant::Ncs,
                0x80..=0xbf => Variant::Rfc4122,
                0xc0..=0xdf => Variant::Microsoft,
                0xe0..=0xff => Variant::Future,
            };
            assert_eq!(Uuid::from(bytes).variant(), expected, "byte 8: {:#04x}", b);
        }
    }

    /// Sets and gets every variant regardless of prior value
    #[test]
    fn sets_and_gets_every_variant_regardless_of_prior_value() {
        let variants = [
            Variant::Ncs,
            Variant::Rfc4122,
            Variant::Microsoft,
            Variant::Future,
        ];
        for v in variants {
            for b in 0..=255u8 {
                let mut bytes = [0x5au8; 16];
                bytes[8] = b;
                let e = Uuid::from(bytes).with_variant(v);
                assert_eq!(e.variant(), v, "byte 8: {:#04x}", b);
                assert_eq!(e.as_bytes()[..8], bytes[..8]);
                assert_eq!(e.as_bytes()[9..], bytes[9..]);
            }
        }
    }

    /// Preserves bits outside variant field
    #[test]
    fn preserves_bits_outside_variant_field() {
        let e = Uuid::from([0xff; 16]);
        assert_eq!(e.with_variant(Variant::Ncs).as_bytes()[8], 0x7f);
        assert_eq!(e.with_variant(Variant::Rfc4122).as_bytes()[8], 0xbf);
        assert_eq!(e.with_variant(Variant::Microsoft).as_bytes()[8], 0xdf);
        assert_eq!(e.with_variant(Variant::Future).as_bytes()[8], 0xff);

        let e = Uuid::NIL;
        assert_eq!(e.with_variant(Variant::Ncs).as_bytes()[8], 0x00);
        assert_eq!(e.with_variant(Variant::Rfc4122).as_bytes()[8], 0x80);
        assert_eq!(e.with_variant(Variant::Microsoft).as_bytes()[8], 0xc0);
        assert_eq!(e.with_variant(Variant::Future).as_bytes()[8], 0xe0);
    }

    /// Sets and gets every version regardless of prior value
    #[test]
    fn sets_and_gets_every_version_regardless_of_prior_value() {
        for v in 0..16u8 {
            for b in 0..=255u8 {
                let mut bytes = [0xa5u8; 16];
                bytes[6] = b;
                let e = Uuid::from(bytes).with_version(v);
                assert_eq!(e.version(), v);
                assert_eq!(e.as_bytes()[6] & 0x0f, b & 0x0f);
            }
        }
    }

    /// Encodes UUIDv1 fields correctly
    #[test]
    fn encodes_uuidv1_fields_correctly() {
        let node = [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8];
        assert_eq!(
            Uuid::from_fields_v1(0x01d1_9dad_6ba7_b810, 0x00b4, node),
            Uuid::NAMESPACE_DNS
        );
        assert_eq!(
            &Uuid::from_fields_v1(0, 0, [0; 6]).encode() as &str,
            "00000000-0000-1000-8000-000000000000"
        );
        assert_eq!(
            &Uuid::from_fields_v1((1 << 60) - 1, (1 << 14) - 1, [0xff; 6]).encode() as &str,
            "ffffffff-ffff-1fff-bfff-ffffffffffff"
        );
    }

    /// Panics on out-of-range UUIDv1 fields
    #[test]
    #[should_panic(expected = "invalid field value")]
    fn panics_on_out_of_range_uuidv1_fields() {
        Uuid::from_fields_v1(1 << 60, 0, [0; 6]);
    }
}
