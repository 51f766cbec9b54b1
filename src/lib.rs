//! Generator and parser of RFC 4122 Universally Unique IDentifiers
//!
//! ```rust
//! use rfc4122::{Uuid, Variant};
//!
//! let uuid = rfc4122::uuid4()?;
//! println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! assert_eq!(uuid.version(), 4);
//! assert_eq!(uuid.variant(), Variant::Rfc4122);
//!
//! let uuid = rfc4122::uuid5(&Uuid::NAMESPACE_DNS, "python.org");
//! assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//!
//! let parsed: Uuid = "urn:uuid:886313e1-3b8a-5372-9b90-0c9aee199e5d".parse()?;
//! assert_eq!(parsed, uuid);
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! A UUID is a 16-byte big-endian value with the following layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |     time_hi           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|   clock_seq               |         node (0-1)            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field holds the version: `0001` for time-based UUIDs, `0011` for MD5
//!   name-based, `0100` for random, and `0101` for SHA-1 name-based UUIDs.
//! - The `var` field holds the variant, `10` for every UUID this library generates. Other
//!   variants occupy one to three bits and are recognized by [`Uuid::variant()`].
//! - For version 1, the 60-bit timestamp counts 100-nanosecond intervals since 1582-10-15, the
//!   14-bit `clock_seq` is random for each UUID, and the 48-bit `node` is random with its
//!   multicast bit set. For the other versions, the remaining 122 bits are random or taken from
//!   the hash digest.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables the entry point functions [`uuid4()`] and [`uuid1()`] backed by the operating
//!   system's random number source, [`Generator::generate_v1()`], and the integration with
//!   `std::error::Error`. Without `std`, this crate is `no_std` and the random number source has
//!   to be supplied through [`Generator`].
//!
//! Optional features:
//!
//! - `serde` enables the serialization and deserialization of [`Uuid`] objects. Human-readable
//!   formats such as JSON use the canonical string.
//! - `uuid` enables the conversion from and to `uuid::Uuid`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::Error;

mod id;
pub use id::{Uuid, Variant};

mod parse;

mod name;
pub use name::HashAlgorithm;

pub mod generator;
pub use generator::{Generator, RandSource};

mod entry;
pub use entry::{uuid3, uuid5};

#[cfg(feature = "std")]
pub use entry::{uuid1, uuid4};
