//! Random and time-based UUID generator and related types.

use crate::{Error, Uuid, Variant};

pub mod with_rand08;


/// Number of 100-nanosecond intervals between the Gregorian calendar reform (1582-10-15) and the
/// Unix epoch.
#[cfg(feature = "std")]
const GREGORIAN_TO_UNIX_TICKS: u64 = 0x01b2_1dd2_1381_4000;

/// A trait that defines the minimum random number generator interface for [`Generator`].
pub trait RandSource {
    /// Fills `dest` with random data, or returns [`Error::EntropyUnavailable`] if the source
    /// cannot supply it.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

/// Represents a generator of random (version 4) and time-based (version 1) UUIDs.
///
/// The generator keeps no state other than its random number source: every UUIDv1 gets a fresh
/// random clock sequence and a random node identifier (with the multicast bit set as RFC 4122
/// section 4.5 requires), so nothing needs to be persisted across calls or restarts.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use rfc4122::Generator;
///
/// let mut g = Generator::with_rand08(OsRng);
/// println!("{}", g.generate_v4()?);
/// println!("{}", g.generate_v1()?);
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`] if the random number source fails.
    pub fn generate_v4(&mut self) -> Result<Uuid, Error> {
        let mut bytes = [0u8; 16];
        self.rng.try_fill_bytes(&mut bytes)?;
        Ok(Uuid::from(bytes)
            .with_variant(Variant::Rfc4122)
            .with_version(4))
    }

    /// Generates a new UUIDv1 object from the current system time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`] if the random number source fails.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn generate_v1(&mut self) -> Result<Uuid, Error> {
        use std::time;
        let since_unix_epoch = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards");
        self.generate_v1_core((since_unix_epoch.as_nanos() / 100) as u64 + GREGORIAN_TO_UNIX_TICKS)
    }

    /// Generates a new UUIDv1 object from the `ticks` passed, a count of 100-nanosecond intervals
    /// since 1582-10-15 00:00:00 UTC.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`] if the random number source fails.
    ///
    /// # Panics
    ///
    /// Panics if `ticks` is not a 60-bit unsigned integer.
    pub fn generate_v1_core(&mut self, ticks: u64) -> Result<Uuid, Error> {
        assert!(ticks < 1 << 60, "`ticks` must be a 60-bit unsigned integer");

        let mut bytes = [0u8; 8];
        self.rng.try_fill_bytes(&mut bytes)?;
        let clock_seq = u16::from_be_bytes([bytes[0], bytes[1]]) & 0x3fff;
        let mut node = [0u8; 6];
        node.copy_from_slice(&bytes[2..]);
        node[0] |= 0x01; // multicast bit

        Ok(Uuid::from_fields_v1(ticks, clock_seq, node))
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object, or the error of
/// the random number source, for each call of `next()`.
///
/// # Examples
///
/// ```rust
/// use rfc4122::Generator;
///
/// Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e.unwrap()));
/// ```
impl<R: RandSource> Iterator for Generator<R> {
    type Item = Result<Uuid, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_v4())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource> std::iter::FusedIterator for Generator<R> {}
