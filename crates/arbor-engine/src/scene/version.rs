/// Monotonic write counter used as a cache-invalidation token.
///
/// Every mutation of the owning value bumps its counter, so a consumer that
/// remembers the last version it read can detect "changed since I last
/// looked" with a single compare. Unlike a boolean dirty flag there is
/// nothing to clear, so correctness does not depend on who resets the flag
/// when.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Version(u64);

impl Version {
    pub const ZERO: Version = Version(0);

    /// Advances to the next version.
    #[inline]
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Version::default(), Version::ZERO);
    }

    #[test]
    fn bump_changes_equality() {
        let before = Version::default();
        let mut v = before;
        v.bump();
        assert_ne!(v, before);
        v.bump();
        assert_ne!(v, before);
    }
}
