use std::fmt;

/// Summary of the unique packages below a root
///
/// `total` is derived, so `total == internal + external` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    internal: usize,
    external: usize,
    testing: usize,
}

impl Summary {
    pub fn new(internal: usize, external: usize, testing: usize) -> Self {
        Self {
            internal,
            external,
            testing,
        }
    }

    pub(crate) fn record(&mut self, internal: bool, test: bool) {
        if internal {
            self.internal += 1;
        } else {
            self.external += 1;
        }
        if test {
            self.testing += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.internal + self.external
    }

    pub fn internal(&self) -> usize {
        self.internal
    }

    pub fn external(&self) -> usize {
        self.external
    }

    pub fn testing(&self) -> usize {
        self.testing
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} dependencies ({} internal, {} external, {} testing).",
            self.total(),
            self.internal,
            self.external,
            self.testing
        )
    }
}
