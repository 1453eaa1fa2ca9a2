use std::fmt;

/// The value shown on the counter button.
///
/// Starts at zero and only ever moves up by one. It is owned by the page
/// that renders it, so a fresh mount always starts over.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count {
    value: u32,
}

impl Count {
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Adds one, holding at `u32::MAX` instead of wrapping.
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "count: {}", self.value)
    }
}

impl From<Count> for u32 {
    fn from(count: Count) -> Self {
        count.value
    }
}
