use std::fmt;

/// A source location attached to every node: file ID + 1-based line/column.
///
/// A line of `-1` is the "unset" sentinel: the node has no location yet and
/// inherits one from context the first time a pass needs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Metadata {
    pub file_id: u16,
    pub line: i32,
    pub column: u32,
}

impl Metadata {
    pub const UNSET_LINE: i32 = -1;

    pub fn new(file_id: u16, line: i32, column: u32) -> Self {
        Self {
            file_id,
            line,
            column,
        }
    }

    pub fn unset() -> Self {
        Self {
            file_id: 0,
            line: Self::UNSET_LINE,
            column: 0,
        }
    }

    pub fn is_unset(&self) -> bool {
        self.line == Self::UNSET_LINE
    }

    /// Keep this location if it is set, otherwise take `fallback`.
    pub fn or(self, fallback: Metadata) -> Metadata {
        if self.is_unset() {
            fallback
        } else {
            self
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::unset()
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unset() {
            write!(f, "<unset>")
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_is_default() {
        assert!(Metadata::default().is_unset());
        assert!(!Metadata::new(0, 1, 1).is_unset());
    }

    #[test]
    fn test_or_keeps_real_location() {
        let real = Metadata::new(0, 4, 2);
        let fallback = Metadata::new(0, 9, 1);
        assert_eq!(real.or(fallback), real);
        assert_eq!(Metadata::unset().or(fallback), fallback);
    }

    #[test]
    fn test_display() {
        assert_eq!(Metadata::new(0, 3, 7).to_string(), "3:7");
        assert_eq!(Metadata::unset().to_string(), "<unset>");
    }
}
