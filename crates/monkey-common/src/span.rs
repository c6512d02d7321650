//! Source code span and position tracking.
//! 源码范围和位置跟踪。

use std::fmt;

/// A byte position in source code.
/// 源码中的字节位置。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BytePos(pub u32);

impl BytePos {
    pub const ZERO: BytePos = BytePos(0);
}

impl fmt::Debug for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytePos({})", self.0)
    }
}

/// Offsets past `u32::MAX` saturate, so a span never ends before it starts.
/// 超过 `u32::MAX` 的偏移会饱和，保证范围的结束不早于开始。
impl From<usize> for BytePos {
    fn from(pos: usize) -> Self {
        BytePos(u32::try_from(pos).unwrap_or(u32::MAX))
    }
}

impl From<BytePos> for usize {
    fn from(pos: BytePos) -> Self {
        pos.0 as usize
    }
}

/// A half-open byte range `start..end` in source code.
/// 源码中的半开字节区间 `start..end`。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start position. / 起始位置。
    pub start: BytePos,
    /// End position (exclusive). / 结束位置（不包含）。
    pub end: BytePos,
}

impl Span {
    pub const DUMMY: Span = Span {
        start: BytePos::ZERO,
        end: BytePos::ZERO,
    };

    pub fn from_usize(start: usize, end: usize) -> Self {
        Span {
            start: BytePos::from(start),
            end: BytePos::from(end),
        }
    }

    /// An empty span sitting at `pos`, used for end of input.
    /// 位于 `pos` 的空范围，用于输入结束。
    pub fn point(pos: usize) -> Self {
        Span::from_usize(pos, pos)
    }

    /// Returns the length of this span in bytes.
    /// 返回此范围的字节长度。
    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize
    }

    /// Returns true if this span has zero length.
    /// 如果此范围长度为零则返回 true。
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the byte range for this span.
    /// 返回此范围对应的字节区间。
    pub fn range(&self) -> std::ops::Range<usize> {
        usize::from(self.start)..usize::from(self.end)
    }

    /// Slices `source` by this span, or `None` if the range is out of
    /// bounds or splits a UTF-8 sequence.
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.range())
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_empty() {
        let span = Span::point(7);
        assert!(span.is_empty());
        assert_eq!(span.range(), 7..7);
    }

    #[test]
    fn test_text_slices_source() {
        let source = "let five = 5;";
        assert_eq!(Span::from_usize(4, 8).text(source), Some("five"));
        assert_eq!(Span::from_usize(10, 40).text(source), None);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_large_offsets_saturate() {
        let max = u32::MAX as usize;
        let span = Span::from_usize(max, max + 1);
        assert!(span.start <= span.end);
        assert_eq!(span.range(), max..max);
        assert_eq!(BytePos::from(max + 10), BytePos(u32::MAX));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Span::from_usize(2, 4)), "2..4");
        assert_eq!(format!("{:?}", BytePos(3)), "BytePos(3)");
    }
}
