//! Dot-delimited chunks with lookahead.

/// Cursor over the dot-delimited chunks of a text.
///
/// Iterating consumes chunks in order; [`ChunkCursor::peek`] looks ahead
/// without consuming.
///
/// # Examples
/// ```
/// use lagasafn_annotator::segmentation::ChunkCursor;
///
/// let mut chunks = ChunkCursor::new("3. mgr. 4");
/// assert_eq!(chunks.next(), Some("3"));
/// assert_eq!(chunks.peek(1), Some(" mgr"));
/// assert_eq!(chunks.peek(2), Some(" 4"));
/// assert_eq!(chunks.peek(3), None);
/// ```
#[derive(Debug, Clone)]
pub struct ChunkCursor<'a> {
    chunks: Vec<&'a str>,
    position: usize,
}

impl<'a> ChunkCursor<'a> {
    /// Split `text` on every dot.
    ///
    /// A text ending in a dot yields a trailing empty chunk, as do
    /// consecutive dots.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            chunks: text.split('.').collect(),
            position: 0,
        }
    }

    /// Look `n` chunks ahead of the last one consumed.
    ///
    /// `peek(1)` is the chunk the next call to `next` returns. `peek(0)` is
    /// always `None`.
    #[must_use]
    pub fn peek(&self, n: usize) -> Option<&'a str> {
        if n == 0 {
            return None;
        }
        self.chunks.get(self.position + n - 1).copied()
    }
}

impl<'a> Iterator for ChunkCursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.get(self.position).copied()?;
        self.position += 1;
        Some(chunk)
    }
}
