/// A cursor for unit-by-unit scanning of a UTF-16 buffer.
///
/// Positions are absolute offsets into the scanned slice.
#[derive(Clone)]
pub struct Cursor<'a> {
    units: &'a [u16],
    i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `units`.
    pub fn new(units: &'a [u16]) -> Self {
        Self { units, i: 0 }
    }

    /// Returns the current offset.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Peeks at the current unit without advancing.
    pub fn peek(&self) -> Option<u16> {
        self.units.get(self.i).copied()
    }

    /// Peeks `n` units ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u16> {
        self.units.get(self.i + n).copied()
    }

    /// Advances by one unit, returning the consumed unit.
    pub fn bump(&mut self) -> Option<u16> {
        let u = self.peek()?;
        self.i += 1;
        Some(u)
    }

    /// Advances by `n` units, stopping at end of input.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.units.len());
    }

    /// Advances while `pred` holds and returns the number of units consumed.
    pub fn bump_while(&mut self, pred: impl Fn(u16) -> bool) -> usize {
        let start = self.i;
        while let Some(u) = self.peek() {
            if !pred(u) {
                break;
            }
            self.i += 1;
        }
        self.i - start
    }

    /// Returns the first unit at or after the current position that does not
    /// satisfy `skip`, without advancing.
    pub fn peek_past(&self, skip: impl Fn(u16) -> bool) -> Option<u16> {
        self.units[self.i.min(self.units.len())..]
            .iter()
            .copied()
            .find(|&u| !skip(u))
    }

    /// Everything already consumed.
    pub fn before(&self) -> &'a [u16] {
        &self.units[..self.i.min(self.units.len())]
    }

    /// The units in `[start, end)`, clamped to the input.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u16] {
        let end = end.min(self.units.len());
        &self.units[start.min(end)..end]
    }
}
