use winnow::{ascii::digit1, error::ContextError, token::take_while, PResult, Parser};

/// A position over immutable input text.
///
/// Every read skips leading whitespace first and only moves the position forward when
/// the read succeeds, so a failed read never consumes anything.
#[derive(Debug)]
pub(crate) struct Cursor<'i> {
    text: &'i str,
    offset: usize,
}

/// A saved cursor position, see [`Cursor::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CursorState(usize);

impl<'i> Cursor<'i> {
    pub fn new(text: &'i str) -> Self {
        Self { text, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> &'i str {
        &self.text[self.offset..]
    }

    pub fn snapshot(&self) -> CursorState {
        CursorState(self.offset)
    }

    pub fn restore(&mut self, state: CursorState) {
        self.offset = state.0;
    }

    pub fn skip_whitespace(&mut self) {
        self.advance(whitespace);
    }

    pub fn is_exhausted(&mut self) -> bool {
        self.skip_whitespace();
        self.remaining().is_empty()
    }

    pub fn read_unsigned_int(&mut self) -> Option<u32> {
        self.skip_whitespace();
        self.advance(unsigned)
    }

    /// Reads an integer with an optional `+` or `-` in front of it.
    /// A sign that isn't followed by a number is given back.
    pub fn read_signed_int(&mut self) -> Option<i32> {
        self.skip_whitespace();
        let state = self.snapshot();

        let negative = if self.try_consume_literal("-") {
            true
        } else {
            self.try_consume_literal("+");
            false
        };

        let value = self
            .read_unsigned_int()
            .map(i64::from)
            .map(|n| if negative { -n } else { n })
            .and_then(|n| i32::try_from(n).ok());

        if value.is_none() {
            self.restore(state);
        }
        value
    }

    pub fn try_consume_literal(&mut self, token: &str) -> bool {
        self.skip_whitespace();
        self.advance(token).is_some()
    }

    fn advance<O>(&mut self, mut parser: impl Parser<&'i str, O, ContextError>) -> Option<O> {
        let mut input = self.remaining();
        let output = parser.parse_next(&mut input).ok()?;
        self.offset = self.text.len() - input.len();
        Some(output)
    }
}

fn whitespace<'i>(input: &mut &'i str) -> PResult<&'i str> {
    take_while(0.., char::is_whitespace).parse_next(input)
}

fn unsigned(input: &mut &str) -> PResult<u32> {
    digit1
        .try_map(|digits: &str| digits.parse::<u32>())
        .parse_next(input)
}
