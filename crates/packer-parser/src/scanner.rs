//! Byte scanner for the item list grammar.
//!
//! ```text
//! items   := (' ' token)+
//! token   := '(' digits ',' decimal ',' '€' decimal ')'
//! decimal := digits ('.' digit digit?)?
//! ```

/// The three numerals of one item token, exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawToken<'a> {
    pub index: &'a str,
    pub weight: &'a str,
    pub cost: &'a str,
}

/// A cursor over a string slice that only ever moves forward.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner { input, position: 0 }
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position == self.input.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn eat(&mut self, expected: &str) -> Option<()> {
        if self.rest().starts_with(expected) {
            self.position += expected.len();
            Some(())
        } else {
            None
        }
    }

    fn digits(&mut self) -> Option<&'a str> {
        let start = self.position;
        let len = self
            .rest()
            .bytes()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        if len == 0 {
            return None;
        }
        self.position += len;
        Some(&self.input[start..self.position])
    }

    /// Scans `digits ('.' digit digit?)?`.
    ///
    /// A dot must be followed by one or two digits; a third fractional digit
    /// is left unread so the caller fails on it.
    pub fn decimal(&mut self) -> Option<&'a str> {
        let start = self.position;
        self.digits()?;
        if self.eat(".").is_some() {
            let fraction = self
                .rest()
                .bytes()
                .take(2)
                .take_while(|byte| byte.is_ascii_digit())
                .count();
            if fraction == 0 {
                return None;
            }
            self.position += fraction;
        }
        Some(&self.input[start..self.position])
    }

    /// Scans one `' ' token`, leaving the cursor where scanning failed.
    pub fn item_token(&mut self) -> Option<RawToken<'a>> {
        self.eat(" ")?;
        self.eat("(")?;
        let index = self.digits()?;
        self.eat(",")?;
        let weight = self.decimal()?;
        self.eat(",")?;
        self.eat("€")?;
        let cost = self.decimal()?;
        self.eat(")")?;
        Some(RawToken {
            index,
            weight,
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        let mut scanner = Scanner::new("53.38");
        assert_eq!(scanner.decimal(), Some("53.38"));
        assert!(scanner.is_at_end());

        let mut scanner = Scanner::new("15.3)");
        assert_eq!(scanner.decimal(), Some("15.3"));
        assert_eq!(scanner.position(), 4);

        let mut scanner = Scanner::new("7");
        assert_eq!(scanner.decimal(), Some("7"));
    }

    #[test]
    fn test_decimal_rejects_malformed() {
        assert_eq!(Scanner::new("").decimal(), None);
        assert_eq!(Scanner::new(".5").decimal(), None);
        assert_eq!(Scanner::new("5.").decimal(), None);
        assert_eq!(Scanner::new("-5").decimal(), None);

        // The third fractional digit stays unread.
        let mut scanner = Scanner::new("1.005");
        assert_eq!(scanner.decimal(), Some("1.00"));
        assert!(!scanner.is_at_end());
    }

    #[test]
    fn test_item_token() {
        let mut scanner = Scanner::new(" (1,53.38,€45) (2,88.62,€98)");
        assert_eq!(
            scanner.item_token(),
            Some(RawToken {
                index: "1",
                weight: "53.38",
                cost: "45"
            })
        );
        assert_eq!(
            scanner.item_token(),
            Some(RawToken {
                index: "2",
                weight: "88.62",
                cost: "98"
            })
        );
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_item_token_failure_position() {
        let mut scanner = Scanner::new(" (1,10,5)");
        assert_eq!(scanner.item_token(), None);
        assert_eq!(scanner.position(), 7);

        let mut scanner = Scanner::new("(1,10,€5)");
        assert_eq!(scanner.item_token(), None);
        assert_eq!(scanner.position(), 0);
    }
}
