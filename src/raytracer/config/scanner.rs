use crate::raytracer::config::error::{SceneError, SceneResult, SyntaxError};
use glam::DVec3;
use std::io::{BufReader, Bytes, Read};

/// Longest string literal the scene format accepts, in bytes.
pub const MAX_STRING_LEN: usize = 128;

/// Byte-level cursor over a scene document.
///
/// Keeps a single byte of lookahead and the 1-based number of the line the
/// cursor is on. Every read that runs out of input fails with
/// [`SceneError::UnexpectedEof`], since a document only ends at its closing
/// bracket.
pub struct Scanner<R: Read> {
    bytes: Bytes<BufReader<R>>,
    pushback: Option<u8>,
    line: usize,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner {
            bytes: BufReader::new(reader).bytes(),
            pushback: None,
            line: 1,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_char(&mut self) -> SceneResult<u8> {
        let c = match self.pushback.take() {
            Some(c) => c,
            None => match self.bytes.next() {
                Some(Ok(c)) => c,
                Some(Err(e)) => return Err(SceneError::Io(e)),
                None => return Err(SceneError::UnexpectedEof { line: self.line }),
            },
        };
        if c == b'\n' {
            self.line += 1;
        }
        Ok(c)
    }

    /// Returns `c` to the stream so the next read yields it again.
    fn unread(&mut self, c: u8) {
        debug_assert!(self.pushback.is_none(), "only one byte of lookahead");
        if c == b'\n' {
            self.line -= 1;
        }
        self.pushback = Some(c);
    }

    pub fn peek_char(&mut self) -> SceneResult<u8> {
        let c = self.next_char()?;
        self.unread(c);
        Ok(c)
    }

    pub fn expect_char(&mut self, expected: u8) -> SceneResult<()> {
        let c = self.next_char()?;
        if c == expected {
            Ok(())
        } else {
            Err(self.syntax(SyntaxError::Expected(expected as char)))
        }
    }

    pub fn skip_whitespace(&mut self) -> SceneResult<()> {
        loop {
            let c = self.next_char()?;
            if !is_space(c) {
                self.unread(c);
                return Ok(());
            }
        }
    }

    pub fn read_string(&mut self) -> SceneResult<String> {
        if self.next_char()? != b'"' {
            return Err(self.syntax(SyntaxError::ExpectedString));
        }
        let mut buffer = String::new();
        loop {
            let c = self.next_char()?;
            match c {
                b'"' => return Ok(buffer),
                b'\\' => return Err(self.syntax(SyntaxError::EscapeSequence)),
                0x20..=0x7e if buffer.len() >= MAX_STRING_LEN => {
                    return Err(self.syntax(SyntaxError::StringTooLong))
                }
                0x20..=0x7e => buffer.push(c as char),
                _ => return Err(self.syntax(SyntaxError::NonAscii)),
            }
        }
    }

    /// Reads a decimal floating-point literal such as `12`, `-0.5` or `1e-3`.
    pub fn read_number(&mut self) -> SceneResult<f64> {
        let line = self.line;
        let mut text = String::new();
        let mut mantissa_digits = 0;

        let mut c = self.next_char()?;
        if c == b'+' || c == b'-' {
            text.push(c as char);
            c = self.next_char()?;
        }
        while c.is_ascii_digit() {
            text.push(c as char);
            mantissa_digits += 1;
            c = self.next_char()?;
        }
        if c == b'.' {
            text.push('.');
            c = self.next_char()?;
            while c.is_ascii_digit() {
                text.push(c as char);
                mantissa_digits += 1;
                c = self.next_char()?;
            }
        }
        if mantissa_digits > 0 && (c == b'e' || c == b'E') {
            text.push('e');
            c = self.next_char()?;
            if c == b'+' || c == b'-' {
                text.push(c as char);
                c = self.next_char()?;
            }
            while c.is_ascii_digit() {
                text.push(c as char);
                c = self.next_char()?;
            }
        }
        self.unread(c);

        if mantissa_digits == 0 {
            if text.is_empty() && (33..=126).contains(&c) {
                text.push(c as char);
            }
            return Err(SceneError::Syntax {
                kind: SyntaxError::InvalidNumber(text),
                line,
            });
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(SceneError::Syntax {
                kind: SyntaxError::InvalidNumber(text),
                line,
            }),
        }
    }

    pub fn read_vector3(&mut self) -> SceneResult<DVec3> {
        self.expect_char(b'[')?;
        self.skip_whitespace()?;
        let x = self.read_number()?;
        self.skip_whitespace()?;
        self.expect_char(b',')?;
        self.skip_whitespace()?;
        let y = self.read_number()?;
        self.skip_whitespace()?;
        self.expect_char(b',')?;
        self.skip_whitespace()?;
        let z = self.read_number()?;
        self.skip_whitespace()?;
        self.expect_char(b']')?;
        Ok(DVec3::new(x, y, z))
    }

    pub(crate) fn syntax(&self, kind: SyntaxError) -> SceneError {
        SceneError::Syntax {
            kind,
            line: self.line,
        }
    }
}

// Same set as C's isspace in the "C" locale.
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(input: &str) -> Scanner<&[u8]> {
        Scanner::new(input.as_bytes())
    }

    #[test]
    fn test_next_char_counts_lines() {
        let mut s = scanner("a\nb\n");
        assert_eq!(s.next_char().unwrap(), b'a');
        assert_eq!(s.line(), 1);
        assert_eq!(s.next_char().unwrap(), b'\n');
        assert_eq!(s.line(), 2);
        s.next_char().unwrap();
        s.next_char().unwrap();
        assert_eq!(s.line(), 3);
        assert!(matches!(
            s.next_char(),
            Err(SceneError::UnexpectedEof { line: 3 })
        ));
    }

    #[test]
    fn test_expect_char() {
        let mut s = scanner("[x");
        assert!(s.expect_char(b'[').is_ok());
        match s.expect_char(b']') {
            Err(SceneError::Syntax { kind, line }) => {
                assert_eq!(kind, SyntaxError::Expected(']'));
                assert_eq!(line, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_skip_whitespace_keeps_first_token() {
        let mut s = scanner(" \t\r\n\n  {");
        s.skip_whitespace().unwrap();
        assert_eq!(s.line(), 3);
        assert_eq!(s.next_char().unwrap(), b'{');
    }

    #[test]
    fn test_skip_whitespace_at_eof() {
        let mut s = scanner("   ");
        assert!(matches!(
            s.skip_whitespace(),
            Err(SceneError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_peek_char_does_not_consume() {
        let mut s = scanner("\nx");
        assert_eq!(s.peek_char().unwrap(), b'\n');
        assert_eq!(s.line(), 1);
        assert_eq!(s.next_char().unwrap(), b'\n');
        assert_eq!(s.line(), 2);
    }

    #[test]
    fn test_read_string() {
        let mut s = scanner("\"sphere\" rest");
        assert_eq!(s.read_string().unwrap(), "sphere");
        assert_eq!(s.next_char().unwrap(), b' ');
    }

    #[test]
    fn test_read_string_empty() {
        assert_eq!(scanner("\"\"").read_string().unwrap(), "");
    }

    #[test]
    fn test_read_string_errors() {
        let kind = |input: &str| match scanner(input).read_string() {
            Err(SceneError::Syntax { kind, .. }) => kind,
            other => panic!("unexpected result: {other:?}"),
        };
        assert_eq!(kind("type\""), SyntaxError::ExpectedString);
        assert_eq!(kind("\"a\\nb\""), SyntaxError::EscapeSequence);
        assert_eq!(kind("\"caf\u{e9}\""), SyntaxError::NonAscii);
        assert_eq!(kind("\"tab\there\""), SyntaxError::NonAscii);
    }

    #[test]
    fn test_read_string_length_limit() {
        let longest = format!("\"{}\"", "a".repeat(MAX_STRING_LEN));
        assert_eq!(scanner(&longest).read_string().unwrap().len(), MAX_STRING_LEN);

        let too_long = format!("\"{}\"", "a".repeat(MAX_STRING_LEN + 1));
        assert!(matches!(
            scanner(&too_long).read_string(),
            Err(SceneError::Syntax {
                kind: SyntaxError::StringTooLong,
                ..
            })
        ));
    }

    #[test]
    fn test_read_string_unterminated() {
        assert!(matches!(
            scanner("\"open").read_string(),
            Err(SceneError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_read_number() {
        let read = |input: &str| scanner(input).read_number().unwrap();
        assert_eq!(read("12,"), 12.0);
        assert_eq!(read("-0.5 "), -0.5);
        assert_eq!(read("+3}"), 3.0);
        assert_eq!(read(".25]"), 0.25);
        assert_eq!(read("7.,"), 7.0);
        assert_eq!(read("1e3,"), 1000.0);
        assert_eq!(read("2.5E-1,"), 0.25);
    }

    #[test]
    fn test_read_number_leaves_terminator() {
        let mut s = scanner("42}");
        assert_eq!(s.read_number().unwrap(), 42.0);
        assert_eq!(s.next_char().unwrap(), b'}');
    }

    #[test]
    fn test_read_number_invalid() {
        for input in ["abc,", "-,", ".,", "\"1\",", "1e,", "1e999,"] {
            assert!(
                matches!(
                    scanner(input).read_number(),
                    Err(SceneError::Syntax {
                        kind: SyntaxError::InvalidNumber(_),
                        ..
                    })
                ),
                "{input} should not parse as a number"
            );
        }
    }

    #[test]
    fn test_read_number_eof() {
        assert!(matches!(
            scanner("12").read_number(),
            Err(SceneError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_read_vector3() {
        let v = scanner("[ 1, -2.5 ,\n3e1 ]").read_vector3().unwrap();
        assert_eq!(v, DVec3::new(1.0, -2.5, 30.0));
        let v = scanner("[0,0,0]").read_vector3().unwrap();
        assert_eq!(v, DVec3::ZERO);
    }

    #[test]
    fn test_read_vector3_wrong_arity() {
        assert!(matches!(
            scanner("[1, 2]").read_vector3(),
            Err(SceneError::Syntax { .. })
        ));
        assert!(matches!(
            scanner("[1, 2, 3, 4]").read_vector3(),
            Err(SceneError::Syntax {
                kind: SyntaxError::Expected(']'),
                ..
            })
        ));
        assert!(matches!(
            scanner("1, 2, 3]").read_vector3(),
            Err(SceneError::Syntax {
                kind: SyntaxError::Expected('['),
                ..
            })
        ));
    }
}
