use std::{fmt::Display, str::FromStr};

use chumsky::Parser;
use log::trace;

use crate::MplibParseError;

/// Stripped, non-empty lines of an instance file.
pub(crate) struct Lines<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'a> {
    /// 1-based line number in the source
    pub number: usize,
    pub content: &'a str,
}

impl<'a> Lines<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().enumerate(),
        }
    }

    pub fn next_line(&mut self, expected: &'static str) -> Result<Line<'a>, MplibParseError> {
        let line = self
            .lines
            .by_ref()
            .map(|(idx, content)| Line {
                number: idx + 1,
                content: content.trim(),
            })
            .find(|line| !line.content.is_empty())
            .ok_or(MplibParseError::UnexpectedEof { expected })?;

        trace!("line {} ({expected}): {}", line.number, line.content);

        Ok(line)
    }
}

impl<'a> Line<'a> {
    pub fn tokens(&self) -> Vec<&'a str> {
        self.content.split_whitespace().collect()
    }

    pub fn integer<T>(&self, token: &str, field: &'static str) -> Result<T, MplibParseError>
    where
        T: FromStr,
        T::Err: Display,
    {
        crate::integer_parser::<T>()
            .parse(token)
            .map_err(|errors| MplibParseError::InvalidInteger {
                field,
                line: self.number,
                token: token.to_string(),
                errors,
            })
    }

    pub fn integers<T>(&self, field: &'static str) -> Result<Vec<T>, MplibParseError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.content
            .split_whitespace()
            .map(|token| self.integer(token, field))
            .collect()
    }

    /// Line that has to hold exactly one integer.
    pub fn single<T>(&self, field: &'static str) -> Result<T, MplibParseError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.tokens().as_slice() {
            [token] => self.integer(token, field),
            tokens => Err(MplibParseError::TokenCount {
                field,
                line: self.number,
                expected: 1,
                found: tokens.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines_and_strips() {
        let mut lines = Lines::new("\n  2 \n\t\n 4 5\r\n");

        let line = lines.next_line("first").unwrap();
        assert_eq!(line.number, 2);
        assert_eq!(line.content, "2");

        let line = lines.next_line("second").unwrap();
        assert_eq!(line.number, 4);
        assert_eq!(line.content, "4 5");

        assert!(matches!(
            lines.next_line("third"),
            Err(MplibParseError::UnexpectedEof { expected: "third" })
        ));
    }

    #[test]
    fn single_value() {
        let line = Line {
            number: 1,
            content: "12",
        };
        assert_eq!(line.single::<usize>("count").unwrap(), 12);

        let line = Line {
            number: 3,
            content: "12 13",
        };
        assert!(matches!(
            line.single::<usize>("count"),
            Err(MplibParseError::TokenCount {
                field: "count",
                line: 3,
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn signed_and_unsigned() {
        let line = Line {
            number: 7,
            content: "-4 0 15",
        };
        assert_eq!(line.integers::<i32>("date").unwrap(), vec![-4, 0, 15]);

        let err = line.integers::<u32>("capacity").unwrap_err();
        assert!(matches!(
            err,
            MplibParseError::InvalidInteger { field: "capacity", line: 7, ref token, .. } if token == "-4"
        ));
    }

    #[test]
    fn rejects_garbage() {
        let line = Line {
            number: 1,
            content: "3 x 1.5",
        };
        assert!(line.integers::<u32>("demand").is_err());
        assert!(line.integer::<u32>("demand", "1.5").is_err());
        assert!(line.integer::<u32>("demand", "99999999999").is_err());
    }
}
