//! crates/logging/src/spaced.rs
//! Multi-value message operands.

use std::fmt;

/// Displays several operands separated by single spaces.
///
/// Lets the print-style entry points take a list of values without building
/// an intermediate `String`.
///
/// ```
/// use logging::{Flags, Logger, Priority, Spaced};
///
/// let logger = Logger::new(Vec::new(), "", Priority::INFO, Flags::NONE);
/// logger.info(Spaced(&[&"copied", &3, &"files in", &1.5, &"s"]));
///
/// assert_eq!(logger.into_inner(), b"INFO: copied 3 files in 1.5 s\n".to_vec());
/// ```
#[derive(Clone, Copy)]
pub struct Spaced<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut operands = self.0.iter();
        if let Some(first) = operands.next() {
            fmt::Display::fmt(first, f)?;
            for operand in operands {
                f.write_str(" ")?;
                fmt::Display::fmt(operand, f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spaced({:?})", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_empty() {
        assert_eq!(Spaced(&[]).to_string(), "");
    }

    #[test]
    fn single_operand_has_no_padding() {
        assert_eq!(Spaced(&[&42]).to_string(), "42");
    }

    #[test]
    fn operands_are_joined_with_one_space() {
        assert_eq!(Spaced(&[&"a", &1, &'c']).to_string(), "a 1 c");
    }
}
