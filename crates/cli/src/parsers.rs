use enforce_range_shared_kernel::Operand;

const NULL_LITERAL: &str = "null";

/// Map a command-line operand to a dynamic [`Operand`].
///
/// The literal `null` is the unbounded sentinel; everything else is left as
/// text for the library's numeric coercion to accept or reject.
pub fn parse_operand(s: &str) -> Operand {
    if s.trim() == NULL_LITERAL {
        Operand::Null
    } else {
        Operand::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_literal() {
        assert_eq!(parse_operand("null"), Operand::Null);
        assert_eq!(parse_operand(" null\n"), Operand::Null);
    }

    #[test]
    fn test_everything_else_is_text() {
        assert_eq!(parse_operand("5"), Operand::Text("5".to_string()));
        assert_eq!(parse_operand("Null"), Operand::Text("Null".to_string()));
        assert_eq!(parse_operand(""), Operand::Text(String::new()));
    }
}
