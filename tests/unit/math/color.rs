//! Tests for color parsing and linear-light conversion

#[cfg(test)]
mod tests {
    use stimgrid::PatternError;
    use stimgrid::math::color::Rgb;

    // Tests long hex, short hex and names, case-insensitively
    // Verified by multiplying short hex digits by 16
    #[test]
    fn test_parse() {
        assert_eq!(Rgb::parse("#FF8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::parse("#0f0").unwrap(), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::parse(" Navy ").unwrap(), Rgb::new(0, 0, 128));
        assert_eq!("white".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
    }

    // Tests rejection of malformed colors
    // Verified by defaulting unknown names to black
    #[test]
    fn test_parse_errors() {
        for text in ["#12345", "#gg0000", "chartreuse-ish", ""] {
            assert!(
                matches!(
                    Rgb::parse(text),
                    Err(PatternError::InvalidParameter {
                        parameter: "color",
                        ..
                    })
                ),
                "{text}"
            );
        }
    }

    // Tests hex formatting
    // Verified by using uppercase hex
    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(255, 165, 0).to_hex(), "#ffa500");
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "#010203");
    }

    // Tests linear conversion round trips on every channel value
    // Verified by omitting the gamma exponent
    #[test]
    fn test_linear_round_trip() {
        for value in 0..=255_u8 {
            let color = Rgb::new(value, value, 255 - value);
            assert_eq!(Rgb::from_linear(color.to_linear()), color);
        }
        assert_eq!(Rgb::new(255, 255, 255).to_linear(), [1.0, 1.0, 1.0]);
        assert_eq!(Rgb::from_linear([2.0, -1.0, 0.0]), Rgb::new(255, 0, 0));
    }
}
