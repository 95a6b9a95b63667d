//! Malformed input is rejected line by line without disturbing the book

use target_pricer::{Pricer, PricerError};

#[cfg(test)]
mod bad_input_tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_each_bad_line_is_rejected() {
        let mut pricer = Pricer::with_target_size(1).unwrap();

        assert!(pricer.handle_line("").unwrap().is_none());
        assert!(matches!(
            pricer.handle_line("not_a_time"),
            Err(PricerError::InvalidTimestamp(_))
        ));
        assert!(matches!(
            pricer.handle_line("0 "),
            Err(PricerError::MalformedLine { .. })
        ));
        assert!(matches!(
            pricer.handle_line("1 A foo bad_side 12.34 100"),
            Err(PricerError::InvalidSide(_))
        ));
        assert!(matches!(
            pricer.handle_line("2 A bar B bad_price 100"),
            Err(PricerError::InvalidPrice(_))
        ));
        assert!(matches!(
            pricer.handle_line("3 A baz B 12.34 bad_size"),
            Err(PricerError::InvalidSize(_))
        ));
        assert!(matches!(
            pricer.handle_line("4 R foo bad_size"),
            Err(PricerError::InvalidSize(_))
        ));
        assert!(pricer.handle_line("5 R unknown_oid 100").unwrap().is_none());

        assert!(pricer.bids().is_empty());
        assert!(pricer.asks().is_empty());
        assert_eq!(pricer.stats().lines_rejected, 6);
    }

    #[test]
    fn test_processing_continues_after_bad_lines() {
        let input = "\
1 A foo bad_side 12.34 100
oops
2 A a B 12.34 1
3 Z a 1
4 R a 1
";
        let mut pricer = Pricer::with_target_size(1).unwrap();
        let mut output = Vec::new();
        let stats = pricer.process(Cursor::new(input), &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "2 S 12.34\n4 S NA\n");
        assert_eq!(stats.lines_rejected, 3);
        assert_eq!(stats.events_applied, 2);
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let mut input: Vec<u8> = Vec::new();
        input.extend_from_slice(b"1 A a B 10.00 1\n");
        input.extend_from_slice(b"2 A \xff B 10.00 1\n");
        input.extend_from_slice(b"\xfe\xfd\n");
        input.extend_from_slice(b"3 R a 1\n");

        let mut pricer = Pricer::with_target_size(1).unwrap();
        let mut output = Vec::new();
        let stats = pricer.process(Cursor::new(input), &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "1 S 10.00\n3 S NA\n");
        assert_eq!(stats.lines_read, 4);
        assert_eq!(stats.lines_rejected, 2);
        assert_eq!(stats.events_applied, 2);
        assert!(pricer.bids().is_empty());
    }

    #[test]
    fn test_crlf_and_unterminated_last_line() {
        let input = "1 A a S 10.00 1\r\n2 R a 1";
        let mut pricer = Pricer::with_target_size(1).unwrap();
        let mut output = Vec::new();
        let stats = pricer.process(Cursor::new(input), &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "1 B 10.00\n2 B NA\n");
        assert_eq!(stats.lines_rejected, 0);
    }

    #[test]
    fn test_zero_target_size_is_fatal() {
        assert!(matches!(
            Pricer::with_target_size(0),
            Err(PricerError::InvalidConfig { .. })
        ));
    }
}
