use pretty_assertions::assert_eq;

use super::*;

#[test]
fn all_codes_round_trip_through_from_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("e6002".parse::<ErrorCode>(), Ok(ErrorCode::E6002));
    assert_eq!("E1234".parse::<ErrorCode>(), Err(()));
}

#[test]
fn phase_predicates() {
    assert!(ErrorCode::E2003.is_type_error());
    assert!(ErrorCode::E6004.is_runtime_error());
    assert!(ErrorCode::E9002.is_internal());
    assert!(!ErrorCode::E6001.is_type_error());
}
