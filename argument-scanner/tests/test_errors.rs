use argument_scanner::{
    Arity, ErrorKind, LongOpt, OptionName, Scanner, ERROR_MESSAGE_CAPACITY, MSG_INVALID,
    MSG_MISSING, MSG_TOOMANY,
};
use pretty_assertions::assert_eq;

const OPTIONS: &[LongOpt<'static>] = &[
    LongOpt::short("amend", 'a', Arity::None),
    LongOpt::short("color", 'c', Arity::Optional),
    LongOpt::short("delay", 'd', Arity::Required),
];

#[test]
fn test_short_invalid_option() {
    let mut argv = ["prog", "-z"];
    let mut s = Scanner::new(&mut argv);
    let err = s.scan_short("abc").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOption);
    assert_eq!(err.option(), OptionName::Short('z'));
    assert_eq!(err.to_string(), "invalid option -- 'z'");
    assert_eq!(s.error_message(), "invalid option -- 'z'");
    assert!(s.error_message().starts_with(MSG_INVALID));
    assert_eq!(s.last_option(), Some(u32::from('z')));
    assert!(s.finished());
}

#[test]
fn test_empty_option_string() {
    let mut argv = ["prog", "-a"];
    let mut s = Scanner::new(&mut argv);
    let err = s.scan_short("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOption);
}

#[test]
fn test_colon_is_never_an_option() {
    let mut argv = ["prog", "-:"];
    let mut s = Scanner::new(&mut argv);
    let err = s.scan_short("a:").unwrap_err();
    assert_eq!(err.option(), OptionName::Short(':'));
}

#[test]
fn test_invalid_option_skips_rest_of_cluster() {
    let mut argv = ["prog", "-azb", "-b"];
    let mut s = Scanner::new(&mut argv);
    assert_eq!(s.scan_short("ab"), Ok(Some('a')));
    assert!(s.scan_short("ab").is_err());
    assert_eq!(s.scan_short("ab"), Ok(Some('b')));
    assert_eq!(s.index(), 3);
    assert_eq!(s.scan_short("ab"), Ok(None));
}

#[test]
fn test_short_missing_argument() {
    let mut argv = ["prog", "-c"];
    let mut s = Scanner::new(&mut argv);
    let err = s.scan_short("c:").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingArgument);
    assert_eq!(s.error_message(), "option requires an argument -- 'c'");
    assert!(s.error_message().starts_with(MSG_MISSING));
    assert_eq!(s.arg(), None);
    assert!(s.finished());
}

#[test]
fn test_long_invalid_option() {
    let mut argv = ["prog", "--unknown=3", "foo"];
    let mut s = Scanner::new(&mut argv);
    let err = s.scan_long(OPTIONS).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOption);
    assert_eq!(err.option(), OptionName::Long("unknown"));
    assert_eq!(s.error_message(), "invalid option -- 'unknown'");
    assert_eq!(s.long_index(), None);
    assert_eq!(s.scan_long(OPTIONS), Ok(None));
    assert_eq!(s.positionals().collect::<Vec<_>>(), vec!["foo"]);
}

#[test]
fn test_long_missing_argument() {
    let mut argv = ["prog", "--delay"];
    let mut s = Scanner::new(&mut argv);
    let err = s.scan_long(OPTIONS).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingArgument);
    assert_eq!(s.error_message(), "option requires an argument -- 'delay'");
    assert!(s.finished());
}

#[test]
fn test_long_unexpected_argument() {
    let mut argv = ["prog", "--amend=yes"];
    let mut s = Scanner::new(&mut argv);
    let err = s.scan_long(OPTIONS).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedArgument);
    assert_eq!(err.option(), OptionName::Long("amend"));
    assert_eq!(s.error_message(), "option takes no arguments -- 'amend'");
    assert!(s.error_message().starts_with(MSG_TOOMANY));
    assert_eq!(s.arg(), None);
}

#[test]
fn test_short_error_through_table() {
    let mut argv = ["prog", "-x"];
    let mut s = Scanner::new(&mut argv);
    let err = s.scan_long(OPTIONS).unwrap_err();
    assert_eq!(err.to_string(), "invalid option -- 'x'");
    assert_eq!(s.long_index(), None);
}

#[test]
fn test_errors_are_not_fatal() {
    let mut argv = ["prog", "--foo", "bar", "-a", "-q", "--amend"];
    let mut s = Scanner::new(&mut argv);
    let mut codes = Vec::new();
    let mut errors = Vec::new();
    loop {
        match s.scan_long(OPTIONS) {
            Ok(Some(code)) => codes.push(code),
            Ok(None) => break,
            Err(err) => errors.push(err.to_string()),
        }
    }
    assert_eq!(codes, vec![u32::from('a'), u32::from('a')]);
    assert_eq!(
        errors,
        vec!["invalid option -- 'foo'", "invalid option -- 'q'"]
    );
    assert_eq!(s.positionals().collect::<Vec<_>>(), vec!["bar"]);
}

#[test]
fn test_message_is_overwritten() {
    let mut argv = ["prog", "-z", "-a"];
    let mut s = Scanner::new(&mut argv);
    assert!(s.scan_short("a").is_err());
    assert!(!s.error_message().is_empty());
    assert_eq!(s.scan_short("a"), Ok(Some('a')));
    assert_eq!(s.error_message(), "");
}

#[test]
fn test_long_message_is_truncated() {
    let name = "n".repeat(200);
    let token = format!("--{}", name);
    let mut argv = ["prog", token.as_str()];
    let mut s = Scanner::new(&mut argv);
    let err = s.scan_long(OPTIONS).unwrap_err();
    assert_eq!(err.option(), OptionName::Long(name.as_str()));
    assert_eq!(err.to_string().len(), MSG_INVALID.len() + 5 + 200 + 1);
    let msg = s.error_message();
    assert_eq!(msg.len(), ERROR_MESSAGE_CAPACITY);
    assert!(msg.starts_with("invalid option -- 'nnn"));
    assert!(msg.ends_with("n'"));
}

#[test]
fn test_error_kind_messages() {
    assert_eq!(ErrorKind::InvalidOption.message(), MSG_INVALID);
    assert_eq!(ErrorKind::MissingArgument.message(), MSG_MISSING);
    assert_eq!(ErrorKind::UnexpectedArgument.message(), MSG_TOOMANY);
    assert_eq!(ErrorKind::MissingArgument.to_string(), MSG_MISSING);
}
