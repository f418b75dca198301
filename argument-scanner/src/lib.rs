//! This crate implements a reentrant option scanner for command lines following
//! the conventions of `getopt` and `getopt_long`.  It's small, never allocates
//! and keeps all of its state in a value you own, so you can run as many
//! scanners side by side as you like.
//!
//! Unlike most argument parsers it does not own the command line.  It borrows
//! the token vector mutably and reorders it in place: as options are found,
//! positional arguments are moved towards the end of the vector so that once
//! scanning is done they can be picked up in their original order.
//!
//! # Example
//!
//! Scanning happens via the [`Scanner`] type:
//!
//! ```
//! use argument_scanner::{Arity, Error, LongOpt, Scanner};
//!
//! const OPTIONS: &[LongOpt<'static>] = &[
//!     LongOpt::short("delay", 'd', Arity::Required),
//!     LongOpt::short("color", 'c', Arity::Required),
//!     LongOpt::new("verbose", 256, Arity::None),
//! ];
//!
//! fn main() -> Result<(), Error<'static>> {
//!     let mut argv = ["prog", "foo", "--delay", "1234", "bar", "-cred"];
//!     let mut scanner = Scanner::new(&mut argv);
//!
//!     while let Some(code) = scanner.scan_long(OPTIONS)? {
//!         match char::from_u32(code) {
//!             Some('d') => println!("delay: {:?}", scanner.arg()),
//!             Some('c') => println!("color: {:?}", scanner.arg()),
//!             _ => println!("verbose"),
//!         }
//!     }
//!
//!     let rest: Vec<_> = scanner.positionals().collect();
//!     assert_eq!(rest, ["foo", "bar"]);
//!     Ok(())
//! }
//! ```
//!
//! Here is what's happening:
//!
//! * [`Scanner::new`] wraps the token vector.  The first token is taken to be
//!   the program name and skipped.  Use [`Scanner::from_args`] if there is no
//!   program name.
//! * [`Scanner::scan_long`] returns the code of the next option, `Ok(None)`
//!   when there are no more options, or an [`Error`] for unknown options and
//!   bad arguments.  [`Scanner::scan_short`] does the same for a `getopt`
//!   style option string such as `"ab:c::"`.
//! * [`Scanner::arg`] is the argument of the option that was just returned.
//!   It borrows from the token vector, not from the scanner.
//! * [`Scanner::positionals`] drains the remaining positional arguments.
//!
//! # Scanning Rules
//!
//! * `-abc` is a cluster of the short options `a`, `b` and `c`.  A short
//!   option with a required argument ends the cluster: `-cred` and `-c red`
//!   both give `c` the argument `red`.
//! * A short option with an optional argument only takes an inline value
//!   (`-d10`).  It never consumes the next token.
//! * `--name=value` and `--name value` pass a value to a long option that
//!   requires one.  Optional long arguments only come in the `=` form.  Long
//!   names must match exactly, there is no abbreviation.
//! * `--` ends option scanning and is consumed.  A lone `-` is a positional
//!   argument.
//! * By default positional arguments may be freely mixed with options and are
//!   permuted to the end.  With [`Scanner::set_permute`] turned off scanning
//!   stops at the first positional argument instead, which is what you want
//!   for subcommands: step over the subcommand with [`Scanner::next_arg`] and
//!   keep scanning with the subcommand's options.
//!
//! # Error Handling
//!
//! Errors are never printed.  Every failed scan returns an [`Error`] carrying
//! the [`ErrorKind`] and the offending option, and also leaves the formatted
//! message in [`Scanner::error_message`].  Errors are not fatal: the scanner
//! has already moved past the bad token and scanning can continue.
use std::fmt;
use std::str::from_utf8;

use tracing::{debug, trace};

/// Message lead-in for options that are not recognized.
pub const MSG_INVALID: &str = "invalid option";

/// Message lead-in for options that are missing their required argument.
pub const MSG_MISSING: &str = "option requires an argument";

/// Message lead-in for long options given an argument they don't take.
pub const MSG_TOOMANY: &str = "option takes no arguments";

/// The maximum length in bytes of [`Scanner::error_message`].
pub const ERROR_MESSAGE_CAPACITY: usize = 64;

// one entry per short-compatible code, each with up to two colons
const SHORT_SPEC_CAPACITY: usize = 127 * 3;

/// Represents a scanning error.
///
/// The `Display` output is `<lead-in> -- '<option>'`, where the lead-in is
/// one of [`MSG_INVALID`], [`MSG_MISSING`] or [`MSG_TOOMANY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} -- '{option}'")]
pub struct Error<'t> {
    kind: ErrorKind,
    option: OptionName<'t>,
}

impl<'t> Error<'t> {
    fn new(kind: ErrorKind, option: OptionName<'t>) -> Error<'t> {
        Error { kind, option }
    }

    /// The kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The option that caused the error.
    pub fn option(&self) -> OptionName<'t> {
        self.option
    }
}

/// Represents the kind of a scanning error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The option is not in the option string or table.
    InvalidOption,
    /// The option requires an argument but the command line ended.
    MissingArgument,
    /// A long option that takes no argument was given one with `=`.
    UnexpectedArgument,
}

impl ErrorKind {
    /// Returns the fixed message lead-in for this kind.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::InvalidOption => MSG_INVALID,
            ErrorKind::MissingArgument => MSG_MISSING,
            ErrorKind::UnexpectedArgument => MSG_TOOMANY,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The display name of an option in an error.
///
/// Long names borrow from the token they were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionName<'t> {
    /// A single character option.
    Short(char),
    /// A long option, without the leading dashes.
    Long(&'t str),
}

impl fmt::Display for OptionName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionName::Short(c) => write!(f, "{}", c),
            OptionName::Long(name) => f.write_str(name),
        }
    }
}

/// Whether an option takes an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arity {
    /// The option never takes an argument.
    #[default]
    None,
    /// The option always takes an argument, inline or from the next token.
    Required,
    /// The option takes an argument only if it is given inline.
    Optional,
}

impl Arity {
    /// The number of colons following the option in an option string.
    fn colons(self) -> usize {
        match self {
            Arity::None => 0,
            Arity::Required => 1,
            Arity::Optional => 2,
        }
    }
}

/// An entry in a long option table.
///
/// Codes in the range `1..127` double as short options so one table can
/// describe `-d` and `--delay` at once.  Codes of 128 and above are long-only.
/// An entry with an empty name only describes a short option.
///
/// A table is a plain slice.  Scanning stops at the end of the slice or at
/// the first [`LongOpt::SENTINEL`], whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LongOpt<'n> {
    /// The name matched against `--name`.
    pub name: &'n str,
    /// The code returned when this option matches.
    pub code: u32,
    /// Whether the option takes an argument.
    pub arity: Arity,
}

impl<'n> LongOpt<'n> {
    /// Marks the end of a table.
    pub const SENTINEL: Self = LongOpt {
        name: "",
        code: 0,
        arity: Arity::None,
    };

    /// Creates an entry with an explicit code.
    pub const fn new(name: &'n str, code: u32, arity: Arity) -> LongOpt<'n> {
        LongOpt { name, code, arity }
    }

    /// Creates an entry that is also reachable as the short option `short`.
    pub const fn short(name: &'n str, short: char, arity: Arity) -> LongOpt<'n> {
        LongOpt {
            name,
            code: short as u32,
            arity,
        }
    }

    /// Returns the short option character of this entry, if it has one.
    pub fn short_char(&self) -> Option<char> {
        if !(1..127).contains(&self.code) {
            return None;
        }
        char::from_u32(self.code).filter(|&c| c != ':')
    }

    fn is_sentinel(&self) -> bool {
        self.name.is_empty() && self.code == 0
    }
}

/// A short option string synthesized from a long option table.
///
/// Every entry with a short form contributes its character followed by
/// zero, one or two colons according to its arity.  The string is built in
/// an inline buffer, no allocation takes place.
#[derive(Clone)]
pub struct ShortSpec {
    buf: [u8; SHORT_SPEC_CAPACITY],
    len: usize,
}

impl ShortSpec {
    /// Builds the option string for a long option table.
    pub fn from_long(longopts: &[LongOpt<'_>]) -> ShortSpec {
        let mut spec = ShortSpec {
            buf: [0; SHORT_SPEC_CAPACITY],
            len: 0,
        };
        for (_, opt) in table_entries(longopts) {
            let Some(c) = opt.short_char() else {
                continue;
            };
            let colons = opt.arity.colons();
            if spec.len + 1 + colons > SHORT_SPEC_CAPACITY {
                break;
            }
            // short_char is always ascii
            spec.buf[spec.len] = c as u8;
            spec.buf[spec.len + 1..spec.len + 1 + colons].fill(b':');
            spec.len += 1 + colons;
        }
        spec
    }

    /// Returns the option string.
    pub fn as_str(&self) -> &str {
        from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }
}

impl AsRef<str> for ShortSpec {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for ShortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShortSpec").field(&self.as_str()).finish()
    }
}

impl fmt::Display for ShortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed capacity storage for the last error message.
#[derive(Clone)]
struct MessageBuf {
    buf: [u8; ERROR_MESSAGE_CAPACITY],
    len: usize,
}

impl MessageBuf {
    const fn new() -> MessageBuf {
        MessageBuf {
            buf: [0; ERROR_MESSAGE_CAPACITY],
            len: 0,
        }
    }

    fn clear(&mut self) {
        self.len = 0;
    }

    fn as_str(&self) -> &str {
        from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    /// Formats an error, truncating the option name so the closing quote
    /// always fits.
    fn set(&mut self, err: &Error<'_>) {
        self.clear();
        self.push_str(err.kind.message(), 0);
        self.push_str(" -- '", 0);
        match err.option {
            OptionName::Short(c) => self.push_str(c.encode_utf8(&mut [0; 4]), 1),
            OptionName::Long(name) => self.push_str(name, 1),
        }
        self.push_str("'", 0);
    }

    /// Appends as much of `s` as fits while keeping `reserve` bytes free.
    /// Truncation never splits a character.
    fn push_str(&mut self, s: &str, reserve: usize) {
        let room = ERROR_MESSAGE_CAPACITY.saturating_sub(self.len + reserve);
        let mut end = s.len().min(room);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buf[self.len..self.len + end].copy_from_slice(&s.as_bytes()[..end]);
        self.len += end;
    }
}

/// A reentrant option scanner over a borrowed token vector.
///
/// The scanner holds all of the scanning state: the cursor into the tokens,
/// the position within a short option cluster, the argument of the last
/// option and the last error message.  Nothing is global, so independent
/// scanners can coexist, for instance to parse nested command lines.
///
/// The tokens are borrowed mutably because positional arguments are
/// permuted towards the end of the vector while scanning.  Strings handed
/// out by the scanner borrow from the tokens themselves (lifetime `'t`) and
/// stay valid after the scanner is gone.
pub struct Scanner<'a, 't> {
    tokens: &'a mut [&'t str],
    has_prog: bool,
    permute: bool,
    cursor: usize,
    cluster: usize,
    last_option: Option<u32>,
    current_arg: Option<&'t str>,
    long_index: Option<usize>,
    error_message: MessageBuf,
}

impl fmt::Debug for Scanner<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("prog", &self.prog())
            .field("index", &self.cursor)
            .field("permute", &self.permute)
            .field("arg", &self.current_arg)
            .field("error_message", &self.error_message())
            .finish()
    }
}

impl<'a, 't> Scanner<'a, 't> {
    /// Creates a scanner over a full command line.
    ///
    /// The first token is the program name and is never scanned.
    pub fn new(tokens: &'a mut [&'t str]) -> Scanner<'a, 't> {
        Scanner::with_prog(tokens, true)
    }

    /// Creates a scanner over just the arguments.
    ///
    /// In this case there is no program name and scanning starts with the
    /// first token.
    pub fn from_args(tokens: &'a mut [&'t str]) -> Scanner<'a, 't> {
        Scanner::with_prog(tokens, false)
    }

    fn with_prog(tokens: &'a mut [&'t str], has_prog: bool) -> Scanner<'a, 't> {
        let mut scanner = Scanner {
            tokens,
            has_prog,
            permute: true,
            cursor: 0,
            cluster: 0,
            last_option: None,
            current_arg: None,
            long_index: None,
            error_message: MessageBuf::new(),
        };
        scanner.restart();
        scanner
    }

    /// Starts over from the beginning of the tokens.
    ///
    /// All progress is discarded and permutation is turned back on.  Tokens
    /// that were already permuted stay where they are.
    pub fn restart(&mut self) {
        self.permute = true;
        self.cursor = usize::from(self.has_prog && !self.tokens.is_empty());
        self.cluster = 0;
        self.last_option = None;
        self.current_arg = None;
        self.long_index = None;
        self.error_message.clear();
    }

    /// Replaces the tokens and starts over.
    ///
    /// Whether the first token is a program name carries over from how the
    /// scanner was created.
    pub fn reset(&mut self, tokens: &'a mut [&'t str]) {
        self.tokens = tokens;
        self.restart();
    }

    /// Returns the program name, if the scanner was created with one.
    pub fn prog(&self) -> Option<&'t str> {
        if self.has_prog {
            self.tokens.first().copied()
        } else {
            None
        }
    }

    /// Scans the next short option against a `getopt` option string.
    ///
    /// Each character of `optstring` is an option.  A character followed by
    /// one colon requires an argument, by two colons takes an optional one.
    /// Returns the option character, `Ok(None)` when there are no more
    /// options, or an error.  Long options are not recognized here and are
    /// treated like positional arguments.
    pub fn scan_short(&mut self, optstring: &str) -> Result<Option<char>, Error<'t>> {
        self.begin_scan();
        let start = self.cursor;
        let skipped = self.skip_non_options(is_short_option);
        let rv = self.short_option(optstring);
        self.rotate_skipped(start, skipped);
        rv
    }

    /// Scans the next short or long option against a long option table.
    ///
    /// Returns the code of the matched entry, `Ok(None)` when there are no
    /// more options, or an error.  Short options are scanned against the
    /// short forms of the table (see [`ShortSpec`]).  After a match
    /// [`long_index`](Self::long_index) tells which table entry matched.
    pub fn scan_long(&mut self, longopts: &[LongOpt<'_>]) -> Result<Option<u32>, Error<'t>> {
        self.begin_scan();
        let start = self.cursor;
        let skipped = self.skip_non_options(is_option);
        let rv = self.long_option(longopts);
        self.rotate_skipped(start, skipped);
        rv
    }

    /// Returns the next token and moves past it.
    ///
    /// After scanning returned `Ok(None)` this yields the positional
    /// arguments.  It can also be used to step over a subcommand before
    /// scanning the subcommand's own options.  Any partially scanned short
    /// option cluster is abandoned.
    pub fn next_arg(&mut self) -> Option<&'t str> {
        self.cluster = 0;
        let token = self.tokens.get(self.cursor).copied()?;
        self.cursor += 1;
        trace!(index = self.cursor - 1, token, "positional argument");
        Some(token)
    }

    /// Returns an iterator draining the remaining tokens via
    /// [`next_arg`](Self::next_arg).
    pub fn positionals(&mut self) -> Positionals<'_, 'a, 't> {
        Positionals { scanner: self }
    }

    /// The argument of the last returned option.
    ///
    /// This is `None` if the option takes no argument or an optional
    /// argument was not given.
    pub fn arg(&self) -> Option<&'t str> {
        self.current_arg
    }

    /// The code of the option most recently looked at.
    ///
    /// This is also set when scanning fails on a recognizable option.
    pub fn last_option(&self) -> Option<u32> {
        self.last_option
    }

    /// The table index of the entry that matched in the last
    /// [`scan_long`](Self::scan_long).
    ///
    /// This is `None` for a short option without a long counterpart and after
    /// any scan that did not return an option.
    pub fn long_index(&self) -> Option<usize> {
        self.long_index
    }

    /// The message of the last scan error, or an empty string if the last
    /// scan succeeded.
    pub fn error_message(&self) -> &str {
        self.error_message.as_str()
    }

    /// Returns `true` if positional arguments are permuted to the end.
    #[inline]
    pub fn permute(&self) -> bool {
        self.permute
    }

    /// Turns permutation on or off.
    ///
    /// With permutation off scanning stops at the first positional
    /// argument.  This can be changed between any two scans.
    #[inline]
    pub fn set_permute(&mut self, yes: bool) {
        self.permute = yes;
    }

    /// The index of the next token to examine.
    #[inline]
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if all tokens were consumed.
    #[inline]
    pub fn finished(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// The tokens that were not consumed yet.
    pub fn remaining(&self) -> &[&'t str] {
        self.tokens.get(self.cursor..).unwrap_or_default()
    }

    /// All tokens in their current, possibly permuted, order.
    pub fn tokens(&self) -> &[&'t str] {
        &*self.tokens
    }

    fn begin_scan(&mut self) {
        self.error_message.clear();
        self.last_option = None;
        self.current_arg = None;
        self.long_index = None;
    }

    /// Moves the cursor over positional arguments until something that
    /// `is_option` accepts, a `--` or the end.  Returns how many tokens were
    /// skipped.  Nothing is skipped with permutation off.
    fn skip_non_options(&mut self, is_option: fn(&str) -> bool) -> usize {
        if !self.permute {
            return 0;
        }
        let start = self.cursor;
        while let Some(&token) = self.tokens.get(self.cursor) {
            if token == "--" || is_option(token) {
                break;
            }
            self.cursor += 1;
        }
        self.cursor - start
    }

    /// Moves the `skipped` positional arguments at `start` behind everything
    /// consumed since, keeping their order, and puts the cursor on the first
    /// of them.
    fn rotate_skipped(&mut self, start: usize, skipped: usize) {
        if skipped == 0 {
            return;
        }
        self.tokens[start..self.cursor].rotate_left(skipped);
        self.cursor -= skipped;
        trace!(start, skipped, index = self.cursor, "permuted positional arguments");
    }

    fn short_option(&mut self, optstring: &str) -> Result<Option<char>, Error<'t>> {
        let token = match self.tokens.get(self.cursor) {
            Some(&token) => token,
            None => return Ok(None),
        };
        if token == "--" {
            self.cursor += 1;
            return Ok(None);
        }
        if !is_short_option(token) {
            return Ok(None);
        }

        let cluster = &token[1..];
        // a stale offset from an abandoned cluster starts the token over
        let (offset, rest) = match cluster.get(self.cluster..) {
            Some(rest) if !rest.is_empty() => (self.cluster, rest),
            _ => (0, cluster),
        };
        let mut chars = rest.chars();
        let opt = match chars.next() {
            Some(opt) => opt,
            None => return Ok(None),
        };
        let tail = chars.as_str();
        self.last_option = Some(u32::from(opt));

        match short_arity(optstring, opt) {
            None => {
                self.cluster = 0;
                self.cursor += 1;
                Err(self.fail(ErrorKind::InvalidOption, OptionName::Short(opt)))
            }
            Some(Arity::None) => {
                if tail.is_empty() {
                    self.cluster = 0;
                    self.cursor += 1;
                } else {
                    self.cluster = offset + opt.len_utf8();
                }
                trace!(option = %opt, "short option");
                Ok(Some(opt))
            }
            Some(Arity::Required) => {
                self.cluster = 0;
                self.cursor += 1;
                if !tail.is_empty() {
                    self.current_arg = Some(tail);
                } else if let Some(&next) = self.tokens.get(self.cursor) {
                    self.current_arg = Some(next);
                    self.cursor += 1;
                } else {
                    return Err(self.fail(ErrorKind::MissingArgument, OptionName::Short(opt)));
                }
                trace!(option = %opt, arg = self.current_arg, "short option");
                Ok(Some(opt))
            }
            Some(Arity::Optional) => {
                self.cluster = 0;
                self.cursor += 1;
                self.current_arg = Some(tail).filter(|tail| !tail.is_empty());
                trace!(option = %opt, arg = self.current_arg, "short option");
                Ok(Some(opt))
            }
        }
    }

    fn long_option(&mut self, longopts: &[LongOpt<'_>]) -> Result<Option<u32>, Error<'t>> {
        let token = match self.tokens.get(self.cursor) {
            Some(&token) => token,
            None => return Ok(None),
        };
        if token == "--" {
            self.cursor += 1;
            return Ok(None);
        }
        if is_short_option(token) {
            return self.short_fallback(longopts);
        }
        let option = match token.strip_prefix("--") {
            Some(option) if !option.is_empty() => option,
            _ => return Ok(None),
        };

        self.cursor += 1;
        let (name, value) = match option.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (option, None),
        };
        let (index, entry) = match table_entries(longopts)
            .find(|(_, entry)| !entry.name.is_empty() && entry.name == name)
        {
            Some(found) => found,
            None => return Err(self.fail(ErrorKind::InvalidOption, OptionName::Long(name))),
        };
        self.last_option = Some(entry.code);

        match (entry.arity, value) {
            (Arity::None, Some(_)) => {
                return Err(self.fail(ErrorKind::UnexpectedArgument, OptionName::Long(name)));
            }
            (_, Some(value)) => self.current_arg = Some(value),
            (Arity::Required, None) => match self.tokens.get(self.cursor) {
                Some(&next) => {
                    self.current_arg = Some(next);
                    self.cursor += 1;
                }
                None => {
                    return Err(self.fail(ErrorKind::MissingArgument, OptionName::Long(name)));
                }
            },
            (Arity::None | Arity::Optional, None) => {}
        }

        self.long_index = Some(index);
        trace!(option = name, code = entry.code, arg = self.current_arg, "long option");
        Ok(Some(entry.code))
    }

    /// Scans a short option against the short forms of a long table and
    /// resolves the table index of the result.
    fn short_fallback(&mut self, longopts: &[LongOpt<'_>]) -> Result<Option<u32>, Error<'t>> {
        let spec = ShortSpec::from_long(longopts);
        let rv = self.short_option(spec.as_str())?;
        if let Some(opt) = rv {
            let code = u32::from(opt);
            self.long_index = table_entries(longopts)
                .find(|(_, entry)| entry.code == code)
                .map(|(index, _)| index);
        }
        Ok(rv.map(u32::from))
    }

    /// Records an error in the message buffer and returns it.
    fn fail(&mut self, kind: ErrorKind, option: OptionName<'t>) -> Error<'t> {
        let err = Error::new(kind, option);
        self.error_message.set(&err);
        debug!(index = self.cursor, error = %err, "scan error");
        err
    }
}

/// Iterator over the remaining tokens of a [`Scanner`].
///
/// Created by [`Scanner::positionals`].
#[derive(Debug)]
pub struct Positionals<'s, 'a, 't> {
    scanner: &'s mut Scanner<'a, 't>,
}

impl<'t> Iterator for Positionals<'_, '_, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        self.scanner.next_arg()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.scanner.remaining().len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Positionals<'_, '_, '_> {}

/// Iterates over the live entries of a long table with their indexes.
fn table_entries<'l, 'n>(
    longopts: &'l [LongOpt<'n>],
) -> impl Iterator<Item = (usize, &'l LongOpt<'n>)> {
    longopts
        .iter()
        .enumerate()
        .take_while(|(_, entry)| !entry.is_sentinel())
}

/// Looks up the arity of a short option in an option string.
fn short_arity(optstring: &str, opt: char) -> Option<Arity> {
    if opt == ':' {
        return None;
    }
    let pos = optstring.find(opt)?;
    let rest = &optstring[pos + opt.len_utf8()..];
    Some(if rest.starts_with("::") {
        Arity::Optional
    } else if rest.starts_with(':') {
        Arity::Required
    } else {
        Arity::None
    })
}

/// `-` followed by anything but another dash.
fn is_short_option(arg: &str) -> bool {
    arg.strip_prefix('-')
        .map_or(false, |rest| !rest.is_empty() && !rest.starts_with('-'))
}

/// `--` followed by a name.
fn is_long_option(arg: &str) -> bool {
    arg.strip_prefix("--").map_or(false, |rest| !rest.is_empty())
}

fn is_option(arg: &str) -> bool {
    is_short_option(arg) || is_long_option(arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_shapes() {
        assert!(is_short_option("-a"));
        assert!(is_short_option("-abc"));
        assert!(!is_short_option("-"));
        assert!(!is_short_option("--"));
        assert!(!is_short_option("--a"));
        assert!(!is_short_option("a"));
        assert!(is_long_option("--a"));
        assert!(is_long_option("---"));
        assert!(!is_long_option("--"));
        assert!(!is_long_option("-a"));
    }

    #[test]
    fn test_short_arity() {
        assert_eq!(short_arity("ab:c::", 'a'), Some(Arity::None));
        assert_eq!(short_arity("ab:c::", 'b'), Some(Arity::Required));
        assert_eq!(short_arity("ab:c::", 'c'), Some(Arity::Optional));
        assert_eq!(short_arity("ab:c::", 'x'), None);
        assert_eq!(short_arity("ab:c::", ':'), None);
        assert_eq!(short_arity("", 'a'), None);
        assert_eq!(short_arity("éa:", 'é'), Some(Arity::None));
    }

    #[test]
    fn test_short_spec_from_long() {
        let table = [
            LongOpt::short("amend", 'a', Arity::None),
            LongOpt::new("verbose", 256, Arity::None),
            LongOpt::short("color", 'c', Arity::Optional),
            LongOpt::short("", 'x', Arity::Required),
            LongOpt::short("colon", ':', Arity::Required),
            LongOpt::SENTINEL,
            LongOpt::short("after", 'z', Arity::None),
        ];
        assert_eq!(ShortSpec::from_long(&table).as_str(), "ac::x:");
        assert_eq!(ShortSpec::from_long(&[]).as_str(), "");
    }

    #[test]
    fn test_message_buf() {
        let mut buf = MessageBuf::new();
        buf.set(&Error::new(ErrorKind::InvalidOption, OptionName::Short('z')));
        assert_eq!(buf.as_str(), "invalid option -- 'z'");

        let long = "x".repeat(100);
        buf.set(&Error::new(
            ErrorKind::MissingArgument,
            OptionName::Long(&long),
        ));
        let msg = buf.as_str();
        assert_eq!(msg.len(), ERROR_MESSAGE_CAPACITY);
        assert!(msg.starts_with("option requires an argument -- 'xxx"));
        assert!(msg.ends_with("x'"));

        // never cuts a character in half
        let wide = "ü".repeat(40);
        buf.set(&Error::new(ErrorKind::InvalidOption, OptionName::Long(&wide)));
        let msg = buf.as_str();
        assert!(msg.len() <= ERROR_MESSAGE_CAPACITY);
        assert!(msg.ends_with("ü'"));

        buf.clear();
        assert_eq!(buf.as_str(), "");
    }
}
