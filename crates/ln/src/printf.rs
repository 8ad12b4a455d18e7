//! printf-style formatting over an ordered slice of loosely-typed arguments.
//!
//! Specifiers follow `%[index$][flags][width][.precision]conversion`. The
//! supported conversions are `d x X o f e E s S c b B % n`, and `%<s` reuses
//! the previous argument. Surplus arguments are ignored. Anything the
//! template asks for that the arguments cannot satisfy is a [`FormatError`].

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format specifier '{specifier}' has no matching argument")]
    MissingArgument { specifier: String },

    #[error("conversion '{conversion}' cannot format a {argument} argument")]
    IllegalConversion {
        conversion: char,
        argument: &'static str,
    },

    #[error("unknown format conversion '{0}'")]
    UnknownConversion(char),

    #[error("malformed format specifier '{0}'")]
    Malformed(String),
}

/// A positional format argument.
///
/// `Display` borrows the value and only renders it when a record actually
/// passes the threshold, so expensive or side-effecting `Display` impls cost
/// nothing for suppressed calls.
///
/// Signed integers remember their width so `%x`/`%o` of a negative value
/// print the source type's two's complement (`-1i8` is `ff`), and `f32`
/// stays `f32` so `%s` shows its shortest form.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    Int { value: i64, bits: u32 },
    UInt(u64),
    Float(f64),
    F32(f32),
    Bool(bool),
    Char(char),
    Str(&'a str),
    Display(&'a dyn fmt::Display),
}

impl<'a> Arg<'a> {
    pub fn display(value: &'a dyn fmt::Display) -> Self {
        Arg::Display(value)
    }

    fn kind(&self) -> &'static str {
        match self {
            Arg::Int { .. } => "integer",
            Arg::UInt(_) => "unsigned integer",
            Arg::Float(_) | Arg::F32(_) => "float",
            Arg::Bool(_) => "boolean",
            Arg::Char(_) => "char",
            Arg::Str(_) => "string",
            Arg::Display(_) => "display",
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int { value, bits } => f
                .debug_struct("Int")
                .field("value", value)
                .field("bits", bits)
                .finish(),
            Arg::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            Arg::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Arg::F32(v) => f.debug_tuple("F32").field(v).finish(),
            Arg::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Arg::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Arg::Str(v) => f.debug_tuple("Str").field(v).finish(),
            // never render here, Debug output must not evaluate the value
            Arg::Display(_) => f.write_str("Display(..)"),
        }
    }
}

macro_rules! arg_from_signed {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Arg<'_> {
                fn from(value: $source) -> Self {
                    Arg::Int {
                        value: value as i64,
                        bits: <$source>::BITS,
                    }
                }
            }
        )*
    };
}

macro_rules! arg_from_unsigned {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Arg<'_> {
                fn from(value: $source) -> Self {
                    Arg::UInt(value as u64)
                }
            }
        )*
    };
}

arg_from_signed!(i8, i16, i32, i64, isize);
arg_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Arg::F32(value)
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(value.as_str())
    }
}

/// Builds an argument slice: `ln_args!(code, "reason")`.
#[macro_export]
macro_rules! ln_args {
    ($($value:expr),* $(,)?) => {
        &[$($crate::Arg::from($value)),*]
    };
}

const SPEC_CHARS: &str = "0123456789$-+ ,#.<";
const CONVERSIONS: &str = "dxXofeEsScbBn%";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgIndex {
    Next,
    Explicit(usize),
    Previous,
}

#[derive(Debug, Default, Clone, Copy)]
struct Flags {
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
    group: bool,
    alternate: bool,
}

#[derive(Debug)]
struct Specifier {
    text: String,
    index: ArgIndex,
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

// Sign/prefix and body are kept apart so zero padding lands between them.
struct Rendered {
    lead: String,
    body: String,
    numeric: bool,
}

impl Rendered {
    fn text(body: String) -> Self {
        Self {
            lead: String::new(),
            body,
            numeric: false,
        }
    }
}

pub fn format(template: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next = 0usize;
    let mut previous: Option<usize> = None;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let spec = parse_specifier(&mut chars)?;
        match spec.conversion {
            '%' => {
                push_padded(&mut out, &spec, Rendered::text("%".to_string()));
                continue;
            }
            'n' => {
                out.push('\n');
                continue;
            }
            _ => {}
        }

        let index = match spec.index {
            ArgIndex::Next => {
                next += 1;
                Some(next - 1)
            }
            ArgIndex::Explicit(i) => Some(i),
            ArgIndex::Previous => previous,
        };
        let arg = index
            .and_then(|i| args.get(i))
            .ok_or_else(|| FormatError::MissingArgument {
                specifier: spec.text.clone(),
            })?;
        previous = index;

        let rendered = render(&spec, arg)?;
        push_padded(&mut out, &spec, rendered);
    }

    Ok(out)
}

fn parse_specifier(chars: &mut Peekable<Chars<'_>>) -> Result<Specifier, FormatError> {
    let mut body = String::new();
    while let Some(&c) = chars.peek() {
        if !SPEC_CHARS.contains(c) {
            break;
        }
        body.push(c);
        chars.next();
    }

    let conversion = chars
        .next()
        .ok_or_else(|| FormatError::Malformed(format!("%{body}")))?;
    if !CONVERSIONS.contains(conversion) {
        return Err(FormatError::UnknownConversion(conversion));
    }

    let text = format!("%{body}{conversion}");
    let malformed = || FormatError::Malformed(text.clone());

    let mut rest = body.as_str();
    let index = if let Some(r) = rest.strip_prefix('<') {
        rest = r;
        ArgIndex::Previous
    } else if let Some((position, r)) = rest.split_once('$') {
        let position: usize = position.parse().map_err(|_| malformed())?;
        if position == 0 {
            return Err(malformed());
        }
        rest = r;
        ArgIndex::Explicit(position - 1)
    } else {
        ArgIndex::Next
    };

    let mut flags = Flags::default();
    let mut flag_end = rest.len();
    for (i, c) in rest.char_indices() {
        match c {
            '-' => flags.left = true,
            '0' => flags.zero = true,
            '+' => flags.plus = true,
            ' ' => flags.space = true,
            ',' => flags.group = true,
            '#' => flags.alternate = true,
            _ => {
                flag_end = i;
                break;
            }
        }
    }
    rest = &rest[flag_end..];

    let width_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let width = if width_end > 0 {
        Some(rest[..width_end].parse().map_err(|_| malformed())?)
    } else {
        None
    };
    rest = &rest[width_end..];

    let mut precision = None;
    if let Some(digits) = rest.strip_prefix('.') {
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }
        precision = Some(digits.parse().map_err(|_| malformed())?);
        rest = "";
    }

    if !rest.is_empty() {
        return Err(malformed());
    }

    let spec = Specifier {
        text,
        index,
        flags,
        width,
        precision,
        conversion,
    };
    check_flags(&spec)?;
    Ok(spec)
}

impl Flags {
    fn chars(self) -> impl Iterator<Item = char> {
        [
            (self.left, '-'),
            (self.zero, '0'),
            (self.plus, '+'),
            (self.space, ' '),
            (self.group, ','),
            (self.alternate, '#'),
        ]
        .into_iter()
        .filter_map(|(on, c)| on.then_some(c))
    }
}

// Flag, width and precision combinations each conversion accepts.
fn check_flags(spec: &Specifier) -> Result<(), FormatError> {
    let (allowed, takes_precision) = match spec.conversion {
        'd' => ("-0+ ,", false),
        'x' | 'X' | 'o' => ("-0#", false),
        'f' => ("-0+ ,#", true),
        'e' | 'E' => ("-0+ #", true),
        's' | 'S' | 'b' | 'B' => ("-", true),
        'c' | '%' => ("-", false),
        _ => ("", false),
    };
    let flags = spec.flags;

    let rejected = flags.chars().any(|c| !allowed.contains(c))
        || ((flags.left || flags.zero) && spec.width.is_none())
        || (flags.left && flags.zero)
        || (flags.plus && flags.space)
        || (spec.precision.is_some() && !takes_precision)
        || (spec.conversion == 'n' && spec.width.is_some());

    if rejected {
        Err(FormatError::Malformed(spec.text.clone()))
    } else {
        Ok(())
    }
}

fn render(spec: &Specifier, arg: &Arg<'_>) -> Result<Rendered, FormatError> {
    let illegal = || FormatError::IllegalConversion {
        conversion: spec.conversion,
        argument: arg.kind(),
    };

    let mut rendered = match spec.conversion {
        'd' => {
            let (negative, magnitude) = match *arg {
                Arg::Int { value, .. } => (value < 0, value.unsigned_abs()),
                Arg::UInt(v) => (false, v),
                _ => return Err(illegal()),
            };
            let digits = magnitude.to_string();
            Rendered {
                lead: sign(negative, spec.flags).to_string(),
                body: if spec.flags.group {
                    group_thousands(&digits)
                } else {
                    digits
                },
                numeric: true,
            }
        }
        'x' | 'X' | 'o' => {
            let hex = spec.conversion != 'o';
            let bits = match *arg {
                Arg::Int { value, bits } => two_complement(value, bits),
                Arg::UInt(v) => v,
                _ => return Err(illegal()),
            };
            let body = if hex {
                format!("{bits:x}")
            } else {
                format!("{bits:o}")
            };
            let lead = match (spec.flags.alternate, hex) {
                (true, true) => "0x",
                (true, false) => "0",
                (false, _) => "",
            };
            Rendered {
                lead: lead.to_string(),
                body,
                numeric: true,
            }
        }
        'f' | 'e' | 'E' => {
            let v = match *arg {
                Arg::Float(v) => v,
                Arg::F32(v) => f64::from(v),
                _ => return Err(illegal()),
            };
            let precision = spec.precision.unwrap_or(6);
            let body = if v.is_nan() {
                "NaN".to_string()
            } else if v.is_infinite() {
                "Infinity".to_string()
            } else if spec.conversion == 'f' {
                let fixed = format!("{:.*}", precision, v.abs());
                if spec.flags.group {
                    group_fraction(&fixed)
                } else {
                    fixed
                }
            } else {
                scientific(v.abs(), precision)
            };
            Rendered {
                lead: sign(v.is_sign_negative() && !v.is_nan(), spec.flags).to_string(),
                body,
                numeric: v.is_finite(),
            }
        }
        's' | 'S' => {
            let text = match *arg {
                Arg::Int { value, .. } => value.to_string(),
                Arg::UInt(v) => v.to_string(),
                Arg::Float(v) => format!("{v:?}"),
                Arg::F32(v) => format!("{v:?}"),
                Arg::Bool(v) => v.to_string(),
                Arg::Char(v) => v.to_string(),
                Arg::Str(v) => v.to_string(),
                Arg::Display(v) => v.to_string(),
            };
            Rendered::text(match spec.precision {
                Some(max) => text.chars().take(max).collect(),
                None => text,
            })
        }
        'c' => {
            let c = match *arg {
                Arg::Char(c) => Some(c),
                Arg::Int { value, .. } => u32::try_from(value).ok().and_then(char::from_u32),
                Arg::UInt(v) => u32::try_from(v).ok().and_then(char::from_u32),
                _ => None,
            };
            Rendered::text(c.ok_or_else(illegal)?.to_string())
        }
        'b' | 'B' => Rendered::text(match *arg {
            Arg::Bool(v) => v.to_string(),
            _ => "true".to_string(),
        }),
        other => return Err(FormatError::UnknownConversion(other)),
    };

    if spec.conversion.is_ascii_uppercase() {
        rendered.lead = rendered.lead.to_uppercase();
        rendered.body = rendered.body.to_uppercase();
    }
    Ok(rendered)
}

// -1 as an i8 is 0xff, not 0xffff_ffff_ffff_ffff
fn two_complement(value: i64, bits: u32) -> u64 {
    if bits >= 64 {
        value as u64
    } else {
        (value as u64) & ((1u64 << bits) - 1)
    }
}

fn sign(negative: bool, flags: Flags) -> &'static str {
    if negative {
        "-"
    } else if flags.plus {
        "+"
    } else if flags.space {
        " "
    } else {
        ""
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn group_fraction(fixed: &str) -> String {
    match fixed.split_once('.') {
        Some((whole, fraction)) => format!("{}.{}", group_thousands(whole), fraction),
        None => group_thousands(fixed),
    }
}

// 12345.678 with precision 2 -> "1.23e+04"
fn scientific(v: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, v);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
        None => raw,
    }
}

fn push_padded(out: &mut String, spec: &Specifier, rendered: Rendered) {
    let len = rendered.lead.chars().count() + rendered.body.chars().count();
    let fill = spec.width.map_or(0, |w| w.saturating_sub(len));

    if spec.flags.left {
        out.push_str(&rendered.lead);
        out.push_str(&rendered.body);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if spec.flags.zero && rendered.numeric {
        out.push_str(&rendered.lead);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(&rendered.body);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(&rendered.lead);
        out.push_str(&rendered.body);
    }
}
