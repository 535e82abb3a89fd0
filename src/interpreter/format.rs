/// An argument handed to one of the output primitives.
///
/// The built-in dispatcher decides which variant to forward based on the
/// static kind of the argument expression and the variable's qualifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    /// A plain `int`.
    Int(i32),
    /// An `unsigned int`.
    Unsigned(u32),
    /// An `unsigned long`, forwarded for `%lu`.
    UnsignedLong(u64),
    /// A `float`, promoted to double when rendered.
    Float(f32),
    /// A `double`.
    Double(f64),
    /// A string, used for `%s` and the `W`/`L` boolean rendering.
    Str(String),
}

impl FormatArg {
    #[allow(clippy::cast_possible_truncation)]
    fn as_i64(&self) -> i64 {
        match self {
            Self::Int(v) => i64::from(*v),
            Self::Unsigned(v) => i64::from(*v),
            Self::UnsignedLong(v) => i64::from_ne_bytes(v.to_ne_bytes()),
            Self::Float(v) => f64::from(*v) as i64,
            Self::Double(v) => *v as i64,
            Self::Str(_) => 0,
        }
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn as_u64(&self, long: bool) -> u64 {
        match self {
            Self::Int(v) if long => i64::from(*v) as u64,
            Self::Int(v) => u64::from(*v as u32),
            Self::Unsigned(v) => u64::from(*v),
            Self::UnsignedLong(v) => *v,
            Self::Float(v) => f64::from(*v) as u64,
            Self::Double(v) => *v as u64,
            Self::Str(_) => 0,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_f64(&self) -> f64 {
        match self {
            Self::Int(v) => f64::from(*v),
            Self::Unsigned(v) => f64::from(*v),
            Self::UnsignedLong(v) => *v as f64,
            Self::Float(v) => f64::from(*v),
            Self::Double(v) => *v,
            Self::Str(_) => 0.0,
        }
    }
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::UnsignedLong(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

/// A parsed conversion specification such as `%-08.3lf`.
#[derive(Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
struct Spec {
    left:      bool,
    plus:      bool,
    space:     bool,
    zero:      bool,
    alternate: bool,
    width:     usize,
    precision: Option<usize>,
    long:      bool,
}

/// Renders a printf-style format string with at most one argument.
///
/// The first conversion consumes `arg`; any later conversion renders as an
/// empty string. `%%` renders a literal percent sign. Unknown conversions are
/// copied through unchanged.
///
/// Supported conversions: `d i u x X o c f F e E g G s`, with the flags
/// `- + 0 space #`, a width, a precision and the length modifiers
/// `hh h l ll L z j t`.
///
/// ## Example
/// ```
/// use brainrot::interpreter::format::{FormatArg, render};
///
/// assert_eq!(render("%d\n", Some(&FormatArg::Int(42))), "42\n");
/// assert_eq!(render("x = %5.2f|", Some(&FormatArg::Double(3.14159))), "x =  3.14|");
/// assert_eq!(render("%u", Some(&FormatArg::Int(-1))), "4294967295");
/// assert_eq!(render("100%%", None), "100%");
/// ```
#[must_use]
pub fn render(format: &str, arg: Option<&FormatArg>) -> String {
    String::from_utf8_lossy(&render_bytes(format, arg)).into_owned()
}

/// Renders like [`render`], but keeps the output as raw bytes.
///
/// `%c` writes its argument as a single byte, so values from 128 to 255 are
/// not valid UTF-8 on their own. [`render`] replaces such bytes; hosts writing
/// to a byte stream use this function instead.
///
/// ## Example
/// ```
/// use brainrot::interpreter::format::{FormatArg, render_bytes};
///
/// assert_eq!(render_bytes("[%c]", Some(&FormatArg::Int(200))), vec![b'[', 200, b']']);
/// ```
#[must_use]
pub fn render_bytes(format: &str, arg: Option<&FormatArg>) -> Vec<u8> {
    let mut out = Vec::with_capacity(format.len() + 8);
    let mut chars = format.chars().peekable();
    let mut pending = arg;

    while let Some(c) = chars.next() {
        if c != '%' {
            push_char(&mut out, c);
            continue;
        }

        let mut raw = String::from("%");
        let mut spec = Spec::default();

        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.left = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '0' => spec.zero = true,
                '#' => spec.alternate = true,
                _ => break,
            }
            raw.push(flag);
            chars.next();
        }
        spec.width = take_number(&mut chars, &mut raw).unwrap_or(0);
        if chars.peek() == Some(&'.') {
            raw.push('.');
            chars.next();
            spec.precision = Some(take_number(&mut chars, &mut raw).unwrap_or(0));
        }
        while let Some(&length) = chars.peek() {
            match length {
                'l' | 'L' | 'j' | 'z' | 't' => spec.long = true,
                'h' => {},
                _ => break,
            }
            raw.push(length);
            chars.next();
        }

        let Some(conversion) = chars.next() else {
            out.extend_from_slice(raw.as_bytes());
            break;
        };

        if conversion == '%' {
            out.push(b'%');
            continue;
        }
        if !"diuxXocfFeEgGs".contains(conversion) {
            out.extend_from_slice(raw.as_bytes());
            push_char(&mut out, conversion);
            continue;
        }

        match pending.take() {
            Some(value) if conversion == 'c' => out.extend(convert_char(&spec, value)),
            Some(value) => out.extend_from_slice(convert(conversion, &spec, value).as_bytes()),
            None => {},
        }
    }

    out
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

/// `%c`: the low byte of the argument, padded with spaces.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn convert_char(spec: &Spec, value: &FormatArg) -> Vec<u8> {
    let byte = value.as_i64() as u8;
    let fill = vec![b' '; spec.width.saturating_sub(1)];
    if spec.left {
        [vec![byte], fill].concat()
    } else {
        [fill, vec![byte]].concat()
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
               raw: &mut String)
               -> Option<usize> {
    let mut digits = String::new();
    while let Some(&d) = chars.peek() {
        if !d.is_ascii_digit() {
            break;
        }
        digits.push(d);
        raw.push(d);
        chars.next();
    }
    digits.parse().ok()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn convert(conversion: char, spec: &Spec, value: &FormatArg) -> String {
    match conversion {
        'd' | 'i' => {
            let v = value.as_i64();
            let digits = apply_int_precision(v.unsigned_abs().to_string(), spec);
            pad_numeric(&digits, sign_of(v < 0, spec), spec, spec.precision.is_none())
        },
        'u' => {
            let digits = apply_int_precision(value.as_u64(spec.long).to_string(), spec);
            pad_numeric(&digits, "", spec, spec.precision.is_none())
        },
        'x' | 'X' | 'o' => {
            let v = value.as_u64(spec.long);
            let mut digits = match conversion {
                'x' => format!("{v:x}"),
                'X' => format!("{v:X}"),
                _ => format!("{v:o}"),
            };
            digits = apply_int_precision(digits, spec);
            let prefix = match conversion {
                _ if !spec.alternate || v == 0 => "",
                'x' => "0x",
                'X' => "0X",
                _ => "0",
            };
            pad_numeric(&digits, prefix, spec, spec.precision.is_none())
        },
        's' => {
            let text = value.to_string();
            let text = match spec.precision {
                Some(p) => text.chars().take(p).collect(),
                None => text,
            };
            pad_text(&text, spec)
        },
        _ => {
            let v = value.as_f64();
            let upper = conversion.is_ascii_uppercase();
            if !v.is_finite() {
                let body = if v.is_nan() { "nan" } else { "inf" };
                let body = if upper { body.to_uppercase() } else { body.to_string() };
                return pad_numeric(&body,
                                   sign_of(v.is_sign_negative() && !v.is_nan(), spec),
                                   spec,
                                   false);
            }
            let precision = spec.precision.unwrap_or(6);
            let body = match conversion.to_ascii_lowercase() {
                'f' => format!("{:.*}", precision, v.abs()),
                'e' => exponential(v.abs(), precision),
                _ => general(v.abs(), precision, spec.alternate),
            };
            let body = if upper { body.to_uppercase() } else { body };
            pad_numeric(&body, sign_of(v.is_sign_negative(), spec), spec, true)
        },
    }
}

const fn sign_of(negative: bool, spec: &Spec) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

fn apply_int_precision(digits: String, spec: &Spec) -> String {
    match spec.precision {
        Some(0) if digits == "0" => String::new(),
        Some(p) if digits.len() < p => format!("{}{digits}", "0".repeat(p - digits.len())),
        _ => digits,
    }
}

fn pad_numeric(body: &str, prefix: &str, spec: &Spec, zero_allowed: bool) -> String {
    let len = body.len() + prefix.len();
    if len >= spec.width {
        return format!("{prefix}{body}");
    }
    let fill = spec.width - len;
    if spec.left {
        format!("{prefix}{body}{}", " ".repeat(fill))
    } else if spec.zero && zero_allowed {
        format!("{prefix}{}{body}", "0".repeat(fill))
    } else {
        format!("{}{prefix}{body}", " ".repeat(fill))
    }
}

fn pad_text(text: &str, spec: &Spec) -> String {
    let len = text.chars().count();
    if len >= spec.width {
        return text.to_string();
    }
    let fill = " ".repeat(spec.width - len);
    if spec.left {
        format!("{text}{fill}")
    } else {
        format!("{fill}{text}")
    }
}

/// `%e` body for a non-negative finite value: `d.ddddde±XX`.
fn exponential(v: f64, precision: usize) -> String {
    let formatted = format!("{v:.precision$e}");
    let (mantissa, exponent) = formatted.split_once('e')
                                        .unwrap_or((formatted.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// `%g` body for a non-negative finite value.
fn general(v: f64, precision: usize, alternate: bool) -> String {
    let p = precision.max(1);
    let probe = format!("{v:.prec$e}", prec = p - 1);
    let exponent: i64 = probe.split_once('e')
                             .and_then(|(_, e)| e.parse().ok())
                             .unwrap_or(0);

    let p = i64::try_from(p).unwrap_or(i64::MAX);
    let body = if exponent < -4 || exponent >= p {
        exponential(v, usize::try_from(p - 1).unwrap_or(0))
    } else {
        format!("{v:.prec$}", prec = usize::try_from(p - 1 - exponent).unwrap_or(0))
    };

    if alternate {
        return body;
    }
    strip_trailing_zeros(&body)
}

fn strip_trailing_zeros(body: &str) -> String {
    let (mantissa, suffix) = match body.find('e') {
        Some(pos) => body.split_at(pos),
        None => (body, ""),
    };
    if !mantissa.contains('.') {
        return body.to_string();
    }
    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_integers_with_flags() {
        assert_eq!(render("[%5d]", Some(&FormatArg::Int(42))), "[   42]");
        assert_eq!(render("[%-5d]", Some(&FormatArg::Int(42))), "[42   ]");
        assert_eq!(render("[%05d]", Some(&FormatArg::Int(-42))), "[-0042]");
        assert_eq!(render("[%+d]", Some(&FormatArg::Int(7))), "[+7]");
        assert_eq!(render("[%.3d]", Some(&FormatArg::Int(7))), "[007]");
    }

    #[test]
    fn renders_unsigned_and_hex() {
        assert_eq!(render("%lu", Some(&FormatArg::UnsignedLong(5_000_000_000))), "5000000000");
        assert_eq!(render("%x", Some(&FormatArg::Int(255))), "ff");
        assert_eq!(render("%#X", Some(&FormatArg::Int(255))), "0XFF");
        assert_eq!(render("%o", Some(&FormatArg::Int(8))), "10");
    }

    #[test]
    fn renders_floats() {
        assert_eq!(render("%f", Some(&FormatArg::Float(1.5))), "1.500000");
        assert_eq!(render("%.2lf", Some(&FormatArg::Double(2.0 / 3.0))), "0.67");
        assert_eq!(render("%e", Some(&FormatArg::Double(12345.678))), "1.234568e+04");
        assert_eq!(render("%g", Some(&FormatArg::Double(0.0001))), "0.0001");
        assert_eq!(render("%g", Some(&FormatArg::Double(1_000_000.0))), "1e+06");
        assert_eq!(render("%g", Some(&FormatArg::Double(3.5))), "3.5");
        assert_eq!(render("%f", Some(&FormatArg::Double(f64::NAN))), "nan");
        assert_eq!(render("%f", Some(&FormatArg::Double(-0.5))), "-0.500000");
    }

    #[test]
    fn renders_strings_and_chars() {
        assert_eq!(render("%s!", Some(&FormatArg::Str("W".into()))), "W!");
        assert_eq!(render("[%3s]", Some(&FormatArg::Str("a".into()))), "[  a]");
        assert_eq!(render("%.2s", Some(&FormatArg::Str("abc".into()))), "ab");
        assert_eq!(render("%c", Some(&FormatArg::Int(65))), "A");
        assert_eq!(render("[%-3c]", Some(&FormatArg::Int(66))), "[B  ]");
    }

    #[test]
    fn high_chars_are_single_bytes() {
        assert_eq!(render_bytes("%c", Some(&FormatArg::Int(233))), vec![233]);
        assert_eq!(render_bytes("%2c", Some(&FormatArg::Int(128))), vec![b' ', 128]);
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        assert_eq!(render("%f", Some(&FormatArg::Double(-0.0))), "-0.000000");
        assert_eq!(render("%.1f", Some(&FormatArg::Float(-0.0))), "-0.0");
        assert_eq!(render("%f", Some(&FormatArg::Double(0.0))), "0.000000");
    }

    #[test]
    fn only_the_first_conversion_consumes_the_argument() {
        assert_eq!(render("%d and %d", Some(&FormatArg::Int(1))), "1 and ");
        assert_eq!(render("no args %d", None), "no args ");
        assert_eq!(render("%q stays", None), "%q stays");
        assert_eq!(render("trailing %", None), "trailing %");
    }
}
