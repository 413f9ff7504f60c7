//! Engineering notation for entered values
//!
//! Lets prompts and command-line arguments accept `4.7k` or `100n` in place
//! of `4700` or `0.0000001`.

use std::fmt;
use std::str::FromStr;

/// A number optionally written with an SI prefix
///
/// # Parsing formats
/// - `1500`, `-2.5`, `1e-6` - plain numbers
/// - `4.7k`, `2.2M`, `1G` - kilo, mega, giga
/// - `10m`, `22u` or `22µ`, `100n`, `47p` - milli, micro, nano, pico
///
/// A trailing unit after the prefix (`4.7kΩ`, `100nF`) is ignored when it
/// is one of `Ω`, `ohm`, `F`, `V`, `A`, `Hz`, `s`.
///
/// # Example
/// ```
/// use engtoolkit::units::EngValue;
///
/// let r: EngValue = "4.7k".parse().unwrap();
/// assert_eq!(r.value(), 4700.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngValue(f64);

const UNIT_SUFFIXES: [&str; 8] = ["Ω", "ohms", "ohm", "Hz", "F", "V", "A", "s"];

const PREFIXES: [(&str, f64); 9] = [
    ("p", 1e-12),
    ("n", 1e-9),
    ("u", 1e-6),
    ("µ", 1e-6),
    ("μ", 1e-6),
    ("m", 1e-3),
    ("k", 1e3),
    ("M", 1e6),
    ("G", 1e9),
];

impl EngValue {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<EngValue> for f64 {
    fn from(v: EngValue) -> f64 {
        v.0
    }
}

impl fmt::Display for EngValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EngValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(v) = s.parse::<f64>() {
            return Ok(Self(v));
        }

        let without_unit = UNIT_SUFFIXES
            .iter()
            .find_map(|unit| s.strip_suffix(unit))
            .map(str::trim_end)
            .unwrap_or(s);

        if let Ok(v) = without_unit.parse::<f64>() {
            return Ok(Self(v));
        }

        for (prefix, scale) in PREFIXES {
            if let Some(num) = without_unit.strip_suffix(prefix) {
                let v: f64 = num
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid number: {}", s))?;
                return Ok(Self(v * scale));
            }
        }

        Err(format!("invalid number: {}", s))
    }
}
