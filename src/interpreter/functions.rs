use std::f64::consts::PI;

/// Largest `n` for which `n!` still fits in an `f64`.
const MAX_EXACT_FACTORIAL: f64 = 170.0;

/// Lanczos approximation constant `g`.
const LANCZOS_G: f64 = 7.0;

/// Lanczos coefficients for `g = 7`, `n = 9`.
const LANCZOS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Looks up a built-in unary function by name.
///
/// The registry is fixed: the trigonometric family and its inverses, the
/// hyperbolic family and its inverses, `abs`, `sqrt`, `ln` (natural
/// logarithm), `log` (base 10), and `exp`.
///
/// # Examples
/// ```
/// use numera::interpreter::functions::lookup;
///
/// let sqrt = lookup("sqrt").unwrap();
/// assert_eq!(sqrt(9.0), 3.0);
///
/// assert!(lookup("frobnicate").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<fn(f64) -> f64> {
    let function = match name {
        "sin" => f64::sin as fn(f64) -> f64,
        "cos" => f64::cos,
        "tan" => f64::tan,
        "arcsin" => f64::asin,
        "arccos" => f64::acos,
        "arctan" => f64::atan,
        "sinh" => f64::sinh,
        "cosh" => f64::cosh,
        "tanh" => f64::tanh,
        "arcsinh" => f64::asinh,
        "arccosh" => f64::acosh,
        "arctanh" => f64::atanh,
        "abs" => f64::abs,
        "sqrt" => f64::sqrt,
        "ln" => f64::ln,
        "log" => f64::log10,
        "exp" => f64::exp,
        _ => return None,
    };

    Some(function)
}

/// Whether `name` denotes a built-in function.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    lookup(name).is_some()
}

/// Whether `name` denotes a seeded named constant.
#[must_use]
pub fn is_constant(name: &str) -> bool {
    matches!(name, "pi" | "e")
}

/// Whether `name` may not be used as an assignment target.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    is_constant(name) || is_builtin(name)
}

/// The gamma function, via the Lanczos approximation.
///
/// Arguments below one half go through the reflection formula
/// `Γ(x) = π / (sin(πx) · Γ(1 − x))`, which also produces the expected
/// poles at non-positive integers.
#[must_use]
pub fn gamma(x: f64) -> f64 {
    if x < 0.5 {
        return PI / ((PI * x).sin() * gamma(1.0 - x));
    }

    let x = x - 1.0;
    let mut series = LANCZOS[0];
    for (i, coefficient) in LANCZOS.iter().enumerate().skip(1) {
        series += coefficient / (x + i as f64);
    }

    let t = x + LANCZOS_G + 0.5;
    (2.0 * PI).sqrt() * t.powf(x + 0.5) * (-t).exp() * series
}

/// The generalized factorial `x! = Γ(x + 1)`.
///
/// Non-negative integer arguments up to 170 take an exact iterative
/// product, so `5!` is precisely `120`; everything else falls back to the
/// gamma function.
///
/// # Examples
/// ```
/// use numera::interpreter::functions::factorial;
///
/// assert_eq!(factorial(5.0), 120.0);
/// assert_eq!(factorial(0.0), 1.0);
/// ```
#[must_use]
pub fn factorial(x: f64) -> f64 {
    if x >= 0.0 && x <= MAX_EXACT_FACTORIAL && x.fract() == 0.0 {
        let mut product = 1.0;
        let mut n = 2.0;
        while n <= x {
            product *= n;
            n += 1.0;
        }
        return product;
    }

    gamma(x + 1.0)
}
