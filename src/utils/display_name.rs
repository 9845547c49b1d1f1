use serde_json::{Number, Value};

pub const DEFAULT_NAME: &str = "friend";

/// Resolves whatever arrived in `name` into the string that is greeted.
///
/// Absent and "falsy" values (`null`, `""`, `false`, zero) fall back to
/// [`DEFAULT_NAME`]. Everything else renders the way a JavaScript client
/// would stringify it: strings verbatim, `42.0` as `42`, `1e21` as `1e+21`,
/// arrays joined with `,` and objects as `[object Object]`.
pub fn to_display_name(value: Option<&Value>) -> String {
    match value {
        Some(value) if !is_falsy(value) => render(value),
        _ => DEFAULT_NAME.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => render_number(n),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(render).collect();
            parts.join(",")
        }
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn render_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) => render_float(f),
        None => n.to_string(),
    }
}

/// Plain decimal in `[1e-6, 1e21)`, exponent form with an explicit sign outside it
fn render_float(f: f64) -> String {
    let magnitude = f.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        // `{:e}` already picks the shortest mantissa, e.g. `1.5e-7`
        let formatted = format!("{:e}", f);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        // f64's Display already omits a zero fraction, unlike Number's
        f.to_string()
    }
}
