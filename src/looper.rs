//! A validating loop over [`Terminal::show_screen`].
//!
//! [`handle_screen`] re-presents one screen until every rule passes and an
//! accepted key is pressed, writing error messages into a designated field
//! along the way. It is a convenience layer: applications with richer flow
//! control can drive `show_screen` directly.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::datastream::Aid;
use crate::ebcdic::Codepage;
use crate::response::Response;
use crate::screen::{Field, ScreenOpts};
use crate::terminal::Terminal;
use crate::Result;

/// Field input validation function.
pub type Validator = fn(&str) -> bool;

/// True when the input is non-empty after trimming whitespace.
pub fn non_blank(input: &str) -> bool {
    !input.trim().is_empty()
}

fn integer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern"))
}

/// True when the trimmed input is an integer (negative numbers and 0
/// included).
pub fn is_integer(input: &str) -> bool {
    integer_regex().is_match(input.trim())
}

/// Validation rules for one field.
#[derive(Clone, Default)]
pub struct FieldRules {
    /// The user must change the value from its default. On a field with no
    /// starting value this makes the field required.
    pub must_change: bool,
    /// Message shown when `must_change` fails; when empty, a message is
    /// built from the field name.
    pub error_text: String,
    /// Runs after the `must_change` check, if set.
    pub validator: Option<Validator>,
    /// Reset the field to its original value whenever the screen fails
    /// validation, discarding whatever the user typed.
    pub reset: bool,
}

/// Field name → rules. Fields without an entry are not validated.
pub type Rules = HashMap<String, FieldRules>;

/// Show `screen` until validation passes or the user exits.
///
/// Returns when a key in `pfkeys` is pressed and every rule is satisfied,
/// or unconditionally when a key in `exitkeys` is pressed. Short-read keys
/// (Clear, PA1-PA3) in `pfkeys` also return as-is, since they carry no
/// field data to validate. Any other key, or a failed rule, re-presents the
/// screen with a message in the `error_field` field, preserving what the
/// user already typed (except fields with `reset` set).
///
/// `alt_screen` and `codepage` are passed through to every
/// [`ScreenOpts`]; pass the connection's detected code page for correct
/// round trips with clients on national code pages.
#[allow(clippy::too_many_arguments)]
pub async fn handle_screen<R, W>(
    term: &mut Terminal<R, W>,
    screen: &[Field],
    rules: &Rules,
    values: Option<&HashMap<String, String>>,
    pfkeys: &[Aid],
    exitkeys: &[Aid],
    error_field: &str,
    cursor_row: u16,
    cursor_col: u16,
    alt_screen: bool,
    codepage: Option<Codepage>,
) -> Result<Response>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    // Original content of named fields, for must_change and reset.
    let mut original = HashMap::new();
    for field in screen {
        if !field.name.is_empty() {
            original.insert(field.name.clone(), field.content.clone());
        }
    }

    // Work on a private copy so the caller's overrides stay untouched.
    let mut current: HashMap<String, String> = values.cloned().unwrap_or_default();

    'present: loop {
        for (name, rule) in rules {
            if rule.reset {
                if let Some(value) = original.get(name) {
                    current.insert(name.clone(), value.clone());
                }
            }
        }

        let opts = ScreenOpts {
            alt_screen,
            codepage,
            ..ScreenOpts::default()
        }
        .cursor(cursor_row, cursor_col);
        let response = term.show_screen(screen, Some(&current), opts).await?;

        if exitkeys.contains(&response.aid) {
            return Ok(response);
        }

        if !pfkeys.contains(&response.aid) {
            if !response.aid.is_short_read() {
                merge_values(&mut current, &response.values);
            }
            current.insert(
                error_field.to_string(),
                format!("{}: unknown key", response.aid),
            );
            continue 'present;
        }

        // An accepted short-read key carries no data to validate.
        if response.aid.is_short_read() {
            return Ok(response);
        }

        merge_values(&mut current, &response.values);
        current.remove(error_field); // errors never persist across rounds

        for (name, rule) in rules {
            let Some(value) = current.get(name) else {
                continue; // rule for a field that is not on this screen
            };
            if rule.must_change && Some(value) == original.get(name) {
                let message = if rule.error_text.is_empty() {
                    format!("Please enter a valid value for {name}.")
                } else {
                    rule.error_text.clone()
                };
                current.insert(error_field.to_string(), message);
                continue 'present;
            }
            if let Some(validator) = rule.validator {
                if !validator(value) {
                    current.insert(
                        error_field.to_string(),
                        format!("Value for {name} is not valid"),
                    );
                    continue 'present;
                }
            }
        }

        return Ok(response);
    }
}

/// Overlay the freshly read values onto the carried ones. Values the client
/// did not transmit (unmodified protected fields) keep their carried value.
fn merge_values(current: &mut HashMap<String, String>, incoming: &HashMap<String, String>) {
    for (name, value) in incoming {
        current.insert(name.clone(), value.clone());
    }
}
