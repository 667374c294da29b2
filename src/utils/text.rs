//! Sanitizing user-supplied text before it is painted on the terminal.
//!
//! Task titles and descriptions come from the store and may contain anything.
//! Escape sequences would be interpreted by the terminal (moving the cursor,
//! changing the window title...), so they are removed along with other
//! control characters and bidi overrides that can visually reorder text.

/// Sanitize text that must fit on one line; line breaks become spaces.
pub fn sanitize_inline(text: &str) -> String {
    sanitize(text, false)
}

/// Sanitize text that may span several lines; `\n` is kept.
pub fn sanitize_multiline(text: &str) -> String {
    sanitize(text, true)
}

fn sanitize(text: &str, keep_newlines: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\u{1b}' => skip_escape_sequence(&mut chars),
            '\n' if keep_newlines => out.push('\n'),
            '\n' | '\t' => out.push(' '),
            '\r' => {}
            c if is_bidi_control(c) => {}
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    out
}

/// Consume the remainder of an escape sequence whose ESC was already read.
fn skip_escape_sequence(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    match chars.peek() {
        // CSI: parameters and intermediates, then one final byte in 0x40..=0x7e
        Some('[') => {
            chars.next();
            for c in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&c) {
                    break;
                }
            }
        }
        // OSC/DCS/APC/PM/SOS: terminated by BEL or ST (ESC \)
        Some(']' | 'P' | '_' | '^' | 'X') => {
            chars.next();
            while let Some(c) = chars.next() {
                if c == '\u{07}' {
                    break;
                }
                if c == '\u{1b}' && chars.peek() == Some(&'\\') {
                    chars.next();
                    break;
                }
            }
        }
        // Two-character escape
        Some(_) => {
            chars.next();
        }
        None => {}
    }
}

fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}' | '\u{200e}' | '\u{200f}')
}
