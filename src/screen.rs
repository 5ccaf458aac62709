//! Screen definition and the outbound datastream builder.
//!
//! A [`Screen`] is an ordered list of [`Field`]s. Presenting one builds a
//! single 3270 write datastream: the command byte, a WCC, one SBA + Start
//! Field (or Start Field Extended) per field with its encoded content, an
//! optional Insert Cursor, and the closing `IAC EOR`. No overlap checking is
//! done; later fields simply overlay earlier ones on the client.
//!
//! While building, the writer records where each writable field's data
//! begins, producing the fieldmap the response reader uses to put names
//! back on inbound buffer addresses.

use std::collections::HashMap;

use bytes::{BufMut, BytesMut};
use log::{debug, warn};

use crate::datastream::{
    put_address, ADDRESS_CODES, CMD_ERASE_WRITE, CMD_ERASE_WRITE_ALTERNATE, CMD_WRITE, ORDER_IC,
    ORDER_SBA, ORDER_SF, ORDER_SFE, WCC_RESET_UNLOCK, WCC_UNLOCK, XA_BASIC, XA_FOREGROUND,
    XA_HIGHLIGHTING,
};
use crate::ebcdic::Codepage;
use crate::telnet::EOR_MARK;
use crate::Result;

/// Extended field colors. [`Color::Default`] leaves the choice to the
/// terminal and keeps the field on the plain Start Field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Blue,
    Red,
    Pink,
    Green,
    Turquoise,
    Yellow,
    White,
}

impl Color {
    pub(crate) fn to_byte(self) -> u8 {
        match self {
            Color::Default => 0x00,
            Color::Blue => 0xF1,
            Color::Red => 0xF2,
            Color::Pink => 0xF3,
            Color::Green => 0xF4,
            Color::Turquoise => 0xF5,
            Color::Yellow => 0xF6,
            Color::White => 0xF7,
        }
    }
}

/// Extended field highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Default,
    Blink,
    ReverseVideo,
    Underscore,
}

impl Highlight {
    pub(crate) fn to_byte(self) -> u8 {
        match self {
            Highlight::Default => 0x00,
            Highlight::Blink => 0xF1,
            Highlight::ReverseVideo => 0xF2,
            Highlight::Underscore => 0xF4,
        }
    }
}

/// One field on the screen.
///
/// `row` and `col` are the 0-based position of the field *attribute* byte;
/// the field's data begins one position later. Writable fields need a
/// non-empty, per-screen-unique `name` to be readable back.
#[derive(Debug, Clone, Default)]
pub struct Field {
    pub row: u16,
    pub col: u16,
    /// Default content, encoded through the active code page.
    pub content: String,
    /// User-editable.
    pub write: bool,
    /// Protected fields only: the cursor skips over this field.
    pub autoskip: bool,
    /// High-intensity display.
    pub intense: bool,
    /// Non-display: the client renders nothing (passwords).
    pub hidden: bool,
    /// Writable fields only: the client restricts input to digits.
    pub numeric: bool,
    pub color: Color,
    pub highlight: Highlight,
    /// Key under which the response reader files this field's value.
    pub name: String,
    /// Keep surrounding whitespace instead of trimming it from the
    /// response value.
    pub keep_spaces: bool,
}

impl Field {
    /// A protected text label.
    pub fn text(row: u16, col: u16, content: impl Into<String>) -> Field {
        Field {
            row,
            col,
            content: content.into(),
            ..Field::default()
        }
    }

    /// An editable input field.
    pub fn input(row: u16, col: u16, name: impl Into<String>) -> Field {
        Field {
            row,
            col,
            write: true,
            name: name.into(),
            ..Field::default()
        }
    }
}

/// An ordered set of fields making up one panel.
pub type Screen = Vec<Field>;

/// Callback run after the screen bytes are written and before the response
/// is read; returning an error aborts the call and surfaces as
/// [`Error::Callback`](crate::Error::Callback).
pub type PostSendCallback =
    Box<dyn FnOnce() -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> + Send>;

/// Per-call options for [`Terminal::show_screen`](crate::Terminal::show_screen).
#[derive(Default)]
pub struct ScreenOpts {
    /// Use the negotiated alternate dimensions instead of 24×80.
    pub alt_screen: bool,
    /// Write the screen and return immediately without reading a response.
    pub no_response: bool,
    /// Emit a plain Write instead of Erase/Write: update fields in place
    /// without clearing, keeping the terminal's MDT state.
    pub no_clear: bool,
    pub cursor_row: u16,
    pub cursor_col: u16,
    /// Code page for this call only; overrides the per-connection page and
    /// the process default.
    pub codepage: Option<Codepage>,
    pub post_send: Option<PostSendCallback>,
}

impl ScreenOpts {
    /// Set the cursor position, builder-style.
    pub fn cursor(mut self, row: u16, col: u16) -> Self {
        self.cursor_row = row;
        self.cursor_col = col;
        self
    }
}

impl std::fmt::Debug for ScreenOpts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenOpts")
            .field("alt_screen", &self.alt_screen)
            .field("no_response", &self.no_response)
            .field("no_clear", &self.no_clear)
            .field("cursor_row", &self.cursor_row)
            .field("cursor_col", &self.cursor_col)
            .field("codepage", &self.codepage)
            .field("post_send", &self.post_send.is_some())
            .finish()
    }
}

/// Buffer address of a field's first data position → field name.
pub(crate) type FieldMap = HashMap<u16, String>;

/// Encode the basic field attribute byte: protection, intensity,
/// visibility, numeric shift, and MDT, substituted through the address code
/// table so the top bits come out right.
fn field_attribute(field: &Field) -> u8 {
    let mut attr = 0u8;
    if field.write {
        attr |= 0x01; // MDT: writable fields always transmit back
        if field.numeric {
            attr |= 0x10;
        }
    } else {
        attr |= 0x20;
        if field.autoskip {
            attr |= 0x10;
        }
    }
    if field.hidden {
        attr |= 0x0C;
    } else if field.intense {
        attr |= 0x08;
    }
    ADDRESS_CODES[(attr & 0x3F) as usize]
}

/// Build the complete write datastream for a screen.
///
/// Fields outside the `rows` × `cols` area are dropped with a debug log.
/// Returns the bytes and the fieldmap for the response reader.
pub(crate) fn build_screen(
    fields: &[Field],
    values: Option<&HashMap<String, String>>,
    opts: &ScreenOpts,
    rows: u16,
    cols: u16,
    codepage: Codepage,
) -> Result<(BytesMut, FieldMap)> {
    let clear = !opts.no_clear;
    let mut buf = BytesMut::with_capacity(1024);
    let mut fieldmap = FieldMap::new();

    buf.put_u8(match (clear, opts.alt_screen) {
        (true, true) => CMD_ERASE_WRITE_ALTERNATE,
        (true, false) => CMD_ERASE_WRITE,
        (false, _) => CMD_WRITE,
    });
    // Without a clear, leave MDT alone so pre-populated values the user
    // never touched still come back on the next read.
    buf.put_u8(if clear { WCC_RESET_UNLOCK } else { WCC_UNLOCK });

    for field in fields {
        if field.row >= rows || field.col >= cols {
            debug!(
                "dropping field at ({}, {}) outside {}x{} screen",
                field.row, field.col, rows, cols
            );
            continue;
        }
        let addr = field.row as u32 * cols as u32 + field.col as u32;
        buf.put_u8(ORDER_SBA);
        put_address(&mut buf, addr)?;

        let basic = field_attribute(field);
        if field.color == Color::Default && field.highlight == Highlight::Default {
            buf.put_u8(ORDER_SF);
            buf.put_u8(basic);
        } else {
            let pairs =
                1 + u8::from(field.highlight != Highlight::Default) + u8::from(field.color != Color::Default);
            buf.put_u8(ORDER_SFE);
            buf.put_u8(pairs);
            buf.put_u8(XA_BASIC);
            buf.put_u8(basic);
            if field.highlight != Highlight::Default {
                buf.put_u8(XA_HIGHLIGHTING);
                buf.put_u8(field.highlight.to_byte());
            }
            if field.color != Color::Default {
                buf.put_u8(XA_FOREGROUND);
                buf.put_u8(field.color.to_byte());
            }
        }

        let content = values
            .filter(|_| !field.name.is_empty())
            .and_then(|m| m.get(&field.name))
            .unwrap_or(&field.content);
        if !content.is_empty() {
            buf.extend_from_slice(&codepage.encode(content));
        }

        if field.write {
            if field.name.is_empty() {
                warn!(
                    "writable field at ({}, {}) has no name and cannot be read back",
                    field.row, field.col
                );
            } else {
                // The client reports the first data position, one past the
                // attribute byte.
                fieldmap.insert(addr as u16 + 1, field.name.clone());
            }
        }
    }

    if clear {
        let crow = if opts.cursor_row < rows { opts.cursor_row } else { 0 };
        let ccol = if opts.cursor_col < cols { opts.cursor_col } else { 0 };
        buf.put_u8(ORDER_SBA);
        put_address(&mut buf, crow as u32 * cols as u32 + ccol as u32)?;
        buf.put_u8(ORDER_IC);
    }

    buf.extend_from_slice(&EOR_MARK);
    Ok((buf, fieldmap))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(fields: &[Field], opts: &ScreenOpts) -> (Vec<u8>, FieldMap) {
        let (buf, map) =
            build_screen(fields, None, opts, 24, 80, crate::ebcdic::cp1047()).unwrap();
        (buf.to_vec(), map)
    }

    #[test]
    fn protected_screen_has_empty_fieldmap() {
        let fields = vec![Field::text(0, 0, "TITLE"), Field::text(1, 0, "label")];
        let (_, map) = build(&fields, &ScreenOpts::default());
        assert!(map.is_empty());
    }

    #[test]
    fn writable_fields_map_their_data_position() {
        let fields = vec![
            Field::input(0, 0, "a"),
            Field::input(11, 39, "b"),
            Field::text(5, 5, "x"),
        ];
        let (_, map) = build(&fields, &ScreenOpts::default());
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&1).map(String::as_str), Some("a"));
        assert_eq!(map.get(&(11 * 80 + 39 + 1)).map(String::as_str), Some("b"));
    }

    #[test]
    fn emits_erase_write_and_reset_wcc_when_clearing() {
        let (buf, _) = build(&[], &ScreenOpts::default());
        assert_eq!(&buf[..2], &[0xF5, 0xC3]);
        assert_eq!(&buf[buf.len() - 2..], &[0xFF, 0xEF]);
    }

    #[test]
    fn emits_plain_write_and_keeps_mdt_without_clear() {
        let opts = ScreenOpts {
            no_clear: true,
            ..ScreenOpts::default()
        };
        let (buf, _) = build(&[], &opts);
        assert_eq!(&buf[..2], &[0xF1, 0xC2]);
        // No Insert Cursor on a partial update.
        assert!(!buf.windows(1).any(|w| w == [0x13]));
    }

    #[test]
    fn alternate_clear_uses_erase_write_alternate() {
        let opts = ScreenOpts {
            alt_screen: true,
            ..ScreenOpts::default()
        };
        let (buf, _) = build(&[], &opts);
        assert_eq!(buf[0], 0x7E);
    }

    #[test]
    fn simple_field_stream_layout() {
        let fields = vec![Field::text(0, 0, "AB")];
        let (buf, _) = build(&fields, &ScreenOpts::default());
        assert_eq!(
            buf,
            vec![
                0xF5, 0xC3, // Erase/Write, WCC
                0x11, 0x40, 0x40, // SBA (0,0)
                0x1D, 0x60, // SF, protected attribute (0x20 coded)
                0xC1, 0xC2, // "AB" in EBCDIC
                0x11, 0x40, 0x40, 0x13, // cursor at (0,0)
                0xFF, 0xEF, // EOR
            ]
        );
    }

    #[test]
    fn attribute_bits_cover_flags() {
        // Writable numeric: MDT + numeric = 0x11 -> coded 0xD1.
        let f = Field {
            write: true,
            numeric: true,
            name: "n".into(),
            ..Field::default()
        };
        assert_eq!(field_attribute(&f), ADDRESS_CODES[0x11]);

        // Protected autoskip intense: 0x20 | 0x10 | 0x08 = 0x38.
        let f = Field {
            autoskip: true,
            intense: true,
            ..Field::default()
        };
        assert_eq!(field_attribute(&f), ADDRESS_CODES[0x38]);

        // Hidden wins over intense: 0x20 | 0x0C = 0x2C.
        let f = Field {
            hidden: true,
            intense: true,
            ..Field::default()
        };
        assert_eq!(field_attribute(&f), ADDRESS_CODES[0x2C]);

        // Writable field always carries MDT.
        let f = Field {
            write: true,
            name: "w".into(),
            ..Field::default()
        };
        assert_eq!(field_attribute(&f), ADDRESS_CODES[0x01]);
    }

    #[test]
    fn extended_attributes_use_sfe() {
        let fields = vec![Field {
            row: 1,
            col: 0,
            content: "X".into(),
            color: Color::Red,
            highlight: Highlight::Underscore,
            ..Field::default()
        }];
        let (buf, _) = build(&fields, &ScreenOpts::default());
        // SBA (1,0) = address 80.
        let want_prefix = [
            0xF5, 0xC3, 0x11, 0xC1, 0x50, // command, WCC, SBA
            0x29, 0x03, // SFE, 3 pairs
            0xC0, 0x60, // basic attribute (protected)
            0x41, 0xF4, // underscore
            0x42, 0xF2, // red
        ];
        assert_eq!(&buf[..want_prefix.len()], &want_prefix);
    }

    #[test]
    fn color_only_field_emits_two_pairs() {
        let fields = vec![Field {
            color: Color::Blue,
            ..Field::default()
        }];
        let (buf, _) = build(&fields, &ScreenOpts::default());
        assert_eq!(buf[5], 0x29);
        assert_eq!(buf[6], 0x02);
        assert_eq!(&buf[7..11], &[0xC0, 0x60, 0x42, 0xF1]);
    }

    #[test]
    fn out_of_bounds_fields_are_dropped() {
        let fields = vec![
            Field::text(24, 0, "below"),
            Field::text(0, 80, "right"),
            Field::input(23, 79, "ok"),
        ];
        let (_, map) = build(&fields, &ScreenOpts::default());
        assert_eq!(map.len(), 1);
        assert!(map.contains_key(&(23 * 80 + 79 + 1)));
    }

    #[test]
    fn values_override_field_content() {
        let fields = vec![Field {
            name: "greeting".into(),
            content: "default".into(),
            ..Field::default()
        }];
        let mut values = HashMap::new();
        values.insert("greeting".to_string(), "AB".to_string());
        let (buf, _) = build_screen(
            &fields,
            Some(&values),
            &ScreenOpts::default(),
            24,
            80,
            crate::ebcdic::cp1047(),
        )
        .unwrap();
        let buf = buf.to_vec();
        // "AB" in EBCDIC follows the SF pair; "default" is gone.
        assert_eq!(&buf[7..9], &[0xC1, 0xC2]);
        assert_eq!(buf.len(), 2 + 3 + 2 + 2 + 4 + 2);
    }

    #[test]
    fn unnamed_writable_field_stays_out_of_fieldmap() {
        let fields = vec![Field {
            write: true,
            ..Field::default()
        }];
        let (_, map) = build(&fields, &ScreenOpts::default());
        assert!(map.is_empty());
    }

    #[test]
    fn out_of_range_cursor_falls_back_to_origin() {
        let opts = ScreenOpts::default().cursor(30, 100);
        let (buf, _) = build(&[], &opts);
        assert_eq!(
            buf,
            vec![0xF5, 0xC3, 0x11, 0x40, 0x40, 0x13, 0xFF, 0xEF]
        );
    }

    #[test]
    fn cursor_position_is_honored() {
        let opts = ScreenOpts::default().cursor(11, 39);
        let (buf, _) = build(&[], &opts);
        assert_eq!(buf, vec![0xF5, 0xC3, 0x11, 0x4E, 0xD7, 0x13, 0xFF, 0xEF]);
    }

    #[test]
    fn alternate_dimensions_admit_wide_fields() {
        // (26, 131) is valid on a 27x132 model 5 screen.
        let fields = vec![Field::input(26, 131, "wide")];
        let (_, map) = build_screen(
            &fields,
            None,
            &ScreenOpts {
                alt_screen: true,
                ..ScreenOpts::default()
            },
            27,
            132,
            crate::ebcdic::cp1047(),
        )
        .unwrap();
        assert!(map.contains_key(&(26 * 132 + 131 + 1)));
    }
}
