//! Inbound data-stream parsing.
//!
//! A 3270 client transmits: one AID byte, the 2-byte cursor address, then
//! for each modified field an SBA order with the field's buffer address
//! followed by its EBCDIC data, terminated by `IAC EOR`. Clear and the PA
//! keys are "short reads" carrying the AID alone.

use std::collections::HashMap;

use log::debug;
use tokio::io::AsyncRead;

use crate::datastream::{decode_address, Aid, ORDER_SBA};
use crate::ebcdic::Codepage;
use crate::screen::FieldMap;
use crate::telnet::{Framed, Framer};
use crate::Result;

/// What the client sent in response to a screen.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// The key that caused the transmission.
    pub aid: Aid,
    /// Cursor row, 0-based. Zero for short-read AIDs.
    pub row: u16,
    /// Cursor column, 0-based. Zero for short-read AIDs.
    pub col: u16,
    /// Modified field values keyed by field name. Only fields present in
    /// the fieldmap of the screen that was written appear here.
    pub values: HashMap<String, String>,
}

/// Read one client response.
///
/// `cols` is the width of the screen the response answers, used to turn
/// buffer addresses back into rows and columns.
pub(crate) async fn read_response<R>(
    r: &mut R,
    framer: &mut Framer,
    fieldmap: &FieldMap,
    cols: u16,
    codepage: Codepage,
) -> Result<Response>
where
    R: AsyncRead + Unpin,
{
    let aid = read_aid(r, framer).await?;
    debug!("AID: {aid}");

    if aid.is_short_read() {
        // No cursor, no fields. The trailing IAC EOR stays unread; the
        // next AID scan will skip it.
        return Ok(Response {
            aid,
            ..Response::default()
        });
    }

    let b0 = framer.read_data_byte(r).await?;
    let b1 = framer.read_data_byte(r).await?;
    let cursor = decode_address(b0, b1);
    let (row, col) = (cursor / cols, cursor % cols);
    debug!("cursor address {cursor} -> ({row}, {col})");

    let mut values = HashMap::new();
    let mut field: Option<(u16, Vec<u8>)> = None;

    loop {
        match framer.read_byte(r, true).await? {
            Framed::Eor => {
                finish_field(field.take(), fieldmap, codepage, &mut values);
                break;
            }
            Framed::Byte(ORDER_SBA) => {
                finish_field(field.take(), fieldmap, codepage, &mut values);
                let b0 = framer.read_data_byte(r).await?;
                let b1 = framer.read_data_byte(r).await?;
                field = Some((decode_address(b0, b1), Vec::new()));
            }
            Framed::Byte(b) => match field {
                Some((_, ref mut data)) => data.push(b),
                None => debug!("discarding byte 0x{b:02x} outside any field"),
            },
        }
    }

    Ok(Response {
        aid,
        row,
        col,
        values,
    })
}

/// Skip bytes until one is a valid AID.
async fn read_aid<R>(r: &mut R, framer: &mut Framer) -> Result<Aid>
where
    R: AsyncRead + Unpin,
{
    loop {
        match framer.read_byte(r, false).await? {
            Framed::Byte(b) => match Aid::from_byte(b) {
                Some(aid) => return Ok(aid),
                None => debug!("skipping non-AID byte 0x{b:02x}"),
            },
            Framed::Eor => unreachable!("framer never passes EOR when not asked"),
        }
    }
}

/// Decode a completed field and file it under its name. Addresses that
/// don't match the written screen are dropped.
fn finish_field(
    field: Option<(u16, Vec<u8>)>,
    fieldmap: &FieldMap,
    codepage: Codepage,
    values: &mut HashMap<String, String>,
) {
    let Some((addr, data)) = field else { return };
    match fieldmap.get(&addr) {
        Some(name) => {
            let text = codepage.decode(&data);
            debug!("field {name:?} at {addr}: {text:?}");
            values.insert(name.clone(), text);
        }
        None => debug!("dropping field at unexpected address {addr}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ebcdic::cp1047;

    fn fieldmap(entries: &[(u16, &str)]) -> FieldMap {
        entries
            .iter()
            .map(|&(addr, name)| (addr, name.to_string()))
            .collect()
    }

    async fn parse(input: &[u8], fm: &FieldMap, cols: u16) -> Response {
        let mut framer = Framer::default();
        let mut r = input;
        read_response(&mut r, &mut framer, fm, cols, cp1047())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn parses_enter_with_one_field() {
        // Enter, cursor (11,39), field at address 16 containing "AB".
        let input = [0x7D, 0x4E, 0xD7, 0x11, 0x40, 0x50, 0xC1, 0xC2, 0xFF, 0xEF];
        let resp = parse(&input, &fieldmap(&[(16, "x")]), 80).await;
        assert_eq!(resp.aid, Aid::Enter);
        assert_eq!((resp.row, resp.col), (11, 39));
        assert_eq!(resp.values.len(), 1);
        assert_eq!(resp.values.get("x").map(String::as_str), Some("AB"));
    }

    #[tokio::test]
    async fn parses_multiple_fields() {
        let fm = fieldmap(&[(1, "first"), (81, "second")]);
        let input = [
            0x7D, 0x40, 0x40, // Enter, cursor (0,0)
            0x11, 0x40, 0xC1, 0xC8, 0xC9, // SBA 1, "HI"
            0x11, 0xC1, 0xD1, 0xF4, 0xF2, // SBA 81, "42"
            0xFF, 0xEF,
        ];
        let resp = parse(&input, &fm, 80).await;
        assert_eq!(resp.values.get("first").map(String::as_str), Some("HI"));
        assert_eq!(resp.values.get("second").map(String::as_str), Some("42"));
    }

    #[tokio::test]
    async fn short_read_keys_return_immediately() {
        for (byte, want) in [
            (0x6D, Aid::Clear),
            (0x6C, Aid::Pa(1)),
            (0x6E, Aid::Pa(2)),
            (0x6B, Aid::Pa(3)),
        ] {
            // Nothing beyond the AID is consumed, not even the EOR.
            let input = [byte];
            let resp = parse(&input, &FieldMap::new(), 80).await;
            assert_eq!(resp.aid, want);
            assert_eq!((resp.row, resp.col), (0, 0));
            assert!(resp.values.is_empty());
        }
    }

    #[tokio::test]
    async fn stale_eor_before_aid_is_skipped() {
        // The EOR left over from a previous short read precedes the AID.
        let input = [0xFF, 0xEF, 0x7D, 0x40, 0x40, 0xFF, 0xEF];
        let resp = parse(&input, &FieldMap::new(), 80).await;
        assert_eq!(resp.aid, Aid::Enter);
    }

    #[tokio::test]
    async fn unknown_field_addresses_are_dropped() {
        let input = [
            0x7D, 0x40, 0x40, // Enter, cursor (0,0)
            0x11, 0x40, 0xC2, 0xC1, // SBA 2 (not in map), "A"
            0xFF, 0xEF,
        ];
        let resp = parse(&input, &fieldmap(&[(16, "x")]), 80).await;
        assert!(resp.values.is_empty());
    }

    #[tokio::test]
    async fn bytes_outside_fields_are_discarded() {
        let input = [
            0x7D, 0x40, 0x40, // Enter, cursor (0,0)
            0xC1, 0xC2, // stray data before any SBA
            0x11, 0x40, 0x50, 0xC3, // SBA 16, "C"
            0xFF, 0xEF,
        ];
        let resp = parse(&input, &fieldmap(&[(16, "x")]), 80).await;
        assert_eq!(resp.values.get("x").map(String::as_str), Some("C"));
    }

    #[tokio::test]
    async fn pf_key_carries_fields() {
        let input = [0xF3, 0x40, 0x50, 0x11, 0x40, 0x50, 0xC1, 0xFF, 0xEF];
        let resp = parse(&input, &fieldmap(&[(16, "x")]), 80).await;
        assert_eq!(resp.aid, Aid::Pf(3));
        assert_eq!((resp.row, resp.col), (0, 16));
        assert_eq!(resp.values.get("x").map(String::as_str), Some("A"));
    }

    #[tokio::test]
    async fn truncated_cursor_address_is_a_protocol_error() {
        let mut framer = Framer::default();
        let mut r: &[u8] = &[0x7D, 0xFF, 0xEF];
        let err = read_response(&mut r, &mut framer, &FieldMap::new(), 80, cp1047())
            .await
            .unwrap_err();
        assert!(matches!(err, crate::Error::Protocol));
    }

    #[tokio::test]
    async fn fourteen_bit_field_address_resolves() {
        // Cursor and field on a 27x132 screen at (26, 131): address 3563.
        // 3563 < 4096 still uses 12-bit; use (100, 120) on 130 cols = 13120
        // for a true 14-bit address.
        let fm = fieldmap(&[(13121, "deep")]);
        let input = [
            0x7D, 0x33, 0x40, // Enter, cursor 13120
            0x11, 0x33, 0x41, 0xC1, // SBA 13121, "A"
            0xFF, 0xEF,
        ];
        let resp = parse(&input, &fm, 130).await;
        assert_eq!((resp.row, resp.col), (100, 120));
        assert_eq!(resp.values.get("deep").map(String::as_str), Some("A"));
    }
}
