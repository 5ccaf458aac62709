//! EBCDIC ⇔ Unicode translation.
//!
//! A [`Codepage`] is a cheap copyable handle over static translation data:
//! a 256-entry EBCDIC→Unicode table, a lazily built reverse map (a 256-entry
//! array for low code points plus a sparse map for the rest), and the shared
//! CP310 graphic-escape tables. Characters that exist only in CP310 encode
//! as a two-byte `GE` sequence (0x08 followed by the CP310 byte); anything
//! unmappable encodes as the EBCDIC substitute 0x3F and decodes as U+001A.
//!
//! The process-wide default page is CP 1047 and can be replaced once during
//! startup with [`set_default_codepage`]; per-connection and per-call
//! overrides take precedence over it.

use std::collections::HashMap;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::codepages;

/// The 3270 Graphic Escape order: the following byte selects a character
/// from the supplementary CP310 set.
pub(crate) const GRAPHIC_ESCAPE: u8 = 0x08;

/// EBCDIC substitute byte emitted for unmappable input.
const EBCDIC_SUB: u8 = 0x3F;

/// Unicode substitute produced when a graphic-escape byte has no mapping.
const UNICODE_SUB: char = '\u{001A}';

/// Placeholder used in table positions with no assigned character.
pub(crate) const UNMAPPED: char = '\u{FFFD}';

/// Reverse lookup built once per code page on first encode.
struct Reverse {
    /// Unicode code points 0x00-0xFF.
    low: [Option<u8>; 256],
    /// Everything above 0xFF that the page maps directly.
    high: HashMap<char, u8>,
}

/// Static translation data backing one code page.
pub(crate) struct PageData {
    id: &'static str,
    e2u: &'static [char; 256],
    reverse: OnceLock<Reverse>,
}

impl PageData {
    pub(crate) const fn new(id: &'static str, e2u: &'static [char; 256]) -> Self {
        PageData {
            id,
            e2u,
            reverse: OnceLock::new(),
        }
    }

    fn reverse(&self) -> &Reverse {
        self.reverse.get_or_init(|| {
            let mut low = [None; 256];
            let mut high = HashMap::new();
            for (byte, &ch) in self.e2u.iter().enumerate() {
                if ch == UNMAPPED {
                    continue;
                }
                let cp = ch as u32;
                if cp < 256 {
                    if low[cp as usize].is_none() {
                        low[cp as usize] = Some(byte as u8);
                    }
                } else {
                    high.entry(ch).or_insert(byte as u8);
                }
            }
            Reverse { low, high }
        })
    }
}

/// The shared CP310 rune→byte map, built once for the whole process.
fn cp310_reverse() -> &'static HashMap<char, u8> {
    static MAP: OnceLock<HashMap<char, u8>> = OnceLock::new();
    MAP.get_or_init(|| codepages::UNICODE_TO_CP310.iter().copied().collect())
}

/// A handle to one EBCDIC code page.
///
/// Copying is free; all the data is static. Obtain handles from the
/// constructors ([`cp037`], [`cp1047`], ...), from [`codepage_for_id`], or
/// from a negotiated [`DeviceInfo`](crate::DeviceInfo).
#[derive(Clone, Copy)]
pub struct Codepage {
    data: &'static PageData,
}

impl Codepage {
    pub(crate) const fn from_page(data: &'static PageData) -> Self {
        Codepage { data }
    }

    /// The page name: a numeric string like `"037"` or `"1047"`, or
    /// `"bracket"` for the suite3270 variant.
    pub fn id(&self) -> &'static str {
        self.data.id
    }

    /// Convert a string into EBCDIC bytes.
    ///
    /// Characters without a mapping in this page but present in CP310 are
    /// emitted as graphic-escape pairs; anything else becomes the EBCDIC
    /// substitute byte 0x3F.
    pub fn encode(&self, s: &str) -> Vec<u8> {
        let rev = self.data.reverse();
        let ge = cp310_reverse();
        let mut out = Vec::with_capacity(s.len());
        for ch in s.chars() {
            let cp = ch as u32;
            if cp < 256 {
                if let Some(b) = rev.low[cp as usize] {
                    out.push(b);
                    continue;
                }
            } else if let Some(&b) = rev.high.get(&ch) {
                out.push(b);
                continue;
            }
            if let Some(&b) = ge.get(&ch) {
                out.push(GRAPHIC_ESCAPE);
                out.push(b);
            } else {
                out.push(EBCDIC_SUB);
            }
        }
        out
    }

    /// Convert EBCDIC bytes into a string.
    ///
    /// A graphic-escape byte switches the next byte to the shared CP310
    /// table; unassigned CP310 positions decode as U+001A. A dangling
    /// escape at the end of the input is dropped.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len());
        let mut escape = false;
        for &b in bytes {
            if escape {
                escape = false;
                let ch = codepages::CP310_TO_UNICODE[b as usize];
                out.push(if ch == UNMAPPED { UNICODE_SUB } else { ch });
            } else if b == GRAPHIC_ESCAPE {
                escape = true;
            } else {
                out.push(self.data.e2u[b as usize]);
            }
        }
        out
    }
}

impl fmt::Debug for Codepage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Codepage").field(&self.data.id).finish()
    }
}

impl PartialEq for Codepage {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.data, other.data)
    }
}

impl Eq for Codepage {}

/// CP 037 (US/Canada).
pub fn cp037() -> Codepage {
    Codepage::from_page(&codepages::CP037_PAGE)
}

/// CP 500 (International).
pub fn cp500() -> Codepage {
    Codepage::from_page(&codepages::CP500_PAGE)
}

/// CP 1047 (Unix on z/OS), the library default.
pub fn cp1047() -> Codepage {
    Codepage::from_page(&codepages::CP1047_PAGE)
}

/// The suite3270 "bracket" page: CP 1047 with `^` and `¬` swapped back to
/// their CP 37 positions. This is what stock x3270/c3270 sessions use.
pub fn cp_bracket() -> Codepage {
    Codepage::from_page(&codepages::BRACKET_PAGE)
}

/// CP 1140: CP 037 with the euro sign replacing the currency sign.
pub fn cp1140() -> Codepage {
    Codepage::from_page(&codepages::CP1140_PAGE)
}

/// CP 1148: CP 500 with the euro sign replacing the currency sign.
pub fn cp1148() -> Codepage {
    Codepage::from_page(&codepages::CP1148_PAGE)
}

/// Resolve a numeric code-page identifier, as reported in a Character Sets
/// query reply, to a compiled-in page. Unrecognized identifiers return
/// `None` and the caller falls back to the process default.
pub fn codepage_for_id(id: u16) -> Option<Codepage> {
    match id {
        37 => Some(cp037()),
        500 => Some(cp500()),
        1047 => Some(cp1047()),
        1140 => Some(cp1140()),
        1148 => Some(cp1148()),
        _ => None,
    }
}

static DEFAULT_CODEPAGE: RwLock<Codepage> =
    RwLock::new(Codepage::from_page(&codepages::CP1047_PAGE));

/// Replace the process-wide default code page.
///
/// This is a global setting: configure it once during application startup,
/// before accepting connections, and leave it alone afterwards. Per-call
/// ([`ScreenOpts::codepage`](crate::ScreenOpts)) and per-connection
/// (detected) pages override it.
pub fn set_default_codepage(cp: Codepage) {
    *DEFAULT_CODEPAGE
        .write()
        .expect("default codepage lock poisoned") = cp;
}

/// The current process-wide default code page.
pub fn default_codepage() -> Codepage {
    *DEFAULT_CODEPAGE
        .read()
        .expect("default codepage lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_uppercase_hello_cp1047() {
        assert_eq!(
            cp1047().encode("HELLO"),
            vec![0xC8, 0xC5, 0xD3, 0xD3, 0xD6]
        );
    }

    #[test]
    fn decodes_digits_cp1047() {
        assert_eq!(cp1047().decode(&[0xF1, 0xF2, 0xF3, 0xF4, 0xF5]), "12345");
    }

    #[test]
    fn round_trips_printable_ascii_all_pages() {
        for cp in [cp037(), cp500(), cp1047(), cp_bracket(), cp1140(), cp1148()] {
            for ch in ' '..='~' {
                let s = ch.to_string();
                let encoded = cp.encode(&s);
                assert_eq!(
                    encoded.len(),
                    1,
                    "'{ch}' should be a single byte in CP {}",
                    cp.id()
                );
                assert_ne!(encoded[0], 0x3F, "'{ch}' unmapped in CP {}", cp.id());
                assert_eq!(cp.decode(&encoded), s, "round trip of '{ch}'");
            }
        }
    }

    #[test]
    fn round_trips_mixed_text() {
        let original = "Hello, World! 123 @#$";
        let cp = cp1047();
        assert_eq!(cp.decode(&cp.encode(original)), original);
    }

    #[test]
    fn substitutes_unmappable_scalar() {
        assert_eq!(cp1047().encode("\u{4E2D}"), vec![0x3F]);
    }

    #[test]
    fn graphic_escape_round_trip() {
        // Characters that exist only in CP310 travel as GE pairs.
        for (ch, ge_byte) in [('\u{2260}', 0xBE), ('\u{2191}', 0x8A), ('\u{2264}', 0x8C)] {
            let cp = cp1047();
            let encoded = cp.encode(&ch.to_string());
            assert_eq!(encoded, vec![0x08, ge_byte]);
            assert_eq!(cp.decode(&encoded), ch.to_string());
        }
    }

    #[test]
    fn unassigned_graphic_escape_decodes_as_substitute() {
        assert_eq!(cp1047().decode(&[0x08, 0x00]), "\u{001A}");
    }

    #[test]
    fn dangling_graphic_escape_is_dropped() {
        assert_eq!(cp1047().decode(&[0xC1, 0x08]), "A");
    }

    #[test]
    fn bracket_swaps_caret_and_not_sign() {
        assert_eq!(cp1047().decode(&[0x5F]), "^");
        assert_eq!(cp1047().decode(&[0xB0]), "\u{00AC}");
        assert_eq!(cp_bracket().decode(&[0x5F]), "\u{00AC}");
        assert_eq!(cp_bracket().decode(&[0xB0]), "^");
        // Everything else matches CP 1047.
        assert_eq!(cp_bracket().decode(&[0xAD, 0xBD]), "[]");
    }

    #[test]
    fn euro_pages_map_the_euro() {
        assert_eq!(cp037().decode(&[0x9F]), "\u{00A4}");
        assert_eq!(cp1140().decode(&[0x9F]), "\u{20AC}");
        assert_eq!(cp1140().encode("\u{20AC}"), vec![0x9F]);
        assert_eq!(cp1148().encode("\u{20AC}"), vec![0x9F]);
    }

    #[test]
    fn registry_resolves_known_ids() {
        assert_eq!(codepage_for_id(37).unwrap().id(), "037");
        assert_eq!(codepage_for_id(500).unwrap().id(), "500");
        assert_eq!(codepage_for_id(1047).unwrap().id(), "1047");
        assert_eq!(codepage_for_id(1140).unwrap().id(), "1140");
        assert!(codepage_for_id(875).is_none());
    }

    #[test]
    fn byte_table_round_trips_where_mapped() {
        // encode(decode(b)) == b for bytes whose character maps back to the
        // same position (the GE byte itself decodes as a control character
        // that encodes elsewhere, so it is exempt).
        let cp = cp037();
        for b in 0x40u8..=0xFF {
            let s = cp.decode(&[b]);
            let back = cp.encode(&s);
            assert_eq!(back, vec![b], "byte {b:#04x} via {s:?}");
        }
    }

    #[test]
    fn default_codepage_is_1047() {
        assert_eq!(default_codepage().id(), "1047");
    }
}
