//! Code-page translation tables.
//!
//! Pure data: 256-entry EBCDIC→Unicode tables for the compiled-in pages,
//! the shared CP310 graphic-escape tables, and the page descriptors the
//! rest of the crate hands out. Derived from the IBM CDRA/ICU ucm mappings;
//! regenerate rather than hand-edit. U+FFFD marks unassigned positions.

use crate::ebcdic::PageData;

/// EBCDIC Code Page 037 (US/Canada).
#[rustfmt::skip]
const CP037: [char; 256] = [
    // 0x00-0x0F
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009C}', '\u{0009}', '\u{0086}', '\u{007F}',
    '\u{0097}', '\u{008D}', '\u{008E}', '\u{000B}', '\u{000C}', '\u{000D}', '\u{000E}', '\u{000F}',
    // 0x10-0x1F
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009D}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008F}', '\u{001C}', '\u{001D}', '\u{001E}', '\u{001F}',
    // 0x20-0x2F
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000A}', '\u{0017}', '\u{001B}',
    '\u{0088}', '\u{0089}', '\u{008A}', '\u{008B}', '\u{008C}', '\u{0005}', '\u{0006}', '\u{0007}',
    // 0x30-0x3F
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009A}', '\u{009B}', '\u{0014}', '\u{0015}', '\u{009E}', '\u{001A}',
    // 0x40-0x4F
    '\u{0020}', '\u{00A0}', '\u{00E2}', '\u{00E4}', '\u{00E0}', '\u{00E1}', '\u{00E3}', '\u{00E5}',
    '\u{00E7}', '\u{00F1}', '\u{00A2}', '\u{002E}', '\u{003C}', '\u{0028}', '\u{002B}', '\u{007C}',
    // 0x50-0x5F
    '\u{0026}', '\u{00E9}', '\u{00EA}', '\u{00EB}', '\u{00E8}', '\u{00ED}', '\u{00EE}', '\u{00EF}',
    '\u{00EC}', '\u{00DF}', '\u{0021}', '\u{0024}', '\u{002A}', '\u{0029}', '\u{003B}', '\u{00AC}',
    // 0x60-0x6F
    '\u{002D}', '\u{002F}', '\u{00C2}', '\u{00C4}', '\u{00C0}', '\u{00C1}', '\u{00C3}', '\u{00C5}',
    '\u{00C7}', '\u{00D1}', '\u{00A6}', '\u{002C}', '\u{0025}', '\u{005F}', '\u{003E}', '\u{003F}',
    // 0x70-0x7F
    '\u{00F8}', '\u{00C9}', '\u{00CA}', '\u{00CB}', '\u{00C8}', '\u{00CD}', '\u{00CE}', '\u{00CF}',
    '\u{00CC}', '\u{0060}', '\u{003A}', '\u{0023}', '\u{0040}', '\u{0027}', '\u{003D}', '\u{0022}',
    // 0x80-0x8F
    '\u{00D8}', '\u{0061}', '\u{0062}', '\u{0063}', '\u{0064}', '\u{0065}', '\u{0066}', '\u{0067}',
    '\u{0068}', '\u{0069}', '\u{00AB}', '\u{00BB}', '\u{00F0}', '\u{00FD}', '\u{00FE}', '\u{00B1}',
    // 0x90-0x9F
    '\u{00B0}', '\u{006A}', '\u{006B}', '\u{006C}', '\u{006D}', '\u{006E}', '\u{006F}', '\u{0070}',
    '\u{0071}', '\u{0072}', '\u{00AA}', '\u{00BA}', '\u{00E6}', '\u{00B8}', '\u{00C6}', '\u{00A4}',
    // 0xA0-0xAF
    '\u{00B5}', '\u{007E}', '\u{0073}', '\u{0074}', '\u{0075}', '\u{0076}', '\u{0077}', '\u{0078}',
    '\u{0079}', '\u{007A}', '\u{00A1}', '\u{00BF}', '\u{00D0}', '\u{00DD}', '\u{00DE}', '\u{00AE}',
    // 0xB0-0xBF
    '\u{005E}', '\u{00A3}', '\u{00A5}', '\u{00B7}', '\u{00A9}', '\u{00A7}', '\u{00B6}', '\u{00BC}',
    '\u{00BD}', '\u{00BE}', '\u{005B}', '\u{005D}', '\u{00AF}', '\u{00A8}', '\u{00B4}', '\u{00D7}',
    // 0xC0-0xCF
    '\u{007B}', '\u{0041}', '\u{0042}', '\u{0043}', '\u{0044}', '\u{0045}', '\u{0046}', '\u{0047}',
    '\u{0048}', '\u{0049}', '\u{00AD}', '\u{00F4}', '\u{00F6}', '\u{00F2}', '\u{00F3}', '\u{00F5}',
    // 0xD0-0xDF
    '\u{007D}', '\u{004A}', '\u{004B}', '\u{004C}', '\u{004D}', '\u{004E}', '\u{004F}', '\u{0050}',
    '\u{0051}', '\u{0052}', '\u{00B9}', '\u{00FB}', '\u{00FC}', '\u{00F9}', '\u{00FA}', '\u{00FF}',
    // 0xE0-0xEF
    '\u{005C}', '\u{00F7}', '\u{0053}', '\u{0054}', '\u{0055}', '\u{0056}', '\u{0057}', '\u{0058}',
    '\u{0059}', '\u{005A}', '\u{00B2}', '\u{00D4}', '\u{00D6}', '\u{00D2}', '\u{00D3}', '\u{00D5}',
    // 0xF0-0xFF
    '\u{0030}', '\u{0031}', '\u{0032}', '\u{0033}', '\u{0034}', '\u{0035}', '\u{0036}', '\u{0037}',
    '\u{0038}', '\u{0039}', '\u{00B3}', '\u{00DB}', '\u{00DC}', '\u{00D9}', '\u{00DA}', '\u{009F}',
];

/// EBCDIC Code Page 500 (International).
///
/// Differs from CP 037 in the positions of several punctuation characters:
/// brackets, exclamation, caret, pipe, cent sign, and not sign.
#[rustfmt::skip]
const CP500: [char; 256] = [
    // 0x00-0x0F
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009C}', '\u{0009}', '\u{0086}', '\u{007F}',
    '\u{0097}', '\u{008D}', '\u{008E}', '\u{000B}', '\u{000C}', '\u{000D}', '\u{000E}', '\u{000F}',
    // 0x10-0x1F
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009D}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008F}', '\u{001C}', '\u{001D}', '\u{001E}', '\u{001F}',
    // 0x20-0x2F
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000A}', '\u{0017}', '\u{001B}',
    '\u{0088}', '\u{0089}', '\u{008A}', '\u{008B}', '\u{008C}', '\u{0005}', '\u{0006}', '\u{0007}',
    // 0x30-0x3F
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009A}', '\u{009B}', '\u{0014}', '\u{0015}', '\u{009E}', '\u{001A}',
    // 0x40-0x4F
    '\u{0020}', '\u{00A0}', '\u{00E2}', '\u{00E4}', '\u{00E0}', '\u{00E1}', '\u{00E3}', '\u{00E5}',
    '\u{00E7}', '\u{00F1}', '\u{005B}', '\u{002E}', '\u{003C}', '\u{0028}', '\u{002B}', '\u{0021}',
    // 0x50-0x5F
    '\u{0026}', '\u{00E9}', '\u{00EA}', '\u{00EB}', '\u{00E8}', '\u{00ED}', '\u{00EE}', '\u{00EF}',
    '\u{00EC}', '\u{00DF}', '\u{005D}', '\u{0024}', '\u{002A}', '\u{0029}', '\u{003B}', '\u{005E}',
    // 0x60-0x6F
    '\u{002D}', '\u{002F}', '\u{00C2}', '\u{00C4}', '\u{00C0}', '\u{00C1}', '\u{00C3}', '\u{00C5}',
    '\u{00C7}', '\u{00D1}', '\u{00A6}', '\u{002C}', '\u{0025}', '\u{005F}', '\u{003E}', '\u{003F}',
    // 0x70-0x7F
    '\u{00F8}', '\u{00C9}', '\u{00CA}', '\u{00CB}', '\u{00C8}', '\u{00CD}', '\u{00CE}', '\u{00CF}',
    '\u{00CC}', '\u{0060}', '\u{003A}', '\u{0023}', '\u{0040}', '\u{0027}', '\u{003D}', '\u{0022}',
    // 0x80-0x8F
    '\u{00D8}', '\u{0061}', '\u{0062}', '\u{0063}', '\u{0064}', '\u{0065}', '\u{0066}', '\u{0067}',
    '\u{0068}', '\u{0069}', '\u{00AB}', '\u{00BB}', '\u{00F0}', '\u{00FD}', '\u{00FE}', '\u{00B1}',
    // 0x90-0x9F
    '\u{00B0}', '\u{006A}', '\u{006B}', '\u{006C}', '\u{006D}', '\u{006E}', '\u{006F}', '\u{0070}',
    '\u{0071}', '\u{0072}', '\u{00AA}', '\u{00BA}', '\u{00E6}', '\u{00B8}', '\u{00C6}', '\u{00A4}',
    // 0xA0-0xAF
    '\u{00B5}', '\u{007E}', '\u{0073}', '\u{0074}', '\u{0075}', '\u{0076}', '\u{0077}', '\u{0078}',
    '\u{0079}', '\u{007A}', '\u{00A1}', '\u{00BF}', '\u{00D0}', '\u{00DD}', '\u{00DE}', '\u{00AE}',
    // 0xB0-0xBF
    '\u{00A2}', '\u{00A3}', '\u{00A5}', '\u{00B7}', '\u{00A9}', '\u{00A7}', '\u{00B6}', '\u{00BC}',
    '\u{00BD}', '\u{00BE}', '\u{00AC}', '\u{007C}', '\u{00AF}', '\u{00A8}', '\u{00B4}', '\u{00D7}',
    // 0xC0-0xCF
    '\u{007B}', '\u{0041}', '\u{0042}', '\u{0043}', '\u{0044}', '\u{0045}', '\u{0046}', '\u{0047}',
    '\u{0048}', '\u{0049}', '\u{00AD}', '\u{00F4}', '\u{00F6}', '\u{00F2}', '\u{00F3}', '\u{00F5}',
    // 0xD0-0xDF
    '\u{007D}', '\u{004A}', '\u{004B}', '\u{004C}', '\u{004D}', '\u{004E}', '\u{004F}', '\u{0050}',
    '\u{0051}', '\u{0052}', '\u{00B9}', '\u{00FB}', '\u{00FC}', '\u{00F9}', '\u{00FA}', '\u{00FF}',
    // 0xE0-0xEF
    '\u{005C}', '\u{00F7}', '\u{0053}', '\u{0054}', '\u{0055}', '\u{0056}', '\u{0057}', '\u{0058}',
    '\u{0059}', '\u{005A}', '\u{00B2}', '\u{00D4}', '\u{00D6}', '\u{00D2}', '\u{00D3}', '\u{00D5}',
    // 0xF0-0xFF
    '\u{0030}', '\u{0031}', '\u{0032}', '\u{0033}', '\u{0034}', '\u{0035}', '\u{0036}', '\u{0037}',
    '\u{0038}', '\u{0039}', '\u{00B3}', '\u{00DB}', '\u{00DC}', '\u{00D9}', '\u{00DA}', '\u{009F}',
];

/// EBCDIC Code Page 1047 (Unix on z/OS).
///
/// Key differences from CP 037: LF at 0x15 instead of NEL, caret at 0x5F,
/// brackets at 0xAD/0xBD.
#[rustfmt::skip]
const CP1047: [char; 256] = [
    // 0x00-0x0F
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009C}', '\u{0009}', '\u{0086}', '\u{007F}',
    '\u{0097}', '\u{008D}', '\u{008E}', '\u{000B}', '\u{000C}', '\u{000D}', '\u{000E}', '\u{000F}',
    // 0x10-0x1F
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009D}', '\u{000A}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008F}', '\u{001C}', '\u{001D}', '\u{001E}', '\u{001F}',
    // 0x20-0x2F
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{0085}', '\u{0017}', '\u{001B}',
    '\u{0088}', '\u{0089}', '\u{008A}', '\u{008B}', '\u{008C}', '\u{0005}', '\u{0006}', '\u{0007}',
    // 0x30-0x3F
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009A}', '\u{009B}', '\u{0014}', '\u{0015}', '\u{009E}', '\u{001A}',
    // 0x40-0x4F
    '\u{0020}', '\u{00A0}', '\u{00E2}', '\u{00E4}', '\u{00E0}', '\u{00E1}', '\u{00E3}', '\u{00E5}',
    '\u{00E7}', '\u{00F1}', '\u{00A2}', '\u{002E}', '\u{003C}', '\u{0028}', '\u{002B}', '\u{007C}',
    // 0x50-0x5F
    '\u{0026}', '\u{00E9}', '\u{00EA}', '\u{00EB}', '\u{00E8}', '\u{00ED}', '\u{00EE}', '\u{00EF}',
    '\u{00EC}', '\u{00DF}', '\u{0021}', '\u{0024}', '\u{002A}', '\u{0029}', '\u{003B}', '\u{005E}',
    // 0x60-0x6F
    '\u{002D}', '\u{002F}', '\u{00C2}', '\u{00C4}', '\u{00C0}', '\u{00C1}', '\u{00C3}', '\u{00C5}',
    '\u{00C7}', '\u{00D1}', '\u{00A6}', '\u{002C}', '\u{0025}', '\u{005F}', '\u{003E}', '\u{003F}',
    // 0x70-0x7F
    '\u{00F8}', '\u{00C9}', '\u{00CA}', '\u{00CB}', '\u{00C8}', '\u{00CD}', '\u{00CE}', '\u{00CF}',
    '\u{00CC}', '\u{0060}', '\u{003A}', '\u{0023}', '\u{0040}', '\u{0027}', '\u{003D}', '\u{0022}',
    // 0x80-0x8F
    '\u{00D8}', '\u{0061}', '\u{0062}', '\u{0063}', '\u{0064}', '\u{0065}', '\u{0066}', '\u{0067}',
    '\u{0068}', '\u{0069}', '\u{00AB}', '\u{00BB}', '\u{00F0}', '\u{00FD}', '\u{00FE}', '\u{00B1}',
    // 0x90-0x9F
    '\u{00B0}', '\u{006A}', '\u{006B}', '\u{006C}', '\u{006D}', '\u{006E}', '\u{006F}', '\u{0070}',
    '\u{0071}', '\u{0072}', '\u{00AA}', '\u{00BA}', '\u{00E6}', '\u{00B8}', '\u{00C6}', '\u{00A4}',
    // 0xA0-0xAF
    '\u{00B5}', '\u{007E}', '\u{0073}', '\u{0074}', '\u{0075}', '\u{0076}', '\u{0077}', '\u{0078}',
    '\u{0079}', '\u{007A}', '\u{00A1}', '\u{00BF}', '\u{00D0}', '\u{005B}', '\u{00DE}', '\u{00AE}',
    // 0xB0-0xBF
    '\u{00AC}', '\u{00A3}', '\u{00A5}', '\u{00B7}', '\u{00A9}', '\u{00A7}', '\u{00B6}', '\u{00BC}',
    '\u{00BD}', '\u{00BE}', '\u{00DD}', '\u{00A8}', '\u{00AF}', '\u{005D}', '\u{00B4}', '\u{00D7}',
    // 0xC0-0xCF
    '\u{007B}', '\u{0041}', '\u{0042}', '\u{0043}', '\u{0044}', '\u{0045}', '\u{0046}', '\u{0047}',
    '\u{0048}', '\u{0049}', '\u{00AD}', '\u{00F4}', '\u{00F6}', '\u{00F2}', '\u{00F3}', '\u{00F5}',
    // 0xD0-0xDF
    '\u{007D}', '\u{004A}', '\u{004B}', '\u{004C}', '\u{004D}', '\u{004E}', '\u{004F}', '\u{0050}',
    '\u{0051}', '\u{0052}', '\u{00B9}', '\u{00FB}', '\u{00FC}', '\u{00F9}', '\u{00FA}', '\u{00FF}',
    // 0xE0-0xEF
    '\u{005C}', '\u{00F7}', '\u{0053}', '\u{0054}', '\u{0055}', '\u{0056}', '\u{0057}', '\u{0058}',
    '\u{0059}', '\u{005A}', '\u{00B2}', '\u{00D4}', '\u{00D6}', '\u{00D2}', '\u{00D3}', '\u{00D5}',
    // 0xF0-0xFF
    '\u{0030}', '\u{0031}', '\u{0032}', '\u{0033}', '\u{0034}', '\u{0035}', '\u{0036}', '\u{0037}',
    '\u{0038}', '\u{0039}', '\u{00B3}', '\u{00DB}', '\u{00DC}', '\u{00D9}', '\u{00DA}', '\u{009F}',
];

/// The suite3270 "bracket" variant: CP 1047 with `^` and `¬` swapped back
/// to their CP 37 positions. Stock x3270/c3270 sessions use this mapping.
const BRACKET: [char; 256] = {
    let mut t = CP1047;
    t[0x5F] = '\u{00AC}';
    t[0xB0] = '\u{005E}';
    t
};

/// CP 1140: the euro update of CP 037 (currency sign at 0x9F becomes the
/// euro sign).
const CP1140: [char; 256] = {
    let mut t = CP037;
    t[0x9F] = '\u{20AC}';
    t
};

/// CP 1148: the euro update of CP 500.
const CP1148: [char; 256] = {
    let mut t = CP500;
    t[0x9F] = '\u{20AC}';
    t
};

pub(crate) static CP037_PAGE: PageData = PageData::new("037", &CP037);
pub(crate) static CP500_PAGE: PageData = PageData::new("500", &CP500);
pub(crate) static CP1047_PAGE: PageData = PageData::new("1047", &CP1047);
pub(crate) static BRACKET_PAGE: PageData = PageData::new("bracket", &BRACKET);
pub(crate) static CP1140_PAGE: PageData = PageData::new("1140", &CP1140);
pub(crate) static CP1148_PAGE: PageData = PageData::new("1148", &CP1148);

/// CP310 (APL/graphic escape) byte to Unicode, shared by all code pages.
///
/// The italic underscored A-Z range needs combining characters and is left
/// unassigned.
#[rustfmt::skip]
pub(crate) const CP310_TO_UNICODE: [char; 256] = [
    // 0x00-0x0F
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    // 0x10-0x1F
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    // 0x20-0x2F
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    // 0x30-0x3F
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    // 0x40-0x4F
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    // 0x50-0x5F
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    // 0x60-0x6F
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    // 0x70-0x7F
    '\u{25CA}', '\u{2227}', '\u{00A8}', '\u{233B}', '\u{2378}', '\u{2377}', '\u{22A2}', '\u{22A3}',
    '\u{2228}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    // 0x80-0x8F
    '\u{223C}', '\u{2551}', '\u{2550}', '\u{23B8}', '\u{23B9}', '\u{23A5}', '\u{FFFD}', '\u{FFFD}',
    '\u{FFFD}', '\u{FFFD}', '\u{2191}', '\u{2193}', '\u{2264}', '\u{2308}', '\u{230A}', '\u{2192}',
    // 0x90-0x9F
    '\u{2395}', '\u{258C}', '\u{2590}', '\u{2580}', '\u{2584}', '\u{2588}', '\u{FFFD}', '\u{FFFD}',
    '\u{FFFD}', '\u{FFFD}', '\u{2283}', '\u{2282}', '\u{2311}', '\u{25CB}', '\u{00B1}', '\u{2190}',
    // 0xA0-0xAF
    '\u{203E}', '\u{00B0}', '\u{2500}', '\u{2022}', '\u{2099}', '\u{FFFD}', '\u{FFFD}', '\u{FFFD}',
    '\u{FFFD}', '\u{FFFD}', '\u{2229}', '\u{22C3}', '\u{22A5}', '\u{FFFD}', '\u{2265}', '\u{2218}',
    // 0xB0-0xBF
    '\u{237A}', '\u{2208}', '\u{2373}', '\u{2374}', '\u{03C9}', '\u{FFFD}', '\u{00D7}', '\u{2216}',
    '\u{00F7}', '\u{FFFD}', '\u{2207}', '\u{2206}', '\u{22A4}', '\u{FFFD}', '\u{2260}', '\u{2223}',
    // 0xC0-0xCF
    '\u{FFFD}', '\u{207D}', '\u{207A}', '\u{25A0}', '\u{2514}', '\u{250C}', '\u{251C}', '\u{2534}',
    '\u{FFFD}', '\u{FFFD}', '\u{2372}', '\u{2371}', '\u{2337}', '\u{233D}', '\u{2342}', '\u{2349}',
    // 0xD0-0xDF
    '\u{FFFD}', '\u{207E}', '\u{207B}', '\u{253C}', '\u{2518}', '\u{2510}', '\u{2524}', '\u{252C}',
    '\u{00B6}', '\u{FFFD}', '\u{2336}', '\u{01C3}', '\u{2352}', '\u{234B}', '\u{235E}', '\u{235D}',
    // 0xE0-0xEF
    '\u{2261}', '\u{2081}', '\u{2082}', '\u{2083}', '\u{2364}', '\u{2365}', '\u{236A}', '\u{20AC}',
    '\u{FFFD}', '\u{FFFD}', '\u{233F}', '\u{2340}', '\u{2235}', '\u{2296}', '\u{2339}', '\u{2355}',
    // 0xF0-0xFF
    '\u{2070}', '\u{00B9}', '\u{00B2}', '\u{00B3}', '\u{2074}', '\u{2075}', '\u{2076}', '\u{2077}',
    '\u{2078}', '\u{2079}', '\u{FFFD}', '\u{236B}', '\u{2359}', '\u{235F}', '\u{234E}', '\u{FFFD}',
];

/// Unicode to CP310 byte. Several positions carry aliases (e.g. both
/// U+25CA and U+22C4 map to 0x70) so common lookalike code points all
/// reach the intended APL glyph.
#[rustfmt::skip]
pub(crate) const UNICODE_TO_CP310: [(char, u8); 127] = [
    ('\u{25CA}', 0x70), ('\u{22C4}', 0x70), ('\u{25C6}', 0x70), ('\u{2227}', 0x71),
    ('\u{22C0}', 0x71), ('\u{00A8}', 0x72), ('\u{233B}', 0x73), ('\u{2378}', 0x74),
    ('\u{2377}', 0x75), ('\u{22A2}', 0x76), ('\u{22A3}', 0x77), ('\u{2228}', 0x78),
    ('\u{223C}', 0x80), ('\u{2551}', 0x81), ('\u{2550}', 0x82), ('\u{23B8}', 0x83),
    ('\u{23B9}', 0x84), ('\u{2502}', 0x85), ('\u{23A5}', 0x85), ('\u{2191}', 0x8A),
    ('\u{2193}', 0x8B), ('\u{2264}', 0x8C), ('\u{2308}', 0x8D), ('\u{230A}', 0x8E),
    ('\u{2192}', 0x8F), ('\u{2395}', 0x90), ('\u{258C}', 0x91), ('\u{2590}', 0x92),
    ('\u{2580}', 0x93), ('\u{2584}', 0x94), ('\u{2588}', 0x95), ('\u{2283}', 0x9A),
    ('\u{2282}', 0x9B), ('\u{2311}', 0x9C), ('\u{00A4}', 0x9C), ('\u{25CB}', 0x9D),
    ('\u{00B1}', 0x9E), ('\u{2190}', 0x9F), ('\u{00AF}', 0xA0), ('\u{203E}', 0xA0),
    ('\u{00B0}', 0xA1), ('\u{2500}', 0xA2), ('\u{2219}', 0xA3), ('\u{2022}', 0xA3),
    ('\u{2099}', 0xA4), ('\u{2229}', 0xAA), ('\u{22C2}', 0xAA), ('\u{222A}', 0xAB),
    ('\u{22C3}', 0xAB), ('\u{22A5}', 0xAC), ('\u{2265}', 0xAE), ('\u{2218}', 0xAF),
    ('\u{237A}', 0xB0), ('\u{03B1}', 0xB0), ('\u{220A}', 0xB1), ('\u{2208}', 0xB1),
    ('\u{03B5}', 0xB1), ('\u{2373}', 0xB2), ('\u{03B9}', 0xB2), ('\u{2374}', 0xB3),
    ('\u{03C1}', 0xB3), ('\u{2375}', 0xB4), ('\u{03C9}', 0xB4), ('\u{00D7}', 0xB6),
    ('\u{2216}', 0xB7), ('\u{00F7}', 0xB8), ('\u{2207}', 0xBA), ('\u{2206}', 0xBB),
    ('\u{22A4}', 0xBC), ('\u{2260}', 0xBE), ('\u{2223}', 0xBF), ('\u{207D}', 0xC1),
    ('\u{207A}', 0xC2), ('\u{25A0}', 0xC3), ('\u{220E}', 0xC3), ('\u{2514}', 0xC4),
    ('\u{250C}', 0xC5), ('\u{251C}', 0xC6), ('\u{2534}', 0xC7), ('\u{2372}', 0xCA),
    ('\u{2371}', 0xCB), ('\u{2337}', 0xCC), ('\u{233D}', 0xCD), ('\u{2342}', 0xCE),
    ('\u{2349}', 0xCF), ('\u{207E}', 0xD1), ('\u{207B}', 0xD2), ('\u{253C}', 0xD3),
    ('\u{2518}', 0xD4), ('\u{2510}', 0xD5), ('\u{2524}', 0xD6), ('\u{252C}', 0xD7),
    ('\u{00B6}', 0xD8), ('\u{2336}', 0xDA), ('\u{01C3}', 0xDB), ('\u{2352}', 0xDC),
    ('\u{234B}', 0xDD), ('\u{235E}', 0xDE), ('\u{235D}', 0xDF), ('\u{2261}', 0xE0),
    ('\u{2081}', 0xE1), ('\u{2082}', 0xE2), ('\u{2083}', 0xE3), ('\u{2364}', 0xE4),
    ('\u{2365}', 0xE5), ('\u{236A}', 0xE6), ('\u{20AC}', 0xE7), ('\u{233F}', 0xEA),
    ('\u{2340}', 0xEB), ('\u{2235}', 0xEC), ('\u{2296}', 0xED), ('\u{2339}', 0xEE),
    ('\u{2355}', 0xEF), ('\u{2070}', 0xF0), ('\u{00B9}', 0xF1), ('\u{00B2}', 0xF2),
    ('\u{00B3}', 0xF3), ('\u{2074}', 0xF4), ('\u{2075}', 0xF5), ('\u{2076}', 0xF6),
    ('\u{2077}', 0xF7), ('\u{2078}', 0xF8), ('\u{2079}', 0xF9), ('\u{236B}', 0xFB),
    ('\u{2359}', 0xFC), ('\u{235F}', 0xFD), ('\u{234E}', 0xFE),
];
