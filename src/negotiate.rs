//! Telnet option negotiation and device discovery.
//!
//! Brings a fresh connection from raw telnet into tn3270 mode: Terminal-Type,
//! End-Of-Record, and Binary are negotiated in both directions, the terminal
//! type subfield is read, and a structured-field Read Partition Query
//! discovers the client's alternate screen size and code page.
//!
//! Option negotiation is racy by nature: a client may volunteer `DO EOR` or
//! `DO BINARY` while the server is still waiting for the reply to one of its
//! own commands. Whenever that happens the server answers `WILL` on the
//! spot, remembers having done so, and keeps waiting for the original reply;
//! options already answered this way are not offered a second time.

use std::sync::OnceLock;
use std::time::Duration;

use log::{debug, warn};
use regex::Regex;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::datastream::{
    CMD_ERASE_WRITE_ALTERNATE, CMD_WRITE_STRUCTURED_FIELD, MAX_ADDRESS, WCC_RESET_UNLOCK,
};
use crate::ebcdic::{codepage_for_id, cp_bracket, Codepage};
use crate::telnet::{
    Framed, Framer, CMD_DO, CMD_DONT, CMD_EOR, CMD_SB, CMD_SE, CMD_WILL, CMD_WONT, IAC,
    OPT_BINARY, OPT_EOR, OPT_TERMINAL_TYPE, TERMINAL_TYPE_IS, TERMINAL_TYPE_SEND,
};
use crate::{Error, Result};

/// How long to wait for the client's Query Reply before settling for the
/// dimensions implied by its terminal type.
const QUERY_REPLY_TIMEOUT: Duration = Duration::from_secs(3);

/// Settle window for client-initiated `DO` requests that may already be in
/// flight when the server has collected all its own replies.
const DRAIN_WINDOW: Duration = Duration::from_millis(200);

/// AID value introducing a structured-field query reply.
const AID_STRUCTURED_FIELD: u8 = 0x88;

// Query reply identifiers (QCODE byte following the 0x81 reply marker).
const QCODE_USABLE_AREA: u8 = 0x81;
const QCODE_CHARACTER_SETS: u8 = 0x85;
const QCODE_RPQ_NAMES: u8 = 0xA1;

/// "x3270" in EBCDIC, as reported in the RPQ Names reply by the suite3270
/// family (x3270, c3270, wc3270, ...).
const RPQ_X3270: [u8; 5] = [0xA7, 0xF3, 0xF2, 0xF7, 0xF0];

/// What negotiation learned about the connected terminal.
///
/// Created once per connection and read-only afterwards.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    rows: u16,
    cols: u16,
    terminal_type: String,
    codepage: Option<Codepage>,
}

impl DeviceInfo {
    /// Rows in the alternate screen size.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Columns in the alternate screen size.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// The terminal type string the client reported, e.g. `IBM-3278-2-E`.
    pub fn terminal_type(&self) -> &str {
        &self.terminal_type
    }

    /// The code page detected from the Character Sets query reply, if it is
    /// one the library recognizes. `None` falls back to the process default.
    pub fn codepage(&self) -> Option<Codepage> {
        self.codepage
    }
}

/// Which options the server has already said `WILL` for, either on its own
/// initiative or in response to a crossed client `DO`.
#[derive(Debug, Default)]
struct Offered {
    eor: bool,
    binary: bool,
}

/// Run the full handshake: option negotiation, then the device probe.
pub(crate) async fn negotiate<R, W>(
    r: &mut R,
    w: &mut W,
    framer: &mut Framer,
) -> Result<DeviceInfo>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut offered = Offered::default();

    send(w, &[IAC, CMD_DO, OPT_TERMINAL_TYPE]).await?;
    expect_reply(r, w, CMD_WILL, OPT_TERMINAL_TYPE, &mut offered).await?;

    send(
        w,
        &[IAC, CMD_SB, OPT_TERMINAL_TYPE, TERMINAL_TYPE_SEND, IAC, CMD_SE],
    )
    .await?;
    let terminal_type = read_terminal_type(r, w, &mut offered).await?;
    debug!("client terminal type: {terminal_type}");

    send(w, &[IAC, CMD_DO, OPT_EOR]).await?;
    expect_reply(r, w, CMD_WILL, OPT_EOR, &mut offered).await?;

    send(w, &[IAC, CMD_DO, OPT_BINARY]).await?;
    expect_reply(r, w, CMD_WILL, OPT_BINARY, &mut offered).await?;

    // Clients like x3270 volunteer DO EOR / DO BINARY without being asked;
    // answer anything already queued before offering our own WILLs, so the
    // same option is never negotiated twice.
    drain_client_requests(r, w, &mut offered).await?;

    if !offered.eor {
        send(w, &[IAC, CMD_WILL, OPT_EOR]).await?;
        offered.eor = true;
        expect_reply(r, w, CMD_DO, OPT_EOR, &mut offered).await?;
    }
    if !offered.binary {
        send(w, &[IAC, CMD_WILL, OPT_BINARY]).await?;
        offered.binary = true;
        expect_reply(r, w, CMD_DO, OPT_BINARY, &mut offered).await?;
    }

    let (rows, cols, codepage) = probe_device(r, w, framer, &terminal_type).await?;

    Ok(DeviceInfo {
        rows,
        cols,
        terminal_type,
        codepage,
    })
}

/// Best-effort teardown of the tn3270 options, so the connection can go
/// back to line-mode telnet. Replies are drained until the deadline and
/// ignored; only a write failure is reported.
pub(crate) async fn un_negotiate<R, W>(r: &mut R, w: &mut W, deadline: Duration) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    send(
        w,
        &[
            IAC, CMD_WONT, OPT_EOR, IAC, CMD_WONT, OPT_BINARY, IAC, CMD_DONT, OPT_EOR, IAC,
            CMD_DONT, OPT_BINARY,
        ],
    )
    .await?;

    let mut buf = [0u8; 64];
    let _ = timeout(deadline, async {
        while matches!(r.read(&mut buf).await, Ok(n) if n > 0) {}
    })
    .await;
    Ok(())
}

async fn send<W: AsyncWrite + Unpin>(w: &mut W, bytes: &[u8]) -> Result<()> {
    w.write_all(bytes).await?;
    w.flush().await?;
    Ok(())
}

/// Answer a client-initiated `DO` for an option the server is willing to
/// enable. Returns false for anything else.
async fn accept_crossed_do<W>(w: &mut W, opt: u8, offered: &mut Offered) -> Result<bool>
where
    W: AsyncWrite + Unpin,
{
    let already = match opt {
        OPT_EOR => &mut offered.eor,
        OPT_BINARY => &mut offered.binary,
        _ => return Ok(false),
    };
    if !*already {
        debug!("crossed negotiation: answering client DO 0x{opt:02x}");
        send(w, &[IAC, CMD_WILL, opt]).await?;
        *already = true;
    }
    Ok(true)
}

/// Wait for `IAC <cmd> <opt>`, answering crossed client `DO`s along the way.
/// Any other reply (a WONT/DONT, the wrong option, a non-command byte) fails
/// negotiation.
async fn expect_reply<R, W>(
    r: &mut R,
    w: &mut W,
    want_cmd: u8,
    want_opt: u8,
    offered: &mut Offered,
) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        if r.read_u8().await? != IAC {
            return Err(Error::NegotiationFailed);
        }
        let cmd = r.read_u8().await?;
        match cmd {
            CMD_WILL | CMD_WONT | CMD_DO | CMD_DONT => {
                let opt = r.read_u8().await?;
                if cmd == want_cmd && opt == want_opt {
                    return Ok(());
                }
                if cmd == CMD_DO && accept_crossed_do(w, opt, offered).await? {
                    continue;
                }
                debug!(
                    "negotiation expected cmd 0x{want_cmd:02x} opt 0x{want_opt:02x}, \
                     got cmd 0x{cmd:02x} opt 0x{opt:02x}"
                );
                return Err(Error::NegotiationFailed);
            }
            _ => return Err(Error::NegotiationFailed),
        }
    }
}

/// Read the `SB TERMINAL-TYPE IS <name> SE` reply, answering crossed `DO`s
/// that may arrive first.
async fn read_terminal_type<R, W>(r: &mut R, w: &mut W, offered: &mut Offered) -> Result<String>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        if r.read_u8().await? != IAC {
            return Err(Error::NegotiationFailed);
        }
        let cmd = r.read_u8().await?;
        match cmd {
            CMD_SB => {
                if r.read_u8().await? != OPT_TERMINAL_TYPE {
                    return Err(Error::NegotiationFailed);
                }
                if r.read_u8().await? != TERMINAL_TYPE_IS {
                    return Err(Error::NegotiationFailed);
                }
                let mut name = Vec::new();
                loop {
                    let b = r.read_u8().await?;
                    if b != IAC {
                        name.push(b);
                        continue;
                    }
                    match r.read_u8().await? {
                        CMD_SE => break,
                        IAC => name.push(IAC),
                        _ => return Err(Error::NegotiationFailed),
                    }
                }
                return Ok(String::from_utf8_lossy(&name).into_owned());
            }
            CMD_DO => {
                let opt = r.read_u8().await?;
                if accept_crossed_do(w, opt, offered).await? {
                    continue;
                }
                return Err(Error::NegotiationFailed);
            }
            _ => return Err(Error::NegotiationFailed),
        }
    }
}

/// Answer any client `DO EOR` / `DO BINARY` already queued on the socket.
/// The window is short: crossed requests arriving earlier were already
/// handled inline, so this only catches requests the client sent after its
/// final reply.
async fn drain_client_requests<R, W>(r: &mut R, w: &mut W, offered: &mut Offered) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let first = match timeout(DRAIN_WINDOW, r.read_u8()).await {
            Err(_) => return Ok(()),
            Ok(res) => res?,
        };
        if first != IAC {
            return Err(Error::NegotiationFailed);
        }
        if r.read_u8().await? != CMD_DO {
            return Err(Error::NegotiationFailed);
        }
        let opt = r.read_u8().await?;
        if !accept_crossed_do(w, opt, offered).await? {
            return Err(Error::NegotiationFailed);
        }
    }
}

fn model_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^IBM-\d{4}-([2-5])").expect("terminal model pattern"))
}

/// Dimensions implied by the terminal type string. `IBM-DYNAMIC` and
/// anything unrecognized fall back to the model 2 size.
fn seed_dimensions(terminal_type: &str) -> (u16, u16) {
    let model = model_regex()
        .captures(terminal_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());
    match model {
        Some("3") => (32, 80),
        Some("4") => (43, 80),
        Some("5") => (27, 132),
        _ => (24, 80),
    }
}

/// Clear the screen in alternate mode and issue a Read Partition Query,
/// then fold the Usable Area, Character Sets, and RPQ Names replies into
/// screen dimensions and a code page.
async fn probe_device<R, W>(
    r: &mut R,
    w: &mut W,
    framer: &mut Framer,
    terminal_type: &str,
) -> Result<(u16, u16, Option<Codepage>)>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (mut rows, mut cols) = seed_dimensions(terminal_type);
    let dynamic = terminal_type.starts_with("IBM-DYNAMIC");

    send(
        w,
        &[CMD_ERASE_WRITE_ALTERNATE, WCC_RESET_UNLOCK, IAC, CMD_EOR],
    )
    .await?;

    // WSF, length 0x0005, Read Partition (0x01), partition 0xFF (doubled
    // for telnet), type 0x02 = Query. The length counts unescaped bytes.
    send(
        w,
        &[
            CMD_WRITE_STRUCTURED_FIELD,
            0x00,
            0x05,
            0x01,
            IAC,
            IAC,
            0x02,
            IAC,
            CMD_EOR,
        ],
    )
    .await?;

    if timeout(QUERY_REPLY_TIMEOUT, wait_for_query_aid(r, framer))
        .await
        .is_err()
    {
        if dynamic {
            return Err(Error::UnknownTerminal);
        }
        debug!("no query reply within deadline; keeping {rows}x{cols}");
        return Ok((rows, cols, None));
    }

    let mut saw_usable_area = false;
    let mut codepage_id: Option<u16> = None;
    let mut x3270 = false;

    loop {
        let Some(len_bytes) = framer.read_n(r, 2).await? else {
            break; // end of the reply record
        };
        let len = u16::from_be_bytes([len_bytes[0], len_bytes[1]]) as usize;
        let body_len = len.checked_sub(2).ok_or(Error::Protocol)?;
        let Some(reply) = framer.read_n(r, body_len).await? else {
            return Err(Error::Protocol);
        };
        if reply.len() < 2 || reply[0] != 0x81 {
            debug!("skipping malformed query reply element ({} bytes)", reply.len());
            continue;
        }
        match reply[1] {
            QCODE_USABLE_AREA => {
                if reply.len() < 8 {
                    return Err(Error::Protocol);
                }
                let reported_cols = u16::from_be_bytes([reply[4], reply[5]]);
                let reported_rows = u16::from_be_bytes([reply[6], reply[7]]);
                if reported_rows == 0 || reported_cols == 0 {
                    return Err(Error::Protocol);
                }
                cols = reported_cols;
                rows = reported_rows;
                // Buffer addresses top out at 14 bits; give up rows until
                // the whole screen stays addressable.
                while rows as u32 * cols as u32 >= MAX_ADDRESS && rows > 1 {
                    rows -= 1;
                }
                debug!("usable area {reported_rows}x{reported_cols}, using {rows}x{cols}");
                saw_usable_area = true;
            }
            QCODE_CHARACTER_SETS => {
                codepage_id = parse_character_sets(&reply);
            }
            QCODE_RPQ_NAMES => {
                if reply.len() >= 16 && reply[11..16] == RPQ_X3270 {
                    x3270 = true;
                }
            }
            other => {
                debug!("ignoring query reply 0x{other:02x}");
            }
        }
    }

    if dynamic && !saw_usable_area {
        warn!("IBM-DYNAMIC terminal sent no usable area reply");
        return Err(Error::UnknownTerminal);
    }

    let codepage = match codepage_id {
        // x3270's CP 37 is really its "bracket" mapping.
        Some(37) if x3270 => Some(cp_bracket()),
        Some(id) => {
            let cp = codepage_for_id(id);
            if cp.is_none() {
                debug!("client code page {id} not recognized, using default");
            }
            cp
        }
        None => None,
    };

    Ok((rows, cols, codepage))
}

/// Skip bytes until the structured-field AID that introduces the query
/// reply record.
async fn wait_for_query_aid<R>(r: &mut R, framer: &mut Framer) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    loop {
        match framer.read_byte(r, true).await? {
            Framed::Byte(AID_STRUCTURED_FIELD) => return Ok(()),
            Framed::Byte(b) => debug!("skipping byte 0x{b:02x} while awaiting query reply"),
            Framed::Eor => {}
        }
    }
}

/// Pull the code-page identifier out of a Character Sets reply: when the
/// graphic-escape flag is up, descriptors of `reply[10]` bytes start at
/// offset 11, and the one with local ID 0 carries the CGCSGID whose low
/// half is the code page.
fn parse_character_sets(reply: &[u8]) -> Option<u16> {
    if reply.len() <= 11 || reply[2] & 0x40 == 0 {
        return None;
    }
    let descriptor_len = reply[10] as usize;
    if descriptor_len < 2 {
        return None;
    }
    let mut offset = 11;
    while offset + descriptor_len <= reply.len() {
        if reply[offset] == 0 {
            let hi = reply[offset + descriptor_len - 2];
            let lo = reply[offset + descriptor_len - 1];
            return Some(u16::from_be_bytes([hi, lo]));
        }
        offset += descriptor_len;
    }
    None
}
