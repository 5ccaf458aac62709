//! Telnet byte framing.
//!
//! Everything the library reads after option negotiation rides on the
//! [`Framer`]: a small state machine that strips telnet command sequences
//! out of the byte stream, collapses the `IAC IAC` escape into a literal
//! 0xFF, skips subnegotiations wholesale, and reports End-Of-Record marks
//! (`IAC EOR`) to callers that asked for them.
//!
//! The framer carries state across reads, so all reads on one connection
//! must go through one `Framer` and must be serialized.

use log::trace;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::{Error, Result};

/// Interpret As Command.
pub(crate) const IAC: u8 = 0xFF;

/// End of subnegotiation parameters.
pub(crate) const CMD_SE: u8 = 0xF0;
/// Subnegotiation begin.
pub(crate) const CMD_SB: u8 = 0xFA;
pub(crate) const CMD_WILL: u8 = 0xFB;
pub(crate) const CMD_WONT: u8 = 0xFC;
pub(crate) const CMD_DO: u8 = 0xFD;
pub(crate) const CMD_DONT: u8 = 0xFE;
/// End-Of-Record mark (telnet command 239); follows IAC between 3270 records.
pub(crate) const CMD_EOR: u8 = 0xEF;

pub(crate) const OPT_BINARY: u8 = 0x00;
pub(crate) const OPT_TERMINAL_TYPE: u8 = 0x18;
pub(crate) const OPT_EOR: u8 = 0x19;

/// Terminal-type subnegotiation subcommands.
pub(crate) const TERMINAL_TYPE_IS: u8 = 0x00;
pub(crate) const TERMINAL_TYPE_SEND: u8 = 0x01;

/// Record separator appended to every outbound 3270 data stream.
pub(crate) const EOR_MARK: [u8; 2] = [IAC, CMD_EOR];

/// One unit delivered by the framer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Framed {
    /// A data byte, with telnet escapes already resolved.
    Byte(u8),
    /// An end-of-record mark (only when requested via `pass_eor`).
    Eor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    Command,
    Subneg,
}

/// Telnet read-side state machine.
#[derive(Debug)]
pub(crate) struct Framer {
    state: State,
}

impl Default for Framer {
    fn default() -> Self {
        Framer {
            state: State::Normal,
        }
    }
}

impl Framer {
    /// Read the next data byte, transparently consuming telnet commands.
    ///
    /// With `pass_eor` set, an `IAC EOR` mark is reported as
    /// [`Framed::Eor`]; otherwise it is consumed like any other command and
    /// the read continues.
    pub(crate) async fn read_byte<R>(&mut self, r: &mut R, pass_eor: bool) -> Result<Framed>
    where
        R: AsyncRead + Unpin,
    {
        loop {
            let b = r.read_u8().await?;
            match self.state {
                State::Normal => {
                    if b == IAC {
                        self.state = State::Command;
                    } else {
                        return Ok(Framed::Byte(b));
                    }
                }
                State::Command => match b {
                    IAC => {
                        // IAC IAC is an escaped literal 0xFF data byte.
                        self.state = State::Normal;
                        return Ok(Framed::Byte(IAC));
                    }
                    CMD_SB => {
                        self.state = State::Subneg;
                    }
                    CMD_EOR => {
                        self.state = State::Normal;
                        if pass_eor {
                            return Ok(Framed::Eor);
                        }
                        trace!("consumed IAC EOR mid-stream");
                    }
                    other => {
                        self.state = State::Normal;
                        trace!("consumed telnet command 0x{other:02x}");
                    }
                },
                State::Subneg => {
                    if b == CMD_SE {
                        self.state = State::Normal;
                    }
                }
            }
        }
    }

    /// Read a byte that must be data; an end-of-record here is malformed.
    pub(crate) async fn read_data_byte<R>(&mut self, r: &mut R) -> Result<u8>
    where
        R: AsyncRead + Unpin,
    {
        match self.read_byte(r, true).await? {
            Framed::Byte(b) => Ok(b),
            Framed::Eor => Err(Error::Protocol),
        }
    }

    /// Read exactly `n` data bytes.
    ///
    /// Returns `None` when the very first thing read is an end-of-record
    /// mark, so callers looping over length-prefixed replies can detect the
    /// end of the record without treating it as an error. An EOR after the
    /// first byte is a truncated element and fails with
    /// [`Error::Protocol`].
    pub(crate) async fn read_n<R>(&mut self, r: &mut R, n: usize) -> Result<Option<Vec<u8>>>
    where
        R: AsyncRead + Unpin,
    {
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            match self.read_byte(r, true).await? {
                Framed::Byte(b) => out.push(b),
                Framed::Eor if out.is_empty() => return Ok(None),
                Framed::Eor => return Err(Error::Protocol),
            }
        }
        Ok(Some(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn drain(input: &[u8], pass_eor: bool) -> (Vec<u8>, usize) {
        let mut framer = Framer::default();
        let mut r = input;
        let mut bytes = Vec::new();
        let mut eors = 0;
        loop {
            match framer.read_byte(&mut r, pass_eor).await {
                Ok(Framed::Byte(b)) => bytes.push(b),
                Ok(Framed::Eor) => eors += 1,
                Err(Error::Io(_)) => break,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        (bytes, eors)
    }

    #[tokio::test]
    async fn passes_plain_data_through() {
        let (bytes, eors) = drain(&[0x01, 0x02, 0x7d, 0x40], true).await;
        assert_eq!(bytes, vec![0x01, 0x02, 0x7d, 0x40]);
        assert_eq!(eors, 0);
    }

    #[tokio::test]
    async fn collapses_doubled_iac() {
        let (bytes, _) = drain(&[0x01, 0xff, 0xff, 0x02], true).await;
        assert_eq!(bytes, vec![0x01, 0xff, 0x02]);
    }

    #[tokio::test]
    async fn strips_commands_and_subnegotiation() {
        // WILL EOR, then SB TTYPE IS "X" SE, surrounded by data.
        let input = [
            0x11, 0xff, 0xfb, 0x19, 0x22, 0xff, 0xfa, 0x18, 0x00, 0x58, 0xff, 0xf0, 0x33,
        ];
        let (bytes, _) = drain(&input, true).await;
        assert_eq!(bytes, vec![0x11, 0x22, 0x33]);
    }

    #[tokio::test]
    async fn reports_eor_when_requested() {
        let (bytes, eors) = drain(&[0x7d, 0xff, 0xef, 0x60], true).await;
        assert_eq!(bytes, vec![0x7d, 0x60]);
        assert_eq!(eors, 1);
    }

    #[tokio::test]
    async fn swallows_eor_when_not_requested() {
        let (bytes, eors) = drain(&[0x7d, 0xff, 0xef, 0x60], false).await;
        assert_eq!(bytes, vec![0x7d, 0x60]);
        assert_eq!(eors, 0);
    }

    #[tokio::test]
    async fn read_n_returns_sentinel_on_leading_eor() {
        let mut framer = Framer::default();
        let mut r: &[u8] = &[0xff, 0xef, 0x01, 0x02];
        assert!(framer.read_n(&mut r, 2).await.unwrap().is_none());
        assert_eq!(framer.read_n(&mut r, 2).await.unwrap().unwrap(), vec![0x01, 0x02]);
    }

    #[tokio::test]
    async fn read_n_rejects_mid_element_eor() {
        let mut framer = Framer::default();
        let mut r: &[u8] = &[0x01, 0xff, 0xef];
        assert!(matches!(framer.read_n(&mut r, 2).await, Err(Error::Protocol)));
    }

    #[tokio::test]
    async fn subnegotiation_state_survives_across_reads() {
        let mut framer = Framer::default();
        // Start a subnegotiation but stop before SE...
        let mut first: &[u8] = &[0xff, 0xfa, 0x18];
        assert!(framer.read_byte(&mut first, true).await.is_err());
        // ...then finish it in a later read; the 0x44 after SE is data.
        let mut second: &[u8] = &[0x00, 0xff, 0xf0, 0x44];
        assert_eq!(
            framer.read_byte(&mut second, true).await.unwrap(),
            Framed::Byte(0x44)
        );
    }
}
