//! One negotiated 3270 connection.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::ebcdic::default_codepage;
use crate::negotiate::{self, DeviceInfo};
use crate::response::{read_response, Response};
use crate::screen::{build_screen, Field, ScreenOpts};
use crate::telnet::Framer;
use crate::{Error, Result};

/// Default screen rows when the alternate size is not selected.
const DEFAULT_ROWS: u16 = 24;
/// Default screen columns when the alternate size is not selected.
const DEFAULT_COLS: u16 = 80;

/// A connection that has completed tn3270 negotiation.
///
/// Create one with [`Terminal::negotiate`], then call
/// [`show_screen`](Terminal::show_screen) once per panel round trip. The
/// write half is shared behind a mutex so a second task can push
/// `no_response` + `no_clear` updates (a ticking clock, a status line)
/// while this task is blocked waiting for input; see [`writer`](Terminal::writer).
///
/// All reads carry framer state and must stay on this task; cancellation is
/// done by closing the underlying connection, which surfaces as
/// [`Error::Io`] from whatever call is blocked.
pub struct Terminal<R, W> {
    reader: R,
    writer: Arc<Mutex<W>>,
    framer: Framer,
    info: DeviceInfo,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Negotiate a fresh connection into tn3270 mode and probe the device.
    ///
    /// Drives the Terminal-Type / End-Of-Record / Binary exchanges (in both
    /// directions, resolving crossed requests), then queries the client for
    /// its usable screen area and code page. Clients that reject any option
    /// fail with [`Error::NegotiationFailed`]; a client that never answers
    /// the query simply keeps the dimensions implied by its terminal type.
    pub async fn negotiate(mut reader: R, mut writer: W) -> Result<Self> {
        let mut framer = Framer::default();
        let info = negotiate::negotiate(&mut reader, &mut writer, &mut framer).await?;
        Ok(Terminal {
            reader,
            writer: Arc::new(Mutex::new(writer)),
            framer,
            info,
        })
    }

    /// What negotiation learned about this client.
    pub fn device_info(&self) -> &DeviceInfo {
        &self.info
    }

    /// A handle to the shared write half, for tasks that push unsolicited
    /// screen updates while this task waits for input.
    ///
    /// Such updates must set both `no_response` and `no_clear`, and must
    /// not change the field layout while a read is pending: the pending
    /// reader still maps inbound addresses with the fieldmap of the screen
    /// it wrote.
    pub fn writer(&self) -> Arc<Mutex<W>> {
        Arc::clone(&self.writer)
    }

    /// Present a screen and (unless `no_response` is set) wait for the
    /// client's reply.
    ///
    /// `values` overrides the content of named fields, letting one screen
    /// definition serve many round trips. The datastream goes out in a
    /// single write; field content is not IAC-escaped (3270 text never
    /// contains 0xFF in the shipped code pages, so callers emitting raw
    /// binary would have to escape it themselves).
    ///
    /// The response's field values have surrounding ASCII whitespace
    /// trimmed except for fields with `keep_spaces` set.
    pub async fn show_screen(
        &mut self,
        screen: &[Field],
        values: Option<&HashMap<String, String>>,
        mut opts: ScreenOpts,
    ) -> Result<Response> {
        let codepage = opts
            .codepage
            .or_else(|| self.info.codepage())
            .unwrap_or_else(default_codepage);
        let (rows, cols) = if opts.alt_screen {
            (self.info.rows(), self.info.cols())
        } else {
            (DEFAULT_ROWS, DEFAULT_COLS)
        };

        let (bytes, fieldmap) = build_screen(screen, values, &opts, rows, cols, codepage)?;
        {
            let mut w = self.writer.lock().await;
            w.write_all(&bytes).await?;
            w.flush().await?;
        }

        if let Some(callback) = opts.post_send.take() {
            callback().map_err(Error::Callback)?;
        }

        if opts.no_response {
            return Ok(Response::default());
        }

        let mut response =
            read_response(&mut self.reader, &mut self.framer, &fieldmap, cols, codepage).await?;

        for field in screen {
            if field.keep_spaces || field.name.is_empty() {
                continue;
            }
            if let Some(value) = response.values.get_mut(&field.name) {
                let trimmed = value
                    .trim_matches(|c: char| c.is_ascii_whitespace())
                    .to_string();
                *value = trimmed;
            }
        }

        Ok(response)
    }

    /// Best-effort return of the connection to line-mode telnet: sends
    /// WONT/DONT for the tn3270 options and drains replies until `deadline`
    /// passes. Consumes the terminal; the transport halves come back for
    /// reuse or closing.
    pub async fn un_negotiate(mut self, deadline: Duration) -> Result<(R, W)> {
        let mut writer = Arc::try_unwrap(self.writer)
            .map_err(|_| {
                Error::Io(std::io::Error::other(
                    "write half still shared during un-negotiate",
                ))
            })?
            .into_inner();
        negotiate::un_negotiate(&mut self.reader, &mut writer, deadline).await?;
        Ok((self.reader, writer))
    }
}

impl<R, W> std::fmt::Debug for Terminal<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Terminal").field("info", &self.info).finish()
    }
}
