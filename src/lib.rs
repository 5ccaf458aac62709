//! Server-side TN3270 for full-screen panel applications.
//!
//! `panel3270` speaks the IBM 3270 terminal protocol over a telnet transport.
//! An application negotiates a connection into tn3270 mode, then repeatedly
//! presents [`Screen`]s of [`Field`]s and receives a [`Response`] carrying the
//! Attention-ID key the user pressed, the cursor position, and the modified
//! field values keyed by field name.
//!
//! The crate is transport-agnostic: it works over any
//! [`AsyncRead`](tokio::io::AsyncRead)/[`AsyncWrite`](tokio::io::AsyncWrite)
//! pair, so the TCP listener (and TLS, if any) belongs to the caller. One
//! connection is served by one task; blocking in [`Terminal::show_screen`]
//! while waiting for input is the normal mode of operation.
//!
//! ```no_run
//! use panel3270::{Field, ScreenOpts, Terminal};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let listener = TcpListener::bind("0.0.0.0:3270").await?;
//!     loop {
//!         let (socket, _) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let (r, w) = tokio::io::split(socket);
//!             let mut term = Terminal::negotiate(r, w).await?;
//!             let screen = vec![
//!                 Field::text(0, 27, "Welcome to the sample panel"),
//!                 Field::text(2, 0, "Your name:"),
//!                 Field::input(2, 12, "name"),
//!             ];
//!             let resp = term
//!                 .show_screen(&screen, None, ScreenOpts::default().cursor(2, 13))
//!                 .await?;
//!             println!("{} pressed, name={:?}", resp.aid, resp.values.get("name"));
//!             Ok::<_, panel3270::Error>(())
//!         });
//!     }
//! }
//! ```
//!
//! Character translation defaults to EBCDIC code page 1047 and can be changed
//! process-wide with [`set_default_codepage`], per connection (detected from
//! the client's Character Sets query reply), or per call via
//! [`ScreenOpts::codepage`].

mod codepages;
mod datastream;
mod ebcdic;
mod looper;
mod negotiate;
mod response;
mod screen;
mod telnet;
mod terminal;
mod transactions;

pub use datastream::Aid;
pub use ebcdic::{
    codepage_for_id, cp037, cp1047, cp1140, cp1148, cp500, cp_bracket, default_codepage,
    set_default_codepage, Codepage,
};
pub use looper::{handle_screen, is_integer, non_blank, FieldRules, Rules, Validator};
pub use negotiate::DeviceInfo;
pub use response::Response;
pub use screen::{Color, Field, Highlight, PostSendCallback, Screen, ScreenOpts};
pub use terminal::Terminal;
pub use transactions::{run_transactions, Transaction};

use thiserror::Error as ThisError;

/// Errors surfaced by the library.
///
/// Nothing is retried internally: every error terminates the current call,
/// and the caller is expected to close the connection. Cancelling a
/// connection is done by closing the underlying socket, which surfaces here
/// as [`Error::Io`].
#[derive(Debug, ThisError)]
pub enum Error {
    /// The client rejected an option, answered for the wrong option, or sent
    /// a malformed subnegotiation: this terminal cannot do tn3270.
    #[error("client failed tn3270 option negotiation")]
    NegotiationFailed,

    /// Unexpected bytes or an unexpected end-of-record while parsing the
    /// 3270 data stream.
    #[error("malformed 3270 data stream")]
    Protocol,

    /// The client claimed `IBM-DYNAMIC` but never reported a usable area,
    /// so no screen dimensions are known.
    #[error("terminal reported no usable screen dimensions")]
    UnknownTerminal,

    /// Transport failure, including reads on a connection closed by the
    /// peer or by cancellation.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `post_send` callback returned an error; it is passed through
    /// verbatim.
    #[error("post-send callback failed: {0}")]
    Callback(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
