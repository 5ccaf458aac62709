//! A driver for multi-panel application flows.
//!
//! Each panel of an application is a [`Transaction`]; running one returns
//! the next transaction to run, or `None` when the conversation is over.
//! [`run_transactions`] executes the chain iteratively, so a login panel
//! leading to a menu leading back to the login panel never deepens the
//! stack. Data carried between panels rides in the fields of the next
//! transaction value itself.
//!
//! ```no_run
//! use async_trait::async_trait;
//! use panel3270::{run_transactions, Terminal, Transaction};
//! use tokio::io::{AsyncRead, AsyncWrite};
//!
//! struct Goodbye {
//!     username: String,
//! }
//!
//! #[async_trait]
//! impl<R, W> Transaction<R, W> for Goodbye
//! where
//!     R: AsyncRead + Unpin + Send,
//!     W: AsyncWrite + Unpin + Send,
//! {
//!     async fn run(
//!         self: Box<Self>,
//!         term: &mut Terminal<R, W>,
//!     ) -> panel3270::Result<Option<Box<dyn Transaction<R, W>>>> {
//!         // ... show a farewell screen for self.username ...
//!         Ok(None)
//!     }
//! }
//! ```

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::terminal::Terminal;
use crate::Result;

/// One step of a panel conversation.
#[async_trait]
pub trait Transaction<R, W>: Send
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Interact with the terminal and decide what happens next. Returning
    /// `Ok(None)` ends the conversation; an error ends it immediately and
    /// propagates to the caller of [`run_transactions`].
    async fn run(
        self: Box<Self>,
        term: &mut Terminal<R, W>,
    ) -> Result<Option<Box<dyn Transaction<R, W>>>>;
}

/// Run transactions starting from `initial` until one returns `None` or an
/// error.
pub async fn run_transactions<R, W>(
    term: &mut Terminal<R, W>,
    initial: Box<dyn Transaction<R, W>>,
) -> Result<()>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    let mut next = Some(initial);
    while let Some(transaction) = next.take() {
        next = transaction.run(term).await?;
    }
    Ok(())
}
