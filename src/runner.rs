//! Request envelope handling
//!
//! One request in, one response out:
//! parse → resolve backend → open + key → execute → close → respond.
//! Every failure after parsing still goes through the close step, and every
//! failure at all ends up as a `Failure` envelope.

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{execute, Outcome, Result};
use crate::db::{open_keyed, resolve};
use crate::enums::Operation;
use crate::request::Request;
use crate::response::Response;

pub struct Runner<'a> {
    config: &'a Config,
}

impl<'a> Runner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Handle a raw payload. Parse failures never open a database.
    pub fn handle_raw(&self, raw: &str) -> Response {
        match Request::parse(raw) {
            Ok(request) => self.handle(&request),
            Err(err) => {
                warn!(%err, "request rejected before opening the database");
                Response::failure(&err)
            }
        }
    }

    pub fn handle(&self, request: &Request) -> Response {
        match self.run(request) {
            Ok(outcome) => Response::from_outcome(outcome, request.row_mode()),
            Err(err) => {
                info!(%err, op = ?request.op, "request failed");
                Response::failure(&err)
            }
        }
    }

    fn run(&self, request: &Request) -> Result<Outcome> {
        let backend = resolve(self.config.driver.backend)?;
        let handle = open_keyed(
            backend.as_ref(),
            &request.db_path,
            &request.key(),
            &self.config.pragmas,
        )?;
        debug!(backend = %handle.backend(), path = %handle.path().display(), "handle open");

        let result = Operation::parse(request.op.as_deref()).and_then(|op| {
            debug!(%op, "executing");
            execute(handle.connection(), request, op)
        });

        match (result, handle.close()) {
            (Ok(outcome), Ok(())) => Ok(outcome),
            (Ok(_), Err(close_err)) => Err(close_err),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(close_err)) => {
                warn!(%close_err, "close failed after an earlier error");
                Err(err)
            }
        }
    }
}
