//! Wire protocol for the AeroSpace socket
//!
//! One JSON object per request and one per response. The protocol has no
//! length prefix and no delimiter; a response is complete when its JSON
//! value parses in full.

use serde::{Deserialize, Serialize};

use crate::IpcError;

/// A request sent to the AeroSpace socket.
///
/// The `command` field is a legacy of the protocol and is always sent empty;
/// the actual command name travels as the first element of `args`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub command: String,
    pub args: Vec<String>,
    pub stdin: String,
}

impl Command {
    /// Build a request for `command` with the given arguments.
    pub fn new(command: &str, args: &[&str]) -> Self {
        let mut all_args = Vec::with_capacity(args.len() + 1);
        all_args.push(command.to_string());
        all_args.extend(args.iter().map(|arg| arg.to_string()));

        Self {
            command: String::new(),
            args: all_args,
            stdin: String::new(),
        }
    }

    /// Serialize the request to its wire form.
    pub fn encode(&self) -> Result<Vec<u8>, IpcError> {
        serde_json::to_vec(self).map_err(IpcError::EncodeFailed)
    }
}

/// A response read from the AeroSpace socket.
///
/// List-style payloads (window lists, workspace lists) arrive as nested JSON
/// inside `stdout` and are decoded a second time by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub server_version: String,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl Response {
    /// Deserialize a response that is known to be complete.
    pub fn decode(buf: &[u8]) -> Result<Self, IpcError> {
        serde_json::from_slice(buf).map_err(IpcError::DecodeFailed)
    }

    /// Attempt to decode a response from a buffer that may still be growing.
    ///
    /// Returns `Ok(None)` while `buf` holds only a prefix of the response
    /// JSON, so the reader can keep appending chunks. Any error other than
    /// premature end of input is a real decode failure.
    pub fn decode_partial(buf: &[u8]) -> Result<Option<Self>, IpcError> {
        match serde_json::from_slice(buf) {
            Ok(response) => Ok(Some(response)),
            Err(err) if err.is_eof() => Ok(None),
            Err(err) => Err(IpcError::DecodeFailed(err)),
        }
    }

    /// Apply the remote-failure policy.
    ///
    /// Any non-zero exit code or any stderr output fails the whole call;
    /// callers never get a partial response to inspect.
    pub fn checked(self) -> Result<Self, IpcError> {
        if self.exit_code != 0 || !self.stderr.is_empty() {
            return Err(IpcError::CommandFailed {
                exit_code: self.exit_code,
                stderr: self.stderr,
            });
        }

        Ok(self)
    }
}
