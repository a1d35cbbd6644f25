// libmful/src/session/auth.rs

//! Password authentication.
//!
//! The PWD_AUTH command travels in raw mode like the version query. A tag
//! that accepts the password answers with its 2-byte PACK, which is kept
//! with the password for the dump overlay; the tag never exposes either in
//! a memory read.

use log::debug;

use crate::protocol::commands::password_auth;
use crate::secrets::Secrets;
use crate::types::{Pack, Password};
use crate::{Error, Result};

use super::Session;

impl Session {
    /// Authenticate with the tag and record the password/PACK pair for the
    /// dump overlay.
    pub fn authenticate(&mut self, password: Password) -> Result<Pack> {
        let frame = password_auth(&password);
        debug!("authenticating with password {}", password.to_hex());

        let response = match self.with_raw(|s| s.send_bytes(&frame)) {
            Ok(response) => response,
            Err(err @ Error::DeviceConfig(_)) => return Err(err),
            Err(_) => return Err(Error::AuthFailed),
        };

        let pack = Pack::try_from(&response[..]).map_err(|_| Error::AuthFailed)?;
        debug!("auth success, PACK {}", pack.to_hex());
        self.store_secrets(Secrets { password, pack });
        Ok(pack)
    }
}
