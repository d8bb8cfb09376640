//! Handing found torrents to a running Transmission daemon.

pub mod credentials;
pub mod transmission;

use std::path::Path;

use credentials::{authenticate, stored_password, KeyringStore, StdinPrompt, PASSWORD_ENV};
use transmission::{RpcSettings, TransmissionClient};

use crate::services::torrents::Magnet;
use crate::types::errors::CuratorResult;

pub const ADDED_HEADER: &str = "The Following Unmatched Torrents Have Just Been Added:";
pub const NOTHING_TO_ADD: &str = "*** There's Nothing to Add ***";

/// Anything that accepts magnet links for download.
pub trait TorrentAdder {
    fn add_torrent(&mut self, magnet_uri: &str) -> CuratorResult<()>;
}

/// Add every magnet and describe what happened.
///
/// Stops at the first failure so a broken session is not retried per link.
pub fn add_all<A: TorrentAdder + ?Sized>(adder: &mut A, magnets: &[Magnet]) -> CuratorResult<String> {
    if magnets.is_empty() {
        return Ok(NOTHING_TO_ADD.to_string());
    }

    for magnet in magnets {
        adder.add_torrent(&magnet.uri)?;
        log::info!("Added {}", magnet.name);
    }
    Ok(added_summary(magnets.iter().map(|m| m.name.as_str())))
}

/// Open an authenticated session with the daemon configured in
/// `<transmission_dir>/settings.json`.
pub fn connect(transmission_dir: &Path) -> CuratorResult<TransmissionClient> {
    let settings = RpcSettings::load(transmission_dir)?;
    let mut client = TransmissionClient::new(&settings)?;
    log::info!("Connecting to Transmission at {}", client.endpoint());

    let store = KeyringStore;
    let username = settings.rpc_username.clone();
    let initial = stored_password(std::env::var(PASSWORD_ENV).ok(), &store, &username);
    let password = authenticate(&username, initial, &store, &mut StdinPrompt, |password| {
        client.set_password(password.map(str::to_string));
        client.check_session()
    })?;

    client.set_password(password);
    Ok(client)
}

pub fn added_summary<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut summary = String::from(ADDED_HEADER);
    for name in names {
        summary.push_str("\n- ");
        summary.push_str(name);
    }
    summary
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
