//! RPC password resolution: environment, then the OS keyring, then a
//! terminal prompt.

use std::io::{self, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use keyring::Entry;

use super::transmission::is_unauthorized;
use crate::types::errors::{CuratorError, CuratorResult};

pub const KEYRING_SERVICE: &str = "magcurate.transmission";
pub const PASSWORD_ENV: &str = "MAGCURATE_RPC_PASSWORD";
pub const MAX_ATTEMPTS: usize = 3;
pub const TOO_MANY_ATTEMPTS: &str = "Too many incorrect password attempts";

/// Persistent password storage keyed by RPC username.
pub trait PasswordStore {
    fn load(&self, username: &str) -> CuratorResult<Option<String>>;
    fn save(&self, username: &str, password: &str) -> CuratorResult<()>;
}

/// Asks the user for a password.
pub trait PasswordPrompt {
    /// `retry` is set after a rejected password.
    fn ask(&mut self, retry: bool) -> CuratorResult<String>;
}

pub struct KeyringStore;

impl KeyringStore {
    fn entry(username: &str) -> CuratorResult<Entry> {
        Entry::new(KEYRING_SERVICE, username)
            .map_err(|err| CuratorError::Credential(format!("failed to create keyring entry: {err}")))
    }
}

impl PasswordStore for KeyringStore {
    fn load(&self, username: &str) -> CuratorResult<Option<String>> {
        match Self::entry(username)?.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(CuratorError::Credential(format!(
                "failed to get keyring password: {err}"
            ))),
        }
    }

    fn save(&self, username: &str, password: &str) -> CuratorResult<()> {
        Self::entry(username)?
            .set_password(password)
            .map_err(|err| CuratorError::Credential(format!("failed to set keyring password: {err}")))
    }
}

/// Reads a password from the terminal with echo off. Refuses to block when
/// stdin is not a terminal.
pub struct StdinPrompt;

impl PasswordPrompt for StdinPrompt {
    fn ask(&mut self, retry: bool) -> CuratorResult<String> {
        if !io::stdin().is_terminal() {
            return Err(CuratorError::Credential(format!(
                "Transmission rejected the credentials; set {PASSWORD_ENV} or run interactively"
            )));
        }
        if retry {
            eprintln!("\nincorrect password: please try again");
        }
        print!("Password: ");
        io::stdout().flush()?;
        let password = read_hidden();
        println!();
        password
    }
}

/// Effect of one keypress on a password being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Pending,
    Submitted,
    Cancelled,
}

pub fn apply_key(buffer: &mut String, key: KeyEvent) -> KeyInput {
    if key.kind != KeyEventKind::Press {
        return KeyInput::Pending;
    }
    match key.code {
        KeyCode::Enter => KeyInput::Submitted,
        KeyCode::Esc => KeyInput::Cancelled,
        KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyInput::Cancelled
        }
        KeyCode::Backspace => {
            buffer.pop();
            KeyInput::Pending
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            KeyInput::Pending
        }
        _ => KeyInput::Pending,
    }
}

/// Raw mode for the lifetime of the guard, so keys are neither echoed nor
/// line-buffered.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn read_hidden() -> CuratorResult<String> {
    let _raw = RawModeGuard::enable()?;
    let mut password = String::new();
    loop {
        if let Event::Key(key) = event::read()? {
            match apply_key(&mut password, key) {
                KeyInput::Pending => {}
                KeyInput::Submitted => return Ok(password),
                KeyInput::Cancelled => {
                    return Err(CuratorError::Credential("Password entry cancelled".into()))
                }
            }
        }
    }
}

/// Password known without asking: `env_value` first, then the store.
/// Store failures are logged and treated as "no password".
pub fn stored_password<S: PasswordStore + ?Sized>(
    env_value: Option<String>,
    store: &S,
    username: &str,
) -> Option<String> {
    if let Some(password) = env_value.filter(|p| !p.is_empty()) {
        log::debug!("Using RPC password from {PASSWORD_ENV}");
        return Some(password);
    }
    match store.load(username) {
        Ok(password) => password,
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}

/// Run `attempt` until the daemon accepts a password.
///
/// The first try uses `initial` (possibly `None`). Each rejection asks
/// `prompt` for a new password; after [`MAX_ATTEMPTS`] rejected prompted
/// passwords this fails with [`TOO_MANY_ATTEMPTS`]. A prompted password that
/// works is saved to `store`. Errors other than "unauthorized" end the loop
/// immediately.
pub fn authenticate<S, P, F>(
    username: &str,
    initial: Option<String>,
    store: &S,
    prompt: &mut P,
    mut attempt: F,
) -> CuratorResult<Option<String>>
where
    S: PasswordStore + ?Sized,
    P: PasswordPrompt + ?Sized,
    F: FnMut(Option<&str>) -> CuratorResult<()>,
{
    let mut password = initial;
    let mut prompted = false;
    let mut rejected = 0;

    loop {
        match attempt(password.as_deref()) {
            Ok(()) => {
                if prompted {
                    if let Some(p) = &password {
                        if let Err(e) = store.save(username, p) {
                            log::warn!("Password not saved: {e}");
                        }
                    }
                }
                return Ok(password);
            }
            Err(e) if is_unauthorized(&e) => {
                if prompted {
                    rejected += 1;
                    log::info!("{rejected} incorrect password attempts");
                    if rejected >= MAX_ATTEMPTS {
                        log::error!("{TOO_MANY_ATTEMPTS}");
                        return Err(CuratorError::Credential(TOO_MANY_ATTEMPTS.into()));
                    }
                }
                password = Some(prompt.ask(prompted)?);
                prompted = true;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
#[path = "tests/credentials_tests.rs"]
mod tests;
