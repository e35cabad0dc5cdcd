//! Communication with the window manager (WM)
//! to learn about available screens
//! and apply the calculated ones.
//!
//! Only comms with [Sway](https://swaywm.org/) via [`swayipc`] are implemented.
//! Support for other WMs can be added via:
//!
//! 1. Adding a new submodule named after the WM, henceforth called `a`
//! 2. Adding a struct in `a` that implements [`Comms`]
//! 3. Building that struct in [`establish`]
//!    if there are signs present that the WM is running
//!    in the current session

pub mod sway;

use std::{env, fmt};

use thiserror::Error;

use crate::{
    absolute,
    engine::{self, Pair, Size},
    info::Connector,
};

pub type Name = String;

/// A connected output as reported by the backend, independent of whatever
/// arrangement is currently applied to it.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservedOutput {
    pub port: Port,
    /// EDID if the backend exposes one, the output name otherwise -- the
    /// per-output piece that [`crate::store::fingerprint`] sorts into a
    /// display-set identity.
    pub identity: String,
    pub size: Size,
    /// Current absolute position, if the output is currently active.
    pub position: Option<Pair>,
    pub active: bool,
}

/// One backend-reported change, classified just enough for
/// [`crate::supervisor`] to decide what to do with it.
#[derive(Clone, Debug)]
pub enum ChangeEvent {
    /// The set of connected outputs, or their modes, changed.
    OutputsChanged,
}

/// Figure out what WM we're running on and
pub fn establish() -> Result<BoxComms, Error> {
    let comms = if env::var("SWAYSOCK").is_ok() {
        sway::establish()?
    } else {
        return Err(Error::NoWmRunning);
    };

    Ok(comms)
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("When communicating with sway: {0}")]
    Sway(#[from] sway::Error),
    #[error("No known WM is running")]
    NoWmRunning,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Communicates with the window manager,
/// in order to fetch information about available outputs
/// and apply a computed layout or arrangement.
pub trait Comms {
    /// Used by the manual-DSL path ([`crate::relative::Layout::to_absolute`]).
    fn layout(&mut self) -> Result<absolute::Layout>;
    /// Used by the manual-DSL path.
    fn set_layout(&mut self, layout: &absolute::Layout) -> Result<()>;

    /// Used by [`crate::supervisor`]: every currently connected output,
    /// independent of any layout.
    fn observe(&mut self) -> Result<Vec<ObservedOutput>>;
    /// Used by [`crate::supervisor`]: applies a solved
    /// [`engine::Arrangement`] by pairing its positions with the
    /// currently-known outputs in the same order `observe` returned them.
    /// Mode, rotation and primary-output selection are untouched -- that's
    /// the caller's business, not the core's.
    fn set_arrangement(
        &mut self,
        arrangement: &engine::Arrangement,
        outputs: &[ObservedOutput],
    ) -> Result<()>;
    /// A blocking iterator of backend change events, consumed by
    /// [`crate::supervisor`]'s event loop.
    fn subscribe(&mut self) -> Result<Box<dyn Iterator<Item = Result<ChangeEvent>>>>;
}

pub type BoxComms = Box<dyn Comms>;

/// Where an output is plugged in.
///
/// This is heavily biased towards how Sway on DRM handles displays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Port {
    pub kind: Connector,
    pub idx: u32,
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.idx)
    }
}
