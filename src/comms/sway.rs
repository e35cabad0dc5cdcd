use std::num::ParseIntError;

use swayipc::Connection;
use thiserror::Error;

use crate::{
    absolute::{self, Output, OutputConfig, OutputRef},
    engine::{self, Pair},
    geometry::{Interval, Rect, Rotation, Size, Transform},
};

use super::{ChangeEvent, ObservedOutput, Port, Result};

pub fn establish() -> Result<Box<dyn super::Comms>> {
    let conn = Connection::new().map_err(Error::SwayIpc)?;
    Ok(Box::new(Comms { conn }) as Box<dyn super::Comms>)
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Over IPC: {0}")]
    SwayIpc(#[from] swayipc::Error),
    #[error("Could not parse output name into port: {0}")]
    ParsePort(ParsePortError),
}

#[derive(Debug)]
pub struct Comms {
    pub conn: Connection,
}

impl super::Comms for Comms {
    fn layout(&mut self) -> Result<absolute::Layout> {
        let outputs = self.conn.get_outputs().map_err(Error::SwayIpc)?;
        let layout = outputs
            .into_iter()
            .map(Output::try_from)
            .collect::<Result<absolute::Layout, ParsePortError>>()
            .map_err(Error::ParsePort)?;

        Ok(layout)
    }

    fn set_layout(&mut self, layout: &absolute::Layout) -> Result<()> {
        for cmd in layout.to_sway_commands() {
            self.conn
                .run_command(cmd)
                // all below is just propagating errors, if any
                .map_err(Error::SwayIpc)?
                .into_iter()
                .collect::<Result<(), _>>()
                .map_err(Error::SwayIpc)?;
        }

        Ok(())
    }

    fn observe(&mut self) -> Result<Vec<ObservedOutput>> {
        let outputs = self.conn.get_outputs().map_err(Error::SwayIpc)?;
        outputs
            .into_iter()
            .map(ObservedOutput::try_from)
            .collect::<Result<Vec<_>, ParsePortError>>()
            .map_err(Error::ParsePort)
            .map_err(Into::into)
    }

    fn set_arrangement(
        &mut self,
        arrangement: &engine::Arrangement,
        outputs: &[ObservedOutput],
    ) -> Result<()> {
        for (output, position) in outputs.iter().zip(&arrangement.positions) {
            let cmd = format!(
                "output {port} position {pos_x} {pos_y} resolution {res_width}x{res_height}",
                port = output.port,
                pos_x = position.x,
                pos_y = position.y,
                res_width = output.size.width,
                res_height = output.size.height,
            );

            self.conn
                .run_command(cmd)
                .map_err(Error::SwayIpc)?
                .into_iter()
                .collect::<Result<(), _>>()
                .map_err(Error::SwayIpc)?;
        }

        Ok(())
    }

    fn subscribe(&mut self) -> Result<Box<dyn Iterator<Item = Result<ChangeEvent>>>> {
        // subscribing consumes a connection, so this opens a second one
        // rather than taking `self.conn`, which stays free for commands.
        let events = Connection::new()
            .map_err(Error::SwayIpc)?
            .subscribe([swayipc::EventType::Output])
            .map_err(Error::SwayIpc)?;

        let events = events.map(|event| {
            event
                .map(|_| ChangeEvent::OutputsChanged)
                .map_err(|err| Error::SwayIpc(err).into())
        });

        Ok(Box::new(events))
    }
}

/// EDID-like identity for a sway output: make/model/serial if sway reports
/// them, the port name otherwise (e.g. headless outputs report empty
/// strings for all three).
fn identity_of(raw: &swayipc::Output) -> String {
    if raw.make.is_empty() && raw.model.is_empty() && raw.serial.is_empty() {
        raw.name.clone()
    } else {
        format!("{}-{}-{}", raw.make, raw.model, raw.serial)
    }
}

impl TryFrom<swayipc::Output> for ObservedOutput {
    type Error = ParsePortError;

    fn try_from(raw: swayipc::Output) -> Result<Self, ParsePortError> {
        let port = Port::parse_from_sway(&raw.name)?;
        let identity = identity_of(&raw);
        let size = raw
            .current_mode
            .as_ref()
            .map(|mode| Size {
                width: mode.width,
                height: mode.height,
            })
            .unwrap_or(Size {
                width: raw.rect.width,
                height: raw.rect.height,
            });
        let position = raw.active.then(|| Pair::new(raw.rect.x, raw.rect.y));

        Ok(Self {
            port,
            identity,
            size,
            position,
            active: raw.active,
        })
    }
}

impl TryFrom<swayipc::Output> for Output {
    type Error = ParsePortError;
    fn try_from(raw: swayipc::Output) -> Result<Self, ParsePortError> {
        let bounds: Rect = raw.rect.into();
        let resolution = raw.current_mode.map(|mode| Size {
            width: mode.width,
            height: mode.height,
        });
        let transform = Transform {
            flipped: false,
            rotation: raw
                .transform
                .as_deref()
                .map(Rotation::from_sway)
                .unwrap_or_default(),
        };

        Ok(Self {
            port: Port::parse_from_sway(&raw.name)?,
            cfg: OutputConfig {
                bounds,
                scale: raw.scale.unwrap_or(1.0),
                resolution,
                transform,
                active: raw.active,
            },
        })
    }
}

impl Rotation {
    /// Sway reports transforms as `"normal"`, `"90"`, `"180"`, `"270"`, and
    /// their `"flipped*"` counterparts; flip is tracked separately, so only
    /// the rotation component is read here. Unknown strings fall back to
    /// [`Rotation::None`] rather than failing the whole output lookup.
    fn from_sway(raw: &str) -> Self {
        match raw {
            "90" | "flipped-90" => Self::Cw90,
            "180" | "flipped-180" => Self::Cw180,
            "270" | "flipped-270" => Self::Cw270,
            _ => Self::None,
        }
    }
}

impl Port {
    fn parse_from_sway(name: &str) -> Result<Self, ParsePortError> {
        let (kind, idx) = name
            .rsplit_once('-')
            .ok_or_else(|| ParsePortError::NoDash {
                name: name.to_string(),
            })?;

        Ok(Self {
            kind: kind.parse().map_err(|_| ParsePortError::NewConnector {
                connector: kind.to_string(),
            })?,
            idx: idx.parse().map_err(|err| ParsePortError::IdxNotANumber {
                idx: idx.to_string(),
                err,
            })?,
        })
    }
}

#[derive(Debug, Error)]
pub enum ParsePortError {
    #[error("Output name must contain a dash to separate connector from index, but is `{name}`")]
    NoDash { name: String },
    #[error("New unknown connector name `{connector}`, perhaps libDRM got updated with new connectors? Need to add them in source here then. Feel free to report this!")]
    NewConnector { connector: String },
    #[error("Port index `{idx}` is not an integer: {err}")]
    IdxNotANumber { idx: String, err: ParseIntError },
}

impl From<swayipc::Rect> for Rect {
    fn from(model: swayipc::Rect) -> Self {
        Self {
            x: Interval::new(model.x, model.x + model.width),
            y: Interval::new(model.y, model.y + model.height),
        }
    }
}

impl absolute::Layout {
    pub fn to_sway_commands(&self) -> impl Iterator<Item = String> + '_ {
        self.outputs().map(|output| output.to_sway_command())
    }
}

impl OutputRef<'_> {
    #[must_use]
    pub fn to_sway_command(&self) -> String {
        let bounds = self.cfg.bounds;
        let size = bounds.size();
        format!(
            concat!(
                "output {port} ",
                "position {pos_x} {pos_y} ",
                "resolution {res_width}x{res_height} ",
                "scale {scale}",
            ),
            port = self.port,
            pos_x = bounds.x.start(),
            pos_y = bounds.y.start(),
            res_width = size.width,
            res_height = size.height,
            scale = self.cfg.scale,
        )
    }
}
