//! Event-loop glue between [`comms`], [`store`] and [`engine`].
//!
//! Nothing in here is a pure function of its inputs -- that's the whole
//! point of splitting it out of [`engine`], which is. `run` blocks on
//! [`comms::Comms::subscribe`] and, for every event, classifies it and
//! drives at most one of: learning a manual edit, or synthesizing and
//! applying a solved arrangement.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    comms::{self, ChangeEvent, Comms, ObservedOutput},
    engine::{self, normalize, Arrangement, Bounds, ConstraintMatrix},
    store::{self, Database, StoredArrangement},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not talk to the window manager: {0}")]
    Comms(#[from] comms::Error),
    #[error("Could not access the arrangement database: {0}")]
    Store(#[from] store::Error),
    #[error("The solver rejected its own input: {0}")]
    Engine(#[from] engine::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Bounds on the virtual screen size. `layaway` doesn't currently expose a
/// way to configure these, so a generous fixed ceiling is used -- see
/// Open Questions in DESIGN.md.
const BOUNDS: Bounds = Bounds {
    w_min: 0,
    w_max: 64_000,
    h_min: 0,
    h_max: 64_000,
};

/// Runs the supervising event loop until the backend connection closes or
/// errors. Call sites that want one-shot behavior (`apply`/`learn`/`show`)
/// should call [`handle_event`] directly instead of this.
pub fn run(comms: &mut dyn Comms, db: &mut Database) -> Result<()> {
    let mut last_applied: Option<Arrangement> = None;

    for event in comms.subscribe()? {
        let event = event?;
        handle_event(comms, db, event, &mut last_applied)?;
    }

    Ok(())
}

/// Handles a single backend change event, possibly updating `db` on disk
/// and `last_applied` in memory. Shared by [`run`] and the one-shot `apply`
/// command.
pub fn handle_event(
    comms: &mut dyn Comms,
    db: &mut Database,
    event: ChangeEvent,
    last_applied: &mut Option<Arrangement>,
) -> Result<()> {
    let ChangeEvent::OutputsChanged = event;

    let outputs = comms.observe()?;
    let fingerprint = store::fingerprint(outputs.iter().map(|o| o.identity.clone()).collect());

    let observed = observed_arrangement(&outputs);

    if observed.as_ref() == last_applied.as_ref() {
        debug!("ignoring self-move, observed layout matches last applied one");
        return Ok(());
    }

    let known = db.get(&fingerprint).is_some();
    if known {
        if let Some(observed) = &observed {
            match normalize::positions_to_constraints(&sizes_of(&outputs), &observed.positions) {
                Ok(constraints) => {
                    info!(?fingerprint, "learned constraints from manual edit");
                    db.put(
                        fingerprint.clone(),
                        StoredArrangement {
                            fingerprint,
                            constraints,
                            order: identities_of(&outputs),
                        },
                    );
                    db.save()?;
                    *last_applied = Some(observed.clone());
                    return Ok(());
                }
                Err(normalize::Unsupported) => {
                    warn!(?fingerprint, "manual edit not representable, ignoring it");
                    return Ok(());
                }
            }
        }
    }

    synthesize_and_apply(comms, db, &outputs, fingerprint, last_applied)
}

/// Looks up or solves an arrangement for `outputs` and applies it,
/// persisting the result. Used both for unseen fingerprints and for the
/// one-shot `apply`/`learn` commands.
pub fn synthesize_and_apply(
    comms: &mut dyn Comms,
    db: &mut Database,
    outputs: &[ObservedOutput],
    fingerprint: store::Fingerprint,
    last_applied: &mut Option<Arrangement>,
) -> Result<()> {
    let sizes = sizes_of(outputs);
    let constraints = db
        .get(&fingerprint)
        .map(|stored| stored.constraints.clone())
        .unwrap_or_else(|| ConstraintMatrix::none(sizes.len()));

    match engine::compute_layout(BOUNDS, &sizes, &constraints)? {
        Some(arrangement) => {
            let backend_form = normalize::packing_to_backend(&arrangement);
            comms.set_arrangement(backend_form, outputs)?;
            db.put(
                fingerprint.clone(),
                StoredArrangement {
                    fingerprint,
                    constraints,
                    order: identities_of(outputs),
                },
            );
            db.save()?;
            *last_applied = Some(arrangement);
            Ok(())
        }
        None => {
            warn!(?fingerprint, "no feasible layout for current constraints");
            Ok(())
        }
    }
}

fn sizes_of(outputs: &[ObservedOutput]) -> Vec<engine::Size> {
    outputs.iter().map(|o| o.size).collect()
}

fn identities_of(outputs: &[ObservedOutput]) -> Vec<String> {
    outputs.iter().map(|o| o.identity.clone()).collect()
}

/// Reconstructs an [`Arrangement`] spanning every observed output, in the
/// same order `synthesize_and_apply` would pass to the solver, or `None` if
/// any output currently lacks a position (e.g. right after a hotplug,
/// before the WM has placed it anywhere) -- in that case the layout simply
/// can't be compared against `last_applied`, and it's treated as changed.
fn observed_arrangement(outputs: &[ObservedOutput]) -> Option<Arrangement> {
    if outputs.is_empty() {
        return None;
    }

    let positions = outputs
        .iter()
        .map(|o| o.position)
        .collect::<Option<Vec<_>>>()?;

    let bounds = outputs
        .iter()
        .zip(&positions)
        .map(|(o, pos)| (pos.x + o.size.width, pos.y + o.size.height))
        .fold((0, 0), |(mw, mh), (w, h)| (mw.max(w), mh.max(h)));

    Some(Arrangement {
        w: bounds.0,
        h: bounds.1,
        positions,
    })
}
