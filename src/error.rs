// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy.
//!
//! Only invalid input is an error. Polar day/night and any other sun
//! altitude that is never reached are represented as absent instants and
//! unbounded [`Range`](crate::Range)s, never as an `Err`.

use thiserror::Error;

/// Errors returned at the API boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("latitude {0} is outside [-90, 90] degrees")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180] degrees")]
    LongitudeOutOfRange(f64),

    #[error("altitude {0} is not a finite number of meters")]
    InvalidAltitude(f64),

    #[error("a noon instant is required to schedule the next recompute")]
    MissingNoon,

    #[error("instant is outside the representable civil time range")]
    TimeOutOfRange,
}

pub type Result<T> = std::result::Result<T, Error>;
