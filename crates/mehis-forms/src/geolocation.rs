//! One-shot geolocation capture.
//!
//! A form asks for the device position once, when it is opened. The provider
//! answers at some later point (or never) through a [`GeolocationSender`];
//! the form holds the matching [`GeolocationRequest`] and polls it without
//! blocking. There is no timeout and no cancellation.

use mehis_models::Coordinates;
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
	#[error("Location permission denied")]
	PermissionDenied,

	#[error("Position unavailable: {0}")]
	Unavailable(String),

	#[error("Location provider went away without answering")]
	Abandoned,
}

type Fix = Result<Coordinates, GeolocationError>;

/// Provider side of a pending request.
#[derive(Debug)]
pub struct GeolocationSender {
	tx: oneshot::Sender<Fix>,
}

impl GeolocationSender {
	/// Delivers a position. Returns `false` if the form is already gone.
	pub fn resolve(self, coordinates: Coordinates) -> bool {
		self.tx.send(Ok(coordinates)).is_ok()
	}

	/// Reports that no position will be delivered.
	pub fn fail(self, error: GeolocationError) -> bool {
		self.tx.send(Err(error)).is_ok()
	}
}

/// Outcome of polling a request.
#[derive(Debug, Clone, PartialEq)]
pub enum GeolocationPoll {
	Pending,
	Resolved(Coordinates),
	Failed(GeolocationError),
}

/// Form side of a pending request.
#[derive(Debug)]
pub struct GeolocationRequest {
	rx: oneshot::Receiver<Fix>,
}

impl GeolocationRequest {
	/// Checks for an answer without blocking.
	pub fn poll(&mut self) -> GeolocationPoll {
		match self.rx.try_recv() {
			Ok(Ok(coordinates)) => GeolocationPoll::Resolved(coordinates),
			Ok(Err(error)) => GeolocationPoll::Failed(error),
			Err(TryRecvError::Empty) => GeolocationPoll::Pending,
			Err(TryRecvError::Closed) => GeolocationPoll::Failed(GeolocationError::Abandoned),
		}
	}
}

/// Creates a linked sender/request pair.
///
/// # Examples
///
/// ```
/// use mehis_forms::geolocation::{self, GeolocationPoll};
/// use mehis_models::Coordinates;
///
/// let (sender, mut request) = geolocation::request();
/// assert_eq!(request.poll(), GeolocationPoll::Pending);
///
/// sender.resolve(Coordinates::new(-13.96, 33.78));
/// assert_eq!(request.poll(), GeolocationPoll::Resolved(Coordinates::new(-13.96, 33.78)));
/// ```
pub fn request() -> (GeolocationSender, GeolocationRequest) {
	let (tx, rx) = oneshot::channel();
	(GeolocationSender { tx }, GeolocationRequest { rx })
}
