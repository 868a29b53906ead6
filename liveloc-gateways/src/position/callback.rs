use std::sync::{Arc, Mutex};

use liveloc_core::gateways::position::{
    PositionOptions, PositionSource, RawPositionError, POSITION_UNAVAILABLE,
};
use liveloc_entities::geo::Coordinate;
use tokio::sync::oneshot;

pub type OnPosition = Box<dyn FnOnce(Coordinate) + Send>;
pub type OnPositionError = Box<dyn FnOnce(u16, String) + Send>;

/// A platform geolocation API that reports back through callbacks.
///
/// Exactly one of the callbacks is expected to be invoked. Errors
/// are reported with the platform's numeric code and a message.
pub trait GeolocationCallbackApi {
    fn get_current_position(
        &self,
        on_success: OnPosition,
        on_error: OnPositionError,
        options: &PositionOptions,
    );
}

#[derive(Debug)]
pub struct CallbackPositionSource<A> {
    api: A,
}

impl<A> CallbackPositionSource<A> {
    pub const fn new(api: A) -> Self {
        Self { api }
    }
}

type Reply = oneshot::Sender<Result<Coordinate, RawPositionError>>;

fn reply(tx: &Mutex<Option<Reply>>, result: Result<Coordinate, RawPositionError>) {
    let tx = match tx.lock() {
        Ok(mut tx) => tx.take(),
        Err(_) => None,
    };
    match tx {
        Some(tx) => {
            // The receiver is gone if the caller is not interested anymore
            let _ = tx.send(result);
        }
        None => {
            log::warn!("Position callback invoked more than once");
        }
    }
}

impl<A> PositionSource for CallbackPositionSource<A>
where
    A: GeolocationCallbackApi + Sync,
{
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinate, RawPositionError> {
        let (tx, rx) = oneshot::channel();
        let tx = Arc::new(Mutex::new(Some(tx)));
        let on_success: OnPosition = {
            let tx = Arc::clone(&tx);
            Box::new(move |pos| reply(&tx, Ok(pos)))
        };
        let on_error: OnPositionError =
            Box::new(move |code, message| reply(&tx, Err(RawPositionError::coded(code, message))));
        self.api.get_current_position(on_success, on_error, options);
        rx.await.unwrap_or_else(|_| {
            Err(RawPositionError::coded(
                POSITION_UNAVAILABLE,
                "Position callbacks were dropped",
            ))
        })
    }
}
