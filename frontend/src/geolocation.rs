use std::{cell::RefCell, future::Future, rc::Rc};

use futures::channel::oneshot;
use gloo_utils::window;
use mapty_lib::{collaborators::LocationSource, error::LocationError, Coordinate};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{GeolocationPosition, GeolocationPositionError};

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<Coordinate, LocationError>>>>>;

/// `navigator.geolocation.getCurrentPosition` as a future.
pub struct BrowserLocation;

impl LocationSource for BrowserLocation {
    fn request_once(&self) -> impl Future<Output = Result<Coordinate, LocationError>> {
        let (sender, receiver) = oneshot::channel();
        let reply: Reply = Rc::new(RefCell::new(Some(sender)));

        match window().navigator().geolocation() {
            Ok(geolocation) => {
                let on_success = {
                    let reply = reply.clone();
                    Closure::once_into_js(move |position: GeolocationPosition| {
                        let coords = position.coords();
                        send(&reply, Ok(Coordinate::new(coords.latitude(), coords.longitude())));
                    })
                };
                let on_error = {
                    let reply = reply.clone();
                    Closure::once_into_js(move |err: GeolocationPositionError| {
                        send(&reply, Err(LocationError::new(err.code(), err.message())));
                    })
                };

                if let Err(err) = geolocation
                    .get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_error.unchecked_ref()))
                {
                    let message = err.as_string().unwrap_or_else(|| "Position request failed".to_owned());
                    send(&reply, Err(LocationError::new(2, message)));
                }
            }
            Err(_) => send(&reply, Err(LocationError::unsupported())),
        }

        async move {
            receiver
                .await
                .unwrap_or_else(|_| Err(LocationError::new(2, "Position request was dropped")))
        }
    }
}

fn send(reply: &Reply, result: Result<Coordinate, LocationError>) {
    if let Some(sender) = reply.borrow_mut().take() {
        let _ = sender.send(result);
    }
}
