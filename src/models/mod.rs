mod vendor;
mod callback;
mod response;

pub use vendor::Vendor;
pub use callback::{CallbackRequest, CallbackResponse, CallbackStatus};
pub use response::{Coordinates, GeocodeAddress, ReverseGeocodeResponse};
