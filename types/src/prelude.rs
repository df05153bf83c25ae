pub use crate::geodetic::GeodeticPoint;
pub use crate::location::{Location, LocationType};
pub use crate::observation::Observation;
pub use crate::observer::{Observer, ObserverError};
pub use crate::pass::{PassEvent, PassEventKind};
pub use crate::state::InertialState;
pub use crate::time::UtcTimestamp;
pub use crate::tle::UnstructuredTle;
