//! Request Panel state: the listing, the creation draft, and the
//! fetch/submit cycle that connects them to a backend.

pub mod api;
pub mod panel;

pub use api::SecretRequestApi;
pub use panel::{PanelFailure, RequestPanel};
