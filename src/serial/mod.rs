pub mod errors;
mod buffer;
mod port;
mod traits;
mod wrapper;

#[cfg(test)]
pub(crate) mod mock_serial;

pub use errors::Error;
pub use port::new;
pub use traits::Connection;

#[cfg(test)]
pub(crate) use port::LineConnection;
