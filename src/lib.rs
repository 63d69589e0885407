pub mod common;
pub mod rest;

pub use common::{
    Error,
    authentication::{Signer, sign},
    types::{Credentials, Method, PayoutRequest, PayoutResult},
};
pub use rest::{
    Client, ClientBuilder, HttpTransport, Request, Transport, withdrawals::Withdrawals,
};
