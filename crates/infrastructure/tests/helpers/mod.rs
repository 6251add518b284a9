#![allow(dead_code, unused_imports)]

pub mod builders;
pub mod dns_server_mock;
pub mod mock_ports;

pub use builders::*;
pub use dns_server_mock::*;
pub use mock_ports::*;
