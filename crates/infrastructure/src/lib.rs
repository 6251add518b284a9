//! jsx-dns infrastructure: wire codec, upstream transports, response cache,
//! deny-list engine and zone loading.
pub mod acl;
pub mod dns;
pub mod glue;
pub mod zones;
