#![allow(dead_code)]

pub mod mock_maintenance;

pub use mock_maintenance::MockCacheMaintenancePort;
